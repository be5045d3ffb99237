//! Input domain types.
//!
//! Two immutable streams feed the engine:
//!
//! | Term | Definition |
//! |------|------------|
//! | **ContentEvent** | One published piece of content with its engagement counters |
//! | **DailySale** | Revenue and order totals for one calendar day |
//! | **ContentKind** | The platform/format bucket a piece of content belongs to |
//!
//! Source data carries `platform` and `type` as separate fields, but only four
//! combinations are meaningful. [`ContentKind`] collapses the pair into one
//! variant so the illegal ones (an Instagram "video", a TikTok "reel") cannot
//! be represented once an event has been decoded.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::dates::{to_date_key, DateKey};
use crate::error::Error;

// ============================================
// Platform / ContentKind
// ============================================

/// Publishing platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
    #[serde(rename = "tiktok")]
    TikTok,
}

impl Platform {
    /// Both platforms, Instagram first.
    pub const ALL: [Platform; 2] = [Platform::Instagram, Platform::TikTok];

    /// Display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Instagram => "Instagram",
            Platform::TikTok => "TikTok",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Raw content format as written in the source data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentFormat {
    Reel,
    Story,
    Post,
    Video,
}

/// One of the four legal platform/format combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ContentKind {
    /// Instagram static post
    #[serde(rename = "post")]
    InstagramPost,
    /// Instagram reel
    #[serde(rename = "reel")]
    InstagramReel,
    /// Instagram story
    #[serde(rename = "story")]
    InstagramStory,
    /// TikTok video
    #[serde(rename = "tiktok")]
    TikTokVideo,
}

impl ContentKind {
    /// Every bucket, in reporting order.
    pub const ALL: [ContentKind; 4] = [
        ContentKind::InstagramPost,
        ContentKind::InstagramReel,
        ContentKind::InstagramStory,
        ContentKind::TikTokVideo,
    ];

    /// Combine a platform and a format, rejecting illegal pairs.
    pub fn from_parts(platform: Platform, format: ContentFormat) -> Option<Self> {
        match (platform, format) {
            (Platform::Instagram, ContentFormat::Post) => Some(ContentKind::InstagramPost),
            (Platform::Instagram, ContentFormat::Reel) => Some(ContentKind::InstagramReel),
            (Platform::Instagram, ContentFormat::Story) => Some(ContentKind::InstagramStory),
            (Platform::TikTok, ContentFormat::Video) => Some(ContentKind::TikTokVideo),
            _ => None,
        }
    }

    pub fn platform(&self) -> Platform {
        match self {
            ContentKind::TikTokVideo => Platform::TikTok,
            _ => Platform::Instagram,
        }
    }

    pub fn format(&self) -> ContentFormat {
        match self {
            ContentKind::InstagramPost => ContentFormat::Post,
            ContentKind::InstagramReel => ContentFormat::Reel,
            ContentKind::InstagramStory => ContentFormat::Story,
            ContentKind::TikTokVideo => ContentFormat::Video,
        }
    }

    /// Short stable key (`post`, `reel`, `story`, `tiktok`).
    pub fn key(&self) -> &'static str {
        match self {
            ContentKind::InstagramPost => "post",
            ContentKind::InstagramReel => "reel",
            ContentKind::InstagramStory => "story",
            ContentKind::TikTokVideo => "tiktok",
        }
    }

    /// Human-readable label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            ContentKind::InstagramPost => "IG Static posts",
            ContentKind::InstagramReel => "IG Reels",
            ContentKind::InstagramStory => "IG Stories",
            ContentKind::TikTokVideo => "TikTok videos",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================
// Content events
// ============================================

/// Engagement counters for one piece of content. Absent counters are zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Engagement {
    pub views: u64,
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
    pub saves: u64,
}

impl Engagement {
    /// Reach Index: views + likes + comments + shares. Saves are not counted.
    ///
    /// Saturates at `u64::MAX`.
    pub fn reach_index(&self) -> u64 {
        self.views
            .saturating_add(self.likes)
            .saturating_add(self.comments)
            .saturating_add(self.shares)
    }
}

/// A published piece of content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawContentEvent", into = "RawContentEvent")]
pub struct ContentEvent {
    pub id: String,
    pub kind: ContentKind,
    pub published_at: DateTime<Utc>,
    pub title: Option<String>,
    pub engagement: Engagement,
}

impl ContentEvent {
    /// UTC calendar day this event was published on.
    pub fn date_key(&self) -> DateKey {
        to_date_key(self.published_at)
    }

    pub fn platform(&self) -> Platform {
        self.kind.platform()
    }

    pub fn reach_index(&self) -> u64 {
        self.engagement.reach_index()
    }
}

/// Wire shape of a content event: flat counters, separate platform and type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawContentEvent {
    id: String,
    platform: Platform,
    #[serde(rename = "type")]
    format: ContentFormat,
    #[serde(
        deserialize_with = "crate::dates::deserialize_instant",
        serialize_with = "serialize_instant"
    )]
    published_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(flatten)]
    engagement: Engagement,
}

fn serialize_instant<S>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&ts.to_rfc3339_opts(chrono::SecondsFormat::Secs, true))
}

impl TryFrom<RawContentEvent> for ContentEvent {
    type Error = Error;

    fn try_from(raw: RawContentEvent) -> Result<Self, Self::Error> {
        let kind = ContentKind::from_parts(raw.platform, raw.format).ok_or_else(|| {
            Error::InvalidContent {
                id: raw.id.clone(),
                message: format!(
                    "type {:?} is not published on {}",
                    raw.format,
                    raw.platform.display_name()
                ),
            }
        })?;

        Ok(ContentEvent {
            id: raw.id,
            kind,
            published_at: raw.published_at,
            title: raw.title,
            engagement: raw.engagement,
        })
    }
}

impl From<ContentEvent> for RawContentEvent {
    fn from(event: ContentEvent) -> Self {
        RawContentEvent {
            id: event.id,
            platform: event.kind.platform(),
            format: event.kind.format(),
            published_at: event.published_at,
            title: event.title,
            engagement: event.engagement,
        }
    }
}

// ============================================
// Sales
// ============================================

/// Sales totals for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySale {
    pub date: DateKey,
    pub revenue: f64,
    #[serde(default)]
    pub orders: u64,
    /// Units sold per product, if the source breaks them down
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub units_sold: BTreeMap<String, u64>,
}

impl DailySale {
    pub fn new(date: DateKey, revenue: f64, orders: u64) -> Self {
        Self {
            date,
            revenue,
            orders,
            units_sold: BTreeMap::new(),
        }
    }
}
