//! Instagram vs TikTok comparison on a daily metric.

use serde::Serialize;

use crate::aggregate::DayAggregate;
use crate::stats::mean;
use crate::types::Platform;

/// Which platform came out ahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Instagram,
    #[serde(rename = "tiktok")]
    TikTok,
    Tie,
}

impl Winner {
    pub fn platform(&self) -> Option<Platform> {
        match self {
            Winner::Instagram => Some(Platform::Instagram),
            Winner::TikTok => Some(Platform::TikTok),
            Winner::Tie => None,
        }
    }
}

/// Mean of a metric on each platform's posting days, and how they compare.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlatformEffect {
    /// Mean on days with at least one Instagram event
    pub ig: f64,
    /// Mean on days with at least one TikTok event
    pub tt: f64,
    /// Instagram relative to TikTok, in percent
    pub pct_diff: f64,
    pub winner: Winner,
}

impl PlatformEffect {
    /// Compare the two means.
    ///
    /// Degenerate cases: both zero is a tie at 0%; only TikTok zero is
    /// +100% for Instagram; only Instagram zero is -100% for TikTok.
    pub fn compare(ig: f64, tt: f64) -> Self {
        let (pct_diff, winner) = if ig == 0.0 && tt == 0.0 {
            (0.0, Winner::Tie)
        } else if tt == 0.0 {
            (100.0, Winner::Instagram)
        } else if ig == 0.0 {
            (-100.0, Winner::TikTok)
        } else {
            let pct = (ig - tt) / tt.abs() * 100.0;
            let winner = if pct > 0.0 {
                Winner::Instagram
            } else if pct < 0.0 {
                Winner::TikTok
            } else {
                Winner::Tie
            };
            (pct, winner)
        };

        Self {
            ig,
            tt,
            pct_diff,
            winner,
        }
    }
}

/// Mean of `metric` over days where `platform` posted. A day where the
/// metric is undefined is skipped.
fn platform_mean(
    daily: &[DayAggregate],
    platform: Platform,
    metric: impl Fn(&DayAggregate) -> Option<f64>,
) -> f64 {
    let values: Vec<f64> = daily
        .iter()
        .filter(|d| d.platform_count(platform) > 0)
        .filter_map(metric)
        .collect();
    mean(&values)
}

fn compare_platforms(
    daily: &[DayAggregate],
    metric: impl Fn(&DayAggregate) -> Option<f64> + Copy,
) -> PlatformEffect {
    PlatformEffect::compare(
        platform_mean(daily, Platform::Instagram, metric),
        platform_mean(daily, Platform::TikTok, metric),
    )
}

/// Sales effect: mean AFR on Instagram days vs TikTok days.
pub fn platform_sales_effect(daily: &[DayAggregate]) -> PlatformEffect {
    compare_platforms(daily, |d| d.afr)
}

/// Reach effect: mean daily Reach Index on Instagram days vs TikTok days.
pub fn platform_reach_effect(daily: &[DayAggregate]) -> PlatformEffect {
    compare_platforms(daily, |d| Some(d.reach_index as f64))
}
