//! Daily aggregation: joins content events and sales on UTC date keys.
//!
//! The aggregate table has exactly one row per date present in the sales
//! input, sorted ascending. Dates that only appear in the content stream
//! never get a row of their own, but their post counts still feed the
//! backward-looking lag features of neighbouring sales days.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::dates::DateKey;
use crate::stats::mean_of_present;
use crate::types::{ContentEvent, ContentKind, DailySale, Engagement, Platform};

/// One day of joined content and sales data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayAggregate {
    pub date: DateKey,

    // Same-day content counts
    /// Total content events published this day
    pub posts_count: u64,
    /// Instagram events (posts + reels + stories)
    pub ig_count: u64,
    /// TikTok events
    pub tt_count: u64,
    pub reel_count: u64,
    pub story_count: u64,
    pub post_count: u64,
    pub video_count: u64,

    // Same-day engagement
    pub views: u64,
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
    /// views + likes + comments + shares (saves excluded)
    pub reach_index: u64,

    // Same-day sales
    pub revenue: f64,
    pub orders: u64,

    // Backward posting features
    /// Events published the day before, if that day is known
    pub posts_yesterday: Option<u64>,
    /// Events published two days before, if that day is known
    pub posts_two_days_ago: Option<u64>,
    /// Mean of whichever of the two lagged counts exist
    pub lagged_exposure_index: Option<f64>,

    // Forward revenue features
    pub revenue_plus_1: Option<f64>,
    pub revenue_plus_2: Option<f64>,
    /// Average Future Revenue: mean of whichever of the two exist
    pub afr: Option<f64>,
}

impl DayAggregate {
    /// Same-day count for one content bucket.
    pub fn count(&self, kind: ContentKind) -> u64 {
        match kind {
            ContentKind::InstagramPost => self.post_count,
            ContentKind::InstagramReel => self.reel_count,
            ContentKind::InstagramStory => self.story_count,
            ContentKind::TikTokVideo => self.video_count,
        }
    }

    /// Same-day count for one platform.
    pub fn platform_count(&self, platform: Platform) -> u64 {
        match platform {
            Platform::Instagram => self.ig_count,
            Platform::TikTok => self.tt_count,
        }
    }

    fn from_day(date: DateKey, events: &[&ContentEvent], sale: &DailySale) -> Self {
        let count_kind = |kind: ContentKind| events.iter().filter(|e| e.kind == kind).count() as u64;
        let count_platform =
            |platform: Platform| events.iter().filter(|e| e.platform() == platform).count() as u64;

        let views = sum_counter(events, |g| g.views);
        let likes = sum_counter(events, |g| g.likes);
        let comments = sum_counter(events, |g| g.comments);
        let shares = sum_counter(events, |g| g.shares);

        Self {
            date,
            posts_count: events.len() as u64,
            ig_count: count_platform(Platform::Instagram),
            tt_count: count_platform(Platform::TikTok),
            reel_count: count_kind(ContentKind::InstagramReel),
            story_count: count_kind(ContentKind::InstagramStory),
            post_count: count_kind(ContentKind::InstagramPost),
            video_count: count_kind(ContentKind::TikTokVideo),
            views,
            likes,
            comments,
            shares,
            reach_index: views
                .saturating_add(likes)
                .saturating_add(comments)
                .saturating_add(shares),
            revenue: sale.revenue,
            orders: sale.orders,
            posts_yesterday: None,
            posts_two_days_ago: None,
            lagged_exposure_index: None,
            revenue_plus_1: None,
            revenue_plus_2: None,
            afr: None,
        }
    }
}

/// Sum one engagement counter over a day's events, saturating at `u64::MAX`.
fn sum_counter(events: &[&ContentEvent], counter: fn(&Engagement) -> u64) -> u64 {
    events
        .iter()
        .fold(0, |acc, e| acc.saturating_add(counter(&e.engagement)))
}

/// Build the daily aggregate table.
///
/// Sales are indexed by date (a repeated date keeps the last record). For
/// every sales date, in ascending order, the row carries that day's content
/// counts and engagement sums, the day's revenue and orders, revenue at +1
/// and +2 days with their mean as AFR, and post counts at -1 and -2 days with
/// their mean as the lagged exposure index.
///
/// Lagged post counts are looked up in the set of known days: every sales
/// date (zero if nothing was published) and every date with at least one
/// event. A day outside both sets yields `None`.
pub fn build_daily_aggregates(events: &[ContentEvent], sales: &[DailySale]) -> Vec<DayAggregate> {
    let mut events_by_date: BTreeMap<DateKey, Vec<&ContentEvent>> = BTreeMap::new();
    for event in events {
        events_by_date.entry(event.date_key()).or_default().push(event);
    }

    let mut sales_by_date: BTreeMap<DateKey, &DailySale> = BTreeMap::new();
    for sale in sales {
        sales_by_date.insert(sale.date, sale);
    }

    let revenue_on = |date: DateKey| sales_by_date.get(&date).map(|s| s.revenue);

    // BTreeMap iteration gives ascending date order.
    let mut rows: Vec<DayAggregate> = sales_by_date
        .iter()
        .map(|(&date, sale)| {
            let day_events = events_by_date.get(&date).map(Vec::as_slice).unwrap_or(&[]);
            let mut row = DayAggregate::from_day(date, day_events, sale);

            row.revenue_plus_1 = revenue_on(date.add_days(1));
            row.revenue_plus_2 = revenue_on(date.add_days(2));
            row.afr = mean_of_present(row.revenue_plus_1, row.revenue_plus_2);
            row
        })
        .collect();

    let mut posts_by_date: BTreeMap<DateKey, u64> =
        sales_by_date.keys().map(|&date| (date, 0)).collect();
    for (&date, day_events) in &events_by_date {
        posts_by_date.insert(date, day_events.len() as u64);
    }

    for row in &mut rows {
        row.posts_yesterday = posts_by_date.get(&row.date.add_days(-1)).copied();
        row.posts_two_days_ago = posts_by_date.get(&row.date.add_days(-2)).copied();
        row.lagged_exposure_index = mean_of_present(
            row.posts_yesterday.map(|n| n as f64),
            row.posts_two_days_ago.map(|n| n as f64),
        );
    }

    tracing::debug!(
        events = events.len(),
        sales = sales.len(),
        content_days = events_by_date.len(),
        rows = rows.len(),
        "Built daily aggregates"
    );

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::parse_instant;

    fn key(s: &str) -> DateKey {
        s.parse().unwrap()
    }

    fn sale(date: &str, revenue: f64) -> DailySale {
        DailySale::new(key(date), revenue, 1)
    }

    fn event(id: &str, kind: ContentKind, ts: &str, views: u64, likes: u64) -> ContentEvent {
        ContentEvent {
            id: id.to_string(),
            kind,
            published_at: parse_instant(ts).unwrap(),
            title: None,
            engagement: Engagement {
                views,
                likes,
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_empty_sales_gives_empty_table() {
        let events = vec![event("a", ContentKind::InstagramReel, "2025-12-01T10:00:00Z", 1, 1)];
        assert!(build_daily_aggregates(&events, &[]).is_empty());
    }

    #[test]
    fn test_rows_follow_sorted_unique_sales_dates() {
        let sales = vec![
            sale("2025-12-03", 3.0),
            sale("2025-12-01", 1.0),
            sale("2025-12-10", 10.0),
        ];
        let rows = build_daily_aggregates(&[], &sales);
        let dates: Vec<String> = rows.iter().map(|r| r.date.to_string()).collect();
        assert_eq!(dates, vec!["2025-12-01", "2025-12-03", "2025-12-10"]);
    }

    #[test]
    fn test_duplicate_sales_date_keeps_last_record() {
        let sales = vec![sale("2025-12-01", 1.0), sale("2025-12-01", 9.0)];
        let rows = build_daily_aggregates(&[], &sales);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].revenue, 9.0);
    }

    #[test]
    fn test_end_to_end_three_day_scenario() {
        let sales = vec![
            sale("2025-12-01", 100.0),
            sale("2025-12-02", 200.0),
            sale("2025-12-03", 300.0),
        ];
        let events = vec![event("r1", ContentKind::InstagramReel, "2025-12-01T12:00:00Z", 10, 5)];
        let rows = build_daily_aggregates(&events, &sales);

        let d1 = &rows[0];
        assert_eq!(d1.reel_count, 1);
        assert_eq!(d1.ig_count, 1);
        assert_eq!(d1.reach_index, 15);
        assert_eq!(d1.revenue_plus_1, Some(200.0));
        assert_eq!(d1.revenue_plus_2, Some(300.0));
        assert_eq!(d1.afr, Some(250.0));

        let d2 = &rows[1];
        assert_eq!(d2.posts_yesterday, Some(1));
        assert_eq!(d2.posts_two_days_ago, None);
        assert_eq!(d2.lagged_exposure_index, Some(1.0));
        assert_eq!(d2.afr, Some(300.0));

        let d3 = &rows[2];
        assert_eq!(d3.posts_yesterday, Some(0));
        assert_eq!(d3.posts_two_days_ago, Some(1));
        assert_eq!(d3.lagged_exposure_index, Some(0.5));
        assert_eq!(d3.afr, None);
    }

    #[test]
    fn test_afr_uses_single_present_day() {
        // Sales on D and D+1 only
        let sales = vec![sale("2025-12-05", 50.0), sale("2025-12-06", 80.0)];
        let rows = build_daily_aggregates(&[], &sales);
        assert_eq!(rows[0].afr, Some(80.0));
        assert_eq!(rows[0].revenue_plus_2, None);
        assert_eq!(rows[1].afr, None);
    }

    #[test]
    fn test_afr_skips_gap_at_plus_one() {
        let sales = vec![sale("2025-12-05", 50.0), sale("2025-12-07", 70.0)];
        let rows = build_daily_aggregates(&[], &sales);
        assert_eq!(rows[0].revenue_plus_1, None);
        assert_eq!(rows[0].afr, Some(70.0));
    }

    #[test]
    fn test_content_only_day_feeds_lag_without_row() {
        let sales = vec![sale("2025-12-02", 20.0)];
        let events = vec![
            event("a", ContentKind::TikTokVideo, "2025-12-01T09:00:00Z", 5, 0),
            event("b", ContentKind::InstagramStory, "2025-12-01T19:00:00Z", 5, 0),
        ];
        let rows = build_daily_aggregates(&events, &sales);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].posts_count, 0);
        assert_eq!(rows[0].posts_yesterday, Some(2));
        assert_eq!(rows[0].posts_two_days_ago, None);
        assert_eq!(rows[0].lagged_exposure_index, Some(2.0));
    }

    #[test]
    fn test_same_day_counts_and_engagement() {
        let sales = vec![sale("2025-12-01", 10.0)];
        let events = vec![
            event("a", ContentKind::InstagramPost, "2025-12-01T01:00:00Z", 100, 10),
            event("b", ContentKind::InstagramPost, "2025-12-01T02:00:00Z", 50, 5),
            event("c", ContentKind::TikTokVideo, "2025-12-01T23:59:59Z", 1000, 1),
            event("d", ContentKind::InstagramReel, "2025-12-02T00:00:00Z", 7, 7),
        ];
        let rows = build_daily_aggregates(&events, &sales);
        let row = &rows[0];
        assert_eq!(row.posts_count, 3);
        assert_eq!(row.post_count, 2);
        assert_eq!(row.video_count, 1);
        assert_eq!(row.reel_count, 0);
        assert_eq!(row.ig_count, 2);
        assert_eq!(row.tt_count, 1);
        assert_eq!(row.views, 1150);
        assert_eq!(row.likes, 16);
        assert_eq!(row.reach_index, 1166);
        assert_eq!(row.count(ContentKind::InstagramPost), 2);
        assert_eq!(row.platform_count(Platform::TikTok), 1);
    }

    #[test]
    fn test_huge_counters_saturate() {
        let sales = vec![sale("2025-12-01", 10.0)];
        let events = vec![
            event("a", ContentKind::InstagramReel, "2025-12-01T01:00:00Z", u64::MAX, 1),
            event("b", ContentKind::InstagramReel, "2025-12-01T02:00:00Z", 5, 0),
        ];
        let rows = build_daily_aggregates(&events, &sales);
        assert_eq!(rows[0].views, u64::MAX);
        assert_eq!(rows[0].likes, 1);
        assert_eq!(rows[0].reach_index, u64::MAX);
    }
}
