//! Top revenue days with retrospective content attribution.
//!
//! For each of the highest-revenue days, the two preceding days are looked
//! up directly in the aggregate table and their Reach Index and per-type
//! counts are summed. A preceding day with no row contributes zero rather
//! than being dropped, so a sparse window is never averaged up.

use std::collections::HashMap;

use serde::Serialize;

use super::pct_change;
use crate::aggregate::DayAggregate;
use crate::dates::DateKey;
use crate::stats::mean;

/// Default leaderboard length.
pub const DEFAULT_TOP_N: usize = 3;

/// Content published over the two days before a leaderboard day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FormatCounts {
    pub reels: u64,
    pub stories: u64,
    pub posts: u64,
    pub tiktok: u64,
    pub total_posts: u64,
}

/// One leaderboard entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopRevenueRow {
    /// 1-based rank
    pub rank: usize,
    pub date: DateKey,
    pub revenue: f64,
    /// Revenue relative to the all-days mean, in percent (0 if the mean is 0)
    pub revenue_delta_pct: f64,
    /// Reach Index of D-1 plus D-2
    pub reach_past_2_days: u64,
    pub formats_past_2_days: FormatCounts,
}

/// The `top_n` highest-revenue days, best first.
///
/// Sorting is stable, so days with equal revenue keep ascending date order.
pub fn top_revenue_days(daily: &[DayAggregate], top_n: usize) -> Vec<TopRevenueRow> {
    let revenues: Vec<f64> = daily.iter().map(|d| d.revenue).collect();
    let avg_revenue = mean(&revenues);
    let by_date: HashMap<DateKey, &DayAggregate> = daily.iter().map(|d| (d.date, d)).collect();

    let mut ranked: Vec<&DayAggregate> = daily.iter().collect();
    ranked.sort_by(|a, b| b.revenue.total_cmp(&a.revenue));

    ranked
        .into_iter()
        .take(top_n)
        .enumerate()
        .map(|(idx, day)| {
            let window = [
                by_date.get(&day.date.add_days(-1)),
                by_date.get(&day.date.add_days(-2)),
            ];

            let mut reach_past_2_days: u64 = 0;
            let mut formats = FormatCounts::default();
            for prior in window.into_iter().flatten() {
                reach_past_2_days = prior.reach_index.saturating_add(reach_past_2_days);
                formats.reels += prior.reel_count;
                formats.stories += prior.story_count;
                formats.posts += prior.post_count;
                formats.tiktok += prior.video_count;
            }
            formats.total_posts = formats.reels + formats.stories + formats.posts + formats.tiktok;

            TopRevenueRow {
                rank: idx + 1,
                date: day.date,
                revenue: day.revenue,
                revenue_delta_pct: pct_change(day.revenue, avg_revenue),
                reach_past_2_days,
                formats_past_2_days: formats,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::test_support::day;

    #[test]
    fn test_empty_table() {
        assert!(top_revenue_days(&[], DEFAULT_TOP_N).is_empty());
    }

    #[test]
    fn test_ranking_and_stable_ties() {
        let daily = vec![
            day("2025-12-01", 100.0, None),
            day("2025-12-02", 400.0, None),
            day("2025-12-03", 250.0, None),
            day("2025-12-04", 250.0, None),
            day("2025-12-05", 0.0, None),
        ];
        let top = top_revenue_days(&daily, 3);
        let dates: Vec<String> = top.iter().map(|r| r.date.to_string()).collect();
        assert_eq!(dates, vec!["2025-12-02", "2025-12-03", "2025-12-04"]);
        assert_eq!(top.iter().map(|r| r.rank).collect::<Vec<_>>(), vec![1, 2, 3]);
        // mean revenue is 200
        assert_eq!(top[0].revenue_delta_pct, 100.0);
        assert_eq!(top[1].revenue_delta_pct, 25.0);
    }

    #[test]
    fn test_top_n_larger_than_table() {
        let daily = vec![day("2025-12-01", 10.0, None)];
        assert_eq!(top_revenue_days(&daily, 10).len(), 1);
    }

    #[test]
    fn test_retrospective_window_sums_missing_days_as_zero() {
        let mut daily = vec![
            day("2025-12-01", 10.0, None),
            day("2025-12-03", 500.0, None),
            day("2025-12-04", 900.0, None),
        ];
        daily[0].reach_index = 70;
        daily[0].reel_count = 2;
        daily[1].reach_index = 30;
        daily[1].video_count = 1;
        daily[1].story_count = 1;

        let top = top_revenue_days(&daily, 2);

        // 12-04 looks back to 12-03 (present) and 12-02 (absent)
        assert_eq!(top[0].date.to_string(), "2025-12-04");
        assert_eq!(top[0].reach_past_2_days, 30);
        assert_eq!(
            top[0].formats_past_2_days,
            FormatCounts {
                reels: 0,
                stories: 1,
                posts: 0,
                tiktok: 1,
                total_posts: 2,
            }
        );

        // 12-03 looks back to 12-02 (absent) and 12-01 (present)
        assert_eq!(top[1].reach_past_2_days, 70);
        assert_eq!(top[1].formats_past_2_days.reels, 2);
        assert_eq!(top[1].formats_past_2_days.total_posts, 2);
    }

    #[test]
    fn test_zero_mean_revenue_gives_zero_delta() {
        let daily = vec![day("2025-12-01", 0.0, None), day("2025-12-02", 0.0, None)];
        let top = top_revenue_days(&daily, 3);
        assert!(top.iter().all(|r| r.revenue_delta_pct == 0.0));
    }
}
