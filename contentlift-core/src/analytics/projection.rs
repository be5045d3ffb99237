//! Posting-rate scenario: what happens to AFR going from ~2 to 3+ posts a day.

use serde::Serialize;

use super::lift::baseline_afr;
use super::pct_change;
use crate::aggregate::DayAggregate;
use crate::stats::mean;

/// Observed AFR at two posting rates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostingProjection {
    /// Mean AFR on days with exactly 2 posts (baseline AFR if there are none)
    pub from_afr: f64,
    /// Mean AFR on days with 3 or more posts (baseline AFR if there are none)
    pub to_afr: f64,
    /// Change from `from_afr` to `to_afr` in percent, 0 if `from_afr` is 0
    pub pct_increase: f64,
    /// Days with exactly 2 posts and a defined AFR
    pub sample_2: usize,
    /// Days with 3+ posts and a defined AFR
    pub sample_3: usize,
}

/// Compare mean AFR on 2-post days against 3+-post days.
///
/// An empty bucket borrows the overall baseline AFR; the sample sizes show
/// when that has happened.
pub fn estimate_posting_rate_change(daily: &[DayAggregate]) -> PostingProjection {
    let afr_where = |pred: fn(u64) -> bool| -> Vec<f64> {
        daily
            .iter()
            .filter(|d| pred(d.posts_count))
            .filter_map(|d| d.afr)
            .collect()
    };
    let two = afr_where(|n| n == 2);
    let three_plus = afr_where(|n| n >= 3);

    let baseline = baseline_afr(daily);
    let bucket_mean = |values: &[f64]| {
        if values.is_empty() {
            baseline
        } else {
            mean(values)
        }
    };

    let from_afr = bucket_mean(two.as_slice());
    let to_afr = bucket_mean(three_plus.as_slice());

    PostingProjection {
        from_afr,
        to_afr,
        pct_increase: pct_change(to_afr, from_afr),
        sample_2: two.len(),
        sample_3: three_plus.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::test_support::day;

    fn with_posts(date: &str, posts: u64, afr: Option<f64>) -> DayAggregate {
        let mut d = day(date, 0.0, afr);
        d.posts_count = posts;
        d
    }

    #[test]
    fn test_projection_with_both_buckets() {
        let daily = vec![
            with_posts("2025-12-01", 2, Some(100.0)),
            with_posts("2025-12-02", 2, Some(300.0)),
            with_posts("2025-12-03", 3, Some(250.0)),
            with_posts("2025-12-04", 5, Some(350.0)),
            with_posts("2025-12-05", 1, Some(1000.0)),
            with_posts("2025-12-06", 4, None),
        ];
        let p = estimate_posting_rate_change(&daily);
        assert_eq!(p.from_afr, 200.0);
        assert_eq!(p.to_afr, 300.0);
        assert_eq!(p.pct_increase, 50.0);
        assert_eq!(p.sample_2, 2);
        assert_eq!(p.sample_3, 2);
    }

    #[test]
    fn test_empty_bucket_falls_back_to_baseline() {
        let daily = vec![
            with_posts("2025-12-01", 2, Some(100.0)),
            with_posts("2025-12-02", 0, Some(300.0)),
        ];
        let p = estimate_posting_rate_change(&daily);
        assert_eq!(p.from_afr, 100.0);
        assert_eq!(p.to_afr, 200.0);
        assert_eq!(p.pct_increase, 100.0);
        assert_eq!(p.sample_3, 0);
    }

    #[test]
    fn test_no_data_is_all_zero() {
        let p = estimate_posting_rate_change(&[]);
        assert_eq!(p.from_afr, 0.0);
        assert_eq!(p.to_afr, 0.0);
        assert_eq!(p.pct_increase, 0.0);
        assert_eq!((p.sample_2, p.sample_3), (0, 0));
    }
}
