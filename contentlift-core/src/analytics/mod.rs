//! Derived analytics over the daily aggregate table.
//!
//! Every function here is a pure transform of the aggregate table (and, for
//! a few, the raw event list). Results are plain serializable values:
//! - Content-type split and per-type summary
//! - Views/revenue extremes
//! - Baseline AFR, lift and correlation by content type
//! - Top revenue days with retrospective content attribution
//! - Instagram vs TikTok sales/reach comparison
//! - Posting-rate projection
//!
//! All comparisons are correlational. Wherever a division could hit zero the
//! result falls back to a documented value, and sample sizes travel with
//! the result so callers can tell "zero" from "no data".

pub mod extremes;
pub mod leaderboard;
pub mod lift;
pub mod overview;
pub mod platform;
pub mod projection;
pub mod report;
pub mod split;

pub use extremes::{extremes, Extremes, MetricExtremes};
pub use leaderboard::{top_revenue_days, FormatCounts, TopRevenueRow, DEFAULT_TOP_N};
pub use lift::{
    baseline_afr, correlation_by_type, event_lift_by_type, summary_by_type, CorrRow, LiftBadge,
    LiftRow, SummaryRow,
};
pub use overview::{lag_status, LagStatus, Overview};
pub use platform::{platform_reach_effect, platform_sales_effect, PlatformEffect, Winner};
pub use projection::{estimate_posting_rate_change, PostingProjection};
pub use report::DashboardReport;
pub use split::{content_type_split, SplitRow};

/// Percentage change of `value` relative to `reference`, or 0 when the
/// reference is exactly zero.
pub(crate) fn pct_change(value: f64, reference: f64) -> f64 {
    if reference == 0.0 {
        0.0
    } else {
        (value - reference) / reference * 100.0
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pct_change() {
        assert_eq!(pct_change(150.0, 100.0), 50.0);
        assert_eq!(pct_change(50.0, 100.0), -50.0);
        assert_eq!(pct_change(50.0, 0.0), 0.0);
    }
}
