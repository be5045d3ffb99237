//! One-call bundle of every derived output for a run.

use serde::Serialize;

use super::{
    baseline_afr, content_type_split, correlation_by_type, estimate_posting_rate_change,
    event_lift_by_type, extremes, lag_status, platform_reach_effect, platform_sales_effect,
    summary_by_type, top_revenue_days, CorrRow, Extremes, LagStatus, LiftRow, Overview,
    PlatformEffect, PostingProjection, SplitRow, SummaryRow, TopRevenueRow,
};
use crate::aggregate::{build_daily_aggregates, DayAggregate};
use crate::config::AnalyticsConfig;
use crate::types::{ContentEvent, DailySale};

/// Everything the presentation layer needs, computed from one input snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardReport {
    pub overview: Overview,
    pub daily: Vec<DayAggregate>,
    pub content_split: Vec<SplitRow>,
    pub extremes: Option<Extremes>,
    pub baseline_afr: f64,
    pub lift_by_type: Vec<LiftRow>,
    pub correlation_by_type: Vec<CorrRow>,
    pub top_revenue_days: Vec<TopRevenueRow>,
    pub sales_effect: PlatformEffect,
    pub reach_effect: PlatformEffect,
    pub posting_projection: PostingProjection,
    pub summary_by_type: Vec<SummaryRow>,
    /// Band used for [`DashboardReport::lag_status`]
    pub lag_band: f64,
}

impl DashboardReport {
    /// Build the aggregate table and every analytic over it.
    pub fn build(events: &[ContentEvent], sales: &[DailySale], config: &AnalyticsConfig) -> Self {
        let daily = build_daily_aggregates(events, sales);
        let report = Self::from_daily(events, daily, config);

        tracing::info!(
            days = report.overview.total_days,
            posts = report.overview.total_posts,
            baseline_afr = report.baseline_afr,
            "Dashboard report built"
        );

        report
    }

    /// Compute every analytic over an already built aggregate table.
    pub fn from_daily(
        events: &[ContentEvent],
        daily: Vec<DayAggregate>,
        config: &AnalyticsConfig,
    ) -> Self {
        let lift_by_type = event_lift_by_type(&daily);
        for lift in &lift_by_type {
            tracing::debug!(
                kind = lift.kind.key(),
                posted_days = lift.posted_days,
                lift_pct = lift.lift_pct,
                "Lift computed"
            );
        }

        Self {
            overview: Overview::compute(events, &daily),
            content_split: content_type_split(events),
            extremes: extremes(&daily),
            baseline_afr: baseline_afr(&daily),
            lift_by_type,
            correlation_by_type: correlation_by_type(&daily),
            top_revenue_days: top_revenue_days(&daily, config.top_revenue_days),
            sales_effect: platform_sales_effect(&daily),
            reach_effect: platform_reach_effect(&daily),
            posting_projection: estimate_posting_rate_change(&daily),
            summary_by_type: summary_by_type(events, &daily),
            lag_band: config.lag_band,
            daily,
        }
    }

    /// Lag status of one aggregate row against the sample's average.
    pub fn lag_status(&self, day: &DayAggregate) -> Option<LagStatus> {
        lag_status(
            day.lagged_exposure_index,
            self.overview.avg_lagged_exposure,
            self.lag_band,
        )
    }
}
