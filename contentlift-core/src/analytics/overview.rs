//! Headline numbers for a run and lag-status banding.

use serde::Serialize;

use crate::aggregate::DayAggregate;
use crate::dates::DateKey;
use crate::stats::mean;
use crate::types::ContentEvent;

/// Default half-width of the "average" lag band.
pub const DEFAULT_LAG_BAND: f64 = 0.25;

/// Headline numbers for the sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overview {
    pub first_date: Option<DateKey>,
    pub last_date: Option<DateKey>,
    pub total_posts: usize,
    pub total_days: usize,
    /// Events per aggregate day, 0 when there are no days
    pub avg_posts_per_day: f64,
    pub avg_revenue_per_day: f64,
    /// Mean lagged exposure index over rows where it is defined
    pub avg_lagged_exposure: f64,
}

impl Overview {
    pub fn compute(events: &[ContentEvent], daily: &[DayAggregate]) -> Self {
        let total_posts = events.len();
        let total_days = daily.len();
        let revenues: Vec<f64> = daily.iter().map(|d| d.revenue).collect();
        let lags: Vec<f64> = daily.iter().filter_map(|d| d.lagged_exposure_index).collect();

        Self {
            first_date: daily.first().map(|d| d.date),
            last_date: daily.last().map(|d| d.date),
            total_posts,
            total_days,
            avg_posts_per_day: if total_days == 0 {
                0.0
            } else {
                total_posts as f64 / total_days as f64
            },
            avg_revenue_per_day: mean(&revenues),
            avg_lagged_exposure: mean(&lags),
        }
    }
}

/// How a day's lagged exposure compares with the overall average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LagStatus {
    AboveAverage,
    Average,
    BelowAverage,
}

impl LagStatus {
    pub fn label(&self) -> &'static str {
        match self {
            LagStatus::AboveAverage => "Above average",
            LagStatus::Average => "Average",
            LagStatus::BelowAverage => "Below average",
        }
    }
}

/// Band a lagged exposure index against the overall average.
///
/// `None` when the day has no lagged exposure index.
pub fn lag_status(lag: Option<f64>, overall_avg: f64, band: f64) -> Option<LagStatus> {
    let delta = lag? - overall_avg;
    Some(if delta > band {
        LagStatus::AboveAverage
    } else if delta < -band {
        LagStatus::BelowAverage
    } else {
        LagStatus::Average
    })
}
