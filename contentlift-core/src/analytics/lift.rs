//! Revenue lift and correlation by content type.
//!
//! AFR (Average Future Revenue) is the forward-looking revenue signal for a
//! day. A bucket's lift compares the mean AFR of days on which that bucket
//! was posted against the baseline AFR of all days.

use serde::Serialize;

use super::pct_change;
use crate::aggregate::DayAggregate;
use crate::stats::{mean, pearson_correlation, round_half_up};
use crate::types::{ContentEvent, ContentKind};

/// Mean AFR over rows where AFR is defined. Rows without AFR are excluded,
/// not counted as zero.
pub fn baseline_afr(daily: &[DayAggregate]) -> f64 {
    mean(&defined_afr(daily.iter()))
}

/// AFR values of posted days for one bucket (nulls dropped).
fn posted_afr(daily: &[DayAggregate], kind: ContentKind) -> Vec<f64> {
    defined_afr(daily.iter().filter(|d| d.count(kind) > 0))
}

fn defined_afr<'a>(rows: impl Iterator<Item = &'a DayAggregate>) -> Vec<f64> {
    rows.filter_map(|d| d.afr).collect()
}

/// Lift of one content bucket over the baseline AFR.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LiftRow {
    pub kind: ContentKind,
    /// Posted days that carry an AFR value
    pub posted_days: usize,
    pub baseline_afr: f64,
    /// Mean AFR on posted days (0 if there are none)
    pub avg_afr_posted: f64,
    /// `(avg_afr_posted - baseline) / baseline * 100`, 0 when the baseline is 0
    pub lift_pct: f64,
}

impl LiftRow {
    pub fn badge(&self) -> LiftBadge {
        LiftBadge::from_lift(self.lift_pct)
    }
}

/// Lift vs. baseline AFR for each content bucket.
pub fn event_lift_by_type(daily: &[DayAggregate]) -> Vec<LiftRow> {
    let baseline = baseline_afr(daily);

    ContentKind::ALL
        .iter()
        .map(|&kind| {
            let values = posted_afr(daily, kind);
            let avg = mean(&values);
            LiftRow {
                kind,
                posted_days: values.len(),
                baseline_afr: baseline,
                avg_afr_posted: avg,
                lift_pct: pct_change(avg, baseline),
            }
        })
        .collect()
}

/// Correlation between a bucket's daily count and AFR.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrRow {
    pub kind: ContentKind,
    pub r: f64,
    /// Rows with a defined AFR
    pub n: usize,
}

/// Pearson correlation of same-day bucket count against AFR, per bucket.
///
/// Only rows with a defined AFR take part.
pub fn correlation_by_type(daily: &[DayAggregate]) -> Vec<CorrRow> {
    ContentKind::ALL
        .iter()
        .map(|&kind| {
            let (xs, ys): (Vec<f64>, Vec<f64>) = daily
                .iter()
                .filter_map(|d| d.afr.map(|afr| (d.count(kind) as f64, afr)))
                .unzip();
            let corr = pearson_correlation(&xs, &ys);
            CorrRow {
                kind,
                r: corr.r,
                n: xs.len(),
            }
        })
        .collect()
}

/// Per-bucket summary combining per-post reach with day-level AFR lift.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub kind: ContentKind,
    /// Mean Reach Index per event of this kind
    pub avg_reach_index: f64,
    /// Mean AFR on days this kind was posted
    pub avg_afr: f64,
    pub lift_vs_baseline_pct: f64,
    pub posted_days: usize,
    /// Number of events of this kind
    pub post_count: usize,
}

/// Per-bucket summary table.
pub fn summary_by_type(events: &[ContentEvent], daily: &[DayAggregate]) -> Vec<SummaryRow> {
    let baseline = baseline_afr(daily);

    ContentKind::ALL
        .iter()
        .map(|&kind| {
            let reach: Vec<f64> = events
                .iter()
                .filter(|e| e.kind == kind)
                .map(|e| e.reach_index() as f64)
                .collect();
            let afr = posted_afr(daily, kind);
            let avg_afr = mean(&afr);

            SummaryRow {
                kind,
                avg_reach_index: mean(&reach),
                avg_afr,
                lift_vs_baseline_pct: pct_change(avg_afr, baseline),
                posted_days: afr.len(),
                post_count: reach.len(),
            }
        })
        .collect()
}

/// Qualitative label for a lift percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LiftBadge {
    Strong,
    Moderate,
    Neutral,
    Weak,
}

impl LiftBadge {
    /// Classify a lift after rounding to whole percent (halves round up).
    pub fn from_lift(lift_pct: f64) -> Self {
        let rounded = round_half_up(lift_pct);
        if rounded >= 10.0 {
            LiftBadge::Strong
        } else if rounded >= 3.0 {
            LiftBadge::Moderate
        } else if rounded <= -5.0 {
            LiftBadge::Weak
        } else {
            LiftBadge::Neutral
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LiftBadge::Strong => "Strong",
            LiftBadge::Moderate => "Moderate",
            LiftBadge::Neutral => "Neutral",
            LiftBadge::Weak => "Weak",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::test_support::day;
    use crate::dates::parse_instant;
    use crate::types::Engagement;

    fn find<T>(rows: &[T], kind: ContentKind, key: impl Fn(&T) -> ContentKind) -> &T {
        rows.iter().find(|r| key(r) == kind).unwrap()
    }

    fn sample() -> Vec<DayAggregate> {
        let mut daily = vec![
            day("2025-12-01", 0.0, Some(100.0)),
            day("2025-12-02", 0.0, Some(200.0)),
            day("2025-12-03", 0.0, Some(300.0)),
            day("2025-12-04", 0.0, None),
        ];
        daily[1].reel_count = 1;
        daily[2].reel_count = 2;
        daily[3].reel_count = 5;
        daily[0].story_count = 1;
        daily
    }

    #[test]
    fn test_baseline_ignores_missing_afr() {
        assert_eq!(baseline_afr(&sample()), 200.0);
        assert_eq!(baseline_afr(&[]), 0.0);
    }

    #[test]
    fn test_lift_by_type() {
        let lifts = event_lift_by_type(&sample());
        assert_eq!(lifts.len(), 4);

        let reel = find(&lifts, ContentKind::InstagramReel, |r| r.kind);
        assert_eq!(reel.posted_days, 2);
        assert_eq!(reel.avg_afr_posted, 250.0);
        assert_eq!(reel.lift_pct, 25.0);
        assert_eq!(reel.badge(), LiftBadge::Strong);

        let story = find(&lifts, ContentKind::InstagramStory, |r| r.kind);
        assert_eq!(story.lift_pct, -50.0);
        assert_eq!(story.badge(), LiftBadge::Weak);
    }

    #[test]
    fn test_lift_empty_bucket() {
        let lifts = event_lift_by_type(&sample());
        let tiktok = find(&lifts, ContentKind::TikTokVideo, |r| r.kind);
        assert_eq!(tiktok.posted_days, 0);
        assert_eq!(tiktok.avg_afr_posted, 0.0);
        assert_eq!(tiktok.baseline_afr, 200.0);
        assert_eq!(tiktok.lift_pct, -100.0);
    }

    #[test]
    fn test_lift_with_zero_baseline() {
        let daily = vec![day("2025-12-01", 0.0, None)];
        let lifts = event_lift_by_type(&daily);
        assert!(lifts.iter().all(|l| l.lift_pct == 0.0 && l.posted_days == 0));
    }

    #[test]
    fn test_correlation_by_type_uses_afr_rows_only() {
        let corr = correlation_by_type(&sample());
        let reel = find(&corr, ContentKind::InstagramReel, |r| r.kind);
        assert_eq!(reel.n, 3);
        // counts 0,1,2 against AFR 100,200,300
        assert!((reel.r - 1.0).abs() < 1e-9);

        let post = find(&corr, ContentKind::InstagramPost, |r| r.kind);
        assert_eq!(post.n, 3);
        assert_eq!(post.r, 0.0);
    }

    #[test]
    fn test_correlation_reports_n_below_threshold() {
        let daily = vec![day("2025-12-01", 0.0, Some(1.0)), day("2025-12-02", 0.0, Some(2.0))];
        let corr = correlation_by_type(&daily);
        assert!(corr.iter().all(|c| c.n == 2 && c.r == 0.0));
    }

    #[test]
    fn test_summary_by_type() {
        let events = vec![ContentEvent {
            id: "r".to_string(),
            kind: ContentKind::InstagramReel,
            published_at: parse_instant("2025-12-02T10:00:00Z").unwrap(),
            title: Some("launch".to_string()),
            engagement: Engagement {
                views: 90,
                likes: 10,
                saves: 400,
                ..Default::default()
            },
        }];
        let summary = summary_by_type(&events, &sample());

        let reel = find(&summary, ContentKind::InstagramReel, |r| r.kind);
        assert_eq!(reel.post_count, 1);
        assert_eq!(reel.avg_reach_index, 100.0);
        assert_eq!(reel.avg_afr, 250.0);
        assert_eq!(reel.lift_vs_baseline_pct, 25.0);
        assert_eq!(reel.posted_days, 2);

        let post = find(&summary, ContentKind::InstagramPost, |r| r.kind);
        assert_eq!(post.post_count, 0);
        assert_eq!(post.avg_reach_index, 0.0);
    }

    #[test]
    fn test_lift_badge_bands() {
        assert_eq!(LiftBadge::from_lift(9.5), LiftBadge::Strong);
        assert_eq!(LiftBadge::from_lift(9.4), LiftBadge::Moderate);
        assert_eq!(LiftBadge::from_lift(2.4), LiftBadge::Neutral);
        assert_eq!(LiftBadge::from_lift(-4.4), LiftBadge::Neutral);
        assert_eq!(LiftBadge::from_lift(-4.5), LiftBadge::Neutral);
        assert_eq!(LiftBadge::from_lift(-4.51), LiftBadge::Weak);
        assert_eq!(LiftBadge::from_lift(2.5), LiftBadge::Moderate);
    }
}
