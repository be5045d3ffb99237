//! Content-type mix over the raw event list.

use serde::Serialize;

use crate::types::{ContentEvent, ContentKind};

/// Count and share of one content bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SplitRow {
    pub kind: ContentKind,
    pub count: usize,
    /// Share of all events, 0-100. Zero for every bucket when there are no events.
    pub pct: f64,
}

/// Count and percentage share of each content bucket.
pub fn content_type_split(events: &[ContentEvent]) -> Vec<SplitRow> {
    let total = events.len();

    ContentKind::ALL
        .iter()
        .map(|&kind| {
            let count = events.iter().filter(|e| e.kind == kind).count();
            let pct = if total == 0 {
                0.0
            } else {
                count as f64 / total as f64 * 100.0
            };
            SplitRow { kind, count, pct }
        })
        .collect()
}
