//! Headline view statistics for a record sample.

use pulse_core::PostRecord;
use serde::{Deserialize, Serialize};

/// Mean, peak, and most-recent view counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewStats {
    /// Arithmetic mean of views over the whole sample. `0.0` when empty.
    pub mean_views: f64,
    /// Highest single-post view count.
    pub peak_views: u64,
    /// View count of the last record in input order.
    pub latest_views: u64,
}

/// Computes headline statistics. Total: an empty sample yields zeros.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn view_stats(records: &[PostRecord]) -> ViewStats {
    if records.is_empty() {
        return ViewStats {
            mean_views: 0.0,
            peak_views: 0,
            latest_views: 0,
        };
    }

    let total: u64 = records.iter().map(|r| r.views).sum();
    ViewStats {
        mean_views: total as f64 / records.len() as f64,
        peak_views: records.iter().map(|r| r.views).max().unwrap_or(0),
        latest_views: records.last().map_or(0, |r| r.views),
    }
}
