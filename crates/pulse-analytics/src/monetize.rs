//! Price-per-post estimation from average reach and niche CPM.

use pulse_core::{CpmTable, Niche};
use serde::{Deserialize, Serialize};

/// Default multiplier projecting the estimate after posting-time
/// optimization.
pub const DEFAULT_OPTIMIZATION_FACTOR: f64 = 1.35;

/// Monetization estimate for one channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonetizationEstimate {
    pub niche: Niche,
    /// Rate per 1000 views that was applied.
    pub cpm: f64,
    /// Estimated price per post at current average reach.
    pub current: f64,
    /// Estimated price per post after schedule optimization.
    pub optimized: f64,
}

/// Converts average views and a niche into a price-per-post estimate.
///
/// `current = mean_views / 1000 × rate`; `optimized` scales it by
/// `optimization_factor`. No rounding happens here — display rounding is
/// the caller's concern.
#[must_use]
pub fn estimate(
    mean_views: f64,
    niche: Niche,
    rates: &CpmTable,
    optimization_factor: f64,
) -> MonetizationEstimate {
    let cpm = rates.rate(niche);
    let current = mean_views / 1000.0 * cpm;
    MonetizationEstimate {
        niche,
        cpm,
        current,
        optimized: current * optimization_factor,
    }
}
