//! Wire → domain conversion for audience data.

use pulse_core::{AudienceSnapshot, InterestWeight};

use crate::types::WireAudience;

/// Converts a wire audience block into the domain snapshot.
///
/// Interests are re-sorted by descending weight: the snapshot contract says
/// highest weight first, and the API does not guarantee an order.
pub(crate) fn normalize_audience(wire: WireAudience) -> AudienceSnapshot {
    let mut interests: Vec<InterestWeight> = wire
        .interests
        .into_iter()
        .map(|i| InterestWeight {
            name: i.name,
            weight: i.weight,
        })
        .collect();
    interests.sort_by(|a, b| {
        b.weight
            .partial_cmp(&a.weight)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    AudienceSnapshot {
        gender_male_pct: wire.male_percent,
        age_25_34_pct: wire.age_25_34_percent,
        top_country_pct: wire.top_country_percent,
        engagement_pct: wire.er_percent,
        activity_ratio: wire.active_ratio,
        interests,
    }
}
