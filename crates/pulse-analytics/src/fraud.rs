//! Fake-audience scorer.
//!
//! Mirror image of the quality scorer: starts at zero and only adds. Each
//! signal that fires contributes a fixed amount and a reason; the sum is
//! capped. Signals look at growth spikes, posting-time uniformity, and the
//! audience snapshot; whatever input is missing simply contributes nothing.

use std::collections::BTreeSet;

use chrono::Timelike;
use pulse_core::{AudienceSnapshot, PostRecord, ScoreResult};

use crate::policy::FraudPolicy;
use crate::recommend::{fraud_result, RecommendationGenerator, TemplateRecommender};

/// Scores fake-audience probability with the built-in template recommender.
#[must_use]
pub fn score_fraud(
    records: &[PostRecord],
    audience: Option<&AudienceSnapshot>,
    policy: &FraudPolicy,
) -> ScoreResult {
    score_fraud_with(records, audience, policy, &TemplateRecommender)
}

/// Scores fake-audience probability, producing advice through `generator`.
#[must_use]
pub fn score_fraud_with(
    records: &[PostRecord],
    audience: Option<&AudienceSnapshot>,
    policy: &FraudPolicy,
    generator: &dyn RecommendationGenerator,
) -> ScoreResult {
    let mut additions: Vec<(i32, String)> = Vec::new();

    if records.len() >= policy.spike_min_records {
        if let Some(ratio) = spike_ratio(records) {
            if ratio > policy.spike_multiplier {
                additions.push((
                    policy.spike_score,
                    format!(
                        "abrupt view spike: the largest jump is {ratio:.1}x the typical change"
                    ),
                ));
            }
        }
    }

    if !records.is_empty() {
        let hours = distinct_hours(records);
        if hours < policy.min_distinct_hours {
            additions.push((
                policy.uniform_hours_score,
                format!("posts are concentrated in {hours} hour(s) of the day"),
            ));
        }
    }

    if let Some(snapshot) = audience {
        if let Some(engagement) = snapshot.engagement_pct {
            if engagement < policy.dead_engagement_pct {
                additions.push((
                    policy.dead_engagement_score,
                    format!("near-zero engagement rate: {engagement:.1}%"),
                ));
            }
        }

        if let Some(top_country) = snapshot.top_country_pct {
            if top_country > policy.geo_concentration_pct {
                additions.push((
                    policy.geo_concentration_score,
                    format!("audience concentrated in a single country: {top_country:.0}%"),
                ));
            }
        }

        if let Some(ratio) = snapshot.activity_ratio {
            if ratio < policy.low_activity_ratio {
                additions.push((
                    policy.low_activity_score,
                    format!("only {:.0}% of followers are active", ratio * 100.0),
                ));
            }
        }
    }

    let total: i32 = additions.iter().map(|(amount, _)| amount).sum();
    let value = u8::try_from(total.min(policy.cap).clamp(0, 100)).unwrap_or(100);
    let reasons = additions.into_iter().map(|(_, reason)| reason).collect();

    fraud_result(value, reasons, generator)
}

/// Ratio of the largest successive view increase to the mean successive
/// change, both signed. Deltas telescope, so a spike that regresses keeps
/// the mean near zero while the jump itself stays large. `None` when there
/// are fewer than two records or the sample is not growing on balance.
#[allow(clippy::cast_precision_loss)]
fn spike_ratio(records: &[PostRecord]) -> Option<f64> {
    let deltas: Vec<f64> = records
        .windows(2)
        .map(|pair| pair[1].views as f64 - pair[0].views as f64)
        .collect();
    if deltas.is_empty() {
        return None;
    }

    let mean = deltas.iter().sum::<f64>() / deltas.len() as f64;
    if mean <= 0.0 {
        return None;
    }
    let max = deltas.iter().fold(f64::NEG_INFINITY, |acc, &d| acc.max(d));
    Some(max / mean)
}

fn distinct_hours(records: &[PostRecord]) -> usize {
    records
        .iter()
        .map(|r| r.timestamp.hour())
        .collect::<BTreeSet<u32>>()
        .len()
}
