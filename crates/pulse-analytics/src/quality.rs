//! Audience-quality scorer.
//!
//! Starts from a base value and only deducts: each rule that fires subtracts
//! a fixed amount and records a reason, then the total is clamped to the
//! policy's floor and ceiling. Rules are independent, so each contribution is
//! testable on its own; a rule whose input is missing (no audience snapshot,
//! too few records) is skipped, never an error.

use pulse_core::{AudienceSnapshot, PostRecord, ScoreResult};

use crate::policy::QualityPolicy;
use crate::recommend::{quality_result, RecommendationGenerator, TemplateRecommender};

/// Scores audience quality with the built-in template recommender.
#[must_use]
pub fn score_quality(
    records: &[PostRecord],
    audience: Option<&AudienceSnapshot>,
    policy: &QualityPolicy,
) -> ScoreResult {
    score_quality_with(records, audience, policy, &TemplateRecommender)
}

/// Scores audience quality, producing advice through `generator`.
#[must_use]
pub fn score_quality_with(
    records: &[PostRecord],
    audience: Option<&AudienceSnapshot>,
    policy: &QualityPolicy,
    generator: &dyn RecommendationGenerator,
) -> ScoreResult {
    let mut deductions: Vec<(i32, String)> = Vec::new();

    if let Some(snapshot) = audience {
        if let Some(ratio) = snapshot.activity_ratio {
            if ratio < policy.low_activity_ratio {
                deductions.push((
                    policy.low_activity_penalty,
                    format!(
                        "only {:.0}% of followers are active (below {:.0}%)",
                        ratio * 100.0,
                        policy.low_activity_ratio * 100.0
                    ),
                ));
            } else if ratio < policy.mid_activity_ratio {
                deductions.push((
                    policy.mid_activity_penalty,
                    format!("follower activity is mediocre at {:.0}%", ratio * 100.0),
                ));
            }
        }

        if let Some(engagement) = snapshot.engagement_pct {
            if engagement < policy.low_engagement_pct {
                deductions.push((
                    policy.low_engagement_penalty,
                    format!("engagement rate {engagement:.1}% is low"),
                ));
            } else if engagement < policy.mid_engagement_pct {
                deductions.push((
                    policy.mid_engagement_penalty,
                    format!("engagement rate {engagement:.1}% is below average"),
                ));
            }
        }
    }

    if let Some(match_pct) = topic_match_pct(records, policy) {
        if match_pct < policy.min_topic_match_pct {
            deductions.push((
                policy.topic_mismatch_penalty,
                format!("content matches the channel topic set only {match_pct:.0}%"),
            ));
        }
    }

    if let Some(change_pct) = trailing_trend_pct(records, policy) {
        if change_pct < policy.trend_drop_pct {
            deductions.push((
                policy.trend_penalty,
                format!(
                    "views are trending down: {change_pct:.0}% over the last {} posts",
                    policy.trend_window
                ),
            ));
        }
    }

    let total: i32 = deductions.iter().map(|(amount, _)| amount).sum();
    let bounded = (policy.base_value - total).clamp(policy.floor, policy.ceiling);
    let value = u8::try_from(bounded.clamp(0, 100)).unwrap_or(0);
    let reasons = deductions.into_iter().map(|(_, reason)| reason).collect();

    quality_result(value, reasons, generator)
}

/// Notional topical match of the sample against the policy keyword set,
/// judged on the first record's preview. `None` when there are no records
/// to judge.
fn topic_match_pct(records: &[PostRecord], policy: &QualityPolicy) -> Option<f64> {
    let first = records.first()?;
    let preview = first.preview.to_lowercase();
    let matched = policy
        .topic_keywords
        .iter()
        .any(|keyword| preview.contains(&keyword.to_lowercase()));
    Some(if matched {
        policy.matched_topic_pct
    } else {
        policy.unmatched_topic_pct
    })
}

/// Relative change (percent) of the trailing window's mean views against the
/// window before it. `None` when the sample is too small or the earlier
/// window has no views to compare against.
#[allow(clippy::cast_precision_loss)]
fn trailing_trend_pct(records: &[PostRecord], policy: &QualityPolicy) -> Option<f64> {
    let window = policy.trend_window;
    if window == 0 || records.len() < policy.trend_min_records || records.len() < 2 * window {
        return None;
    }

    let mean_views = |slice: &[PostRecord]| -> f64 {
        slice.iter().map(|r| r.views as f64).sum::<f64>() / slice.len() as f64
    };

    let recent = mean_views(&records[records.len() - window..]);
    let prior = mean_views(&records[records.len() - 2 * window..records.len() - window]);
    if prior <= 0.0 {
        return None;
    }
    Some((recent / prior - 1.0) * 100.0)
}
