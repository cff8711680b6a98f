//! Banded advice texts and the capability interface that produces them.
//!
//! Scorers decide *which* band a channel falls into; turning a band into
//! advice strings is a separate capability so a deployment can swap the
//! fixed templates for something richer without touching scoring logic.
//! The templates below are the deterministic implementation and the only
//! one this repository ships.

use pulse_core::ScoreResult;

/// Quality score band, selected by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityBand {
    /// Value below 70: the audience needs cleanup before anything else.
    Critical,
    /// Value 70–84: solid but improvable.
    Improve,
    /// Value 85 and up: ready to scale.
    Scale,
}

impl QualityBand {
    #[must_use]
    pub fn from_value(value: u8) -> Self {
        if value < 70 {
            QualityBand::Critical
        } else if value < 85 {
            QualityBand::Improve
        } else {
            QualityBand::Scale
        }
    }
}

/// Fraud score band, selected by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FraudBand {
    /// Value 10 or below: nothing suspicious.
    Low,
    /// Value 11–30: worth a spot check.
    Moderate,
    /// Value above 30: audit before selling anything.
    High,
}

impl FraudBand {
    #[must_use]
    pub fn from_value(value: u8) -> Self {
        if value > 30 {
            FraudBand::High
        } else if value > 10 {
            FraudBand::Moderate
        } else {
            FraudBand::Low
        }
    }
}

/// Capability interface for turning score bands into advice strings.
pub trait RecommendationGenerator {
    fn quality_advice(&self, band: QualityBand) -> Vec<String>;
    fn fraud_advice(&self, band: FraudBand) -> Vec<String>;
}

/// Deterministic template-based recommender.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateRecommender;

impl RecommendationGenerator for TemplateRecommender {
    fn quality_advice(&self, band: QualityBand) -> Vec<String> {
        let lines: &[&str] = match band {
            QualityBand::Critical => &[
                "Pause paid placements until the audience is cleaned up",
                "Remove inactive and suspicious followers before the next campaign",
                "Rebuild the content plan around topics the audience engages with",
            ],
            QualityBand::Improve => &[
                "Shift publications toward the best-performing hour",
                "Add interactive formats (polls, open questions) to lift engagement",
                "Trim off-topic posts that dilute the channel niche",
            ],
            QualityBand::Scale => &[
                "Audience quality is strong: increase posting frequency",
                "Move about 70% of publications to the best-performing hour",
                "Lock in advertiser rates while engagement is high",
            ],
        };
        to_strings(lines)
    }

    fn fraud_advice(&self, band: FraudBand) -> Vec<String> {
        let lines: &[&str] = match band {
            FraudBand::High => &[
                "Run a full audience audit before selling placements",
                "Remove bot followers, then re-measure engagement",
                "Avoid promotion from unverified sources",
            ],
            FraudBand::Moderate => &[
                "Spot-check recent follower cohorts for bot patterns",
                "Watch for repeated view spikes on low-effort posts",
            ],
            FraudBand::Low => &["Audience looks organic: no cleanup needed"],
        };
        to_strings(lines)
    }
}

fn to_strings(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|s| (*s).to_string()).collect()
}

/// Assembles a [`ScoreResult`] from a clamped value, the fired reasons, and
/// banded quality advice.
pub(crate) fn quality_result(
    value: u8,
    reasons: Vec<String>,
    generator: &dyn RecommendationGenerator,
) -> ScoreResult {
    let recommendations = generator.quality_advice(QualityBand::from_value(value));
    ScoreResult {
        value,
        reasons,
        recommendations,
    }
}

/// Assembles a [`ScoreResult`] from a capped value, the fired reasons, and
/// banded fraud advice.
pub(crate) fn fraud_result(
    value: u8,
    reasons: Vec<String>,
    generator: &dyn RecommendationGenerator,
) -> ScoreResult {
    let recommendations = generator.fraud_advice(FraudBand::from_value(value));
    ScoreResult {
        value,
        reasons,
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quality_bands_split_at_70_and_85() {
        assert_eq!(QualityBand::from_value(69), QualityBand::Critical);
        assert_eq!(QualityBand::from_value(70), QualityBand::Improve);
        assert_eq!(QualityBand::from_value(84), QualityBand::Improve);
        assert_eq!(QualityBand::from_value(85), QualityBand::Scale);
        assert_eq!(QualityBand::from_value(100), QualityBand::Scale);
    }

    #[test]
    fn fraud_bands_split_at_10_and_30() {
        assert_eq!(FraudBand::from_value(0), FraudBand::Low);
        assert_eq!(FraudBand::from_value(10), FraudBand::Low);
        assert_eq!(FraudBand::from_value(11), FraudBand::Moderate);
        assert_eq!(FraudBand::from_value(30), FraudBand::Moderate);
        assert_eq!(FraudBand::from_value(31), FraudBand::High);
    }

    #[test]
    fn template_advice_is_deterministic() {
        let recommender = TemplateRecommender;
        assert_eq!(
            recommender.quality_advice(QualityBand::Improve),
            recommender.quality_advice(QualityBand::Improve)
        );
        assert_eq!(recommender.fraud_advice(FraudBand::Low).len(), 1);
    }
}
