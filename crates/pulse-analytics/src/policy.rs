//! Heuristic thresholds and weights as configurable policy.
//!
//! Every magic number in the scorers lives here with its observed default.
//! None of these values is a discovered domain truth; they were tuned against
//! a handful of sampled channels, so deployments can override them without
//! touching rule code.

use pulse_core::CpmTable;
use serde::{Deserialize, Serialize};

/// Thresholds and deduction weights for the audience-quality scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityPolicy {
    /// Starting value before deductions.
    pub base_value: i32,
    /// Lower clamp for the final value.
    pub floor: i32,
    /// Upper clamp for the final value.
    pub ceiling: i32,

    /// Activity ratio below this is a heavy deduction.
    pub low_activity_ratio: f64,
    /// Activity ratio below this (but not below the low bound) is a mild one.
    pub mid_activity_ratio: f64,
    pub low_activity_penalty: i32,
    pub mid_activity_penalty: i32,

    /// Engagement percent below this is a heavy deduction.
    pub low_engagement_pct: f64,
    /// Engagement percent below this (but not below the low bound) is mild.
    pub mid_engagement_pct: f64,
    pub low_engagement_penalty: i32,
    pub mid_engagement_penalty: i32,

    /// Notional match percentage assigned when a topic keyword is found in
    /// the first record's preview.
    pub matched_topic_pct: f64,
    /// Notional match percentage assigned otherwise.
    pub unmatched_topic_pct: f64,
    /// Match percentages below this cutoff are penalized.
    pub min_topic_match_pct: f64,
    pub topic_mismatch_penalty: i32,
    /// Fixed keyword set the preview is checked against.
    pub topic_keywords: Vec<String>,

    /// Trend rule applies only when at least this many records exist.
    pub trend_min_records: usize,
    /// Number of trailing records compared against the same number before.
    pub trend_window: usize,
    /// Relative change (percent) below this triggers the trend deduction.
    pub trend_drop_pct: f64,
    pub trend_penalty: i32,
}

impl Default for QualityPolicy {
    fn default() -> Self {
        Self {
            base_value: 85,
            floor: 30,
            ceiling: 100,
            low_activity_ratio: 0.40,
            mid_activity_ratio: 0.60,
            low_activity_penalty: 20,
            mid_activity_penalty: 10,
            low_engagement_pct: 2.0,
            mid_engagement_pct: 3.0,
            low_engagement_penalty: 15,
            mid_engagement_penalty: 7,
            matched_topic_pct: 85.0,
            unmatched_topic_pct: 70.0,
            min_topic_match_pct: 75.0,
            topic_mismatch_penalty: 10,
            topic_keywords: [
                "it",
                "tech",
                "код",
                "разработ",
                "технолог",
                "news",
                "новост",
                "business",
                "бизнес",
                "finance",
                "финанс",
                "sport",
                "спорт",
            ]
            .iter()
            .map(ToString::to_string)
            .collect(),
            trend_min_records: 6,
            trend_window: 3,
            trend_drop_pct: -15.0,
            trend_penalty: 10,
        }
    }
}

/// Thresholds and addition weights for the fake-audience scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FraudPolicy {
    /// Upper cap for the final value.
    pub cap: i32,

    /// Spike rule applies only when at least this many records exist.
    pub spike_min_records: usize,
    /// Largest successive view jump must exceed this multiple of the mean
    /// jump to count as a spike.
    pub spike_multiplier: f64,
    pub spike_score: i32,

    /// Fewer distinct posting hours than this reads as scheduled output.
    pub min_distinct_hours: usize,
    pub uniform_hours_score: i32,

    /// Engagement percent below this reads as a dead audience.
    pub dead_engagement_pct: f64,
    pub dead_engagement_score: i32,

    /// Top-country share above this reads as a purchased geography.
    pub geo_concentration_pct: f64,
    pub geo_concentration_score: i32,

    /// Activity ratio below this adds to the score.
    pub low_activity_ratio: f64,
    pub low_activity_score: i32,
}

impl Default for FraudPolicy {
    fn default() -> Self {
        Self {
            cap: 100,
            spike_min_records: 6,
            spike_multiplier: 5.0,
            spike_score: 30,
            min_distinct_hours: 3,
            uniform_hours_score: 25,
            dead_engagement_pct: 1.0,
            dead_engagement_score: 20,
            geo_concentration_pct: 90.0,
            geo_concentration_score: 15,
            low_activity_ratio: 0.40,
            low_activity_score: 10,
        }
    }
}

/// Everything one analysis run needs beyond its inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisPolicy {
    pub quality: QualityPolicy,
    pub fraud: FraudPolicy,
    pub cpm: CpmTable,
    /// Multiplier applied to the current monetization estimate to project
    /// the post-optimization one.
    pub optimization_factor: f64,
}

impl Default for AnalysisPolicy {
    fn default() -> Self {
        Self {
            quality: QualityPolicy::default(),
            fraud: FraudPolicy::default(),
            cpm: CpmTable::default(),
            optimization_factor: crate::monetize::DEFAULT_OPTIMIZATION_FACTOR,
        }
    }
}

impl AnalysisPolicy {
    /// Policy with all defaults except the CPM table.
    #[must_use]
    pub fn with_rates(cpm: CpmTable) -> Self {
        Self {
            cpm,
            ..Self::default()
        }
    }
}
