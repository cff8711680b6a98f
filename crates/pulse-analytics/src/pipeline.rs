//! Full analysis run: raw posts in, channel report out.
//!
//! 1. Build normalized records (unparseable posts are dropped).
//! 2. Judge sample size against the mode's minimum.
//! 3. Derive headline stats and the hourly profile.
//! 4. Score quality and fraud independently.
//! 5. Estimate monetization from the average reach.
//!
//! Steps 3–4 have no dependencies on each other; only the estimator consumes
//! an earlier result (the mean views). Everything is deterministic: running
//! the same frozen inputs twice yields bit-identical reports.

use pulse_core::{AudienceSnapshot, Niche, PostRecord, RawPost, ScoreResult};
use serde::{Deserialize, Serialize};

use crate::fraud::score_fraud;
use crate::monetize::{estimate, MonetizationEstimate};
use crate::policy::AnalysisPolicy;
use crate::quality::score_quality;
use crate::records::build_records;
use crate::stats::{view_stats, ViewStats};
use crate::timing::{profile, TimingProfile};

/// How deep a run goes, which only changes the minimum usable sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMode {
    /// Headline numbers from a handful of posts.
    Quick,
    /// Full report; needs a slightly larger sample.
    Deep,
}

impl AnalysisMode {
    /// Minimum record count for the sample to be considered sufficient.
    #[must_use]
    pub fn min_records(self) -> usize {
        match self {
            AnalysisMode::Quick => 3,
            AnalysisMode::Deep => 5,
        }
    }
}

/// Caller-visible verdict on the sample size. Never an error: the report is
/// produced either way and the caller decides what to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "status")]
pub enum SampleStatus {
    Sufficient,
    Insufficient { have: usize, need: usize },
}

impl SampleStatus {
    #[must_use]
    pub fn is_sufficient(self) -> bool {
        matches!(self, SampleStatus::Sufficient)
    }
}

/// Options for one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisOptions {
    /// Normalized channel username; also drives niche classification when
    /// no explicit niche is given.
    pub channel: String,
    /// Explicit niche override; `None` means classify from the channel name.
    pub niche: Option<Niche>,
    pub mode: AnalysisMode,
    /// Maximum number of raw posts to consume.
    pub post_limit: usize,
}

impl AnalysisOptions {
    /// Quick-mode options with the default post limit.
    #[must_use]
    pub fn new(channel: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            niche: None,
            mode: AnalysisMode::Quick,
            post_limit: 10,
        }
    }
}

/// Everything one analysis run produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelReport {
    pub channel: String,
    pub niche: Niche,
    pub sample: SampleStatus,
    pub records: Vec<PostRecord>,
    pub stats: ViewStats,
    pub timing: TimingProfile,
    pub quality: ScoreResult,
    pub fraud: ScoreResult,
    pub monetization: MonetizationEstimate,
}

/// Runs the full pipeline over a frozen post sample.
#[must_use]
pub fn run_analysis(
    raw_posts: &[RawPost],
    audience: Option<&AudienceSnapshot>,
    options: &AnalysisOptions,
    policy: &AnalysisPolicy,
) -> ChannelReport {
    let records = build_records(raw_posts, options.post_limit);
    tracing::info!(
        channel = %options.channel,
        supplied = raw_posts.len(),
        parsed = records.len(),
        "built post records"
    );

    let need = options.mode.min_records();
    let sample = if records.len() < need {
        SampleStatus::Insufficient {
            have: records.len(),
            need,
        }
    } else {
        SampleStatus::Sufficient
    };

    let niche = options
        .niche
        .unwrap_or_else(|| Niche::from_channel(&options.channel));

    let stats = view_stats(&records);
    let timing = profile(&records);
    if !timing.has_hour_diversity() {
        tracing::debug!(
            channel = %options.channel,
            distinct_hours = timing.distinct_hours(),
            "insufficient temporal diversity for a reliable hourly profile"
        );
    }

    let quality = score_quality(&records, audience, &policy.quality);
    let fraud = score_fraud(&records, audience, &policy.fraud);
    let monetization = estimate(stats.mean_views, niche, &policy.cpm, policy.optimization_factor);

    ChannelReport {
        channel: options.channel.clone(),
        niche,
        sample,
        records,
        stats,
        timing,
        quality,
        fraud,
        monetization,
    }
}

#[cfg(test)]
mod tests {
    use pulse_core::InterestWeight;

    use super::*;

    fn raw(stamp: &str, views: &str, body: &str) -> RawPost {
        RawPost {
            timestamp_text: stamp.to_string(),
            views_text: views.to_string(),
            body_text: Some(body.to_string()),
        }
    }

    fn sample_posts() -> Vec<RawPost> {
        vec![
            raw("2026-01-12T08:05:00+03:00", "1 234", "tech news of the day"),
            raw("2026-01-13T12:10:00+03:00", "2.1K", "release review"),
            raw("2026-01-14T19:00:00+03:00", "1,9 тыс", "evening digest"),
            raw("2026-01-15T08:30:00+03:00", "1 800", "morning links"),
            raw("2026-01-16T12:45:00+03:00", "2 400", "midweek roundup"),
            raw("2026-01-17T19:15:00+03:00", "2 600", "weekend reading"),
        ]
    }

    fn sample_audience() -> AudienceSnapshot {
        AudienceSnapshot {
            gender_male_pct: Some(58.0),
            age_25_34_pct: Some(41.0),
            top_country_pct: Some(62.0),
            engagement_pct: Some(3.4),
            activity_ratio: Some(0.65),
            interests: vec![InterestWeight {
                name: "technology".to_string(),
                weight: 0.9,
            }],
        }
    }

    #[test]
    fn full_run_produces_a_coherent_report() {
        let options = AnalysisOptions::new("habr_com");
        let report = run_analysis(
            &sample_posts(),
            Some(&sample_audience()),
            &options,
            &AnalysisPolicy::default(),
        );

        assert_eq!(report.channel, "habr_com");
        assert_eq!(report.niche, Niche::It);
        assert!(report.sample.is_sufficient());
        assert_eq!(report.records.len(), 6);
        assert!(report.timing.best_hour.is_some());
        assert!(report.quality.value >= 30 && report.quality.value <= 100);
        assert!(report.fraud.value <= 100);
        assert!(report.monetization.current > 0.0);
    }

    #[test]
    fn explicit_niche_overrides_classification() {
        let mut options = AnalysisOptions::new("habr_com");
        options.niche = Some(Niche::Finance);
        let report = run_analysis(&sample_posts(), None, &options, &AnalysisPolicy::default());
        assert_eq!(report.niche, Niche::Finance);
    }

    #[test]
    fn quick_mode_flags_samples_under_three() {
        let options = AnalysisOptions::new("habr_com");
        let report = run_analysis(
            &sample_posts()[..2],
            None,
            &options,
            &AnalysisPolicy::default(),
        );
        assert_eq!(
            report.sample,
            SampleStatus::Insufficient { have: 2, need: 3 }
        );
    }

    #[test]
    fn deep_mode_needs_five_records() {
        let mut options = AnalysisOptions::new("habr_com");
        options.mode = AnalysisMode::Deep;
        let report = run_analysis(
            &sample_posts()[..4],
            None,
            &options,
            &AnalysisPolicy::default(),
        );
        assert_eq!(
            report.sample,
            SampleStatus::Insufficient { have: 4, need: 5 }
        );
    }

    #[test]
    fn unparseable_posts_reduce_the_sample_not_the_run() {
        let mut posts = sample_posts();
        posts[1].timestamp_text = "last tuesday".to_string();
        let options = AnalysisOptions::new("habr_com");
        let report = run_analysis(&posts, None, &options, &AnalysisPolicy::default());
        assert_eq!(report.records.len(), 5);
        assert!(report.sample.is_sufficient());
    }

    #[test]
    fn empty_input_yields_a_conservative_report() {
        let options = AnalysisOptions::new("ghost_channel");
        let report = run_analysis(&[], None, &options, &AnalysisPolicy::default());
        assert_eq!(
            report.sample,
            SampleStatus::Insufficient { have: 0, need: 3 }
        );
        assert!(report.records.is_empty());
        assert_eq!(report.timing.best_hour, None);
        assert_eq!(report.fraud.value, 0);
        assert!(report.fraud.reasons.is_empty());
        assert!((report.monetization.current - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn post_limit_caps_the_sample() {
        let mut options = AnalysisOptions::new("habr_com");
        options.post_limit = 4;
        let report = run_analysis(&sample_posts(), None, &options, &AnalysisPolicy::default());
        assert_eq!(report.records.len(), 4);
    }

    #[test]
    fn repeated_runs_are_bit_identical() {
        let posts = sample_posts();
        let audience = sample_audience();
        let options = AnalysisOptions::new("habr_com");
        let policy = AnalysisPolicy::default();

        let first = run_analysis(&posts, Some(&audience), &options, &policy);
        let second = run_analysis(&posts, Some(&audience), &options, &policy);
        assert_eq!(first, second);
    }

    #[test]
    fn report_serializes_to_json() {
        let options = AnalysisOptions::new("habr_com");
        let report = run_analysis(&sample_posts(), None, &options, &AnalysisPolicy::default());
        let json = serde_json::to_string(&report).expect("report should serialize");
        assert!(json.contains("\"best_hour\""));
    }
}
