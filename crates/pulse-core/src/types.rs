use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A raw post as delivered by the external fetch collaborator.
///
/// Nothing here is trusted: the timestamp and view counter arrive as free-form
/// text and go through the record builder before any metric is computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPost {
    /// ISO-8601 instant, possibly with a trailing `Z`.
    pub timestamp_text: String,
    /// View counter text as rendered for humans, e.g. `"12.3K"`, `"1 234"`,
    /// `"1,2 млн"`. May also carry a non-view engagement marker (`"Like"`).
    pub views_text: String,
    /// Post body. `None` for media-only posts.
    pub body_text: Option<String>,
}

/// A fully parsed post, normalized to the reference time zone.
///
/// Immutable once built; held only for the duration of one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostRecord {
    /// Posting instant in the fixed reference zone (UTC+3).
    pub timestamp: DateTime<FixedOffset>,
    /// View count, never negative.
    pub views: u64,
    /// Truncated body text, or a fixed placeholder for media-only posts.
    pub preview: String,
}

/// Mean views and sample size for one hour of the day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyBucket {
    /// Hour of the day in the reference zone, `0..=23`.
    pub hour: u32,
    /// Arithmetic mean of `views` over the posts in this hour.
    pub mean_views: f64,
    /// Number of posts grouped into this bucket, at least 1.
    pub sample_count: usize,
}

/// One audience interest with its relative weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterestWeight {
    pub name: String,
    pub weight: f64,
}

/// Audience demographics and activity, supplied by an external provider.
///
/// Every field is optional: a scorer rule whose input is absent is skipped,
/// never treated as an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AudienceSnapshot {
    /// Share of male followers, percent.
    pub gender_male_pct: Option<f64>,
    /// Share of followers aged 25–34, percent.
    pub age_25_34_pct: Option<f64>,
    /// Share of the largest single country in the audience, percent.
    pub top_country_pct: Option<f64>,
    /// Engagement rate, percent.
    pub engagement_pct: Option<f64>,
    /// Share of followers active in the last month, `0.0..=1.0`.
    pub activity_ratio: Option<f64>,
    /// Audience interests, highest weight first.
    #[serde(default)]
    pub interests: Vec<InterestWeight>,
}

/// Output of one scorer invocation: a bounded value plus the ordered list of
/// rules that fired and the banded advice texts. Never mutated after return.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Bounded score, `0..=100`.
    pub value: u8,
    /// Human-readable descriptions of the rules that fired, in rule order.
    pub reasons: Vec<String>,
    /// Advice strings selected by the score band.
    pub recommendations: Vec<String>,
}
