//! Wire types for the audience API. Kept crate-private; the public surface
//! speaks [`pulse_core::AudienceSnapshot`] only.

use serde::Deserialize;

/// Response envelope: `status` is `"ok"` or `"error"`, `result` is present
/// on success for known channels.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiEnvelope {
    pub status: String,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub result: Option<WireAudience>,
}

/// Audience block as the API serializes it. Every field is optional: the
/// provider omits metrics it has not measured for a channel.
#[derive(Debug, Deserialize)]
pub(crate) struct WireAudience {
    #[serde(default)]
    pub male_percent: Option<f64>,
    #[serde(default)]
    pub age_25_34_percent: Option<f64>,
    #[serde(default)]
    pub top_country_percent: Option<f64>,
    #[serde(default)]
    pub er_percent: Option<f64>,
    #[serde(default)]
    pub active_ratio: Option<f64>,
    #[serde(default)]
    pub interests: Vec<WireInterest>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireInterest {
    pub name: String,
    pub weight: f64,
}
