//! HTTP client for the Telemetr-style audience API.
//!
//! Wraps `reqwest` with API-key management and typed response handling. The
//! API wraps every response in a `{"status": ..., "result": ...}` envelope;
//! API-level failures surface as [`TelemetrError::ApiError`], an unknown
//! channel as `Ok(None)`.

use std::time::Duration;

use reqwest::{Client, Url};

use pulse_core::AudienceSnapshot;

use crate::error::TelemetrError;
use crate::normalize::normalize_audience;
use crate::types::ApiEnvelope;

const DEFAULT_BASE_URL: &str = "https://api.telemetr.me/";

/// Client for the audience API.
///
/// Use [`TelemetrClient::new`] for production or
/// [`TelemetrClient::with_base_url`] to point at a mock server in tests.
pub struct TelemetrClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl TelemetrClient {
    /// Creates a new client pointed at the production API.
    ///
    /// # Errors
    ///
    /// Returns [`TelemetrError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, TelemetrError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with
    /// wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`TelemetrError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`TelemetrError::ApiError`] if `base_url`
    /// is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, TelemetrError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("channelpulse/0.1 (channel-analytics)")
            .build()?;

        // Ensure the base URL ends with exactly one slash so query params
        // attach to the root path rather than replacing a path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| TelemetrError::ApiError(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Fetches the audience snapshot for a channel.
    ///
    /// Returns `Ok(None)` when the API does not know the channel; the
    /// scorers degrade gracefully on a missing snapshot.
    ///
    /// # Errors
    ///
    /// - [`TelemetrError::ApiError`] if the API reports an error status.
    /// - [`TelemetrError::Http`] on network failure or non-2xx HTTP status.
    /// - [`TelemetrError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn channel_audience(
        &self,
        channel: &str,
    ) -> Result<Option<AudienceSnapshot>, TelemetrError> {
        let url = self.build_url("audience", &[("channel", channel)]);
        let response = self.client.get(url).send().await?.error_for_status()?;
        let body: serde_json::Value = response.json().await?;

        let envelope: ApiEnvelope =
            serde_json::from_value(body).map_err(|e| TelemetrError::Deserialize {
                context: format!("audience(channel={channel})"),
                source: e,
            })?;

        if envelope.status == "error" {
            return Err(TelemetrError::ApiError(
                envelope.error.unwrap_or_else(|| "unspecified error".to_string()),
            ));
        }

        match envelope.result {
            Some(wire) => Ok(Some(normalize_audience(wire))),
            None => {
                tracing::debug!(channel, "audience API has no data for channel");
                Ok(None)
            }
        }
    }

    /// Builds an endpoint URL with the API key and extra query parameters.
    fn build_url(&self, op: &str, params: &[(&str, &str)]) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("key", &self.api_key);
            query.append_pair("op", op);
            for (name, value) in params {
                query.append_pair(name, value);
            }
        }
        url
    }
}
