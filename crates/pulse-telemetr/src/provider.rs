//! The audience capability: who supplies an [`AudienceSnapshot`].

use pulse_core::AudienceSnapshot;

use crate::client::TelemetrClient;
use crate::error::TelemetrError;

/// Capability interface for audience data.
///
/// `Ok(None)` means the provider has nothing for this channel; the scoring
/// core treats that as "skip every audience rule", never as a failure.
#[allow(async_fn_in_trait)]
pub trait AudienceProvider {
    async fn audience_snapshot(
        &self,
        channel: &str,
    ) -> Result<Option<AudienceSnapshot>, TelemetrError>;
}

impl AudienceProvider for TelemetrClient {
    async fn audience_snapshot(
        &self,
        channel: &str,
    ) -> Result<Option<AudienceSnapshot>, TelemetrError> {
        self.channel_audience(channel).await
    }
}

/// Deterministic stand-in provider: always answers with the same snapshot.
///
/// Used in tests and offline runs where no live audience API is configured.
#[derive(Debug, Clone, Default)]
pub struct StaticAudience {
    snapshot: Option<AudienceSnapshot>,
}

impl StaticAudience {
    /// A provider that returns this snapshot for every channel.
    #[must_use]
    pub fn new(snapshot: AudienceSnapshot) -> Self {
        Self {
            snapshot: Some(snapshot),
        }
    }

    /// A provider that has no audience data at all.
    #[must_use]
    pub fn empty() -> Self {
        Self { snapshot: None }
    }
}

impl AudienceProvider for StaticAudience {
    async fn audience_snapshot(
        &self,
        _channel: &str,
    ) -> Result<Option<AudienceSnapshot>, TelemetrError> {
        Ok(self.snapshot.clone())
    }
}
