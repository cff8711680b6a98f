//! Shared domain types and configuration for ChannelPulse.
//!
//! Everything the analysis pipeline, the audience-data client, and the CLI
//! have in common lives here: the post/audience data model, the niche → CPM
//! rate table, channel-username normalization, and env-driven app config.

pub mod app_config;
pub mod channel;
pub mod config;
pub mod error;
pub mod niches;
pub mod types;

pub use app_config::{AppConfig, Environment};
pub use channel::normalize_username;
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
pub use niches::{CpmTable, Niche};
pub use types::{
    AudienceSnapshot, HourlyBucket, InterestWeight, PostRecord, RawPost, ScoreResult,
};
