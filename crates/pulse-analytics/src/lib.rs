//! Normalization-and-scoring core for ChannelPulse.
//!
//! Takes a small, irregular sample of public social-feed posts (timestamp,
//! view-count text, body snippet), normalizes the noisy numeric formatting,
//! derives a posting-time profile, scores the sampled audience for quality
//! and for synthetic inflation, and converts the average reach into a
//! price-per-post estimate.
//!
//! Every function here is pure and synchronous: no I/O, no shared mutable
//! state, no clock reads. The same frozen inputs always produce bit-identical
//! outputs. Fetching posts, audience data, and any presentation of the
//! results belong to the surrounding crates.

pub mod fraud;
pub mod monetize;
pub mod pipeline;
pub mod policy;
pub mod quality;
pub mod recommend;
pub mod records;
pub mod stats;
pub mod timing;
pub mod views;

pub use fraud::score_fraud;
pub use monetize::{estimate, MonetizationEstimate, DEFAULT_OPTIMIZATION_FACTOR};
pub use pipeline::{run_analysis, AnalysisMode, AnalysisOptions, ChannelReport, SampleStatus};
pub use policy::{AnalysisPolicy, FraudPolicy, QualityPolicy};
pub use quality::score_quality;
pub use recommend::{FraudBand, QualityBand, RecommendationGenerator, TemplateRecommender};
pub use records::build_records;
pub use stats::{view_stats, ViewStats};
pub use timing::{profile, TimingProfile};
pub use views::parse_count;
