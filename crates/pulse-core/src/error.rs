use thiserror::Error;

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required env var: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read rates file {path}: {source}")]
    RatesFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse rates file: {0}")]
    RatesFileParse(#[from] serde_yaml::Error),

    #[error("config validation failed: {0}")]
    Validation(String),
}
