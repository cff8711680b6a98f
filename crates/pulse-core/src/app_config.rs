use std::path::PathBuf;

/// Deployment environment, selected by `PULSE_ENV`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Application configuration assembled from environment variables.
#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Optional CPM rate table override; `None` means compiled-in defaults.
    pub rates_path: Option<PathBuf>,
    /// How many raw posts one analysis run consumes at most.
    pub post_limit: usize,
    pub telemetr_api_key: Option<String>,
    pub telemetr_timeout_secs: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("rates_path", &self.rates_path)
            .field("post_limit", &self.post_limit)
            .field(
                "telemetr_api_key",
                &self.telemetr_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("telemetr_timeout_secs", &self.telemetr_timeout_secs)
            .finish()
    }
}
