//! Niche classification and the CPM rate table.
//!
//! A niche is a coarse topical label for a channel, used only to select a
//! price-per-1000-views rate. Classification is a fixed keyword match against
//! the normalized channel username; the rate table ships with compiled-in
//! defaults and can be overridden from a YAML file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Coarse topical classification of a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Niche {
    It,
    News,
    Sport,
    Business,
    Finance,
    /// Anything the keyword table does not recognize.
    Other,
}

impl std::fmt::Display for Niche {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Niche::It => write!(f, "it"),
            Niche::News => write!(f, "news"),
            Niche::Sport => write!(f, "sport"),
            Niche::Business => write!(f, "business"),
            Niche::Finance => write!(f, "finance"),
            Niche::Other => write!(f, "other"),
        }
    }
}

/// Keyword table for channel classification.
///
/// Checked in order; the first niche with a matching keyword wins. `It` is
/// last because its short keywords ("it", "dev") are substrings of common
/// words in other niches ("fitness").
const NICHE_KEYWORDS: &[(Niche, &[&str])] = &[
    (Niche::Finance, &["finance", "invest", "money", "crypto", "trading"]),
    (Niche::Business, &["business", "startup", "entrepreneur"]),
    (Niche::Sport, &["sport", "fitness", "football", "hockey"]),
    (Niche::News, &["news", "daily", "lenta", "rian", "meduza"]),
    (Niche::It, &["it", "tech", "dev", "code", "digital", "habr"]),
];

impl Niche {
    /// Classifies a channel by keyword match against its normalized username.
    #[must_use]
    pub fn from_channel(channel: &str) -> Self {
        let lower = channel.to_lowercase();
        for (niche, keywords) in NICHE_KEYWORDS {
            if keywords.iter().any(|k| lower.contains(k)) {
                return *niche;
            }
        }
        Niche::Other
    }
}

/// CPM rates (price per 1000 views) by niche.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CpmTable {
    pub it: f64,
    pub news: f64,
    pub sport: f64,
    pub business: f64,
    pub finance: f64,
    /// Rate applied to channels outside the known niches.
    pub default_rate: f64,
}

impl Default for CpmTable {
    fn default() -> Self {
        Self {
            it: 35.0,
            news: 25.0,
            sport: 20.0,
            business: 40.0,
            finance: 45.0,
            default_rate: 15.0,
        }
    }
}

impl CpmTable {
    /// Returns the rate for a niche.
    #[must_use]
    pub fn rate(&self, niche: Niche) -> f64 {
        match niche {
            Niche::It => self.it,
            Niche::News => self.news,
            Niche::Sport => self.sport,
            Niche::Business => self.business,
            Niche::Finance => self.finance,
            Niche::Other => self.default_rate,
        }
    }

    /// Loads and validates a rate table from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, parsed, or contains
    /// a non-positive rate.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::RatesFileIo {
            path: path.display().to_string(),
            source: e,
        })?;

        let table: CpmTable = serde_yaml::from_str(&content)?;
        table.validate()?;
        Ok(table)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let rates = [
            ("it", self.it),
            ("news", self.news),
            ("sport", self.sport),
            ("business", self.business),
            ("finance", self.finance),
            ("default_rate", self.default_rate),
        ];
        for (name, rate) in rates {
            if !rate.is_finite() || rate <= 0.0 {
                return Err(ConfigError::Validation(format!(
                    "CPM rate '{name}' must be a positive number, got {rate}"
                )));
            }
        }
        Ok(())
    }
}
