//! Host bridge configuration.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. Hosts without an environment (browsers) deserialize it from JSON
//! or use [`BridgeConfig::default`].

use serde::{Deserialize, Serialize};
use std::env;

/// Host bridge configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BridgeConfig {
    /// Tracing filter directive (`VIBE_LOG`)
    pub log_filter: String,

    /// Maximum cart lines marshalled per call (`VIBE_MAX_LINES`)
    pub max_lines: usize,

    /// Currency symbol for display strings (`VIBE_CURRENCY_SYMBOL`)
    pub currency_symbol: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        BridgeConfig {
            log_filter: "info".to_string(),
            max_lines: 1000,
            currency_symbol: "$".to_string(),
        }
    }
}

impl BridgeConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key lookup (environment, test map, ...).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = BridgeConfig::default();

        let config = BridgeConfig {
            log_filter: lookup("VIBE_LOG").unwrap_or(defaults.log_filter),

            max_lines: match lookup("VIBE_MAX_LINES") {
                Some(raw) => raw
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("VIBE_MAX_LINES".to_string()))?,
                None => defaults.max_lines,
            },

            currency_symbol: lookup("VIBE_CURRENCY_SYMBOL").unwrap_or(defaults.currency_symbol),
        };

        if config.max_lines == 0 {
            return Err(ConfigError::InvalidValue("VIBE_MAX_LINES".to_string()));
        }

        tracing::info!(
            max_lines = config.max_lines,
            log_filter = %config.log_filter,
            "Bridge configuration loaded"
        );

        Ok(config)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
