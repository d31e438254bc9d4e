//! Configuration structures
//!
//! Loaded by `salonlite_infra::config` from the environment or a
//! JSON/TOML file.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_API_MAX_ATTEMPTS, DEFAULT_API_TIMEOUT_SECS, DEFAULT_HEADER_HEIGHT_PX,
    DEFAULT_ROW_HEIGHT_PX,
};

/// Top-level application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    #[serde(default)]
    pub board: BoardConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Configuration pointing at `base_url` with every other value defaulted.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                base_url: base_url.into(),
                timeout_secs: DEFAULT_API_TIMEOUT_SECS,
                max_attempts: DEFAULT_API_MAX_ATTEMPTS,
            },
            board: BoardConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Backend REST API settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL without trailing slash, e.g. `https://salon.example.com/api`
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Attempts for idempotent reads. Writes are always sent once.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

/// Appointment board geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    #[serde(default = "default_row_height")]
    pub row_height_px: u32,
    #[serde(default = "default_header_height")]
    pub header_height_px: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self { row_height_px: DEFAULT_ROW_HEIGHT_PX, header_height_px: DEFAULT_HEADER_HEIGHT_PX }
    }
}

/// Logging output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default `EnvFilter` directive when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), json: false }
    }
}

fn default_timeout_secs() -> u64 {
    DEFAULT_API_TIMEOUT_SECS
}

fn default_max_attempts() -> u32 {
    DEFAULT_API_MAX_ATTEMPTS
}

fn default_row_height() -> u32 {
    DEFAULT_ROW_HEIGHT_PX
}

fn default_header_height() -> u32 {
    DEFAULT_HEADER_HEIGHT_PX
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "api": { "base_url": "http://localhost:8000" } }"#).unwrap();

        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.api.max_attempts, 1);
        assert_eq!(config.board.row_height_px, 21);
        assert_eq!(config.board.header_height_px, 45);
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
    }

    #[test]
    fn with_base_url_matches_deserialized_defaults() {
        let parsed: Config =
            serde_json::from_str(r#"{ "api": { "base_url": "http://x" } }"#).unwrap();
        assert_eq!(Config::with_base_url("http://x"), parsed);
    }
}
