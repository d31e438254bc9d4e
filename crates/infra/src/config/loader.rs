//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If `SALONLITE_API_URL` is missing, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `SALONLITE_API_URL`: Backend base URL (required)
//! - `SALONLITE_API_TIMEOUT_SECS`: Request timeout in seconds
//! - `SALONLITE_API_MAX_ATTEMPTS`: Attempts for reads
//! - `SALONLITE_LOG_LEVEL`: Default log filter
//! - `SALONLITE_LOG_JSON`: JSON log output (true/false)
//! - `SALONLITE_ROW_HEIGHT_PX`: Board row height
//! - `SALONLITE_HEADER_HEIGHT_PX`: Board header height
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./salonlite.json` or `./salonlite.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. Relative to executable location

use std::path::{Path, PathBuf};
use std::str::FromStr;

use salonlite_domain::{Config, Result, SalonError};

use crate::errors::InfraError;

/// Load configuration with automatic fallback strategy
///
/// # Errors
/// Returns `SalonError::Config` if configuration cannot be loaded from
/// either source or a value is malformed.
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// Only `SALONLITE_API_URL` is required; everything else falls back to
/// defaults.
///
/// # Errors
/// Returns `SalonError::Config` if the URL is missing or a numeric
/// variable does not parse.
pub fn load_from_env() -> Result<Config> {
    let mut config = Config::with_base_url(env_var("SALONLITE_API_URL")?);

    if let Some(timeout) = env_parse("SALONLITE_API_TIMEOUT_SECS")? {
        config.api.timeout_secs = timeout;
    }
    if let Some(attempts) = env_parse("SALONLITE_API_MAX_ATTEMPTS")? {
        config.api.max_attempts = attempts;
    }
    if let Ok(level) = std::env::var("SALONLITE_LOG_LEVEL") {
        config.logging.level = level;
    }
    config.logging.json = env_bool("SALONLITE_LOG_JSON", config.logging.json);
    if let Some(row) = env_parse("SALONLITE_ROW_HEIGHT_PX")? {
        config.board.row_height_px = row;
    }
    if let Some(header) = env_parse("SALONLITE_HEADER_HEIGHT_PX")? {
        config.board.header_height_px = header;
    }

    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `SalonError::Config` if the file is missing, unreadable or
/// invalid.
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(SalonError::Config(format!("Config file not found: {}", p.display())));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            SalonError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path).map_err(InfraError::from)?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content; format follows the extension.
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| SalonError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| SalonError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(SalonError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(candidates_in(&cwd));
        candidates.push(cwd.join("../config.json"));
        candidates.push(cwd.join("../config.toml"));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(candidates_in(exe_dir));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

fn candidates_in(dir: &Path) -> [PathBuf; 4] {
    [
        dir.join("config.json"),
        dir.join("config.toml"),
        dir.join("salonlite.json"),
        dir.join("salonlite.toml"),
    ]
}

/// Get required environment variable
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        SalonError::Config(format!("Missing required environment variable: {}", key))
    })
}

/// Parse an optional environment variable.
fn env_parse<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| SalonError::Config(format!("Invalid value for {}: {}", key, e))),
        Err(_) => Ok(None),
    }
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
