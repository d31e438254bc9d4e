use std::time::Duration;

use salonlite_domain::{LoggingConfig, SalonError};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins over the configured level. Returns an error when a
/// subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), SalonError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|err| SalonError::Config(format!("invalid log filter: {err}")))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);
    let installed =
        if config.json { builder.json().try_init() } else { builder.compact().try_init() };

    installed.map_err(|err| SalonError::Internal(format!("logging already initialised: {err}")))
}

/// Log the outcome of a command execution with structured fields.
///
/// # Parameters
/// * `command` - Logical command identifier (e.g. `"board::load_board"`).
/// * `elapsed` - Duration the command execution took.
/// * `success` - Whether the command completed successfully.
///
/// Callers must avoid forwarding sensitive values in `command`.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, success: bool) {
    let duration_ms = elapsed.as_millis() as u64;

    if success {
        info!(command, duration_ms, "command_execution_success");
    } else {
        warn!(command, duration_ms, "command_execution_failure");
    }
}

/// Convert a `SalonError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &SalonError) -> &'static str {
    match error {
        SalonError::Config(_) => "config",
        SalonError::Network(_) => "network",
        SalonError::Auth(_) => "auth",
        SalonError::NotFound(_) => "not_found",
        SalonError::InvalidInput(_) => "invalid_input",
        SalonError::Validation(_) => "validation",
        SalonError::Rejected { .. } => "rejected",
        SalonError::Serialization(_) => "serialization",
        SalonError::Internal(_) => "internal",
    }
}
