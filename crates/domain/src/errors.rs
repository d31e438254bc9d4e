//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for SalonLite
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum SalonError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Field-level validation failure raised before any request is sent.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The server answered a write with a non-success status.
    #[error("Request rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl SalonError {
    /// Whether the failure came from talking to the backend (transport or
    /// rejected status) rather than from local input.
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Rejected { .. } | Self::Auth(_))
    }
}

impl From<serde_json::Error> for SalonError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Result type alias for SalonLite operations
pub type Result<T> = std::result::Result<T, SalonError>;
