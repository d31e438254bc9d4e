//! API-specific error types
//!
//! Classifies failed calls by category and folds them into `SalonError`.

use std::time::Duration;

use salonlite_domain::SalonError;
use thiserror::Error;

/// Categories of API errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCategory {
    /// 401/403, or rejected credentials
    Authentication,
    /// 4xx other than auth
    Client,
    /// 5xx
    Server,
    /// Connection failures and timeouts
    Network,
    /// Bad base URL or client setup
    Config,
}

/// API operation errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Request rejected with status {status}: {message}")]
    Client { status: u16, message: String },

    #[error("Server error {status}: {message}")]
    Server { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    #[error("Unreadable response: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Get the error category for this error
    pub fn category(&self) -> ApiErrorCategory {
        match self {
            Self::Auth(_) => ApiErrorCategory::Authentication,
            Self::Client { .. } | Self::Decode(_) => ApiErrorCategory::Client,
            Self::Server { .. } => ApiErrorCategory::Server,
            Self::Network(_) | Self::Timeout(_) => ApiErrorCategory::Network,
            Self::Config(_) => ApiErrorCategory::Config,
        }
    }

    /// HTTP status the server answered with, if it answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Client { status, .. } | Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<ApiError> for SalonError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Auth(message) => SalonError::Auth(message),
            ApiError::Client { status, message } | ApiError::Server { status, message } => {
                SalonError::Rejected { status, message }
            }
            ApiError::Network(message) => SalonError::Network(message),
            ApiError::Timeout(after) => SalonError::Network(format!("timed out after {after:?}")),
            ApiError::Decode(message) => SalonError::Serialization(message),
            ApiError::Config(message) => SalonError::Config(message),
        }
    }
}

impl From<SalonError> for ApiError {
    fn from(err: SalonError) -> Self {
        match err {
            SalonError::Network(message) => Self::Network(message),
            SalonError::Auth(message) => Self::Auth(message),
            SalonError::Config(message) => Self::Config(message),
            SalonError::Rejected { status, message } if status >= 500 => {
                Self::Server { status, message }
            }
            SalonError::Rejected { status, message } => Self::Client { status, message },
            SalonError::NotFound(message) => Self::Client { status: 404, message },
            SalonError::Serialization(message) => Self::Decode(message),
            SalonError::InvalidInput(message) | SalonError::Validation(message) => {
                Self::Client { status: 400, message }
            }
            SalonError::Internal(message) => Self::Config(message),
        }
    }
}
