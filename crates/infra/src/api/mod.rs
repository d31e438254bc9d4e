//! REST API client for the salon backend
//!
//! - `HttpClient` transport with cookie jar (no direct reqwest above it)
//! - Explicit `SessionContext` holding the CSRF token
//! - Port implementations for every core repository

pub mod client;
pub mod commands;
pub mod endpoints;
pub mod errors;
pub mod session;

pub use client::{ApiClient, ApiClientBuilder, ApiClientConfig};
pub use commands::SalonApi;
pub use errors::{ApiError, ApiErrorCategory};
pub use session::SessionContext;
