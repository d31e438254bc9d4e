//! # SalonLite Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - The HTTP client with retry policy
//! - The salon REST API client and its CSRF session
//! - Port implementations over that API (`SalonApi`)
//! - Configuration loading from the environment or files
//!
//! ## Architecture
//! - Implements traits defined in `salonlite-core`
//! - Depends on `salonlite-domain` and `salonlite-core`
//! - Contains all "impure" code (network and file I/O)

pub mod api;
pub mod config;
pub mod errors;
pub mod http;

// Re-export commonly used items
pub use api::{ApiClient, ApiClientConfig, ApiError, ApiErrorCategory, SalonApi, SessionContext};
pub use errors::InfraError;
pub use http::{HttpClient, RequestKind, TransportSettings};
