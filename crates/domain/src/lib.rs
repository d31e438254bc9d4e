//! # SalonLite Domain
//!
//! Business domain types and models for SalonLite.
//!
//! This crate contains:
//! - Wire/domain records (Technician, Appointment, ScheduleOverride, etc.)
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants (slot axis, open/close-all range)
//!
//! ## Architecture
//! - No dependencies on other SalonLite crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
