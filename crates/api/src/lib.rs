//! # SalonLite App
//!
//! Application layer - commands, wiring and terminal output.
//!
//! This crate contains:
//! - Application context (dependency injection)
//! - Commands invoked by the screens and the `salonlite` binary
//! - Logging setup and plain-text renderers
//!
//! ## Architecture
//! - Depends on `common`, `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture

pub mod commands;
pub mod context;
pub mod render;
pub mod utils;

// Re-export for convenience
pub use commands::*;
pub use context::*;
