//! Conversions from third-party errors into the domain error

mod conversions;

pub use conversions::InfraError;
