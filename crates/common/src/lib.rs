//! Common utilities shared across SalonLite crates.
//!
//! - `validation`: field-level validation framework used by every form
//! - `format`: display helpers (currency, phone numbers, numeric inputs)

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

pub mod format;
pub mod validation;

// Re-export commonly used types and traits for convenience
pub use format::{format_currency, format_phone, sanitize_digits, sanitize_price};
pub use validation::{
    EmailValidator, FieldError, FieldValidator, RangeValidator, StringValidator, ValidationError,
    ValidationResult, Validator,
};
