// Field Validators - Reusable validation components
use std::fmt::Display;

use once_cell::sync::Lazy;
use regex::Regex;

/// Trait for field validators
pub trait FieldValidator<T: ?Sized> {
    /// Validate a field value
    fn validate(&self, value: &T) -> Result<(), String>;
}

/// Range validator for numeric types
///
/// Bounds are inclusive unless built with [`RangeValidator::greater_than`].
#[derive(Debug, Clone)]
pub struct RangeValidator<T> {
    min: Option<T>,
    max: Option<T>,
    exclusive_min: bool,
}

impl<T> Default for RangeValidator<T>
where
    T: PartialOrd + Display + Clone,
{
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> RangeValidator<T>
where
    T: PartialOrd + Display + Clone,
{
    /// Create a new range validator with no constraints
    pub fn empty() -> Self {
        Self { min: None, max: None, exclusive_min: false }
    }

    /// Set minimum value
    pub fn min(mut self, min: T) -> Self {
        self.min = Some(min);
        self.exclusive_min = false;
        self
    }

    /// Require values strictly above `floor`
    pub fn greater_than(mut self, floor: T) -> Self {
        self.min = Some(floor);
        self.exclusive_min = true;
        self
    }

    /// Set maximum value
    pub fn max(mut self, max: T) -> Self {
        self.max = Some(max);
        self
    }
}

impl<T> FieldValidator<T> for RangeValidator<T>
where
    T: PartialOrd + Display + Clone,
{
    fn validate(&self, value: &T) -> Result<(), String> {
        if let Some(ref min) = self.min {
            if self.exclusive_min && value <= min {
                return Err(format!("Value must be greater than {}", min));
            }
            if value < min {
                return Err(format!("Value must be at least {}", min));
            }
        }

        if let Some(ref max) = self.max {
            if value > max {
                return Err(format!("Value must not exceed {}", max));
            }
        }

        Ok(())
    }
}

/// String validator with various constraints
#[derive(Debug, Clone, Default)]
pub struct StringValidator {
    max_length: Option<usize>,
    not_empty: bool,
}

impl StringValidator {
    /// Create a new string validator
    pub fn new() -> Self {
        Self::default()
    }

    /// Require non-empty string (after trimming)
    pub fn not_empty(mut self) -> Self {
        self.not_empty = true;
        self
    }

    /// Set maximum length in characters
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }
}

impl FieldValidator<str> for StringValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        let val = value.trim();

        if self.not_empty && val.is_empty() {
            return Err("Value cannot be empty".to_string());
        }

        if let Some(max) = self.max_length {
            if val.chars().count() > max {
                return Err(format!("Length must not exceed {} characters", max));
            }
        }

        Ok(())
    }
}

impl FieldValidator<String> for StringValidator {
    fn validate(&self, value: &String) -> Result<(), String> {
        FieldValidator::<str>::validate(self, value.as_str())
    }
}

static EMAIL_REGEX: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// Email validator
///
/// Accepts `local@domain.tld` with no whitespace and exactly one `@` before
/// the dotted domain.
#[derive(Debug, Clone, Default)]
pub struct EmailValidator;

impl EmailValidator {
    /// Create a new email validator
    pub fn new() -> Self {
        Self
    }
}

impl FieldValidator<str> for EmailValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        match EMAIL_REGEX.as_ref() {
            Some(re) if re.is_match(value) => Ok(()),
            _ => Err("Invalid email format".to_string()),
        }
    }
}

impl FieldValidator<String> for EmailValidator {
    fn validate(&self, value: &String) -> Result<(), String> {
        FieldValidator::<str>::validate(self, value.as_str())
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for validation::validators.
    use super::*;

    #[test]
    fn test_range_validator_greater_than() {
        let validator = RangeValidator::empty().greater_than(0.0);

        assert!(validator.validate(&0.01).is_ok());
        assert!(validator.validate(&0.0).is_err());
        assert!(validator.validate(&-5.0).is_err());
    }

    #[test]
    fn test_range_validator_min_max() {
        let validator = RangeValidator::empty().min(10).max(100);

        assert!(validator.validate(&10).is_ok());
        assert!(validator.validate(&100).is_ok());
        assert!(validator.validate(&5).is_err());
        assert!(validator.validate(&150).is_err());
    }

    #[test]
    fn test_string_validator_not_empty() {
        let validator = StringValidator::new().not_empty().max_length(4);

        assert!(validator.validate("GEL").is_ok());
        assert!(validator.validate("  ").is_err());
        assert!(validator.validate("PEDICURE").is_err());
    }

    #[test]
    fn test_email_validator() {
        let validator = EmailValidator::new();

        assert!(validator.validate("ana@salon.com").is_ok());
        assert!(validator.validate("a.b@c.d").is_ok());
        assert!(validator.validate("ana@salon").is_err());
        assert!(validator.validate("ana @salon.com").is_err());
        assert!(validator.validate("@salon.com").is_err());
        assert!(validator.validate("").is_err());
    }
}
