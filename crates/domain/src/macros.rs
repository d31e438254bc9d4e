//! Macro for implementing Display and FromStr for wire enums
//!
//! Backend enums (appointment status, payment type) travel as fixed strings.
//! This macro derives both directions from one mapping table so the CLI
//! argument parser and the renderer agree with the JSON representation.
//!
//! # Example
//!
//! ```rust
//! use salonlite_domain::impl_wire_enum_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Shift {
//!     Morning,
//!     Evening,
//! }
//!
//! impl_wire_enum_conversions!(Shift {
//!     Morning => "morning",
//!     Evening => "evening",
//! });
//!
//! assert_eq!(Shift::Morning.to_string(), "morning");
//! assert_eq!("EVENING".parse::<Shift>(), Ok(Shift::Evening));
//! ```

/// Implements Display and FromStr for an enum from a variant/string table
///
/// - Display writes the mapped string verbatim
/// - FromStr matches the mapped string ignoring ASCII case
#[macro_export]
macro_rules! impl_wire_enum_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Wire representation of the variant.
            pub const fn as_wire(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_wire())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                let trimmed = s.trim();
                $(
                    if trimmed.eq_ignore_ascii_case($str) {
                        return Ok(Self::$variant);
                    }
                )+
                Err(format!("Invalid {}: {}", stringify!($enum_name), s))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Tender {
        Cash,
        CreditCard,
    }

    impl_wire_enum_conversions!(Tender {
        Cash => "cash",
        CreditCard => "credit_card",
    });

    #[test]
    fn test_display_uses_wire_string() {
        assert_eq!(Tender::Cash.to_string(), "cash");
        assert_eq!(Tender::CreditCard.to_string(), "credit_card");
        assert_eq!(Tender::CreditCard.as_wire(), "credit_card");
    }

    #[test]
    fn test_fromstr_ignores_case_and_whitespace() {
        assert_eq!(Tender::from_str("CASH").unwrap(), Tender::Cash);
        assert_eq!(Tender::from_str(" Credit_Card ").unwrap(), Tender::CreditCard);
    }

    #[test]
    fn test_fromstr_invalid() {
        let result = Tender::from_str("voucher");
        assert!(result.unwrap_err().contains("Invalid Tender: voucher"));
        assert!(Tender::from_str("").is_err());
    }
}
