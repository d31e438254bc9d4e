//! Login form

use salonlite_common::validation::{ValidationResult, Validator};
use salonlite_domain::{Credentials, SalonError};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> ValidationResult<Credentials> {
        let mut validator = Validator::new();
        validator.require("username", &self.username, "Username is required");
        validator.ensure(!self.password.is_empty(), "password", "Password is required");
        validator.finalize()?;

        Ok(Credentials {
            username: self.username.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

/// Message shown under the login form for a failed attempt.
pub fn login_failure_message(error: &SalonError) -> &'static str {
    match error {
        SalonError::Auth(_) => "Invalid username or password",
        _ => "Something went wrong. Please try again.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_fields_required() {
        let err = LoginForm::default().validate().unwrap_err();
        assert_eq!(err.message_for("username"), Some("Username is required"));
        assert_eq!(err.message_for("password"), Some("Password is required"));
    }

    #[test]
    fn username_is_trimmed() {
        let form = LoginForm { username: " front ".into(), password: "pw".into() };
        assert_eq!(form.validate().unwrap().username, "front");
    }

    #[test]
    fn failure_messages() {
        assert_eq!(
            login_failure_message(&SalonError::Auth("404".into())),
            "Invalid username or password"
        );
        assert_eq!(
            login_failure_message(&SalonError::Network("reset".into())),
            "Something went wrong. Please try again."
        );
    }
}
