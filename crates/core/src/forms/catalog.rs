//! Saved-service (catalog) form

use salonlite_common::validation::{
    RangeValidator, StringValidator, ValidationResult, Validator,
};
use salonlite_common::{sanitize_digits, sanitize_price};
use salonlite_domain::{SavedService, SavedServiceDraft, SavedServiceId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SavedServiceForm {
    editing: Option<SavedServiceId>,
    pub code: String,
    pub name: String,
    price: String,
    duration: String,
    pub description: String,
}

impl SavedServiceForm {
    pub fn edit(service: &SavedService) -> Self {
        Self {
            editing: Some(service.id),
            code: service.code.clone(),
            name: service.name.clone(),
            price: service.price.to_string(),
            duration: service.duration_minutes.to_string(),
            description: service.description.clone().unwrap_or_default(),
        }
    }

    pub fn editing(&self) -> Option<SavedServiceId> {
        self.editing
    }

    /// Keep digits and the first decimal point.
    pub fn set_price(&mut self, input: &str) {
        self.price = sanitize_price(input);
    }

    /// Keep digits only.
    pub fn set_duration(&mut self, input: &str) {
        self.duration = sanitize_digits(input);
    }

    pub fn price(&self) -> &str {
        &self.price
    }

    pub fn duration(&self) -> &str {
        &self.duration
    }

    /// Validate against the current catalog. The code must be unique
    /// ignoring case, the entry being edited excepted.
    pub fn validate(&self, catalog: &[SavedService]) -> ValidationResult<SavedServiceDraft> {
        let mut validator = Validator::new();
        let code = self.code.trim();

        validator.validate_field(
            "code",
            code,
            &StringValidator::new().not_empty(),
            Some("Service code is required"),
        );
        let taken = catalog.iter().any(|existing| {
            Some(existing.id) != self.editing && existing.code.eq_ignore_ascii_case(code)
        });
        validator.ensure(code.is_empty() || !taken, "code", "Service code is already used");
        validator.require("name", &self.name, "Service name is required");

        let price = self.price.parse::<f64>().unwrap_or(0.0);
        validator.validate_field(
            "price",
            &price,
            &RangeValidator::empty().greater_than(0.0),
            Some("Please enter a valid price"),
        );
        let duration = self.duration.parse::<u32>().unwrap_or(0);
        validator.validate_field(
            "duration",
            &duration,
            &RangeValidator::empty().greater_than(0),
            Some("Please enter a valid duration"),
        );
        validator.finalize()?;

        Ok(SavedServiceDraft {
            code: code.to_uppercase(),
            name: self.name.trim().to_string(),
            price,
            duration_minutes: duration,
            description: self.description.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<SavedService> {
        vec![
            SavedService {
                id: 1,
                code: "MANI".into(),
                name: "Manicure".into(),
                price: 25.0,
                duration_minutes: 30,
                description: None,
            },
            SavedService {
                id: 2,
                code: "PEDI".into(),
                name: "Pedicure".into(),
                price: 40.0,
                duration_minutes: 45,
                description: None,
            },
        ]
    }

    fn filled(code: &str) -> SavedServiceForm {
        let mut form = SavedServiceForm { code: code.into(), name: "Gel".into(), ..Default::default() };
        form.set_price("35");
        form.set_duration("45");
        form
    }

    #[test]
    fn code_is_upper_cased() {
        let draft = filled("gel").validate(&catalog()).unwrap();
        assert_eq!(draft.code, "GEL");
        assert_eq!(draft.duration_minutes, 45);
    }

    #[test]
    fn duplicate_code_ignores_case() {
        let err = filled("mani").validate(&catalog()).unwrap_err();
        assert_eq!(err.message_for("code"), Some("Service code is already used"));
    }

    #[test]
    fn editing_may_keep_its_own_code() {
        let services = catalog();
        let mut form = SavedServiceForm::edit(&services[1]);
        form.code = "pedi".into();
        assert_eq!(form.validate(&services).unwrap().code, "PEDI");
    }

    #[test]
    fn price_and_duration_must_be_positive() {
        let mut form = filled("NEW");
        form.set_price("0");
        form.set_duration("abc");
        let err = form.validate(&catalog()).unwrap_err();
        assert_eq!(err.message_for("price"), Some("Please enter a valid price"));
        assert_eq!(err.message_for("duration"), Some("Please enter a valid duration"));
        assert_eq!(form.duration(), "");
    }

    #[test]
    fn blank_form_reports_required_fields() {
        let err = SavedServiceForm::default().validate(&[]).unwrap_err();
        assert_eq!(err.message_for("code"), Some("Service code is required"));
        assert_eq!(err.message_for("name"), Some("Service name is required"));
        assert_eq!(err.error_count(), 4);
    }
}
