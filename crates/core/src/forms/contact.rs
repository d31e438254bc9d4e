//! Customer and technician forms

use salonlite_common::validation::{EmailValidator, ValidationResult, Validator};
use salonlite_common::format_phone;
use salonlite_domain::{Customer, CustomerDraft, Technician, TechnicianDraft};

use super::INVALID_EMAIL;

fn check_email(validator: &mut Validator, email: &str) {
    let email = email.trim();
    if !email.is_empty() {
        validator.validate_field("email", email, &EmailValidator::new(), Some(INVALID_EMAIL));
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    phone: String,
    pub address: String,
    pub info: String,
}

impl CustomerForm {
    pub fn edit(customer: &Customer) -> Self {
        let draft = customer.to_draft();
        Self {
            first_name: draft.first_name,
            last_name: draft.last_name,
            email: draft.email,
            phone: draft.phone,
            address: draft.address,
            info: draft.info,
        }
    }

    /// Store `input` reformatted as `(XXX) XXX-XXXX`.
    pub fn set_phone(&mut self, input: &str) {
        self.phone = format_phone(input);
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn validate(&self) -> ValidationResult<CustomerDraft> {
        let mut validator = Validator::new();
        check_email(&mut validator, &self.email);
        validator.finalize()?;

        Ok(CustomerDraft {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.clone(),
            address: self.address.clone(),
            info: self.info.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TechnicianForm {
    pub name: String,
    pub email: String,
    phone: String,
    pub info: String,
    pub address: String,
    /// Open every date for a newly created technician
    pub open_schedule: bool,
}

impl TechnicianForm {
    pub fn edit(technician: &Technician) -> Self {
        let draft = technician.to_draft();
        Self {
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            info: draft.info,
            address: draft.address,
            open_schedule: false,
        }
    }

    pub fn set_phone(&mut self, input: &str) {
        self.phone = format_phone(input);
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn validate(&self) -> ValidationResult<TechnicianDraft> {
        let mut validator = Validator::new();
        check_email(&mut validator, &self.email);
        validator.finalize()?;

        Ok(TechnicianDraft {
            name: self.name.trim().to_string(),
            phone: self.phone.clone(),
            email: self.email.trim().to_string(),
            info: self.info.clone(),
            address: self.address.clone(),
        })
    }
}
