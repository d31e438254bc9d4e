//! Appointment booking form

use chrono::{NaiveDate, NaiveTime, Timelike};
use salonlite_common::validation::{ValidationResult, Validator};
use salonlite_domain::constants::DEFAULT_SERVICE_DURATION_MINUTES;
use salonlite_domain::{
    Appointment, AppointmentDraft, AppointmentId, AppointmentStatus, CustomerId, PaymentType,
    SavedService, ServiceLine, TechId,
};

use crate::board::NewAppointmentTarget;

const MISSING_SERVICE_FIELDS: &str = "Please fill in all required service fields";

/// One editable service row
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceLineForm {
    pub name: String,
    pub code: String,
    pub start_time: Option<NaiveTime>,
    pub duration_minutes: u32,
    pub price: f64,
    pub comment: String,
    pub tech_id: Option<TechId>,
}

impl Default for ServiceLineForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            code: String::new(),
            start_time: None,
            duration_minutes: DEFAULT_SERVICE_DURATION_MINUTES,
            price: 0.0,
            comment: String::new(),
            tech_id: None,
        }
    }
}

impl ServiceLineForm {
    fn from_line(line: &ServiceLine) -> Self {
        Self {
            name: line.name.clone(),
            code: line.code.clone(),
            // seconds are not editable
            start_time: line.start_time.with_second(0),
            duration_minutes: line.duration_minutes,
            price: line.price,
            comment: line.comment.clone().unwrap_or_default(),
            tech_id: Some(line.tech_id),
        }
    }

    /// Time this line finishes, if it has a start and ends before midnight.
    pub fn end_time(&self) -> Option<NaiveTime> {
        let start = self.start_time?;
        let minutes = start.hour() * 60 + start.minute() + self.duration_minutes;
        NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0)
    }

    /// Copy name, code, duration and price from a catalog entry.
    pub fn apply_saved_service(&mut self, service: &SavedService) {
        self.name = service.name.clone();
        self.code = service.code.clone();
        self.duration_minutes = service.duration_minutes;
        self.price = service.price;
    }

    fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.code.trim().is_empty()
            && self.start_time.is_some()
            && self.tech_id.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppointmentForm {
    editing: Option<AppointmentId>,
    pub date: NaiveDate,
    pub customer_id: Option<CustomerId>,
    pub payment_type: PaymentType,
    pub status: AppointmentStatus,
    services: Vec<ServiceLineForm>,
}

impl AppointmentForm {
    /// Blank booking for `date` with a single empty service row.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            editing: None,
            date,
            customer_id: None,
            payment_type: PaymentType::default(),
            status: AppointmentStatus::default(),
            services: vec![ServiceLineForm::default()],
        }
    }

    /// Booking started from an empty board cell.
    pub fn for_target(target: &NewAppointmentTarget) -> Self {
        let mut form = Self::new(target.date);
        form.services[0].start_time = Some(target.start_time);
        form.services[0].tech_id = Some(target.tech_id);
        form
    }

    pub fn edit(appointment: &Appointment) -> Self {
        let mut services: Vec<_> = appointment.services.iter().map(ServiceLineForm::from_line).collect();
        if services.is_empty() {
            services.push(ServiceLineForm::default());
        }
        Self {
            editing: Some(appointment.id),
            date: appointment.date,
            customer_id: appointment.customer_id(),
            payment_type: appointment.payment_type.unwrap_or_default(),
            status: appointment.status,
            services,
        }
    }

    pub fn editing(&self) -> Option<AppointmentId> {
        self.editing
    }

    pub fn services(&self) -> &[ServiceLineForm] {
        &self.services
    }

    pub fn service_mut(&mut self, index: usize) -> Option<&mut ServiceLineForm> {
        self.services.get_mut(index)
    }

    /// Append a row starting where the last one ends, with the same technician.
    pub fn add_service(&mut self) {
        let next = match self.services.last() {
            Some(last) => ServiceLineForm {
                start_time: last.end_time(),
                tech_id: last.tech_id,
                ..ServiceLineForm::default()
            },
            None => ServiceLineForm::default(),
        };
        self.services.push(next);
    }

    /// Remove a row; the last remaining row cannot be removed.
    pub fn remove_service(&mut self, index: usize) -> bool {
        if self.services.len() <= 1 || index >= self.services.len() {
            return false;
        }
        self.services.remove(index);
        true
    }

    /// Set a row's code, filling the rest from the catalog on an exact match.
    pub fn set_service_code(&mut self, index: usize, code: &str, catalog: &[SavedService]) {
        let Some(line) = self.services.get_mut(index) else {
            return;
        };
        line.code = code.to_string();
        if let Some(saved) = catalog.iter().find(|s| !code.is_empty() && s.code == code) {
            line.apply_saved_service(saved);
        }
    }

    pub fn total(&self) -> f64 {
        self.services.iter().map(|s| s.price).sum()
    }

    /// Total as sent to the server, two decimals
    pub fn total_text(&self) -> String {
        format!("{:.2}", self.total())
    }

    pub fn validate(&self) -> ValidationResult<AppointmentDraft> {
        let mut validator = Validator::new();
        validator.ensure(self.customer_id.is_some(), "customer", "Please select a customer");
        validator.validate_nested("services", |v| {
            for (index, line) in self.services.iter().enumerate() {
                v.ensure(line.is_complete(), &index.to_string(), MISSING_SERVICE_FIELDS);
            }
        });
        validator.finalize()?;

        let services = self
            .services
            .iter()
            .filter_map(|line| {
                Some(ServiceLine {
                    name: line.name.trim().to_string(),
                    code: line.code.trim().to_string(),
                    start_time: line.start_time?,
                    duration_minutes: line.duration_minutes,
                    price: line.price,
                    comment: Some(line.comment.clone()),
                    tech_id: line.tech_id?,
                })
            })
            .collect();

        Ok(AppointmentDraft {
            date: self.date,
            total: self.total_text(),
            payment_type: self.payment_type,
            status: self.status,
            customer_id: self.customer_id.unwrap_or_default(),
            services,
        })
    }
}
