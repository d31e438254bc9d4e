//! Backend paths, trailing slashes included

use salonlite_domain::{AppointmentId, CustomerId, SavedServiceId, TechId};

pub const LOGIN: &str = "/login/";
pub const LOGOUT: &str = "/logout/";
pub const SESSION_STATUS: &str = "/is_logged_in/";
pub const TECHNICIANS: &str = "/technicians/";
pub const SCHEDULES: &str = "/schedules/";
pub const APPOINTMENTS: &str = "/appointments/";
pub const CUSTOMERS: &str = "/customers/";
pub const SAVED_SERVICES: &str = "/savedservices/";
pub const DASHBOARD: &str = "/dashboard/";

/// Query key for single-day filters
pub const DATE_PARAM: &str = "Date";

pub fn technician(id: TechId) -> String {
    format!("/technicians/{id}/")
}

pub fn technician_schedules(id: TechId) -> String {
    format!("/technicians/{id}/schedules/")
}

pub fn service_history(id: TechId) -> String {
    format!("/technicians/service_history/{id}/")
}

pub fn appointment(id: AppointmentId) -> String {
    format!("/appointments/{id}/")
}

pub fn customer(id: CustomerId) -> String {
    format!("/customers/{id}/")
}

pub fn saved_service(id: SavedServiceId) -> String {
    format!("/savedservices/{id}/")
}
