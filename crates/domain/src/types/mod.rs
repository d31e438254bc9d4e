//! Domain types and models
//!
//! Field names follow the backend's JSON (`TechID`, `ServiceStartTime`,
//! `Created_At`); Rust names are snake_case with serde renames.

pub mod appointment;
pub mod catalog;
pub mod customer;
pub mod dashboard;
pub mod schedule;
pub mod session;
pub mod technician;
pub mod wire;

pub use appointment::{
    Appointment, AppointmentDraft, AppointmentId, AppointmentStatus, CustomerRef, PaymentType,
    ServiceLine,
};
pub use catalog::{SavedService, SavedServiceDraft, SavedServiceId};
pub use customer::{Customer, CustomerDraft, CustomerId};
pub use dashboard::{AverageMax, DashboardSummary, DayOfWeekTotal, ServiceRank, StatusCount};
pub use schedule::{Availability, NewScheduleOverride, ScheduleOverride};
pub use session::{Credentials, CsrfToken, SessionStatus};
pub use technician::{TechId, Technician, TechnicianDraft};
