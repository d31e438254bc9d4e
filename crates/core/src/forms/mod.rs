//! Form state and submit-time validation
//!
//! Every form validates locally and yields the wire draft only when clean,
//! so invalid input never reaches the network.

pub mod appointment;
pub mod catalog;
pub mod contact;
pub mod login;

pub use appointment::{AppointmentForm, ServiceLineForm};
pub use catalog::SavedServiceForm;
pub use contact::{CustomerForm, TechnicianForm};
pub use login::{login_failure_message, LoginForm};

pub(crate) const INVALID_EMAIL: &str = "Please enter a valid email address";
