//! Port interfaces for the appointment board

use async_trait::async_trait;
use chrono::NaiveDate;
use salonlite_domain::{Appointment, AppointmentDraft, AppointmentId, Result};

/// Source and sink of appointments
#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    /// Appointments booked on `date`
    async fn appointments_on(&self, date: NaiveDate) -> Result<Vec<Appointment>>;

    async fn create_appointment(&self, draft: &AppointmentDraft) -> Result<Appointment>;

    /// Full-record replace
    async fn update_appointment(
        &self,
        id: AppointmentId,
        draft: &AppointmentDraft,
    ) -> Result<Appointment>;
}
