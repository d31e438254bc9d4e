//! Appointment board service - loads a day and books appointments

use std::sync::Arc;

use chrono::NaiveDate;
use parking_lot::Mutex;
use salonlite_domain::{Appointment, AppointmentDraft, AppointmentId, Result};

use super::ports::AppointmentRepository;
use super::view::{BoardData, BoardView};
use crate::directory::ports::TechnicianRepository;
use crate::freshness::ApplyOutcome;

pub struct BoardService {
    technicians: Arc<dyn TechnicianRepository>,
    appointments: Arc<dyn AppointmentRepository>,
}

impl BoardService {
    pub fn new(
        technicians: Arc<dyn TechnicianRepository>,
        appointments: Arc<dyn AppointmentRepository>,
    ) -> Self {
        Self { technicians, appointments }
    }

    /// Fetch the technicians working on `date` and that day's appointments.
    ///
    /// Both requests run concurrently; either failing fails the whole load.
    pub async fn load_day(&self, date: NaiveDate) -> Result<BoardData> {
        let (technicians, appointments) = futures::try_join!(
            self.technicians.technicians_on(date),
            self.appointments.appointments_on(date),
        )?;
        tracing::debug!(
            %date,
            technicians = technicians.len(),
            appointments = appointments.len(),
            "board day loaded"
        );
        Ok(BoardData { technicians, appointments })
    }

    /// Select `date` on `view` and load it.
    ///
    /// The lock is released while the requests are in flight, so several
    /// refreshes may overlap; only the latest one lands.
    pub async fn refresh(&self, view: &Mutex<BoardView>, date: NaiveDate) -> ApplyOutcome {
        let ticket = view.lock().begin_load(date);
        let result = self.load_day(date).await;
        view.lock().apply(ticket, result)
    }

    /// Create (`existing == None`) or replace an appointment.
    pub async fn save_appointment(
        &self,
        existing: Option<AppointmentId>,
        draft: &AppointmentDraft,
    ) -> Result<Appointment> {
        let saved = match existing {
            Some(id) => self.appointments.update_appointment(id, draft).await?,
            None => self.appointments.create_appointment(draft).await?,
        };
        tracing::info!(appointment_id = saved.id, date = %saved.date, "appointment saved");
        Ok(saved)
    }
}
