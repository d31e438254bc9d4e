//! Technician service history split around today

use std::collections::HashSet;

use chrono::NaiveDate;
use salonlite_domain::{Appointment, AppointmentId};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HistoryTab {
    #[default]
    Previous,
    Upcoming,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryView {
    /// Appointments dated before today
    pub previous: Vec<Appointment>,
    /// Appointments dated today or later
    pub upcoming: Vec<Appointment>,
    pub active_tab: HistoryTab,
    expanded: HashSet<AppointmentId>,
}

impl HistoryView {
    pub fn new(appointments: Vec<Appointment>, today: NaiveDate) -> Self {
        let (previous, upcoming) = appointments.into_iter().partition(|a| a.date < today);
        Self { previous, upcoming, active_tab: HistoryTab::Previous, expanded: HashSet::new() }
    }

    pub fn active(&self) -> &[Appointment] {
        match self.active_tab {
            HistoryTab::Previous => &self.previous,
            HistoryTab::Upcoming => &self.upcoming,
        }
    }

    /// Expand a collapsed appointment or collapse an expanded one.
    pub fn toggle(&mut self, id: AppointmentId) {
        if !self.expanded.remove(&id) {
            self.expanded.insert(id);
        }
    }

    pub fn is_expanded(&self, id: AppointmentId) -> bool {
        self.expanded.contains(&id)
    }
}
