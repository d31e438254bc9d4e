//! Board view state

use chrono::{Duration, NaiveDate};
use salonlite_domain::{Appointment, Result, Technician};

use super::grid::{build_grid, BoardGrid, ServiceRef};
use crate::freshness::{ApplyOutcome, LoadState, RequestGeneration, RequestTicket};

/// Raw records fetched for one day
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardData {
    pub technicians: Vec<Technician>,
    pub appointments: Vec<Appointment>,
}

/// A fully derived day: records plus their layout
#[derive(Debug, Clone, PartialEq)]
pub struct BoardSnapshot {
    pub date: NaiveDate,
    pub data: BoardData,
    pub grid: BoardGrid,
}

/// Text shown inside an occupied start cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellSummary {
    pub customer_name: String,
    pub service_name: String,
    pub duration_minutes: u32,
}

#[derive(Debug)]
pub struct BoardView {
    date: NaiveDate,
    generation: RequestGeneration,
    state: LoadState<BoardSnapshot>,
}

impl BoardView {
    pub fn new(date: NaiveDate) -> Self {
        Self { date, generation: RequestGeneration::new(), state: LoadState::Idle }
    }

    /// Date currently selected (may still be loading)
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn state(&self) -> &LoadState<BoardSnapshot> {
        &self.state
    }

    pub fn snapshot(&self) -> Option<&BoardSnapshot> {
        self.state.ready()
    }

    pub fn grid(&self) -> Option<&BoardGrid> {
        self.snapshot().map(|snapshot| &snapshot.grid)
    }

    /// Select `date` and start a new fetch generation.
    pub fn begin_load(&mut self, date: NaiveDate) -> RequestTicket {
        self.date = date;
        self.state = LoadState::Loading;
        self.generation.issue()
    }

    /// Offer a fetch result. Responses for superseded tickets are dropped.
    pub fn apply(&mut self, ticket: RequestTicket, result: Result<BoardData>) -> ApplyOutcome {
        if !self.generation.is_current(ticket) {
            tracing::debug!(
                generation = ticket.generation(),
                date = %self.date,
                "dropping stale board response"
            );
            return ApplyOutcome::Stale;
        }

        self.state = match result {
            Ok(data) => {
                let grid = build_grid(&data.technicians, &data.appointments);
                LoadState::Ready(BoardSnapshot { date: self.date, data, grid })
            }
            Err(err) => {
                tracing::warn!(date = %self.date, error = %err, "board fetch failed");
                LoadState::Failed(err.to_string())
            }
        };
        ApplyOutcome::Applied
    }

    /// Date `days` away from the selected one (previous/next day arrows).
    pub fn shifted_date(&self, days: i64) -> NaiveDate {
        self.date.checked_add_signed(Duration::days(days)).unwrap_or(self.date)
    }

    /// e.g. `Friday, January 10, 2025`
    pub fn title(&self) -> String {
        self.date.format("%A, %B %-d, %Y").to_string()
    }

    pub fn describe(&self, service: ServiceRef) -> Option<CellSummary> {
        self.snapshot()?.describe(service)
    }
}

impl BoardSnapshot {
    pub fn describe(&self, service: ServiceRef) -> Option<CellSummary> {
        let appointment = self.data.appointments.get(service.appointment_index)?;
        let line = appointment.services.get(service.service_index)?;
        Some(CellSummary {
            customer_name: appointment.customer_record().map_or_else(
                || salonlite_domain::constants::UNKNOWN_CUSTOMER.to_string(),
                |customer| customer.display_name(),
            ),
            service_name: line.name.clone(),
            duration_minutes: line.duration_minutes,
        })
    }
}

#[cfg(test)]
mod tests {
    use salonlite_domain::SalonError;

    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    fn tech(id: i64) -> Technician {
        Technician {
            id,
            name: format!("Tech {id}"),
            email: None,
            phone: None,
            info: None,
            address: None,
        }
    }

    #[test]
    fn stale_response_does_not_overwrite_newer_date() {
        let mut view = BoardView::new(day(10));
        let old = view.begin_load(day(10));
        let new = view.begin_load(day(11));

        let fresh = BoardData { technicians: vec![tech(1)], appointments: vec![] };
        assert_eq!(view.apply(new, Ok(fresh)), ApplyOutcome::Applied);

        let late = BoardData { technicians: vec![tech(1), tech(2)], appointments: vec![] };
        assert_eq!(view.apply(old, Ok(late)), ApplyOutcome::Stale);

        let snapshot = view.snapshot().unwrap();
        assert_eq!(snapshot.date, day(11));
        assert_eq!(snapshot.grid.column_count(), 1);
    }

    #[test]
    fn failure_clears_previous_data() {
        let mut view = BoardView::new(day(10));
        let first = view.begin_load(day(10));
        view.apply(first, Ok(BoardData { technicians: vec![tech(1)], appointments: vec![] }));

        let second = view.begin_load(day(11));
        view.apply(second, Err(SalonError::Network("connection refused".into())));

        assert!(view.grid().is_none());
        assert!(matches!(view.state(), LoadState::Failed(msg) if msg.contains("connection refused")));
    }

    #[test]
    fn title_and_navigation() {
        let view = BoardView::new(day(10));
        assert_eq!(view.title(), "Friday, January 10, 2025");
        assert_eq!(view.shifted_date(-1), day(9));
        assert_eq!(view.shifted_date(1), day(11));
    }
}
