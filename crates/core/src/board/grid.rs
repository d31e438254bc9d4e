//! Technician x slot placement map
//!
//! Every service on the loaded appointments is placed on the column of its
//! technician at the row of its start time. The start cell records the span;
//! the rows it covers after that are continuation cells. Anything that
//! cannot be placed is reported rather than dropped.

use chrono::{NaiveDate, NaiveTime};
use salonlite_domain::constants::SLOT_COUNT;
use salonlite_domain::{Appointment, AppointmentId, TechId, Technician};
use serde::Serialize;

use super::slots::{day_slots, slot_index, slot_span, TimeSlot};

/// Where a service sits inside the loaded appointment list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServiceRef {
    pub appointment_index: usize,
    pub service_index: usize,
    pub appointment_id: AppointmentId,
}

/// A service starting at this cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub service: ServiceRef,
    /// Rows covered on the board, already clipped to the last slot.
    pub span: usize,
    /// The service runs past 17:45 and was clipped.
    pub overflows_window: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Cell {
    Start(Placement),
    /// Covered by the service starting at `start_slot`.
    Continuation { start_slot: usize },
    Empty,
}

impl Cell {
    pub fn is_occupied(&self) -> bool {
        !matches!(self, Self::Empty)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnplacedReason {
    /// Start row already taken by an earlier service.
    Collision,
    /// Start time off the 15-minute axis or outside the working day.
    OffGrid,
    /// Technician is not one of the loaded columns.
    UnknownTechnician,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Unplaced {
    pub service: ServiceRef,
    pub tech_id: TechId,
    pub reason: UnplacedReason,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    pub tech_id: TechId,
    pub tech_name: String,
    pub cells: Vec<Cell>,
}

impl Column {
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_occupied()).count()
    }

    pub fn placements(&self) -> impl Iterator<Item = (usize, &Placement)> {
        self.cells.iter().enumerate().filter_map(|(slot, cell)| match cell {
            Cell::Start(placement) => Some((slot, placement)),
            _ => None,
        })
    }
}

/// Pre-filled values for booking into an empty cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NewAppointmentTarget {
    pub date: NaiveDate,
    pub tech_id: TechId,
    pub start_time: NaiveTime,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardGrid {
    pub slots: Vec<TimeSlot>,
    pub columns: Vec<Column>,
    pub unplaced: Vec<Unplaced>,
}

impl BoardGrid {
    pub fn row_count(&self) -> usize {
        self.slots.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column(&self, tech_id: TechId) -> Option<&Column> {
        self.columns.iter().find(|column| column.tech_id == tech_id)
    }

    pub fn cell(&self, tech_id: TechId, slot: usize) -> Option<&Cell> {
        self.column(tech_id).and_then(|column| column.cells.get(slot))
    }

    /// Booking target for an empty cell; `None` for occupied or unknown
    /// cells.
    pub fn new_appointment_target(
        &self,
        date: NaiveDate,
        tech_id: TechId,
        slot: usize,
    ) -> Option<NewAppointmentTarget> {
        match self.cell(tech_id, slot)? {
            Cell::Empty => Some(NewAppointmentTarget {
                date,
                tech_id,
                start_time: self.slots.get(slot)?.time,
            }),
            _ => None,
        }
    }
}

/// Lay out `appointments` over one column per technician.
///
/// Candidates are visited in slot order, and within a slot in appointment
/// then service order, so the first service listed for a slot wins it.
pub fn build_grid(technicians: &[Technician], appointments: &[Appointment]) -> BoardGrid {
    let mut columns: Vec<Column> = technicians
        .iter()
        .map(|tech| Column {
            tech_id: tech.id,
            tech_name: tech.name.clone(),
            cells: vec![Cell::Empty; SLOT_COUNT],
        })
        .collect();
    let mut unplaced = Vec::new();

    // (column, start slot, service, duration) in iteration order
    let mut candidates = Vec::new();
    for (appointment_index, appointment) in appointments.iter().enumerate() {
        for (service_index, service) in appointment.services.iter().enumerate() {
            let service_ref =
                ServiceRef { appointment_index, service_index, appointment_id: appointment.id };
            let Some(column) = columns.iter().position(|c| c.tech_id == service.tech_id) else {
                unplaced.push(Unplaced {
                    service: service_ref,
                    tech_id: service.tech_id,
                    reason: UnplacedReason::UnknownTechnician,
                });
                continue;
            };
            match slot_index(service.start_time) {
                Some(slot) => candidates.push((column, slot, service_ref, service.duration_minutes)),
                None => unplaced.push(Unplaced {
                    service: service_ref,
                    tech_id: service.tech_id,
                    reason: UnplacedReason::OffGrid,
                }),
            }
        }
    }

    candidates.sort_by_key(|&(column, slot, _, _)| (column, slot));

    for (column_index, start, service_ref, duration) in candidates {
        let column = &mut columns[column_index];
        if column.cells[start].is_occupied() {
            unplaced.push(Unplaced {
                service: service_ref,
                tech_id: column.tech_id,
                reason: UnplacedReason::Collision,
            });
            continue;
        }

        let wanted = slot_span(duration);
        let available = SLOT_COUNT - start;
        let span = wanted.min(available);
        column.cells[start] = Cell::Start(Placement {
            service: service_ref,
            span,
            overflows_window: wanted > available,
        });
        for cell in column.cells.iter_mut().skip(start + 1).take(span.saturating_sub(1)) {
            *cell = Cell::Continuation { start_slot: start };
        }
    }

    if !unplaced.is_empty() {
        tracing::debug!(count = unplaced.len(), "services left off the board");
    }

    BoardGrid { slots: day_slots(), columns, unplaced }
}
