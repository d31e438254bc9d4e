use std::fmt::Write;

use chrono::NaiveTime;
use salonlite_core::board::{BoardSnapshot, Cell, UnplacedReason};
use salonlite_core::BoardGeometry;

use super::fit;

const TIME_WIDTH: usize = 9;
const CELL_WIDTH: usize = 24;

/// One line per slot, one column per technician. `now` marks the current
/// row when it falls inside the working day.
pub fn render_board(
    snapshot: &BoardSnapshot,
    geometry: &BoardGeometry,
    now: Option<NaiveTime>,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", snapshot.date.format("%A, %B %-d, %Y"));

    let grid = &snapshot.grid;
    if grid.columns.is_empty() {
        let _ = writeln!(out, "No technicians are working this day.");
    }

    let mut header = format!("  {}", fit("Time", TIME_WIDTH));
    for column in &grid.columns {
        let _ = write!(header, "| {}", fit(&column.tech_name, CELL_WIDTH));
    }
    let _ = writeln!(out, "{}", header.trim_end());

    let current = now.and_then(|time| geometry.current_slot(time));
    for slot in &grid.slots {
        let marker = if current == Some(slot.index) { '>' } else { ' ' };
        let label = if slot.shows_label() { slot.display.as_str() } else { "" };
        let mut line = format!("{marker} {}", fit(label, TIME_WIDTH));
        for column in &grid.columns {
            let text = match column.cells.get(slot.index) {
                Some(Cell::Start(placement)) => snapshot
                    .describe(placement.service)
                    .map(|summary| {
                        let clipped = if placement.overflows_window { "+" } else { "" };
                        format!(
                            "{}: {} ({}m{clipped})",
                            summary.customer_name, summary.service_name, summary.duration_minutes
                        )
                    })
                    .unwrap_or_default(),
                Some(Cell::Continuation { .. }) => "  :".to_string(),
                _ => String::new(),
            };
            let _ = write!(line, "| {}", fit(&text, CELL_WIDTH));
        }
        let _ = writeln!(out, "{}", line.trim_end());
    }

    for unplaced in &grid.unplaced {
        let reason = match unplaced.reason {
            UnplacedReason::Collision => "overlaps an earlier service",
            UnplacedReason::OffGrid => "starts outside the board",
            UnplacedReason::UnknownTechnician => "technician is not on the board",
        };
        let name = snapshot
            .describe(unplaced.service)
            .map_or_else(String::new, |summary| format!(" ({})", summary.service_name));
        let _ = writeln!(out, "! appointment {}{name}: {reason}", unplaced.service.appointment_id);
    }
    out
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use salonlite_core::board::BoardData;
    use salonlite_core::build_grid;
    use salonlite_domain::{Appointment, AppointmentStatus, Customer, ServiceLine, Technician};

    use super::*;

    fn tech(id: i64, name: &str) -> Technician {
        Technician { id, name: name.into(), email: None, phone: None, info: None, address: None }
    }

    fn snapshot() -> BoardSnapshot {
        let date = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
        let technicians = vec![tech(1, "Anna"), tech(2, "Binh")];
        let appointments = vec![Appointment {
            id: 5,
            date,
            status: AppointmentStatus::Open,
            total: Some(40.0),
            payment_type: None,
            customer_ref: None,
            customer: Some(Customer {
                id: 9,
                first_name: "Mia".into(),
                last_name: "Tran".into(),
                email: None,
                phone: None,
                address: None,
                info: None,
            }),
            services: vec![ServiceLine {
                name: "Gel".into(),
                code: "GEL".into(),
                start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
                duration_minutes: 30,
                price: 40.0,
                comment: None,
                tech_id: 2,
            }],
        }];
        let grid = build_grid(&technicians, &appointments);
        BoardSnapshot { date, data: BoardData { technicians, appointments }, grid }
    }

    #[test]
    fn renders_header_rows_and_placements() {
        let text = render_board(&snapshot(), &BoardGeometry::default(), None);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Friday, January 10, 2025");
        assert!(lines[1].contains("| Anna") && lines[1].contains("| Binh"));
        // Title, header and 48 slot rows.
        assert_eq!(lines.len(), 50);
        assert!(lines[2].starts_with("  6:00 AM"));
        // 09:00 is slot 12, 09:15 its continuation.
        assert!(lines[14].contains("Mia Tran: Gel (30m)"));
        assert!(lines[15].ends_with(":"));
    }

    #[test]
    fn marks_current_row() {
        let now = NaiveTime::from_hms_opt(6, 20, 0);
        let text = render_board(&snapshot(), &BoardGeometry::default(), now);
        let marked: Vec<&str> = text.lines().filter(|line| line.starts_with('>')).collect();
        assert_eq!(marked.len(), 1);
        assert!(text.lines().nth(3).unwrap().starts_with('>'));
    }
}
