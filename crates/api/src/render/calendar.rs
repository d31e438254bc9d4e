use std::fmt::Write;

use salonlite_core::availability::MonthCalendar;
use salonlite_domain::Availability;

const LEGEND: &str = "+ available   - unavailable   . not set   * today";

/// Sunday-first month grid with an availability marker after each day.
pub fn render_calendar(calendar: &MonthCalendar) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", calendar.title());
    let _ = writeln!(out, " Su   Mo   Tu   We   Th   Fr   Sa");

    for week in &calendar.weeks {
        let cells: Vec<String> = week
            .iter()
            .map(|day| {
                if !day.in_month {
                    return "    ".to_string();
                }
                let today = if day.is_today { '*' } else { ' ' };
                let marker = match day.availability {
                    Availability::Available => '+',
                    Availability::Unavailable => '-',
                    Availability::Unset => '.',
                };
                format!("{today}{:>2}{marker}", day.date.format("%-d"))
            })
            .collect();
        let _ = writeln!(out, "{}", cells.join(" ").trim_end());
    }

    let _ = writeln!(out, "{LEGEND}");
    out
}
