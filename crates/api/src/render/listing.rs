use std::fmt::Write;

use salonlite_common::format_currency;
use salonlite_core::directory::HistoryTab;
use salonlite_core::{DirectoryView, HistoryView};
use salonlite_domain::constants::UNKNOWN_CUSTOMER;
use salonlite_domain::{Appointment, Customer, SavedService, Technician};

use super::fit;

pub fn render_customers(view: &DirectoryView<Customer>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", view.summary_line("customers"));
    for customer in view.visible() {
        let line = format!(
            "{:>5}  {}  {}  {}",
            customer.id,
            fit(&customer.display_name(), 24),
            fit(customer.phone.as_deref().unwrap_or(""), 14),
            customer.email.as_deref().unwrap_or(""),
        );
        let _ = writeln!(out, "{}", line.trim_end());
    }
    out
}

pub fn render_technicians(view: &DirectoryView<Technician>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", view.summary_line("technicians"));
    for tech in view.visible() {
        let line = format!(
            "{:>5}  {}  {}  {}",
            tech.id,
            fit(&tech.name, 24),
            fit(tech.phone.as_deref().unwrap_or(""), 14),
            tech.email.as_deref().unwrap_or(""),
        );
        let _ = writeln!(out, "{}", line.trim_end());
    }
    out
}

pub fn render_saved_services(view: &DirectoryView<SavedService>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", view.summary_line("services"));
    for service in view.visible() {
        let _ = writeln!(
            out,
            "{}  {}  {:>10}  {:>4} min",
            fit(&service.code, 8),
            fit(&service.name, 28),
            format_currency(service.price),
            service.duration_minutes,
        );
    }
    out
}

/// Both history tabs; expanded appointments list their services.
pub fn render_history(view: &HistoryView) -> String {
    let mut out = String::new();
    for (tab, title, appointments) in [
        (HistoryTab::Previous, "Previous", &view.previous),
        (HistoryTab::Upcoming, "Upcoming", &view.upcoming),
    ] {
        let active = if view.active_tab == tab { "*" } else { "" };
        let _ = writeln!(out, "{title}{active} ({})", appointments.len());
        if appointments.is_empty() {
            let _ = writeln!(out, "  No appointments");
        }
        for appointment in appointments {
            write_appointment(&mut out, appointment, view.is_expanded(appointment.id));
        }
    }
    out
}

fn write_appointment(out: &mut String, appointment: &Appointment, expanded: bool) {
    let customer = appointment
        .customer_record()
        .map_or_else(|| UNKNOWN_CUSTOMER.to_string(), Customer::display_name);
    let _ = writeln!(
        out,
        "  {}  {}  {}  {}",
        appointment.date,
        fit(appointment.status.label(), 12),
        fit(&customer, 24),
        format_currency(appointment.total.unwrap_or(0.0)),
    );
    if expanded {
        for line in &appointment.services {
            let _ = writeln!(
                out,
                "      {}  {}  {} min  {}",
                line.start_time.format("%H:%M"),
                fit(&line.name, 24),
                line.duration_minutes,
                format_currency(line.price),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use salonlite_domain::{AppointmentStatus, ServiceLine};

    use super::*;

    fn customer(id: i64, first: &str, phone: Option<&str>) -> Customer {
        Customer {
            id,
            first_name: first.into(),
            last_name: "Lee".into(),
            email: None,
            phone: phone.map(Into::into),
            address: None,
            info: None,
        }
    }

    #[test]
    fn customers_follow_the_query() {
        let mut view = DirectoryView::new(vec![
            customer(1, "Ana", Some("(555) 000-1111")),
            customer(2, "Bo", None),
        ]);
        view.set_query("ana");

        let text = render_customers(&view);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Showing 1 of 2 customers");
        assert_eq!(lines.len(), 2);
        assert!(lines[1].contains("Ana Lee") && lines[1].contains("(555) 000-1111"));
    }

    #[test]
    fn history_expands_services() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 3).unwrap();
        let appointment = Appointment {
            id: 4,
            date,
            status: AppointmentStatus::Closed,
            total: Some(25.0),
            payment_type: None,
            customer_ref: None,
            customer: Some(customer(1, "Ana", None)),
            services: vec![ServiceLine {
                name: "Polish".into(),
                code: "POL".into(),
                start_time: NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
                duration_minutes: 15,
                price: 25.0,
                comment: None,
                tech_id: 1,
            }],
        };
        let today = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
        let mut view = HistoryView::new(vec![appointment], today);
        assert!(!render_history(&view).contains("Polish"));

        view.toggle(4);
        let text = render_history(&view);
        assert!(text.starts_with("Previous* (1)"));
        assert!(text.contains("10:30  Polish"));
        assert!(text.contains("Upcoming (0)\n  No appointments"));
    }
}
