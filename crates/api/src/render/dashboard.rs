use std::fmt::Write;

use salonlite_common::format_currency;
use salonlite_core::dashboard::DateRange;
use salonlite_core::{DashboardDisplay, RangePreset};

/// Status counts, revenue, top services and the weekday series.
pub fn render_dashboard(
    preset: RangePreset,
    range: &DateRange,
    display: &DashboardDisplay,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Dashboard: {preset} ({} to {})", range.start, range.end);

    let _ = writeln!(out, "\nAppointments: {}", display.total_appointments);
    for status in &display.statuses {
        let _ = writeln!(out, "  {:<22}{:>6}", status.label, status.count);
    }

    let _ = writeln!(out, "\nEarned: {}", display.earned_total);
    for stat in &display.revenue_stats {
        let _ = writeln!(out, "  {:<22}{:>12}", stat.label, stat.value);
    }

    let _ = writeln!(out, "\nServices performed: {}", display.service_count);
    if display.top_services.is_empty() {
        let _ = writeln!(out, "  No services in this period");
    }
    for service in &display.top_services {
        let _ = writeln!(out, "  {}. {} ({})", service.rank, service.name, service.count);
    }

    let _ = writeln!(out, "\nRevenue by weekday:");
    for day in &display.weekday_totals {
        let _ = writeln!(out, "  {:<22}{:>12}", day.day, format_currency(day.total));
    }
    out
}
