//! Display model over server-side dashboard aggregates

use std::collections::HashMap;

use salonlite_common::format_currency;
use salonlite_domain::constants::UNKNOWN_SERVICE;
use salonlite_domain::{AppointmentStatus, DashboardSummary};
use serde::Serialize;

const WEEKDAY_NAMES: [&str; 7] =
    ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusLine {
    pub label: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatLine {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedService {
    pub rank: usize,
    pub name: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekdayTotal {
    pub day: &'static str,
    pub total: f64,
}

/// Everything the dashboard cards show
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardDisplay {
    pub total_appointments: u64,
    pub statuses: Vec<StatusLine>,
    pub earned_total: String,
    pub revenue_stats: Vec<StatLine>,
    pub service_count: u64,
    pub top_services: Vec<RankedService>,
    /// Monday first, always seven entries.
    pub weekday_totals: Vec<WeekdayTotal>,
}

impl DashboardDisplay {
    pub fn from_summary(summary: &DashboardSummary) -> Self {
        let statuses = summary
            .counts_by_status
            .iter()
            .map(|entry| StatusLine { label: status_label(&entry.status), count: entry.count })
            .collect();

        let money = |value: Option<f64>| format_currency(value.unwrap_or(0.0));
        let revenue_stats = vec![
            StatLine {
                label: "Avg per Appointment",
                value: money(summary.appointment_average.avg),
            },
            StatLine {
                label: "Highest Appointment",
                value: money(summary.appointment_average.max),
            },
            StatLine { label: "Avg Daily Revenue", value: money(summary.daily_revenue.avg) },
            StatLine { label: "Highest Day", value: money(summary.daily_revenue.max) },
        ];

        let top_services = summary
            .top_services
            .iter()
            .enumerate()
            .map(|(i, service)| RankedService {
                rank: i + 1,
                name: service
                    .name
                    .as_deref()
                    .filter(|name| !name.trim().is_empty())
                    .unwrap_or(UNKNOWN_SERVICE)
                    .to_string(),
                count: service.count,
            })
            .collect();

        Self {
            total_appointments: summary.counts_by_status.iter().map(|s| s.count).sum(),
            statuses,
            earned_total: money(summary.earned_total),
            revenue_stats,
            service_count: summary.service_count,
            top_services,
            weekday_totals: weekday_totals(summary),
        }
    }
}

/// Known statuses use their display label; anything else is shown as sent.
fn status_label(raw: &str) -> String {
    raw.parse::<AppointmentStatus>()
        .map_or_else(|_| raw.to_string(), |status| status.label().to_string())
}

fn weekday_totals(summary: &DashboardSummary) -> Vec<WeekdayTotal> {
    let by_day: HashMap<u8, f64> = summary
        .totals_by_day_of_week
        .iter()
        .map(|entry| (entry.day_of_week, entry.total))
        .collect();
    WEEKDAY_NAMES
        .iter()
        .zip(1u8..)
        .map(|(&day, number)| WeekdayTotal {
            day,
            total: by_day.get(&number).copied().unwrap_or(0.0),
        })
        .collect()
}
