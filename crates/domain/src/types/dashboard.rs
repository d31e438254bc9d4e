//! Server-side dashboard aggregates (`GET /dashboard/`)

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr, PickFirst};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCount {
    /// Kept as text: unknown statuses are still displayed.
    #[serde(rename = "AppStatus")]
    pub status: String,
    #[serde(rename = "Count", default)]
    pub count: u64,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AverageMax {
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[serde(rename = "Avg", default)]
    pub avg: Option<f64>,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[serde(rename = "Max", default)]
    pub max: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRank {
    #[serde(rename = "ServiceName", default)]
    pub name: Option<String>,
    #[serde(rename = "Count", default)]
    pub count: u64,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayOfWeekTotal {
    /// 1 = Monday .. 7 = Sunday
    #[serde(rename = "DayOfWeek")]
    pub day_of_week: u8,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    #[serde(rename = "Total", default)]
    pub total: f64,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    #[serde(rename = "AppointmentCountByStatus", default)]
    pub counts_by_status: Vec<StatusCount>,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[serde(rename = "EarnedTotals", default)]
    pub earned_total: Option<f64>,
    #[serde(rename = "AppointmentAverage", default)]
    pub appointment_average: AverageMax,
    #[serde(rename = "DailyRevenueAverage", default)]
    pub daily_revenue: AverageMax,
    #[serde(rename = "TopServices", default)]
    pub top_services: Vec<ServiceRank>,
    #[serde(rename = "ServiceCount", default)]
    pub service_count: u64,
    #[serde(rename = "TotalsByDayOfWeek", default)]
    pub totals_by_day_of_week: Vec<DayOfWeekTotal>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mixed_numeric_forms_and_nulls() {
        let summary: DashboardSummary = serde_json::from_str(
            r#"{
                "AppointmentCountByStatus": [{"AppStatus": "Open", "Count": 3}],
                "EarnedTotals": "1234.5",
                "AppointmentAverage": {"Avg": null, "Max": 80},
                "DailyRevenueAverage": {"Avg": "410.25", "Max": "600"},
                "TopServices": [{"ServiceName": null, "Count": 2}],
                "ServiceCount": 9,
                "TotalsByDayOfWeek": [{"DayOfWeek": 1, "Total": "100.00"}]
            }"#,
        )
        .unwrap();

        assert_eq!(summary.earned_total, Some(1234.5));
        assert_eq!(summary.appointment_average.avg, None);
        assert_eq!(summary.appointment_average.max, Some(80.0));
        assert_eq!(summary.daily_revenue.avg, Some(410.25));
        assert_eq!(summary.top_services[0].name, None);
        assert_eq!(summary.totals_by_day_of_week[0].total, 100.0);
    }

    #[test]
    fn empty_object_is_an_empty_summary() {
        let summary: DashboardSummary = serde_json::from_str("{}").unwrap();
        assert_eq!(summary, DashboardSummary::default());
    }
}
