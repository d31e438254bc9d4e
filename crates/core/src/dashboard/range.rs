//! Reporting period presets

use chrono::{Datelike, Duration, Months, NaiveDate};
use salonlite_domain::impl_wire_enum_conversions;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RangePreset {
    #[default]
    Today,
    Week,
    Month,
    Year,
}

impl_wire_enum_conversions!(RangePreset {
    Today => "today",
    Week => "week",
    Month => "month",
    Year => "year",
});

/// Inclusive day range sent as `StartDate` / `EndDate`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl RangePreset {
    /// Period containing `today`; weeks run Monday through Sunday.
    pub fn range(self, today: NaiveDate) -> DateRange {
        match self {
            Self::Today => DateRange { start: today, end: today },
            Self::Week => {
                let start = today - Duration::days(i64::from(today.weekday().num_days_from_monday()));
                DateRange { start, end: start + Duration::days(6) }
            }
            Self::Month => {
                let start = today.with_day(1).unwrap_or(today);
                let end = start
                    .checked_add_months(Months::new(1))
                    .and_then(|next| next.pred_opt())
                    .unwrap_or(today);
                DateRange { start, end }
            }
            Self::Year => DateRange {
                start: NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today),
                end: NaiveDate::from_ymd_opt(today.year(), 12, 31).unwrap_or(today),
            },
        }
    }
}
