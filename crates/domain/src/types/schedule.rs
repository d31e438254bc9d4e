//! Technician availability overrides

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::technician::TechId;
use crate::constants::{open_all_from, open_all_to};
use super::wire;

/// A date-range assertion of a technician's availability
///
/// Overrides are append-only and may overlap; the most recently created one
/// wins for any day they share.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleOverride {
    #[serde(rename = "TechID")]
    pub tech_id: TechId,
    #[serde(rename = "From")]
    pub from: NaiveDate,
    #[serde(rename = "To")]
    pub to: NaiveDate,
    #[serde(rename = "Availability")]
    pub available: bool,
    #[serde(rename = "Created_At", with = "wire::timestamp")]
    pub created_at: DateTime<Utc>,
}

impl ScheduleOverride {
    /// Inclusive on both ends.
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }
}

/// Body of `POST /technicians/{id}/schedules/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewScheduleOverride {
    #[serde(rename = "TechID")]
    pub tech_id: TechId,
    #[serde(rename = "From")]
    pub from: NaiveDate,
    #[serde(rename = "To")]
    pub to: NaiveDate,
    #[serde(rename = "Availability")]
    pub available: bool,
}

impl NewScheduleOverride {
    pub fn single_day(tech_id: TechId, date: NaiveDate, available: bool) -> Self {
        Self { tech_id, from: date, to: date, available }
    }

    /// Override covering 2000-01-01 through 2099-12-31, used by open-all,
    /// close-all and new technicians with an open schedule.
    pub fn all_dates(tech_id: TechId, available: bool) -> Self {
        Self { tech_id, from: open_all_from(), to: open_all_to(), available }
    }
}

/// Effective availability of a technician on one day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    Available,
    Unavailable,
    /// No override covers the day.
    Unset,
}

impl Availability {
    pub fn from_flag(available: bool) -> Self {
        if available {
            Self::Available
        } else {
            Self::Unavailable
        }
    }

    pub fn is_available(self) -> bool {
        self == Self::Available
    }
}
