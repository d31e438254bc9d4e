//! Date-range override resolution
//!
//! Overlapping overrides are not merged. For any day, the override created
//! most recently among those covering it decides; range width plays no
//! part.

use chrono::NaiveDate;
use salonlite_domain::{Availability, ScheduleOverride, TechId};

/// Effective availability on `date` given one technician's overrides.
///
/// Ties on creation time go to the override listed first.
pub fn resolve(overrides: &[ScheduleOverride], date: NaiveDate) -> Availability {
    latest_covering(overrides, date)
        .map_or(Availability::Unset, |winner| Availability::from_flag(winner.available))
}

/// The override that decides `date`, if any.
pub fn latest_covering(overrides: &[ScheduleOverride], date: NaiveDate) -> Option<&ScheduleOverride> {
    overrides.iter().filter(|o| o.covers(date)).fold(None, |best, candidate| match best {
        Some(current) if candidate.created_at <= current.created_at => Some(current),
        _ => Some(candidate),
    })
}

/// All overrides of one technician
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TechSchedule {
    pub tech_id: TechId,
    pub overrides: Vec<ScheduleOverride>,
}

impl TechSchedule {
    /// Keep only `tech_id`'s records from the full override list.
    pub fn for_technician(tech_id: TechId, all: Vec<ScheduleOverride>) -> Self {
        let overrides = all.into_iter().filter(|o| o.tech_id == tech_id).collect();
        Self { tech_id, overrides }
    }

    pub fn availability_on(&self, date: NaiveDate) -> Availability {
        resolve(&self.overrides, date)
    }

    /// Flag a single-day toggle should write: unset days open, others flip.
    pub fn toggled_flag(&self, date: NaiveDate) -> bool {
        match self.availability_on(date) {
            Availability::Unset => true,
            Availability::Available => false,
            Availability::Unavailable => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};

    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn created(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, hour, 0, 0).unwrap()
    }

    fn override_(from: NaiveDate, to: NaiveDate, available: bool, hour: u32) -> ScheduleOverride {
        ScheduleOverride { tech_id: 1, from, to, available, created_at: created(hour) }
    }

    #[test]
    fn recency_beats_breadth() {
        let broad = override_(day(2025, 1, 1), day(2025, 1, 31), true, 8);
        let narrow = override_(day(2025, 1, 10), day(2025, 1, 10), false, 9);
        let overrides = vec![broad, narrow];

        assert_eq!(resolve(&overrides, day(2025, 1, 10)), Availability::Unavailable);
        assert_eq!(resolve(&overrides, day(2025, 1, 15)), Availability::Available);
    }

    #[test]
    fn older_narrow_override_loses_to_newer_broad_one() {
        let narrow = override_(day(2025, 1, 10), day(2025, 1, 10), false, 8);
        let broad = override_(day(2025, 1, 1), day(2025, 1, 31), true, 9);

        assert_eq!(resolve(&[narrow, broad], day(2025, 1, 10)), Availability::Available);
    }

    #[test]
    fn no_covering_override_is_unset() {
        let only = override_(day(2025, 1, 1), day(2025, 1, 31), true, 8);
        assert_eq!(resolve(&[only], day(2025, 2, 1)), Availability::Unset);
        assert_eq!(resolve(&[], day(2025, 2, 1)), Availability::Unset);
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let only = override_(day(2025, 1, 5), day(2025, 1, 7), false, 8);
        assert_eq!(resolve(&[only.clone()], day(2025, 1, 5)), Availability::Unavailable);
        assert_eq!(resolve(&[only.clone()], day(2025, 1, 7)), Availability::Unavailable);
        assert_eq!(resolve(&[only], day(2025, 1, 8)), Availability::Unset);
    }

    #[test]
    fn equal_timestamps_keep_first_listed() {
        let first = override_(day(2025, 1, 1), day(2025, 1, 31), false, 8);
        let second = override_(day(2025, 1, 1), day(2025, 1, 31), true, 8);
        assert_eq!(resolve(&[first, second], day(2025, 1, 3)), Availability::Unavailable);
    }

    #[test]
    fn schedule_filters_by_technician_and_toggles() {
        let mut other = override_(day(2025, 1, 1), day(2025, 1, 31), false, 9);
        other.tech_id = 2;
        let mine = override_(day(2025, 1, 1), day(2025, 1, 31), true, 8);
        let schedule = TechSchedule::for_technician(1, vec![other, mine]);

        assert_eq!(schedule.overrides.len(), 1);
        assert_eq!(schedule.availability_on(day(2025, 1, 2)), Availability::Available);
        assert!(!schedule.toggled_flag(day(2025, 1, 2)));
        assert!(schedule.toggled_flag(day(2025, 3, 1)));
    }
}
