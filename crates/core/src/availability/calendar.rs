//! Month calendar of a technician's availability

use chrono::{Datelike, Duration, Months, NaiveDate};
use salonlite_domain::{Availability, Result, TechId};
use serde::Serialize;

use super::resolver::TechSchedule;
use crate::freshness::{ApplyOutcome, LoadState, RequestGeneration, RequestTicket};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// False for the leading/trailing days of neighbouring months.
    pub in_month: bool,
    pub is_today: bool,
    pub availability: Availability,
}

/// Sunday-first weeks covering one month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthCalendar {
    /// First day of the month shown
    pub month: NaiveDate,
    pub weeks: Vec<Vec<CalendarDay>>,
}

impl MonthCalendar {
    /// Lay out the month containing `month`, padded to whole weeks.
    pub fn build(schedule: &TechSchedule, month: NaiveDate, today: NaiveDate) -> Self {
        let first = first_of_month(month);
        let last = first
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .unwrap_or(first);
        let lead = i64::from(first.weekday().num_days_from_sunday());
        let mut cursor = first - Duration::days(lead);

        let mut days = Vec::new();
        while cursor <= last || days.len() % 7 != 0 {
            days.push(CalendarDay {
                date: cursor,
                in_month: cursor.month() == first.month() && cursor.year() == first.year(),
                is_today: cursor == today,
                availability: schedule.availability_on(cursor),
            });
            match cursor.succ_opt() {
                Some(next) => cursor = next,
                None => break,
            }
        }

        let weeks = days.chunks(7).map(<[CalendarDay]>::to_vec).collect();
        Self { month: first, weeks }
    }

    /// e.g. `January 2025`
    pub fn title(&self) -> String {
        self.month.format("%B %Y").to_string()
    }

    pub fn days(&self) -> impl Iterator<Item = &CalendarDay> {
        self.weeks.iter().flatten()
    }

    pub fn day(&self, date: NaiveDate) -> Option<&CalendarDay> {
        self.days().find(|day| day.date == date)
    }
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Move by whole months, landing on the first of the month.
pub fn shift_month(month: NaiveDate, offset: i32) -> NaiveDate {
    let first = first_of_month(month);
    let shifted = if offset >= 0 {
        first.checked_add_months(Months::new(offset.unsigned_abs()))
    } else {
        first.checked_sub_months(Months::new(offset.unsigned_abs()))
    };
    shifted.unwrap_or(first)
}

/// Schedule calendar view state for one technician
#[derive(Debug)]
pub struct ScheduleCalendarView {
    tech_id: TechId,
    month: NaiveDate,
    today: NaiveDate,
    generation: RequestGeneration,
    state: LoadState<TechSchedule>,
}

impl ScheduleCalendarView {
    pub fn new(tech_id: TechId, today: NaiveDate) -> Self {
        Self {
            tech_id,
            month: first_of_month(today),
            today,
            generation: RequestGeneration::new(),
            state: LoadState::Idle,
        }
    }

    pub fn tech_id(&self) -> TechId {
        self.tech_id
    }

    pub fn month(&self) -> NaiveDate {
        self.month
    }

    pub fn show_month(&mut self, month: NaiveDate) {
        self.month = first_of_month(month);
    }

    pub fn change_month(&mut self, offset: i32) {
        self.month = shift_month(self.month, offset);
    }

    pub fn schedule(&self) -> Option<&TechSchedule> {
        self.state.ready()
    }

    pub fn state(&self) -> &LoadState<TechSchedule> {
        &self.state
    }

    /// Start a new fetch generation. Already-loaded overrides stay visible
    /// until the response lands.
    pub fn begin_load(&mut self) -> RequestTicket {
        if !matches!(self.state, LoadState::Ready(_)) {
            self.state = LoadState::Loading;
        }
        self.generation.issue()
    }

    pub fn apply(&mut self, ticket: RequestTicket, result: Result<TechSchedule>) -> ApplyOutcome {
        if !self.generation.is_current(ticket) {
            tracing::debug!(tech_id = self.tech_id, "dropping stale schedule response");
            return ApplyOutcome::Stale;
        }
        match result {
            Ok(schedule) => self.state = LoadState::Ready(schedule),
            Err(err) => {
                tracing::warn!(tech_id = self.tech_id, error = %err, "schedule fetch failed");
                if !matches!(self.state, LoadState::Ready(_)) {
                    self.state = LoadState::Failed(err.to_string());
                }
            }
        }
        ApplyOutcome::Applied
    }

    /// Calendar for the current month, once overrides are loaded.
    pub fn calendar(&self) -> Option<MonthCalendar> {
        self.schedule().map(|schedule| MonthCalendar::build(schedule, self.month, self.today))
    }
}
