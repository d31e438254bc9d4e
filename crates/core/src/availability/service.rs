//! Schedule service - reads overrides and appends new ones

use std::sync::Arc;

use chrono::NaiveDate;
use parking_lot::Mutex;
use salonlite_domain::{NewScheduleOverride, Result, TechId};

use super::calendar::ScheduleCalendarView;
use super::ports::ScheduleRepository;
use super::resolver::TechSchedule;
use crate::freshness::ApplyOutcome;

pub struct ScheduleService {
    repository: Arc<dyn ScheduleRepository>,
}

impl ScheduleService {
    pub fn new(repository: Arc<dyn ScheduleRepository>) -> Self {
        Self { repository }
    }

    /// Overrides belonging to `tech_id`.
    pub async fn load(&self, tech_id: TechId) -> Result<TechSchedule> {
        let all = self.repository.list_overrides().await?;
        Ok(TechSchedule::for_technician(tech_id, all))
    }

    /// Reload `view`'s technician, honouring request generations.
    pub async fn refresh(&self, view: &Mutex<ScheduleCalendarView>) -> ApplyOutcome {
        let (ticket, tech_id) = {
            let mut guard = view.lock();
            (guard.begin_load(), guard.tech_id())
        };
        let result = self.load(tech_id).await;
        view.lock().apply(ticket, result)
    }

    /// Mark every date from 2000 through 2099 available.
    pub async fn open_all_dates(&self, tech_id: TechId) -> Result<TechSchedule> {
        self.write_range(tech_id, true).await
    }

    /// Mark every date from 2000 through 2099 unavailable.
    pub async fn close_all_dates(&self, tech_id: TechId) -> Result<TechSchedule> {
        self.write_range(tech_id, false).await
    }

    /// Flip one day: unset opens, otherwise the resolved value is negated.
    pub async fn toggle_date(
        &self,
        schedule: &TechSchedule,
        date: NaiveDate,
    ) -> Result<TechSchedule> {
        let flag = schedule.toggled_flag(date);
        self.append(NewScheduleOverride::single_day(schedule.tech_id, date, flag)).await
    }

    async fn write_range(&self, tech_id: TechId, available: bool) -> Result<TechSchedule> {
        self.append(NewScheduleOverride::all_dates(tech_id, available)).await
    }

    /// Append, then re-read so the caller sees the server's ordering and
    /// timestamps. On a failed write nothing is re-read and the error is
    /// returned as is.
    async fn append(&self, entry: NewScheduleOverride) -> Result<TechSchedule> {
        if let Err(err) = self.repository.append_override(&entry).await {
            tracing::warn!(
                tech_id = entry.tech_id,
                from = %entry.from,
                to = %entry.to,
                error = %err,
                "schedule override rejected"
            );
            return Err(err);
        }
        tracing::info!(
            tech_id = entry.tech_id,
            from = %entry.from,
            to = %entry.to,
            available = entry.available,
            "schedule override appended"
        );
        self.load(entry.tech_id).await
    }
}
