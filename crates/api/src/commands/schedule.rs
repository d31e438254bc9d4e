//! Technician availability commands

use chrono::NaiveDate;
use parking_lot::Mutex;
use salonlite_core::availability::MonthCalendar;
use salonlite_core::{ScheduleCalendarView, TechSchedule};
use salonlite_domain::{Availability, Result, TechId};

use super::unusable_view;
use crate::context::AppContext;
use crate::utils::command_helpers::execute_logged;

/// Month calendar of `tech_id`'s availability for the month containing
/// `month`.
pub async fn load_calendar(
    ctx: &AppContext,
    tech_id: TechId,
    month: NaiveDate,
    today: NaiveDate,
) -> Result<MonthCalendar> {
    execute_logged("schedule::load_calendar", || async {
        let view = Mutex::new(ScheduleCalendarView::new(tech_id, today));
        view.lock().show_month(month);
        ctx.schedules.refresh(&view).await;

        let guard = view.lock();
        guard.calendar().ok_or_else(|| unusable_view(guard.state(), "schedule"))
    })
    .await
}

/// Flip one day for `tech_id` and return its new availability.
pub async fn toggle_day(ctx: &AppContext, tech_id: TechId, date: NaiveDate) -> Result<Availability> {
    execute_logged("schedule::toggle_day", || async {
        let schedule = ctx.schedules.load(tech_id).await?;
        let updated = ctx.schedules.toggle_date(&schedule, date).await?;
        Ok(updated.availability_on(date))
    })
    .await
}

pub async fn open_all_dates(ctx: &AppContext, tech_id: TechId) -> Result<TechSchedule> {
    execute_logged("schedule::open_all_dates", || ctx.schedules.open_all_dates(tech_id)).await
}

pub async fn close_all_dates(ctx: &AppContext, tech_id: TechId) -> Result<TechSchedule> {
    execute_logged("schedule::close_all_dates", || ctx.schedules.close_all_dates(tech_id)).await
}
