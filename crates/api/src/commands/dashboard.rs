//! Reporting dashboard command

use chrono::NaiveDate;
use salonlite_core::dashboard::DateRange;
use salonlite_core::{DashboardDisplay, RangePreset};
use salonlite_domain::Result;

use super::unusable_view;
use crate::context::AppContext;
use crate::utils::command_helpers::execute_logged;

/// Load the dashboard for `preset` around `today`.
pub async fn load_dashboard(
    ctx: &AppContext,
    preset: RangePreset,
    today: NaiveDate,
) -> Result<(DateRange, DashboardDisplay)> {
    execute_logged("dashboard::load_dashboard", || async {
        let outcome = ctx.dashboard.refresh(&ctx.dashboard_view, preset, today).await;
        let view = ctx.dashboard_view.lock();
        match (view.range(), view.display()) {
            (Some(range), Some(display)) if outcome.is_applied() => Ok((range, display.clone())),
            _ => Err(unusable_view(view.state(), "dashboard")),
        }
    })
    .await
}
