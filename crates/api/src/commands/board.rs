//! Appointment board commands

use chrono::{NaiveDate, NaiveTime};
use salonlite_core::board::{slot_index, BoardSnapshot};
use salonlite_core::forms::AppointmentForm;
use salonlite_core::LoadState;
use salonlite_domain::{Appointment, Result, SalonError, TechId};

use super::unusable_view;
use crate::context::AppContext;
use crate::utils::command_helpers::{execute_logged, validation_failed};

/// Select `date` on the board and load its technicians and appointments.
pub async fn load_board(ctx: &AppContext, date: NaiveDate) -> Result<BoardSnapshot> {
    execute_logged("board::load_board", || async {
        let outcome = ctx.board.refresh(&ctx.board_view, date).await;
        let view = ctx.board_view.lock();
        match view.state() {
            LoadState::Ready(snapshot) if outcome.is_applied() => Ok(snapshot.clone()),
            state => Err(unusable_view(state, "board")),
        }
    })
    .await
}

/// Start a booking from the empty cell at (`tech_id`, `start`) on the loaded
/// board.
pub fn book_from_cell(
    ctx: &AppContext,
    tech_id: TechId,
    start: NaiveTime,
) -> Result<AppointmentForm> {
    let label = start.format("%H:%M");
    let view = ctx.board_view.lock();
    let snapshot = view
        .snapshot()
        .ok_or_else(|| SalonError::InvalidInput("the board is not loaded".into()))?;
    let slot = slot_index(start)
        .ok_or_else(|| SalonError::InvalidInput(format!("{label} is not a board slot")))?;
    let target = snapshot
        .grid
        .new_appointment_target(snapshot.date, tech_id, slot)
        .ok_or_else(|| {
            SalonError::InvalidInput(format!("technician {tech_id} is not free at {label}"))
        })?;
    Ok(AppointmentForm::for_target(&target))
}

/// Validate and save an appointment form, then reload the board if it shows
/// the appointment's day.
pub async fn save_appointment(ctx: &AppContext, form: &AppointmentForm) -> Result<Appointment> {
    execute_logged("board::save_appointment", || async {
        let draft = form.validate().map_err(validation_failed)?;
        let saved = ctx.board.save_appointment(form.editing(), &draft).await?;

        let shown = ctx.board_view.lock().date();
        if shown == saved.date {
            ctx.board.refresh(&ctx.board_view, shown).await;
        }
        Ok(saved)
    })
    .await
}
