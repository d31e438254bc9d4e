//! Login and logout commands

use salonlite_core::forms::LoginForm;
use salonlite_domain::{Result, SessionStatus};

use crate::context::AppContext;
use crate::utils::command_helpers::{execute_logged, validation_failed};

/// Validate the login form, log in and pick up the CSRF token.
pub async fn sign_in(ctx: &AppContext, form: &LoginForm) -> Result<SessionStatus> {
    execute_logged("session::sign_in", || async {
        let credentials = form.validate().map_err(validation_failed)?;
        ctx.session.sign_in(&credentials).await
    })
    .await
}

pub async fn sign_out(ctx: &AppContext) -> Result<()> {
    execute_logged("session::sign_out", || ctx.session.sign_out()).await
}

pub async fn is_signed_in(ctx: &AppContext) -> bool {
    ctx.session.is_signed_in().await
}
