//! Session service - login, status check and logout

use std::sync::Arc;

use salonlite_domain::{Credentials, Result, SalonError, SessionStatus};

use super::ports::SessionGateway;

pub struct SessionService {
    gateway: Arc<dyn SessionGateway>,
}

impl SessionService {
    pub fn new(gateway: Arc<dyn SessionGateway>) -> Self {
        Self { gateway }
    }

    /// Log in and fetch the CSRF token for the new session.
    pub async fn sign_in(&self, credentials: &Credentials) -> Result<SessionStatus> {
        if let Err(err) = self.gateway.login(credentials).await {
            tracing::warn!(username = %credentials.username, error = %err, "login failed");
            return Err(err);
        }
        let status = self.gateway.session_status().await?;
        if status.csrf_token.is_none() {
            return Err(SalonError::Auth("session has no CSRF token".into()));
        }
        tracing::info!(username = %credentials.username, "signed in");
        Ok(status)
    }

    /// `true` when the backend reports a live session.
    pub async fn is_signed_in(&self) -> bool {
        match self.gateway.session_status().await {
            Ok(status) => status.csrf_token.is_some(),
            Err(err) => {
                tracing::debug!(error = %err, "session check failed");
                false
            }
        }
    }

    pub async fn sign_out(&self) -> Result<()> {
        self.gateway.logout().await?;
        tracing::info!("signed out");
        Ok(())
    }
}
