//! Port interface for the backend's session endpoints

use async_trait::async_trait;
use salonlite_domain::{Credentials, Result, SessionStatus};

#[async_trait]
pub trait SessionGateway: Send + Sync {
    /// `Err(SalonError::Auth)` for rejected credentials.
    async fn login(&self, credentials: &Credentials) -> Result<()>;

    /// Current session; implementations keep the returned CSRF token for
    /// subsequent writes.
    async fn session_status(&self) -> Result<SessionStatus>;

    /// End the session and forget the CSRF token.
    async fn logout(&self) -> Result<()>;
}
