//! CSRF token holder for the current backend session

use parking_lot::RwLock;
use salonlite_domain::CsrfToken;

/// Token from `GET /is_logged_in/`, attached to every write.
///
/// Populated after login, cleared on logout. Owned by one [`ApiClient`].
///
/// [`ApiClient`]: super::ApiClient
#[derive(Debug, Default)]
pub struct SessionContext {
    token: RwLock<Option<CsrfToken>>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_token(&self, token: Option<CsrfToken>) {
        *self.token.write() = token;
    }

    pub fn clear(&self) {
        self.token.write().take();
    }

    pub fn token(&self) -> Option<CsrfToken> {
        self.token.read().clone()
    }

    pub fn is_active(&self) -> bool {
        self.token.read().is_some()
    }
}
