//! Login and session-status payloads

use std::fmt;

use serde::{Deserialize, Serialize};

/// Body of `POST /login/`
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Anti-forgery token attached to every write request
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CsrfToken(String);

impl CsrfToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for CsrfToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CsrfToken(<redacted>)")
    }
}

/// Response of `GET /is_logged_in/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStatus {
    #[serde(rename = "X-CSRFToken", default)]
    pub csrf_token: Option<CsrfToken>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_hides_secrets() {
        let creds = Credentials { username: "front".into(), password: "hunter2".into() };
        assert!(!format!("{creds:?}").contains("hunter2"));
        assert!(!format!("{:?}", CsrfToken::new("abc123")).contains("abc123"));
    }

    #[test]
    fn session_status_reads_header_named_key() {
        let status: SessionStatus = serde_json::from_str(r#"{"X-CSRFToken": "tok"}"#).unwrap();
        assert_eq!(status.csrf_token.map(|t| t.as_str().to_string()).as_deref(), Some("tok"));
    }
}
