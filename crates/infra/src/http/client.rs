//! Cookie-keeping transport for the salon backend
//!
//! Every request is sent as either a read or a write. Writes go out exactly
//! once. A read is sent again, up to the configured number of attempts, when
//! the previous attempt timed out, could not connect, or got a 5xx answer.
//! Each attempt is bounded by reqwest's own request timeout.

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response};
use salonlite_domain::constants::{DEFAULT_API_MAX_ATTEMPTS, DEFAULT_API_TIMEOUT_SECS};
use tracing::debug;
use url::Url;

/// Whether a request may be sent more than once
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Read,
    Write,
}

/// Connection settings for [`HttpClient`]
#[derive(Debug, Clone)]
pub struct TransportSettings {
    /// Limit for a single attempt
    pub timeout: Duration,
    /// Attempts for reads; writes always get one.
    pub read_attempts: usize,
    /// Wait before a read is sent again
    pub retry_pause: Duration,
    pub user_agent: String,
}

impl Default for TransportSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_API_TIMEOUT_SECS),
            read_attempts: DEFAULT_API_MAX_ATTEMPTS as usize,
            retry_pause: Duration::from_millis(250),
            user_agent: concat!("salonlite/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// reqwest client with a cookie store shared by every call of one session
#[derive(Clone)]
pub struct HttpClient {
    inner: Client,
    read_attempts: usize,
    retry_pause: Duration,
}

impl HttpClient {
    /// # Errors
    ///
    /// Returns the reqwest error if the TLS backend cannot be initialised.
    pub fn new(settings: &TransportSettings) -> Result<Self, reqwest::Error> {
        let inner = Client::builder()
            .timeout(settings.timeout)
            .cookie_store(true)
            .user_agent(settings.user_agent.as_str())
            .no_proxy()
            .build()?;

        Ok(Self {
            inner,
            read_attempts: settings.read_attempts.max(1),
            retry_pause: settings.retry_pause,
        })
    }

    pub fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.inner.request(method, url)
    }

    /// Send `request`, repeating it only when it is a read whose previous
    /// attempt is worth repeating. The last attempt's outcome is returned.
    pub async fn execute(
        &self,
        kind: RequestKind,
        request: RequestBuilder,
    ) -> Result<Response, reqwest::Error> {
        let attempts = match kind {
            RequestKind::Read => self.read_attempts,
            RequestKind::Write => 1,
        };

        let mut pending = request;
        let mut attempt = 1;
        loop {
            // No spare copy on the last attempt, or when the body is a stream.
            let spare = if attempt < attempts { pending.try_clone() } else { None };
            let outcome = pending.send().await;
            log_outcome(kind, attempt, &outcome);

            match spare {
                Some(next) if worth_repeating(&outcome) => {
                    tokio::time::sleep(self.retry_pause).await;
                    pending = next;
                    attempt += 1;
                }
                _ => return outcome,
            }
        }
    }
}

fn worth_repeating(outcome: &Result<Response, reqwest::Error>) -> bool {
    match outcome {
        Ok(response) => response.status().is_server_error(),
        Err(err) => err.is_timeout() || err.is_connect(),
    }
}

fn log_outcome(kind: RequestKind, attempt: usize, outcome: &Result<Response, reqwest::Error>) {
    match outcome {
        Ok(response) => {
            debug!(?kind, attempt, url = %response.url(), status = %response.status(), "response");
        }
        Err(err) => debug!(?kind, attempt, error = %err, "request failed"),
    }
}
