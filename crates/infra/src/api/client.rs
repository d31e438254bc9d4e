//! REST client for the salon backend
//!
//! Reads may be repeated by the transport; writes are sent once and carry
//! the session's CSRF token. Cookies are kept by the transport's jar.

use std::time::Duration;

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use salonlite_domain::constants::CSRF_HEADER;
use salonlite_domain::ApiConfig;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument};
use url::Url;

use super::errors::ApiError;
use super::session::SessionContext;
use crate::errors::InfraError;
use crate::http::{HttpClient, RequestKind, TransportSettings};

/// Configuration for API client
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Base URL, always ending in `/`
    pub base_url: Url,
    /// Timeout for API requests
    pub timeout: Duration,
    /// Attempts for reads
    pub max_attempts: usize,
}

impl ApiClientConfig {
    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        let mut raw = config.base_url.trim().to_string();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        let base_url = Url::parse(&raw).map_err(|err| ApiError::from(salon(err)))?;
        Ok(Self {
            base_url,
            timeout: Duration::from_secs(config.timeout_secs),
            max_attempts: config.max_attempts.max(1) as usize,
        })
    }
}

fn salon(err: impl Into<InfraError>) -> salonlite_domain::SalonError {
    let infra: InfraError = err.into();
    infra.into()
}

/// API client bound to one backend session
pub struct ApiClient {
    http_client: HttpClient,
    config: ApiClientConfig,
    session: SessionContext,
}

impl ApiClient {
    /// Create a new API client
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be built
    pub fn new(config: ApiClientConfig) -> Result<Self, ApiError> {
        let settings = TransportSettings {
            timeout: config.timeout,
            read_attempts: config.max_attempts,
            ..TransportSettings::default()
        };
        let http_client = HttpClient::new(&settings)
            .map_err(|e| ApiError::Config(format!("Failed to build HttpClient: {}", e)))?;

        Ok(Self { http_client, config, session: SessionContext::new() })
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn base_url(&self) -> &Url {
        &self.config.base_url
    }

    fn url(&self, path: &str) -> Result<Url, ApiError> {
        self.config
            .base_url
            .join(path.trim_start_matches('/'))
            .map_err(|err| ApiError::from(salon(err)))
    }

    /// GET `path` with query parameters and decode the JSON body.
    #[instrument(skip(self, query), fields(path = %path))]
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = self.url(path)?;
        let request = self.http_client.request(Method::GET, url.clone()).query(query);
        let response = self.dispatch(RequestKind::Read, request).await?;
        let response = Self::check_status(response, &url).await?;
        Self::decode(response).await
    }

    /// POST a JSON body and decode the JSON reply.
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn post<B: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        let response = self.write(Method::POST, path, Some(body)).await?;
        Self::decode(response).await
    }

    /// PUT a JSON body and decode the JSON reply.
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn put<B: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        let response = self.write(Method::PUT, path, Some(body)).await?;
        Self::decode(response).await
    }

    /// POST and ignore whatever the server sends back.
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn post_unit<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<(), ApiError> {
        self.write(Method::POST, path, body).await.map(drop)
    }

    async fn write<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Response, ApiError> {
        let url = self.url(path)?;
        let mut request = self.http_client.request(method, url.clone());
        if let Some(token) = self.session.token() {
            request = request.header(CSRF_HEADER, token.as_str());
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = self.dispatch(RequestKind::Write, request).await?;
        Self::check_status(response, &url).await
    }

    async fn dispatch(
        &self,
        kind: RequestKind,
        request: RequestBuilder,
    ) -> Result<Response, ApiError> {
        self.http_client.execute(kind, request).await.map_err(|err| {
            if err.is_timeout() {
                ApiError::Timeout(self.config.timeout)
            } else {
                ApiError::from(salon(err))
            }
        })
    }

    async fn check_status(response: Response, url: &Url) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(Self::map_status_error(status, url, body))
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::Network(format!("Failed to read response: {}", e)))?;

        // 204/205 and empty bodies decode as JSON null
        if status == StatusCode::NO_CONTENT || status == StatusCode::RESET_CONTENT || bytes.is_empty()
        {
            return serde_json::from_value(serde_json::Value::Null).map_err(|_| {
                ApiError::Decode(format!("empty response ({}) where a body was expected", status.as_u16()))
            });
        }

        serde_json::from_slice(&bytes)
            .map_err(|e| ApiError::Decode(format!("Failed to parse response: {}", e)))
    }

    fn map_status_error(status: StatusCode, url: &Url, body: String) -> ApiError {
        let message = if body.is_empty() {
            format!("{} returned status {}", url, status)
        } else {
            format!("{} returned status {}: {}", url, status, body)
        };
        debug!(%url, %status, "request rejected");

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            ApiError::Auth(message)
        } else if status.is_server_error() {
            ApiError::Server { status: status.as_u16(), message }
        } else {
            ApiError::Client { status: status.as_u16(), message }
        }
    }
}

/// Builder for API client
#[derive(Default)]
pub struct ApiClientBuilder {
    config: Option<ApiClientConfig>,
}

impl ApiClientBuilder {
    pub fn config(mut self, config: ApiClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// # Errors
    ///
    /// Returns error if no configuration was supplied or client creation fails
    pub fn build(self) -> Result<ApiClient, ApiError> {
        let config = self.config.ok_or_else(|| ApiError::Config("API config not set".to_string()))?;
        ApiClient::new(config)
    }
}

impl ApiClient {
    /// Create a builder for fluent configuration
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }
}
