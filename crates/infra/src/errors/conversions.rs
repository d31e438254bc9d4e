use salonlite_domain::SalonError;
use reqwest::Error as HttpError;
use url::ParseError as UrlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub SalonError);

impl From<InfraError> for SalonError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<SalonError> for InfraError {
    fn from(value: SalonError) -> Self {
        InfraError(value)
    }
}

trait IntoSalonError {
    fn into_salon(self) -> SalonError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → SalonError */
/* -------------------------------------------------------------------------- */

impl IntoSalonError for HttpError {
    fn into_salon(self) -> SalonError {
        if self.is_timeout() {
            return SalonError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return SalonError::Network("HTTP connection failure".into());
        }

        if self.is_decode() {
            return SalonError::Serialization(format!("HTTP response body invalid: {self}"));
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            let message =
                format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));

            return match code {
                401 | 403 => SalonError::Auth(message),
                _ => SalonError::Rejected { status: code, message },
            };
        }

        if self.is_builder() {
            return SalonError::Internal(format!("invalid HTTP request: {self}"));
        }

        SalonError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_salon())
    }
}

/* -------------------------------------------------------------------------- */
/* url::ParseError → SalonError */
/* -------------------------------------------------------------------------- */

impl IntoSalonError for UrlError {
    fn into_salon(self) -> SalonError {
        SalonError::Config(format!("invalid API URL: {self}"))
    }
}

impl From<UrlError> for InfraError {
    fn from(value: UrlError) -> Self {
        InfraError(value.into_salon())
    }
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → SalonError */
/* -------------------------------------------------------------------------- */

impl IntoSalonError for std::io::Error {
    fn into_salon(self) -> SalonError {
        SalonError::Config(format!("failed to read config file: {self}"))
    }
}

impl From<std::io::Error> for InfraError {
    fn from(value: std::io::Error) -> Self {
        InfraError(value.into_salon())
    }
}

#[cfg(test)]
mod tests {
    use reqwest::{Client, StatusCode};
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    async fn status_error(status: StatusCode) -> HttpError {
        let server = MockServer::start().await;
        Mock::given(method("GET")).respond_with(ResponseTemplate::new(status)).mount(&server).await;

        let client = Client::builder().no_proxy().build().unwrap();
        client.get(server.uri()).send().await.unwrap().error_for_status().unwrap_err()
    }

    #[tokio::test]
    async fn http_status_401_maps_to_auth_error() {
        let mapped: SalonError = InfraError::from(status_error(StatusCode::UNAUTHORIZED).await).into();
        match mapped {
            SalonError::Auth(msg) => assert!(msg.contains("401")),
            other => panic!("expected auth error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn http_status_422_maps_to_rejected() {
        let mapped: SalonError =
            InfraError::from(status_error(StatusCode::UNPROCESSABLE_ENTITY).await).into();
        assert!(matches!(mapped, SalonError::Rejected { status: 422, .. }));
    }

    #[test]
    fn url_parse_error_is_config() {
        let err = url::Url::parse("not a url").unwrap_err();
        let mapped: SalonError = InfraError::from(err).into();
        assert!(matches!(mapped, SalonError::Config(_)));
    }
}
