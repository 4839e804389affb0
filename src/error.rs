//! Error types for the CoinMarketCap client library.

use serde_json::Value;
use thiserror::Error;

use crate::types::GenericResponse;

/// Message used when an error body carries no `status.error_message`.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";

/// Boxed underlying cause of a failed call.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The main error type for all CoinMarketCap client operations.
///
/// Every variant except [`CmcError::Config`] carries an [`ApiError`] with the
/// status code, message and raw response body, so callers can pick a recovery
/// strategy by matching on the variant alone.
#[derive(Error, Debug)]
pub enum CmcError {
    /// The API key was rejected (HTTP 401).
    #[error(transparent)]
    Authentication(ApiError),

    /// Too many requests (HTTP 429).
    #[error("{error}")]
    RateLimit {
        /// Shared error details
        error: ApiError,
        /// Seconds to wait before retrying, when the API supplied a hint
        retry_after: Option<u64>,
    },

    /// The request parameters were rejected (HTTP 400).
    #[error(transparent)]
    InvalidRequest(ApiError),

    /// The requested resource does not exist (HTTP 404).
    #[error(transparent)]
    NotFound(ApiError),

    /// Any other HTTP status, or a failure that never produced a status
    /// (connection, timeout, encoding or decoding); the latter use status 0.
    #[error(transparent)]
    Api(ApiError),

    /// The client was configured incorrectly.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CmcError {
    /// Classify an HTTP error response into a typed error.
    ///
    /// The message comes from `status.error_message` (falling back to
    /// [`UNKNOWN_ERROR_MESSAGE`]) and the body is kept verbatim in every case.
    pub fn from_response(status_code: u16, response: GenericResponse) -> Self {
        let status = response.get("status").and_then(Value::as_object);
        let message = status
            .and_then(|s| s.get("error_message"))
            .and_then(Value::as_str)
            .unwrap_or(UNKNOWN_ERROR_MESSAGE)
            .to_string();

        match status_code {
            400 => Self::InvalidRequest(ApiError::with_response(message, 400, response)),
            401 => Self::Authentication(ApiError::with_response(message, 401, response)),
            404 => Self::NotFound(ApiError::with_response(message, 404, response)),
            429 => {
                let retry_after = status
                    .and_then(|s| s.get("retry_after"))
                    .and_then(retry_after_seconds);
                Self::RateLimit {
                    error: ApiError::with_response(message, 429, response),
                    retry_after,
                }
            }
            code => Self::Api(ApiError::with_response(message, code, response)),
        }
    }

    /// Build a generic error for a failure that never produced a usable
    /// HTTP response.
    pub(crate) fn transport(
        message: impl Into<String>,
        status_code: u16,
        source: impl Into<BoxError>,
    ) -> Self {
        Self::Api(ApiError::new(message, status_code).with_source(source))
    }

    /// The shared error details, if this is an API error.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Authentication(e)
            | Self::InvalidRequest(e)
            | Self::NotFound(e)
            | Self::Api(e)
            | Self::RateLimit { error: e, .. } => Some(e),
            Self::Config(_) => None,
        }
    }

    /// HTTP status code, or 0 when no HTTP response was involved.
    pub fn status_code(&self) -> u16 {
        self.api_error().map_or(0, |e| e.status_code)
    }

    /// Human-readable error message.
    pub fn message(&self) -> &str {
        match self {
            Self::Config(message) => message,
            _ => self.api_error().map_or("", |e| e.message.as_str()),
        }
    }

    /// The raw decoded response body, when one was received.
    pub fn response(&self) -> Option<&GenericResponse> {
        self.api_error().and_then(|e| e.response.as_ref())
    }

    /// Retry hint in seconds for rate limit errors.
    pub fn retry_after(&self) -> Option<u64> {
        match self {
            Self::RateLimit { retry_after, .. } => *retry_after,
            _ => None,
        }
    }

    /// Check if this is an authentication error.
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::Authentication(_))
    }

    /// Check if this is a rate limit error.
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, Self::RateLimit { .. })
    }

    /// Check if this is an invalid request error.
    pub fn is_invalid_request(&self) -> bool {
        matches!(self, Self::InvalidRequest(_))
    }

    /// Check if this is a not found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

// CoinMarketCap sends whole seconds, but accept a float and truncate it.
fn retry_after_seconds(value: &Value) -> Option<u64> {
    value.as_u64().or_else(|| {
        value
            .as_f64()
            .filter(|secs| secs.is_finite() && *secs >= 0.0)
            .map(|secs| secs as u64)
    })
}

/// Details shared by every API error kind.
#[derive(Debug)]
pub struct ApiError {
    /// Human-readable error message
    pub message: String,
    /// HTTP status code, 0 for failures without an HTTP response
    pub status_code: u16,
    /// Raw decoded response body
    pub response: Option<GenericResponse>,
    source: Option<BoxError>,
}

impl ApiError {
    /// Create a new API error from a message and status code.
    pub fn new(message: impl Into<String>, status_code: u16) -> Self {
        Self {
            message: message.into(),
            status_code,
            response: None,
            source: None,
        }
    }

    /// Create an API error that keeps the decoded response body.
    pub fn with_response(
        message: impl Into<String>,
        status_code: u16,
        response: GenericResponse,
    ) -> Self {
        Self {
            response: Some(response),
            ..Self::new(message, status_code)
        }
    }

    /// Attach the underlying cause.
    pub fn with_source(mut self, source: impl Into<BoxError>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "API Error [{}]: {}", self.status_code, self.message)
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use serde_json::json;

    use super::*;

    fn body(value: Value) -> GenericResponse {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_classification_table() {
        let response = body(json!({ "status": { "error_message": "boom", "error_code": 1 } }));

        for code in [400u16, 401, 402, 403, 404, 429, 500, 503] {
            let err = CmcError::from_response(code, response.clone());
            match code {
                400 => assert!(err.is_invalid_request()),
                401 => assert!(err.is_authentication()),
                404 => assert!(err.is_not_found()),
                429 => assert!(err.is_rate_limit()),
                _ => assert!(matches!(err, CmcError::Api(_))),
            }
            assert_eq!(err.status_code(), code);
            assert_eq!(err.message(), "boom");
            assert_eq!(err.response(), Some(&response));
        }
    }

    #[test]
    fn test_rate_limit_retry_after() {
        let response = body(json!({
            "status": { "error_message": "Too many requests", "retry_after": 30 }
        }));
        let err = CmcError::from_response(429, response);
        assert_eq!(err.message(), "Too many requests");
        assert_eq!(err.retry_after(), Some(30));
    }

    #[test]
    fn test_rate_limit_without_retry_after() {
        let response = body(json!({ "status": { "error_message": "Too many requests" } }));
        let err = CmcError::from_response(429, response);
        assert!(err.is_rate_limit());
        assert_eq!(err.retry_after(), None);
    }

    #[test]
    fn test_rate_limit_non_numeric_retry_after() {
        let response = body(json!({ "status": { "retry_after": "soon" } }));
        let err = CmcError::from_response(429, response);
        assert_eq!(err.retry_after(), None);
    }

    #[test]
    fn test_missing_error_message_falls_back() {
        for response in [json!({}), json!({ "status": {} }), json!({ "status": "oops" })] {
            let err = CmcError::from_response(500, body(response));
            assert_eq!(err.message(), UNKNOWN_ERROR_MESSAGE);
        }
    }

    #[test]
    fn test_display_and_source() {
        let err = CmcError::from_response(401, body(json!({ "status": { "error_message": "Invalid key" } })));
        assert_eq!(err.to_string(), "API Error [401]: Invalid key");

        let cause = std::io::Error::new(std::io::ErrorKind::TimedOut, "timed out");
        let err = CmcError::transport("HTTP request failed", 0, cause);
        assert_eq!(err.status_code(), 0);
        assert!(err.response().is_none());
        assert_eq!(err.source().map(|s| s.to_string()), Some("timed out".to_string()));
    }

    #[test]
    fn test_config_error() {
        let err = CmcError::Config("API key is required".to_string());
        assert_eq!(err.status_code(), 0);
        assert_eq!(err.message(), "API key is required");
        assert!(err.api_error().is_none());
        assert_eq!(err.to_string(), "Configuration error: API key is required");
    }
}
