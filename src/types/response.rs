//! Response envelope shared by every CoinMarketCap endpoint.
//!
//! Every body has the shape `{ "status": { ... }, "data": ... }`. Endpoint
//! methods return the body undecoded as a [`GenericResponse`]; use
//! [`ApiResponse::from_generic`] to decode it into typed data.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use time::OffsetDateTime;

use crate::error::{ApiError, CmcError};
use crate::types::serde_helpers::empty_string_as_none;

/// A decoded JSON body with no schema applied.
pub type GenericResponse = Map<String, Value>;

/// The `status` object attached to every response.
///
/// Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiStatus {
    /// Server time the response was generated
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub timestamp: Option<OffsetDateTime>,
    /// Internal error code, 0 on success
    #[serde(default)]
    pub error_code: i64,
    /// Error message, `None` on success
    #[serde(deserialize_with = "empty_string_as_none::deserialize", default)]
    pub error_message: Option<String>,
    /// Milliseconds the server spent on the call
    #[serde(default)]
    pub elapsed: u64,
    /// API credits consumed by the call
    #[serde(default)]
    pub credit_count: u64,
    /// Deprecation or maintenance notice
    #[serde(deserialize_with = "empty_string_as_none::deserialize", default)]
    pub notice: Option<String>,
    /// Total number of items available, on list endpoints
    #[serde(default)]
    pub total_count: Option<u64>,
}

impl ApiStatus {
    /// Decode the `status` object of a generic response.
    ///
    /// Returns `None` if the object is missing or malformed.
    pub fn from_generic(response: &GenericResponse) -> Option<Self> {
        response
            .get("status")
            .and_then(|status| Self::deserialize(status).ok())
    }
}

/// A response body decoded into typed data.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    /// Call status
    pub status: ApiStatus,
    /// Endpoint payload
    pub data: T,
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Decode a generic response.
    ///
    /// On failure the error carries status code 0, the decoding error as its
    /// source, and the untouched body.
    pub fn from_generic(response: GenericResponse) -> Result<Self, CmcError> {
        let value = Value::Object(response);
        match Self::deserialize(&value) {
            Ok(parsed) => Ok(parsed),
            Err(e) => {
                let response = match value {
                    Value::Object(map) => map,
                    _ => GenericResponse::new(),
                };
                Err(CmcError::Api(
                    ApiError::with_response(format!("failed to decode response: {e}"), 0, response)
                        .with_source(e),
                ))
            }
        }
    }
}
