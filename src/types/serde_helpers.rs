//! Custom serde helpers for CoinMarketCap's request and response formats.

use serde::{Deserialize, Deserializer, Serializer};

/// Serialize a list as a single comma-separated string.
///
/// CoinMarketCap takes lists such as `symbol=BTC,ETH` or `convert=USD,EUR`
/// as one query parameter. Order is preserved.
///
/// # Example
///
/// ```rust
/// use serde::Serialize;
/// use coinmarketcap_api_client::types::serde_helpers::comma_separated;
///
/// #[derive(Serialize)]
/// struct Request {
///     #[serde(serialize_with = "comma_separated::serialize")]
///     symbol: Vec<String>,
/// }
///
/// let request = Request {
///     symbol: vec!["BTC".to_string(), "ETH".to_string()],
/// };
///
/// let json = serde_json::to_string(&request).unwrap();
/// assert_eq!(json, r#"{"symbol":"BTC,ETH"}"#);
/// ```
pub mod comma_separated {
    use super::*;

    /// Serialize a slice of strings as a comma-separated string.
    pub fn serialize<S>(values: &[String], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&values.join(","))
    }
}

/// Helper for empty strings that should be deserialized as None.
///
/// CoinMarketCap sends `"error_message": ""` on some successful responses
/// and `null` on others.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use coinmarketcap_api_client::types::serde_helpers::empty_string_as_none;
///
/// #[derive(Deserialize, Debug)]
/// struct Status {
///     #[serde(deserialize_with = "empty_string_as_none::deserialize", default)]
///     error_message: Option<String>,
/// }
///
/// let status: Status = serde_json::from_str(r#"{"error_message":""}"#).unwrap();
/// assert!(status.error_message.is_none());
///
/// let status: Status = serde_json::from_str(r#"{"error_message":"Bad key"}"#).unwrap();
/// assert_eq!(status.error_message.unwrap(), "Bad key");
/// ```
pub mod empty_string_as_none {
    use super::*;

    /// Deserialize a string, returning None if empty.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        Ok(s.filter(|s| !s.is_empty()))
    }
}
