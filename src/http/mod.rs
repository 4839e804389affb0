//! HTTP transport for the CoinMarketCap REST API.
//!
//! A single [`Transport`] performs every request: it injects the API key,
//! encodes query parameters or JSON bodies, decodes the JSON response and
//! classifies HTTP errors into [`CmcError`](crate::error::CmcError) variants.

mod transport;

pub use transport::{API_KEY_HEADER, Transport, default_user_agent};
