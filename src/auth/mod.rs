//! API key management for CoinMarketCap authentication.
//!
//! CoinMarketCap authenticates every request with a single key sent in the
//! `X-CMC_PRO_API_KEY` header. The key is stored as a secret and never shows
//! up in `Debug` output or logs.

mod credentials;

pub use credentials::{API_KEY_ENV_VAR, ApiKey};
