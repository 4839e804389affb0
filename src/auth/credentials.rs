//! API key storage.

use secrecy::{ExposeSecret, SecretString};

/// Environment variable read by [`ApiKey::try_from_env`].
pub const API_KEY_ENV_VAR: &str = "COINMARKETCAP_API_KEY";

/// A CoinMarketCap API key.
///
/// The key is held in a [`SecretString`] so it is zeroized on drop and
/// redacted from `Debug` output.
#[derive(Clone)]
pub struct ApiKey(SecretString);

impl ApiKey {
    /// Create an API key from a string.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self(SecretString::from(api_key.into()))
    }

    /// Try to read the key from `COINMARKETCAP_API_KEY`.
    ///
    /// Returns `None` if the variable is not set or empty.
    pub fn try_from_env() -> Option<Self> {
        Self::try_from_env_var(API_KEY_ENV_VAR)
    }

    /// Try to read the key from a custom environment variable.
    ///
    /// Returns `None` if the variable is not set or empty.
    pub fn try_from_env_var(var: &str) -> Option<Self> {
        std::env::var(var)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .map(Self::new)
    }

    /// Get the raw key for the request header.
    ///
    /// This method exposes the secret - use carefully.
    pub fn expose_secret(&self) -> &str {
        self.0.expose_secret()
    }

    /// Whether the key is empty or whitespace only.
    pub fn is_empty(&self) -> bool {
        self.expose_secret().trim().is_empty()
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey([REDACTED])")
    }
}

impl From<&str> for ApiKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ApiKey {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
