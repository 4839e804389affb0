//! Client facade and builder.

use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::api::endpoints::{PRO_BASE_URL, SANDBOX_BASE_URL};
use crate::api::{Cryptocurrency, Exchange, GlobalMetrics, Tools};
use crate::auth::{API_KEY_ENV_VAR, ApiKey};
use crate::error::CmcError;
use crate::http::{Transport, default_user_agent};

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variable overriding the base URL in [`ClientBuilder::from_env`].
pub const BASE_URL_ENV_VAR: &str = "COINMARKETCAP_BASE_URL";

/// Environment variable enabling the sandbox in [`ClientBuilder::from_env`].
pub const USE_SANDBOX_ENV_VAR: &str = "COINMARKETCAP_USE_SANDBOX";

/// The CoinMarketCap API client.
///
/// Owns one [`Transport`] and one instance of each endpoint group, all built
/// up front. Accessors always return the same group instance. Cloning is
/// cheap and clones share the transport.
///
/// # Example
///
/// ```rust,no_run
/// use coinmarketcap_api_client::Client;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = Client::builder().api_key("your-api-key").build()?;
///
///     let listings = client
///         .cryptocurrency()
///         .listings_latest(&[("limit", "10"), ("convert", "USD")])
///         .await?;
///     println!("{}", listings["data"]);
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    transport: Arc<Transport>,
    cryptocurrency: Cryptocurrency,
    exchange: Exchange,
    global_metrics: GlobalMetrics,
    tools: Tools,
}

impl Client {
    /// Create a client against the production API with default settings.
    pub fn new(api_key: impl Into<ApiKey>) -> Result<Self, CmcError> {
        Self::builder().api_key(api_key).build()
    }

    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a client on top of an existing transport.
    pub fn from_transport(transport: Transport) -> Self {
        let transport = Arc::new(transport);
        Self {
            cryptocurrency: Cryptocurrency::new(Arc::clone(&transport)),
            exchange: Exchange::new(Arc::clone(&transport)),
            global_metrics: GlobalMetrics::new(Arc::clone(&transport)),
            tools: Tools::new(Arc::clone(&transport)),
            transport,
        }
    }

    /// Cryptocurrency endpoints.
    pub fn cryptocurrency(&self) -> &Cryptocurrency {
        &self.cryptocurrency
    }

    /// Exchange endpoints.
    pub fn exchange(&self) -> &Exchange {
        &self.exchange
    }

    /// Global metrics endpoints.
    pub fn global_metrics(&self) -> &GlobalMetrics {
        &self.global_metrics
    }

    /// Tools endpoints.
    pub fn tools(&self) -> &Tools {
        &self.tools
    }

    /// The transport shared by all endpoint groups.
    pub fn transport(&self) -> &Transport {
        &self.transport
    }
}

/// Builder for [`Client`].
///
/// Only [`build`](ClientBuilder::build) validates anything, and it does so
/// before any network activity.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    api_key: Option<ApiKey>,
    base_url: String,
    timeout: Duration,
    user_agent: Option<String>,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: PRO_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }

    /// Create a builder configured from the environment.
    ///
    /// Reads `COINMARKETCAP_API_KEY`, an optional `COINMARKETCAP_BASE_URL`,
    /// and `COINMARKETCAP_USE_SANDBOX=true` to switch to the sandbox (which
    /// wins over the base URL override). A missing key surfaces on `build`.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::new();
        if let Some(api_key) = lookup(API_KEY_ENV_VAR) {
            builder = builder.api_key(api_key);
        }
        if let Some(base_url) = lookup(BASE_URL_ENV_VAR).filter(|url| !url.is_empty()) {
            builder = builder.base_url(base_url);
        }
        if lookup(USE_SANDBOX_ENV_VAR).as_deref() == Some("true") {
            builder = builder.use_sandbox();
        }
        builder
    }

    /// Set the API key.
    pub fn api_key(mut self, api_key: impl Into<ApiKey>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Use the sandbox environment.
    ///
    /// Only the base URL changes.
    pub fn use_sandbox(mut self) -> Self {
        self.base_url = SANDBOX_BASE_URL.to_string();
        self
    }

    /// Set the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build the client.
    ///
    /// Fails with [`CmcError::Config`] if no API key was set or the base URL
    /// is not an absolute URL.
    pub fn build(self) -> Result<Client, CmcError> {
        let api_key = self
            .api_key
            .filter(|key| !key.is_empty())
            .ok_or_else(|| CmcError::Config("API key is required".to_string()))?;

        Url::parse(&self.base_url)
            .map_err(|e| CmcError::Config(format!("invalid base URL {:?}: {e}", self.base_url)))?;

        let user_agent = self.user_agent.unwrap_or_else(default_user_agent);
        let transport =
            Transport::with_user_agent(self.base_url, api_key, self.timeout, &user_agent)?;

        Ok(Client::from_transport(transport))
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
