//! Request execution and response classification.

use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware, RequestBuilder};
use reqwest_tracing::TracingMiddleware;
use serde::Serialize;

use crate::auth::ApiKey;
use crate::error::CmcError;
use crate::types::GenericResponse;

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "X-CMC_PRO_API_KEY";

const JSON: &str = "application/json";

/// Default `User-Agent` sent with every request.
pub fn default_user_agent() -> String {
    format!("coinmarketcap-api-client/{}", env!("CARGO_PKG_VERSION"))
}

/// The HTTP transport shared by all endpoint groups.
///
/// Configuration is fixed at construction. Each call performs exactly one
/// round trip: there are no retries and nothing is cached. Cloning is cheap
/// and clones share the underlying connection pool.
///
/// # Example
///
/// ```rust,no_run
/// use std::time::Duration;
/// use coinmarketcap_api_client::auth::ApiKey;
/// use coinmarketcap_api_client::http::Transport;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let transport = Transport::new(
///         "https://pro-api.coinmarketcap.com",
///         ApiKey::new("your-api-key"),
///         Duration::from_secs(30),
///     )?;
///
///     let body = transport
///         .get("/v1/cryptocurrency/map", &[("symbol", "BTC")])
///         .await?;
///     println!("{}", body["data"]);
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct Transport {
    http_client: ClientWithMiddleware,
    base_url: String,
    api_key: ApiKey,
    timeout: Duration,
}

impl Transport {
    /// Create a transport with the default user agent.
    ///
    /// Trailing slashes are stripped from `base_url`.
    pub fn new(
        base_url: impl Into<String>,
        api_key: ApiKey,
        timeout: Duration,
    ) -> Result<Self, CmcError> {
        Self::with_user_agent(base_url, api_key, timeout, &default_user_agent())
    }

    /// Create a transport with a custom user agent.
    pub fn with_user_agent(
        base_url: impl Into<String>,
        api_key: ApiKey,
        timeout: Duration,
        user_agent: &str,
    ) -> Result<Self, CmcError> {
        let mut headers = HeaderMap::new();
        let header_value = HeaderValue::from_str(user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("coinmarketcap-api-client"));
        headers.insert(USER_AGENT, header_value);

        let reqwest_client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| CmcError::Config(format!("failed to build HTTP client: {e}")))?;

        let http_client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
            timeout,
        })
    }

    /// The base URL requests are sent to, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Make a GET request with URL-encoded query parameters.
    ///
    /// `params` can be a map, a slice of pairs, a typed request or `()`.
    pub async fn get<Q>(&self, path: &str, params: &Q) -> Result<GenericResponse, CmcError>
    where
        Q: Serialize + ?Sized,
    {
        let url = self.build_url(path, params)?;
        tracing::debug!(method = "GET", path, "sending request");
        self.send(self.http_client.get(&url)).await
    }

    /// Make a POST request with a JSON body.
    ///
    /// The body is encoded before any network activity; an encoding failure
    /// returns a status 0 error.
    pub async fn post<B>(&self, path: &str, body: &B) -> Result<GenericResponse, CmcError>
    where
        B: Serialize + ?Sized,
    {
        let payload = serde_json::to_vec(body).map_err(|e| {
            CmcError::transport(format!("failed to marshal request data: {e}"), 0, e)
        })?;

        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(method = "POST", path, "sending request");
        let request = self
            .http_client
            .post(&url)
            .header(CONTENT_TYPE, JSON)
            .body(payload);
        self.send(request).await
    }

    /// Build the full request URL for a path and query parameters.
    pub(crate) fn build_url<Q>(&self, path: &str, params: &Q) -> Result<String, CmcError>
    where
        Q: Serialize + ?Sized,
    {
        let query_string = serde_urlencoded::to_string(params).map_err(|e| {
            CmcError::transport(format!("failed to encode query parameters: {e}"), 0, e)
        })?;
        Ok(if query_string.is_empty() {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}{}?{}", self.base_url, path, query_string)
        })
    }

    /// Send a request and turn the response into a decoded body or an error.
    async fn send(&self, request: RequestBuilder) -> Result<GenericResponse, CmcError> {
        let response = request
            .header(API_KEY_HEADER, self.api_key.expose_secret())
            .header(ACCEPT, JSON)
            .send()
            .await
            .map_err(|e| {
                let message = if is_timeout(&e) {
                    "request timed out"
                } else {
                    "HTTP request failed"
                };
                CmcError::transport(format!("{message}: {e}"), 0, e)
            })?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|e| {
            CmcError::transport(format!("failed to read response body: {e}"), status, e)
        })?;

        let data: GenericResponse = serde_json::from_slice(&body).map_err(|e| {
            CmcError::transport(format!("failed to parse JSON response: {e}"), status, e)
        })?;

        if status >= 400 {
            let error = CmcError::from_response(status, data);
            tracing::debug!(status, error_message = error.message(), "request failed");
            return Err(error);
        }

        Ok(data)
    }
}

fn is_timeout(error: &reqwest_middleware::Error) -> bool {
    matches!(error, reqwest_middleware::Error::Reqwest(e) if e.is_timeout())
}

impl std::fmt::Debug for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transport")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key)
            .field("timeout", &self.timeout)
            .finish()
    }
}
