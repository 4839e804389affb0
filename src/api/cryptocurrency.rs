//! Cryptocurrency endpoints: listings, quotes, metadata, OHLCV and trending data.

use std::sync::Arc;

use serde::Serialize;

use crate::api::endpoints::cryptocurrency;
use crate::error::CmcError;
use crate::http::Transport;
use crate::types::GenericResponse;

/// Cryptocurrency endpoints: listings, quotes, metadata, OHLCV and trending data.
///
/// Every method forwards its parameters unchanged to a fixed path and
/// returns the decoded body. Obtain it from [`Client::cryptocurrency`](crate::Client::cryptocurrency).
#[derive(Debug, Clone)]
pub struct Cryptocurrency {
    transport: Arc<Transport>,
}

impl Cryptocurrency {
    /// Create the group on top of a shared transport.
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Get the latest market listings, ranked by market cap by default.
    pub async fn listings_latest<Q>(&self, params: &Q) -> Result<GenericResponse, CmcError>
    where
        Q: Serialize + ?Sized,
    {
        self.transport.get(cryptocurrency::LISTINGS_LATEST, params).await
    }

    /// Get market listings as they were at a past `date`.
    pub async fn listings_historical<Q>(&self, params: &Q) -> Result<GenericResponse, CmcError>
    where
        Q: Serialize + ?Sized,
    {
        self.transport.get(cryptocurrency::LISTINGS_HISTORICAL, params).await
    }

    /// Get the latest quotes for one or more cryptocurrencies.
    ///
    /// Quotes requested by `symbol` come back as a list per symbol, since
    /// symbols are not unique.
    ///
    /// ```rust,no_run
    /// # async fn run(client: coinmarketcap_api_client::Client) -> coinmarketcap_api_client::Result<()> {
    /// let body = client
    ///     .cryptocurrency()
    ///     .quotes_latest(&[("symbol", "BTC,ETH"), ("convert", "USD")])
    ///     .await?;
    /// println!("{}", body["data"]["BTC"][0]["quote"]["USD"]["price"]);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn quotes_latest<Q>(&self, params: &Q) -> Result<GenericResponse, CmcError>
    where
        Q: Serialize + ?Sized,
    {
        self.transport.get(cryptocurrency::QUOTES_LATEST, params).await
    }

    /// Get historical quotes over a time range.
    pub async fn quotes_historical<Q>(&self, params: &Q) -> Result<GenericResponse, CmcError>
    where
        Q: Serialize + ?Sized,
    {
        self.transport.get(cryptocurrency::QUOTES_HISTORICAL, params).await
    }

    /// Get static metadata (logo, description, links).
    pub async fn info<Q>(&self, params: &Q) -> Result<GenericResponse, CmcError>
    where
        Q: Serialize + ?Sized,
    {
        self.transport.get(cryptocurrency::INFO, params).await
    }

    /// Get the mapping of cryptocurrencies to CoinMarketCap IDs.
    pub async fn map<Q>(&self, params: &Q) -> Result<GenericResponse, CmcError>
    where
        Q: Serialize + ?Sized,
    {
        self.transport.get(cryptocurrency::MAP, params).await
    }

    /// Get the current day OHLCV values.
    pub async fn ohlcv_latest<Q>(&self, params: &Q) -> Result<GenericResponse, CmcError>
    where
        Q: Serialize + ?Sized,
    {
        self.transport.get(cryptocurrency::OHLCV_LATEST, params).await
    }

    /// Get historical OHLCV values.
    pub async fn ohlcv_historical<Q>(&self, params: &Q) -> Result<GenericResponse, CmcError>
    where
        Q: Serialize + ?Sized,
    {
        self.transport.get(cryptocurrency::OHLCV_HISTORICAL, params).await
    }

    /// Get cryptocurrency categories.
    pub async fn categories<Q>(&self, params: &Q) -> Result<GenericResponse, CmcError>
    where
        Q: Serialize + ?Sized,
    {
        self.transport.get(cryptocurrency::CATEGORIES, params).await
    }

    /// Get the latest trending cryptocurrencies.
    pub async fn trending_latest<Q>(&self, params: &Q) -> Result<GenericResponse, CmcError>
    where
        Q: Serialize + ?Sized,
    {
        self.transport.get(cryptocurrency::TRENDING_LATEST, params).await
    }

    /// Get the biggest gainers and losers.
    pub async fn trending_gainers_losers<Q>(&self, params: &Q) -> Result<GenericResponse, CmcError>
    where
        Q: Serialize + ?Sized,
    {
        self.transport.get(cryptocurrency::TRENDING_GAINERS_LOSERS, params).await
    }
}
