//! Exchange endpoints: listings, quotes, metadata and market pairs.

use std::sync::Arc;

use serde::Serialize;

use crate::api::endpoints::exchange;
use crate::error::CmcError;
use crate::http::Transport;
use crate::types::GenericResponse;

/// Exchange endpoints: listings, quotes, metadata and market pairs.
///
/// Every method forwards its parameters unchanged to a fixed path and
/// returns the decoded body. Obtain it from [`Client::exchange`](crate::Client::exchange).
#[derive(Debug, Clone)]
pub struct Exchange {
    transport: Arc<Transport>,
}

impl Exchange {
    /// Create the group on top of a shared transport.
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Get the latest exchange listings.
    pub async fn listings_latest<Q>(&self, params: &Q) -> Result<GenericResponse, CmcError>
    where
        Q: Serialize + ?Sized,
    {
        self.transport.get(exchange::LISTINGS_LATEST, params).await
    }

    /// Get the latest aggregate quotes for one or more exchanges.
    pub async fn quotes_latest<Q>(&self, params: &Q) -> Result<GenericResponse, CmcError>
    where
        Q: Serialize + ?Sized,
    {
        self.transport.get(exchange::QUOTES_LATEST, params).await
    }

    /// Get historical exchange quotes.
    pub async fn quotes_historical<Q>(&self, params: &Q) -> Result<GenericResponse, CmcError>
    where
        Q: Serialize + ?Sized,
    {
        self.transport.get(exchange::QUOTES_HISTORICAL, params).await
    }

    /// Get static exchange metadata.
    pub async fn info<Q>(&self, params: &Q) -> Result<GenericResponse, CmcError>
    where
        Q: Serialize + ?Sized,
    {
        self.transport.get(exchange::INFO, params).await
    }

    /// Get the mapping of exchanges to CoinMarketCap IDs.
    pub async fn map<Q>(&self, params: &Q) -> Result<GenericResponse, CmcError>
    where
        Q: Serialize + ?Sized,
    {
        self.transport.get(exchange::MAP, params).await
    }

    /// Get the active market pairs of an exchange.
    pub async fn market_pairs_latest<Q>(&self, params: &Q) -> Result<GenericResponse, CmcError>
    where
        Q: Serialize + ?Sized,
    {
        self.transport.get(exchange::MARKET_PAIRS_LATEST, params).await
    }
}
