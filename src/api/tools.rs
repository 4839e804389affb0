//! Utility endpoints.

use std::sync::Arc;

use serde::Serialize;

use crate::api::endpoints::tools;
use crate::error::CmcError;
use crate::http::Transport;
use crate::types::GenericResponse;

/// Utility endpoints.
///
/// Every method forwards its parameters unchanged to a fixed path and
/// returns the decoded body. Obtain it from [`Client::tools`](crate::Client::tools).
#[derive(Debug, Clone)]
pub struct Tools {
    transport: Arc<Transport>,
}

impl Tools {
    /// Create the group on top of a shared transport.
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Convert an `amount` of one currency into one or more others.
    ///
    /// CoinMarketCap serves this as a GET with query parameters, not a POST.
    ///
    /// ```rust,no_run
    /// # async fn run(client: coinmarketcap_api_client::Client) -> coinmarketcap_api_client::Result<()> {
    /// use coinmarketcap_api_client::types::PriceConversionRequest;
    /// use rust_decimal::Decimal;
    ///
    /// let request = PriceConversionRequest::for_id(Decimal::ONE, 1, "EUR");
    /// let body = client.tools().price_conversion(&request).await?;
    /// println!("{}", body["data"]);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn price_conversion<Q>(&self, params: &Q) -> Result<GenericResponse, CmcError>
    where
        Q: Serialize + ?Sized,
    {
        self.transport.get(tools::PRICE_CONVERSION, params).await
    }
}
