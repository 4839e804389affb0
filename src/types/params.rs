//! Query parameter types.
//!
//! Endpoint methods accept anything that serializes to a flat form: a
//! [`QueryParams`] map, a slice of `(key, value)` pairs, `()` for no
//! parameters, or one of the typed requests below.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::types::serde_helpers::comma_separated;

/// Untyped query parameters.
pub type QueryParams = HashMap<String, String>;

/// Parameters for `/v1/cryptocurrency/listings/latest`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListingsLatestRequest {
    /// 1-based offset of the first result
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<u32>,
    /// Number of results (1..=5000)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Conversion currencies
    #[serde(
        serialize_with = "comma_separated::serialize",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub convert: Vec<String>,
    /// Sort field, e.g. `market_cap`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    /// `asc` or `desc`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_dir: Option<String>,
    /// `all`, `coins` or `tokens`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cryptocurrency_type: Option<String>,
}

impl ListingsLatestRequest {
    /// Top `limit` listings priced in `convert`.
    pub fn top(limit: u32, convert: impl Into<String>) -> Self {
        Self {
            limit: Some(limit),
            convert: vec![convert.into()],
            ..Default::default()
        }
    }
}

/// Parameters for `/v2/cryptocurrency/quotes/latest`.
///
/// Exactly one of `id`, `slug` or `symbol` should be set.
#[derive(Debug, Clone, Default, Serialize)]
pub struct QuotesLatestRequest {
    #[serde(
        serialize_with = "comma_separated::serialize",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub id: Vec<String>,
    #[serde(
        serialize_with = "comma_separated::serialize",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub slug: Vec<String>,
    #[serde(
        serialize_with = "comma_separated::serialize",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub symbol: Vec<String>,
    #[serde(
        serialize_with = "comma_separated::serialize",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub convert: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_invalid: Option<bool>,
}

impl QuotesLatestRequest {
    /// Quotes for the given symbols.
    pub fn for_symbols<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            symbol: symbols.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Add a conversion currency.
    pub fn convert(mut self, currency: impl Into<String>) -> Self {
        self.convert.push(currency.into());
        self
    }
}

/// Parameters for `/v2/tools/price-conversion`.
///
/// Converting by `symbol` returns a list under `data` (symbols are not
/// unique); converting by `id` returns a single object.
#[derive(Debug, Clone, Serialize)]
pub struct PriceConversionRequest {
    /// Amount of the source currency
    #[serde(serialize_with = "rust_decimal::serde::str::serialize")]
    pub amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// Historical timestamp (ISO 8601 or unix)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(
        serialize_with = "comma_separated::serialize",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub convert: Vec<String>,
}

impl PriceConversionRequest {
    /// Convert `amount` of `symbol` into `convert`.
    pub fn new(amount: Decimal, symbol: impl Into<String>, convert: impl Into<String>) -> Self {
        Self {
            amount,
            id: None,
            symbol: Some(symbol.into()),
            time: None,
            convert: vec![convert.into()],
        }
    }

    /// Convert `amount` of the asset with CoinMarketCap ID `id` into `convert`.
    pub fn for_id(amount: Decimal, id: u64, convert: impl Into<String>) -> Self {
        Self {
            amount,
            id: Some(id.to_string()),
            symbol: None,
            time: None,
            convert: vec![convert.into()],
        }
    }
}
