//! Typed models for the most common market-data payloads.
//!
//! These decode the `data` field of a response through
//! [`ApiResponse::from_generic`](crate::types::ApiResponse::from_generic).
//! Fields the API adds later are ignored; fields it omits decode as `None`.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Market data for one asset, priced in one conversion currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Price in the conversion currency
    pub price: Option<Decimal>,
    /// Rolling 24 hour volume
    pub volume_24h: Option<Decimal>,
    /// 24 hour volume change in percent
    pub volume_change_24h: Option<Decimal>,
    /// 1 hour price change in percent
    pub percent_change_1h: Option<Decimal>,
    /// 24 hour price change in percent
    pub percent_change_24h: Option<Decimal>,
    /// 7 day price change in percent
    pub percent_change_7d: Option<Decimal>,
    /// 30 day price change in percent
    pub percent_change_30d: Option<Decimal>,
    /// Market capitalization
    pub market_cap: Option<Decimal>,
    /// Share of total market capitalization in percent
    pub market_cap_dominance: Option<Decimal>,
    /// Market capitalization at max supply
    pub fully_diluted_market_cap: Option<Decimal>,
    /// Last time the quote was updated
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub last_updated: Option<OffsetDateTime>,
}

/// An entry of `/v1/cryptocurrency/listings/latest`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CryptocurrencyListing {
    /// CoinMarketCap ID
    pub id: u64,
    /// Display name
    pub name: String,
    /// Ticker symbol
    pub symbol: String,
    /// URL-friendly name
    pub slug: String,
    /// Rank by market cap
    pub cmc_rank: Option<u32>,
    /// Number of active market pairs
    pub num_market_pairs: Option<u32>,
    pub circulating_supply: Option<Decimal>,
    pub total_supply: Option<Decimal>,
    pub max_supply: Option<Decimal>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Quotes keyed by conversion currency
    #[serde(default)]
    pub quote: HashMap<String, Quote>,
}

/// An entry of `/v2/cryptocurrency/quotes/latest`.
///
/// When queried by `symbol` the API returns a list per symbol; when queried
/// by `id` or `slug` it returns a single object per key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CryptocurrencyQuote {
    pub id: u64,
    pub name: String,
    pub symbol: String,
    pub slug: Option<String>,
    /// 1 if the asset is actively traded
    pub is_active: Option<u8>,
    pub cmc_rank: Option<u32>,
    pub circulating_supply: Option<Decimal>,
    /// Quotes keyed by conversion currency
    #[serde(default)]
    pub quote: HashMap<String, Quote>,
}

/// Aggregate market quote within `/v1/global-metrics/quotes/latest`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalQuote {
    pub total_market_cap: Option<Decimal>,
    pub total_volume_24h: Option<Decimal>,
    pub altcoin_market_cap: Option<Decimal>,
    pub altcoin_volume_24h: Option<Decimal>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub last_updated: Option<OffsetDateTime>,
}

/// Payload of `/v1/global-metrics/quotes/latest`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalMetricsQuote {
    pub active_cryptocurrencies: Option<u64>,
    pub active_exchanges: Option<u64>,
    pub active_market_pairs: Option<u64>,
    /// Bitcoin share of total market cap in percent
    pub btc_dominance: Option<Decimal>,
    /// Ethereum share of total market cap in percent
    pub eth_dominance: Option<Decimal>,
    /// Quotes keyed by conversion currency
    #[serde(default)]
    pub quote: HashMap<String, GlobalQuote>,
}

/// Converted price within a [`PriceConversion`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionQuote {
    /// Value of the requested amount in this currency
    pub price: Option<Decimal>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub last_updated: Option<OffsetDateTime>,
}

/// Payload of `/v2/tools/price-conversion`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceConversion {
    pub id: u64,
    pub symbol: String,
    pub name: String,
    /// Amount that was converted
    pub amount: Decimal,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub last_updated: Option<OffsetDateTime>,
    /// Converted amounts keyed by target currency
    #[serde(default)]
    pub quote: HashMap<String, ConversionQuote>,
}
