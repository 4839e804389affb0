//! CoinMarketCap REST API endpoint constants.

/// Base URL for the CoinMarketCap Pro API.
pub const PRO_BASE_URL: &str = "https://pro-api.coinmarketcap.com";

/// Base URL for the CoinMarketCap sandbox API.
pub const SANDBOX_BASE_URL: &str = "https://sandbox-api.coinmarketcap.com";

/// Cryptocurrency endpoints.
pub mod cryptocurrency {
    /// Latest market listings.
    pub const LISTINGS_LATEST: &str = "/v1/cryptocurrency/listings/latest";
    /// Historical market listings.
    pub const LISTINGS_HISTORICAL: &str = "/v1/cryptocurrency/listings/historical";
    /// Latest quotes.
    pub const QUOTES_LATEST: &str = "/v2/cryptocurrency/quotes/latest";
    /// Historical quotes.
    pub const QUOTES_HISTORICAL: &str = "/v2/cryptocurrency/quotes/historical";
    /// Static metadata.
    pub const INFO: &str = "/v2/cryptocurrency/info";
    /// ID map.
    pub const MAP: &str = "/v1/cryptocurrency/map";
    /// Latest OHLCV.
    pub const OHLCV_LATEST: &str = "/v2/cryptocurrency/ohlcv/latest";
    /// Historical OHLCV.
    pub const OHLCV_HISTORICAL: &str = "/v2/cryptocurrency/ohlcv/historical";
    /// Categories.
    pub const CATEGORIES: &str = "/v1/cryptocurrency/categories";
    /// Trending latest.
    pub const TRENDING_LATEST: &str = "/v1/cryptocurrency/trending/latest";
    /// Trending gainers and losers.
    pub const TRENDING_GAINERS_LOSERS: &str = "/v1/cryptocurrency/trending/gainers-losers";
}

/// Exchange endpoints.
pub mod exchange {
    /// Latest exchange listings.
    pub const LISTINGS_LATEST: &str = "/v1/exchange/listings/latest";
    /// Latest exchange quotes.
    pub const QUOTES_LATEST: &str = "/v1/exchange/quotes/latest";
    /// Historical exchange quotes.
    pub const QUOTES_HISTORICAL: &str = "/v1/exchange/quotes/historical";
    /// Static metadata.
    pub const INFO: &str = "/v1/exchange/info";
    /// ID map.
    pub const MAP: &str = "/v1/exchange/map";
    /// Latest market pairs.
    pub const MARKET_PAIRS_LATEST: &str = "/v1/exchange/market-pairs/latest";
}

/// Global metrics endpoints.
pub mod global_metrics {
    /// Latest aggregate market metrics.
    pub const QUOTES_LATEST: &str = "/v1/global-metrics/quotes/latest";
    /// Historical aggregate market metrics.
    pub const QUOTES_HISTORICAL: &str = "/v1/global-metrics/quotes/historical";
}

/// Tools endpoints.
pub mod tools {
    /// Price conversion.
    pub const PRICE_CONVERSION: &str = "/v2/tools/price-conversion";
}
