//! Request and response types used across the CoinMarketCap client library.

pub mod market;
pub mod params;
pub mod response;
pub mod serde_helpers;

pub use market::*;
pub use params::{ListingsLatestRequest, PriceConversionRequest, QueryParams, QuotesLatestRequest};
pub use response::{ApiResponse, ApiStatus, GenericResponse};
