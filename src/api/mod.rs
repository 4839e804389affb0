//! Endpoint groups of the CoinMarketCap REST API.
//!
//! Each group wraps the shared [`Transport`](crate::http::Transport) and
//! exposes one method per endpoint. Parameters are passed through as-is and
//! the decoded JSON body is returned without any reshaping.

mod cryptocurrency;
pub mod endpoints;
mod exchange;
mod global_metrics;
mod tools;

pub use cryptocurrency::Cryptocurrency;
pub use exchange::Exchange;
pub use global_metrics::GlobalMetrics;
pub use tools::Tools;
