//! # CoinMarketCap Client
//!
//! An async Rust client library for the CoinMarketCap Pro REST API.
//!
//! ## Features
//!
//! - Every cryptocurrency, exchange, global-metrics and tools endpoint
//! - Errors classified by HTTP status, with the raw body and retry hints kept
//! - API key handled as a secret and never logged
//! - Untyped JSON responses, with optional typed decoding via `rust_decimal`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use coinmarketcap_api_client::Client;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::builder().api_key("your-api-key").build()?;
//!     let quotes = client
//!         .cryptocurrency()
//!         .quotes_latest(&[("symbol", "BTC"), ("convert", "USD")])
//!         .await?;
//!     println!("BTC: {}", quotes["data"]["BTC"][0]["quote"]["USD"]["price"]);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod http;
pub mod types;

// Re-export commonly used types at crate root
pub use client::{Client, ClientBuilder};
pub use error::{ApiError, CmcError};
pub use types::{ApiResponse, GenericResponse};

/// Result type alias using CmcError
pub type Result<T> = std::result::Result<T, CmcError>;
