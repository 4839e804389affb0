//! Example: Fetching latest quotes and listings.
//!
//! Reads the configuration from the environment (or a `.env` file):
//! `COINMARKETCAP_API_KEY`, and optionally `COINMARKETCAP_BASE_URL` or
//! `COINMARKETCAP_USE_SANDBOX=true`.
//!
//! Run with: cargo run --example quotes

use std::collections::HashMap;

use coinmarketcap_api_client::ClientBuilder;
use coinmarketcap_api_client::types::{
    ApiResponse, CryptocurrencyListing, CryptocurrencyQuote, ListingsLatestRequest,
    QuotesLatestRequest,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = ClientBuilder::from_env().build()?;

    // Untyped access, straight from the decoded body
    println!("=== Bitcoin ===");
    let quotes = client
        .cryptocurrency()
        .quotes_latest(&[("symbol", "BTC"), ("convert", "USD")])
        .await?;
    let usd = &quotes["data"]["BTC"][0]["quote"]["USD"];
    println!("Price: {}", usd["price"]);
    println!("24h change: {}%", usd["percent_change_24h"]);

    // Typed access
    println!("\n=== BTC / ETH ===");
    let request = QuotesLatestRequest::for_symbols(["BTC", "ETH"]).convert("USD");
    let body = client.cryptocurrency().quotes_latest(&request).await?;
    let quotes = ApiResponse::<HashMap<String, Vec<CryptocurrencyQuote>>>::from_generic(body)?;
    for (symbol, entries) in &quotes.data {
        for entry in entries {
            if let Some(price) = entry.quote.get("USD").and_then(|q| q.price) {
                println!("{symbol} ({}): ${price}", entry.name);
            }
        }
    }

    println!("\n=== Top 10 ===");
    let body = client
        .cryptocurrency()
        .listings_latest(&ListingsLatestRequest::top(10, "USD"))
        .await?;
    let listings = ApiResponse::<Vec<CryptocurrencyListing>>::from_generic(body)?;
    for listing in &listings.data {
        let price = listing
            .quote
            .get("USD")
            .and_then(|q| q.price)
            .map(|p| p.round_dp(2).to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "#{:<3} {:<8} {:<20} ${}",
            listing.cmc_rank.unwrap_or_default(),
            listing.symbol,
            listing.name,
            price
        );
    }
    println!("Credits used: {}", listings.status.credit_count);

    Ok(())
}
