//! Example: Global market metrics and price conversion.
//!
//! Run with: cargo run --example global_metrics

use coinmarketcap_api_client::ClientBuilder;
use coinmarketcap_api_client::types::{
    ApiResponse, GlobalMetricsQuote, PriceConversion, PriceConversionRequest,
};
use rust_decimal::Decimal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    let client = ClientBuilder::from_env().build()?;

    println!("=== Global Metrics ===");
    let body = client
        .global_metrics()
        .quotes_latest(&[("convert", "USD")])
        .await?;
    let metrics = ApiResponse::<GlobalMetricsQuote>::from_generic(body)?.data;
    println!("Active cryptocurrencies: {:?}", metrics.active_cryptocurrencies);
    println!("BTC dominance: {:?}%", metrics.btc_dominance);
    if let Some(usd) = metrics.quote.get("USD") {
        println!("Total market cap: {:?}", usd.total_market_cap);
        println!("24h volume: {:?}", usd.total_volume_24h);
    }

    println!("\n=== Price Conversion ===");
    let request = PriceConversionRequest::for_id(Decimal::ONE, 1, "EUR");
    let body = client.tools().price_conversion(&request).await?;
    let conversion = ApiResponse::<PriceConversion>::from_generic(body)?.data;
    for (currency, quote) in &conversion.quote {
        println!("{} {} = {:?} {}", conversion.amount, conversion.symbol, quote.price, currency);
    }

    Ok(())
}
