//! Example: Branching on CmcError variants.
//!
//! Run with: cargo run --example error_handling

use std::time::Duration;

use coinmarketcap_api_client::{Client, CmcError};

#[tokio::main]
async fn main() {
    let client = match Client::builder().api_key("your-api-key-here").build() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Failed to build client: {e}");
            return;
        }
    };

    let result = client
        .cryptocurrency()
        .listings_latest(&[("limit", "100"), ("convert", "USD")])
        .await;

    match result {
        Ok(listings) => println!("Retrieved listings: {}", listings["data"]),
        Err(CmcError::Authentication(e)) => {
            println!("Authentication failed: {e}");
            println!("Check your API key");
        }
        Err(CmcError::RateLimit { error, retry_after }) => {
            println!("Rate limit exceeded: {error}");
            if let Some(seconds) = retry_after {
                println!("Retry after: {:?}", Duration::from_secs(seconds));
            }
        }
        Err(CmcError::InvalidRequest(e)) => {
            println!("Invalid request: {e}");
            println!("Check your request parameters");
        }
        Err(CmcError::NotFound(e)) => println!("Resource not found: {e}"),
        Err(CmcError::Api(e)) => {
            println!("API error [{}]: {}", e.status_code, e.message);
            if let Some(body) = &e.response {
                println!("Raw response: {}", serde_json::Value::Object(body.clone()));
            }
        }
        Err(CmcError::Config(message)) => println!("Configuration error: {message}"),
    }
}
