use coinmarketcap_api_client::ClientBuilder;
use coinmarketcap_api_client::types::{ApiResponse, GlobalMetricsQuote};

fn live_tests_enabled() -> bool {
    std::env::var("COINMARKETCAP_LIVE_TESTS").ok().as_deref() == Some("1")
}

#[tokio::test]
#[ignore]
async fn live_global_metrics_smoke() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    if !live_tests_enabled() {
        return Ok(());
    }

    let client = match ClientBuilder::from_env().build() {
        Ok(client) => client,
        Err(_) => return Ok(()),
    };

    let body = client
        .global_metrics()
        .quotes_latest(&[("convert", "USD")])
        .await?;
    let metrics = ApiResponse::<GlobalMetricsQuote>::from_generic(body)?;
    assert_eq!(metrics.status.error_code, 0);
    assert!(metrics.data.quote.contains_key("USD"));

    Ok(())
}

#[tokio::test]
#[ignore]
async fn live_invalid_key_is_authentication_error() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    if !live_tests_enabled() {
        return Ok(());
    }

    let client = ClientBuilder::from_env().api_key("invalid-key").build()?;
    let err = client
        .cryptocurrency()
        .map(&[("symbol", "BTC")])
        .await
        .unwrap_err();
    assert!(err.is_authentication());

    Ok(())
}
