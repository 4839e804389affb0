use std::collections::{BTreeMap, HashMap};
use std::error::Error as _;
use std::time::Duration;

use serde_json::{Value, json};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use coinmarketcap_api_client::error::{CmcError, UNKNOWN_ERROR_MESSAGE};
use coinmarketcap_api_client::{Client, GenericResponse};

const API_KEY: &str = "test-key";

fn build_client(server: &MockServer) -> Client {
    Client::builder()
        .api_key(API_KEY)
        .base_url(server.uri())
        .build()
        .unwrap()
}

fn quote_body() -> Value {
    json!({ "data": { "BTC": { "quote": { "USD": { "price": 50000.0 } } } } })
}

fn object(value: Value) -> GenericResponse {
    value.as_object().cloned().unwrap()
}

async fn mount_error(server: &MockServer, status: u16, body: Value) {
    Mock::given(method("GET"))
        .and(path("/v1/cryptocurrency/map"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_get_returns_body_unmodified() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/cryptocurrency/quotes/latest"))
        .and(header("X-CMC_PRO_API_KEY", API_KEY))
        .and(header("Accept", "application/json"))
        .and(query_param("symbol", "BTC,ETH"))
        .and(query_param("convert", "USD"))
        .respond_with(ResponseTemplate::new(200).set_body_json(quote_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let params = HashMap::from([("symbol", "BTC,ETH"), ("convert", "USD")]);
    let body = client
        .transport()
        .get("/v2/cryptocurrency/quotes/latest", &params)
        .await
        .unwrap();

    assert_eq!(Value::Object(body), quote_body());
}

#[tokio::test]
async fn test_post_returns_body_unmodified() {
    let server = MockServer::start().await;
    let payload = json!({ "amount": 1, "symbol": "BTC", "convert": "USD" });

    Mock::given(method("POST"))
        .and(path("/v2/tools/price-conversion"))
        .and(header("X-CMC_PRO_API_KEY", API_KEY))
        .and(header("Content-Type", "application/json"))
        .and(body_json(payload.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(quote_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let body = client
        .transport()
        .post("/v2/tools/price-conversion", &payload)
        .await
        .unwrap();

    assert_eq!(Value::Object(body), quote_body());
}

#[tokio::test]
async fn test_post_marshal_failure_makes_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(quote_body()))
        .expect(0)
        .mount(&server)
        .await;

    let client = build_client(&server);
    // JSON object keys must be strings.
    let payload = BTreeMap::from([(vec![1u8, 2], 3u8)]);
    let err = client
        .transport()
        .post("/v2/tools/price-conversion", &payload)
        .await
        .unwrap_err();

    assert!(matches!(err, CmcError::Api(_)));
    assert_eq!(err.status_code(), 0);
    assert!(err.message().starts_with("failed to marshal request data"));
    assert!(err.source().is_some());
}

#[tokio::test]
async fn test_authentication_error() {
    let server = MockServer::start().await;
    let body = json!({
        "status": { "error_code": 1001, "error_message": "This API Key is invalid." }
    });
    mount_error(&server, 401, body.clone()).await;

    let client = build_client(&server);
    let err = client.cryptocurrency().map(&()).await.unwrap_err();

    assert!(err.is_authentication());
    assert_eq!(err.status_code(), 401);
    assert_eq!(err.message(), "This API Key is invalid.");
    assert_eq!(err.response(), Some(&object(body)));
}

#[tokio::test]
async fn test_rate_limit_error_with_retry_after() {
    let server = MockServer::start().await;
    let body = json!({ "status": { "error_message": "Too many requests", "retry_after": 30 } });
    mount_error(&server, 429, body.clone()).await;

    let client = build_client(&server);
    let err = client.cryptocurrency().map(&()).await.unwrap_err();

    match &err {
        CmcError::RateLimit { error, retry_after } => {
            assert_eq!(error.message, "Too many requests");
            assert_eq!(*retry_after, Some(30));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.response(), Some(&object(body)));
}

#[tokio::test]
async fn test_rate_limit_error_without_retry_after() {
    let server = MockServer::start().await;
    mount_error(
        &server,
        429,
        json!({ "status": { "error_message": "Too many requests" } }),
    )
    .await;

    let client = build_client(&server);
    let err = client.cryptocurrency().map(&()).await.unwrap_err();

    assert!(err.is_rate_limit());
    assert_eq!(err.retry_after(), None);
}

#[tokio::test]
async fn test_invalid_request_and_not_found() {
    let server = MockServer::start().await;
    let body = json!({ "status": { "error_message": "Invalid value for \"symbol\"" } });

    Mock::given(method("GET"))
        .and(path("/v1/cryptocurrency/map"))
        .respond_with(ResponseTemplate::new(400).set_body_json(body.clone()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/exchange/info"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "status": {} })))
        .mount(&server)
        .await;

    let client = build_client(&server);

    let err = client.cryptocurrency().map(&[("symbol", "???")]).await.unwrap_err();
    assert!(err.is_invalid_request());
    assert_eq!(err.status_code(), 400);
    assert_eq!(err.message(), "Invalid value for \"symbol\"");
    assert_eq!(err.response(), Some(&object(body)));

    let err = client.exchange().info(&[("slug", "nowhere")]).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.message(), UNKNOWN_ERROR_MESSAGE);
}

#[tokio::test]
async fn test_other_status_maps_to_generic_error() {
    let server = MockServer::start().await;
    let body = json!({ "status": { "error_code": 1006, "error_message": "Plan not authorized" } });
    mount_error(&server, 403, body.clone()).await;

    let client = build_client(&server);
    let err = client.cryptocurrency().map(&()).await.unwrap_err();

    match &err {
        CmcError::Api(api_error) => {
            assert_eq!(api_error.status_code, 403);
            assert_eq!(api_error.message, "Plan not authorized");
            assert_eq!(api_error.response.as_ref(), Some(&object(body)));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_invalid_json_keeps_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/cryptocurrency/map"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/exchange/map"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = build_client(&server);

    let err = client.cryptocurrency().map(&()).await.unwrap_err();
    assert!(matches!(err, CmcError::Api(_)));
    assert_eq!(err.status_code(), 502);
    assert!(err.response().is_none());
    assert!(err.message().starts_with("failed to parse JSON response"));

    let err = client.exchange().map(&()).await.unwrap_err();
    assert_eq!(err.status_code(), 200);
    assert!(err.source().is_some());
}

#[tokio::test]
async fn test_timeout_maps_to_status_zero() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/global-metrics/quotes/latest"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(quote_body())
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let client = Client::builder()
        .api_key(API_KEY)
        .base_url(server.uri())
        .timeout(Duration::from_millis(100))
        .build()
        .unwrap();

    let err = client.global_metrics().quotes_latest(&()).await.unwrap_err();
    assert!(matches!(err, CmcError::Api(_)));
    assert_eq!(err.status_code(), 0);
    assert!(err.message().starts_with("request timed out"));
    assert!(err.source().is_some());
}

#[tokio::test]
async fn test_connection_failure_maps_to_status_zero() {
    // Nothing listens on the discard port.
    let client = Client::builder()
        .api_key(API_KEY)
        .base_url("http://127.0.0.1:9")
        .timeout(Duration::from_secs(2))
        .build()
        .unwrap();

    let err = client.tools().price_conversion(&()).await.unwrap_err();
    assert!(matches!(err, CmcError::Api(_)));
    assert_eq!(err.status_code(), 0);
    assert!(err.response().is_none());
    assert!(err.source().is_some());
}

#[tokio::test]
async fn test_api_key_with_invalid_header_characters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(quote_body()))
        .expect(0)
        .mount(&server)
        .await;

    let client = Client::builder()
        .api_key("bad\nkey")
        .base_url(server.uri())
        .build()
        .unwrap();

    let err = client.cryptocurrency().map(&()).await.unwrap_err();
    assert_eq!(err.status_code(), 0);
}
