//! Tests for the HTTP module

use super::*;
use crate::types::{Method, Params};
use pretty_assertions::assert_eq;
use std::time::Duration;
use url::Url;
use wiremock::matchers::{body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn query_pairs(url: &str) -> Vec<(String, String)> {
    Url::parse(url)
        .unwrap()
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

// ============================================================================
// Request URL Tests
// ============================================================================

#[test]
fn test_get_url_carries_params_and_token() {
    let request = Request::new(
        Method::GET,
        "/123",
        Params::from([("fields", "id,username")]),
        "v14.0",
        Some("tok"),
    );

    let url = request.to_url();
    assert!(url.starts_with("https://graph.facebook.com/v14.0/123?"));
    assert_eq!(
        query_pairs(&url),
        vec![
            ("fields".to_string(), "id,username".to_string()),
            ("access_token".to_string(), "tok".to_string()),
        ]
    );
    assert_eq!(request.to_body(), "");
}

#[test]
fn test_get_url_percent_encodes() {
    let request = Request::new(
        Method::GET,
        "/123",
        Params::from([("fields", "media{id,caption}")]),
        "v14.0",
        None,
    );

    assert_eq!(
        request.to_url(),
        "https://graph.facebook.com/v14.0/123?fields=media%7Bid%2Ccaption%7D"
    );
}

#[test]
fn test_round_trip_fields_param() {
    let request = Request::new(
        Method::GET,
        "/123",
        Params::from([("fields", "id,username")]),
        "v14.0",
        None,
    );

    let pairs = query_pairs(&request.to_url());
    assert_eq!(pairs, vec![("fields".to_string(), "id,username".to_string())]);
}

#[test]
fn test_delete_url_uses_query_string() {
    let request = Request::new(
        Method::DELETE,
        "/17890",
        Params::new(),
        "v14.0",
        Some("tok"),
    );
    assert_eq!(
        request.to_url(),
        "https://graph.facebook.com/v14.0/17890?access_token=tok"
    );
}

#[test]
fn test_post_url_has_no_query_and_body_has_params() {
    let request = Request::new(
        Method::POST,
        "/123/comments",
        Params::from([("message", "hello world")]),
        "v14.0",
        Some("tok"),
    );

    assert_eq!(request.to_url(), "https://graph.facebook.com/v14.0/123/comments");
    assert!(!request.to_url().contains('?'));
    assert_eq!(request.to_body(), "message=hello+world&access_token=tok");
}

#[test]
fn test_serialization_is_repeatable() {
    let request = Request::new(
        Method::POST,
        "/1",
        Params::from([("a", "1")]),
        "v14.0",
        Some("tok"),
    );

    let first = (request.to_url(), request.to_body());
    let second = (request.to_url(), request.to_body());
    assert_eq!(first, second);
    assert_eq!(request.params().unwrap().len(), 1);
    assert!(!request.params().unwrap().contains_key("access_token"));
}

#[test]
fn test_empty_token_is_not_merged() {
    let request = Request::new(Method::GET, "/1", Params::new(), "v14.0", Some(""));
    assert_eq!(request.to_url(), "https://graph.facebook.com/v14.0/1");
}

#[test]
fn test_custom_url_is_verbatim() {
    let url = "https://graph.facebook.com/v14.0/1/media?after=X&access_token=tok";
    let request = Request::custom(Method::GET, url);

    assert!(request.is_custom());
    assert_eq!(request.to_url(), url);
    assert_eq!(request.endpoint(), None);
    assert!(request.wire_params().is_empty());
    assert_eq!(request.to_body(), "");
}

#[test]
fn test_with_base_url() {
    let request = Request::new(Method::GET, "/1", Params::new(), "v15.0", None)
        .with_base_url("http://localhost:9000/");
    assert_eq!(request.to_url(), "http://localhost:9000/v15.0/1");
}

// ============================================================================
// Body Decoding Tests
// ============================================================================

#[test]
fn test_decode_body() {
    let map = decode_body(r#"{"id": "1"}"#);
    assert_eq!(map.get("id").and_then(|v| v.as_str()), Some("1"));

    assert!(decode_body("not json").is_empty());
    assert!(decode_body("[1, 2]").is_empty());
    assert!(decode_body("").is_empty());
}

// ============================================================================
// Transport Tests
// ============================================================================

#[test]
fn test_transport_config_builder() {
    let config = HttpTransportConfig::builder()
        .timeout(Duration::from_secs(5))
        .header("X-Custom", "value")
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.timeout, Duration::from_secs(5));
    assert_eq!(
        config.default_headers.get("X-Custom"),
        Some(&"value".to_string())
    );
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[tokio::test]
async fn test_transport_get() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v14.0/123"))
        .and(query_param("fields", "id,username"))
        .and(query_param("access_token", "tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "123",
            "username": "acme"
        })))
        .mount(&mock_server)
        .await;

    let transport = HttpTransport::new().unwrap();
    let request = Request::new(
        Method::GET,
        "/123",
        Params::from([("fields", "id,username")]),
        "v14.0",
        Some("tok"),
    )
    .with_base_url(mock_server.uri());

    let body = transport.send(&request).await.unwrap();
    assert_eq!(body["username"], "acme");
}

#[tokio::test]
async fn test_transport_post_form_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v14.0/123/media_publish"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string("creation_id=999&access_token=tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "555"})))
        .mount(&mock_server)
        .await;

    let transport = HttpTransport::new().unwrap();
    let request = Request::new(
        Method::POST,
        "/123/media_publish",
        Params::from([("creation_id", "999")]),
        "v14.0",
        Some("tok"),
    )
    .with_base_url(mock_server.uri());

    let body = transport.send(&request).await.unwrap();
    assert_eq!(body["id"], "555");
}

#[tokio::test]
async fn test_transport_surfaces_error_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v14.0/bad"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": {"message": "Invalid OAuth access token.", "code": 190}
        })))
        .mount(&mock_server)
        .await;

    let transport = HttpTransport::new().unwrap();
    let request = Request::new(Method::GET, "/bad", Params::new(), "v14.0", None)
        .with_base_url(mock_server.uri());

    let body = transport.send(&request).await.unwrap();
    assert_eq!(body["error"]["code"], 190);
}

#[tokio::test]
async fn test_transport_non_json_body_is_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v14.0/html"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .mount(&mock_server)
        .await;

    let transport = HttpTransport::new().unwrap();
    let request = Request::new(Method::GET, "/html", Params::new(), "v14.0", None)
        .with_base_url(mock_server.uri());

    assert!(transport.send(&request).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_transport_network_failure_is_error() {
    let transport = HttpTransport::with_config(
        HttpTransportConfig::builder()
            .timeout(Duration::from_secs(2))
            .build(),
    )
    .unwrap();
    let request = Request::custom(Method::GET, "http://127.0.0.1:1/v14.0/me");

    let err = transport.send(&request).await.unwrap_err();
    assert!(err.is_transport());
}

// ============================================================================
// Request Factory Tests
// ============================================================================

#[test]
fn test_request_factory_shares_context() {
    let factory = RequestFactory::new("http://localhost:9000", "v15.0", Some("tok".to_string()));
    let request = factory.build(Method::GET, "/me/accounts", Params::new());

    assert_eq!(
        request.to_url(),
        "http://localhost:9000/v15.0/me/accounts?access_token=tok"
    );
    assert_eq!(factory.graph_version(), "v15.0");
}

#[test]
fn test_request_factory_drops_empty_token() {
    let factory = RequestFactory::new(DEFAULT_GRAPH_URL, "v14.0", Some(String::new()));
    assert_eq!(factory.access_token(), None);
}
