//! Tests for the HTTP catalog client

use super::*;
use crate::config::TableConfig;
use crate::error::Error;
use crate::source::PageSource;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn page_body(ids: &[u64], total: u64, current_page: u32) -> serde_json::Value {
    let data: Vec<_> = ids
        .iter()
        .map(|id| {
            json!({
                "id": id,
                "title": format!("Artwork {id}"),
                "place_of_origin": "France",
                "artist_display": "Claude Monet",
                "inscriptions": null,
                "date_start": 1890,
                "date_end": 1891
            })
        })
        .collect();
    json!({
        "pagination": {
            "total": total,
            "limit": 12,
            "offset": (u64::from(current_page) - 1) * 12,
            "total_pages": total.div_ceil(12),
            "current_page": current_page
        },
        "data": data
    })
}

fn client_for(server: &MockServer) -> CatalogClient {
    let config = CatalogClientConfig::builder()
        .base_url(format!("{}/api/v1/artworks", server.uri()))
        .all_fields()
        .build();
    CatalogClient::with_config(config).unwrap()
}

#[test]
fn test_config_default_matches_table_config() {
    let config = CatalogClientConfig::default();
    assert_eq!(config.base_url, "https://api.artic.edu/api/v1/artworks");
    assert_eq!(config.page_size, 12);
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert_eq!(config.fields.as_ref().map(Vec::len), Some(7));
}

#[test]
fn test_config_builder() {
    let config = CatalogClientConfig::builder()
        .base_url("https://example.com/artworks")
        .page_size(24)
        .timeout(Duration::from_secs(5))
        .header("X-Custom", "value")
        .user_agent("test-agent/1.0")
        .all_fields()
        .build();

    assert_eq!(config.base_url, "https://example.com/artworks");
    assert_eq!(config.page_size, 24);
    assert_eq!(config.timeout, Duration::from_secs(5));
    assert_eq!(
        config.default_headers.get("X-Custom"),
        Some(&"value".to_string())
    );
    assert_eq!(config.user_agent, "test-agent/1.0");
    assert!(config.fields.is_none());
}

#[test]
fn test_rejects_zero_page_size() {
    let config = CatalogClientConfig::builder().page_size(0).build();
    assert!(CatalogClient::with_config(config).is_err());
}

#[test]
fn test_rejects_invalid_base_url() {
    let config = CatalogClientConfig::for_url("::not a url::");
    assert!(matches!(
        CatalogClient::with_config(config),
        Err(Error::InvalidUrl(_))
    ));
}

#[test]
fn test_page_url() {
    let client = CatalogClient::from_table_config(&TableConfig::default()).unwrap();
    let url = client.page_url(3);
    assert_eq!(url.path(), "/api/v1/artworks");

    let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    assert_eq!(pairs[0], ("page".to_string(), "3".to_string()));
    assert_eq!(pairs[1], ("limit".to_string(), "12".to_string()));
    assert_eq!(pairs[2].0, "fields");
    assert!(pairs[2].1.starts_with("id,title,"));
}

#[tokio::test]
async fn test_fetch_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/artworks"))
        .and(query_param("page", "2"))
        .and(query_param("limit", "12"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(&[13, 14, 15], 100, 2)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let page = client.fetch_page(2).await.unwrap();

    assert_eq!(page.len(), 3);
    assert_eq!(page.data[0].id, 13);
    assert_eq!(page.data[0].date_end, Some(1891));
    assert_eq!(page.pagination.current_page, 2);
    assert_eq!(page.pagination.page_count(), 9);
}

#[tokio::test]
async fn test_default_headers_are_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(header("AIC-User-Agent", "artwork-table (ops@example.com)"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(&[1], 1, 1)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = CatalogClientConfig::builder()
        .base_url(format!("{}/api/v1/artworks", mock_server.uri()))
        .header("AIC-User-Agent", "artwork-table (ops@example.com)")
        .build();
    let client = CatalogClient::with_config(config).unwrap();

    assert!(client.fetch_page(1).await.is_ok());
}

#[tokio::test]
async fn test_status_error_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.fetch_page(1).await.unwrap_err();

    match err {
        Error::HttpStatus { status, body } => {
            assert_eq!(status, 503);
            assert_eq!(body, "maintenance");
        }
        other => panic!("Expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": "nope"})))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.fetch_page(1).await.unwrap_err();
    assert!(matches!(err, Error::JsonParse(_)));
    assert!(err.is_fetch_error());
}

#[tokio::test]
async fn test_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page_body(&[1], 1, 1))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&mock_server)
        .await;

    let config = CatalogClientConfig::builder()
        .base_url(format!("{}/api/v1/artworks", mock_server.uri()))
        .timeout(Duration::from_millis(50))
        .build();
    let client = CatalogClient::with_config(config).unwrap();

    let err = client.fetch_page(1).await.unwrap_err();
    assert!(matches!(err, Error::Timeout { timeout_ms: 50 }));
}

#[tokio::test]
async fn test_timeout_while_reading_body() {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    // Headers arrive at once, the body never completes
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 2048];
        socket.read(&mut buf).await.unwrap();
        socket
            .write_all(
                b"HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: 4096\r\n\r\n{\"data\":[",
            )
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_secs(5)).await;
    });

    let config = CatalogClientConfig::builder()
        .base_url(format!("http://{addr}/api/v1/artworks"))
        .timeout(Duration::from_millis(200))
        .build();
    let client = CatalogClient::with_config(config).unwrap();

    let err = client.fetch_page(1).await.unwrap_err();
    assert!(matches!(err, Error::Timeout { timeout_ms: 200 }));
}
