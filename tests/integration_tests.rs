//! Integration tests using mock HTTP server
//!
//! Tests the full flow: HTTP catalog → controller → pagination and selection

use artwork_table::cli::{Cli, Runner};
use artwork_table::http::{CatalogClient, CatalogClientConfig};
use artwork_table::{BulkScope, TableConfig, TableController};
use clap::Parser;
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOTAL: u64 = 100;
const LIMIT: u64 = 12;

fn artwork(id: u64) -> Value {
    let inscriptions = if id % 2 == 0 {
        Value::Null
    } else {
        json!("Signed lower right")
    };
    json!({
        "id": id,
        "title": format!("Nighthawks {id}"),
        "place_of_origin": "United States",
        "artist_display": "Edward Hopper\nAmerican, 1882-1967",
        "inscriptions": inscriptions,
        "date_start": 1942,
        "date_end": 1942
    })
}

fn page_body(page: u32) -> Value {
    let first = (u64::from(page) - 1) * LIMIT + 1;
    let last = (first + LIMIT - 1).min(TOTAL);
    let data: Vec<Value> = (first..=last).map(artwork).collect();
    json!({
        "pagination": {
            "total": TOTAL,
            "limit": LIMIT,
            "offset": first - 1,
            "total_pages": TOTAL.div_ceil(LIMIT),
            "current_page": page
        },
        "data": data,
        "config": {"iiif_url": "https://www.artic.edu/iiif/2"}
    })
}

async fn mount_catalog(server: &MockServer) {
    for page in 1..=9u32 {
        Mock::given(method("GET"))
            .and(path("/api/v1/artworks"))
            .and(query_param("page", page.to_string()))
            .and(query_param("limit", "12"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_body(page)))
            .mount(server)
            .await;
    }
}

fn client(server: &MockServer) -> CatalogClient {
    CatalogClient::with_config(CatalogClientConfig::for_url(format!(
        "{}/api/v1/artworks",
        server.uri()
    )))
    .unwrap()
}

// ============================================================================
// Paging
// ============================================================================

#[tokio::test]
async fn test_walk_every_page() {
    let server = MockServer::start().await;
    mount_catalog(&server).await;

    let mut table = TableController::new(client(&server));
    table.load().await.unwrap();
    assert_eq!(table.state().pager.page_count(), Some(9));

    for _ in 0..8 {
        table.next_page().await.unwrap();
    }
    assert_eq!(table.state().pager.current_page(), 9);
    assert_eq!(table.state().rows.len(), 4);
    assert_eq!(table.state().rows[3].id, 100);

    table.next_page().await.unwrap();
    assert_eq!(table.state().pager.current_page(), 9);
    assert_eq!(server.received_requests().await.unwrap().len(), 9);
}

#[tokio::test]
async fn test_server_error_keeps_stale_rows() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(1)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let mut table = TableController::new(client(&server));
    table.load().await.unwrap();

    assert!(table.next_page().await.is_err());
    assert_eq!(table.state().pager.current_page(), 1);
    assert_eq!(table.state().rows[0].id, 1);
}

// ============================================================================
// Selection
// ============================================================================

#[tokio::test]
async fn test_bulk_select_pulls_following_pages() {
    let server = MockServer::start().await;
    mount_catalog(&server).await;

    let mut table = TableController::with_scope(client(&server), BulkScope::AcrossPages);
    table.load().await.unwrap();

    let added = table.select_first("30").await.unwrap();
    assert_eq!(added, 30);
    assert_eq!(
        table.state().selection.ids(),
        (1..=30).collect::<Vec<u64>>()
    );

    let pages: Vec<String> = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter_map(|r| {
            r.url
                .query_pairs()
                .find(|(k, _)| k == "page")
                .map(|(_, v)| v.into_owned())
        })
        .collect();
    assert_eq!(pages, vec!["1", "2", "3"]);
}

#[tokio::test]
async fn test_bulk_select_current_page_only() {
    let server = MockServer::start().await;
    mount_catalog(&server).await;

    let mut table = TableController::with_scope(client(&server), BulkScope::CurrentPage);
    table.load().await.unwrap();

    assert_eq!(table.select_first("30").await.unwrap(), 12);
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_manual_and_bulk_selection_stay_unique() {
    let server = MockServer::start().await;
    mount_catalog(&server).await;

    let mut table = TableController::new(client(&server));
    table.load().await.unwrap();
    table.toggle_row(2).await.unwrap();
    table.toggle_header().await.unwrap();
    table.select_first("12").await.unwrap();

    assert_eq!(table.state().selection.len(), 12);
    assert_eq!(table.state().selection.ids()[0], 2);
}

// ============================================================================
// CLI
// ============================================================================

#[tokio::test]
async fn test_cli_select_json() {
    let server = MockServer::start().await;
    mount_catalog(&server).await;

    let base_url = format!("{}/api/v1/artworks", server.uri());
    let cli = Cli::try_parse_from([
        "artwork-table",
        "--base-url",
        base_url.as_str(),
        "--format",
        "json",
        "select",
        "14",
        "--page",
        "2",
    ])
    .unwrap();
    let runner = Runner::new(cli);
    let config = runner.table_config().unwrap();

    let mut out = Vec::new();
    runner
        .run_with(
            CatalogClient::from_table_config(&config).unwrap(),
            &config,
            &b""[..],
            &mut out,
        )
        .await
        .unwrap();

    let value: Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["count"], 14);
    assert_eq!(value["rows"][0]["id"], 13);
    assert_eq!(value["rows"][13]["id"], 26);
}

#[test]
fn test_config_file_loaded_through_cli() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("table.yaml");
    std::fs::write(
        &path,
        "base_url: http://localhost:1/artworks\nbulk_scope: current_page\n",
    )
    .unwrap();

    let cli =
        Cli::try_parse_from(["artwork-table", "-C", path.to_str().unwrap(), "browse"]).unwrap();
    let config = Runner::new(cli).table_config().unwrap();

    pretty_assertions::assert_eq!(
        config,
        TableConfig {
            base_url: "http://localhost:1/artworks".to_string(),
            bulk_scope: BulkScope::CurrentPage,
            ..TableConfig::default()
        }
    );
}
