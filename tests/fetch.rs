mod common;

use common::{MockResponse, MockServer};
use ght::constants::MAX_BODY_BYTES;
use ght::http::{build_http_client, fetch_title};
use ght::{ExtractionError, FetchError, GhtError};

async fn fetch(server: &MockServer) -> Result<String, GhtError> {
    let client = build_http_client().unwrap();
    fetch_title(&client, &server.url()).await.map(|page| page.title)
}

#[tokio::test]
async fn test_fetch_title_normalizes_case_and_whitespace() {
    let server = MockServer::start(MockResponse::html(
        "<html><head><TITLE>  Hello   World  </TITLE></head></html>",
    ))
    .await;

    assert_eq!(fetch(&server).await.unwrap(), "Hello World");
}

#[tokio::test]
async fn test_fetch_title_decodes_entities() {
    let server =
        MockServer::start(MockResponse::html("<title>Fish &amp; Chips</title>")).await;

    assert_eq!(fetch(&server).await.unwrap(), "Fish & Chips");
}

#[tokio::test]
async fn test_fetch_title_missing_title() {
    let server = MockServer::start(MockResponse::html("<html><body>hi</body></html>")).await;

    let err = fetch(&server).await.unwrap_err();
    assert!(matches!(
        err,
        GhtError::Extraction(ExtractionError::TitleNotFound)
    ));
}

#[tokio::test]
async fn test_fetch_title_empty_title() {
    let server = MockServer::start(MockResponse::html("<title>   </title>")).await;

    let err = fetch(&server).await.unwrap_err();
    assert!(matches!(err, GhtError::Extraction(ExtractionError::EmptyTitle)));
}

#[tokio::test]
async fn test_fetch_title_http_error() {
    let server = MockServer::start(MockResponse::status(
        "404 Not Found",
        "<title>Not Found</title>",
    ))
    .await;

    let err = fetch(&server).await.unwrap_err();
    assert!(matches!(err, GhtError::Fetch(FetchError::Status(_))));
    assert_eq!(err.to_string(), "HTTP error: 404 Not Found");
}

#[tokio::test]
async fn test_fetch_title_connection_refused() {
    let client = build_http_client().unwrap();
    let err = fetch_title(&client, "http://127.0.0.1:1/").await.unwrap_err();
    assert!(matches!(err, GhtError::Fetch(FetchError::Request(_))));
}

#[tokio::test]
async fn test_fetch_title_large_body_with_early_title() {
    let mut body = String::from("<html><head><title>Big Page</title></head><body>");
    body.push_str(&"x".repeat(MAX_BODY_BYTES + 1024 * 1024));
    let server = MockServer::start(MockResponse::html(&body)).await;

    assert_eq!(fetch(&server).await.unwrap(), "Big Page");
}

#[tokio::test]
async fn test_fetch_title_ignores_bytes_past_cap() {
    let mut body = "x".repeat(MAX_BODY_BYTES);
    body.push_str("<title>Too Late</title>");
    let server = MockServer::start(MockResponse::html(&body)).await;

    let err = fetch(&server).await.unwrap_err();
    assert!(matches!(
        err,
        GhtError::Extraction(ExtractionError::TitleNotFound)
    ));
}

#[tokio::test]
async fn test_fetch_title_reports_requested_url() {
    let server = MockServer::start(MockResponse::html("<title>Plain</title>")).await;
    let client = build_http_client().unwrap();

    let page = fetch_title(&client, &server.url()).await.unwrap();
    assert_eq!(page.url, server.url());
    assert_eq!(page.title, "Plain");
}

#[tokio::test]
async fn test_fetch_title_adds_default_scheme() {
    // The mock server only speaks plain HTTP, so the implied https:// fails.
    let server = MockServer::start(MockResponse::html("<title>Plain</title>")).await;
    let client = build_http_client().unwrap();

    let err = fetch_title(&client, &server.bare_url()).await.unwrap_err();
    assert!(matches!(err, GhtError::Fetch(FetchError::Request(_))));
}
