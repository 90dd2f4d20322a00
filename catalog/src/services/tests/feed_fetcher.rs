//! Tests for HttpFeedFetcher service

use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::error::FetchFailure;
use crate::services::feed_fetcher::HttpFeedFetcher;
use crate::traits::FeedFetcher;

const FEED: &str = "level,subject,title,cover,pdf\nA,Math,T1,,http://x/t1.pdf\n";

#[tokio::test]
async fn test_fetch_returns_body_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/feed.csv"))
        .respond_with(ResponseTemplate::new(200).set_body_string(FEED))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = HttpFeedFetcher::new(format!("{}/feed.csv", server.uri()));
    let body = fetcher.fetch_text().await.unwrap();

    assert_eq!(body, FEED);
}

#[tokio::test]
async fn test_fetch_bypasses_caches() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/feed.csv"))
        .and(header("cache-control", "no-cache"))
        .and(header("pragma", "no-cache"))
        .respond_with(ResponseTemplate::new(200).set_body_string(FEED))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = HttpFeedFetcher::new(format!("{}/feed.csv", server.uri()));
    assert!(fetcher.fetch_text().await.is_ok());
}

#[tokio::test]
async fn test_fetch_maps_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let fetcher = HttpFeedFetcher::new(format!("{}/missing.csv", server.uri()));
    let failure = fetcher.fetch_text().await.unwrap_err();

    assert_eq!(
        failure,
        FetchFailure::Status {
            status: 404,
            description: "404 Not Found".to_string(),
        }
    );
}

#[tokio::test]
async fn test_fetch_refused_connection_is_transport_failure() {
    // Reserve a free port, then release it so nothing is listening there
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let fetcher = HttpFeedFetcher::new(format!("http://127.0.0.1:{port}/feed.csv"));

    let failure = fetcher.fetch_text().await.unwrap_err();

    assert!(matches!(failure, FetchFailure::Transport(_)));
}

#[tokio::test]
async fn test_refused_connection_becomes_short_network_error() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let fetcher = HttpFeedFetcher::new(format!("http://127.0.0.1:{port}/feed.csv"));

    let error = crate::loader::CatalogLoader::new(fetcher).fetch_catalog().await.unwrap_err();

    assert_eq!(
        error,
        crate::error::CatalogError::Network {
            reason: "the feed could not be reached".to_string()
        }
    );
}

#[test]
fn test_source_reports_feed_url() {
    let fetcher = HttpFeedFetcher::new("https://example.com/feed.csv");
    assert_eq!(fetcher.source(), "https://example.com/feed.csv");
}
