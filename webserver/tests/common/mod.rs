//! Shared helpers for webserver integration tests

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use catalog::Catalog;
use serde_json::Value;
use shared::CatalogEntry;
use std::sync::Arc;
use tower::ServiceExt;
use webserver::{LoadState, PageConfig, WebServer, WebServerState};

pub fn entry(level: &str, subject: &str, title: &str, cover: Option<&str>, document: Option<&str>) -> CatalogEntry {
    CatalogEntry {
        level: level.to_string(),
        subject: subject.to_string(),
        title: title.to_string(),
        cover_url: cover.map(str::to_string),
        document_url: document.map(str::to_string),
    }
}

pub fn sample_catalog() -> Catalog {
    Catalog::new(vec![
        entry("B", "Math", "B1", None, None),
        entry("A", "Math", "T2", None, Some("http://x/t2.pdf")),
        entry("A", "Math", "T1", Some("http://x/t1.png"), Some("http://x/t1.pdf")),
        entry("A", "Art", "Paint", Some("http://x/p.png"), None),
    ])
}

pub fn router_with(load_state: LoadState) -> Router {
    let state = Arc::new(WebServerState::with_load_state(PageConfig::default(), load_state));
    WebServer::from_state(state).build_router()
}

pub async fn get(router: Router, uri: &str) -> (StatusCode, String) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

pub async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value, Option<String>) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let cache_control = response
        .headers()
        .get("cache-control")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap(), cache_control)
}
