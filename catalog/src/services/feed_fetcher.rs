//! HTTP feed fetcher
//!
//! Issues one uncached GET per call. No timeout is applied; a hung request
//! keeps the caller waiting.

use async_trait::async_trait;
use reqwest::header;
use shared::{ComponentId, component_debug, component_error};

use crate::error::FetchFailure;
use crate::traits::FeedFetcher;

/// Real feed fetcher backed by reqwest
#[derive(Clone)]
pub struct HttpFeedFetcher {
    client: reqwest::Client,
    feed_url: String,
}

impl HttpFeedFetcher {
    pub fn new(feed_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            feed_url: feed_url.into(),
        }
    }
}

#[async_trait]
impl FeedFetcher for HttpFeedFetcher {
    async fn fetch_text(&self) -> Result<String, FetchFailure> {
        let request_start = std::time::Instant::now();

        let response = self
            .client
            .get(&self.feed_url)
            .header(header::CACHE_CONTROL, "no-cache")
            .header(header::PRAGMA, "no-cache")
            .send()
            .await
            .map_err(|e| {
                component_error!(ComponentId::Ingestion, error = %e, "❌ Feed request failed: {}", self.feed_url);
                FetchFailure::Transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            component_error!(ComponentId::Ingestion, status = status.as_u16(), "❌ Feed returned non-success status");
            return Err(FetchFailure::Status {
                status: status.as_u16(),
                description: status.to_string(),
            });
        }

        let body = response.text().await.map_err(|e| {
            component_error!(ComponentId::Ingestion, error = %e, "❌ Failed to read feed body");
            FetchFailure::Body(e.to_string())
        })?;

        component_debug!(
            ComponentId::Ingestion,
            bytes = body.len(),
            elapsed_ms = request_start.elapsed().as_millis() as u64,
            "📥 Feed downloaded"
        );

        Ok(body)
    }

    fn source(&self) -> String {
        self.feed_url.clone()
    }
}
