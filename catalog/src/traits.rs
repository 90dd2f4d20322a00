//! Service trait definitions for dependency injection

use async_trait::async_trait;

use crate::error::FetchFailure;

/// Source of the raw catalog feed
#[mockall::automock]
#[async_trait]
pub trait FeedFetcher: Send + Sync {
    /// Fetch the full feed body as text with one request, bypassing caches
    async fn fetch_text(&self) -> Result<String, FetchFailure>;

    /// Where the feed is fetched from, for diagnostics
    fn source(&self) -> String;
}
