//! Catalog ingestion
//!
//! One-shot fetch and parse producing the immutable record set. Every
//! failure is logged here with its raw cause and returned as a single
//! user-facing `CatalogError`.

use shared::{ComponentId, component_info, logging};

use crate::config::CatalogConfig;
use crate::core::{Catalog, IngestionReport, RowPolicy, parse_catalog};
use crate::error::{CatalogError, CatalogResult};
use crate::services::HttpFeedFetcher;
use crate::traits::FeedFetcher;

/// Loads the catalog through an injected feed fetcher
pub struct CatalogLoader<F: FeedFetcher> {
    fetcher: F,
    row_policy: RowPolicy,
    feed_configured: bool,
}

impl CatalogLoader<HttpFeedFetcher> {
    /// Build a loader that fetches the configured feed over HTTP
    pub fn from_config(config: &CatalogConfig) -> Self {
        Self {
            fetcher: HttpFeedFetcher::new(config.feed_url.clone()),
            row_policy: config.row_policy,
            feed_configured: !config.is_placeholder(),
        }
    }
}

impl<F: FeedFetcher> CatalogLoader<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            row_policy: RowPolicy::default(),
            feed_configured: true,
        }
    }

    pub fn with_row_policy(mut self, row_policy: RowPolicy) -> Self {
        self.row_policy = row_policy;
        self
    }

    /// Fetch and parse the feed into the session's record set
    pub async fn fetch_catalog(&self) -> CatalogResult<Catalog> {
        self.fetch_catalog_with_report().await.map(|(catalog, _)| catalog)
    }

    /// Same as `fetch_catalog`, also returning the per-row parse summary
    pub async fn fetch_catalog_with_report(&self) -> CatalogResult<(Catalog, IngestionReport)> {
        let result = self.load().await;
        if let Err(error) = &result {
            logging::log_error(ComponentId::Ingestion, "Catalog load", error);
        }
        result
    }

    async fn load(&self) -> CatalogResult<(Catalog, IngestionReport)> {
        if !self.feed_configured {
            return Err(CatalogError::FeedNotConfigured);
        }

        component_info!(ComponentId::Ingestion, "📡 Fetching catalog feed from {}", self.fetcher.source());
        let text = self.fetcher.fetch_text().await?;

        let (entries, report) = parse_catalog(&text, self.row_policy)?;

        component_info!(
            ComponentId::Ingestion,
            accepted = report.accepted,
            rejected = report.rejected.len(),
            "✅ Catalog loaded with {} entries",
            report.accepted
        );

        Ok((Catalog::new(entries), report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchFailure;
    use crate::traits::MockFeedFetcher;

    fn mock_with_body(body: &'static str) -> MockFeedFetcher {
        let mut fetcher = MockFeedFetcher::new();
        fetcher
            .expect_fetch_text()
            .times(1)
            .returning(move || Ok(body.to_string()));
        fetcher.expect_source().return_const("mock://feed".to_string());
        fetcher
    }

    #[tokio::test]
    async fn test_fetch_catalog_returns_valid_entries() {
        let loader = CatalogLoader::new(mock_with_body(
            "level,subject,title,cover,pdf\nA,Math,T1,,http://x/t1.pdf\nA,Math\n",
        ));

        let catalog = loader.fetch_catalog().await.unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.entries()[0].title, "T1");
    }

    #[tokio::test]
    async fn test_fetch_catalog_empty_result_is_not_an_error() {
        let loader = CatalogLoader::new(mock_with_body("header\nbad,row\n"));

        let (catalog, report) = loader.fetch_catalog_with_report().await.unwrap();

        assert!(catalog.is_empty());
        assert!(report.is_empty_result());
    }

    #[tokio::test]
    async fn test_fetch_catalog_maps_status_failure() {
        let mut fetcher = MockFeedFetcher::new();
        fetcher.expect_fetch_text().times(1).returning(|| {
            Err(FetchFailure::Status {
                status: 503,
                description: "503 Service Unavailable".to_string(),
            })
        });
        fetcher.expect_source().return_const("mock://feed".to_string());

        let error = CatalogLoader::new(fetcher).fetch_catalog().await.unwrap_err();

        assert_eq!(
            error,
            CatalogError::Network {
                reason: "503 Service Unavailable".to_string()
            }
        );
        assert_eq!(error.to_string(), "Failed to load the catalog: 503 Service Unavailable");
    }

    #[tokio::test]
    async fn test_strict_policy_fails_on_bad_row() {
        let loader = CatalogLoader::new(mock_with_body("header\nA,Math,T1,,\nA,Math\n"))
            .with_row_policy(RowPolicy::Strict);

        let error = loader.fetch_catalog().await.unwrap_err();

        assert!(matches!(error, CatalogError::Format { .. }));
    }

    #[tokio::test]
    async fn test_placeholder_feed_makes_no_request() {
        let config = CatalogConfig::new("https://docs.google.com/YOUR_CSV_URL_HERE");
        let loader = CatalogLoader::from_config(&config);

        let error = loader.fetch_catalog().await.unwrap_err();

        assert_eq!(error, CatalogError::FeedNotConfigured);
    }
}
