//! Catalog configuration

use crate::core::RowPolicy;
use crate::error::{CatalogError, CatalogResult};

/// Feed published at deploy time
pub const DEFAULT_FEED_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vRn210PIVwwr5P4c0ROctLdow560UZhO7EZfdP9NJqyhuQskVy7LAnC8pVqkBdFlBvIJ03JaEzdbJ31/pub?gid=0&single=true&output=csv";

/// Marker left in the feed URL of an unconfigured deployment
pub const PLACEHOLDER_MARKER: &str = "YOUR_CSV_URL_HERE";

/// Ingestion configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub feed_url: String,
    pub row_policy: RowPolicy,
}

impl CatalogConfig {
    pub fn new(feed_url: impl Into<String>) -> Self {
        Self {
            feed_url: feed_url.into(),
            row_policy: RowPolicy::default(),
        }
    }

    pub fn with_row_policy(mut self, row_policy: RowPolicy) -> Self {
        self.row_policy = row_policy;
        self
    }

    pub fn is_placeholder(&self) -> bool {
        self.feed_url.contains(PLACEHOLDER_MARKER)
    }

    /// Check the feed URL before any request is made
    pub fn validate(&self) -> CatalogResult<()> {
        if self.is_placeholder() {
            return Err(CatalogError::FeedNotConfigured);
        }
        shared::validate_http_url(&self.feed_url)?;
        Ok(())
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::new(DEFAULT_FEED_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid_and_lenient() {
        let config = CatalogConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.row_policy, RowPolicy::Lenient);
    }

    #[test]
    fn test_placeholder_url_is_rejected() {
        let config = CatalogConfig::new("https://example.com/YOUR_CSV_URL_HERE");
        assert_eq!(config.validate(), Err(CatalogError::FeedNotConfigured));
    }

    #[test]
    fn test_non_http_url_is_rejected() {
        let config = CatalogConfig::new("file:///tmp/catalog.csv");
        assert!(matches!(config.validate(), Err(CatalogError::Config(_))));
    }
}
