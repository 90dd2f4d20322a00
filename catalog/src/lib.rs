//! Catalog ingestion and selection library
//!
//! Fetches the catalog feed, parses it into an immutable record set and
//! derives the cascading level → subject → title option lists from it.

pub mod config;
pub mod core;
pub mod error;
pub mod loader;
pub mod services;
pub mod traits;

// Re-export main types
pub use config::{CatalogConfig, DEFAULT_FEED_URL, PLACEHOLDER_MARKER};
pub use crate::core::{Catalog, IngestionReport, RowPolicy, SelectionView};
pub use error::{CatalogError, CatalogResult, FetchFailure};
pub use loader::CatalogLoader;
pub use services::HttpFeedFetcher;
pub use traits::FeedFetcher;
