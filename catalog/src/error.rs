//! Catalog error types

use shared::SharedError;
use thiserror::Error;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// User-facing ingestion errors.
///
/// The `Display` text is what the presentation layer shows verbatim, so the
/// variants carry short descriptions and never raw transport internals.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Failed to load the catalog: {reason}")]
    Network { reason: String },

    #[error("Failed to load the catalog: malformed feed ({reason})")]
    Format { reason: String },

    #[error("The catalog feed URL has not been configured; replace the placeholder with the published CSV link")]
    FeedNotConfigured,

    #[error("Invalid catalog configuration: {0}")]
    Config(#[from] SharedError),
}

/// Low-level failure reported by a feed fetcher
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    #[error("{description}")]
    Status { status: u16, description: String },

    #[error("network unreachable ({0})")]
    Transport(String),

    #[error("unreadable response body ({0})")]
    Body(String),
}

impl FetchFailure {
    /// Short description safe to show to the user
    pub fn user_reason(&self) -> String {
        match self {
            FetchFailure::Status { description, .. } => description.clone(),
            FetchFailure::Transport(_) => "the feed could not be reached".to_string(),
            FetchFailure::Body(_) => "the feed response could not be read".to_string(),
        }
    }
}

impl From<FetchFailure> for CatalogError {
    fn from(failure: FetchFailure) -> Self {
        CatalogError::Network {
            reason: failure.user_reason(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_failure_keeps_description() {
        let error: CatalogError = FetchFailure::Status {
            status: 404,
            description: "Not Found".to_string(),
        }
        .into();
        assert_eq!(error.to_string(), "Failed to load the catalog: Not Found");
    }

    #[test]
    fn test_transport_failure_hides_internals() {
        let error: CatalogError =
            FetchFailure::Transport("error trying to connect: tcp connect error: Connection refused".to_string()).into();
        let message = error.to_string();
        assert!(message.starts_with("Failed to load the catalog"));
        assert!(!message.contains("tcp connect"));
    }
}
