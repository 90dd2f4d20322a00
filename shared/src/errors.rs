//! Shared error types for the catalog browser

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SharedError {
    #[error("Invalid URL: {input}")]
    InvalidUrl { input: String },
}

pub type SharedResult<T> = Result<T, SharedError>;

/// Parse and check that a URL uses an HTTP(S) scheme
pub fn validate_http_url(input: &str) -> SharedResult<url::Url> {
    let parsed = url::Url::parse(input).map_err(|_| SharedError::InvalidUrl {
        input: input.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        _ => Err(SharedError::InvalidUrl {
            input: input.to_string(),
        }),
    }
}
