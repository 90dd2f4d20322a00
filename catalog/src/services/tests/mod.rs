//! Tests for catalog services
//!
//! The HTTP fetcher is exercised against a local wiremock server.

pub mod feed_fetcher;
