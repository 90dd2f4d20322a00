//! Webserver library for the catalog browser
//!
//! Serves a single-page UI with three cascading dropdowns backed by a small
//! JSON API over the ingested catalog.

pub mod core;
pub mod error;
pub mod state;
pub mod types;
pub mod web;
pub mod webserver_impl;

// Re-export main types
pub use error::{WebServerError, WebServerResult};
pub use state::WebServerState;
pub use types::*;
pub use webserver_impl::WebServer;
