//! Route handlers

pub mod api;
pub mod pages;

pub use api::{health_check, selection_handler, status_handler};
pub use pages::serve_index;
