//! Shared types for the catalog browser
//!
//! Contains the record and selection types exchanged between the ingestion
//! core and the presentation layer, plus common error and logging utilities.

pub mod errors;
pub mod logging;
pub mod types;

pub use errors::*;
pub use types::*;
