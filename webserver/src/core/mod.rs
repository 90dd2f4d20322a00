//! Core presentation logic
//!
//! Pure logic with no I/O dependencies

pub mod cover;
pub mod page;

pub use cover::CoverPresentation;
pub use page::render_index;
