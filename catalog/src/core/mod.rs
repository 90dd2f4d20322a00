//! Core business logic modules
//!
//! Pure parsing and selection logic with no I/O dependencies

pub mod row_scanner;
pub mod selection;
pub mod validation;

// Re-export commonly used types
pub use row_scanner::{parse_row, split_lines};
pub use selection::{Catalog, SelectionView};
pub use validation::{
    CatalogColumn, EXPECTED_COLUMNS, IngestionReport, RejectedRow, RowPolicy, RowRejection, build_entry,
    parse_catalog,
};
