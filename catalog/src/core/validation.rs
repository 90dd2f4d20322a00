//! Row validation and feed parsing
//!
//! Maps scanned rows onto catalog entries by fixed column position and
//! decides which rows survive ingestion.

use serde::{Deserialize, Serialize};
use shared::{CatalogEntry, ComponentId, component_warn};
use std::fmt;

use crate::core::row_scanner::{parse_row, split_lines};
use crate::error::{CatalogError, CatalogResult};

/// Number of columns every data row must carry
pub const EXPECTED_COLUMNS: usize = CatalogColumn::ALL.len();

/// Feed columns in their fixed positional order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatalogColumn {
    Level,
    Subject,
    Title,
    Cover,
    Document,
}

impl CatalogColumn {
    pub const ALL: [CatalogColumn; 5] = [
        CatalogColumn::Level,
        CatalogColumn::Subject,
        CatalogColumn::Title,
        CatalogColumn::Cover,
        CatalogColumn::Document,
    ];

    pub fn is_required(self) -> bool {
        matches!(self, CatalogColumn::Level | CatalogColumn::Subject | CatalogColumn::Title)
    }
}

impl fmt::Display for CatalogColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogColumn::Level => write!(f, "level"),
            CatalogColumn::Subject => write!(f, "subject"),
            CatalogColumn::Title => write!(f, "title"),
            CatalogColumn::Cover => write!(f, "coverUrl"),
            CatalogColumn::Document => write!(f, "pdfUrl"),
        }
    }
}

/// What to do with a row that cannot become an entry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowPolicy {
    /// Drop the row with a warning and keep going
    #[default]
    Lenient,
    /// Reject the whole feed
    Strict,
}

/// Why a data row was dropped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowRejection {
    ColumnCount { expected: usize, found: usize },
    MissingField(CatalogColumn),
}

impl fmt::Display for RowRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowRejection::ColumnCount { expected, found } => {
                write!(f, "expected {expected} columns, found {found}")
            }
            RowRejection::MissingField(column) => write!(f, "missing required {column}"),
        }
    }
}

/// A dropped row and where it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedRow {
    /// 1-based line number in the feed, header included
    pub line_number: usize,
    pub line: String,
    pub reason: RowRejection,
}

/// Summary of one parse
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestionReport {
    /// Lines after the header, blank ones included
    pub data_rows: usize,
    pub accepted: usize,
    pub rejected: Vec<RejectedRow>,
}

impl IngestionReport {
    /// Input had data lines but nothing survived
    pub fn is_empty_result(&self) -> bool {
        self.accepted == 0 && self.data_rows > 0
    }
}

fn optional(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

/// Build an entry from positional field values
pub fn build_entry(fields: Vec<String>) -> Result<CatalogEntry, RowRejection> {
    if fields.len() != EXPECTED_COLUMNS {
        return Err(RowRejection::ColumnCount {
            expected: EXPECTED_COLUMNS,
            found: fields.len(),
        });
    }

    if let Some(column) = CatalogColumn::ALL
        .iter()
        .zip(&fields)
        .find(|(column, value)| column.is_required() && value.trim().is_empty())
        .map(|(column, _)| *column)
    {
        return Err(RowRejection::MissingField(column));
    }

    let mut values = fields.into_iter();
    let mut next = || values.next().unwrap_or_default();

    Ok(CatalogEntry {
        level: next(),
        subject: next(),
        title: next(),
        cover_url: optional(next()),
        document_url: optional(next()),
    })
}

/// Parse a whole feed body: header skipped, rows validated in order
pub fn parse_catalog(text: &str, policy: RowPolicy) -> CatalogResult<(Vec<CatalogEntry>, IngestionReport)> {
    let lines = split_lines(text);
    let mut report = IngestionReport {
        data_rows: lines.len().saturating_sub(1),
        ..IngestionReport::default()
    };
    let mut entries = Vec::with_capacity(report.data_rows);

    for (index, line) in lines.iter().enumerate().skip(1) {
        if line.is_empty() {
            continue;
        }

        match build_entry(parse_row(line)) {
            Ok(entry) => entries.push(entry),
            Err(reason) => {
                let line_number = index + 1;
                if policy == RowPolicy::Strict {
                    return Err(CatalogError::Format {
                        reason: format!("line {line_number}: {reason}"),
                    });
                }
                component_warn!(
                    ComponentId::Ingestion,
                    line_number,
                    reason = %reason,
                    "⚠️ Skipping catalog row: {}",
                    line
                );
                report.rejected.push(RejectedRow {
                    line_number,
                    line: line.to_string(),
                    reason,
                });
            }
        }
    }

    report.accepted = entries.len();

    if report.is_empty_result() {
        component_warn!(
            ComponentId::Ingestion,
            data_rows = report.data_rows,
            "⚠️ No catalog entries loaded although the feed had data rows; check the column layout"
        );
    }

    Ok((entries, report))
}
