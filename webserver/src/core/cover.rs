//! Cover panel presentation
//!
//! The cover image is shown when present, otherwise a placeholder. The image
//! links to the document only when both URLs exist.

use serde::Serialize;
use shared::CatalogEntry;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CoverPresentation {
    Image { src: String, link: Option<String> },
    Placeholder,
}

impl CoverPresentation {
    pub fn for_entry(entry: &CatalogEntry) -> Self {
        match (&entry.cover_url, &entry.document_url) {
            (Some(cover), document) => CoverPresentation::Image {
                src: cover.clone(),
                link: document.clone(),
            },
            (None, _) => CoverPresentation::Placeholder,
        }
    }
}
