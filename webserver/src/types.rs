//! Type definitions for webserver
//!
//! Load state, page settings and the JSON bodies exchanged with the browser.

use catalog::{Catalog, SelectionView};
use serde::{Deserialize, Serialize};
use shared::{SelectionEvent, SelectionState};

use crate::core::CoverPresentation;

/// Outcome of the one-shot ingestion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready(Catalog),
    Failed(String),
}

impl LoadState {
    pub fn label(&self) -> &'static str {
        match self {
            LoadState::Loading => "loading",
            LoadState::Ready(_) => "ready",
            LoadState::Failed(_) => "failed",
        }
    }
}

/// Static page settings fixed at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageConfig {
    pub title: String,
    pub community_url: Option<String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "Catalog".to_string(),
            community_url: None,
        }
    }
}

/// Body of `GET /api/status`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entries: Option<usize>,
}

impl From<&LoadState> for StatusResponse {
    fn from(load_state: &LoadState) -> Self {
        let (message, entries) = match load_state {
            LoadState::Loading => (None, None),
            LoadState::Ready(catalog) => {
                let message = catalog.is_empty().then(|| "No data found.".to_string());
                (message, Some(catalog.len()))
            }
            LoadState::Failed(message) => (Some(message.clone()), None),
        };

        Self {
            state: load_state.label().to_string(),
            message,
            entries,
        }
    }
}

/// Body of `POST /api/selection`: the current state and the change to apply
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectionRequest {
    #[serde(default)]
    pub state: SelectionState,
    #[serde(default)]
    pub event: Option<SelectionEvent>,
}

/// Derived view returned for a selection request
#[derive(Debug, Clone, Serialize)]
pub struct SelectionResponse {
    #[serde(flatten)]
    pub view: SelectionView,
    pub cover: Option<CoverPresentation>,
    pub no_data: bool,
}
