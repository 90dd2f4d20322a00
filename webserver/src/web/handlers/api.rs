//! REST API handlers
//!
//! The browser owns its selection state and sends it with every change; the
//! server applies the transition and returns the derived view.

use axum::{
    Json,
    extract::State,
    http::header,
    response::IntoResponse,
};
use catalog::SelectionView;
use serde_json::json;
use shared::{ComponentId, component_debug};
use std::sync::Arc;

use crate::core::CoverPresentation;
use crate::error::{WebServerError, WebServerResult};
use crate::state::WebServerState;
use crate::types::{LoadState, SelectionRequest, SelectionResponse, StatusResponse};

const NO_STORE: [(header::HeaderName, &str); 1] = [(header::CACHE_CONTROL, "no-store")];

/// Ingestion progress - /api/status
pub async fn status_handler(State(state): State<Arc<WebServerState>>) -> impl IntoResponse {
    let status = StatusResponse::from(&state.load_state());
    (NO_STORE, Json(status))
}

/// Apply a selection change - /api/selection
pub async fn selection_handler(
    State(state): State<Arc<WebServerState>>,
    Json(request): Json<SelectionRequest>,
) -> WebServerResult<impl IntoResponse> {
    let catalog = match state.load_state() {
        LoadState::Ready(catalog) => catalog,
        LoadState::Loading => return Err(WebServerError::CatalogLoading),
        LoadState::Failed(message) => return Err(WebServerError::CatalogUnavailable { message }),
    };

    let current = request.state.sanitized();
    let next = match request.event {
        Some(event) => current.apply(event),
        None => current,
    };

    let view = SelectionView::compute(&catalog, &next);
    let cover = view.selected.as_ref().map(CoverPresentation::for_entry);

    component_debug!(
        ComponentId::Selection,
        level = ?view.state.level,
        subject = ?view.state.subject,
        title = ?view.state.title,
        resolved = view.selected.is_some(),
        "🔎 Selection updated"
    );

    Ok((
        NO_STORE,
        Json(SelectionResponse {
            view,
            cover,
            no_data: catalog.is_empty(),
        }),
    ))
}

/// Health check endpoint
pub async fn health_check(State(state): State<Arc<WebServerState>>) -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "catalog": state.load_state().label(),
        "uptime": state.get_uptime_seconds(),
    }))
}
