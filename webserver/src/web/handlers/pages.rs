//! Page handlers

use axum::{extract::State, response::Html};
use std::sync::Arc;

use crate::core::render_index;
use crate::state::WebServerState;

/// Serve the single-page catalog browser
pub async fn serve_index(State(state): State<Arc<WebServerState>>) -> Html<String> {
    Html(render_index(state.page()))
}
