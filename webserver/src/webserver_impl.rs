//! Main webserver implementation
//!
//! Wires the catalog ingestion into the shared state and serves the page and
//! the JSON API with axum.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use catalog::{CatalogLoader, FeedFetcher};
use shared::{ComponentId, component_error, component_info, logging};
use tokio::task::JoinHandle;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::error::{WebServerError, WebServerResult};
use crate::state::WebServerState;
use crate::types::{LoadState, PageConfig};
use crate::web::handlers::{health_check, selection_handler, serve_index, status_handler};

/// Main webserver struct
#[derive(Clone)]
pub struct WebServer {
    state: Arc<WebServerState>,
}

impl WebServer {
    pub fn new(page: PageConfig) -> Self {
        Self::from_state(Arc::new(WebServerState::new(page)))
    }

    pub fn from_state(state: Arc<WebServerState>) -> Self {
        Self { state }
    }

    /// Build the Axum router with all routes
    pub fn build_router(&self) -> Router {
        Router::new()
            .route("/", get(serve_index))
            .route("/api/status", get(status_handler))
            .route("/api/selection", post(selection_handler))
            .route("/health", get(health_check))
            .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
            .with_state(self.state.clone())
    }

    /// Run the one-shot ingestion in the background and publish its outcome
    pub fn spawn_ingestion<F>(&self, loader: CatalogLoader<F>) -> JoinHandle<()>
    where
        F: FeedFetcher + 'static,
    {
        let state = self.state.clone();
        tokio::spawn(async move {
            let next = match loader.fetch_catalog().await {
                Ok(catalog) => LoadState::Ready(catalog),
                Err(error) => LoadState::Failed(error.to_string()),
            };
            state.publish(next);
        })
    }

    /// Log the ingestion outcome once it is known
    pub fn spawn_load_observer(&self) -> JoinHandle<LoadState> {
        let state = self.state.clone();
        tokio::spawn(async move {
            let outcome = state.settled().await;
            match &outcome {
                LoadState::Ready(catalog) => {
                    component_info!(ComponentId::WebServer, entries = catalog.len(), "📚 Catalog ready")
                }
                LoadState::Failed(message) => {
                    component_error!(ComponentId::WebServer, "❌ Catalog unavailable: {}", message)
                }
                LoadState::Loading => {}
            }
            outcome
        })
    }

    /// Bind and serve until Ctrl+C
    pub async fn run<F>(&self, bind_address: SocketAddr, loader: CatalogLoader<F>) -> WebServerResult<()>
    where
        F: FeedFetcher + 'static,
    {
        let listener = tokio::net::TcpListener::bind(bind_address)
            .await
            .map_err(|e| WebServerError::ServerStartup(format!("Failed to bind to {bind_address}: {e}")))?;

        component_info!(ComponentId::WebServer, "🌐 Web server listening on http://{}", bind_address);

        let observer = self.spawn_load_observer();
        let ingestion = self.spawn_ingestion(loader);

        axum::serve(listener, self.build_router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        ingestion.abort();
        observer.abort();
        Ok(())
    }

    /// Get server state for external access
    pub fn state(&self) -> &Arc<WebServerState> {
        &self.state
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => logging::log_shutdown(ComponentId::WebServer, "Received Ctrl+C signal"),
        Err(err) => logging::log_error(ComponentId::WebServer, "Signal handling", &err),
    }
}
