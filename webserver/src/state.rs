//! Webserver state management
//!
//! The catalog load state is published through a watch channel: written once
//! by the ingestion task. Request handlers read a snapshot; the startup
//! observer subscribes and waits for the load to settle.

use std::time::Instant;
use tokio::sync::watch;

use crate::types::{LoadState, PageConfig};

/// Core webserver state
#[derive(Debug)]
pub struct WebServerState {
    load_state: watch::Sender<LoadState>,
    page: PageConfig,
    server_start_time: Instant,
}

impl WebServerState {
    /// Create state in the loading phase
    pub fn new(page: PageConfig) -> Self {
        Self::with_load_state(page, LoadState::Loading)
    }

    pub fn with_load_state(page: PageConfig, load_state: LoadState) -> Self {
        let (load_state, _) = watch::channel(load_state);
        Self {
            load_state,
            page,
            server_start_time: Instant::now(),
        }
    }

    /// Replace the load state and notify subscribers
    pub fn publish(&self, next: LoadState) {
        self.load_state.send_replace(next);
    }

    /// Snapshot of the current load state
    pub fn load_state(&self) -> LoadState {
        self.load_state.borrow().clone()
    }

    /// Wait until the load state leaves `Loading` and return the outcome
    pub async fn settled(&self) -> LoadState {
        let mut receiver = self.load_state.subscribe();
        loop {
            let current = receiver.borrow_and_update().clone();
            if current != LoadState::Loading {
                return current;
            }
            if receiver.changed().await.is_err() {
                return self.load_state();
            }
        }
    }

    pub fn page(&self) -> &PageConfig {
        &self.page
    }

    /// Get server uptime in seconds
    pub fn get_uptime_seconds(&self) -> u64 {
        self.server_start_time.elapsed().as_secs()
    }
}
