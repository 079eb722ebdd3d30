//! Application state for the HTTP server.

use std::sync::Arc;

use crate::models::FlightDataset;

/// Shared application state passed to all handlers.
///
/// The dataset is loaded once at startup and shared read-only; handlers
/// build their own graphs and indexes from it per request.
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<FlightDataset>,
}

impl AppState {
    /// Create application state around an already-loaded dataset.
    pub fn new(dataset: Arc<FlightDataset>) -> Self {
        Self { dataset }
    }
}
