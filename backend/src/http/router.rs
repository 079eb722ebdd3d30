//! Router configuration for the HTTP API.
//!
//! Sets up all routes and middleware (CORS, compression, request tracing)
//! and produces the axum router ready for serving.

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // Permissive CORS for the demo frontend; restrict in real deployments.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        .route("/reroutes/simulate", get(handlers::simulate_reroutes))
        .route("/delays/cascade", get(handlers::cascade_delays))
        .route("/network", get(handlers::network_data));

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::models::FlightDataset;

    #[test]
    fn test_router_creation() {
        let dataset = Arc::new(FlightDataset::new(vec![], vec![], vec![]));
        let _router = create_router(AppState::new(dataset));
        // If we got here, router was created successfully
    }
}
