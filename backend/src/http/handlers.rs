//! HTTP handlers for the REST API.
//!
//! Handlers validate query parameters before any computation starts, then
//! run the CPU-bound graph work on the blocking pool so the async runtime
//! stays responsive.

use axum::extract::{Query, State};
use axum::Json;

use super::dto::{
    CascadeQuery, CascadeResponse, HealthResponse, NetworkResponse, PathDto, SimulateQuery,
    SimulateResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::models::normalize_code;
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Default connection window for cascade queries, in minutes.
pub const DEFAULT_WINDOW_MINUTES: i64 = 120;

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        dataset: format!(
            "{} (loaded {})",
            state.dataset.summary(),
            state.dataset.loaded_at.to_rfc3339()
        ),
    }))
}

/// GET /v1/reroutes/simulate?origin=JFK&destination=LAX
///
/// Compares the direct-edge "original" route against the Dijkstra-optimal
/// reroute. An unreachable destination is a normal 200 response with an
/// empty path and null cost, not an error.
pub async fn simulate_reroutes(
    State(state): State<AppState>,
    Query(query): Query<SimulateQuery>,
) -> HandlerResult<SimulateResponse> {
    let origin = normalize_code(query.origin.as_deref().unwrap_or(""));
    let destination = normalize_code(query.destination.as_deref().unwrap_or(""));
    if origin.is_empty() || destination.is_empty() {
        return Err(AppError::bad_request(
            "origin_and_destination_required",
            "both origin and destination query parameters are required",
        ));
    }

    let dataset = state.dataset.clone();
    let response = tokio::task::spawn_blocking(move || {
        let graph = services::build_graph(&dataset.edges);
        let original = services::direct_path(&graph, &origin, &destination);
        let rerouted = services::shortest_path(&graph, &origin, &destination);
        SimulateResponse {
            origin,
            destination,
            original_path: PathDto::from(original),
            rerouted_path: PathDto::from(rerouted),
        }
    })
    .await?;

    Ok(Json(response))
}

/// GET /v1/delays/cascade?airport=JFK&window=120
pub async fn cascade_delays(
    State(state): State<AppState>,
    Query(query): Query<CascadeQuery>,
) -> HandlerResult<CascadeResponse> {
    let airport = normalize_code(query.airport.as_deref().unwrap_or(""));
    if airport.is_empty() {
        return Err(AppError::bad_request(
            "airport_required",
            "airport query parameter is required",
        ));
    }
    let window_minutes = query.window.unwrap_or(DEFAULT_WINDOW_MINUTES);

    let dataset = state.dataset.clone();
    let response = tokio::task::spawn_blocking(move || {
        let result = services::propagate_delays(&dataset.flights, &airport, window_minutes);
        CascadeResponse {
            airport,
            window_minutes,
            ranked: result.ranked.into_iter().map(Into::into).collect(),
            chains: result.chains,
        }
    })
    .await?;

    Ok(Json(response))
}

/// GET /v1/network
///
/// The loaded airport nodes and raw traffic edges for the frontend map.
pub async fn network_data(State(state): State<AppState>) -> HandlerResult<NetworkResponse> {
    Ok(Json(NetworkResponse {
        airports: state.dataset.airports.clone(),
        edges: state.dataset.edges.clone(),
    }))
}
