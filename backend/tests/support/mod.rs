//! Shared fixtures for integration tests.

use std::sync::Arc;

use airnavflow_rust::http::{create_router, AppState};
use airnavflow_rust::models::{AirportNode, FlightDataset, FlightEdge, FlightRecord};
use axum::Router;

pub fn airport(code: &str, lat: f64, lon: f64) -> AirportNode {
    AirportNode {
        code: code.to_string(),
        lat,
        lon,
        city: None,
        country: None,
    }
}

pub fn edge(source: &str, target: &str, count: i64) -> FlightEdge {
    FlightEdge {
        source: source.to_string(),
        target: target.to_string(),
        count,
    }
}

pub fn flight(id: &str, origin: &str, destination: &str, first: i64, last: i64) -> FlightRecord {
    FlightRecord {
        id: id.to_string(),
        origin: origin.to_string(),
        destination: destination.to_string(),
        first_seen: Some(first),
        last_seen: Some(last),
        arrival_delay_minutes: None,
    }
}

/// Small network where the two-hop JFK->ORD->DFW reroute (cost 0.3) beats
/// the congested direct edge (cost 1.0), plus an isolated SYD node and a
/// connectable flight-record chain out of JFK.
pub fn fixture_dataset() -> FlightDataset {
    FlightDataset::new(
        vec![
            airport("JFK", 40.6413, -73.7781),
            airport("ORD", 41.9742, -87.9073),
            airport("DFW", 32.8998, -97.0403),
            airport("SYD", -33.9399, 151.1753),
        ],
        vec![
            edge("JFK", "ORD", 10),
            edge("ORD", "DFW", 5),
            edge("JFK", "DFW", 1),
        ],
        vec![
            flight("f1", "JFK", "ORD", 0, 1000),
            flight("f2", "ORD", "DFW", 1050, 2000),
        ],
    )
}

pub fn test_router() -> Router {
    create_router(AppState::new(Arc::new(fixture_dataset())))
}
