//! Core flight-network types loaded from the dataset files.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Normalize an airport code for indexing: trimmed and upper-cased.
///
/// Codes are case-insensitive at the API boundary but every internal map is
/// keyed by the canonical upper-case form.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}

/// A single airport in the network.
///
/// Immutable once loaded; `code` is the unique IATA-like identifier used as
/// the graph node key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirportNode {
    /// IATA-like airport code (e.g. "JFK").
    pub code: String,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// A raw directed traffic edge between two airports.
///
/// `count` is the observed flight frequency for the ordered pair. Raw data
/// may contain several rows for the same pair; the graph builder collapses
/// them. The count is kept as loaded here and coerced to at least 1 when the
/// edge weight is computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightEdge {
    pub source: String,
    pub target: String,
    pub count: i64,
}

/// A single observed flight, used only by the delay-chain propagator.
///
/// Timestamps are epoch seconds. OpenSky-style rows can lack either
/// timestamp, so both are optional; the propagator stops extending a chain
/// at a record without `last_seen` or without a destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightRecord {
    /// Stable row identifier, used as chain-membership identity.
    pub id: String,
    /// Departure airport code.
    pub origin: String,
    /// Arrival airport code.
    pub destination: String,
    /// First-seen timestamp (departure), epoch seconds.
    #[serde(default)]
    pub first_seen: Option<i64>,
    /// Last-seen timestamp (arrival), epoch seconds.
    #[serde(default)]
    pub last_seen: Option<i64>,
    /// Observed arrival delay in minutes, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival_delay_minutes: Option<i64>,
}

/// The full dataset as loaded at startup.
///
/// Shared read-only (behind `Arc`) across requests; per-request computations
/// build their own graph and indexes from these rows.
#[derive(Debug, Clone)]
pub struct FlightDataset {
    pub airports: Vec<AirportNode>,
    pub edges: Vec<FlightEdge>,
    pub flights: Vec<FlightRecord>,
    /// When this dataset was read from disk (reported by /health).
    pub loaded_at: DateTime<Utc>,
}

impl FlightDataset {
    /// Assemble a dataset from already-parsed rows, stamping the load time.
    pub fn new(
        airports: Vec<AirportNode>,
        edges: Vec<FlightEdge>,
        flights: Vec<FlightRecord>,
    ) -> Self {
        Self {
            airports,
            edges,
            flights,
            loaded_at: Utc::now(),
        }
    }

    /// Short human-readable summary, used by the health endpoint.
    pub fn summary(&self) -> String {
        format!(
            "{} airports, {} edges, {} flight records",
            self.airports.len(),
            self.edges.len(),
            self.flights.len()
        )
    }
}
