//! Data Transfer Objects for the HTTP API.
//!
//! The wire contract uses camelCase names where the frontend expects them
//! (`originalPath`, `windowMinutes`, ...). Domain models that already
//! serialize in the right shape ([`FlightRecord`], [`AirportNode`],
//! [`FlightEdge`]) go out as-is.

use serde::{Deserialize, Serialize};

use crate::models::{AirportNode, FlightEdge, FlightRecord};
use crate::services::{PathResult, RankedAirport};

/// Response for the health check endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Dataset summary plus load time.
    pub dataset: String,
}

/// Query parameters for the reroute simulation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SimulateQuery {
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub destination: Option<String>,
}

/// A path with its cost on the wire.
///
/// JSON has no Infinity literal, so an unreachable route serializes as an
/// empty `path` with `cost: null`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PathDto {
    pub path: Vec<String>,
    pub cost: Option<f64>,
}

impl From<PathResult> for PathDto {
    fn from(result: PathResult) -> Self {
        Self {
            cost: result.cost.is_finite().then_some(result.cost),
            path: result.path,
        }
    }
}

/// Response for the reroute simulation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulateResponse {
    pub origin: String,
    pub destination: String,
    /// The direct-edge baseline route, if one exists.
    pub original_path: PathDto,
    /// The Dijkstra-optimal route.
    pub rerouted_path: PathDto,
}

/// Query parameters for the cascading-delay endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CascadeQuery {
    #[serde(default)]
    pub airport: Option<String>,
    /// Connection window in minutes; defaults to 120.
    #[serde(default)]
    pub window: Option<i64>,
}

/// One entry of the cascade ranking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankedAirportDto {
    pub airport: String,
    pub score: u64,
}

impl From<RankedAirport> for RankedAirportDto {
    fn from(ranked: RankedAirport) -> Self {
        Self {
            airport: ranked.airport,
            score: ranked.score,
        }
    }
}

/// Response for the cascading-delay endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CascadeResponse {
    pub airport: String,
    pub window_minutes: i64,
    pub ranked: Vec<RankedAirportDto>,
    pub chains: Vec<Vec<FlightRecord>>,
}

/// Response for the network-data endpoint: the loaded nodes and raw traffic
/// edges, consumed by the frontend map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkResponse {
    pub airports: Vec<AirportNode>,
    pub edges: Vec<FlightEdge>,
}
