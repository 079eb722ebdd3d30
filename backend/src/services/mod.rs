//! Service layer: the deterministic flight-network computations.
//!
//! Everything in here is a pure function over in-memory data. Each request
//! builds its own [`graph::RouteGraph`] and chain indexes from the shared
//! read-only dataset, so there is no cross-request state and no locking.

pub mod cascade;
pub mod graph;
pub mod routing;

#[cfg(test)]
mod cascade_tests;

pub use cascade::{propagate_delays, CascadeResult, RankedAirport};
pub use graph::{build_graph, RouteGraph};
pub use routing::{direct_path, shortest_path, PathResult};
