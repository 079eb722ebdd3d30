//! Dataset loading layer.
//!
//! The dataset is three JSON flat files (airports, flight edges, flight
//! records) read once at startup. Loading sits behind the
//! [`DatasetRepository`] trait so tests can substitute in-memory fixtures
//! for the file-backed implementation.

pub mod error;
pub mod file;


pub use error::{DatasetError, DatasetResult};
pub use file::FileDataset;

use async_trait::async_trait;

use crate::models::FlightDataset;

/// Source of the flight dataset.
///
/// Implementations must be pure loads: every call returns a freshly built
/// [`FlightDataset`] and never mutates shared state.
#[async_trait]
pub trait DatasetRepository: Send + Sync {
    /// Load the full dataset.
    async fn load(&self) -> DatasetResult<FlightDataset>;
}

/// In-memory dataset source for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct StaticDataset {
    pub airports: Vec<crate::models::AirportNode>,
    pub edges: Vec<crate::models::FlightEdge>,
    pub flights: Vec<crate::models::FlightRecord>,
}

#[async_trait]
impl DatasetRepository for StaticDataset {
    async fn load(&self) -> DatasetResult<FlightDataset> {
        Ok(FlightDataset::new(
            self.airports.clone(),
            self.edges.clone(),
            self.flights.clone(),
        ))
    }
}
