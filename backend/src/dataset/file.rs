//! File-backed dataset loading.
//!
//! Reads the three JSON flat files from a configured directory:
//!
//! - `airports.json`: array of `{code, lat, lon, city?, country?}`
//! - `flight_edges.json`: array of `{source, target, count}`
//! - `flight_records.json`: array of flight record rows
//!
//! Rows missing their identifying codes are skipped with a warning. Counts
//! and timestamps are kept as loaded; coercion (count >= 1) is the graph
//! builder's job.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::error::{DatasetError, DatasetResult};
use super::DatasetRepository;
use crate::models::{AirportNode, FlightDataset, FlightEdge, FlightRecord};

const AIRPORTS_FILE: &str = "airports.json";
const EDGES_FILE: &str = "flight_edges.json";
const RECORDS_FILE: &str = "flight_records.json";

/// Dataset source reading JSON flat files from a directory.
#[derive(Debug, Clone)]
pub struct FileDataset {
    dir: PathBuf,
}

impl FileDataset {
    /// Create a file-backed dataset source rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    async fn read_rows<T: DeserializeOwned>(&self, file: &str) -> DatasetResult<Vec<T>> {
        let path = self.dir.join(file);
        if !path.exists() {
            return Err(DatasetError::MissingFile { path });
        }
        let contents = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| DatasetError::Io {
                path: path.clone(),
                source,
            })?;
        serde_json::from_str(&contents).map_err(|source| DatasetError::Parse { path, source })
    }
}

#[async_trait]
impl DatasetRepository for FileDataset {
    async fn load(&self) -> DatasetResult<FlightDataset> {
        let airports: Vec<AirportNode> = self.read_rows(AIRPORTS_FILE).await?;
        let edges: Vec<FlightEdge> = self.read_rows(EDGES_FILE).await?;
        let flights: Vec<FlightRecord> = self.read_rows(RECORDS_FILE).await?;

        let airports = filter_airports(airports);
        let edges = filter_edges(&self.dir, edges);
        let flights = filter_flights(&self.dir, flights);

        debug!(
            airports = airports.len(),
            edges = edges.len(),
            flights = flights.len(),
            "dataset loaded"
        );

        Ok(FlightDataset::new(airports, edges, flights))
    }
}

fn filter_airports(airports: Vec<AirportNode>) -> Vec<AirportNode> {
    airports
        .into_iter()
        .filter(|a| !a.code.trim().is_empty() && a.lat.is_finite() && a.lon.is_finite())
        .collect()
}

fn filter_edges(dir: &Path, edges: Vec<FlightEdge>) -> Vec<FlightEdge> {
    let before = edges.len();
    let edges: Vec<FlightEdge> = edges
        .into_iter()
        .filter(|e| !e.source.trim().is_empty() && !e.target.trim().is_empty())
        .collect();
    if edges.len() < before {
        warn!(
            skipped = before - edges.len(),
            dir = %dir.display(),
            "skipped flight edges with empty airport codes"
        );
    }
    edges
}

fn filter_flights(dir: &Path, flights: Vec<FlightRecord>) -> Vec<FlightRecord> {
    let before = flights.len();
    // A record with no origin can neither start nor join a chain.
    let flights: Vec<FlightRecord> = flights
        .into_iter()
        .filter(|f| !f.origin.trim().is_empty())
        .collect();
    if flights.len() < before {
        warn!(
            skipped = before - flights.len(),
            dir = %dir.display(),
            "skipped flight records with no origin airport"
        );
    }
    flights
}
