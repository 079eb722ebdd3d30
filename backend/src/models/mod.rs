//! Domain models for the flight network.
//!
//! These types are the in-memory representation of the loaded dataset and
//! double as wire DTOs (camelCase field names) where the API exposes them
//! directly.

pub mod flight;


pub use flight::{normalize_code, AirportNode, FlightDataset, FlightEdge, FlightRecord};
