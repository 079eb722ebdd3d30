//! # AirNavFlow Rust Backend
//!
//! Flight-network analysis engine for the AirNavFlow demo product.
//!
//! This crate provides the deterministic core behind the AirNavFlow frontend:
//! it loads the airport/flight dataset from flat files, builds a weighted
//! directed flight graph, answers reroute-simulation queries via Dijkstra
//! shortest-path search, and computes cascading-delay chains over observed
//! flight records. The backend exposes a REST API via Axum for the frontend.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: Domain types (airports, flight edges, flight records)
//! - [`dataset`]: Flat-file dataset loading behind a repository trait
//! - [`services`]: Pure graph/pathfinding/cascade computations
//! - [`config`]: Server configuration (TOML file + environment overrides)
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! All service computations are pure functions over in-memory data: the
//! dataset is read once at startup, and every request rebuilds its own graph
//! and indexes from those immutable rows. Nothing is shared mutably between
//! requests.

pub mod config;
pub mod dataset;
pub mod models;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
