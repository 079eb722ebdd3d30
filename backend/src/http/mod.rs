//! HTTP server module for the AirNavFlow backend.
//!
//! An axum-based REST API over the service layer. The handlers do request
//! parsing and validation, delegate the deterministic computations to
//! [`crate::services`], and map results and failures onto JSON responses.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                              │
//! │  - Query parsing and validation                          │
//! │  - JSON serialization, CORS, compression, tracing        │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Service Layer (services/)                               │
//! │  - Graph construction, Dijkstra, delay chains            │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Dataset Layer (dataset/)                                │
//! │  - Flat-file loading at startup, read-only thereafter    │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
