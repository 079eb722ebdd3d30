//! AirNavFlow HTTP Server Binary
//!
//! Entry point for the AirNavFlow REST API server. It loads the flight
//! dataset from flat files (fail fast on a broken dataset), sets up the
//! HTTP router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin airnavflow-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `DATASET_DIR`: Directory with the dataset JSON files (default: dataset)
//! - `CONFIG_PATH`: Optional TOML config file
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use airnavflow_rust::config::ServerConfig;
use airnavflow_rust::dataset::{DatasetRepository, FileDataset};
use airnavflow_rust::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting AirNavFlow HTTP Server");

    let config = ServerConfig::resolve()?;

    // Load the dataset once; every request computes over this snapshot.
    let repository = FileDataset::new(config.dataset.dir.clone());
    let dataset = Arc::new(repository.load().await?);
    info!("Dataset loaded: {}", dataset.summary());

    let state = AppState::new(dataset);
    let app = create_router(state);

    let addr: SocketAddr = config.bind_addr().parse()?;
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
