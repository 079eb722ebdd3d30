//! Error types for dataset loading.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for dataset operations.
pub type DatasetResult<T> = Result<T, DatasetError>;

/// Errors raised while loading the flight dataset.
///
/// These surface at startup only; request handlers operate on the already
/// loaded in-memory dataset and never see them.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// A required dataset file does not exist.
    #[error("dataset file not found: {path}")]
    MissingFile { path: PathBuf },

    /// A dataset file could not be read.
    #[error("failed to read dataset file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A dataset file contained malformed JSON or unexpected row shapes.
    #[error("failed to parse dataset file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
