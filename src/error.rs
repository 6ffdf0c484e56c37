//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Distinguishes the batch-fatal `NoInput` case from the per-raster failures
//! (metadata, unknown sensor, unsupported sidecar, I/O) that the batch driver
//! logs and skips.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No image files found in {}", dir.display())]
    NoInput { dir: PathBuf },

    #[error("Metadata error: {0}")]
    Metadata(String),

    #[error("Unknown sensor: {0}")]
    UnknownSensor(String),

    #[error("Not supported: {0}")]
    NotSupported(String),

    #[error("Invalid sensor profile {id}: {names} band names but {centers} band centers")]
    InvalidProfile {
        id: String,
        names: usize,
        centers: usize,
    },
}

impl Error {
    pub fn metadata<S: Into<String>>(msg: S) -> Self {
        Error::Metadata(msg.into())
    }
}
