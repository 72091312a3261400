//! Error types for Pulse.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PulseError {
    #[error("telemetry data not available")]
    DataUnavailable,

    #[error("invalid telemetry record at index {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
