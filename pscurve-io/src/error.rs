use std::io;
use thiserror::Error;

/// Error type for pscurve-io operations.
#[derive(Error, Debug)]
pub enum ReportError {
    /// IO error occurred during file operations.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Failed to serialize the fit summary.
    #[error("Failed to serialize fit summary: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for pscurve-io operations.
pub type Result<T> = std::result::Result<T, ReportError>;
