//! Error types for rs-content-quality.
//!
//! Only the classifier capability surfaces errors. Metrics extraction and
//! scoring always degrade to defined floor values instead.

use std::path::PathBuf;

/// Error type for analysis operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The classifier artifact does not exist at the configured path.
    #[error("Model file not found at: {}", .0.display())]
    ModelNotFound(PathBuf),

    /// The classifier artifact could not be read or decoded.
    #[error("Failed to load model: {0}")]
    ModelLoad(String),

    /// The feature schema does not fit the metrics or the predictor.
    #[error("Feature schema mismatch: {0}")]
    SchemaMismatch(String),

    /// The predictor rejected a feature vector.
    #[error("Prediction failed: {0}")]
    Prediction(String),

    /// The readability formula could not produce a value.
    #[error("Readability computation failed: {0}")]
    Readability(String),
}

/// Result type alias for analysis operations.
pub type Result<T> = std::result::Result<T, Error>;
