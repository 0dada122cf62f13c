//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for PiiArc
///
/// Per-record problems never surface here; malformed rows are skipped by the
/// ingest layer. These variants cover the run as a whole.
#[derive(Error, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum PiiArcError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(String),

    /// The batch input file does not exist
    #[error("Input file \"{0}\" not found.")]
    InputNotFound(String),

    #[error("CSV error: {0}")]
    Csv(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for PiiArc operations
pub type Result<T> = std::result::Result<T, PiiArcError>;
