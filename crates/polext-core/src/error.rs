//! Error types for the polext-core library.

use thiserror::Error;

/// Main error type for the polext library.
///
/// Extraction itself never fails; a field that cannot be found is simply
/// absent from the result. Errors only come from the I/O boundary and from
/// configuration handling.
#[derive(Error, Debug)]
pub enum PolextError {
    /// I/O error reading a source document or writing a sink.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization or deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for the polext library.
pub type Result<T> = std::result::Result<T, PolextError>;
