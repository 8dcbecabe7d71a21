//! Error types for stonefront-content

use thiserror::Error;

/// Result type alias for stonefront-content operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while fetching or decoding the project data file
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from stonefront-core
    #[error("Core error: {0}")]
    Core(#[from] stonefront_core::Error),

    /// HTTP fetch error (network failure or non-success status)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Local file read error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed or schema-violating JSON document
    #[error("Data file error: {0}")]
    Json(#[from] serde_json::Error),
}
