//! Error types for stonefront-cli

use thiserror::Error;

/// Result type alias for stonefront-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in stonefront-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from stonefront-core
    #[error("Core error: {0}")]
    Core(#[from] stonefront_core::Error),

    /// Error from stonefront-content
    #[error("Content error: {0}")]
    Content(#[from] stonefront_content::Error),

    /// File read/write error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file parse error
    #[error("Config parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Config file serialize error
    #[error("Config format error: {0}")]
    TomlFormat(#[from] toml::ser::Error),
}
