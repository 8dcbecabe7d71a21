//! Error types for the Stonefront site engine.

/// Errors that can occur across the Stonefront crates.
///
/// All error variants are marked with `#[non_exhaustive]` to allow
/// adding new error types without breaking changes.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// I/O error (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Input validation error
    #[error("Validation error: {message}")]
    Validation {
        /// Field or aspect that failed validation
        field: Option<String>,
        /// What went wrong
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// A project id that does not resolve in the loaded set
    #[error("Project not found: {id}")]
    ProjectNotFound {
        /// Project id that was not found
        id: String,
    },
}

/// Convenience `Result` type alias for Stonefront operations.
///
/// This is the standard Result type used throughout the Stonefront codebase.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a new validation error.
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Error::Validation {
            field: None,
            message: message.into(),
        }
    }

    /// Creates a new validation error with a field name.
    pub fn validation_field<F, M>(field: F, message: M) -> Self
    where
        F: Into<String>,
        M: Into<String>,
    {
        Error::Validation {
            field: Some(field.into()),
            message: message.into(),
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Returns whether this error came from user input rather than the
    /// environment.
    pub fn is_input(&self) -> bool {
        match self {
            Error::Validation { .. } => true,
            Error::ProjectNotFound { .. } => true,
            Error::Io(_) => false,
            Error::Serialization(_) => false,
            Error::Config { .. } => false,
        }
    }
}
