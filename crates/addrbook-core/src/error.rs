//! Error types for addrbook-core

use std::fmt;
use std::path::{Path, PathBuf};

/// Result type alias for addrbook-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Input field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// The phone number did not normalize to a canonical key.
    Phone,
    /// The address was not offered back by the suggestion service.
    Address,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Phone => write!(f, "Phone"),
            Self::Address => write!(f, "Address"),
        }
    }
}

/// Errors that can occur in addrbook-core
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// User-correctable input error.
    #[error("{0} not validated")]
    Validation(Field),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// I/O error tied to a specific path
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path being read or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Wraps an I/O error together with the path it happened on.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Returns the invalid field when this is a validation error.
    pub fn invalid_field(&self) -> Option<Field> {
        match self {
            Error::Validation(field) => Some(*field),
            _ => None,
        }
    }
}
