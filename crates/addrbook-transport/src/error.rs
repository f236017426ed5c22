//! Error types for addrbook-transport

use thiserror::Error;

/// Result type alias for addrbook-transport operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in addrbook-transport
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A full name's prefix has no row in `short_names`; the run aborts.
    #[error("No short name '{prefix}' for full name '{name}'")]
    MissingMapping {
        /// Full name being reconciled
        name: String,
        /// Prefix that was looked up
        prefix: String,
    },

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
