//! Error types for addrbook-client

use thiserror::Error;

/// Result type alias for addrbook-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in addrbook-client.
///
/// Every variant means the suggestion service could not be used; callers
/// surface them as a gateway failure.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Transport, timeout, or body decoding failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The configured base URL does not parse
    #[error("Invalid base URL '{url}': {message}")]
    InvalidBaseUrl {
        /// URL as configured
        url: String,
        /// Parser message
        message: String,
    },

    /// Upstream unavailable for a reason other than HTTP (used by mocks)
    #[error("Upstream unavailable: {0}")]
    Unavailable(String),
}
