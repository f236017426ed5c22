//! Error types for addrbook-cli

use thiserror::Error;

/// Result type alias for addrbook-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in addrbook-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from addrbook-core (configuration, I/O)
    #[error("Core error: {0}")]
    Core(#[from] addrbook_core::Error),

    /// Error from the record store
    #[error("Store error: {0}")]
    Store(#[from] addrbook_redis::Error),

    /// Error from the suggest client
    #[error("Client error: {0}")]
    Client(#[from] addrbook_client::Error),

    /// Error from the API server
    #[error("Server error: {0}")]
    Api(#[from] addrbook_api::Error),

    /// Error from the reconciliation job
    #[error("Reconciliation error: {0}")]
    Transport(#[from] addrbook_transport::Error),
}
