//! Error types for addrbook-redis

use thiserror::Error;

/// Result type alias for addrbook-redis operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in addrbook-redis
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Redis client or command error
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),
}
