//! Error types for addrbook-api

use std::net::SocketAddr;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Result type alias for addrbook-api operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in addrbook-api
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from addrbook-core (input validation)
    #[error(transparent)]
    Core(#[from] addrbook_core::Error),

    /// Record store failure
    #[error("Storage error: {0}")]
    Store(#[from] addrbook_redis::Error),

    /// Address suggestion service failure
    #[error("Upstream error: {0}")]
    Upstream(#[from] addrbook_client::Error),

    /// Listener could not be bound
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        /// Address we tried to listen on
        addr: SocketAddr,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Server I/O failure while serving
    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Core(e) if e.invalid_field().is_some() => StatusCode::UNPROCESSABLE_ENTITY,
            Error::Upstream(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing `detail` text.
    fn detail(&self) -> String {
        match self {
            Error::Core(e) if e.invalid_field().is_some() => e.to_string(),
            Error::Upstream(e) => e.to_string(),
            Error::Store(_) => "Storage unavailable".to_string(),
            _ => "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, status = status.as_u16(), "Request failed");
        } else {
            tracing::debug!(error = %self, "Rejected request");
        }
        (status, Json(json!({ "detail": self.detail() }))).into_response()
    }
}
