//! API server implementation

use std::future::Future;
use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

use crate::routes::router;
use crate::service::AddressBook;
use crate::{Error, Result};

/// addrbook API server
pub struct Server {
    addr: SocketAddr,
    book: AddressBook,
}

impl Server {
    /// Create a server that will listen on `addr`.
    pub fn new(addr: SocketAddr, book: AddressBook) -> Self {
        Self { addr, book }
    }

    /// Address the server binds to.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// The router this server serves.
    pub fn router(&self) -> Router {
        router(self.book.clone())
    }

    /// Bind and serve until ctrl-c.
    pub async fn serve(self) -> Result<()> {
        self.serve_with_shutdown(shutdown_signal()).await
    }

    /// Bind and serve until `signal` resolves.
    pub async fn serve_with_shutdown<F>(self, signal: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(self.addr)
            .await
            .map_err(|source| Error::Bind {
                addr: self.addr,
                source,
            })?;
        self.serve_listener(listener, signal).await
    }

    /// Serve on an already-bound listener until `signal` resolves.
    pub async fn serve_listener<F>(self, listener: TcpListener, signal: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let local = listener.local_addr()?;
        tracing::info!(addr = %local, "addrbook API listening");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(signal)
            .await?;

        tracing::info!("addrbook API stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
