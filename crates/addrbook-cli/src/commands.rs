//! `serve` and `reconcile` command runners.

use std::sync::Arc;

use addrbook_api::{AddressBook, Server};
use addrbook_client::AhunterClient;
use addrbook_redis::{MemoryStore, RecordStore, RedisStore};
use addrbook_transport::{PgStatusTables, ReconcileReport, reconcile};

use crate::Result;
use crate::config::AddrbookConfig;

/// Wire the store and suggest client into an [`AddressBook`].
pub async fn build_book(config: &AddrbookConfig, in_memory: bool) -> Result<AddressBook> {
    let store: Arc<dyn RecordStore> = if in_memory {
        tracing::warn!("Using in-memory record store; records are lost on exit");
        Arc::new(MemoryStore::new())
    } else {
        tracing::info!(url = %config.redis.url, "Connecting to Redis");
        Arc::new(RedisStore::connect(&config.redis.url).await?)
    };

    let suggester = AhunterClient::new(&config.suggest.base_url, config.suggest.timeout())?;
    tracing::info!(
        store = store.name(),
        suggest = %config.suggest.base_url,
        "Address book ready"
    );
    Ok(AddressBook::new(store, Arc::new(suggester)))
}

/// Run the HTTP API until ctrl-c.
pub async fn serve(config: &AddrbookConfig, in_memory: bool) -> Result<()> {
    let addr = config.socket_addr()?;
    let book = build_book(config, in_memory).await?;
    Server::new(addr, book).serve().await?;
    Ok(())
}

/// Run the transport status reconciliation once.
pub async fn run_reconcile(config: &AddrbookConfig) -> Result<ReconcileReport> {
    let tables = PgStatusTables::connect(&config.database.url).await?;
    Ok(reconcile(&tables).await?)
}
