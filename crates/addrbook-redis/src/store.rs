//! Record store trait and Redis backend.

use addrbook_core::PhoneKey;
use async_trait::async_trait;
use redis::AsyncCommands;
use redis::aio::ConnectionManager;

use crate::Result;

/// Thin key-value accessor for phone → address records.
///
/// Implementations provide whatever atomicity their backend offers for a
/// single `get` or `set`; nothing spans two calls.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Fetch the address stored under `key`, if any.
    async fn get(&self, key: &PhoneKey) -> Result<Option<String>>;

    /// Store `address` under `key`, replacing any previous value.
    async fn set(&self, key: &PhoneKey, address: &str) -> Result<()>;

    /// Backend name for logs.
    fn name(&self) -> &'static str;
}

/// Redis-backed record store.
///
/// Records are plain string keys (the phone key) holding the address, no TTL.
/// Cloning shares the underlying multiplexed connection.
#[derive(Clone)]
pub struct RedisStore {
    conn: ConnectionManager,
}

impl RedisStore {
    /// Connect to Redis at `url` (e.g. `redis://redis:6379`).
    pub async fn connect(url: &str) -> Result<Self> {
        let client = redis::Client::open(url)?;
        let conn = client.get_connection_manager().await?;
        log::info!("Connected to Redis at {url}");
        Ok(Self { conn })
    }
}

impl std::fmt::Debug for RedisStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisStore").finish_non_exhaustive()
    }
}

#[async_trait]
impl RecordStore for RedisStore {
    async fn get(&self, key: &PhoneKey) -> Result<Option<String>> {
        let mut conn = self.conn.clone();
        let address: Option<String> = conn.get(key.as_str()).await?;
        log::debug!("GET {key} -> {}", if address.is_some() { "hit" } else { "miss" });
        Ok(address)
    }

    async fn set(&self, key: &PhoneKey, address: &str) -> Result<()> {
        let mut conn = self.conn.clone();
        let _: () = conn.set(key.as_str(), address).await?;
        log::debug!("SET {key}");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "redis"
    }
}
