//! In-memory record store.

use std::collections::HashMap;
use std::sync::Arc;

use addrbook_core::PhoneKey;
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::Result;
use crate::store::RecordStore;

/// Process-local store backed by a `HashMap`.
///
/// Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    records: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `(key, address)` pairs.
    pub fn with_records<I, K, V>(records: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = records
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            records: Arc::new(RwLock::new(map)),
        }
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// `true` when nothing has been stored.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn get(&self, key: &PhoneKey) -> Result<Option<String>> {
        Ok(self.records.read().await.get(key.as_str()).cloned())
    }

    async fn set(&self, key: &PhoneKey, address: &str) -> Result<()> {
        self.records
            .write()
            .await
            .insert(key.as_str().to_string(), address.to_string());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
