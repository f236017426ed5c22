//! Access to the `short_names` and `full_names` tables.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::Result;
use crate::reconcile::StatusUpdate;

/// Read both tables and write full-name statuses back.
#[async_trait]
pub trait StatusTables: Send + Sync {
    /// Every `short_names` row as `name -> status`.
    async fn short_statuses(&self) -> Result<HashMap<String, Option<i32>>>;

    /// Every `full_names` primary key.
    async fn full_names(&self) -> Result<Vec<String>>;

    /// Write all updates atomically.
    async fn apply(&self, updates: &[StatusUpdate]) -> Result<()>;
}

/// In-memory tables, for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryStatusTables {
    short: HashMap<String, Option<i32>>,
    full: Mutex<BTreeMap<String, Option<i32>>>,
}

impl MemoryStatusTables {
    /// Build tables from `(name, status)` rows.
    pub fn new<S, F, K>(short: S, full: F) -> Self
    where
        S: IntoIterator<Item = (K, Option<i32>)>,
        F: IntoIterator<Item = (K, Option<i32>)>,
        K: Into<String>,
    {
        Self {
            short: short.into_iter().map(|(k, v)| (k.into(), v)).collect(),
            full: Mutex::new(full.into_iter().map(|(k, v)| (k.into(), v)).collect()),
        }
    }

    /// Current status of a full name; `None` if the row does not exist.
    pub fn status_of(&self, name: &str) -> Option<Option<i32>> {
        self.rows().get(name).copied()
    }

    /// Row map, recovered if a writer panicked; inserts leave it consistent.
    fn rows(&self) -> MutexGuard<'_, BTreeMap<String, Option<i32>>> {
        self.full.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl StatusTables for MemoryStatusTables {
    async fn short_statuses(&self) -> Result<HashMap<String, Option<i32>>> {
        Ok(self.short.clone())
    }

    async fn full_names(&self) -> Result<Vec<String>> {
        Ok(self.rows().keys().cloned().collect())
    }

    async fn apply(&self, updates: &[StatusUpdate]) -> Result<()> {
        let mut rows = self.rows();
        for update in updates {
            rows.insert(update.name.clone(), update.status);
        }
        Ok(())
    }
}
