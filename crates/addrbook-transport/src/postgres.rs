//! PostgreSQL-backed status tables.

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::Result;
use crate::reconcile::StatusUpdate;
use crate::tables::StatusTables;

/// `short_names` / `full_names` in a Postgres database.
#[derive(Clone, Debug)]
pub struct PgStatusTables {
    pool: PgPool,
}

impl PgStatusTables {
    /// Connect with a single-connection pool; the job is one-shot.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(1)
            .connect(database_url)
            .await?;
        Ok(Self { pool })
    }

    /// Wrap an existing pool.
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StatusTables for PgStatusTables {
    async fn short_statuses(&self) -> Result<HashMap<String, Option<i32>>> {
        let rows: Vec<(String, Option<i32>)> =
            sqlx::query_as("SELECT name, status FROM short_names")
                .fetch_all(&self.pool)
                .await?;
        Ok(rows.into_iter().collect())
    }

    async fn full_names(&self) -> Result<Vec<String>> {
        let names: Vec<String> = sqlx::query_scalar("SELECT name FROM full_names")
            .fetch_all(&self.pool)
            .await?;
        Ok(names)
    }

    async fn apply(&self, updates: &[StatusUpdate]) -> Result<()> {
        let mut tx = self.pool.begin().await?;
        for update in updates {
            sqlx::query("UPDATE full_names SET status = $1 WHERE name = $2")
                .bind(update.status)
                .bind(&update.name)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;
        tracing::debug!(rows = updates.len(), "Committed status updates");
        Ok(())
    }
}
