//! Status reconciliation.

use std::collections::HashMap;

use crate::tables::StatusTables;
use crate::{Error, Result};

/// New status for one `full_names` row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusUpdate {
    /// Full name (primary key).
    pub name: String,
    /// Status copied from the matching short name.
    pub status: Option<i32>,
}

/// Summary of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReconcileReport {
    /// Rows written.
    pub updated: usize,
}

/// The short name a full name maps to: everything before the first `.`.
pub fn prefix_of(name: &str) -> &str {
    name.split('.').next().unwrap_or(name)
}

/// Resolve every full name to its short-name status.
///
/// Fails on the first full name whose prefix is unknown.
pub fn plan(
    short_statuses: &HashMap<String, Option<i32>>,
    full_names: &[String],
) -> Result<Vec<StatusUpdate>> {
    full_names
        .iter()
        .map(|name| {
            let prefix = prefix_of(name);
            short_statuses
                .get(prefix)
                .map(|status| StatusUpdate {
                    name: name.clone(),
                    status: *status,
                })
                .ok_or_else(|| Error::MissingMapping {
                    name: name.clone(),
                    prefix: prefix.to_string(),
                })
        })
        .collect()
}

/// Load both tables, plan, and apply.
pub async fn reconcile(tables: &dyn StatusTables) -> Result<ReconcileReport> {
    let short_statuses = tables.short_statuses().await?;
    let full_names = tables.full_names().await?;
    tracing::info!(
        short = short_statuses.len(),
        full = full_names.len(),
        "Reconciling transport statuses"
    );

    let updates = plan(&short_statuses, &full_names).inspect_err(|e| {
        tracing::error!(error = %e, "Reconciliation aborted");
    })?;
    tables.apply(&updates).await?;

    tracing::info!(updated = updates.len(), "Reconciliation complete");
    Ok(ReconcileReport {
        updated: updates.len(),
    })
}
