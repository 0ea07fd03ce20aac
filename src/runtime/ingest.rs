//! Ingestion of source tasks into the task store.

use tracing::{info, warn};

use crate::core::{AppResult, TaskStore};
use crate::infra::SourceAggregator;

/// Fetch from every source and store the union.
///
/// Failing sources are skipped. Returns the number of newly stored tasks.
///
/// # Errors
///
/// Returns the store's error if persisting fails.
pub async fn ingest(sources: &SourceAggregator, store: &dyn TaskStore) -> AppResult<usize> {
    let report = sources.fetch_all().await;
    if !report.failures.is_empty() {
        warn!(failed = report.failures.len(), "some task sources failed");
    }

    let fetched = report.tasks.len();
    let inserted = store.store_tasks(report.tasks)?;
    info!(fetched, inserted, "ingested tasks");
    Ok(inserted)
}
