//! External task sources and their aggregation.

pub mod http;

use std::sync::Arc;

use async_trait::async_trait;
use futures::future::join_all;
use tracing::{info, warn};

use crate::core::{AppResult, PlannerError, Task};

pub use http::{decode_records, HttpTaskSource};

/// A remote system tasks are fetched from.
#[async_trait]
pub trait TaskSource: Send + Sync {
    /// Configured source name, stored on every task it yields.
    fn name(&self) -> &str;

    /// Fetch the source's current tasks.
    async fn fetch_tasks(&self) -> AppResult<Vec<Task>>;
}

/// Outcome of fetching from every source once.
#[derive(Debug, Default)]
pub struct FetchReport {
    /// Tasks from every source that answered, in source order.
    pub tasks: Vec<Task>,
    /// One error per source that failed.
    pub failures: Vec<PlannerError>,
}

/// Fans a fetch out to several sources and tolerates individual failures.
#[derive(Clone, Default)]
pub struct SourceAggregator {
    sources: Vec<Arc<dyn TaskSource>>,
}

impl SourceAggregator {
    /// Create an aggregator over `sources`.
    #[must_use]
    pub fn new(sources: Vec<Arc<dyn TaskSource>>) -> Self {
        Self { sources }
    }

    /// Add one more source.
    #[must_use]
    pub fn with_source(mut self, source: Arc<dyn TaskSource>) -> Self {
        self.sources.push(source);
        self
    }

    /// Number of configured sources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Whether no source is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Fetch from all sources concurrently.
    ///
    /// A failing source is logged and recorded in the report; the others
    /// still contribute their tasks.
    pub async fn fetch_all(&self) -> FetchReport {
        let results = join_all(self.sources.iter().map(|source| source.fetch_tasks())).await;

        let mut report = FetchReport::default();
        for (source, result) in self.sources.iter().zip(results) {
            match result {
                Ok(tasks) => {
                    info!(source = source.name(), tasks = tasks.len(), "fetched tasks");
                    report.tasks.extend(tasks);
                }
                Err(e) => {
                    warn!(source = source.name(), error = %e, "failed to fetch tasks from source");
                    report.failures.push(PlannerError::Source {
                        source_name: source.name().to_string(),
                        reason: format!("{e:#}"),
                    });
                }
            }
        }
        report
    }
}
