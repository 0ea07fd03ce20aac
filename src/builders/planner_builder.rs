//! Builders to construct planners and source aggregators from configuration.

use std::sync::Arc;

use crate::config::{PlanningConfig, SortStrategy};
use crate::core::{
    sorter_for, AssignmentSink, DeveloperStore, Planner, PlannerError, TaskSorter, TaskStore,
};
use crate::infra::{HttpTaskSource, SourceAggregator, TaskSource};

/// Sorter implementing `strategy`.
#[must_use]
pub fn build_sorter(strategy: SortStrategy) -> Box<dyn TaskSorter> {
    sorter_for(strategy)
}

/// Build a planner over the given stores from validated configuration.
///
/// # Errors
///
/// Returns `PlannerError::InvalidConfig` if the configuration is invalid.
pub fn build_planner(
    cfg: &PlanningConfig,
    tasks: Arc<dyn TaskStore>,
    developers: Arc<dyn DeveloperStore>,
    sink: Option<Arc<dyn AssignmentSink>>,
) -> Result<Planner, PlannerError> {
    cfg.validate().map_err(PlannerError::InvalidConfig)?;

    let mut planner = Planner::new(tasks, developers).with_config(cfg.planner.clone())?;
    if let Some(sink) = sink {
        planner = planner.with_sink(sink);
    }
    Ok(planner)
}

/// Build an aggregator with one HTTP source per configured source.
///
/// # Errors
///
/// Returns `PlannerError::InvalidConfig` for invalid configuration and
/// `PlannerError::Source` if a source client cannot be created.
pub fn build_sources(cfg: &PlanningConfig) -> Result<SourceAggregator, PlannerError> {
    cfg.validate().map_err(PlannerError::InvalidConfig)?;

    let sources = cfg
        .sources
        .iter()
        .map(|source| HttpTaskSource::new(source).map(|s| Arc::new(s) as Arc<dyn TaskSource>))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(SourceAggregator::new(sources))
}
