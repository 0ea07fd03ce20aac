//! End-to-end planning runs.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{error, info, info_span, warn};
use uuid::Uuid;

use crate::config::PlannerConfig;
use crate::core::{
    sorter_for, Assignment, AssignmentSink, DeveloperStore, PlannerError, SchedulingPipeline,
    TaskSorter, TaskStore,
};

/// Orchestrates planning runs over a task store and a developer store.
///
/// Each call to [`Planner::plan`] starts its own [`SchedulingPipeline`], so no
/// scheduling state survives between runs. Runs on the same planner are
/// serialized by an exclusive run lock.
pub struct Planner {
    tasks: Arc<dyn TaskStore>,
    developers: Arc<dyn DeveloperStore>,
    sink: Option<Arc<dyn AssignmentSink>>,
    sorter: Box<dyn TaskSorter>,
    config: PlannerConfig,
    run_lock: Mutex<()>,
}

impl Planner {
    /// Create a planner with default configuration and effort-descending order.
    pub fn new(tasks: Arc<dyn TaskStore>, developers: Arc<dyn DeveloperStore>) -> Self {
        let config = PlannerConfig::default();
        Self {
            tasks,
            developers,
            sink: None,
            sorter: sorter_for(config.sort),
            config,
            run_lock: Mutex::new(()),
        }
    }

    /// Replace the backlog ordering strategy.
    #[must_use]
    pub fn with_sorter(mut self, sorter: Box<dyn TaskSorter>) -> Self {
        self.sorter = sorter;
        self
    }

    /// Attach a sink used when `save_assignments` is enabled.
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn AssignmentSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Replace the planner configuration.
    ///
    /// The backlog ordering is rebuilt from `config.sort`, replacing any sorter
    /// set earlier with [`Self::with_sorter`].
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidConfig` if validation fails.
    pub fn with_config(mut self, config: PlannerConfig) -> Result<Self, PlannerError> {
        config.validate().map_err(PlannerError::InvalidConfig)?;
        self.sorter = sorter_for(config.sort);
        self.config = config;
        Ok(self)
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Run one planning pass and return the produced assignments.
    ///
    /// Tasks that fit no developer are logged and left out of the result.
    ///
    /// # Errors
    ///
    /// - `PlannerError::DeveloperFetch` / `PlannerError::TaskFetch` when a store fails
    /// - `PlannerError::PipelineClosed` / `PlannerError::PipelineTimeout` when the
    ///   coordinator stops answering
    /// - `PlannerError::AssignmentSave` when saving is enabled and the sink fails
    pub fn plan(&self) -> Result<Vec<Assignment>, PlannerError> {
        let _guard = self.run_lock.lock();
        let run_id = Uuid::new_v4();
        let span = info_span!("plan", run_id = %run_id);
        let _entered = span.enter();

        let pipeline = SchedulingPipeline::start(
            self.config.max_hours_per_week,
            self.config.result_timeout(),
        )?;
        let result = self.run(&pipeline);
        pipeline.shutdown(self.config.shutdown_grace());

        let assignments = result?;
        self.save(&assignments)?;
        info!(assignments = assignments.len(), "planning run finished");
        Ok(assignments)
    }

    fn run(&self, pipeline: &SchedulingPipeline) -> Result<Vec<Assignment>, PlannerError> {
        let developers = self.developers.developers().map_err(|e| {
            error!(error = %e, "failed to get developers");
            PlannerError::DeveloperFetch(format!("{e:#}"))
        })?;
        pipeline.send_roster(developers)?;

        let tasks = self.tasks.tasks().map_err(|e| {
            error!(error = %e, "failed to get tasks");
            PlannerError::TaskFetch(format!("{e:#}"))
        })?;
        if tasks.is_empty() {
            info!("backlog is empty");
            return Ok(Vec::new());
        }

        let sorted = self.sorter.sort(&tasks);
        let mut assignments = Vec::with_capacity(sorted.len());
        let mut skipped = 0;
        for task in sorted {
            if !task.has_identity() {
                warn!(task = %task.key(), "skipping task without storage identity");
                skipped += 1;
                continue;
            }
            assignments.extend(pipeline.schedule(task)?);
        }

        let dropped = unplaced_count(tasks.len(), skipped, assignments.len());
        if dropped > 0 {
            warn!(dropped, skipped, "some tasks could not be placed");
        }
        Ok(assignments)
    }

    fn save(&self, assignments: &[Assignment]) -> Result<(), PlannerError> {
        if !self.config.save_assignments || assignments.is_empty() {
            return Ok(());
        }
        let Some(sink) = self.sink.as_ref() else {
            warn!("save_assignments is enabled but no sink is attached");
            return Ok(());
        };
        sink.create_batch_assignments(assignments.to_vec())
            .map_err(|e| PlannerError::AssignmentSave(format!("{e:#}")))
    }

    /// Run [`Planner::plan`] on tokio's blocking pool.
    ///
    /// # Errors
    ///
    /// Same as [`Planner::plan`], plus `PlannerError::Runtime` if the blocking
    /// task panics or is cancelled.
    #[cfg(feature = "tokio-runtime")]
    pub async fn plan_async(self: Arc<Self>) -> Result<Vec<Assignment>, PlannerError> {
        tokio::task::spawn_blocking(move || self.plan())
            .await
            .map_err(|e| PlannerError::Runtime(e.to_string()))?
    }
}

/// Scheduled tasks that produced no assignment.
const fn unplaced_count(total: usize, skipped: usize, placed: usize) -> usize {
    total.saturating_sub(skipped).saturating_sub(placed)
}
