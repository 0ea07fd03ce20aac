//! Error types for planning operations.

use std::time::Duration;

use thiserror::Error;

/// Errors produced by planner components.
#[derive(Debug, Error)]
pub enum PlannerError {
    /// The developer roster could not be fetched.
    #[error("failed to get developers: {0}")]
    DeveloperFetch(String),
    /// The task backlog could not be fetched.
    #[error("failed to get tasks: {0}")]
    TaskFetch(String),
    /// Produced assignments could not be persisted.
    #[error("failed to save assignments: {0}")]
    AssignmentSave(String),
    /// The scheduling pipeline stopped servicing its channels.
    #[error("scheduling pipeline closed")]
    PipelineClosed,
    /// No result arrived from the scheduling pipeline in time.
    #[error("scheduling pipeline timed out after {0:?}")]
    PipelineTimeout(Duration),
    /// A commit would push a developer's week past the hour ceiling.
    #[error("capacity exceeded: week {week} has {load}h, cannot add {hours}h")]
    CapacityExceeded {
        /// Week number of the rejected commit.
        week: u32,
        /// Hours already committed in that week.
        load: f64,
        /// Hours the commit tried to add.
        hours: f64,
    },
    /// A task cannot be handed to the pipeline.
    #[error("invalid task: {0}")]
    InvalidTask(String),
    /// Configuration validation failed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// A task source failed to deliver its tasks.
    #[error("task source `{source_name}` failed: {reason}")]
    Source {
        /// Configured name of the failing source.
        source_name: String,
        /// Failure description.
        reason: String,
    },
    /// Async runtime failure while driving a run.
    #[error("runtime error: {0}")]
    Runtime(String),
}

/// Application-facing result using anyhow for collaborator contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
