//! Planning data model: tasks, developers and assignments.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Storage identifier of a task. Zero means "not yet stored".
pub type TaskId = u64;

/// Storage identifier of a developer.
pub type DeveloperId = u64;

/// Source-scoped identity of a task, unique across all sources.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskKey {
    /// Name of the source the task was fetched from.
    pub source: String,
    /// Identifier of the task inside its source.
    pub external_id: String,
}

impl fmt::Display for TaskKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.source, self.external_id)
    }
}

/// A unit of work waiting to be planned.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Task {
    /// Storage identifier, assigned when the task is stored.
    pub id: TaskId,
    /// Identifier of the task inside its source.
    pub external_id: String,
    /// Optional display name.
    pub name: Option<String>,
    /// Unitless difficulty weight.
    pub difficulty: f64,
    /// Estimated duration in hours.
    pub estimated_duration: f64,
    /// Name of the source the task came from.
    pub source: String,
}

impl Task {
    /// Intrinsic workload: `difficulty * estimated_duration`.
    #[must_use]
    pub fn effort(&self) -> f64 {
        self.difficulty * self.estimated_duration
    }

    /// Source-scoped identity.
    #[must_use]
    pub fn key(&self) -> TaskKey {
        TaskKey {
            source: self.source.clone(),
            external_id: self.external_id.clone(),
        }
    }

    /// Whether the task carries a storage identity the pipeline accepts.
    #[must_use]
    pub const fn has_identity(&self) -> bool {
        self.id > 0
    }

    /// Name shown to humans, falling back to the source identity.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.name.clone().unwrap_or_else(|| {
            format!("Task {} - {}", self.source, self.external_id)
        })
    }
}

/// A worker whose productivity scales the hours a task costs them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Developer {
    /// Storage identifier.
    pub id: DeveloperId,
    /// Display name.
    pub name: String,
    /// Effort units completed per hour. Zero means the developer takes no tasks.
    pub productivity: f64,
}

impl Developer {
    /// Hours this developer needs for `effort`; unbounded when productivity is zero.
    #[must_use]
    pub fn hours_needed(&self, effort: f64) -> f64 {
        hours_needed(effort, self.productivity)
    }
}

/// Hours needed to complete `effort` at `productivity`.
///
/// A productivity of exactly zero yields `f64::INFINITY`, which no capacity
/// check ever accepts.
#[must_use]
pub fn hours_needed(effort: f64, productivity: f64) -> f64 {
    if productivity == 0.0 {
        return f64::INFINITY;
    }
    effort / productivity
}

/// A task placed on a developer in a given week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    /// The placed task.
    pub task: Task,
    /// The developer the task is placed on.
    pub developer: Developer,
    /// 1-based week the hours are committed to.
    pub week_number: u32,
    /// `task.effort() / developer.productivity`.
    pub calculated_hours: f64,
}

impl Assignment {
    /// Storage identifier of the placed task.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task.id
    }

    /// Storage identifier of the assigned developer.
    #[must_use]
    pub const fn developer_id(&self) -> DeveloperId {
        self.developer.id
    }
}
