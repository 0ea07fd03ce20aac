//! Persistence collaborators consumed by the planner.

use crate::core::{AppResult, Assignment, Developer, Task};

/// Backlog storage.
pub trait TaskStore: Send + Sync {
    /// Every stored task.
    fn tasks(&self) -> AppResult<Vec<Task>>;

    /// Store `tasks`, skipping any whose `(source, external_id)` already
    /// exists. Returns the number of newly inserted tasks.
    fn store_tasks(&self, tasks: Vec<Task>) -> AppResult<usize>;
}

/// Roster storage.
pub trait DeveloperStore: Send + Sync {
    /// Every developer, in roster order.
    fn developers(&self) -> AppResult<Vec<Developer>>;
}

/// Destination for produced assignments.
pub trait AssignmentSink: Send + Sync {
    /// Persist one assignment.
    fn create_assignment(&self, assignment: Assignment) -> AppResult<()>;

    /// Persist a batch of assignments.
    fn create_batch_assignments(&self, assignments: Vec<Assignment>) -> AppResult<()> {
        for assignment in assignments {
            self.create_assignment(assignment)?;
        }
        Ok(())
    }
}
