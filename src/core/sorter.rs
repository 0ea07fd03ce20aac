//! Backlog ordering strategies applied before scheduling.

use crate::config::SortStrategy;
use crate::core::Task;

/// Orders a backlog before it is fed to the scheduler.
///
/// Implementations must not mutate their input and must be deterministic for
/// deterministic input.
pub trait TaskSorter: Send + Sync {
    /// Return a newly ordered copy of `tasks`.
    fn sort(&self, tasks: &[Task]) -> Vec<Task>;
}

/// Largest effort first.
///
/// Ties keep their backlog order (stable sort), so equal-effort tasks are
/// scheduled in the order the store returned them.
#[derive(Debug, Clone, Copy, Default)]
pub struct EffortDescending;

impl TaskSorter for EffortDescending {
    fn sort(&self, tasks: &[Task]) -> Vec<Task> {
        let mut sorted = tasks.to_vec();
        sorted.sort_by(|a, b| b.effort().total_cmp(&a.effort()));
        sorted
    }
}

/// Keep the backlog exactly as fetched.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrivalOrder;

impl TaskSorter for ArrivalOrder {
    fn sort(&self, tasks: &[Task]) -> Vec<Task> {
        tasks.to_vec()
    }
}

/// Sorter implementing `strategy`.
#[must_use]
pub fn sorter_for(strategy: SortStrategy) -> Box<dyn TaskSorter> {
    match strategy {
        SortStrategy::EffortDesc => Box::new(EffortDescending),
        SortStrategy::Arrival => Box::new(ArrivalOrder),
    }
}
