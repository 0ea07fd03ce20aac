//! In-memory store backing tasks, developers and assignments.

use std::collections::HashSet;

use parking_lot::RwLock;
use tracing::{debug, info};

use crate::core::{
    AppResult, Assignment, AssignmentSink, Developer, DeveloperStore, Task, TaskKey, TaskStore,
};

#[derive(Debug, Default)]
struct Tables {
    tasks: Vec<Task>,
    keys: HashSet<TaskKey>,
    next_task_id: u64,
    developers: Vec<Developer>,
    assignments: Vec<Assignment>,
}

/// Simple in-memory store for development and testing.
///
/// Tasks are unique by `(source, external_id)` and receive sequential ids
/// starting at 1 on insertion.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `developers` as its roster.
    #[must_use]
    pub fn with_developers(developers: Vec<Developer>) -> Self {
        let store = Self::new();
        store.tables.write().developers = developers;
        store
    }

    /// Install the default five-developer roster.
    ///
    /// Existing developers are kept unless `force` is set, in which case they
    /// are replaced. Returns whether the roster was written.
    pub fn seed_developers(&self, force: bool) -> bool {
        let mut tables = self.tables.write();
        if !tables.developers.is_empty() && !force {
            info!(
                developers = tables.developers.len(),
                "developers already exist, skipping seed"
            );
            return false;
        }
        tables.developers = default_roster();
        info!(developers = tables.developers.len(), "seeded developer roster");
        true
    }

    /// Every persisted assignment.
    #[must_use]
    pub fn assignments(&self) -> Vec<Assignment> {
        self.tables.read().assignments.clone()
    }
}

/// Five developers named `Dev1`..`Dev5` with productivity 1.0 through 5.0.
#[must_use]
pub fn default_roster() -> Vec<Developer> {
    (1..=5u32)
        .map(|n| Developer {
            id: u64::from(n),
            name: format!("Dev{n}"),
            productivity: f64::from(n),
        })
        .collect()
}

impl TaskStore for InMemoryStore {
    fn tasks(&self) -> AppResult<Vec<Task>> {
        Ok(self.tables.read().tasks.clone())
    }

    fn store_tasks(&self, tasks: Vec<Task>) -> AppResult<usize> {
        let mut tables = self.tables.write();
        let mut inserted = 0;
        for mut task in tasks {
            if !tables.keys.insert(task.key()) {
                debug!(task = %task.key(), "task already stored");
                continue;
            }
            tables.next_task_id += 1;
            task.id = tables.next_task_id;
            tables.tasks.push(task);
            inserted += 1;
        }
        Ok(inserted)
    }
}

impl DeveloperStore for InMemoryStore {
    fn developers(&self) -> AppResult<Vec<Developer>> {
        Ok(self.tables.read().developers.clone())
    }
}

impl AssignmentSink for InMemoryStore {
    fn create_assignment(&self, assignment: Assignment) -> AppResult<()> {
        self.tables.write().assignments.push(assignment);
        Ok(())
    }

    fn create_batch_assignments(&self, assignments: Vec<Assignment>) -> AppResult<()> {
        self.tables.write().assignments.extend(assignments);
        Ok(())
    }
}
