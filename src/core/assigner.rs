//! Greedy best-fit placement of single tasks onto a roster.

use tracing::{debug, warn};

use crate::core::{Assignment, CapacityLedger, Developer, Task};

/// A feasible (developer, week) slot for one task.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Position of the developer in the roster.
    pub developer: usize,
    /// Earliest week the task fits for that developer.
    pub week: u32,
    /// Hours the task costs that developer.
    pub hours: f64,
    /// Week load after the task is added.
    pub resulting_load: f64,
}

impl Placement {
    /// Whether `self` should replace `best` as the leading candidate.
    ///
    /// Earlier week wins; within the same week the lighter resulting load
    /// wins. Exact ties keep the earlier roster entry.
    fn beats(&self, best: &Self) -> bool {
        self.week < best.week
            || (self.week == best.week && self.resulting_load < best.resulting_load)
    }
}

/// Owns a roster and its capacity ledger for the duration of one run.
#[derive(Debug, Clone)]
pub struct TaskAssigner {
    roster: Vec<Developer>,
    ledger: CapacityLedger,
}

impl TaskAssigner {
    /// Build an assigner with an empty ledger for `roster`.
    #[must_use]
    pub fn new(roster: Vec<Developer>, max_hours: f64) -> Self {
        let ledger = CapacityLedger::new(roster.len(), max_hours);
        Self { roster, ledger }
    }

    /// Build an assigner around an existing ledger.
    ///
    /// Developers beyond the ledger's tracked slots are never placed.
    #[must_use]
    pub fn with_ledger(roster: Vec<Developer>, ledger: CapacityLedger) -> Self {
        Self { roster, ledger }
    }

    /// Roster in evaluation order.
    #[must_use]
    pub fn roster(&self) -> &[Developer] {
        &self.roster
    }

    /// Current capacity ledger.
    #[must_use]
    pub const fn ledger(&self) -> &CapacityLedger {
        &self.ledger
    }

    /// Find the best slot for `task` without touching the ledger.
    #[must_use]
    pub fn find_best_fit(&self, task: &Task) -> Option<Placement> {
        let effort = task.effort();
        let mut best: Option<Placement> = None;

        for (index, developer) in self.roster.iter().enumerate() {
            let hours = developer.hours_needed(effort);
            let Some(week) = self.ledger.earliest_fit(index, hours) else {
                continue;
            };
            let candidate = Placement {
                developer: index,
                week,
                hours,
                resulting_load: self.ledger.load(index, week) + hours,
            };
            if best.is_some_and(|current| !candidate.beats(&current)) {
                continue;
            }
            if let Some(previous) = best {
                debug!(
                    task = %task.key(),
                    from = self.roster[previous.developer].id,
                    to = developer.id,
                    "best candidate changed"
                );
            }
            best = Some(candidate);
        }

        best
    }

    /// Place `task` and commit its hours, or report it as unplaceable.
    pub fn assign_task(&mut self, task: &Task) -> Option<Assignment> {
        let Some(placement) = self.find_best_fit(task) else {
            warn!(
                task = %task.key(),
                effort = task.effort(),
                "assignment can't be made to any developer, consider splitting the task"
            );
            return None;
        };

        if let Err(e) = self
            .ledger
            .commit(placement.developer, placement.week, placement.hours)
        {
            warn!(task = %task.key(), error = %e, "failed to commit placement");
            return None;
        }

        let developer = self.roster[placement.developer].clone();
        debug!(
            task_id = task.id,
            developer_id = developer.id,
            week = placement.week,
            hours = placement.hours,
            "task assigned"
        );

        Some(Assignment {
            task: task.clone(),
            developer,
            week_number: placement.week,
            calculated_hours: placement.hours,
        })
    }
}
