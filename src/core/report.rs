//! Per-developer summaries of a finished plan.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::{Assignment, Developer};

/// Assignments of one developer together with their weekly totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeveloperPlan {
    /// The developer.
    pub developer: Developer,
    /// Assignments in plan order.
    pub assignments: Vec<Assignment>,
    /// Committed hours per week number.
    pub week_loads: BTreeMap<u32, f64>,
}

impl DeveloperPlan {
    /// Sum of the developer's calculated hours.
    #[must_use]
    pub fn total_hours(&self) -> f64 {
        self.week_loads.values().sum()
    }
}

/// A plan grouped by developer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlanReport {
    /// One entry per developer, in order of first appearance in the plan.
    pub developers: Vec<DeveloperPlan>,
    /// Sum of all calculated hours.
    pub total_hours: f64,
    /// Highest week number used, zero for an empty plan.
    pub total_weeks: u32,
}

impl PlanReport {
    /// Group `assignments` by developer and total them.
    #[must_use]
    pub fn from_assignments(assignments: &[Assignment]) -> Self {
        let mut report = Self::default();

        for assignment in assignments {
            let position = report
                .developers
                .iter()
                .position(|plan| plan.developer.id == assignment.developer.id);
            let plan = if let Some(index) = position {
                &mut report.developers[index]
            } else {
                report.developers.push(DeveloperPlan {
                    developer: assignment.developer.clone(),
                    assignments: Vec::new(),
                    week_loads: BTreeMap::new(),
                });
                let last = report.developers.len() - 1;
                &mut report.developers[last]
            };

            *plan.week_loads.entry(assignment.week_number).or_insert(0.0) +=
                assignment.calculated_hours;
            plan.assignments.push(assignment.clone());

            report.total_hours += assignment.calculated_hours;
            report.total_weeks = report.total_weeks.max(assignment.week_number);
        }

        report
    }

    /// Heaviest single developer week in the plan.
    #[must_use]
    pub fn peak_week_load(&self) -> f64 {
        self.developers
            .iter()
            .flat_map(|plan| plan.week_loads.values().copied())
            .fold(0.0, f64::max)
    }
}
