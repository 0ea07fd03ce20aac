//! API-facing response models for planning runs.

use serde::{Deserialize, Serialize};

use crate::core::{Assignment, Developer, PlanReport, Planner, PlannerError, Task};

/// One assignment as presented to API clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentView {
    /// 1-based week number.
    pub week_number: u32,
    /// Task display name.
    pub task_name: String,
    /// Hours the task costs the developer.
    pub calculated_hours: f64,
    /// The placed task.
    pub task: Task,
    /// The assigned developer.
    pub developer: Developer,
}

impl From<&Assignment> for AssignmentView {
    fn from(assignment: &Assignment) -> Self {
        Self {
            week_number: assignment.week_number,
            task_name: assignment.task.display_name(),
            calculated_hours: assignment.calculated_hours,
            task: assignment.task.clone(),
            developer: assignment.developer.clone(),
        }
    }
}

/// Plan response: one assignment list per developer plus totals.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlanResponse {
    /// Assignments grouped per developer.
    pub assignments: Vec<Vec<AssignmentView>>,
    /// Sum of calculated hours.
    #[serde(rename = "totalHours")]
    pub total_hours: f64,
    /// Highest week number used.
    #[serde(rename = "totalWeeks")]
    pub total_weeks: u32,
}

impl From<&PlanReport> for PlanResponse {
    fn from(report: &PlanReport) -> Self {
        Self {
            assignments: report
                .developers
                .iter()
                .map(|plan| plan.assignments.iter().map(AssignmentView::from).collect())
                .collect(),
            total_hours: report.total_hours,
            total_weeks: report.total_weeks,
        }
    }
}

/// Run a plan and shape it for API clients.
///
/// # Errors
///
/// Propagates the planner's run-level errors.
pub fn plan_response(planner: &Planner) -> Result<PlanResponse, PlannerError> {
    let assignments = planner.plan()?;
    Ok(PlanResponse::from(&PlanReport::from_assignments(&assignments)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_response_shape() {
        let response = PlanResponse::from(&PlanReport::default());
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["assignments"], serde_json::json!([]));
        assert_eq!(json["totalHours"], serde_json::json!(0.0));
        assert_eq!(json["totalWeeks"], serde_json::json!(0));
    }

    #[test]
    fn test_view_uses_display_name() {
        let assignment = Assignment {
            task: Task {
                id: 3,
                external_id: "12".into(),
                source: "tracker".into(),
                ..Task::default()
            },
            developer: Developer::default(),
            week_number: 2,
            calculated_hours: 4.0,
        };
        let view = AssignmentView::from(&assignment);
        assert_eq!(view.task_name, "Task tracker - 12");
        assert_eq!(view.week_number, 2);
    }
}
