//! Tests for the API response models

use backlog_planner::core::{Assignment, Developer, PlanReport, Task};
use backlog_planner::runtime::PlanResponse;

fn assignment(task_id: u64, developer_id: u64, week_number: u32, hours: f64) -> Assignment {
    Assignment {
        task: Task {
            id: task_id,
            external_id: task_id.to_string(),
            name: Some(format!("Task {task_id}")),
            difficulty: hours,
            estimated_duration: 1.0,
            source: "api".to_string(),
        },
        developer: Developer {
            id: developer_id,
            name: format!("Dev{developer_id}"),
            productivity: 1.0,
        },
        week_number,
        calculated_hours: hours,
    }
}

#[test]
fn test_response_groups_by_developer() {
    let assignments = vec![
        assignment(1, 2, 1, 10.0),
        assignment(2, 1, 1, 5.0),
        assignment(3, 2, 3, 20.0),
    ];
    let response = PlanResponse::from(&PlanReport::from_assignments(&assignments));

    assert_eq!(response.assignments.len(), 2);
    assert_eq!(response.assignments[0].len(), 2);
    assert_eq!(response.assignments[0][0].developer.id, 2);
    assert_eq!(response.assignments[0][1].task_name, "Task 3");
    assert_eq!(response.assignments[1].len(), 1);
    assert_eq!(response.total_hours, 35.0);
    assert_eq!(response.total_weeks, 3);
}

#[test]
fn test_response_json_field_names() {
    let response = PlanResponse::from(&PlanReport::from_assignments(&[assignment(1, 1, 2, 4.0)]));
    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["totalHours"], serde_json::json!(4.0));
    assert_eq!(json["totalWeeks"], serde_json::json!(2));
    assert_eq!(json["assignments"][0][0]["week_number"], serde_json::json!(2));
    assert_eq!(json["assignments"][0][0]["task_name"], serde_json::json!("Task 1"));
}
