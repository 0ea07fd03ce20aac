//! Tests for error types

use std::time::Duration;

use backlog_planner::core::PlannerError;

#[test]
fn test_fetch_errors() {
    let err = PlannerError::DeveloperFetch("developer service error".to_string());
    assert_eq!(
        format!("{}", err),
        "failed to get developers: developer service error"
    );

    let err = PlannerError::TaskFetch("task service error".to_string());
    assert_eq!(format!("{}", err), "failed to get tasks: task service error");
}

#[test]
fn test_pipeline_errors() {
    assert_eq!(
        format!("{}", PlannerError::PipelineClosed),
        "scheduling pipeline closed"
    );
    let err = PlannerError::PipelineTimeout(Duration::from_millis(250));
    assert_eq!(format!("{}", err), "scheduling pipeline timed out after 250ms");
}

#[test]
fn test_capacity_exceeded_error() {
    let err = PlannerError::CapacityExceeded {
        week: 2,
        load: 40.0,
        hours: 10.0,
    };
    assert_eq!(
        format!("{}", err),
        "capacity exceeded: week 2 has 40h, cannot add 10h"
    );
}

#[test]
fn test_source_error() {
    let err = PlannerError::Source {
        source_name: "mock-one".to_string(),
        reason: "connection refused".to_string(),
    };
    assert_eq!(
        format!("{}", err),
        "task source `mock-one` failed: connection refused"
    );
}

#[test]
fn test_converts_into_anyhow() {
    let err: anyhow::Error = PlannerError::InvalidConfig("bad".to_string()).into();
    assert_eq!(err.to_string(), "invalid configuration: bad");
    assert!(err.downcast_ref::<PlannerError>().is_some());
}
