//! Tests for builder modules

use std::sync::Arc;

use backlog_planner::builders::{build_planner, build_sorter, build_sources};
use backlog_planner::config::{
    PlannerConfig, PlanningConfig, SortStrategy, SourceConfig, SourceFormat,
};
use backlog_planner::core::{AssignmentSink, PlannerError, Task, TaskSorter};
use backlog_planner::infra::InMemoryStore;

fn task(id: u64, effort: f64) -> Task {
    Task {
        id,
        external_id: id.to_string(),
        difficulty: effort,
        estimated_duration: 1.0,
        source: "builder".to_string(),
        ..Task::default()
    }
}

#[test]
fn test_build_sorter_strategies() {
    let backlog = vec![task(1, 2.0), task(2, 8.0), task(3, 5.0)];

    let ids = |tasks: Vec<Task>| tasks.iter().map(|t| t.id).collect::<Vec<_>>();
    assert_eq!(ids(build_sorter(SortStrategy::EffortDesc).sort(&backlog)), vec![2, 3, 1]);
    assert_eq!(ids(build_sorter(SortStrategy::Arrival).sort(&backlog)), vec![1, 2, 3]);
}

#[test]
fn test_build_planner_applies_config() {
    let store = Arc::new(InMemoryStore::new());
    let cfg = PlanningConfig {
        planner: PlannerConfig {
            max_hours_per_week: 30.0,
            ..PlannerConfig::default()
        },
        sources: Vec::new(),
    };

    let sink: Arc<dyn AssignmentSink> = store.clone();
    let planner = build_planner(&cfg, store.clone(), store, Some(sink)).unwrap();
    assert_eq!(planner.config().max_hours_per_week, 30.0);
}

#[test]
fn test_build_planner_rejects_invalid_config() {
    let store = Arc::new(InMemoryStore::new());
    let cfg = PlanningConfig {
        planner: PlannerConfig {
            shutdown_grace_ms: 0,
            ..PlannerConfig::default()
        },
        sources: Vec::new(),
    };

    let result = build_planner(&cfg, store.clone(), store, None);
    assert!(matches!(result, Err(PlannerError::InvalidConfig(_))));
}

#[test]
fn test_build_sources() {
    let cfg = PlanningConfig {
        planner: PlannerConfig::default(),
        sources: vec![
            SourceConfig {
                name: "mock-one".to_string(),
                url: "http://localhost:8080/one".to_string(),
                format: SourceFormat::Standard,
                timeout_secs: 15,
            },
            SourceConfig {
                name: "mock-two".to_string(),
                url: "http://localhost:8080/two".to_string(),
                format: SourceFormat::Localized,
                timeout_secs: 15,
            },
        ],
    };

    let sources = build_sources(&cfg).unwrap();
    assert_eq!(sources.len(), 2);
    assert!(build_sources(&PlanningConfig::default()).unwrap().is_empty());
}
