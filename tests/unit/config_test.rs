//! Tests for configuration validation

use backlog_planner::config::{
    PlannerConfig, PlanningConfig, SortStrategy, SourceConfig, SourceFormat,
};

fn source(name: &str) -> SourceConfig {
    SourceConfig {
        name: name.to_string(),
        url: format!("http://localhost:8080/{name}"),
        format: SourceFormat::Standard,
        timeout_secs: 15,
    }
}

#[test]
fn test_planner_config_validation() {
    assert!(PlannerConfig::default().validate().is_ok());

    let invalid = PlannerConfig {
        max_hours_per_week: 0.0,
        ..PlannerConfig::default()
    };
    assert!(invalid.validate().is_err());

    let invalid = PlannerConfig {
        max_hours_per_week: f64::NAN,
        ..PlannerConfig::default()
    };
    assert!(invalid.validate().is_err());

    let invalid = PlannerConfig {
        result_timeout_ms: Some(0),
        ..PlannerConfig::default()
    };
    assert!(invalid.validate().is_err());
}

#[test]
fn test_source_config_validation() {
    assert!(source("mock-one").validate().is_ok());

    let mut invalid = source("mock-one");
    invalid.url = " ".to_string();
    assert!(invalid.validate().is_err());

    let mut invalid = source("mock-one");
    invalid.timeout_secs = 0;
    assert!(invalid.validate().is_err());
}

#[test]
fn test_duplicate_source_names_rejected() {
    let cfg = PlanningConfig {
        planner: PlannerConfig::default(),
        sources: vec![source("mock-one"), source("mock-one")],
    };
    let err = cfg.validate().unwrap_err();
    assert!(err.contains("duplicate"));
}

#[test]
fn test_planning_config_from_json() {
    let json = r#"{
        "planner": { "max_hours_per_week": 40, "sort": "arrival", "save_assignments": true },
        "sources": [
            { "name": "mock-one", "url": "http://localhost:8080/one", "format": "standard" },
            { "name": "mock-two", "url": "http://localhost:8080/two", "format": "localized", "timeout_secs": 5 }
        ]
    }"#;

    let cfg = PlanningConfig::from_json_str(json).unwrap();
    assert_eq!(cfg.planner.max_hours_per_week, 40.0);
    assert_eq!(cfg.planner.sort, SortStrategy::Arrival);
    assert!(cfg.planner.save_assignments);
    assert_eq!(cfg.planner.shutdown_grace_ms, 100);
    assert_eq!(cfg.sources.len(), 2);
    assert_eq!(cfg.sources[0].timeout_secs, 15);
    assert_eq!(cfg.sources[1].format, SourceFormat::Localized);
}

#[test]
fn test_planning_config_from_json_errors() {
    assert!(PlanningConfig::from_json_str("not json").is_err());
    assert!(PlanningConfig::from_json_str(r#"{"planner": {"shutdown_grace_ms": 0}}"#).is_err());

    let cfg = PlanningConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, PlanningConfig::default());
}
