//! Tests for utility functions

use backlog_planner::util::{init_tracing, init_tracing_with, DEFAULT_FILTER};

#[test]
fn test_default_filter_targets_crate() {
    assert!(DEFAULT_FILTER.starts_with("backlog_planner="));
}

#[test]
fn test_init_tracing_is_idempotent() {
    init_tracing();
    init_tracing();
    init_tracing_with("backlog_planner=debug");
    tracing::info!("tracing initialized");
}
