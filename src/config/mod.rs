//! Configuration models for the planner and its task sources.

pub mod planner;

pub use planner::{PlannerConfig, PlanningConfig, SortStrategy, SourceConfig, SourceFormat};
