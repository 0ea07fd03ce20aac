//! Builders to construct planner components from configuration.

pub mod planner_builder;

pub use planner_builder::{build_planner, build_sorter, build_sources};
