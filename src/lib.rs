//! # Backlog Planner
//!
//! A capacity-aware weekly planner that packs a backlog of tasks onto a fixed
//! roster of developers.
//!
//! Every developer week holds at most [`core::MAX_HOURS_PER_WEEK`] hours. A
//! task costs `difficulty * estimated_duration / productivity` hours on a given
//! developer, and the planner places tasks greedily, largest effort first, on
//! the developer and week that fit them earliest.
//!
//! ## Key Features
//!
//! - **Best-fit placement**: earliest feasible week wins, then the lighter
//!   resulting week load, then roster order
//! - **Single-owner scheduling state**: a coordinator thread owns the capacity
//!   ledger and is driven over rendezvous channels, one task in flight
//! - **Serialized runs**: each planner runs one plan at a time and starts a
//!   fresh pipeline per run
//! - **Source ingestion**: HTTP task sources fetched concurrently, tolerant of
//!   individual source failures
//!
//! ## Planning
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use backlog_planner::core::{Planner, PlanReport};
//! use backlog_planner::infra::InMemoryStore;
//!
//! let store = Arc::new(InMemoryStore::new());
//! store.seed_developers(false);
//!
//! let planner = Planner::new(store.clone(), store.clone());
//! let assignments = planner.plan()?;
//! let report = PlanReport::from_assignments(&assignments);
//! println!("{} hours over {} weeks", report.total_hours, report.total_weeks);
//! ```
//!
//! ## Ingestion
//!
//! ```rust,ignore
//! use backlog_planner::builders::build_sources;
//! use backlog_planner::config::PlanningConfig;
//! use backlog_planner::runtime::ingest;
//!
//! let cfg = PlanningConfig::from_json_str(&std::fs::read_to_string("planner.json")?)?;
//! let sources = build_sources(&cfg)?;
//! let inserted = ingest(&sources, store.as_ref()).await?;
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Core planning abstractions and capacity accounting.
pub mod core;
/// Configuration models for the planner and task sources.
pub mod config;
/// Builders to construct planner components from configuration.
pub mod builders;
/// Infrastructure adapters for storage and task sources.
pub mod infra;
/// Runtime entry points and API surface.
pub mod runtime;
/// Shared utilities.
pub mod util;
