//! Planner and task source configuration structures.

use std::collections::HashSet;
use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::MAX_HOURS_PER_WEEK;

/// Backlog ordering applied before scheduling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortStrategy {
    /// Largest effort first.
    #[default]
    EffortDesc,
    /// Keep the order the task store returns.
    Arrival,
}

impl SortStrategy {
    fn parse(value: &str) -> Result<Self, String> {
        match value.trim().to_ascii_lowercase().as_str() {
            "effort_desc" => Ok(Self::EffortDesc),
            "arrival" => Ok(Self::Arrival),
            other => Err(format!("unknown sort strategy `{other}`")),
        }
    }
}

/// Record layout served by a task source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceFormat {
    /// `{ "id", "value", "estimated_duration" }`.
    Standard,
    /// `{ "id", "zorluk", "sure" }`.
    Localized,
}

/// Planner tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Hour ceiling of a developer week.
    pub max_hours_per_week: f64,
    /// Grace period granted to the coordinator after the stop signal.
    pub shutdown_grace_ms: u64,
    /// Upper bound on waiting for one task's result; unset waits forever.
    pub result_timeout_ms: Option<u64>,
    /// Backlog ordering.
    pub sort: SortStrategy,
    /// Persist produced assignments through the attached sink.
    pub save_assignments: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_hours_per_week: MAX_HOURS_PER_WEEK,
            shutdown_grace_ms: 100,
            result_timeout_ms: None,
            sort: SortStrategy::EffortDesc,
            save_assignments: false,
        }
    }
}

impl PlannerConfig {
    /// Validate planner configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if !self.max_hours_per_week.is_finite() || self.max_hours_per_week <= 0.0 {
            return Err("max_hours_per_week must be a positive number".into());
        }
        if self.shutdown_grace_ms == 0 {
            return Err("shutdown_grace_ms must be greater than 0".into());
        }
        if self.result_timeout_ms == Some(0) {
            return Err("result_timeout_ms must be greater than 0 when set".into());
        }
        Ok(())
    }

    /// Grace period as a `Duration`.
    #[must_use]
    pub const fn shutdown_grace(&self) -> Duration {
        Duration::from_millis(self.shutdown_grace_ms)
    }

    /// Result timeout as a `Duration`, if any.
    #[must_use]
    pub fn result_timeout(&self) -> Option<Duration> {
        self.result_timeout_ms.map(Duration::from_millis)
    }

    /// Build from `PLANNER_*` environment variables, loading `.env` if present.
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, String> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup using the `PLANNER_*` names.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(v) = lookup("PLANNER_MAX_HOURS_PER_WEEK") {
            cfg.max_hours_per_week = parse_var("PLANNER_MAX_HOURS_PER_WEEK", &v)?;
        }
        if let Some(v) = lookup("PLANNER_SHUTDOWN_GRACE_MS") {
            cfg.shutdown_grace_ms = parse_var("PLANNER_SHUTDOWN_GRACE_MS", &v)?;
        }
        if let Some(v) = lookup("PLANNER_RESULT_TIMEOUT_MS") {
            cfg.result_timeout_ms = Some(parse_var("PLANNER_RESULT_TIMEOUT_MS", &v)?);
        }
        if let Some(v) = lookup("PLANNER_SORT") {
            cfg.sort = SortStrategy::parse(&v)?;
        }
        if let Some(v) = lookup("PLANNER_SAVE_ASSIGNMENTS") {
            cfg.save_assignments = parse_var("PLANNER_SAVE_ASSIGNMENTS", &v)?;
        }
        cfg.validate()?;
        Ok(cfg)
    }
}

fn parse_var<T>(key: &str, value: &str) -> Result<T, String>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| format!("{key}: cannot parse `{value}`: {e}"))
}

const fn default_source_timeout_secs() -> u64 {
    15
}

/// One external task source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Unique source name, stored on every fetched task.
    pub name: String,
    /// Endpoint returning a JSON array of records.
    pub url: String,
    /// Record layout.
    pub format: SourceFormat,
    /// Request timeout in seconds.
    #[serde(default = "default_source_timeout_secs")]
    pub timeout_secs: u64,
}

impl SourceConfig {
    /// Validate source configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("source name must not be empty".into());
        }
        if self.url.trim().is_empty() {
            return Err(format!("source `{}` has an empty url", self.name));
        }
        if self.timeout_secs == 0 {
            return Err(format!("source `{}`: timeout_secs must be greater than 0", self.name));
        }
        Ok(())
    }
}

/// Root configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanningConfig {
    /// Planner tuning.
    pub planner: PlannerConfig,
    /// Task sources used for ingestion.
    pub sources: Vec<SourceConfig>,
}

impl PlanningConfig {
    /// Validate the planner and every source, and require unique source names.
    pub fn validate(&self) -> Result<(), String> {
        self.planner
            .validate()
            .map_err(|e| format!("planner invalid: {e}"))?;
        let mut seen = HashSet::new();
        for source in &self.sources {
            source.validate()?;
            if !seen.insert(source.name.as_str()) {
                return Err(format!("duplicate source name `{}`", source.name));
            }
        }
        Ok(())
    }

    /// Parse planning configuration from a JSON string and validate.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }
}
