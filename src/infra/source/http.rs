//! HTTP task sources serving JSON arrays of task records.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, error};

use crate::config::{SourceConfig, SourceFormat};
use crate::core::{AppResult, PlannerError, Task};

use super::TaskSource;

#[derive(Debug, Deserialize)]
struct StandardRecord {
    id: u64,
    value: f64,
    estimated_duration: f64,
}

#[derive(Debug, Deserialize)]
struct LocalizedRecord {
    id: u64,
    zorluk: f64,
    sure: f64,
}

fn fetched_task(source: &str, id: u64, difficulty: f64, duration: f64) -> Task {
    Task {
        id: 0,
        external_id: id.to_string(),
        name: Some(format!("{} Task {id}", title_case(source))),
        difficulty,
        estimated_duration: duration,
        source: source.to_string(),
    }
}

fn title_case(source: &str) -> String {
    source
        .split(['-', '_', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Decode a JSON array of `format` records into unstored tasks of `source`.
///
/// # Errors
///
/// Returns an error if `body` is not an array of the expected records.
pub fn decode_records(source: &str, format: SourceFormat, body: &str) -> AppResult<Vec<Task>> {
    let tasks = match format {
        SourceFormat::Standard => serde_json::from_str::<Vec<StandardRecord>>(body)?
            .into_iter()
            .map(|r| fetched_task(source, r.id, r.value, r.estimated_duration))
            .collect(),
        SourceFormat::Localized => serde_json::from_str::<Vec<LocalizedRecord>>(body)?
            .into_iter()
            .map(|r| fetched_task(source, r.id, r.zorluk, r.sure))
            .collect(),
    };
    Ok(tasks)
}

/// Task source reached over HTTP GET.
pub struct HttpTaskSource {
    name: String,
    url: String,
    format: SourceFormat,
    client: reqwest::Client,
}

impl HttpTaskSource {
    /// Create a source from its configuration.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::Source` if the HTTP client cannot be built.
    pub fn new(config: &SourceConfig) -> Result<Self, PlannerError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| PlannerError::Source {
                source_name: config.name.clone(),
                reason: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            name: config.name.clone(),
            url: config.url.clone(),
            format: config.format,
            client,
        })
    }
}

#[async_trait]
impl TaskSource for HttpTaskSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch_tasks(&self) -> AppResult<Vec<Task>> {
        debug!(source = %self.name, url = %self.url, "fetching tasks");

        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if status != reqwest::StatusCode::OK {
            error!(source = %self.name, status = %status, "unexpected status code");
            anyhow::bail!("unexpected status code {status}");
        }

        let body = response.text().await?;
        decode_records(&self.name, self.format, &body)
    }
}
