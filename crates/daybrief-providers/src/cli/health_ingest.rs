// ABOUTME: Health summary provider backed by `health-ingest summary --json`
// ABOUTME: Parses the LatestStats map into a HealthSnapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Daybrief Contributors

use crate::command::CommandRunner;
use crate::core::HealthSummarySource;
use async_trait::async_trait;
use daybrief_core::constants::sources;
use daybrief_core::errors::{SourceError, SourceResult};
use daybrief_core::models::{HealthReading, HealthSnapshot};
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Deserialize)]
struct SummaryResponse {
    #[serde(rename = "LatestStats", default)]
    latest_stats: BTreeMap<String, StatEntry>,
}

#[derive(Debug, Deserialize)]
struct StatEntry {
    #[serde(rename = "Value")]
    value: f64,
    #[serde(rename = "Unit", default)]
    unit: String,
    #[serde(rename = "Timestamp", default)]
    timestamp: String,
}

/// Parse a `health-ingest summary --json` payload
///
/// # Errors
///
/// Returns `Malformed` when the payload is not the expected JSON shape
pub fn parse_summary(payload: &[u8]) -> SourceResult<HealthSnapshot> {
    let response: SummaryResponse = serde_json::from_slice(payload)
        .map_err(|e| SourceError::malformed(sources::HEALTH_SUMMARY, e))?;

    let latest = response
        .latest_stats
        .into_iter()
        .map(|(name, stat)| {
            (
                name,
                HealthReading {
                    value: stat.value,
                    unit: stat.unit,
                    timestamp: stat.timestamp,
                },
            )
        })
        .collect();

    Ok(HealthSnapshot { latest })
}

/// Health summary from the `health-ingest` CLI
#[derive(Debug, Clone)]
pub struct HealthIngestCli {
    program: String,
    runner: CommandRunner,
}

impl HealthIngestCli {
    /// Provider running `program`
    pub fn new(program: impl Into<String>, runner: CommandRunner) -> Self {
        Self {
            program: program.into(),
            runner,
        }
    }
}

#[async_trait]
impl HealthSummarySource for HealthIngestCli {
    async fn latest_stats(&self) -> SourceResult<HealthSnapshot> {
        let stdout = self
            .runner
            .run(sources::HEALTH_SUMMARY, &self.program, &["summary", "--json"])
            .await?;
        parse_summary(&stdout)
    }
}
