// ABOUTME: Calendar provider backed by `gog calendar events --account=<account> --json`
// ABOUTME: Keeps events starting on the requested date; all-day events carry no start time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Daybrief Contributors

use super::parse_rfc3339;
use crate::command::CommandRunner;
use crate::core::CalendarSource;
use async_trait::async_trait;
use chrono::NaiveDate;
use daybrief_core::constants::sources;
use daybrief_core::errors::{SourceError, SourceResult};
use daybrief_core::models::{CalendarAccount, CalendarEntry};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct EventsResponse {
    #[serde(default)]
    events: Vec<GogEvent>,
}

#[derive(Debug, Deserialize)]
struct GogEvent {
    #[serde(default)]
    start: GogEventStart,
    #[serde(default)]
    summary: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GogEventStart {
    #[serde(default)]
    date_time: String,
    #[serde(default)]
    date: String,
}

/// Parse a `gog calendar events` payload, keeping entries on `date`.
///
/// Timed events are kept when their start, in its own offset, falls on
/// `date`; all-day events when their `date` matches. Events with an
/// unparseable start are skipped.
///
/// # Errors
///
/// Returns `Malformed` (tagged with `provider`) when the payload is not the
/// expected JSON shape
pub fn parse_events(
    payload: &[u8],
    date: NaiveDate,
    provider: &str,
) -> SourceResult<Vec<CalendarEntry>> {
    let response: EventsResponse =
        serde_json::from_slice(payload).map_err(|e| SourceError::malformed(provider, e))?;

    let mut entries = Vec::with_capacity(response.events.len());
    for event in response.events {
        if event.start.date_time.is_empty() {
            if event.start.date.parse::<NaiveDate>().ok() == Some(date) {
                entries.push(CalendarEntry::all_day(event.summary));
            }
            continue;
        }
        let Some(start) = parse_rfc3339(&event.start.date_time) else {
            debug!(provider, raw = %event.start.date_time, "Skipping event with unparseable start");
            continue;
        };
        if start.date_naive() == date {
            entries.push(CalendarEntry::timed(start, event.summary));
        }
    }
    Ok(entries)
}

/// Calendar events from the `gog` CLI
#[derive(Debug, Clone)]
pub struct GogCalendarCli {
    program: String,
    runner: CommandRunner,
}

impl GogCalendarCli {
    /// Provider running `program`
    pub fn new(program: impl Into<String>, runner: CommandRunner) -> Self {
        Self {
            program: program.into(),
            runner,
        }
    }
}

#[async_trait]
impl CalendarSource for GogCalendarCli {
    async fn events_for_date(
        &self,
        account: &CalendarAccount,
        date: NaiveDate,
    ) -> SourceResult<Vec<CalendarEntry>> {
        let provider = sources::calendar_account(&account.source);
        let args = [
            "calendar".to_owned(),
            "events".to_owned(),
            format!("--account={}", account.account),
            "--json".to_owned(),
        ];
        let stdout = self.runner.run(&provider, &self.program, &args).await?;
        parse_events(&stdout, date, &provider)
    }
}
