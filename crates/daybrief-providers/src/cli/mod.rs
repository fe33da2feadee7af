// ABOUTME: CLI-backed source providers and their payload parsers
// ABOUTME: health-ingest summary, gog calendar, td task tracker, and hevy workouts via mcporter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Daybrief Contributors

//! Each provider runs one external command per query and converts its JSON
//! payload into shared models. Parsers are exposed as plain functions so they
//! can be exercised without spawning processes.

/// Calendar events via `gog calendar events`
pub mod gog;
/// Health summary via `health-ingest summary`
pub mod health_ingest;
/// Workouts via `mcporter call hevy.get-workouts`
pub mod hevy;
/// Tasks via `td today` and `td filter`
pub mod todoist;

pub use gog::GogCalendarCli;
pub use health_ingest::HealthIngestCli;
pub use hevy::HevyCli;
pub use todoist::TodoistCli;

use chrono::{DateTime, FixedOffset};

/// Parse an RFC 3339 timestamp, returning `None` for empty or invalid input
pub(crate) fn parse_rfc3339(value: &str) -> Option<DateTime<FixedOffset>> {
    if value.is_empty() {
        return None;
    }
    DateTime::parse_from_rfc3339(value).ok()
}
