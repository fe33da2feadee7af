// ABOUTME: Source names used to tag per-source warnings and log events
// ABOUTME: Keeps warning prefixes stable across providers and the fetch coordinator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Daybrief Contributors

/// Coarse "latest stats" health summary
pub const HEALTH_SUMMARY: &str = "health-ingest";
/// Fine-grained time-series metrics store
pub const METRICS_STORE: &str = "metrics store";
/// Calendar service (suffixed with the account source tag)
pub const CALENDAR: &str = "calendar";
/// Task tracker
pub const TASKS: &str = "todoist";
/// Workout log
pub const WORKOUTS: &str = "hevy";

/// Provider tag for one calendar account, e.g. `calendar (work)`
#[must_use]
pub fn calendar_account(source_tag: &str) -> String {
    format!("{CALENDAR} ({source_tag})")
}
