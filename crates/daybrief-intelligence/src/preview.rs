// ABOUTME: Tomorrow preview: earliest event, workout keyword heuristic and meds due
// ABOUTME: Events are merged across accounts and ordered by parsed start time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Daybrief Contributors

use daybrief_core::constants::calendar::TIME_FORMAT;
use daybrief_core::models::{CalendarEntry, EventInfo, Task};

/// Earliest timed entry by parsed start; ties keep the first fetched.
/// All-day entries are ignored.
#[must_use]
pub fn first_event(entries: &[CalendarEntry]) -> Option<EventInfo> {
    entries
        .iter()
        .filter_map(|entry| entry.start.map(|start| (start, entry)))
        .min_by_key(|(start, _)| *start)
        .map(|(start, entry)| EventInfo {
            time: start.format(TIME_FORMAT).to_string(),
            summary: entry.summary.clone(),
        })
}

/// Whether any timed entry's summary contains a workout keyword
/// (case-insensitive substring match).
///
/// Heuristic: "Gymnastics recital" matches, "Leg day" does not.
#[must_use]
pub fn workout_scheduled<S: AsRef<str>>(entries: &[CalendarEntry], keywords: &[S]) -> bool {
    entries
        .iter()
        .filter(|entry| entry.start.is_some())
        .any(|entry| {
            let summary = entry.summary.to_lowercase();
            keywords
                .iter()
                .any(|keyword| summary.contains(&keyword.as_ref().to_lowercase()))
        })
}

/// Names of med/protocol tasks among `tasks`
#[must_use]
pub fn meds_due<S: AsRef<str>>(tasks: &[Task], med_labels: &[S]) -> Vec<String> {
    tasks
        .iter()
        .filter(|task| task.has_any_label(med_labels))
        .map(|task| task.content.clone())
        .collect()
}
