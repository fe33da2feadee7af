// ABOUTME: Calendar accounts, raw entries, and time-of-day bucketed report events
// ABOUTME: Morning is before noon, afternoon is noon to 18:00; all-day events are excluded
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Daybrief Contributors

use crate::constants::calendar::{AFTERNOON_END_HOUR, MORNING_END_HOUR, TIME_FORMAT};
use chrono::{DateTime, FixedOffset, Timelike};
use serde::{Deserialize, Serialize};

/// One calendar account queried as part of the calendar source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarAccount {
    /// Source tag shown on events (e.g. "personal", "work")
    pub source: String,
    /// Account identifier passed to the calendar service
    pub account: String,
}

impl CalendarAccount {
    /// Create an account entry
    pub fn new(source: impl Into<String>, account: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            account: account.into(),
        }
    }
}

/// Event as returned by the calendar source for a given date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEntry {
    /// Start instant; `None` for all-day events
    pub start: Option<DateTime<FixedOffset>>,
    /// Title
    pub summary: String,
}

impl CalendarEntry {
    /// Timed entry
    pub fn timed(start: DateTime<FixedOffset>, summary: impl Into<String>) -> Self {
        Self {
            start: Some(start),
            summary: summary.into(),
        }
    }

    /// All-day entry
    pub fn all_day(summary: impl Into<String>) -> Self {
        Self {
            start: None,
            summary: summary.into(),
        }
    }
}

/// Event in the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// Start time of day (`HH:MM`, in the event's own offset)
    pub time: String,
    /// Title
    pub summary: String,
    /// Account source tag (personal or work)
    pub source: String,
}

/// Earliest event of a day, used by the tomorrow preview
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventInfo {
    /// Start time of day (`HH:MM`)
    pub time: String,
    /// Title
    pub summary: String,
}

/// Calendar section of the morning report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarData {
    /// Events starting before noon
    pub morning_events: Vec<CalendarEvent>,
    /// Events starting between noon and 18:00
    pub afternoon_events: Vec<CalendarEvent>,
    /// Number of morning events
    pub morning_count: usize,
    /// Time of the first morning event in source order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_event_time: Option<String>,
}

impl CalendarData {
    /// Bucket the concatenated per-account results.
    ///
    /// Ordering within a bucket follows account order and then source order;
    /// it is not re-sorted chronologically.
    #[must_use]
    pub fn from_accounts<'a, I>(accounts: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a [CalendarEntry])>,
    {
        let mut data = Self::default();
        for (source, entries) in accounts {
            for entry in entries {
                let Some(start) = entry.start else {
                    continue;
                };
                let event = CalendarEvent {
                    time: start.format(TIME_FORMAT).to_string(),
                    summary: entry.summary.clone(),
                    source: source.to_owned(),
                };
                let hour = start.hour();
                if hour < MORNING_END_HOUR {
                    data.morning_events.push(event);
                } else if hour < AFTERNOON_END_HOUR {
                    data.afternoon_events.push(event);
                }
            }
        }
        data.morning_count = data.morning_events.len();
        data.first_event_time = data.morning_events.first().map(|event| event.time.clone());
        data
    }
}
