// ABOUTME: Shared test utilities and fixtures for the daybrief integration tests
// ABOUTME: Quiet tracing setup, date/instant helpers and synthetic source builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Daybrief Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `daybrief`

use chrono::{DateTime, FixedOffset, NaiveDate};
use daybrief::briefing::{BriefingContext, Sources};
use daybrief::config::BriefingConfig;
use daybrief_core::models::{CalendarAccount, Task, TaskDue, Workout};
use daybrief_providers::{
    MetricSample, SyntheticCalendar, SyntheticHealthSummary, SyntheticMetricsStore,
    SyntheticSources, SyntheticTasks, SyntheticWorkouts,
};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

pub const MED_LABEL: &str = "💊Meds";

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub fn at(s: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(s).unwrap()
}

/// 2024-01-15 07:00 +07:00
pub fn morning_context() -> BriefingContext {
    BriefingContext::new(date("2024-01-15"), at("2024-01-15T07:00:00+07:00"))
}

/// 2024-01-15 21:00 +07:00
pub fn evening_context() -> BriefingContext {
    BriefingContext::new(date("2024-01-15"), at("2024-01-15T21:00:00+07:00"))
}

/// Default profile with the given calendar accounts
pub fn config_with_accounts(accounts: &[(&str, &str)]) -> BriefingConfig {
    BriefingConfig {
        calendar_accounts: accounts
            .iter()
            .map(|(source, account)| CalendarAccount::new(*source, *account))
            .collect(),
        ..BriefingConfig::default()
    }
}

pub fn sample(metric: &str, timestamp: &str, value: f64) -> MetricSample {
    MetricSample {
        metric: metric.to_owned(),
        timestamp: timestamp.to_owned(),
        value,
    }
}

pub fn task(content: &str, label: &str, done: bool, due: &str) -> Task {
    Task {
        content: content.to_owned(),
        labels: vec![label.to_owned()],
        is_completed: done,
        due: Some(TaskDue {
            date: Some(date(due)),
            datetime: None,
        }),
    }
}

pub fn workout(id: &str, title: &str, start: &str) -> Workout {
    Workout {
        id: id.to_owned(),
        title: title.to_owned(),
        start_time: Some(at(start)),
        duration: "1h0m".to_owned(),
        exercises: vec!["Squat".to_owned()],
    }
}

/// Healthy, fully populated sources for 2024-01-15 with a `personal` account
pub fn healthy_sources() -> SyntheticSources {
    SyntheticSources {
        health: SyntheticHealthSummary::default()
            .with_reading("sleep_total", 7.5, "hr", "2024-01-15 06:00:00 +0700")
            .with_reading("sleep_deep", 1.2, "hr", "2024-01-15 06:00:00 +0700")
            .with_reading("resting_heart_rate", 52.0, "count/min", "2024-01-15 06:00:00 +0700")
            .with_reading("heart_rate_variability", 30.0, "ms", "2024-01-15 06:00:00 +0700")
            .with_reading("blood_oxygen_saturation", 97.0, "%", "2024-01-15 06:00:00 +0700"),
        metrics: SyntheticMetricsStore::new(vec![
            sample("heart_rate_variability", "2024-01-15 02:00:00 +0700", 42.0),
            sample("heart_rate_variability", "2024-01-15 05:00:00 +0700", 48.0),
            sample("sleep_deep", "2024-01-15 06:00:00 +0700", 1.4),
            sample("sleep_core", "2024-01-15 06:00:00 +0700", 4.2),
            sample("respiratory_rate", "2024-01-15 06:00:00 +0700", 14.0),
        ]),
        calendar: SyntheticCalendar::new()
            .with_event("me@example.com", at("2024-01-15T09:00:00+07:00"), "School run")
            .with_event("me@example.com", at("2024-01-15T13:00:00+07:00"), "Lunch"),
        tasks: SyntheticTasks::new(vec![
            task("Vitamin D", MED_LABEL, true, "2024-01-15"),
            task("Magnesium", MED_LABEL, false, "2024-01-15"),
            task("Omega-3", MED_LABEL, false, "2024-01-14"),
            task("Groceries", "errands", false, "2024-01-15"),
        ]),
        workouts: SyntheticWorkouts::new(vec![
            workout("w2", "Upper Body", "2024-01-14T17:30:00+07:00"),
            workout("w1", "Lower Body", "2024-01-11T17:30:00+07:00"),
        ]),
    }
}

pub fn into_sources(sources: SyntheticSources) -> Sources {
    Sources::synthetic(sources)
}
