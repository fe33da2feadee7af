// ABOUTME: Tests for the in-memory synthetic sources and the demo bundle
// ABOUTME: Day-prefix metric semantics, per-account calendar filtering and failure injection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Daybrief Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{DateTime, NaiveDate};
use daybrief_core::constants::metrics;
use daybrief_core::errors::SourceError;
use daybrief_core::models::{CalendarAccount, TaskFilter};
use daybrief_providers::{
    CalendarSource, HealthSummarySource, MetricSample, MetricsSource, SyntheticCalendar,
    SyntheticMetricsStore, SyntheticSources, TaskSource, WorkoutSource,
};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn sample(metric: &str, timestamp: &str, value: f64) -> MetricSample {
    MetricSample {
        metric: metric.to_owned(),
        timestamp: timestamp.to_owned(),
        value,
    }
}

#[tokio::test]
async fn test_metrics_store_matches_sqlite_semantics() {
    let source = SyntheticMetricsStore::new(vec![
        sample(metrics::STEPS, "2024-01-15 09:00:00 +0700", 4000.0),
        sample(metrics::STEPS, "2024-01-15 17:00:00 +0700", 5000.0),
        sample(metrics::STEPS, "2024-01-16 09:00:00 +0700", 100.0),
        sample(metrics::SLEEP_DEEP, "2024-01-15 06:00:00 +0700", 0.9),
        sample(metrics::SLEEP_DEEP, "2024-01-15 06:30:00 +0700", 1.3),
    ]);
    let store = source.open().await.unwrap();
    let day = date("2024-01-15");

    assert_eq!(store.day_total(metrics::STEPS, day).await.unwrap(), Some(9000.0));
    assert_eq!(store.daily_average(metrics::STEPS, day).await.unwrap(), Some(4500.0));
    assert_eq!(store.latest_value(metrics::STEPS, day).await.unwrap(), Some(5000.0));
    assert_eq!(store.day_total(metrics::PROTEIN, day).await.unwrap(), None);

    let stages = store.sleep_stages(day).await.unwrap();
    assert_eq!(stages.deep_hours, Some(1.3));
    assert_eq!(stages.rem_hours, None);
}

#[tokio::test]
async fn test_calendar_failure_is_tagged_with_account_source() {
    let calendar = SyntheticCalendar::new()
        .with_failing_account("me@corp.example", SourceError::unavailable("calendar", "offline"));
    let error = calendar
        .events_for_date(&CalendarAccount::new("work", "me@corp.example"), date("2024-01-15"))
        .await
        .unwrap_err();
    assert_eq!(error.provider(), "calendar (work)");
}

#[tokio::test]
async fn test_demo_bundle_covers_every_source() {
    let now = DateTime::parse_from_rfc3339("2024-01-15T07:00:00+07:00").unwrap();
    let accounts = [
        CalendarAccount::new("personal", "demo-personal"),
        CalendarAccount::new("work", "demo-work"),
    ];
    let demo = SyntheticSources::demo(now, &accounts, "💊Meds");
    let today = date("2024-01-15");

    let snapshot = demo.health.latest_stats().await.unwrap();
    assert!(snapshot.value(metrics::SLEEP_TOTAL).is_some());

    let store = demo.metrics.open().await.unwrap();
    assert!(store
        .daily_average(metrics::HEART_RATE_VARIABILITY, today)
        .await
        .unwrap()
        .is_some());

    let personal = demo.calendar.events_for_date(&accounts[0], today).await.unwrap();
    assert_eq!(personal.iter().filter(|e| e.start.is_none()).count(), 1);
    let tomorrow = demo
        .calendar
        .events_for_date(&accounts[1], date("2024-01-16"))
        .await
        .unwrap();
    assert_eq!(tomorrow.len(), 1);

    assert_eq!(demo.tasks.tasks(TaskFilter::Today).await.unwrap().len(), 4);
    assert_eq!(
        demo.tasks.tasks(TaskFilter::DueOn(date("2024-01-16"))).await.unwrap().len(),
        2
    );
    assert_eq!(demo.workouts.recent_workouts(2).await.unwrap().len(), 2);
}
