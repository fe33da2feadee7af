// ABOUTME: Integration tests for the evening wrap-up pipeline over synthetic sources
// ABOUTME: Energy and protein from day totals, recovery, protocols and the tomorrow preview
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Daybrief Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{
    at, config_with_accounts, date, evening_context, init_test_logging, into_sources, sample,
    task, workout, MED_LABEL,
};
use daybrief::briefing::build_evening_report;
use daybrief_core::errors::SourceError;
use daybrief_core::models::{EnergyStatus, UserProfile};
use daybrief_providers::{
    SyntheticCalendar, SyntheticHealthSummary, SyntheticMetricsStore, SyntheticSources,
    SyntheticTasks, SyntheticWorkouts,
};

const PERSONAL: (&str, &str) = ("personal", "me@example.com");
const WORK: (&str, &str) = ("work", "me@corp.example");

fn evening_sources() -> SyntheticSources {
    SyntheticSources {
        health: SyntheticHealthSummary::default(),
        metrics: SyntheticMetricsStore::new(vec![
            sample("active_energy", "2024-01-15 12:00:00 +0700", 300.0),
            sample("active_energy", "2024-01-15 18:00:00 +0700", 311.0),
            sample("dietary_energy", "2024-01-15 13:00:00 +0700", 1850.0),
            sample("protein", "2024-01-15 08:00:00 +0700", 44.4),
            sample("protein", "2024-01-15 13:00:00 +0700", 100.0),
            sample("steps", "2024-01-15 18:00:00 +0700", 9412.6),
            sample("stand_hours", "2024-01-15 18:00:00 +0700", 11.0),
            sample("heart_rate_variability", "2024-01-15 02:00:00 +0700", 40.0),
            sample("heart_rate_variability", "2024-01-15 05:00:00 +0700", 50.0),
            sample("heart_rate_variability", "2024-01-14 05:00:00 +0700", 38.0),
            sample("resting_heart_rate", "2024-01-15 04:00:00 +0700", 55.0),
            sample("resting_heart_rate", "2024-01-15 06:00:00 +0700", 53.0),
            sample("sleep_total", "2024-01-15 06:00:00 +0700", 7.2),
            sample("sleep_deep", "2024-01-15 06:00:00 +0700", 1.1),
        ]),
        calendar: SyntheticCalendar::new()
            .with_event(PERSONAL.1, at("2024-01-15T19:00:00+07:00"), "Dinner")
            .with_event(PERSONAL.1, at("2024-01-16T10:00:00+07:00"), "Dentist")
            .with_all_day_event(PERSONAL.1, date("2024-01-16"), "Gym closed")
            .with_event(WORK.1, at("2024-01-16T08:30:00+07:00"), "Gym session"),
        tasks: SyntheticTasks::new(vec![
            task("Vitamin D", MED_LABEL, true, "2024-01-15"),
            task("Magnesium", MED_LABEL, false, "2024-01-15"),
            task("Omega-3", MED_LABEL, false, "2024-01-16"),
            task("Groceries", "errands", false, "2024-01-15"),
        ])
        .with_scheduled(vec![
            task("Vitamin D", MED_LABEL, false, "2024-01-16"),
            task("Call mom", "family", false, "2024-01-16"),
        ]),
        workouts: SyntheticWorkouts::new(vec![
            workout("w3", "Pull Day", "2024-01-15T17:30:00+07:00"),
            workout("w2", "Push Day", "2024-01-13T17:30:00+07:00"),
        ]),
    }
}

// ============================================================================
// Healthy evening
// ============================================================================

#[tokio::test]
async fn test_evening_report_from_day_totals() {
    init_test_logging();
    let sources = into_sources(evening_sources());
    let config = config_with_accounts(&[PERSONAL, WORK]);
    let report = build_evening_report(&sources, &config, &evening_context()).await.unwrap();

    assert!(report.warnings.is_empty(), "unexpected warnings: {:?}", report.warnings);

    assert_eq!(report.energy.bmr_kcal, 1636);
    assert_eq!(report.energy.active_kcal, Some(611.0));
    assert_eq!(report.energy.consumed_kcal, Some(1850.0));
    assert_eq!(report.energy.total_burned_kcal, Some(2247.0));
    assert_eq!(report.energy.deficit_or_surplus_kcal, Some(-397));
    assert_eq!(report.energy.status, EnergyStatus::Deficit);

    assert!((report.protein.consumed_g.unwrap() - 144.4).abs() < 1e-9);
    assert!((report.protein.remaining_g.unwrap() - 7.6).abs() < 1e-6);
    assert_eq!(report.protein.on_track, Some(true));
    assert!((report.protein.target_g - 152.0).abs() < f64::EPSILON);

    assert_eq!(report.activity.steps, Some(9412));
    assert_eq!(report.activity.stand_hours, Some(11));
    assert!(report.activity.workout.done);
    assert_eq!(report.activity.workout.title.as_deref(), Some("Pull Day"));

    assert_eq!(report.recovery.hrv_ms, Some(45.0));
    assert_eq!(report.recovery.hrv_yesterday_ms, Some(38.0));
    assert_eq!(report.recovery.resting_hr_bpm, Some(53.0));
    assert_eq!(report.recovery.sleep_last_night.total_hrs, Some(7.2));
    assert_eq!(report.recovery.sleep_last_night.deep_hrs, Some(1.1));

    assert_eq!(report.protocols.completed, vec!["Vitamin D"]);
    assert_eq!(report.protocols.missed, vec!["Magnesium"]);

    let first = report.tomorrow.first_event.as_ref().unwrap();
    assert_eq!(first.time, "08:30");
    assert_eq!(first.summary, "Gym session");
    assert!(report.tomorrow.workout_scheduled);
    assert_eq!(report.tomorrow.meds_due, vec!["Vitamin D"]);
}

#[tokio::test]
async fn test_bmr_follows_the_configured_profile() {
    init_test_logging();
    let sources = into_sources(evening_sources());
    let mut config = config_with_accounts(&[PERSONAL]);
    config.profile = UserProfile {
        age: 25,
        weight_kg: 60.0,
        height_cm: 164.0,
        sex: daybrief_core::models::Sex::Female,
        protein_target_g: 100.0,
    };
    let report = build_evening_report(&sources, &config, &evening_context()).await.unwrap();

    assert_eq!(report.energy.bmr_kcal, 1339);
    assert_eq!(report.protein.on_track, Some(true));
    assert_eq!(report.protein.remaining_g, Some(0.0));
}

#[tokio::test]
async fn test_tomorrow_without_keywords_or_timed_events() {
    init_test_logging();
    let mut synthetic = evening_sources();
    synthetic.calendar = SyntheticCalendar::new()
        .with_all_day_event(PERSONAL.1, date("2024-01-16"), "Gym closed")
        .with_event(PERSONAL.1, at("2024-01-16T12:00:00+07:00"), "Lunch with Sam");
    let sources = into_sources(synthetic);
    let report =
        build_evening_report(&sources, &config_with_accounts(&[PERSONAL]), &evening_context())
            .await
            .unwrap();

    assert_eq!(report.tomorrow.first_event.as_ref().unwrap().summary, "Lunch with Sam");
    assert!(!report.tomorrow.workout_scheduled);
}

// ============================================================================
// Missing data and failures
// ============================================================================

#[tokio::test]
async fn test_missing_intake_is_unknown_not_zero() {
    init_test_logging();
    let mut synthetic = evening_sources();
    synthetic.metrics = SyntheticMetricsStore::new(vec![sample(
        "active_energy",
        "2024-01-15 12:00:00 +0700",
        400.0,
    )]);
    let sources = into_sources(synthetic);
    let report =
        build_evening_report(&sources, &config_with_accounts(&[PERSONAL]), &evening_context())
            .await
            .unwrap();

    assert!(report.warnings.is_empty());
    assert_eq!(report.energy.status, EnergyStatus::Unknown);
    assert_eq!(report.energy.deficit_or_surplus_kcal, None);
    assert_eq!(report.energy.total_burned_kcal, Some(2036.0));
    assert_eq!(report.protein.consumed_g, None);
    assert_eq!(report.protein.remaining_g, None);
    assert_eq!(report.protein.on_track, None);
    assert_eq!(report.activity.steps, None);
    assert_eq!(report.recovery.hrv_ms, None);
}

#[tokio::test]
async fn test_unopenable_store_is_one_warning() {
    init_test_logging();
    let mut synthetic = evening_sources();
    synthetic.metrics =
        SyntheticMetricsStore::unopenable(SourceError::unavailable("metrics store", "locked"));
    let sources = into_sources(synthetic);
    let report =
        build_evening_report(&sources, &config_with_accounts(&[PERSONAL]), &evening_context())
            .await
            .unwrap();

    assert_eq!(report.warnings, vec!["metrics store error: unavailable: locked"]);
    assert_eq!(report.energy.bmr_kcal, 1636);
    assert_eq!(report.energy.status, EnergyStatus::Unknown);
    assert!(report.activity.workout.done);
}

#[tokio::test]
async fn test_failing_metric_query_warns_and_keeps_the_rest() {
    init_test_logging();
    let mut synthetic = evening_sources();
    synthetic.metrics = synthetic.metrics.with_failing_metric("protein");
    let sources = into_sources(synthetic);
    let report =
        build_evening_report(&sources, &config_with_accounts(&[PERSONAL]), &evening_context())
            .await
            .unwrap();

    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].contains("protein total"));
    assert_eq!(report.protein.consumed_g, None);
    assert_eq!(report.energy.status, EnergyStatus::Deficit);
}

#[tokio::test]
async fn test_workout_failure_reports_not_done() {
    init_test_logging();
    let mut synthetic = evening_sources();
    synthetic.workouts = SyntheticWorkouts::failing(SourceError::Timeout {
        provider: "hevy".to_owned(),
        timeout: std::time::Duration::from_secs(30),
    });
    let sources = into_sources(synthetic);
    let report =
        build_evening_report(&sources, &config_with_accounts(&[PERSONAL]), &evening_context())
            .await
            .unwrap();

    assert_eq!(report.warnings, vec!["hevy error: timed out after 30s"]);
    assert!(!report.activity.workout.done);
    assert_eq!(report.activity.workout.title, None);
}

#[tokio::test]
async fn test_tomorrow_sub_fetches_fail_independently() {
    init_test_logging();
    let mut synthetic = evening_sources();
    synthetic.tasks = synthetic
        .tasks
        .with_failing_date(date("2024-01-16"), SourceError::unavailable("todoist", "offline"));
    synthetic.calendar = synthetic
        .calendar
        .with_failing_account(WORK.1, SourceError::unavailable("calendar", "offline"));
    let sources = into_sources(synthetic);
    let report = build_evening_report(
        &sources,
        &config_with_accounts(&[PERSONAL, WORK]),
        &evening_context(),
    )
    .await
    .unwrap();

    assert_eq!(report.warnings.len(), 2);
    assert!(report.warnings.iter().any(|w| w.starts_with("todoist error")));
    assert!(report.warnings.iter().any(|w| w.starts_with("calendar (work) error")));
    assert!(report.tomorrow.meds_due.is_empty());
    assert_eq!(report.tomorrow.first_event.as_ref().unwrap().summary, "Dentist");
    assert!(!report.tomorrow.workout_scheduled);
    // Today's protocols come from a different query
    assert_eq!(report.protocols.missed, vec!["Magnesium"]);
}

#[tokio::test]
async fn test_invalid_profile_is_fatal() {
    init_test_logging();
    let sources = into_sources(evening_sources());
    let mut config = config_with_accounts(&[PERSONAL]);
    config.profile.weight_kg = -5.0;
    let error = build_evening_report(&sources, &config, &evening_context())
        .await
        .unwrap_err();
    assert_eq!(error.code, daybrief_core::errors::ErrorCode::ConfigInvalid);
}
