// ABOUTME: Tests for the training summary window and the tomorrow preview helpers
// ABOUTME: Days-since truncation, weekly window edges, earliest event and keyword matching
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Daybrief Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{DateTime, FixedOffset};
use daybrief_core::constants::defaults::{MED_LABELS, WORKOUT_KEYWORDS};
use daybrief_core::models::{CalendarEntry, Task, Workout};
use daybrief_intelligence::preview::{first_event, meds_due, workout_scheduled};
use daybrief_intelligence::summarize_training;

fn at(s: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(s).unwrap()
}

fn workout(id: &str, start: &str) -> Workout {
    Workout {
        id: id.to_owned(),
        title: format!("Workout {id}"),
        start_time: Some(at(start)),
        duration: "45m".to_owned(),
        exercises: vec!["Bench Press".to_owned(), "Row".to_owned()],
    }
}

// ============================================================================
// TRAINING SUMMARY
// ============================================================================

#[test]
fn test_training_summary_window() {
    let now = at("2024-01-15T07:00:00+07:00");
    let workouts = vec![
        workout("a", "2024-01-14T18:00:00+07:00"),
        workout("b", "2024-01-12T07:00:00+07:00"),
        workout("c", "2024-01-08T07:00:01+07:00"),
        workout("d", "2024-01-08T07:00:00+07:00"),
        workout("e", "2024-01-01T07:00:00+07:00"),
    ];

    let training = summarize_training(&workouts, now);

    let last = training.last_workout.unwrap();
    assert_eq!(last.id, "a");
    assert_eq!(last.date.to_string(), "2024-01-14");
    assert_eq!(last.exercises, vec!["Bench Press", "Row"]);
    // 13 hours truncates to zero days
    assert_eq!(training.days_since_last, Some(0));
    // "d" starts exactly seven days earlier and is outside the window
    assert_eq!(training.weekly_count, 3);
    assert_eq!(training.recent_workouts.len(), 5);
}

#[test]
fn test_training_summary_empty() {
    let training = summarize_training(&[], at("2024-01-15T07:00:00+07:00"));
    assert!(training.last_workout.is_none());
    assert!(training.days_since_last.is_none());
    assert_eq!(training.weekly_count, 0);
}

#[test]
fn test_days_since_last_truncates() {
    let now = at("2024-01-15T07:00:00+07:00");
    let training = summarize_training(&[workout("a", "2024-01-12T08:00:00+07:00")], now);
    // 71 hours
    assert_eq!(training.days_since_last, Some(2));
}

// ============================================================================
// TOMORROW PREVIEW
// ============================================================================

#[test]
fn test_first_event_sorted_across_accounts() {
    let entries = vec![
        CalendarEntry::timed(at("2024-01-16T10:00:00+07:00"), "Personal errand"),
        CalendarEntry::all_day("Public holiday"),
        CalendarEntry::timed(at("2024-01-16T08:30:00+07:00"), "Work standup"),
        CalendarEntry::timed(at("2024-01-16T08:30:00+07:00"), "Second at same time"),
    ];
    let first = first_event(&entries).unwrap();
    assert_eq!(first.time, "08:30");
    assert_eq!(first.summary, "Work standup");
}

#[test]
fn test_first_event_none_without_timed_entries() {
    assert!(first_event(&[CalendarEntry::all_day("Holiday")]).is_none());
    assert!(first_event(&[]).is_none());
}

#[test]
fn test_workout_keyword_heuristic_is_case_insensitive() {
    let gym = vec![CalendarEntry::timed(at("2024-01-16T07:00:00+07:00"), "GYM with friends")];
    assert!(workout_scheduled(&gym, &WORKOUT_KEYWORDS));

    let coach = vec![CalendarEntry::timed(at("2024-01-16T07:00:00+07:00"), "Session w/ Jesper")];
    assert!(workout_scheduled(&coach, &WORKOUT_KEYWORDS));

    let leg_day = vec![CalendarEntry::timed(at("2024-01-16T07:00:00+07:00"), "Leg day")];
    assert!(!workout_scheduled(&leg_day, &WORKOUT_KEYWORDS));
}

#[test]
fn test_meds_due_filters_by_label() {
    let tasks = vec![
        Task {
            content: "Vitamin D".to_owned(),
            labels: vec!["💊Meds".to_owned()],
            ..Task::default()
        },
        Task {
            content: "Call plumber".to_owned(),
            labels: vec!["home".to_owned()],
            ..Task::default()
        },
        Task {
            content: "BPC-157".to_owned(),
            labels: vec!["💉".to_owned(), "am".to_owned()],
            ..Task::default()
        },
    ];
    assert_eq!(meds_due(&tasks, &MED_LABELS), vec!["Vitamin D", "BPC-157"]);
}
