// ABOUTME: Training summary from the recent workout window
// ABOUTME: Last workout, whole days since it, and the trailing seven-day count
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Daybrief Contributors

use chrono::{DateTime, Duration, FixedOffset};
use daybrief_core::constants::training::WEEKLY_WINDOW_DAYS;
use daybrief_core::models::{TrainingData, Workout, WorkoutSummary};
use tracing::debug;

/// Summarize a most-recent-first workout window relative to `now`.
///
/// Workouts without a parseable start are skipped. `days_since_last` is
/// truncated toward zero. A workout counts towards the week when it started
/// strictly after `now - 7 days`.
#[must_use]
pub fn summarize_training(workouts: &[Workout], now: DateTime<FixedOffset>) -> TrainingData {
    let week_ago = now - Duration::days(WEEKLY_WINDOW_DAYS);
    let mut training = TrainingData::default();

    for workout in workouts {
        let Some(start) = workout.start_time else {
            debug!(workout_id = %workout.id, "Skipping workout without start time");
            continue;
        };

        let summary = WorkoutSummary {
            id: workout.id.clone(),
            title: workout.title.clone(),
            date: start.date_naive(),
            duration: workout.duration.clone(),
            exercises: workout.exercises.clone(),
        };

        if training.last_workout.is_none() {
            training.days_since_last = Some((now - start).num_hours() / 24);
            training.last_workout = Some(summary.clone());
        }
        if start > week_ago {
            training.weekly_count += 1;
        }
        training.recent_workouts.push(summary);
    }

    training
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn workout(id: &str, start: Option<&str>) -> Workout {
        Workout {
            id: id.to_owned(),
            title: format!("Session {id}"),
            start_time: start.map(|s| DateTime::parse_from_rfc3339(s).unwrap()),
            duration: "1h".to_owned(),
            exercises: vec!["Squat".to_owned()],
        }
    }

    #[test]
    fn test_unparseable_first_workout_does_not_block_last_workout() {
        let now = DateTime::parse_from_rfc3339("2024-01-15T07:00:00+07:00").unwrap();
        let workouts = vec![
            workout("w0", None),
            workout("w1", Some("2024-01-13T18:00:00+07:00")),
        ];
        let training = summarize_training(&workouts, now);
        assert_eq!(training.last_workout.map(|w| w.id).as_deref(), Some("w1"));
        assert_eq!(training.days_since_last, Some(1));
        assert_eq!(training.recent_workouts.len(), 1);
    }
}
