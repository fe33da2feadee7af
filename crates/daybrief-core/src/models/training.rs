// ABOUTME: Workout log models: raw workouts, report summaries and training sections
// ABOUTME: Workouts arrive most-recent-first from the workout source
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Daybrief Contributors

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

/// Workout as returned by the workout source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workout {
    /// Source identifier
    pub id: String,
    /// Workout title
    pub title: String,
    /// Start instant; `None` when the source timestamp could not be parsed
    pub start_time: Option<DateTime<FixedOffset>>,
    /// Duration as reported by the source (e.g. "1h15m")
    pub duration: String,
    /// Exercise names in logged order
    pub exercises: Vec<String>,
}

impl Workout {
    /// Calendar date of the workout start, in the start's own offset
    #[must_use]
    pub fn date(&self) -> Option<NaiveDate> {
        self.start_time.map(|start| start.date_naive())
    }
}

/// Workout entry in the morning report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutSummary {
    /// Source identifier
    pub id: String,
    /// Workout title
    pub title: String,
    /// Workout date
    pub date: NaiveDate,
    /// Duration as reported by the source
    pub duration: String,
    /// Exercise names
    pub exercises: Vec<String>,
}

/// Training section of the morning report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingData {
    /// Most recent workout
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_workout: Option<WorkoutSummary>,
    /// Whole days since the most recent workout started
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_since_last: Option<i64>,
    /// Recent workouts, most recent first
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub recent_workouts: Vec<WorkoutSummary>,
    /// Workouts within the trailing seven days
    pub weekly_count: usize,
}

/// Whether a workout was logged on the target day (evening report)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutInfo {
    /// Workout done today
    pub done: bool,
    /// Title of today's workout
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Duration of today's workout
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

impl WorkoutInfo {
    /// First workout in `workouts` that started on `target`
    #[must_use]
    pub fn for_date(workouts: &[Workout], target: NaiveDate) -> Self {
        workouts
            .iter()
            .find(|workout| workout.date() == Some(target))
            .map_or_else(Self::default, |workout| Self {
                done: true,
                title: Some(workout.title.clone()),
                duration: Some(workout.duration.clone()),
            })
    }
}
