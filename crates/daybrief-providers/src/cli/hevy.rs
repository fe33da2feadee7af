// ABOUTME: Workout log provider backed by `mcporter call hevy.get-workouts`
// ABOUTME: Parses the most-recent-first workout array into shared Workout models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Daybrief Contributors

use super::parse_rfc3339;
use crate::command::CommandRunner;
use crate::core::WorkoutSource;
use async_trait::async_trait;
use daybrief_core::constants::sources;
use daybrief_core::errors::{SourceError, SourceResult};
use daybrief_core::models::Workout;
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HevyWorkout {
    #[serde(default)]
    id: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    start_time: String,
    #[serde(default)]
    duration: String,
    #[serde(default)]
    exercises: Vec<HevyExercise>,
}

#[derive(Debug, Deserialize)]
struct HevyExercise {
    #[serde(default)]
    name: String,
}

/// Parse a `hevy.get-workouts` payload.
///
/// Unparseable start times are kept as `None` so callers can skip them.
///
/// # Errors
///
/// Returns `Malformed` when the payload is not a JSON array of workouts
pub fn parse_workouts(payload: &[u8]) -> SourceResult<Vec<Workout>> {
    let workouts: Vec<HevyWorkout> = serde_json::from_slice(payload)
        .map_err(|e| SourceError::malformed(sources::WORKOUTS, e))?;

    Ok(workouts
        .into_iter()
        .map(|workout| {
            let start_time = parse_rfc3339(&workout.start_time);
            if start_time.is_none() {
                debug!(workout_id = %workout.id, raw = %workout.start_time, "Unparseable workout start");
            }
            Workout {
                id: workout.id,
                title: workout.title,
                start_time,
                duration: workout.duration,
                exercises: workout.exercises.into_iter().map(|e| e.name).collect(),
            }
        })
        .collect())
}

/// Workout log from the Hevy MCP bridge
#[derive(Debug, Clone)]
pub struct HevyCli {
    program: String,
    runner: CommandRunner,
}

impl HevyCli {
    /// Provider running `program`
    pub fn new(program: impl Into<String>, runner: CommandRunner) -> Self {
        Self {
            program: program.into(),
            runner,
        }
    }
}

#[async_trait]
impl WorkoutSource for HevyCli {
    async fn recent_workouts(&self, page_size: u32) -> SourceResult<Vec<Workout>> {
        let args = [
            "call".to_owned(),
            "hevy.get-workouts".to_owned(),
            "page=1".to_owned(),
            format!("pageSize={page_size}"),
        ];
        let stdout = self.runner.run(sources::WORKOUTS, &self.program, &args).await?;
        parse_workouts(&stdout)
    }
}
