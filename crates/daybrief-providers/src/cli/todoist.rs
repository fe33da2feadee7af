// ABOUTME: Task tracker provider backed by the `td` Todoist CLI
// ABOUTME: `td today --json` for the target day, `td filter "due: DATE" --json` for other dates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Daybrief Contributors

use super::parse_rfc3339;
use crate::command::CommandRunner;
use crate::core::TaskSource;
use async_trait::async_trait;
use daybrief_core::constants::sources;
use daybrief_core::errors::{SourceError, SourceResult};
use daybrief_core::models::{Task, TaskDue, TaskFilter};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct TasksResponse {
    #[serde(default)]
    results: Vec<TodoistTask>,
}

#[derive(Debug, Deserialize)]
struct TodoistTask {
    #[serde(default)]
    content: String,
    #[serde(default)]
    labels: Vec<String>,
    #[serde(default)]
    is_completed: bool,
    due: Option<TodoistDue>,
}

#[derive(Debug, Deserialize)]
struct TodoistDue {
    #[serde(default)]
    date: String,
    #[serde(default)]
    datetime: Option<String>,
}

impl From<TodoistDue> for TaskDue {
    fn from(due: TodoistDue) -> Self {
        Self {
            // Floating due dates may carry a time suffix ("2024-01-15T08:00:00")
            date: due.date.get(..10).and_then(|d| d.parse().ok()),
            datetime: due.datetime.as_deref().and_then(parse_rfc3339),
        }
    }
}

/// Command-line arguments for a task filter
#[must_use]
pub fn filter_args(filter: TaskFilter) -> Vec<String> {
    match filter {
        TaskFilter::Today => vec!["today".to_owned(), "--json".to_owned()],
        TaskFilter::DueOn(date) => vec![
            "filter".to_owned(),
            format!("due: {}", date.format("%Y-%m-%d")),
            "--json".to_owned(),
        ],
    }
}

/// Parse a `td ... --json` payload
///
/// # Errors
///
/// Returns `Malformed` when the payload is not the expected JSON shape
pub fn parse_tasks(payload: &[u8]) -> SourceResult<Vec<Task>> {
    let response: TasksResponse =
        serde_json::from_slice(payload).map_err(|e| SourceError::malformed(sources::TASKS, e))?;

    Ok(response
        .results
        .into_iter()
        .map(|task| Task {
            content: task.content,
            labels: task.labels,
            is_completed: task.is_completed,
            due: task.due.map(TaskDue::from),
        })
        .collect())
}

/// Tasks from the `td` CLI
#[derive(Debug, Clone)]
pub struct TodoistCli {
    program: String,
    runner: CommandRunner,
}

impl TodoistCli {
    /// Provider running `program`
    pub fn new(program: impl Into<String>, runner: CommandRunner) -> Self {
        Self {
            program: program.into(),
            runner,
        }
    }
}

#[async_trait]
impl TaskSource for TodoistCli {
    async fn tasks(&self, filter: TaskFilter) -> SourceResult<Vec<Task>> {
        let stdout = self
            .runner
            .run(sources::TASKS, &self.program, &filter_args(filter))
            .await?;
        parse_tasks(&stdout)
    }
}
