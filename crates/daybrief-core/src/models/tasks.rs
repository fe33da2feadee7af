// ABOUTME: Task tracker models and medication/protocol derivations
// ABOUTME: Med status (due today, overdue, completed) and evening protocol adherence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Daybrief Contributors

use crate::constants::calendar::TIME_FORMAT;
use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

/// Which task list to query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskFilter {
    /// The tracker's "today" view (due today plus overdue)
    Today,
    /// Tasks due on a specific date
    DueOn(NaiveDate),
}

/// Due information of a task
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDue {
    /// Due date
    pub date: Option<NaiveDate>,
    /// Due instant, when the task has a time
    pub datetime: Option<DateTime<FixedOffset>>,
}

/// Task as returned by the task tracker
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Task text
    pub content: String,
    /// Labels attached to the task
    pub labels: Vec<String>,
    /// Completion flag
    pub is_completed: bool,
    /// Due information
    pub due: Option<TaskDue>,
}

impl Task {
    /// Whether the task carries any of the given labels
    #[must_use]
    pub fn has_any_label<S: AsRef<str>>(&self, labels: &[S]) -> bool {
        self.labels
            .iter()
            .any(|label| labels.iter().any(|wanted| wanted.as_ref() == label))
    }

    fn due_date(&self) -> Option<NaiveDate> {
        self.due.as_ref().and_then(|due| due.date)
    }

    /// Medication status relative to `target`
    #[must_use]
    pub fn med_status(&self, target: NaiveDate) -> MedStatus {
        if self.is_completed {
            MedStatus::Completed
        } else if self.due_date().is_some_and(|date| date < target) {
            MedStatus::Overdue
        } else {
            MedStatus::DueToday
        }
    }

    /// Whether an open task was due on or before `target`
    #[must_use]
    pub fn is_missed(&self, target: NaiveDate) -> bool {
        !self.is_completed && self.due_date().is_some_and(|date| date <= target)
    }
}

/// Derived medication status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MedStatus {
    /// Open and due today (or undated)
    DueToday,
    /// Open and due before the target date
    Overdue,
    /// Completed
    Completed,
}

/// Medication entry in the morning report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedTask {
    /// Task text
    pub name: String,
    /// Due time of day (`HH:MM`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_time: Option<String>,
    /// Due date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

impl From<&Task> for MedTask {
    fn from(task: &Task) -> Self {
        let due = task.due.as_ref();
        Self {
            name: task.content.clone(),
            due_time: due
                .and_then(|due| due.datetime)
                .map(|at| at.format(TIME_FORMAT).to_string()),
            due_date: due.and_then(|due| due.date),
        }
    }
}

/// Medication section of the morning report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedsData {
    /// Open meds due today
    pub due_today: Vec<MedTask>,
    /// Open meds past due
    pub overdue: Vec<MedTask>,
    /// Meds already taken
    pub completed: Vec<MedTask>,
}

impl MedsData {
    /// Split the med/protocol tasks among `tasks` by status
    #[must_use]
    pub fn from_tasks<S: AsRef<str>>(tasks: &[Task], med_labels: &[S], target: NaiveDate) -> Self {
        let mut meds = Self::default();
        for task in tasks.iter().filter(|task| task.has_any_label(med_labels)) {
            let med = MedTask::from(task);
            match task.med_status(target) {
                MedStatus::Completed => meds.completed.push(med),
                MedStatus::Overdue => meds.overdue.push(med),
                MedStatus::DueToday => meds.due_today.push(med),
            }
        }
        meds
    }
}

/// Protocol adherence section of the evening report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolsData {
    /// Protocols completed today
    pub completed: Vec<String>,
    /// Protocols not completed and due on or before today
    pub missed: Vec<String>,
}

impl ProtocolsData {
    /// Derive adherence from today's med/protocol tasks
    #[must_use]
    pub fn from_tasks<S: AsRef<str>>(tasks: &[Task], med_labels: &[S], target: NaiveDate) -> Self {
        let mut protocols = Self::default();
        for task in tasks.iter().filter(|task| task.has_any_label(med_labels)) {
            if task.is_completed {
                protocols.completed.push(task.content.clone());
            } else if task.is_missed(target) {
                protocols.missed.push(task.content.clone());
            }
        }
        protocols
    }
}
