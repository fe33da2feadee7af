// ABOUTME: Fetch coordinator for the morning and evening briefings
// ABOUTME: Source bundle, reference instant, per-worker warning collection and mode dispatch
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Daybrief Contributors

//! # Briefing Pipeline
//!
//! Mode selection, then concurrent source queries, then a single-threaded
//! merge into the report, then classification.
//!
//! Each concurrent worker collects its own warnings; they are merged into the
//! report after every worker has joined. A failing source never aborts the
//! report: its fields stay absent and its error becomes a warning string.

/// Evening wrap-up pipeline
pub mod evening;
/// Mode selection
pub mod mode;
/// Morning outlook pipeline
pub mod morning;

pub use evening::build_evening_report;
pub use mode::select_mode;
pub use morning::build_morning_report;

use crate::config::BriefingConfig;
use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone};
use daybrief_core::constants::sources;
use daybrief_core::errors::{AppResult, SourceError, SourceResult};
use daybrief_core::models::{
    BriefingMode, CalendarAccount, CalendarEntry, EveningReport, MorningReport,
};
use daybrief_providers::{
    CalendarSource, CommandRunner, GogCalendarCli, HealthIngestCli, HealthSummarySource, HevyCli,
    MetricsSource, SqliteMetricsSource, SyntheticSources, TaskSource, TodoistCli, WorkoutSource,
};
use futures_util::future::join_all;
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

/// Target date and the reference instant for time-window derivations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BriefingContext {
    /// Date the report is about
    pub target_date: NaiveDate,
    /// Reference instant ("now") on the target date
    pub now: DateTime<FixedOffset>,
}

impl BriefingContext {
    /// Context for an explicit date and instant
    #[must_use]
    pub const fn new(target_date: NaiveDate, now: DateTime<FixedOffset>) -> Self {
        Self { target_date, now }
    }

    /// Context for `target` (default: the date of `now`).
    ///
    /// The reference instant is the target date at `now`'s time of day, in
    /// `now`'s offset.
    #[must_use]
    pub fn for_date(target: Option<NaiveDate>, now: DateTime<FixedOffset>) -> Self {
        let target_date = target.unwrap_or_else(|| now.date_naive());
        let reference = now
            .offset()
            .from_local_datetime(&target_date.and_time(now.time()))
            .single()
            .unwrap_or(now);
        Self::new(target_date, reference)
    }
}

/// One implementation of every source the coordinator queries
#[derive(Clone)]
pub struct Sources {
    /// Coarse health summary
    pub health: Arc<dyn HealthSummarySource>,
    /// Fine-grained metrics store
    pub metrics: Arc<dyn MetricsSource>,
    /// Calendar service
    pub calendar: Arc<dyn CalendarSource>,
    /// Task tracker
    pub tasks: Arc<dyn TaskSource>,
    /// Workout log
    pub workouts: Arc<dyn WorkoutSource>,
}

impl Sources {
    /// CLI- and SQLite-backed sources from configuration
    #[must_use]
    pub fn from_config(config: &BriefingConfig) -> Self {
        let runner = CommandRunner::new(config.command_timeout);
        Self {
            health: Arc::new(HealthIngestCli::new(config.commands.health.clone(), runner)),
            metrics: Arc::new(SqliteMetricsSource::new(config.health_db_path.clone())),
            calendar: Arc::new(GogCalendarCli::new(config.commands.calendar.clone(), runner)),
            tasks: Arc::new(TodoistCli::new(config.commands.tasks.clone(), runner)),
            workouts: Arc::new(HevyCli::new(config.commands.workouts.clone(), runner)),
        }
    }

    /// In-memory sources
    #[must_use]
    pub fn synthetic(sources: SyntheticSources) -> Self {
        Self {
            health: Arc::new(sources.health),
            metrics: Arc::new(sources.metrics),
            calendar: Arc::new(sources.calendar),
            tasks: Arc::new(sources.tasks),
            workouts: Arc::new(sources.workouts),
        }
    }
}

/// Either report, serialized as its own shape
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Briefing {
    /// Morning outlook
    Morning(MorningReport),
    /// Evening wrap-up
    Evening(EveningReport),
}

impl Briefing {
    /// Mode of the contained report
    #[must_use]
    pub const fn mode(&self) -> BriefingMode {
        match self {
            Self::Morning(_) => BriefingMode::Morning,
            Self::Evening(_) => BriefingMode::Evening,
        }
    }

    /// Warnings accumulated while fetching
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        match self {
            Self::Morning(report) => &report.warnings,
            Self::Evening(report) => &report.warnings,
        }
    }
}

/// Run the pipeline for `mode`
///
/// # Errors
///
/// Only configuration problems are fatal; source failures become warnings
pub async fn generate(
    mode: BriefingMode,
    sources: &Sources,
    config: &BriefingConfig,
    context: &BriefingContext,
) -> AppResult<Briefing> {
    info!(%mode, date = %context.target_date, "Generating briefing");
    let briefing = match mode {
        BriefingMode::Morning => {
            Briefing::Morning(build_morning_report(sources, config, context).await)
        }
        BriefingMode::Evening => {
            Briefing::Evening(build_evening_report(sources, config, context).await?)
        }
    };
    info!(%mode, warnings = briefing.warnings().len(), "Briefing ready");
    Ok(briefing)
}

/// Warnings collected by one concurrent worker
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceWarnings(Vec<String>);

impl SourceWarnings {
    /// Keep the value, or record the failure and yield nothing
    pub fn record<T>(&mut self, result: SourceResult<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.push(&error);
                None
            }
        }
    }

    /// Record a failure
    pub fn push(&mut self, error: &SourceError) {
        warn!(source = error.provider(), error = %error, "Source query failed");
        self.0.push(error.to_string());
    }

    /// Append another worker's warnings
    pub fn extend(&mut self, other: Self) {
        self.0.extend(other.0);
    }

    /// Number of warnings
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no warning was recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Warning strings in recording order
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

/// Per-account calendar results, in account order
#[derive(Debug, Clone, Default)]
pub(crate) struct CalendarFetch {
    pub(crate) accounts: Vec<(String, Vec<CalendarEntry>)>,
    pub(crate) warnings: SourceWarnings,
}

impl CalendarFetch {
    /// Every fetched entry, concatenated in account order
    pub(crate) fn entries(&self) -> Vec<CalendarEntry> {
        self.accounts
            .iter()
            .flat_map(|(_, entries)| entries.iter().cloned())
            .collect()
    }
}

/// Query every account for `date`; one account failing leaves the others intact
pub(crate) async fn fetch_calendar(
    calendar: &dyn CalendarSource,
    accounts: &[CalendarAccount],
    date: NaiveDate,
) -> CalendarFetch {
    let mut fetch = CalendarFetch::default();
    if accounts.is_empty() {
        fetch.warnings.push(&SourceError::unavailable(
            sources::CALENDAR,
            "no calendar accounts configured",
        ));
        return fetch;
    }

    let results = join_all(accounts.iter().map(|account| async move {
        (account, calendar.events_for_date(account, date).await)
    }))
    .await;

    for (account, result) in results {
        if let Some(entries) = fetch.warnings.record(result) {
            fetch.accounts.push((account.source.clone(), entries));
        }
    }
    fetch
}
