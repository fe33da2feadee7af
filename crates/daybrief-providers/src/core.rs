// ABOUTME: Source query traits consumed by the fetch coordinator
// ABOUTME: Health summary, metrics store, calendar, task tracker and workout log contracts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Daybrief Contributors

//! # Source Query Interfaces
//!
//! Every external data provider is reached through one of these traits. Each
//! query returns either a normalized model from `daybrief_core::models` or a
//! `SourceError` naming the failing source; callers isolate failures per
//! query and never abort the overall report.
//!
//! ## Provider-Specific Details vs Shared Interface
//!
//! - **Internal**: Providers parse their own payload DTOs (e.g. the task
//!   tracker's `results` envelope)
//! - **External**: Providers expose shared models (`Task`, `Workout`, ...)
//!
//! All implementations must be `Send + Sync` so queries can run concurrently.

use async_trait::async_trait;
use chrono::NaiveDate;
use daybrief_core::errors::SourceResult;
use daybrief_core::models::{
    CalendarAccount, CalendarEntry, HealthSnapshot, SleepStages, Task, TaskFilter, Workout,
};
use std::sync::Arc;

/// Coarse "latest stats" health summary
#[async_trait]
pub trait HealthSummarySource: Send + Sync {
    /// Latest value per metric
    async fn latest_stats(&self) -> SourceResult<HealthSnapshot>;
}

/// Opens sessions on the fine-grained metrics store
#[async_trait]
pub trait MetricsSource: Send + Sync {
    /// Open a read-only session.
    ///
    /// An open failure means none of the store's queries can run.
    async fn open(&self) -> SourceResult<Arc<dyn MetricsStore>>;
}

/// Queries against an open metrics store.
///
/// A metric with no rows for the date is `Ok(None)`, never zero.
#[async_trait]
pub trait MetricsStore: Send + Sync {
    /// Average of the metric's values on `date`
    async fn daily_average(&self, metric: &str, date: NaiveDate) -> SourceResult<Option<f64>>;

    /// Sum of the metric's values on `date`
    async fn day_total(&self, metric: &str, date: NaiveDate) -> SourceResult<Option<f64>>;

    /// Most recent value of the metric on `date`
    async fn latest_value(&self, metric: &str, date: NaiveDate) -> SourceResult<Option<f64>>;

    /// Deep, REM and core sleep hours recorded on `date`
    async fn sleep_stages(&self, date: NaiveDate) -> SourceResult<SleepStages>;
}

/// Calendar service, queried once per account
#[async_trait]
pub trait CalendarSource: Send + Sync {
    /// Events starting on `date`, in source order. All-day events carry no
    /// start time.
    async fn events_for_date(
        &self,
        account: &CalendarAccount,
        date: NaiveDate,
    ) -> SourceResult<Vec<CalendarEntry>>;
}

/// Task tracker
#[async_trait]
pub trait TaskSource: Send + Sync {
    /// Tasks matching `filter`
    async fn tasks(&self, filter: TaskFilter) -> SourceResult<Vec<Task>>;
}

/// Workout log
#[async_trait]
pub trait WorkoutSource: Send + Sync {
    /// First page of workouts, most recent first
    async fn recent_workouts(&self, page_size: u32) -> SourceResult<Vec<Workout>>;
}
