// ABOUTME: In-memory synthetic sources for development, demos and tests
// ABOUTME: Configurable data for every source trait plus per-source failure injection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Daybrief Contributors

//! # Synthetic Sources
//!
//! In-memory implementations of every source trait. Unlike the CLI-backed
//! providers they:
//!
//! - Need no external tools or databases
//! - Return deterministic data
//! - Can be told to fail, per source or per query, with any `SourceError`
//!
//! `SyntheticSources::demo` builds a plausible day of data around a reference
//! instant for `--synthetic` runs.

use crate::core::{
    CalendarSource, HealthSummarySource, MetricsSource, MetricsStore, TaskSource, WorkoutSource,
};
use async_trait::async_trait;
use chrono::{DateTime, Days, Duration, FixedOffset, NaiveDate, TimeZone};
use daybrief_core::constants::{metrics, sources};
use daybrief_core::errors::{SourceError, SourceResult};
use daybrief_core::models::{
    CalendarAccount, CalendarEntry, HealthReading, HealthSnapshot, SleepStages, Task, TaskDue,
    TaskFilter, Workout,
};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration as StdDuration;

// ============================================================================
// Health summary
// ============================================================================

/// Synthetic "latest stats" summary
#[derive(Debug, Clone, Default)]
pub struct SyntheticHealthSummary {
    snapshot: HealthSnapshot,
    failure: Option<SourceError>,
    latency: Option<StdDuration>,
}

impl SyntheticHealthSummary {
    /// Summary returning `snapshot`
    #[must_use]
    pub const fn new(snapshot: HealthSnapshot) -> Self {
        Self {
            snapshot,
            failure: None,
            latency: None,
        }
    }

    /// Add or replace one reading
    #[must_use]
    pub fn with_reading(mut self, metric: &str, value: f64, unit: &str, timestamp: &str) -> Self {
        self.snapshot.latest.insert(
            metric.to_owned(),
            HealthReading {
                value,
                unit: unit.to_owned(),
                timestamp: timestamp.to_owned(),
            },
        );
        self
    }

    /// Fail every query with `error`
    #[must_use]
    pub fn failing(error: SourceError) -> Self {
        Self {
            snapshot: HealthSnapshot::default(),
            failure: Some(error),
            latency: None,
        }
    }

    /// Delay every response by `latency`
    #[must_use]
    pub const fn with_latency(mut self, latency: StdDuration) -> Self {
        self.latency = Some(latency);
        self
    }
}

#[async_trait]
impl HealthSummarySource for SyntheticHealthSummary {
    async fn latest_stats(&self) -> SourceResult<HealthSnapshot> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(self.snapshot.clone()),
        }
    }
}

// ============================================================================
// Metrics store
// ============================================================================

/// One stored sample
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSample {
    /// Metric name
    pub metric: String,
    /// Timestamp text (`YYYY-MM-DD HH:MM:SS +ZZZZ`)
    pub timestamp: String,
    /// Value
    pub value: f64,
}

#[derive(Debug, Clone, Default)]
struct MetricsData {
    samples: Vec<MetricSample>,
    failing_metrics: HashSet<String>,
    failing_stages: bool,
}

/// Synthetic metrics store with the same day-prefix semantics as the SQLite store
#[derive(Debug, Clone, Default)]
pub struct SyntheticMetricsStore {
    data: Arc<MetricsData>,
    open_failure: Option<SourceError>,
}

impl SyntheticMetricsStore {
    /// Store holding `samples`
    #[must_use]
    pub fn new(samples: Vec<MetricSample>) -> Self {
        Self {
            data: Arc::new(MetricsData {
                samples,
                ..MetricsData::default()
            }),
            open_failure: None,
        }
    }

    /// Store that cannot be opened
    #[must_use]
    pub fn unopenable(error: SourceError) -> Self {
        Self {
            data: Arc::default(),
            open_failure: Some(error),
        }
    }

    /// Fail every query touching `metric`
    #[must_use]
    pub fn with_failing_metric(self, metric: &str) -> Self {
        let mut data = Arc::unwrap_or_clone(self.data);
        data.failing_metrics.insert(metric.to_owned());
        Self {
            data: Arc::new(data),
            open_failure: self.open_failure,
        }
    }

    /// Fail the sleep stage query
    #[must_use]
    pub fn with_failing_sleep_stages(self) -> Self {
        let mut data = Arc::unwrap_or_clone(self.data);
        data.failing_stages = true;
        Self {
            data: Arc::new(data),
            open_failure: self.open_failure,
        }
    }

    fn day_values(&self, query: &str, metric: &str, date: NaiveDate) -> SourceResult<Vec<&MetricSample>> {
        if self.data.failing_metrics.contains(metric) {
            return Err(SourceError::query(
                sources::METRICS_STORE,
                query,
                "injected failure",
            ));
        }
        let prefix = date.format("%Y-%m-%d").to_string();
        Ok(self
            .data
            .samples
            .iter()
            .filter(|sample| sample.metric == metric && sample.timestamp.starts_with(&prefix))
            .collect())
    }
}

#[async_trait]
impl MetricsSource for SyntheticMetricsStore {
    async fn open(&self) -> SourceResult<Arc<dyn MetricsStore>> {
        match &self.open_failure {
            Some(error) => Err(error.clone()),
            None => Ok(Arc::new(self.clone())),
        }
    }
}

#[async_trait]
impl MetricsStore for SyntheticMetricsStore {
    async fn daily_average(&self, metric: &str, date: NaiveDate) -> SourceResult<Option<f64>> {
        let values = self.day_values(&format!("{metric} average"), metric, date)?;
        if values.is_empty() {
            return Ok(None);
        }
        let sum: f64 = values.iter().map(|sample| sample.value).sum();
        Ok(Some(sum / values.len() as f64))
    }

    async fn day_total(&self, metric: &str, date: NaiveDate) -> SourceResult<Option<f64>> {
        let values = self.day_values(&format!("{metric} total"), metric, date)?;
        if values.is_empty() {
            return Ok(None);
        }
        Ok(Some(values.iter().map(|sample| sample.value).sum()))
    }

    async fn latest_value(&self, metric: &str, date: NaiveDate) -> SourceResult<Option<f64>> {
        let values = self.day_values(&format!("{metric} latest"), metric, date)?;
        Ok(values
            .into_iter()
            .max_by(|a, b| a.timestamp.cmp(&b.timestamp))
            .map(|sample| sample.value))
    }

    async fn sleep_stages(&self, date: NaiveDate) -> SourceResult<SleepStages> {
        if self.data.failing_stages {
            return Err(SourceError::query(
                sources::METRICS_STORE,
                "sleep stages",
                "injected failure",
            ));
        }
        Ok(SleepStages {
            deep_hours: self.latest_value(metrics::SLEEP_DEEP, date).await?,
            rem_hours: self.latest_value(metrics::SLEEP_REM, date).await?,
            core_hours: self.latest_value(metrics::SLEEP_CORE, date).await?,
        })
    }
}

// ============================================================================
// Calendar
// ============================================================================

/// Synthetic calendar keyed by account identifier
#[derive(Debug, Clone, Default)]
pub struct SyntheticCalendar {
    events: HashMap<String, Vec<CalendarEntry>>,
    all_day: HashMap<String, Vec<(NaiveDate, String)>>,
    failing_accounts: HashMap<String, SourceError>,
}

impl SyntheticCalendar {
    /// Empty calendar
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a timed event to `account`
    #[must_use]
    pub fn with_event(
        mut self,
        account: &str,
        start: DateTime<FixedOffset>,
        summary: &str,
    ) -> Self {
        self.events
            .entry(account.to_owned())
            .or_default()
            .push(CalendarEntry::timed(start, summary));
        self
    }

    /// Add an all-day event to `account`
    #[must_use]
    pub fn with_all_day_event(mut self, account: &str, date: NaiveDate, summary: &str) -> Self {
        self.all_day
            .entry(account.to_owned())
            .or_default()
            .push((date, summary.to_owned()));
        self
    }

    /// Fail queries for `account`
    #[must_use]
    pub fn with_failing_account(mut self, account: &str, error: SourceError) -> Self {
        self.failing_accounts.insert(account.to_owned(), error);
        self
    }
}

#[async_trait]
impl CalendarSource for SyntheticCalendar {
    async fn events_for_date(
        &self,
        account: &CalendarAccount,
        date: NaiveDate,
    ) -> SourceResult<Vec<CalendarEntry>> {
        if let Some(error) = self.failing_accounts.get(&account.account) {
            return Err(error
                .clone()
                .for_provider(sources::calendar_account(&account.source)));
        }
        let timed = self
            .events
            .get(&account.account)
            .into_iter()
            .flatten()
            .filter(|entry| entry.start.is_some_and(|start| start.date_naive() == date))
            .cloned();
        let all_day = self
            .all_day
            .get(&account.account)
            .into_iter()
            .flatten()
            .filter(|(day, _)| *day == date)
            .map(|(_, summary)| CalendarEntry::all_day(summary.clone()));
        Ok(timed.chain(all_day).collect())
    }
}

// ============================================================================
// Tasks
// ============================================================================

/// Synthetic task tracker
#[derive(Debug, Clone, Default)]
pub struct SyntheticTasks {
    today: Vec<Task>,
    scheduled: Vec<Task>,
    failures: Vec<(Option<NaiveDate>, SourceError)>,
}

impl SyntheticTasks {
    /// Tracker whose "today" view returns `today`
    #[must_use]
    pub fn new(today: Vec<Task>) -> Self {
        Self {
            today,
            ..Self::default()
        }
    }

    /// Tasks returned by due-date filters, matched on their due date
    #[must_use]
    pub fn with_scheduled(mut self, tasks: Vec<Task>) -> Self {
        self.scheduled = tasks;
        self
    }

    /// Fail the "today" view
    #[must_use]
    pub fn with_failing_today(mut self, error: SourceError) -> Self {
        self.failures.push((None, error));
        self
    }

    /// Fail the due-date filter for `date`
    #[must_use]
    pub fn with_failing_date(mut self, date: NaiveDate, error: SourceError) -> Self {
        self.failures.push((Some(date), error));
        self
    }
}

#[async_trait]
impl TaskSource for SyntheticTasks {
    async fn tasks(&self, filter: TaskFilter) -> SourceResult<Vec<Task>> {
        let key = match filter {
            TaskFilter::Today => None,
            TaskFilter::DueOn(date) => Some(date),
        };
        if let Some((_, error)) = self.failures.iter().find(|(date, _)| *date == key) {
            return Err(error.clone());
        }
        Ok(match filter {
            TaskFilter::Today => self.today.clone(),
            TaskFilter::DueOn(date) => self
                .scheduled
                .iter()
                .filter(|task| task.due.as_ref().and_then(|due| due.date) == Some(date))
                .cloned()
                .collect(),
        })
    }
}

// ============================================================================
// Workouts
// ============================================================================

/// Synthetic workout log (most recent first)
#[derive(Debug, Clone, Default)]
pub struct SyntheticWorkouts {
    workouts: Vec<Workout>,
    failure: Option<SourceError>,
}

impl SyntheticWorkouts {
    /// Log returning `workouts`
    #[must_use]
    pub const fn new(workouts: Vec<Workout>) -> Self {
        Self {
            workouts,
            failure: None,
        }
    }

    /// Fail every query with `error`
    #[must_use]
    pub fn failing(error: SourceError) -> Self {
        Self {
            workouts: Vec::new(),
            failure: Some(error),
        }
    }
}

#[async_trait]
impl WorkoutSource for SyntheticWorkouts {
    async fn recent_workouts(&self, page_size: u32) -> SourceResult<Vec<Workout>> {
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        Ok(self
            .workouts
            .iter()
            .take(page_size as usize)
            .cloned()
            .collect())
    }
}

// ============================================================================
// Demo bundle
// ============================================================================

/// One synthetic implementation of every source
#[derive(Debug, Clone, Default)]
pub struct SyntheticSources {
    /// Health summary
    pub health: SyntheticHealthSummary,
    /// Metrics store
    pub metrics: SyntheticMetricsStore,
    /// Calendar
    pub calendar: SyntheticCalendar,
    /// Task tracker
    pub tasks: SyntheticTasks,
    /// Workout log
    pub workouts: SyntheticWorkouts,
}

fn demo_sample(metric: &str, at: DateTime<FixedOffset>, value: f64) -> MetricSample {
    MetricSample {
        metric: metric.to_owned(),
        timestamp: at.format("%Y-%m-%d %H:%M:%S %z").to_string(),
        value,
    }
}

fn demo_task(content: &str, label: &str, done: bool, due: NaiveDate) -> Task {
    Task {
        content: content.to_owned(),
        labels: vec![label.to_owned()],
        is_completed: done,
        due: Some(TaskDue {
            date: Some(due),
            datetime: None,
        }),
    }
}

impl SyntheticSources {
    /// A plausible day of data around `now`, with calendar events on the
    /// first two accounts and meds tagged with `med_label`.
    #[must_use]
    pub fn demo(now: DateTime<FixedOffset>, accounts: &[CalendarAccount], med_label: &str) -> Self {
        let offset = *now.offset();
        let today = now.date_naive();
        let tomorrow = today.checked_add_days(Days::new(1)).unwrap_or(today);
        let at = |date: NaiveDate, hour: u32, minute: u32| {
            date.and_hms_opt(hour, minute, 0)
                .and_then(|naive| offset.from_local_datetime(&naive).single())
                .unwrap_or(now)
        };
        let stamp = |date: NaiveDate| at(date, 6, 0).format("%Y-%m-%d %H:%M:%S %z").to_string();

        let health = SyntheticHealthSummary::default()
            .with_reading(metrics::SLEEP_TOTAL, 7.4, "hr", &stamp(today))
            .with_reading(metrics::SLEEP_DEEP, 1.1, "hr", &stamp(today))
            .with_reading(metrics::SLEEP_REM, 1.6, "hr", &stamp(today))
            .with_reading(metrics::RESTING_HEART_RATE, 54.0, "count/min", &stamp(today))
            .with_reading(metrics::HEART_RATE_VARIABILITY, 38.0, "ms", &stamp(today))
            .with_reading(metrics::BLOOD_OXYGEN_SATURATION, 97.0, "%", &stamp(today));

        let mut samples = vec![
            demo_sample(metrics::HEART_RATE_VARIABILITY, at(today, 2, 0), 44.0),
            demo_sample(metrics::HEART_RATE_VARIABILITY, at(today, 5, 0), 50.0),
            demo_sample(metrics::SLEEP_TOTAL, at(today, 6, 0), 7.4),
            demo_sample(metrics::SLEEP_DEEP, at(today, 6, 0), 1.2),
            demo_sample(metrics::SLEEP_REM, at(today, 6, 0), 1.7),
            demo_sample(metrics::SLEEP_CORE, at(today, 6, 0), 4.5),
            demo_sample(metrics::RESPIRATORY_RATE, at(today, 6, 0), 14.5),
            demo_sample(metrics::RESTING_HEART_RATE, at(today, 6, 0), 53.0),
            demo_sample(metrics::ACTIVE_ENERGY, at(today, 12, 0), 320.0),
            demo_sample(metrics::ACTIVE_ENERGY, at(today, 18, 0), 291.0),
            demo_sample(metrics::DIETARY_ENERGY, at(today, 8, 0), 600.0),
            demo_sample(metrics::DIETARY_ENERGY, at(today, 13, 0), 1250.0),
            demo_sample(metrics::PROTEIN, at(today, 8, 0), 40.0),
            demo_sample(metrics::PROTEIN, at(today, 13, 0), 104.4),
            demo_sample(metrics::STEPS, at(today, 18, 0), 9_412.0),
            demo_sample(metrics::STAND_HOURS, at(today, 18, 0), 11.0),
        ];
        if let Some(yesterday) = today.checked_sub_days(Days::new(1)) {
            samples.push(demo_sample(
                metrics::HEART_RATE_VARIABILITY,
                at(yesterday, 4, 0),
                41.0,
            ));
        }

        let mut calendar = SyntheticCalendar::new();
        let mut accounts_iter = accounts.iter();
        if let Some(first) = accounts_iter.next() {
            calendar = calendar
                .with_event(&first.account, at(today, 9, 0), "School run")
                .with_event(&first.account, at(today, 17, 30), "Gym with Jesper")
                .with_all_day_event(&first.account, today, "Bin day")
                .with_event(&first.account, at(tomorrow, 7, 0), "Morning workout");
        }
        if let Some(second) = accounts_iter.next() {
            calendar = calendar
                .with_event(&second.account, at(today, 10, 30), "Team sync")
                .with_event(&second.account, at(today, 14, 0), "Design review")
                .with_event(&second.account, at(tomorrow, 9, 30), "Planning");
        }

        let yesterday = today.checked_sub_days(Days::new(1)).unwrap_or(today);
        let tasks = SyntheticTasks::new(vec![
            demo_task("Vitamin D", med_label, true, today),
            demo_task("Magnesium", med_label, false, today),
            demo_task("Omega-3", med_label, false, yesterday),
            demo_task("Reply to landlord", "errands", false, today),
        ])
        .with_scheduled(vec![
            demo_task("Vitamin D", med_label, false, tomorrow),
            demo_task("Magnesium", med_label, false, tomorrow),
        ]);

        let workout = |id: &str, title: &str, days_ago: i64, exercises: &[&str]| Workout {
            id: id.to_owned(),
            title: title.to_owned(),
            start_time: Some(at(today, 17, 30) - Duration::days(days_ago)),
            duration: "1h5m".to_owned(),
            exercises: exercises.iter().map(|name| (*name).to_owned()).collect(),
        };
        let workouts = SyntheticWorkouts::new(vec![
            workout("demo-3", "Upper Body", 1, &["Bench Press", "Pull Up"]),
            workout("demo-2", "Lower Body", 3, &["Squat", "Romanian Deadlift"]),
            workout("demo-1", "Full Body", 9, &["Deadlift", "Overhead Press"]),
        ]);

        Self {
            health,
            metrics: SyntheticMetricsStore::new(samples),
            calendar,
            tasks,
            workouts,
        }
    }
}
