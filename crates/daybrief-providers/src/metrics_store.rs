// ABOUTME: SQLite-backed fine-grained metrics store opened read-only through sqlx
// ABOUTME: Daily average, daily total, latest-of-day and sleep stage queries over the metrics table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Daybrief Contributors

//! # Metrics Store
//!
//! The store holds one row per sample in a `metrics` table:
//!
//! | column        | content                                           |
//! |---------------|---------------------------------------------------|
//! | `metric_name` | e.g. `heart_rate_variability`                     |
//! | `timestamp`   | text starting with `YYYY-MM-DD`                   |
//! | `value`       | numeric sample                                    |
//!
//! A sample belongs to a date when its timestamp text starts with that date.

use crate::core::{MetricsSource, MetricsStore};
use async_trait::async_trait;
use chrono::NaiveDate;
use daybrief_core::constants::{metrics, sources};
use daybrief_core::errors::{SourceError, SourceResult};
use daybrief_core::models::SleepStages;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Row, SqlitePool};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

fn day_prefix(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Location of the SQLite metrics database
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqliteMetricsSource {
    path: PathBuf,
}

impl SqliteMetricsSource {
    /// Source for the database at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl MetricsSource for SqliteMetricsSource {
    async fn open(&self) -> SourceResult<Arc<dyn MetricsStore>> {
        let store = SqliteMetricsStore::open(&self.path).await?;
        Ok(Arc::new(store))
    }
}

/// Open read-only session on the metrics database
#[derive(Debug, Clone)]
pub struct SqliteMetricsStore {
    pool: SqlitePool,
}

impl SqliteMetricsStore {
    /// Open the database read-only; a missing file is an error, never created
    ///
    /// # Errors
    ///
    /// Returns `Unavailable` when the database cannot be opened
    pub async fn open(path: &Path) -> SourceResult<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .read_only(true)
            .create_if_missing(false);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .map_err(|e| {
                SourceError::unavailable(
                    sources::METRICS_STORE,
                    format!("cannot open {}: {e}", path.display()),
                )
            })?;

        debug!(path = %path.display(), "Opened metrics store");
        Ok(Self { pool })
    }

    async fn scalar(
        &self,
        query_name: &str,
        sql: &str,
        metric: &str,
        date: NaiveDate,
    ) -> SourceResult<Option<f64>> {
        let row = sqlx::query(sql)
            .bind(metric)
            .bind(day_prefix(date))
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| SourceError::query(sources::METRICS_STORE, query_name, e))?;

        row.map_or(Ok(None), |row| {
            row.try_get::<Option<f64>, _>(0)
                .map_err(|e| SourceError::query(sources::METRICS_STORE, query_name, e))
        })
    }
}

#[async_trait]
impl MetricsStore for SqliteMetricsStore {
    async fn daily_average(&self, metric: &str, date: NaiveDate) -> SourceResult<Option<f64>> {
        self.scalar(
            &format!("{metric} average"),
            r"
            SELECT AVG(value) FROM metrics
            WHERE metric_name = $1
            AND timestamp LIKE $2 || '%'
            ",
            metric,
            date,
        )
        .await
    }

    async fn day_total(&self, metric: &str, date: NaiveDate) -> SourceResult<Option<f64>> {
        self.scalar(
            &format!("{metric} total"),
            r"
            SELECT CAST(SUM(value) AS REAL) FROM metrics
            WHERE metric_name = $1
            AND timestamp LIKE $2 || '%'
            ",
            metric,
            date,
        )
        .await
    }

    async fn latest_value(&self, metric: &str, date: NaiveDate) -> SourceResult<Option<f64>> {
        self.scalar(
            &format!("{metric} latest"),
            r"
            SELECT CAST(value AS REAL) FROM metrics
            WHERE metric_name = $1
            AND timestamp LIKE $2 || '%'
            ORDER BY timestamp DESC
            LIMIT 1
            ",
            metric,
            date,
        )
        .await
    }

    async fn sleep_stages(&self, date: NaiveDate) -> SourceResult<SleepStages> {
        let query_name = "sleep stages";
        let rows = sqlx::query(
            r"
            SELECT metric_name, CAST(value AS REAL) AS value FROM metrics
            WHERE metric_name IN ($1, $2, $3)
            AND timestamp LIKE $4 || '%'
            ORDER BY timestamp ASC
            ",
        )
        .bind(metrics::SLEEP_DEEP)
        .bind(metrics::SLEEP_REM)
        .bind(metrics::SLEEP_CORE)
        .bind(day_prefix(date))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| SourceError::query(sources::METRICS_STORE, query_name, e))?;

        // Rows are oldest first; the latest sample of each stage wins
        let mut stages = SleepStages::default();
        for row in rows {
            let name: String = row
                .try_get("metric_name")
                .map_err(|e| SourceError::query(sources::METRICS_STORE, query_name, e))?;
            let value: Option<f64> = row
                .try_get("value")
                .map_err(|e| SourceError::query(sources::METRICS_STORE, query_name, e))?;
            let Some(value) = value else {
                continue;
            };
            match name.as_str() {
                metrics::SLEEP_DEEP => stages.deep_hours = Some(value),
                metrics::SLEEP_REM => stages.rem_hours = Some(value),
                metrics::SLEEP_CORE => stages.core_hours = Some(value),
                _ => {}
            }
        }
        Ok(stages)
    }
}
