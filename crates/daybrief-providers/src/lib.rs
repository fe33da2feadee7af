// ABOUTME: Source providers for daybrief: health summary, metrics store, calendar, tasks, workouts
// ABOUTME: Source query traits, subprocess runner, CLI and SQLite implementations, synthetic sources
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Daybrief Contributors

#![deny(unsafe_code)]

//! Source provider implementations and core abstractions.
//!
//! This crate provides the unified provider layer the fetch coordinator talks
//! to. Every provider returns shared models from `daybrief_core::models` or a
//! `SourceError` naming the failing source.

/// Subprocess runner with timeout
pub mod command;
/// Core source traits
pub mod core;
/// CLI-backed providers
pub mod cli;
/// SQLite metrics store
pub mod metrics_store;
/// In-memory synthetic sources
pub mod synthetic_provider;

pub use crate::core::{
    CalendarSource, HealthSummarySource, MetricsSource, MetricsStore, TaskSource, WorkoutSource,
};
pub use cli::{GogCalendarCli, HealthIngestCli, HevyCli, TodoistCli};
pub use command::CommandRunner;
pub use metrics_store::{SqliteMetricsSource, SqliteMetricsStore};
pub use synthetic_provider::{
    MetricSample, SyntheticCalendar, SyntheticHealthSummary, SyntheticMetricsStore,
    SyntheticSources, SyntheticTasks, SyntheticWorkouts,
};
