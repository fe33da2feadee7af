// ABOUTME: Canonical report model for the daybrief engine
// ABOUTME: Re-exports sleep, vitals, calendar, task, training, nutrition and report types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Daybrief Contributors

//! # Data Models
//!
//! The canonical, mode-specific in-memory representation of a briefing.
//!
//! ## Design Principles
//!
//! - **Provider Agnostic**: Source DTOs are converted into these models inside
//!   the providers crate; nothing here knows about CLI payload shapes.
//! - **Absent is not zero**: Every field a source may legitimately omit is an
//!   `Option`, and classifications that depend on it report `UNKNOWN`.
//! - **Serializable**: Field names are the report's compatibility surface.

mod calendar;
mod health;
mod nutrition;
mod profile;
mod report;
mod tasks;
mod training;

// Health domain
pub use health::{HealthReading, HealthSnapshot, SleepRecord, SleepStages, VitalsRecord};

// Calendar domain
pub use calendar::{CalendarAccount, CalendarData, CalendarEntry, CalendarEvent, EventInfo};

// Task domain
pub use tasks::{MedStatus, MedTask, MedsData, ProtocolsData, Task, TaskDue, TaskFilter};

// Training domain
pub use training::{TrainingData, Workout, WorkoutInfo, WorkoutSummary};

// Nutrition domain
pub use nutrition::{EnergyRecord, EnergyStatus, ProteinRecord};

// User profile
pub use profile::{Sex, UserProfile};

// Reports
pub use report::{
    ActivityData, BriefingMode, Classification, EveningReport, MorningLoad, MorningReport,
    RecoveryData, RecoveryStatus, SleepInfo, SleepQuality, TomorrowData,
};
