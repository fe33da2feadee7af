// ABOUTME: Morning and evening report shapes plus the classification result
// ABOUTME: Reports own their records and the warnings accumulated while fetching
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Daybrief Contributors

use super::calendar::{CalendarData, EventInfo};
use super::health::{SleepRecord, VitalsRecord};
use super::nutrition::{EnergyRecord, ProteinRecord};
use super::tasks::{MedsData, ProtocolsData};
use super::training::{TrainingData, WorkoutInfo};
use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Report mode
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BriefingMode {
    /// Morning outlook
    #[default]
    Morning,
    /// Evening wrap-up
    Evening,
}

impl fmt::Display for BriefingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Morning => write!(f, "morning"),
            Self::Evening => write!(f, "evening"),
        }
    }
}

/// Sleep quality classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SleepQuality {
    /// Seven hours or more with enough deep sleep
    Good,
    /// Adequate
    Ok,
    /// Short or shallow night
    Poor,
    /// No current-day data
    #[default]
    Unknown,
}

/// HRV-based recovery classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecoveryStatus {
    /// HRV at or above 40 ms
    Good,
    /// HRV between 20 and 40 ms
    Ok,
    /// HRV at or below 20 ms
    Poor,
    /// HRV not reported
    #[default]
    Unknown,
}

/// Morning calendar load
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MorningLoad {
    /// No morning events
    #[default]
    Clear,
    /// One or two morning events
    Light,
    /// Three or more morning events
    Packed,
}

/// Derived judgments for the morning report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Sleep quality
    pub sleep_quality: SleepQuality,
    /// Morning load
    pub morning_load: MorningLoad,
    /// Recovery status
    pub recovery_status: RecoveryStatus,
    /// Free-text recommendation
    pub recommendation: String,
}

/// Morning outlook
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MorningReport {
    /// Always `morning`
    pub mode: BriefingMode,
    /// When the report was generated
    pub generated_at: DateTime<FixedOffset>,
    /// Day the report describes
    pub target_date: NaiveDate,
    /// Last night's sleep
    pub sleep: SleepRecord,
    /// Vitals
    pub vitals: VitalsRecord,
    /// Calendar buckets
    pub calendar: CalendarData,
    /// Medication status
    pub meds: MedsData,
    /// Training summary
    pub training: TrainingData,
    /// Derived judgments
    pub classification: Classification,
    /// Per-source failures, one entry per failed query
    #[serde(rename = "errors", default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl MorningReport {
    /// Empty report for `target_date`
    #[must_use]
    pub fn new(generated_at: DateTime<FixedOffset>, target_date: NaiveDate) -> Self {
        Self {
            mode: BriefingMode::Morning,
            generated_at,
            target_date,
            sleep: SleepRecord::default(),
            vitals: VitalsRecord::default(),
            calendar: CalendarData::default(),
            meds: MedsData::default(),
            training: TrainingData::default(),
            classification: Classification::default(),
            warnings: Vec::new(),
        }
    }
}

/// Activity section of the evening report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityData {
    /// Step count today
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<i64>,
    /// Today's workout
    pub workout: WorkoutInfo,
    /// Stand hours today
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stand_hours: Option<i64>,
}

/// Last night's sleep as shown in the evening report
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SleepInfo {
    /// Total sleep (hours)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_hrs: Option<f64>,
    /// Deep sleep (hours)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deep_hrs: Option<f64>,
}

/// Recovery section of the evening report
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecoveryData {
    /// Today's average HRV (ms)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hrv_ms: Option<f64>,
    /// Yesterday's average HRV (ms)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hrv_yesterday_ms: Option<f64>,
    /// Latest resting heart rate (bpm)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resting_hr_bpm: Option<f64>,
    /// Sleep recorded for the target date
    pub sleep_last_night: SleepInfo,
}

/// Preview of the next day
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TomorrowData {
    /// Earliest timed event
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_event: Option<EventInfo>,
    /// A calendar event looks like a workout
    pub workout_scheduled: bool,
    /// Names of med/protocol tasks due
    pub meds_due: Vec<String>,
}

/// Evening wrap-up
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EveningReport {
    /// Always `evening`
    pub mode: BriefingMode,
    /// When the report was generated
    pub generated_at: DateTime<FixedOffset>,
    /// Day the report describes
    pub target_date: NaiveDate,
    /// Energy balance
    pub energy: EnergyRecord,
    /// Protein adequacy
    pub protein: ProteinRecord,
    /// Steps, stand hours and today's workout
    pub activity: ActivityData,
    /// HRV, resting heart rate and last night's sleep
    pub recovery: RecoveryData,
    /// Protocol adherence
    pub protocols: ProtocolsData,
    /// Next-day preview
    pub tomorrow: TomorrowData,
    /// Per-source failures, one entry per failed query
    #[serde(rename = "errors", default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl EveningReport {
    /// Empty report for `target_date`
    #[must_use]
    pub fn new(generated_at: DateTime<FixedOffset>, target_date: NaiveDate) -> Self {
        Self {
            mode: BriefingMode::Evening,
            generated_at,
            target_date,
            energy: EnergyRecord::default(),
            protein: ProteinRecord::default(),
            activity: ActivityData::default(),
            recovery: RecoveryData::default(),
            protocols: ProtocolsData::default(),
            tomorrow: TomorrowData::default(),
            warnings: Vec::new(),
        }
    }
}
