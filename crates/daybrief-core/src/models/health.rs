// ABOUTME: Sleep and vitals records plus the health summary snapshot they are built from
// ABOUTME: Implements current-day attribution and the metrics-store overlay rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Daybrief Contributors

use crate::constants::metrics;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Single latest-value reading from the health summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReading {
    /// Metric value
    pub value: f64,
    /// Unit label as reported by the source
    pub unit: String,
    /// Timestamp string as reported by the source
    pub timestamp: String,
}

/// Coarse "latest stats" snapshot keyed by metric name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthSnapshot {
    /// Latest reading per metric
    pub latest: BTreeMap<String, HealthReading>,
}

impl HealthSnapshot {
    /// Latest value for a metric, if the summary reported it
    #[must_use]
    pub fn value(&self, metric: &str) -> Option<f64> {
        self.latest.get(metric).map(|reading| reading.value)
    }

    /// Build the sleep record for `target`.
    ///
    /// Total sleep marks the record as available; its timestamp decides
    /// whether the data belongs to last night.
    #[must_use]
    pub fn sleep_record(&self, target: NaiveDate) -> SleepRecord {
        let mut sleep = SleepRecord::default();
        if let Some(total) = self.latest.get(metrics::SLEEP_TOTAL) {
            sleep.data_available = true;
            sleep.total_hours = Some(total.value);
            sleep.data_date = Some(total.timestamp.clone());
            sleep.is_current_day = SleepRecord::is_current_for(&total.timestamp, target);
        }
        sleep.deep_hours = self.value(metrics::SLEEP_DEEP);
        sleep.rem_hours = self.value(metrics::SLEEP_REM);
        sleep
    }

    /// Vitals reported by the summary
    #[must_use]
    pub fn vitals(&self) -> VitalsRecord {
        VitalsRecord {
            resting_hr_bpm: self.value(metrics::RESTING_HEART_RATE),
            hrv_ms: self.value(metrics::HEART_RATE_VARIABILITY),
            spo2_pct: self.value(metrics::BLOOD_OXYGEN_SATURATION),
            respiratory_rate: None,
        }
    }
}

/// Sleep stage hours from the fine-grained metrics store
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SleepStages {
    /// Deep sleep (hours)
    pub deep_hours: Option<f64>,
    /// REM sleep (hours)
    pub rem_hours: Option<f64>,
    /// Core sleep (hours)
    pub core_hours: Option<f64>,
}

/// Last night's sleep
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SleepRecord {
    /// Total sleep (hours)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_hours: Option<f64>,
    /// Deep sleep (hours)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deep_hours: Option<f64>,
    /// REM sleep (hours)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rem_hours: Option<f64>,
    /// Core sleep (hours)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub core_hours: Option<f64>,
    /// Timestamp of the total-sleep reading
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_date: Option<String>,
    /// Whether the reading belongs to the night before the target date
    pub is_current_day: bool,
    /// Whether any total-sleep reading was found
    pub data_available: bool,
}

impl SleepRecord {
    /// Whether a reading timestamp falls on `target` or the day before it.
    ///
    /// Sleep recorded at midnight is attributed to the prior night, so both
    /// days count as current. Only the leading `YYYY-MM-DD` of the timestamp
    /// is considered.
    #[must_use]
    pub fn is_current_for(timestamp: &str, target: NaiveDate) -> bool {
        let Some(date) = timestamp
            .get(..10)
            .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
        else {
            return false;
        };
        date == target || target.checked_sub_days(Days::new(1)) == Some(date)
    }

    /// Apply metrics-store stage hours; present values win
    pub fn apply_stages(&mut self, stages: &SleepStages) {
        if stages.deep_hours.is_some() {
            self.deep_hours = stages.deep_hours;
        }
        if stages.rem_hours.is_some() {
            self.rem_hours = stages.rem_hours;
        }
        if stages.core_hours.is_some() {
            self.core_hours = stages.core_hours;
        }
    }
}

/// Cardiovascular vitals; each field absent when not reported
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct VitalsRecord {
    /// Resting heart rate (bpm)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resting_hr_bpm: Option<f64>,
    /// Heart rate variability (ms)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hrv_ms: Option<f64>,
    /// Blood oxygen saturation (%)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spo2_pct: Option<f64>,
    /// Respiratory rate (breaths/min)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub respiratory_rate: Option<f64>,
}

impl VitalsRecord {
    /// Overlay another record on top of this one; present values win
    pub fn overlay(&mut self, other: &Self) {
        self.resting_hr_bpm = other.resting_hr_bpm.or(self.resting_hr_bpm);
        self.hrv_ms = other.hrv_ms.or(self.hrv_ms);
        self.spo2_pct = other.spo2_pct.or(self.spo2_pct);
        self.respiratory_rate = other.respiratory_rate.or(self.respiratory_rate);
    }
}
