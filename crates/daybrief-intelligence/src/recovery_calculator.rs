// ABOUTME: Recovery status from heart rate variability
// ABOUTME: Absent HRV is UNKNOWN, never treated as zero
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Daybrief Contributors

use daybrief_core::constants::thresholds::recovery::{GOOD_MIN_HRV_MS, POOR_MAX_HRV_MS};
use daybrief_core::models::RecoveryStatus;

/// Classify recovery: HRV <= 20 is POOR, 20 < HRV < 40 is OK, HRV >= 40 is GOOD
#[must_use]
pub fn classify_recovery(hrv_ms: Option<f64>) -> RecoveryStatus {
    match hrv_ms {
        None => RecoveryStatus::Unknown,
        Some(hrv) if hrv <= POOR_MAX_HRV_MS => RecoveryStatus::Poor,
        Some(hrv) if hrv < GOOD_MIN_HRV_MS => RecoveryStatus::Ok,
        Some(_) => RecoveryStatus::Good,
    }
}
