// ABOUTME: Metric names shared by the health summary and the metrics store
// ABOUTME: Matches the names written by the health ingest pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Daybrief Contributors

/// Total sleep (hours)
pub const SLEEP_TOTAL: &str = "sleep_total";
/// Deep sleep (hours)
pub const SLEEP_DEEP: &str = "sleep_deep";
/// REM sleep (hours)
pub const SLEEP_REM: &str = "sleep_rem";
/// Core sleep (hours)
pub const SLEEP_CORE: &str = "sleep_core";
/// Resting heart rate (bpm)
pub const RESTING_HEART_RATE: &str = "resting_heart_rate";
/// Heart rate variability (ms)
pub const HEART_RATE_VARIABILITY: &str = "heart_rate_variability";
/// Blood oxygen saturation (%)
pub const BLOOD_OXYGEN_SATURATION: &str = "blood_oxygen_saturation";
/// Respiratory rate (breaths/min)
pub const RESPIRATORY_RATE: &str = "respiratory_rate";
/// Active energy burned (kcal)
pub const ACTIVE_ENERGY: &str = "active_energy";
/// Dietary energy consumed (kcal)
pub const DIETARY_ENERGY: &str = "dietary_energy";
/// Dietary protein (g)
pub const PROTEIN: &str = "protein";
/// Step count
pub const STEPS: &str = "steps";
/// Stand hours
pub const STAND_HOURS: &str = "stand_hours";
