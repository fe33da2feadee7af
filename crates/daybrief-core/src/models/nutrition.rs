// ABOUTME: Energy balance and protein adequacy records for the evening wrap-up
// ABOUTME: Derived fields stay absent when the intake or expenditure they need is absent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Daybrief Contributors

use serde::{Deserialize, Serialize};

/// Energy balance classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum EnergyStatus {
    /// Consumed more than 50 kcal below total burned
    Deficit,
    /// Consumed more than 50 kcal above total burned
    Surplus,
    /// Within 50 kcal of total burned
    Maintenance,
    /// Intake or active energy not reported
    #[default]
    Unknown,
}

/// Energy section of the evening report
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnergyRecord {
    /// Consumed minus total burned, rounded half-up (negative = deficit)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deficit_or_surplus_kcal: Option<i64>,
    /// Balance classification
    pub status: EnergyStatus,
    /// Basal metabolic rate from the user profile
    pub bmr_kcal: i64,
    /// Active energy burned today
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_kcal: Option<f64>,
    /// BMR plus active energy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_burned_kcal: Option<f64>,
    /// Dietary energy consumed today
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumed_kcal: Option<f64>,
}

/// Protein section of the evening report
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProteinRecord {
    /// Protein consumed today (grams)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumed_g: Option<f64>,
    /// Daily target from the user profile (grams)
    pub target_g: f64,
    /// Target minus consumed, floored at zero
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_g: Option<f64>,
    /// Consumed at least 95% of the target
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_track: Option<bool>,
}
