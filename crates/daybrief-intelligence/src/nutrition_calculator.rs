// ABOUTME: Energy and protein calculations for the evening wrap-up
// ABOUTME: Mifflin-St Jeor BMR, energy balance status and protein adequacy with half-up rounding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Daybrief Contributors

//! Nutrition Calculator Module
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>

#![allow(clippy::cast_possible_truncation)] // Safe: kcal values are far inside i64 range

use daybrief_core::constants::limits;
use daybrief_core::constants::thresholds::{energy::MAINTENANCE_BAND_KCAL, protein::ON_TRACK_FRACTION};
use daybrief_core::errors::{AppError, AppResult};
use daybrief_core::models::{EnergyRecord, EnergyStatus, ProteinRecord, Sex, UserProfile};
use serde::{Deserialize, Serialize};

/// Mifflin-St Jeor weight coefficient
const MSJ_WEIGHT_COEF: f64 = 10.0;
/// Mifflin-St Jeor height coefficient
const MSJ_HEIGHT_COEF: f64 = 6.25;
/// Mifflin-St Jeor age coefficient
const MSJ_AGE_COEF: f64 = -5.0;
const MSJ_MALE_CONSTANT: f64 = 5.0;
const MSJ_FEMALE_CONSTANT: f64 = -161.0;

/// Round to the nearest whole number, halves away from negative infinity
#[must_use]
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor formula
///
/// `10 x weight + 6.25 x height - 5 x age + (5 male | -161 female)`, rounded
/// half-up to whole kcal.
///
/// # Errors
///
/// Returns `InvalidInput` if weight, height or age is outside its plausible range
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age: u32, sex: Sex) -> AppResult<i64> {
    if !(f64::MIN_POSITIVE..=limits::MAX_WEIGHT_KG).contains(&weight_kg) {
        return Err(AppError::invalid_input(format!(
            "weight {weight_kg} kg is outside 0-{} kg",
            limits::MAX_WEIGHT_KG
        )));
    }
    if !(f64::MIN_POSITIVE..=limits::MAX_HEIGHT_CM).contains(&height_cm) {
        return Err(AppError::invalid_input(format!(
            "height {height_cm} cm is outside 0-{} cm",
            limits::MAX_HEIGHT_CM
        )));
    }
    if !(limits::MIN_AGE..=limits::MAX_AGE).contains(&age) {
        return Err(AppError::invalid_input(format!(
            "age {age} is outside {}-{} years",
            limits::MIN_AGE,
            limits::MAX_AGE
        )));
    }

    let weight_component = MSJ_WEIGHT_COEF * weight_kg;
    let height_component = MSJ_HEIGHT_COEF * height_cm;
    let age_component = MSJ_AGE_COEF * f64::from(age);
    let sex_constant = match sex {
        Sex::Male => MSJ_MALE_CONSTANT,
        Sex::Female => MSJ_FEMALE_CONSTANT,
    };

    Ok(round_half_up(
        weight_component + height_component + age_component + sex_constant,
    ))
}

/// BMR for a configured user profile
///
/// # Errors
///
/// Returns `ConfigInvalid` if the profile fails validation
pub fn calculate_profile_bmr(profile: &UserProfile) -> AppResult<i64> {
    profile.validate()?;
    calculate_bmr(profile.weight_kg, profile.height_cm, profile.age, profile.sex)
}

/// Result of an energy balance calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyBalance {
    /// BMR plus active energy
    pub total_burned_kcal: f64,
    /// Consumed minus total burned, rounded half-up
    pub balance_kcal: i64,
    /// Deficit, surplus or maintenance
    pub status: EnergyStatus,
}

/// Energy balance for a day.
///
/// Balance below -50 kcal is a deficit, above 50 kcal a surplus, anything in
/// between maintenance.
#[must_use]
pub fn calculate_energy_balance(bmr_kcal: i64, active_kcal: f64, consumed_kcal: f64) -> EnergyBalance {
    let total_burned_kcal = bmr_kcal as f64 + active_kcal;
    let balance_kcal = round_half_up(consumed_kcal - total_burned_kcal);
    let status = if balance_kcal < -MAINTENANCE_BAND_KCAL {
        EnergyStatus::Deficit
    } else if balance_kcal > MAINTENANCE_BAND_KCAL {
        EnergyStatus::Surplus
    } else {
        EnergyStatus::Maintenance
    };

    EnergyBalance {
        total_burned_kcal,
        balance_kcal,
        status,
    }
}

/// Protein adequacy for a day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProteinStatus {
    /// Target minus consumed, floored at zero
    pub remaining_g: f64,
    /// Consumed at least 95% of the target
    pub on_track: bool,
}

/// Protein remaining and on-track flag
#[must_use]
pub fn calculate_protein_status(consumed_g: f64, target_g: f64) -> ProteinStatus {
    ProteinStatus {
        remaining_g: (target_g - consumed_g).max(0.0),
        on_track: consumed_g >= ON_TRACK_FRACTION * target_g,
    }
}

/// Build the energy section from the day's totals.
///
/// Balance and status need both active and consumed energy; without them the
/// status is `unknown` and the derived fields stay absent.
#[must_use]
pub fn evaluate_energy(bmr_kcal: i64, active_kcal: Option<f64>, consumed_kcal: Option<f64>) -> EnergyRecord {
    let mut record = EnergyRecord {
        bmr_kcal,
        active_kcal,
        consumed_kcal,
        total_burned_kcal: active_kcal.map(|active| bmr_kcal as f64 + active),
        ..EnergyRecord::default()
    };
    if let (Some(active), Some(consumed)) = (active_kcal, consumed_kcal) {
        let balance = calculate_energy_balance(bmr_kcal, active, consumed);
        record.deficit_or_surplus_kcal = Some(balance.balance_kcal);
        record.status = balance.status;
    }
    record
}

/// Build the protein section from the day's total
#[must_use]
pub fn evaluate_protein(consumed_g: Option<f64>, target_g: f64) -> ProteinRecord {
    let status = consumed_g.map(|consumed| calculate_protein_status(consumed, target_g));
    ProteinRecord {
        consumed_g,
        target_g,
        remaining_g: status.map(|status| status.remaining_g),
        on_track: status.map(|status| status.on_track),
    }
}
