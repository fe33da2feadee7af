// ABOUTME: Immutable per-user profile consumed by the energy and protein calculations
// ABOUTME: Supplied as static configuration, never computed or held as global state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Daybrief Contributors

use crate::constants::{defaults, limits};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Sex used by the Mifflin-St Jeor equation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    /// Male (+5 kcal constant)
    Male,
    /// Female (-161 kcal constant)
    Female,
}

impl FromStr for Sex {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            other => Err(AppError::config_invalid(format!(
                "unknown sex '{other}', expected 'male' or 'female'"
            ))),
        }
    }
}

/// Fixed per-user inputs for BMR and protein adequacy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Age (years)
    pub age: u32,
    /// Body weight (kg)
    pub weight_kg: f64,
    /// Height (cm)
    pub height_cm: f64,
    /// Sex
    pub sex: Sex,
    /// Daily protein target (grams)
    pub protein_target_g: f64,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            age: defaults::USER_AGE,
            weight_kg: defaults::USER_WEIGHT_KG,
            height_cm: defaults::USER_HEIGHT_CM,
            sex: Sex::Male,
            protein_target_g: defaults::PROTEIN_TARGET_G,
        }
    }
}

impl UserProfile {
    /// Validate ranges the energy and protein calculations rely on
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when a value is outside its plausible range
    pub fn validate(&self) -> AppResult<()> {
        if !(f64::MIN_POSITIVE..=limits::MAX_WEIGHT_KG).contains(&self.weight_kg) {
            return Err(AppError::config_invalid(
                "weight must be between 0 and 300 kg",
            ));
        }
        if !(f64::MIN_POSITIVE..=limits::MAX_HEIGHT_CM).contains(&self.height_cm) {
            return Err(AppError::config_invalid(
                "height must be between 0 and 300 cm",
            ));
        }
        if !(limits::MIN_AGE..=limits::MAX_AGE).contains(&self.age) {
            return Err(AppError::config_invalid(
                "age must be between 10 and 120 years",
            ));
        }
        if !(self.protein_target_g.is_finite() && self.protein_target_g > 0.0) {
            return Err(AppError::config_invalid(
                "protein target must be positive",
            ));
        }
        Ok(())
    }
}
