// ABOUTME: Classification engine for the daybrief morning and evening reports
// ABOUTME: Sleep quality, recovery, morning load, recommendation, nutrition and training rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Daybrief Contributors

#![deny(unsafe_code)]

//! # Daybrief Intelligence
//!
//! Pure, deterministic functions computing derived judgments from a fully
//! populated report. Nothing in this crate performs I/O or suspends.
//!
//! ## Modules
//!
//! - **`sleep_analysis`**: Sleep quality with the deep-sleep downgrade
//! - **`recovery_calculator`**: HRV-based recovery status
//! - **`calendar_load`**: Morning load from the morning event count
//! - **`recommendation_engine`**: Ordered recommendation rules, first match wins
//! - **`nutrition_calculator`**: BMR, energy balance and protein adequacy
//! - **`training_load`**: Last workout, days since, weekly count
//! - **`preview`**: Tomorrow preview derivations for the evening report

/// Calendar morning load classification
pub mod calendar_load;

/// BMR, energy balance and protein adequacy
pub mod nutrition_calculator;

/// Tomorrow preview derivations
pub mod preview;

/// Priority-ordered recommendation rules
pub mod recommendation_engine;

/// HRV-based recovery classification
pub mod recovery_calculator;

/// Sleep quality classification
pub mod sleep_analysis;

/// Workout history summary
pub mod training_load;

pub use calendar_load::classify_morning_load;
pub use nutrition_calculator::{
    calculate_bmr, calculate_energy_balance, calculate_profile_bmr, calculate_protein_status,
    evaluate_energy, evaluate_protein, round_half_up, EnergyBalance, ProteinStatus,
};
pub use recommendation_engine::{recommend, RecommendationRule, RECOMMENDATION_RULES};
pub use recovery_calculator::classify_recovery;
pub use sleep_analysis::classify_sleep;
pub use training_load::summarize_training;

use daybrief_core::models::{Classification, MorningReport};
use tracing::debug;

/// Classify a fully merged morning report.
///
/// Reads the report only; the caller stores the result in
/// `report.classification`.
#[must_use]
pub fn classify(report: &MorningReport) -> Classification {
    let sleep_quality = classify_sleep(&report.sleep);
    let recovery_status = classify_recovery(report.vitals.hrv_ms);
    let morning_load = classify_morning_load(report.calendar.morning_count);
    let recommendation = recommend(
        sleep_quality,
        recovery_status,
        morning_load,
        report.vitals.hrv_ms,
    );

    debug!(
        ?sleep_quality,
        ?recovery_status,
        ?morning_load,
        "Classified morning report"
    );

    Classification {
        sleep_quality,
        morning_load,
        recovery_status,
        recommendation,
    }
}
