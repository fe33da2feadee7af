// ABOUTME: Tests for BMR, energy balance and protein adequacy calculations
// ABOUTME: Includes reference profile values and absent-input handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Daybrief Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use daybrief_core::errors::ErrorCode;
use daybrief_core::models::{EnergyStatus, Sex, UserProfile};
use daybrief_intelligence::nutrition_calculator::{evaluate_energy, evaluate_protein};
use daybrief_intelligence::{
    calculate_bmr, calculate_energy_balance, calculate_profile_bmr, calculate_protein_status,
};

// ============================================================================
// BMR CALCULATION TESTS - Mifflin-St Jeor Formula
// ============================================================================

#[test]
fn test_bmr_reference_inputs() {
    // 730 + 1106.25 - 205 + 5 = 1636.25
    assert_eq!(calculate_bmr(73.0, 177.0, 41, Sex::Male).unwrap(), 1636);
    assert_eq!(calculate_profile_bmr(&UserProfile::default()).unwrap(), 1636);
}

#[test]
fn test_bmr_female_rounds_half_up() {
    // 600 + 1025 - 125 - 161 = 1339
    assert_eq!(calculate_bmr(60.0, 164.0, 25, Sex::Female).unwrap(), 1339);
    // 602.5 + 1025 - 125 - 161 = 1341.5 rounds up
    assert_eq!(calculate_bmr(60.25, 164.0, 25, Sex::Female).unwrap(), 1342);
}

#[test]
fn test_bmr_ignores_protein_target() {
    let lean = UserProfile {
        age: 25,
        weight_kg: 60.0,
        height_cm: 164.0,
        sex: Sex::Female,
        protein_target_g: 100.0,
    };
    let high_protein = UserProfile {
        protein_target_g: 180.0,
        ..lean.clone()
    };
    assert_eq!(
        calculate_profile_bmr(&lean).unwrap(),
        calculate_profile_bmr(&high_protein).unwrap()
    );
}

#[test]
fn test_bmr_rejects_out_of_range_inputs() {
    let cases = [
        (0.0, 177.0, 41),
        (-5.0, 177.0, 41),
        (301.0, 177.0, 41),
        (73.0, 0.0, 41),
        (73.0, 177.0, 9),
        (73.0, 177.0, 121),
    ];
    for (weight_kg, height_cm, age) in cases {
        let err = calculate_bmr(weight_kg, height_cm, age, Sex::Male).unwrap_err();
        assert_eq!(
            err.code,
            ErrorCode::InvalidInput,
            "weight={weight_kg} height={height_cm} age={age}"
        );
    }
}

#[test]
fn test_profile_bmr_rejects_invalid_profile() {
    let profile = UserProfile {
        weight_kg: 0.0,
        ..UserProfile::default()
    };
    let err = calculate_profile_bmr(&profile).unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
}

// ============================================================================
// ENERGY BALANCE
// ============================================================================

#[test]
fn test_energy_balance_deficit() {
    let balance = calculate_energy_balance(1636, 611.0, 1850.0);
    assert_eq!(balance.total_burned_kcal, 2247.0);
    assert_eq!(balance.balance_kcal, -397);
    assert_eq!(balance.status, EnergyStatus::Deficit);
}

#[test]
fn test_energy_balance_maintenance_band() {
    assert_eq!(
        calculate_energy_balance(1636, 500.0, 2136.0).status,
        EnergyStatus::Maintenance
    );
    assert_eq!(
        calculate_energy_balance(1636, 500.0, 2186.0).status,
        EnergyStatus::Maintenance
    );
    assert_eq!(
        calculate_energy_balance(1636, 500.0, 2187.0).status,
        EnergyStatus::Surplus
    );
    assert_eq!(
        calculate_energy_balance(1636, 500.0, 2086.0).status,
        EnergyStatus::Maintenance
    );
    assert_eq!(
        calculate_energy_balance(1636, 500.0, 2085.0).status,
        EnergyStatus::Deficit
    );
}

#[test]
fn test_evaluate_energy_requires_both_inputs() {
    let record = evaluate_energy(1636, None, Some(1900.0));
    assert_eq!(record.status, EnergyStatus::Unknown);
    assert!(record.total_burned_kcal.is_none());
    assert!(record.deficit_or_surplus_kcal.is_none());
    assert_eq!(record.bmr_kcal, 1636);

    let record = evaluate_energy(1636, Some(611.0), Some(1850.0));
    assert_eq!(record.deficit_or_surplus_kcal, Some(-397));
    assert_eq!(record.status, EnergyStatus::Deficit);
}

// ============================================================================
// PROTEIN ADEQUACY
// ============================================================================

#[test]
fn test_protein_near_target_is_on_track() {
    let status = calculate_protein_status(144.4, 152.0);
    assert!((status.remaining_g - 7.6).abs() < 0.01);
    assert!(status.on_track);
}

#[test]
fn test_protein_nothing_consumed() {
    let status = calculate_protein_status(0.0, 152.0);
    assert!((status.remaining_g - 152.0).abs() < f64::EPSILON);
    assert!(!status.on_track);
}

#[test]
fn test_protein_over_target_floors_remaining() {
    let status = calculate_protein_status(180.0, 152.0);
    assert!(status.remaining_g.abs() < f64::EPSILON);
    assert!(status.on_track);
}

#[test]
fn test_evaluate_protein_absent_intake() {
    let record = evaluate_protein(None, 152.0);
    assert!(record.remaining_g.is_none());
    assert!(record.on_track.is_none());
    assert!((record.target_g - 152.0).abs() < f64::EPSILON);
}
