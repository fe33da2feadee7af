// ABOUTME: Morning recommendation as an ordered list of (predicate, message) rules
// ABOUTME: Rules are evaluated top-down and the first match wins; poor recovery outranks sleep
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Daybrief Contributors

//! Recommendation engine
//!
//! Precedence, highest first:
//!
//! 1. Poor recovery with poor sleep
//! 2. Poor recovery (message names the HRV value)
//! 3. Poor sleep with a packed morning
//! 4. Poor sleep with a light morning
//! 5. Poor sleep with a clear morning
//! 6. OK sleep with a packed morning
//! 7. Good sleep
//! 8. Fallback for unknown sleep or any unmatched combination

use daybrief_core::models::{MorningLoad, RecoveryStatus, SleepQuality};

/// Inputs every rule sees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleInput {
    /// Sleep quality
    pub sleep: SleepQuality,
    /// Recovery status
    pub recovery: RecoveryStatus,
    /// Morning load
    pub load: MorningLoad,
    /// HRV the recovery status was derived from
    pub hrv_ms: Option<f64>,
}

/// One entry of the ordered rule list
#[derive(Debug, Clone, Copy)]
pub struct RecommendationRule {
    /// Stable rule identifier, used in logs and tests
    pub name: &'static str,
    /// Trigger condition
    pub applies: fn(&RuleInput) -> bool,
    /// Recommendation text
    pub message: fn(&RuleInput) -> String,
}

const FALLBACK_MESSAGE: &str =
    "Sleep data unavailable. Check energy levels and adjust accordingly.";

/// Rules in priority order
pub static RECOMMENDATION_RULES: [RecommendationRule; 8] = [
    RecommendationRule {
        name: "poor_sleep_poor_recovery",
        applies: |input| {
            input.recovery == RecoveryStatus::Poor && input.sleep == SleepQuality::Poor
        },
        message: |_| {
            "Poor sleep + poor recovery (low HRV). Take it very easy today, prioritize rest and recovery."
                .to_owned()
        },
    },
    RecommendationRule {
        name: "poor_recovery",
        applies: |input| input.recovery == RecoveryStatus::Poor && input.hrv_ms.is_some(),
        message: |input| {
            format!(
                "HRV is low ({:.0}ms) indicating poor recovery. Consider lighter activity today.",
                input.hrv_ms.unwrap_or_default()
            )
        },
    },
    RecommendationRule {
        name: "rough_night_packed_morning",
        applies: |input| input.sleep == SleepQuality::Poor && input.load == MorningLoad::Packed,
        message: |_| {
            "Rough night + packed morning. Prioritize must-dos, defer what you can. Power through essentials only."
                .to_owned()
        },
    },
    RecommendationRule {
        name: "rough_night_light_morning",
        applies: |input| input.sleep == SleepQuality::Poor && input.load == MorningLoad::Light,
        message: |_| {
            "Rough night but light morning. Ease in, handle the few things, then reassess energy."
                .to_owned()
        },
    },
    RecommendationRule {
        name: "rough_night_clear_morning",
        applies: |input| input.sleep == SleepQuality::Poor && input.load == MorningLoad::Clear,
        message: |_| "Rough night, clear morning. Take it slow, no rush. Recovery day vibes.".to_owned(),
    },
    RecommendationRule {
        name: "decent_sleep_packed_morning",
        applies: |input| input.sleep == SleepQuality::Ok && input.load == MorningLoad::Packed,
        message: |_| "Decent sleep, busy morning. You've got this, stay focused.".to_owned(),
    },
    RecommendationRule {
        name: "well_rested",
        applies: |input| input.sleep == SleepQuality::Good,
        message: |_| "Well rested. Attack the day.".to_owned(),
    },
    RecommendationRule {
        name: "data_unavailable",
        applies: |_| true,
        message: |_| FALLBACK_MESSAGE.to_owned(),
    },
];

/// First rule whose predicate holds for `input`
#[must_use]
pub fn matching_rule(input: &RuleInput) -> Option<&'static RecommendationRule> {
    RECOMMENDATION_RULES.iter().find(|rule| (rule.applies)(input))
}

/// Recommendation text for a set of classifications
#[must_use]
pub fn recommend(
    sleep: SleepQuality,
    recovery: RecoveryStatus,
    load: MorningLoad,
    hrv_ms: Option<f64>,
) -> String {
    let input = RuleInput {
        sleep,
        recovery,
        load,
        hrv_ms,
    };
    matching_rule(&input).map_or_else(|| FALLBACK_MESSAGE.to_owned(), |rule| (rule.message)(&input))
}
