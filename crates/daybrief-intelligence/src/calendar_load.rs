// ABOUTME: Morning load classification from the number of morning calendar events
// ABOUTME: Zero is CLEAR, one or two is LIGHT, three or more is PACKED
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Daybrief Contributors

use daybrief_core::constants::thresholds::load::LIGHT_MAX_EVENTS;
use daybrief_core::models::MorningLoad;

/// Classify the morning bucket size
#[must_use]
pub const fn classify_morning_load(morning_count: usize) -> MorningLoad {
    match morning_count {
        0 => MorningLoad::Clear,
        count if count <= LIGHT_MAX_EVENTS => MorningLoad::Light,
        _ => MorningLoad::Packed,
    }
}
