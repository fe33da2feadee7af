// ABOUTME: Mode selector for the briefing pipeline
// ABOUTME: Pure decision over the morning/evening intents, independent of flag parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Daybrief Contributors

use daybrief_core::errors::{AppError, AppResult};
use daybrief_core::models::BriefingMode;

/// Select the report mode from the two requested intents.
///
/// Neither requested defaults to morning.
///
/// # Errors
///
/// Returns `ConfigInvalid` when both modes are requested
pub fn select_mode(morning: bool, evening: bool) -> AppResult<BriefingMode> {
    match (morning, evening) {
        (true, true) => Err(AppError::config_invalid(
            "cannot specify both --morning and --evening",
        )),
        (_, true) => Ok(BriefingMode::Evening),
        (_, false) => Ok(BriefingMode::Morning),
    }
}
