// ABOUTME: Configuration module for the daybrief engine
// ABOUTME: Environment-only runtime configuration (user profile, accounts, commands, labels)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Daybrief Contributors

/// Environment-based configuration
pub mod environment;

pub use environment::{BriefingConfig, CommandConfig};
