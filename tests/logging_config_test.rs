// ABOUTME: Tests for logging configuration read from the environment
// ABOUTME: Default quiet level, --verbose, RUST_LOG precedence and format selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Daybrief Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use daybrief::logging::{LogFormat, LoggingConfig, DEFAULT_LEVEL, VERBOSE_LEVEL};
use serial_test::serial;
use std::env;

fn clear_env() {
    for key in ["RUST_LOG", "LOG_FORMAT", "LOG_INCLUDE_LOCATION"] {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_quiet_by_default_and_verbose_raises_level() {
    clear_env();
    let quiet = LoggingConfig::from_env(false);
    assert_eq!(quiet.level, DEFAULT_LEVEL);
    assert_eq!(quiet.format, LogFormat::Compact);
    assert!(!quiet.include_location);
    assert_eq!(quiet.service_name, "daybrief");

    assert_eq!(LoggingConfig::from_env(true).level, VERBOSE_LEVEL);
}

#[test]
#[serial]
fn test_rust_log_and_format_from_environment() {
    clear_env();
    env::set_var("RUST_LOG", "daybrief=trace");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("LOG_INCLUDE_LOCATION", "1");

    let config = LoggingConfig::from_env(true);
    clear_env();

    assert_eq!(config.level, "daybrief=trace");
    assert_eq!(config.format, LogFormat::Json);
    assert!(config.include_location);
    assert!(config.env_filter().to_string().contains("sqlx=warn"));
}
