// ABOUTME: Tests for mode selection, the reference instant and mode dispatch
// ABOUTME: Conflicting flags are fatal; neither flag defaults to the morning outlook
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Daybrief Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{at, config_with_accounts, date, healthy_sources, init_test_logging, into_sources};
use daybrief::briefing::{generate, select_mode, Briefing, BriefingContext};
use daybrief_core::errors::ErrorCode;
use daybrief_core::models::BriefingMode;

#[test]
fn test_mode_selection_table() {
    assert_eq!(select_mode(false, false).unwrap(), BriefingMode::Morning);
    assert_eq!(select_mode(true, false).unwrap(), BriefingMode::Morning);
    assert_eq!(select_mode(false, true).unwrap(), BriefingMode::Evening);

    let error = select_mode(true, true).unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert!(error.message.contains("both"));
}

#[test]
fn test_context_uses_target_date_with_current_time_of_day() {
    let now = at("2024-01-20T21:15:30+07:00");
    let context = BriefingContext::for_date(Some(date("2024-01-15")), now);
    assert_eq!(context.target_date, date("2024-01-15"));
    assert_eq!(context.now, at("2024-01-15T21:15:30+07:00"));

    let today = BriefingContext::for_date(None, now);
    assert_eq!(today.target_date, date("2024-01-20"));
    assert_eq!(today.now, now);
}

#[tokio::test]
async fn test_generate_dispatches_on_mode() {
    init_test_logging();
    let sources = into_sources(healthy_sources());
    let config = config_with_accounts(&[("personal", "me@example.com")]);
    let context = BriefingContext::new(date("2024-01-15"), at("2024-01-15T07:00:00+07:00"));

    let morning = generate(BriefingMode::Morning, &sources, &config, &context).await.unwrap();
    assert_eq!(morning.mode(), BriefingMode::Morning);
    assert!(matches!(morning, Briefing::Morning(_)));

    let evening = generate(BriefingMode::Evening, &sources, &config, &context).await.unwrap();
    assert_eq!(evening.mode(), BriefingMode::Evening);
    let Briefing::Evening(report) = evening else {
        panic!("expected an evening report");
    };
    assert_eq!(report.energy.bmr_kcal, 1636);
}
