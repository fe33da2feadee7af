// ABOUTME: Morning outlook pipeline: sleep, vitals, calendar load, meds and training
// ABOUTME: Queries every source concurrently, merges summary then store overlay, then classifies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Daybrief Contributors

use super::{fetch_calendar, BriefingContext, SourceWarnings, Sources};
use crate::config::BriefingConfig;
use chrono::NaiveDate;
use daybrief_core::constants::{metrics, training};
use daybrief_core::models::{
    CalendarData, MedsData, MorningReport, SleepStages, TaskFilter, VitalsRecord,
};
use daybrief_intelligence::{classify, summarize_training};
use tracing::{debug, info};

/// Fields the metrics store contributes on top of the health summary
#[derive(Debug, Clone, Default)]
struct StoreOverlay {
    vitals: VitalsRecord,
    stages: SleepStages,
    warnings: SourceWarnings,
}

async fn fetch_store_overlay(sources: &Sources, date: NaiveDate) -> StoreOverlay {
    let mut overlay = StoreOverlay::default();
    let Some(store) = overlay.warnings.record(sources.metrics.open().await) else {
        return overlay;
    };

    let (hrv, stages, respiratory_rate) = tokio::join!(
        store.daily_average(metrics::HEART_RATE_VARIABILITY, date),
        store.sleep_stages(date),
        store.latest_value(metrics::RESPIRATORY_RATE, date),
    );

    overlay.vitals.hrv_ms = overlay.warnings.record(hrv).flatten();
    overlay.vitals.respiratory_rate = overlay.warnings.record(respiratory_rate).flatten();
    overlay.stages = overlay.warnings.record(stages).unwrap_or_default();
    debug!(vitals = ?overlay.vitals, stages = ?overlay.stages, "Metrics store overlay");
    overlay
}

/// Build the morning report for `context.target_date`.
///
/// Summary values are written first and the metrics-store overlay second,
/// whatever order the queries finished in, so store values win for HRV,
/// sleep stages and respiratory rate.
pub async fn build_morning_report(
    sources: &Sources,
    config: &BriefingConfig,
    context: &BriefingContext,
) -> MorningReport {
    let date = context.target_date;
    info!(%date, "Building morning report");

    let (summary, overlay, calendar, tasks, workouts) = tokio::join!(
        sources.health.latest_stats(),
        fetch_store_overlay(sources, date),
        fetch_calendar(sources.calendar.as_ref(), &config.calendar_accounts, date),
        sources.tasks.tasks(TaskFilter::Today),
        sources.workouts.recent_workouts(training::MORNING_PAGE_SIZE),
    );

    let mut warnings = SourceWarnings::default();
    let mut report = MorningReport::new(context.now, date);

    if let Some(snapshot) = warnings.record(summary) {
        report.sleep = snapshot.sleep_record(date);
        report.vitals = snapshot.vitals();
    }

    report.sleep.apply_stages(&overlay.stages);
    report.vitals.overlay(&overlay.vitals);
    warnings.extend(overlay.warnings);

    report.calendar = CalendarData::from_accounts(
        calendar
            .accounts
            .iter()
            .map(|(source, entries)| (source.as_str(), entries.as_slice())),
    );
    warnings.extend(calendar.warnings);

    if let Some(tasks) = warnings.record(tasks) {
        report.meds = MedsData::from_tasks(&tasks, &config.med_labels, date);
    }

    if let Some(workouts) = warnings.record(workouts) {
        report.training = summarize_training(&workouts, context.now);
    }

    report.warnings = warnings.into_vec();
    report.classification = classify(&report);
    info!(
        warnings = report.warnings.len(),
        recommendation = %report.classification.recommendation,
        "Morning report ready"
    );
    report
}
