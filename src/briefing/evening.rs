// ABOUTME: Evening wrap-up pipeline: energy, protein, activity, recovery, protocols, tomorrow
// ABOUTME: Day totals from the metrics store plus a tomorrow preview over calendar and tasks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Daybrief Contributors

use super::{fetch_calendar, BriefingContext, SourceWarnings, Sources};
use crate::config::BriefingConfig;
use chrono::{Days, NaiveDate};
use daybrief_core::constants::{metrics, training};
use daybrief_core::errors::{AppError, AppResult};
use daybrief_core::models::{
    EveningReport, ProtocolsData, SleepInfo, TaskFilter, TomorrowData, WorkoutInfo,
};
use daybrief_intelligence::preview::{first_event, meds_due, workout_scheduled};
use daybrief_intelligence::{calculate_profile_bmr, evaluate_energy, evaluate_protein};
use tracing::{debug, info};

/// Metrics-store values for the evening report; absent when not recorded
#[derive(Debug, Clone, Default)]
struct DayMetrics {
    active_kcal: Option<f64>,
    consumed_kcal: Option<f64>,
    protein_g: Option<f64>,
    steps: Option<f64>,
    stand_hours: Option<f64>,
    hrv_ms: Option<f64>,
    hrv_yesterday_ms: Option<f64>,
    resting_hr_bpm: Option<f64>,
    sleep_total_hrs: Option<f64>,
    sleep_deep_hrs: Option<f64>,
    warnings: SourceWarnings,
}

async fn fetch_day_metrics(sources: &Sources, date: NaiveDate) -> DayMetrics {
    let mut day = DayMetrics::default();
    let Some(store) = day.warnings.record(sources.metrics.open().await) else {
        return day;
    };
    let yesterday = date.pred_opt();

    let (
        active,
        consumed,
        protein,
        steps,
        stand,
        hrv,
        hrv_yesterday,
        rhr,
        sleep_total,
        sleep_deep,
    ) = tokio::join!(
        store.day_total(metrics::ACTIVE_ENERGY, date),
        store.day_total(metrics::DIETARY_ENERGY, date),
        store.day_total(metrics::PROTEIN, date),
        store.day_total(metrics::STEPS, date),
        store.day_total(metrics::STAND_HOURS, date),
        store.daily_average(metrics::HEART_RATE_VARIABILITY, date),
        async {
            match yesterday {
                Some(yesterday) => {
                    store
                        .daily_average(metrics::HEART_RATE_VARIABILITY, yesterday)
                        .await
                }
                None => Ok(None),
            }
        },
        store.latest_value(metrics::RESTING_HEART_RATE, date),
        store.latest_value(metrics::SLEEP_TOTAL, date),
        store.latest_value(metrics::SLEEP_DEEP, date),
    );

    let warnings = &mut day.warnings;
    day.active_kcal = warnings.record(active).flatten();
    day.consumed_kcal = warnings.record(consumed).flatten();
    day.protein_g = warnings.record(protein).flatten();
    day.steps = warnings.record(steps).flatten();
    day.stand_hours = warnings.record(stand).flatten();
    day.hrv_ms = warnings.record(hrv).flatten();
    day.hrv_yesterday_ms = warnings.record(hrv_yesterday).flatten();
    day.resting_hr_bpm = warnings.record(rhr).flatten();
    day.sleep_total_hrs = warnings.record(sleep_total).flatten();
    day.sleep_deep_hrs = warnings.record(sleep_deep).flatten();
    day
}

async fn fetch_tomorrow(
    sources: &Sources,
    config: &BriefingConfig,
    tomorrow: NaiveDate,
) -> (TomorrowData, SourceWarnings) {
    let (calendar, tasks) = tokio::join!(
        fetch_calendar(sources.calendar.as_ref(), &config.calendar_accounts, tomorrow),
        sources.tasks.tasks(TaskFilter::DueOn(tomorrow)),
    );

    let entries = calendar.entries();
    let mut warnings = calendar.warnings;
    let preview = TomorrowData {
        first_event: first_event(&entries),
        workout_scheduled: workout_scheduled(&entries, &config.workout_keywords),
        meds_due: warnings
            .record(tasks)
            .map(|tasks| meds_due(&tasks, &config.med_labels))
            .unwrap_or_default(),
    };
    debug!(%tomorrow, events = entries.len(), ?preview, "Tomorrow preview");
    (preview, warnings)
}

/// Build the evening report for `context.target_date`.
///
/// # Errors
///
/// Returns an error when the user profile is invalid or the target date has
/// no following day; source failures only add warnings
pub async fn build_evening_report(
    sources: &Sources,
    config: &BriefingConfig,
    context: &BriefingContext,
) -> AppResult<EveningReport> {
    let date = context.target_date;
    let bmr_kcal = calculate_profile_bmr(&config.profile)?;
    let tomorrow = date
        .checked_add_days(Days::new(1))
        .ok_or_else(|| AppError::out_of_range(format!("no day follows {date}")))?;
    info!(%date, bmr_kcal, "Building evening report");

    let (day, workouts, today_tasks, (tomorrow_data, tomorrow_warnings)) = tokio::join!(
        fetch_day_metrics(sources, date),
        sources.workouts.recent_workouts(training::EVENING_PAGE_SIZE),
        sources.tasks.tasks(TaskFilter::Today),
        fetch_tomorrow(sources, config, tomorrow),
    );

    let mut warnings = day.warnings;
    let mut report = EveningReport::new(context.now, date);

    report.energy = evaluate_energy(bmr_kcal, day.active_kcal, day.consumed_kcal);
    report.protein = evaluate_protein(day.protein_g, config.profile.protein_target_g);

    report.activity.steps = day.steps.map(|steps| steps as i64);
    report.activity.stand_hours = day.stand_hours.map(|hours| hours as i64);
    report.activity.workout = warnings
        .record(workouts)
        .map(|workouts| WorkoutInfo::for_date(&workouts, date))
        .unwrap_or_default();

    report.recovery.hrv_ms = day.hrv_ms;
    report.recovery.hrv_yesterday_ms = day.hrv_yesterday_ms;
    report.recovery.resting_hr_bpm = day.resting_hr_bpm;
    report.recovery.sleep_last_night = SleepInfo {
        total_hrs: day.sleep_total_hrs,
        deep_hrs: day.sleep_deep_hrs,
    };

    if let Some(tasks) = warnings.record(today_tasks) {
        report.protocols = ProtocolsData::from_tasks(&tasks, &config.med_labels, date);
    }

    report.tomorrow = tomorrow_data;
    warnings.extend(tomorrow_warnings);

    report.warnings = warnings.into_vec();
    info!(
        warnings = report.warnings.len(),
        status = ?report.energy.status,
        "Evening report ready"
    );
    Ok(report)
}
