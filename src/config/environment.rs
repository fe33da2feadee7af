// ABOUTME: Environment configuration for a single briefing invocation
// ABOUTME: Parses the user profile, calendar accounts, store path, commands and label sets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Daybrief Contributors

//! Environment-based configuration
//!
//! Every setting has a default; an unset or empty variable falls back to it.
//! A value that is present but cannot be parsed is a fatal `ConfigInvalid`
//! error, so no partial report is produced from a misconfigured profile.

use daybrief_core::constants::{defaults, env_config};
use daybrief_core::errors::{AppError, AppResult};
use daybrief_core::models::{CalendarAccount, Sex, UserProfile};
use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;

/// Executables backing the CLI sources
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandConfig {
    /// Health summary executable
    pub health: String,
    /// Calendar executable
    pub calendar: String,
    /// Task tracker executable
    pub tasks: String,
    /// Workout log executable
    pub workouts: String,
}

impl Default for CommandConfig {
    fn default() -> Self {
        Self {
            health: defaults::HEALTH_COMMAND.to_owned(),
            calendar: defaults::CALENDAR_COMMAND.to_owned(),
            tasks: defaults::TASKS_COMMAND.to_owned(),
            workouts: defaults::WORKOUTS_COMMAND.to_owned(),
        }
    }
}

/// Runtime configuration for one briefing
#[derive(Debug, Clone, PartialEq)]
pub struct BriefingConfig {
    /// Fixed per-user inputs for BMR and protein
    pub profile: UserProfile,
    /// Calendar accounts, in query order
    pub calendar_accounts: Vec<CalendarAccount>,
    /// Metrics store location
    pub health_db_path: PathBuf,
    /// Per-subprocess timeout
    pub command_timeout: Duration,
    /// Source executables
    pub commands: CommandConfig,
    /// Labels marking medication/protocol tasks
    pub med_labels: Vec<String>,
    /// Keywords marking a calendar event as a workout
    pub workout_keywords: Vec<String>,
}

impl Default for BriefingConfig {
    fn default() -> Self {
        Self {
            profile: UserProfile::default(),
            calendar_accounts: Vec::new(),
            health_db_path: default_health_db_path(),
            command_timeout: Duration::from_secs(defaults::COMMAND_TIMEOUT_SECS),
            commands: CommandConfig::default(),
            med_labels: defaults::MED_LABELS.iter().map(|l| (*l).to_owned()).collect(),
            workout_keywords: defaults::WORKOUT_KEYWORDS
                .iter()
                .map(|k| (*k).to_owned())
                .collect(),
        }
    }
}

impl BriefingConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when a variable is present but malformed, or
    /// when the resulting user profile fails validation
    pub fn from_env() -> AppResult<Self> {
        let profile = UserProfile {
            age: parse_env(env_config::USER_AGE, defaults::USER_AGE)?,
            weight_kg: parse_env(env_config::USER_WEIGHT_KG, defaults::USER_WEIGHT_KG)?,
            height_cm: parse_env(env_config::USER_HEIGHT_CM, defaults::USER_HEIGHT_CM)?,
            sex: parse_env(env_config::USER_SEX, Sex::Male)?,
            protein_target_g: parse_env(
                env_config::PROTEIN_TARGET_G,
                defaults::PROTEIN_TARGET_G,
            )?,
        };
        profile.validate()?;

        let calendar_accounts = match non_empty_var(env_config::CALENDAR_ACCOUNTS) {
            Some(raw) => parse_calendar_accounts(&raw)?,
            None => Vec::new(),
        };

        let timeout_secs: u64 =
            parse_env(env_config::COMMAND_TIMEOUT_SECS, defaults::COMMAND_TIMEOUT_SECS)?;
        if timeout_secs == 0 {
            return Err(AppError::config_invalid(format!(
                "{} must be at least 1 second",
                env_config::COMMAND_TIMEOUT_SECS
            )));
        }

        let fallback = Self::default();
        let config = Self {
            profile,
            calendar_accounts,
            health_db_path: non_empty_var(env_config::HEALTH_DB)
                .map_or(fallback.health_db_path, PathBuf::from),
            command_timeout: Duration::from_secs(timeout_secs),
            commands: CommandConfig {
                health: env_var_or(env_config::HEALTH_COMMAND, defaults::HEALTH_COMMAND),
                calendar: env_var_or(env_config::CALENDAR_COMMAND, defaults::CALENDAR_COMMAND),
                tasks: env_var_or(env_config::TASKS_COMMAND, defaults::TASKS_COMMAND),
                workouts: env_var_or(env_config::WORKOUTS_COMMAND, defaults::WORKOUTS_COMMAND),
            },
            med_labels: non_empty_var(env_config::MED_LABELS)
                .map_or(fallback.med_labels, |raw| parse_list(&raw)),
            workout_keywords: non_empty_var(env_config::WORKOUT_KEYWORDS)
                .map_or(fallback.workout_keywords, |raw| parse_list(&raw)),
        };

        debug!(
            accounts = config.calendar_accounts.len(),
            health_db = %config.health_db_path.display(),
            timeout_secs,
            "Loaded briefing configuration"
        );
        Ok(config)
    }
}

/// `~/.health-ingest/health.db`, or the relative path when no home directory is known
#[must_use]
pub fn default_health_db_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_default()
        .join(defaults::HEALTH_DB_RELATIVE_PATH)
}

/// Parse comma-separated `source=account` pairs
///
/// # Errors
///
/// Returns `ConfigInvalid` for a pair without `=` or with an empty side
pub fn parse_calendar_accounts(raw: &str) -> AppResult<Vec<CalendarAccount>> {
    raw.split(',')
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (source, account) = pair
                .split_once('=')
                .map(|(source, account)| (source.trim(), account.trim()))
                .filter(|(source, account)| !source.is_empty() && !account.is_empty())
                .ok_or_else(|| {
                    AppError::config_invalid(format!(
                        "Invalid {} entry '{pair}', expected source=account",
                        env_config::CALENDAR_ACCOUNTS
                    ))
                })?;
            Ok(CalendarAccount::new(source, account))
        })
        .collect()
}

/// Parse a comma-separated list, dropping empty items
#[must_use]
pub fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    non_empty_var(key).unwrap_or_else(|| default.to_owned())
}

fn parse_env<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    non_empty_var(key).map_or(Ok(default), |raw| {
        raw.trim().parse().map_err(|e| {
            AppError::config_invalid(format!("Invalid {key} value '{raw}': {e}"))
        })
    })
}
