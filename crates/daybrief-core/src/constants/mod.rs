// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Classification thresholds, sentinel labels, metric names and configuration defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Daybrief Contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large namespace. Classification thresholds live in `thresholds`; anything a
//! user may override at runtime has its default in `defaults` and its variable
//! name in `env_config`.

/// Source names used to tag warnings and log events
pub mod sources;

/// Metric names used by the health summary and the metrics store
pub mod metrics;

/// Classification thresholds
pub mod thresholds {
    /// Sleep quality thresholds (hours)
    pub mod sleep {
        /// Total sleep at or above this is GOOD
        pub const GOOD_TOTAL_HOURS: f64 = 7.0;
        /// Total sleep at or above this (and below GOOD) is OK
        pub const OK_TOTAL_HOURS: f64 = 5.0;
        /// Known deep sleep below this downgrades the quality one step
        pub const MIN_DEEP_HOURS: f64 = 1.0;
    }

    /// HRV-based recovery thresholds (milliseconds)
    pub mod recovery {
        /// HRV at or below this is POOR
        pub const POOR_MAX_HRV_MS: f64 = 20.0;
        /// HRV at or above this is GOOD
        pub const GOOD_MIN_HRV_MS: f64 = 40.0;
    }

    /// Morning load thresholds (event counts)
    pub mod load {
        /// Morning event counts up to this are LIGHT (above zero)
        pub const LIGHT_MAX_EVENTS: usize = 2;
    }

    /// Energy balance thresholds (kcal)
    pub mod energy {
        /// Balances strictly below the negative of this are a deficit,
        /// strictly above it a surplus
        pub const MAINTENANCE_BAND_KCAL: i64 = 50;
    }

    /// Protein adequacy thresholds
    pub mod protein {
        /// Fraction of the target that counts as on-track
        pub const ON_TRACK_FRACTION: f64 = 0.95;
    }
}

/// Calendar time-of-day buckets
pub mod calendar {
    /// Events starting before this hour are morning events
    pub const MORNING_END_HOUR: u32 = 12;
    /// Events starting before this hour (and after noon) are afternoon events
    pub const AFTERNOON_END_HOUR: u32 = 18;
    /// Display format for event and due times
    pub const TIME_FORMAT: &str = "%H:%M";
}

/// Workout log query sizes and windows
pub mod training {
    /// Workouts requested for the morning outlook
    pub const MORNING_PAGE_SIZE: u32 = 10;
    /// Workouts requested for the evening wrap-up
    pub const EVENING_PAGE_SIZE: u32 = 5;
    /// Trailing window used for the weekly workout count
    pub const WEEKLY_WINDOW_DAYS: i64 = 7;
}

/// Default values for configuration that may be overridden through the environment
pub mod defaults {
    /// Default user age (years)
    pub const USER_AGE: u32 = 41;
    /// Default user weight (kg)
    pub const USER_WEIGHT_KG: f64 = 73.0;
    /// Default user height (cm)
    pub const USER_HEIGHT_CM: f64 = 177.0;
    /// Default daily protein target (grams)
    pub const PROTEIN_TARGET_G: f64 = 152.0;
    /// Default per-command timeout (seconds)
    pub const COMMAND_TIMEOUT_SECS: u64 = 30;
    /// Medication/protocol sentinel labels
    pub const MED_LABELS: [&str; 2] = ["💊Meds", "💉"];
    /// Keywords that mark a calendar event as a workout
    pub const WORKOUT_KEYWORDS: [&str; 4] = ["workout", "gym", "training", "jesper"];
    /// Health summary executable
    pub const HEALTH_COMMAND: &str = "health-ingest";
    /// Calendar executable
    pub const CALENDAR_COMMAND: &str = "gog";
    /// Task tracker executable
    pub const TASKS_COMMAND: &str = "td";
    /// Workout log executable
    pub const WORKOUTS_COMMAND: &str = "mcporter";
    /// Metrics store location relative to the home directory
    pub const HEALTH_DB_RELATIVE_PATH: &str = ".health-ingest/health.db";
}

/// Plausible ranges for the BMR inputs
pub mod limits {
    /// Heaviest accepted body weight (kg)
    pub const MAX_WEIGHT_KG: f64 = 300.0;
    /// Tallest accepted height (cm)
    pub const MAX_HEIGHT_CM: f64 = 300.0;
    /// Youngest accepted age (years)
    pub const MIN_AGE: u32 = 10;
    /// Oldest accepted age (years)
    pub const MAX_AGE: u32 = 120;
}

/// Environment variable names
pub mod env_config {
    /// User age (years)
    pub const USER_AGE: &str = "DAYBRIEF_USER_AGE";
    /// User weight (kg)
    pub const USER_WEIGHT_KG: &str = "DAYBRIEF_USER_WEIGHT_KG";
    /// User height (cm)
    pub const USER_HEIGHT_CM: &str = "DAYBRIEF_USER_HEIGHT_CM";
    /// User sex (male|female)
    pub const USER_SEX: &str = "DAYBRIEF_USER_SEX";
    /// Daily protein target (grams)
    pub const PROTEIN_TARGET_G: &str = "DAYBRIEF_PROTEIN_TARGET_G";
    /// Comma-separated `source=account` calendar pairs
    pub const CALENDAR_ACCOUNTS: &str = "DAYBRIEF_CALENDAR_ACCOUNTS";
    /// Metrics store path
    pub const HEALTH_DB: &str = "DAYBRIEF_HEALTH_DB";
    /// Per-command timeout (seconds)
    pub const COMMAND_TIMEOUT_SECS: &str = "DAYBRIEF_COMMAND_TIMEOUT_SECS";
    /// Health summary executable override
    pub const HEALTH_COMMAND: &str = "DAYBRIEF_HEALTH_CMD";
    /// Calendar executable override
    pub const CALENDAR_COMMAND: &str = "DAYBRIEF_CALENDAR_CMD";
    /// Task tracker executable override
    pub const TASKS_COMMAND: &str = "DAYBRIEF_TASKS_CMD";
    /// Workout log executable override
    pub const WORKOUTS_COMMAND: &str = "DAYBRIEF_WORKOUTS_CMD";
    /// Comma-separated medication/protocol labels
    pub const MED_LABELS: &str = "DAYBRIEF_MED_LABELS";
    /// Comma-separated workout keywords
    pub const WORKOUT_KEYWORDS: &str = "DAYBRIEF_WORKOUT_KEYWORDS";
}

/// Service identity used in logs
pub mod service_names {
    /// Binary / service name
    pub const DAYBRIEF: &str = "daybrief";
}
