// ABOUTME: Sleep quality classification from total hours with a deep-sleep downgrade
// ABOUTME: Only current-day, available data is classified; anything else is UNKNOWN
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Daybrief Contributors

use daybrief_core::constants::thresholds::sleep::{
    GOOD_TOTAL_HOURS, MIN_DEEP_HOURS, OK_TOTAL_HOURS,
};
use daybrief_core::models::{SleepQuality, SleepRecord};

/// Classify last night's sleep.
///
/// - total >= 7h is GOOD, 5h <= total < 7h is OK, below 5h is POOR
/// - known deep sleep below 1h downgrades one step; POOR stays POOR
///
/// Returns `Unknown` unless the record is available, belongs to the current
/// day and carries a total.
#[must_use]
pub fn classify_sleep(sleep: &SleepRecord) -> SleepQuality {
    if !(sleep.data_available && sleep.is_current_day) {
        return SleepQuality::Unknown;
    }
    let Some(total) = sleep.total_hours else {
        return SleepQuality::Unknown;
    };

    let by_duration = classify_total_hours(total);
    match sleep.deep_hours {
        Some(deep) if deep < MIN_DEEP_HOURS => downgrade(by_duration),
        _ => by_duration,
    }
}

/// Quality from total hours alone
#[must_use]
pub fn classify_total_hours(total_hours: f64) -> SleepQuality {
    if total_hours >= GOOD_TOTAL_HOURS {
        SleepQuality::Good
    } else if total_hours >= OK_TOTAL_HOURS {
        SleepQuality::Ok
    } else {
        SleepQuality::Poor
    }
}

const fn downgrade(quality: SleepQuality) -> SleepQuality {
    match quality {
        SleepQuality::Good => SleepQuality::Ok,
        SleepQuality::Ok | SleepQuality::Poor => SleepQuality::Poor,
        SleepQuality::Unknown => SleepQuality::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn current(total: Option<f64>, deep: Option<f64>) -> SleepRecord {
        SleepRecord {
            total_hours: total,
            deep_hours: deep,
            data_available: true,
            is_current_day: true,
            ..SleepRecord::default()
        }
    }

    #[test]
    fn test_stale_data_is_unknown() {
        let mut sleep = current(Some(8.0), Some(1.5));
        sleep.is_current_day = false;
        assert_eq!(classify_sleep(&sleep), SleepQuality::Unknown);
    }

    #[test]
    fn test_available_without_total_is_unknown() {
        assert_eq!(classify_sleep(&current(None, Some(1.5))), SleepQuality::Unknown);
    }

    #[test]
    fn test_poor_is_not_downgraded_further() {
        assert_eq!(classify_sleep(&current(Some(4.0), Some(0.2))), SleepQuality::Poor);
    }
}
