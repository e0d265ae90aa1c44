use chrono::NaiveDate;

use crate::types::AgeLevel;

// Roughly 30 and 33 months.
pub const DAYS_WARNING: i64 = 913;
pub const DAYS_ALARM: i64 = 1004;

/// Whole days elapsed from `purchase_date` to `today`; negative for future dates.
#[must_use]
pub fn age_in_days(purchase_date: NaiveDate, today: NaiveDate) -> i64 {
    today.signed_duration_since(purchase_date).num_days()
}

#[must_use]
pub fn classify_age(days: i64) -> AgeLevel {
    if days > DAYS_ALARM {
        AgeLevel::Alarm
    } else if days > DAYS_WARNING {
        AgeLevel::Warning
    } else {
        AgeLevel::Normal
    }
}
