//! Time-of-day band detection in Korea Standard Time

use chrono::{DateTime, TimeZone, Timelike, Utc};

use errand_types::TimeCondition;

/// KST is UTC+9 with no daylight saving
pub const KST_UTC_OFFSET_HOURS: u32 = 9;

/// Band for an hour of the KST day
///
/// 22:00-05:59 late night; 07:00-08:59 and 18:00-19:59 rush hour; the
/// rest, including 06:xx, is day.
pub fn time_condition_at_hour(hour: u32) -> TimeCondition {
    match hour % 24 {
        22..=23 | 0..=5 => TimeCondition::LateNight,
        7..=8 | 18..=19 => TimeCondition::RushHour,
        _ => TimeCondition::Day,
    }
}

/// Hour of day in KST for any instant
pub fn kst_hour<Tz: TimeZone>(instant: &DateTime<Tz>) -> u32 {
    (instant.with_timezone(&Utc).hour() + KST_UTC_OFFSET_HOURS) % 24
}

pub fn time_condition_for<Tz: TimeZone>(instant: &DateTime<Tz>) -> TimeCondition {
    time_condition_at_hour(kst_hour(instant))
}

/// Band for the current wall-clock time
pub fn current_time_condition() -> TimeCondition {
    time_condition_for(&Utc::now())
}
