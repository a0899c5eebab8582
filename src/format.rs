//! Hour conversions between the cron (0-23) and display representations
//!
//! With 24-hour display every function is the identity on the hour and the
//! hour type is `None`. With 12-hour display hours are 1-12 tagged AM/PM.

use crate::types::HourType;

/// Convert a displayed hour back to a 24-hour cron hour
///
/// Field values are not range-checked, so a PM hour is reduced modulo 12
/// before the offset is added.
pub fn to_24_hour(display_hour: u32, hour_type: Option<HourType>, use_24_hour_time: bool) -> u32 {
    if use_24_hour_time {
        return display_hour;
    }
    match (hour_type, display_hour) {
        (Some(HourType::PM), 12) => 12,
        (Some(HourType::PM), hour) => hour % 12 + 12,
        (_, 12) => 0,
        (_, hour) => hour,
    }
}

/// Convert a 24-hour cron hour to its displayed form
pub fn to_display_hour(hour_24: u32, use_24_hour_time: bool) -> u32 {
    if use_24_hour_time {
        hour_24
    } else {
        match hour_24 % 12 {
            0 => 12,
            hour => hour,
        }
    }
}

/// AM/PM tag for a 24-hour cron hour, `None` in 24-hour display
pub fn hour_type_of(hour_24: u32, use_24_hour_time: bool) -> Option<HourType> {
    if use_24_hour_time {
        None
    } else if hour_24 < 12 {
        Some(HourType::AM)
    } else {
        Some(HourType::PM)
    }
}
