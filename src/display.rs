//! Display labels for the rendering layer
//!
//! Pure lookups from cron codes to English labels, the ordinal suffix
//! formatter, and the ordered value lists a form needs for its selects.

use crate::types::{MonthDay, MonthWeek, Weekday};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Full weekday name
pub fn day_display(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Month name for 1-12
pub fn month_display(month: u32) -> Option<&'static str> {
    let index = usize::try_from(month).ok()?.checked_sub(1)?;
    MONTH_NAMES.get(index).copied()
}

/// Occurrence label (`#1` → "First", `L` → "Last")
pub fn month_week_display(month_week: MonthWeek) -> &'static str {
    match month_week {
        MonthWeek::First => "First",
        MonthWeek::Second => "Second",
        MonthWeek::Third => "Third",
        MonthWeek::Fourth => "Fourth",
        MonthWeek::Fifth => "Fifth",
        MonthWeek::Last => "Last",
    }
}

/// Day-of-month label, with an ordinal suffix on numeric days when enabled
pub fn month_day_display(day: MonthDay, use_ordinal_suffixes: bool) -> String {
    match day {
        MonthDay::Last => "Last Day".to_string(),
        MonthDay::LastWeekday => "Last Weekday".to_string(),
        MonthDay::FirstWeekday => "First Weekday".to_string(),
        MonthDay::Day(n) if use_ordinal_suffixes => format!("{}{}", n, ordinal_suffix(n)),
        MonthDay::Day(n) => n.to_string(),
    }
}

/// English ordinal suffix: 1 → "st", 2 → "nd", 3 → "rd", 11-13 → "th"
///
/// ```
/// use a3s_cron_editor::display::ordinal_suffix;
///
/// assert_eq!(ordinal_suffix(21), "st");
/// assert_eq!(ordinal_suffix(12), "th");
/// ```
pub fn ordinal_suffix(value: u32) -> &'static str {
    if (value / 10) % 10 == 1 {
        return "th";
    }
    match value % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Day-of-month choices: `1W`, 1..=31, `LW`, `L`
pub fn month_days_with_lasts() -> Vec<MonthDay> {
    std::iter::once(MonthDay::FirstWeekday)
        .chain((1..=31).map(MonthDay::Day))
        .chain([MonthDay::LastWeekday, MonthDay::Last])
        .collect()
}

/// Day-of-month choices without the sentinels
pub fn month_days_without_lasts() -> Vec<MonthDay> {
    (1..=31).map(MonthDay::Day).collect()
}
