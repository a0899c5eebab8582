//! Cron expression classifier
//!
//! Recognizes only the shapes the generator produces. An expression is
//! split into fields, widened to the 7-field quartz layout, and checked
//! against [`SHAPES`] in order; the first rule whose predicate holds
//! extracts the schedule. Anything else becomes an advanced schedule
//! holding the original string.
//!
//! ```text
//! second minute hour day-of-month month day-of-week [year]
//! ```
//!
//! Standard expressions have no second or year: they are read as second
//! `0` and year `*`. A quartz expression without a year reads as year `*`.

use crate::error::{CronEditorError, Result};
use crate::options::CronOptions;
use crate::state::{
    AdvancedState, DailySchedule, EveryDaysState, EveryWeekDayState, HourlyState,
    MinutelyState, MonthlySchedule, Schedule, SpecificDayState, SpecificMonthDayState,
    SpecificMonthWeekState, SpecificWeekDayState, TimeOfDay, WeeklyState, YearlySchedule,
};
use crate::types::{parse_digits, Dialect, MonthDay, MonthWeek, Weekday, WeekdayRange};
use std::collections::BTreeSet;

/// Expression split into quartz-ordered fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fields<'a> {
    pub second: &'a str,
    pub minute: &'a str,
    pub hour: &'a str,
    pub day_of_month: &'a str,
    pub month: &'a str,
    pub day_of_week: &'a str,
    pub year: Option<&'a str>,
}

impl<'a> Fields<'a> {
    /// Split an expression, enforcing the dialect's field count
    pub fn split(expression: &'a str, dialect: Dialect) -> Result<Self> {
        let parts: Vec<&str> = expression.split_whitespace().collect();
        if !dialect.accepts_field_count(parts.len()) {
            tracing::warn!(
                dialect = %dialect,
                fields = parts.len(),
                "Rejected cron expression with wrong field count"
            );
            return Err(CronEditorError::InvalidFieldCount {
                dialect,
                found: parts.len(),
            });
        }

        // field count is checked above, so indexing is in bounds
        let fields = match dialect {
            Dialect::Standard => Self {
                second: "0",
                minute: parts[0],
                hour: parts[1],
                day_of_month: parts[2],
                month: parts[3],
                day_of_week: parts[4],
                year: None,
            },
            Dialect::Quartz => Self {
                second: parts[0],
                minute: parts[1],
                hour: parts[2],
                day_of_month: parts[3],
                month: parts[4],
                day_of_week: parts[5],
                year: parts.get(6).copied(),
            },
        };
        Ok(fields)
    }

    fn year_is_wildcard(&self) -> bool {
        matches!(self.year, None | Some("*"))
    }

    /// Second, minute and hour are plain numbers
    fn has_literal_time(&self) -> bool {
        self.time(true).is_some()
    }

    fn time(&self, use_24_hour_time: bool) -> Option<TimeOfDay> {
        let second = parse_digits(self.second)?;
        let minute = parse_digits(self.minute)?;
        let hour = parse_digits(self.hour)?;
        Some(TimeOfDay::from_24_hour(hour, minute, second, use_24_hour_time))
    }
}

/// The expression shapes the generator can produce, in classification order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// `S 0/N * 1/1 * ?`
    MinutelyStep,
    /// `*/N * * 1/1 * ?` (quartz only)
    MinutelySeconds,
    /// `S M 0/N 1/1 * ?`
    Hourly,
    /// `S M H 1/N * ?`
    DailyEveryDays,
    /// `S M H ? * MON-FRI`
    DailyEveryWeekDay,
    /// `S M H ? * MON,WED`
    Weekly,
    /// `S M H D 1/N ?`
    MonthlySpecificDay,
    /// `S M H ? 1/N MON#1`
    MonthlySpecificWeekDay,
    /// `S M H D MONTH ?`
    YearlySpecificMonthDay,
    /// `S M H ? MONTH MON#1`
    YearlySpecificMonthWeek,
}

/// One classification rule
pub struct ShapeRule {
    pub shape: Shape,
    pub quartz_only: bool,
    pub matches: fn(&Fields<'_>) -> bool,
    pub extract: fn(&Fields<'_>, bool) -> Option<Schedule>,
}

impl ShapeRule {
    fn applies(&self, dialect: Dialect) -> bool {
        !self.quartz_only || dialect.is_quartz()
    }
}

/// Classification rules; the first match wins
///
/// Order matters: the minutely shapes are special cases of the hourly
/// shape, which is in turn checked before the day-based shapes.
pub static SHAPES: [ShapeRule; 10] = [
    ShapeRule {
        shape: Shape::MinutelyStep,
        quartz_only: false,
        matches: matches_minutely_step,
        extract: extract_minutely_step,
    },
    ShapeRule {
        shape: Shape::MinutelySeconds,
        quartz_only: true,
        matches: matches_minutely_seconds,
        extract: extract_minutely_seconds,
    },
    ShapeRule {
        shape: Shape::Hourly,
        quartz_only: false,
        matches: matches_hourly,
        extract: extract_hourly,
    },
    ShapeRule {
        shape: Shape::DailyEveryDays,
        quartz_only: false,
        matches: matches_daily_every_days,
        extract: extract_daily_every_days,
    },
    ShapeRule {
        shape: Shape::DailyEveryWeekDay,
        quartz_only: false,
        matches: matches_daily_every_week_day,
        extract: extract_daily_every_week_day,
    },
    ShapeRule {
        shape: Shape::Weekly,
        quartz_only: false,
        matches: matches_weekly,
        extract: extract_weekly,
    },
    ShapeRule {
        shape: Shape::MonthlySpecificDay,
        quartz_only: false,
        matches: matches_monthly_specific_day,
        extract: extract_monthly_specific_day,
    },
    ShapeRule {
        shape: Shape::MonthlySpecificWeekDay,
        quartz_only: false,
        matches: matches_monthly_specific_week_day,
        extract: extract_monthly_specific_week_day,
    },
    ShapeRule {
        shape: Shape::YearlySpecificMonthDay,
        quartz_only: false,
        matches: matches_yearly_specific_month_day,
        extract: extract_yearly_specific_month_day,
    },
    ShapeRule {
        shape: Shape::YearlySpecificMonthWeek,
        quartz_only: false,
        matches: matches_yearly_specific_month_week,
        extract: extract_yearly_specific_month_week,
    },
];

/// Parse an expression into the schedule that would have produced it
///
/// Fails only on a wrong field count. An unrecognized shape is not an
/// error: it yields [`Schedule::Advanced`] with the original string.
///
/// # Examples
///
/// ```
/// use a3s_cron_editor::{parse, CronOptions, Schedule, Tab};
///
/// let schedule = parse("0 9 * * MON,WED,FRI", &CronOptions::default()).unwrap();
/// assert_eq!(schedule.tab(), Tab::Weekly);
///
/// let schedule = parse("*/7 3-5 * * *", &CronOptions::default()).unwrap();
/// assert_eq!(schedule, Schedule::Advanced("*/7 3-5 * * *".into()));
/// ```
pub fn parse(expression: &str, options: &CronOptions) -> Result<Schedule> {
    let fields = Fields::split(expression, options.cron_flavor)?;

    let classified = SHAPES
        .iter()
        .filter(|rule| rule.applies(options.cron_flavor))
        .find(|rule| (rule.matches)(&fields))
        .and_then(|rule| {
            (rule.extract)(&fields, options.use_24_hour_time).map(|s| (rule.shape, s))
        });

    match classified {
        Some((shape, schedule)) => {
            tracing::debug!(
                shape = ?shape,
                tab = %schedule.tab(),
                "Classified cron expression"
            );
            Ok(schedule)
        }
        None => {
            tracing::debug!(
                expression = %expression,
                "No known shape matched, keeping expression as advanced"
            );
            Ok(Schedule::Advanced(AdvancedState::new(expression)))
        }
    }
}

/// Shape an expression matches, `None` when it falls back to advanced
pub fn classify(expression: &str, dialect: Dialect) -> Result<Option<Shape>> {
    let fields = Fields::split(expression, dialect)?;
    Ok(SHAPES
        .iter()
        .filter(|rule| rule.applies(dialect))
        .find(|rule| (rule.matches)(&fields))
        .map(|rule| rule.shape))
}

// ============================================================================
// Field checks
// ============================================================================

/// `{prefix}N`, e.g. `0/15` with prefix `0/`
fn step(field: &str, prefix: &str) -> Option<u32> {
    field.strip_prefix(prefix).and_then(parse_digits)
}

fn is_placeholder(field: &str) -> bool {
    field == "?" || field == "*"
}

/// Comma-joined bare weekday codes (`MON,WED,FRI`)
fn weekday_list(field: &str) -> Option<BTreeSet<Weekday>> {
    field.split(',').map(Weekday::from_code).collect()
}

/// Weekday with an occurrence suffix (`MON#1`, `FRIL`)
fn weekday_occurrence(field: &str) -> Option<(Weekday, MonthWeek)> {
    let day = Weekday::from_code(field.get(..3)?)?;
    let month_week = MonthWeek::from_code(field.get(3..)?)?;
    Some((day, month_week))
}

/// Fields every day-based shape shares: literal time, wildcard year
fn timed(f: &Fields<'_>) -> bool {
    f.has_literal_time() && f.year_is_wildcard()
}

// ============================================================================
// Rules
// ============================================================================

fn matches_minutely_step(f: &Fields<'_>) -> bool {
    parse_digits(f.second).is_some()
        && step(f.minute, "0/").is_some()
        && f.hour == "*"
        && f.day_of_month == "1/1"
        && f.month == "*"
        && is_placeholder(f.day_of_week)
        && f.year_is_wildcard()
}

fn extract_minutely_step(f: &Fields<'_>, _use_24_hour_time: bool) -> Option<Schedule> {
    Some(Schedule::Minutely(MinutelyState {
        minutes: step(f.minute, "0/")?,
        seconds: parse_digits(f.second)?,
    }))
}

fn matches_minutely_seconds(f: &Fields<'_>) -> bool {
    step(f.second, "*/").is_some()
        && f.minute == "*"
        && f.hour == "*"
        && f.day_of_month == "1/1"
        && f.month == "*"
        && is_placeholder(f.day_of_week)
        && f.year_is_wildcard()
}

fn extract_minutely_seconds(f: &Fields<'_>, _use_24_hour_time: bool) -> Option<Schedule> {
    Some(Schedule::Minutely(MinutelyState {
        minutes: 0,
        seconds: step(f.second, "*/")?,
    }))
}

fn matches_hourly(f: &Fields<'_>) -> bool {
    parse_digits(f.second).is_some()
        && parse_digits(f.minute).is_some()
        && step(f.hour, "0/").is_some()
        && f.day_of_month == "1/1"
        && f.month == "*"
        && is_placeholder(f.day_of_week)
        && f.year_is_wildcard()
}

fn extract_hourly(f: &Fields<'_>, _use_24_hour_time: bool) -> Option<Schedule> {
    Some(Schedule::Hourly(HourlyState {
        hours: step(f.hour, "0/")?,
        minutes: parse_digits(f.minute)?,
        seconds: parse_digits(f.second)?,
    }))
}

fn matches_daily_every_days(f: &Fields<'_>) -> bool {
    timed(f)
        && step(f.day_of_month, "1/").is_some()
        && f.month == "*"
        && is_placeholder(f.day_of_week)
}

fn extract_daily_every_days(f: &Fields<'_>, use_24_hour_time: bool) -> Option<Schedule> {
    Some(Schedule::Daily(DailySchedule::EveryDays(EveryDaysState {
        days: step(f.day_of_month, "1/")?,
        time: f.time(use_24_hour_time)?,
    })))
}

fn matches_daily_every_week_day(f: &Fields<'_>) -> bool {
    timed(f)
        && is_placeholder(f.day_of_month)
        && f.month == "*"
        && WeekdayRange::is_recognized(f.day_of_week)
}

fn extract_daily_every_week_day(f: &Fields<'_>, use_24_hour_time: bool) -> Option<Schedule> {
    Some(Schedule::Daily(DailySchedule::EveryWeekDay(
        EveryWeekDayState {
            time: f.time(use_24_hour_time)?,
        },
    )))
}

fn matches_weekly(f: &Fields<'_>) -> bool {
    timed(f)
        && is_placeholder(f.day_of_month)
        && f.month == "*"
        && weekday_list(f.day_of_week).is_some()
}

fn extract_weekly(f: &Fields<'_>, use_24_hour_time: bool) -> Option<Schedule> {
    Some(Schedule::Weekly(WeeklyState {
        days: weekday_list(f.day_of_week)?,
        time: f.time(use_24_hour_time)?,
    }))
}

fn matches_monthly_specific_day(f: &Fields<'_>) -> bool {
    timed(f)
        && MonthDay::from_field(f.day_of_month).is_some()
        && step(f.month, "1/").is_some()
        && is_placeholder(f.day_of_week)
}

fn extract_monthly_specific_day(f: &Fields<'_>, use_24_hour_time: bool) -> Option<Schedule> {
    Some(Schedule::Monthly(MonthlySchedule::SpecificDay(
        SpecificDayState {
            day: MonthDay::from_field(f.day_of_month)?,
            months: step(f.month, "1/")?,
            time: f.time(use_24_hour_time)?,
        },
    )))
}

fn matches_monthly_specific_week_day(f: &Fields<'_>) -> bool {
    timed(f)
        && is_placeholder(f.day_of_month)
        && step(f.month, "1/").is_some()
        && weekday_occurrence(f.day_of_week).is_some()
}

fn extract_monthly_specific_week_day(f: &Fields<'_>, use_24_hour_time: bool) -> Option<Schedule> {
    let (day, month_week) = weekday_occurrence(f.day_of_week)?;
    Some(Schedule::Monthly(MonthlySchedule::SpecificWeekDay(
        SpecificWeekDayState {
            month_week,
            day,
            months: step(f.month, "1/")?,
            time: f.time(use_24_hour_time)?,
        },
    )))
}

fn matches_yearly_specific_month_day(f: &Fields<'_>) -> bool {
    timed(f)
        && MonthDay::from_field(f.day_of_month).is_some()
        && parse_digits(f.month).is_some()
        && is_placeholder(f.day_of_week)
}

fn extract_yearly_specific_month_day(f: &Fields<'_>, use_24_hour_time: bool) -> Option<Schedule> {
    Some(Schedule::Yearly(YearlySchedule::SpecificMonthDay(
        SpecificMonthDayState {
            month: parse_digits(f.month)?,
            day: MonthDay::from_field(f.day_of_month)?,
            time: f.time(use_24_hour_time)?,
        },
    )))
}

fn matches_yearly_specific_month_week(f: &Fields<'_>) -> bool {
    timed(f)
        && is_placeholder(f.day_of_month)
        && parse_digits(f.month).is_some()
        && weekday_occurrence(f.day_of_week).is_some()
}

fn extract_yearly_specific_month_week(f: &Fields<'_>, use_24_hour_time: bool) -> Option<Schedule> {
    let (day, month_week) = weekday_occurrence(f.day_of_week)?;
    Some(Schedule::Yearly(YearlySchedule::SpecificMonthWeek(
        SpecificMonthWeekState {
            month_week,
            day,
            month: parse_digits(f.month)?,
            time: f.time(use_24_hour_time)?,
        },
    )))
}
