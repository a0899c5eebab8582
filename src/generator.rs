//! Cron expression generator
//!
//! Renders a [`Schedule`] into the expression for the active dialect.
//! Fields are assembled in quartz order (second, minute, hour,
//! day-of-month, month, day-of-week, year); the standard dialect drops
//! the second and year fields.

use crate::error::{CronEditorError, Result};
use crate::options::CronOptions;
use crate::state::{
    DailySchedule, HourlyState, MinutelyState, MonthlySchedule, Schedule, ScheduleState,
    TimeOfDay, WeeklyState, YearlySchedule,
};
use crate::types::{Dialect, Tab};

/// Generate the cron expression for a schedule
///
/// # Examples
///
/// ```
/// use a3s_cron_editor::{generate, CronOptions, MinutelyState, Schedule};
///
/// let options = CronOptions::default();
/// let schedule = Schedule::Minutely(MinutelyState { minutes: 15, seconds: 0 });
/// assert_eq!(generate(&schedule, &options).unwrap(), "0/15 * 1/1 * *");
/// ```
pub fn generate(schedule: &Schedule, options: &CronOptions) -> Result<String> {
    let dialect = options.cron_flavor;
    let placeholder = dialect.placeholder();
    let use_24 = options.use_24_hour_time;

    let cron = match schedule {
        Schedule::Minutely(state) => minutely(state, dialect),
        Schedule::Hourly(state) => hourly(state, dialect),
        Schedule::Daily(DailySchedule::EveryDays(state)) => fields(
            dialect,
            &state.time,
            use_24,
            format!("1/{}", state.days),
            "*".to_string(),
            placeholder.to_string(),
        ),
        Schedule::Daily(DailySchedule::EveryWeekDay(state)) => fields(
            dialect,
            &state.time,
            use_24,
            placeholder.to_string(),
            "*".to_string(),
            options.weekdays.to_string(),
        ),
        Schedule::Weekly(state) => weekly(state, options)?,
        Schedule::Monthly(MonthlySchedule::SpecificDay(state)) => fields(
            dialect,
            &state.time,
            use_24,
            state.day.to_string(),
            format!("1/{}", state.months),
            placeholder.to_string(),
        ),
        Schedule::Monthly(MonthlySchedule::SpecificWeekDay(state)) => fields(
            dialect,
            &state.time,
            use_24,
            placeholder.to_string(),
            format!("1/{}", state.months),
            format!("{}{}", state.day, state.month_week),
        ),
        Schedule::Yearly(YearlySchedule::SpecificMonthDay(state)) => fields(
            dialect,
            &state.time,
            use_24,
            state.day.to_string(),
            state.month.to_string(),
            placeholder.to_string(),
        ),
        Schedule::Yearly(YearlySchedule::SpecificMonthWeek(state)) => fields(
            dialect,
            &state.time,
            use_24,
            placeholder.to_string(),
            state.month.to_string(),
            format!("{}{}", state.day, state.month_week),
        ),
        Schedule::Advanced(state) => state.expression.clone(),
    };

    tracing::debug!(tab = %schedule.tab(), cron = %cron, "Generated cron expression");
    Ok(cron)
}

/// Generate the expression for the schedule a state currently holds for `tab`
pub fn generate_tab(tab: Tab, state: &ScheduleState, options: &CronOptions) -> Result<String> {
    generate(&state.schedule(tab), options)
}

fn minutely(state: &MinutelyState, dialect: Dialect) -> String {
    let (second, minute) = if dialect.is_quartz() && state.minutes == 0 {
        (format!("*/{}", state.seconds), "*".to_string())
    } else {
        (state.seconds.to_string(), format!("0/{}", state.minutes))
    };
    join(
        dialect,
        [
            second,
            minute,
            "*".to_string(),
            "1/1".to_string(),
            "*".to_string(),
            dialect.placeholder().to_string(),
        ],
    )
}

fn hourly(state: &HourlyState, dialect: Dialect) -> String {
    join(
        dialect,
        [
            state.seconds.to_string(),
            state.minutes.to_string(),
            format!("0/{}", state.hours),
            "1/1".to_string(),
            "*".to_string(),
            dialect.placeholder().to_string(),
        ],
    )
}

fn weekly(state: &WeeklyState, options: &CronOptions) -> Result<String> {
    let days: Vec<&str> = options
        .week()
        .into_iter()
        .filter(|day| state.is_selected(*day))
        .map(|day| day.code())
        .collect();
    if days.is_empty() {
        return Err(CronEditorError::EmptyWeekdaySelection);
    }

    let dialect = options.cron_flavor;
    Ok(fields(
        dialect,
        &state.time,
        options.use_24_hour_time,
        dialect.placeholder().to_string(),
        "*".to_string(),
        days.join(","),
    ))
}

/// Fields for the time-of-day shapes: the hour goes through the formatter
fn fields(
    dialect: Dialect,
    time: &TimeOfDay,
    use_24_hour_time: bool,
    day_of_month: String,
    month: String,
    day_of_week: String,
) -> String {
    join(
        dialect,
        [
            time.second.to_string(),
            time.minute.to_string(),
            time.hour_24(use_24_hour_time).to_string(),
            day_of_month,
            month,
            day_of_week,
        ],
    )
}

/// Join `[second, minute, hour, day-of-month, month, day-of-week]`
fn join(dialect: Dialect, fields: [String; 6]) -> String {
    let [second, rest @ ..] = fields;
    let mut parts = Vec::with_capacity(7);
    if dialect.is_quartz() {
        parts.push(second);
    }
    parts.extend(rest);
    if dialect.is_quartz() {
        parts.push("*".to_string());
    }
    parts.join(" ")
}
