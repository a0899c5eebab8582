//! Schedule state
//!
//! `ScheduleState` holds one sub-state per tab so switching tabs never
//! loses edits. A `Schedule` is the tagged value for a single tab (and,
//! where a tab has sub-tabs, a single sub-tab); it is what the generator
//! renders and what the parser returns. Applying a `Schedule` to a state
//! yields a fresh snapshot and leaves the original untouched.

use crate::error::Result;
use crate::format::{hour_type_of, to_24_hour, to_display_hour};
use crate::options::CronOptions;
use crate::types::{
    DailySubTab, Dialect, HourType, MonthDay, MonthWeek, MonthlySubTab, Tab, Weekday,
    YearlySubTab,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Time of day as displayed
///
/// `hour` is 0-23 with no `hour_type` in 24-hour display, else 1-12 tagged
/// AM/PM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeOfDay {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hour_type: Option<HourType>,
}

impl TimeOfDay {
    /// Build the displayed form of a 24-hour time
    pub fn from_24_hour(hour_24: u32, minute: u32, second: u32, use_24_hour_time: bool) -> Self {
        Self {
            hour: to_display_hour(hour_24, use_24_hour_time),
            minute,
            second,
            hour_type: hour_type_of(hour_24, use_24_hour_time),
        }
    }

    /// Hour as it appears in the cron hour field
    pub fn hour_24(&self, use_24_hour_time: bool) -> u32 {
        to_24_hour(self.hour, self.hour_type, use_24_hour_time)
    }

    /// Re-express this time for another hour display mode
    pub fn convert(&self, from_24_hour_time: bool, to_24_hour_time: bool) -> Self {
        Self::from_24_hour(
            self.hour_24(from_24_hour_time),
            self.minute,
            self.second,
            to_24_hour_time,
        )
    }
}

/// Every N minutes (minutes == 0: every N seconds, quartz only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinutelyState {
    pub minutes: u32,
    pub seconds: u32,
}

/// Every N hours at a fixed minute and second
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlyState {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

/// Every N days at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EveryDaysState {
    pub days: u32,
    #[serde(flatten)]
    pub time: TimeOfDay,
}

/// Every business weekday at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EveryWeekDayState {
    #[serde(flatten)]
    pub time: TimeOfDay,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyState {
    pub sub_tab: DailySubTab,
    pub every_days: EveryDaysState,
    pub every_week_day: EveryWeekDayState,
}

/// Selected weekdays at a time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyState {
    pub days: BTreeSet<Weekday>,
    #[serde(flatten)]
    pub time: TimeOfDay,
}

impl WeeklyState {
    pub fn is_selected(&self, day: Weekday) -> bool {
        self.days.contains(&day)
    }

    /// Set or clear the flag for one weekday
    pub fn set(&mut self, day: Weekday, selected: bool) {
        if selected {
            self.days.insert(day);
        } else {
            self.days.remove(&day);
        }
    }
}

/// A day of the month every N months
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecificDayState {
    pub day: MonthDay,
    pub months: u32,
    #[serde(flatten)]
    pub time: TimeOfDay,
}

/// The Nth (or last) weekday of the month every N months
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecificWeekDayState {
    pub month_week: MonthWeek,
    pub day: Weekday,
    pub months: u32,
    #[serde(flatten)]
    pub time: TimeOfDay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyState {
    pub sub_tab: MonthlySubTab,
    pub specific_day: SpecificDayState,
    pub specific_week_day: SpecificWeekDayState,
}

/// A day of a given month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecificMonthDayState {
    pub month: u32,
    pub day: MonthDay,
    #[serde(flatten)]
    pub time: TimeOfDay,
}

/// The Nth (or last) weekday of a given month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecificMonthWeekState {
    pub month_week: MonthWeek,
    pub day: Weekday,
    pub month: u32,
    #[serde(flatten)]
    pub time: TimeOfDay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyState {
    pub sub_tab: YearlySubTab,
    pub specific_month_day: SpecificMonthDayState,
    pub specific_month_week: SpecificMonthWeekState,
}

/// Raw expression passed through verbatim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedState {
    pub expression: String,
}

impl AdvancedState {
    pub fn new(expression: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
        }
    }

    /// Default sample expression for a dialect
    pub fn default_for(dialect: Dialect) -> Self {
        match dialect {
            Dialect::Standard => Self::new("15 10 2 * *"),
            Dialect::Quartz => Self::new("0 15 10 L-2 * ? *"),
        }
    }
}

impl From<&str> for AdvancedState {
    fn from(expression: &str) -> Self {
        Self::new(expression)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "subTab", rename_all = "camelCase")]
pub enum DailySchedule {
    EveryDays(EveryDaysState),
    EveryWeekDay(EveryWeekDayState),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "subTab", rename_all = "camelCase")]
pub enum MonthlySchedule {
    SpecificDay(SpecificDayState),
    SpecificWeekDay(SpecificWeekDayState),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "subTab", rename_all = "camelCase")]
pub enum YearlySchedule {
    SpecificMonthDay(SpecificMonthDayState),
    SpecificMonthWeek(SpecificMonthWeekState),
}

/// One tab's schedule, tagged by tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "tab", content = "state", rename_all = "lowercase")]
pub enum Schedule {
    Minutely(MinutelyState),
    Hourly(HourlyState),
    Daily(DailySchedule),
    Weekly(WeeklyState),
    Monthly(MonthlySchedule),
    Yearly(YearlySchedule),
    Advanced(AdvancedState),
}

impl Schedule {
    pub fn tab(&self) -> Tab {
        match self {
            Schedule::Minutely(_) => Tab::Minutely,
            Schedule::Hourly(_) => Tab::Hourly,
            Schedule::Daily(_) => Tab::Daily,
            Schedule::Weekly(_) => Tab::Weekly,
            Schedule::Monthly(_) => Tab::Monthly,
            Schedule::Yearly(_) => Tab::Yearly,
            Schedule::Advanced(_) => Tab::Advanced,
        }
    }

    /// Re-express every stored hour for another hour display mode
    pub fn convert_hours(&self, from_24_hour_time: bool, to_24_hour_time: bool) -> Self {
        let convert = |time: TimeOfDay| time.convert(from_24_hour_time, to_24_hour_time);
        match self.clone() {
            Schedule::Daily(DailySchedule::EveryDays(mut s)) => {
                s.time = convert(s.time);
                Schedule::Daily(DailySchedule::EveryDays(s))
            }
            Schedule::Daily(DailySchedule::EveryWeekDay(mut s)) => {
                s.time = convert(s.time);
                Schedule::Daily(DailySchedule::EveryWeekDay(s))
            }
            Schedule::Weekly(mut s) => {
                s.time = convert(s.time);
                Schedule::Weekly(s)
            }
            Schedule::Monthly(MonthlySchedule::SpecificDay(mut s)) => {
                s.time = convert(s.time);
                Schedule::Monthly(MonthlySchedule::SpecificDay(s))
            }
            Schedule::Monthly(MonthlySchedule::SpecificWeekDay(mut s)) => {
                s.time = convert(s.time);
                Schedule::Monthly(MonthlySchedule::SpecificWeekDay(s))
            }
            Schedule::Yearly(YearlySchedule::SpecificMonthDay(mut s)) => {
                s.time = convert(s.time);
                Schedule::Yearly(YearlySchedule::SpecificMonthDay(s))
            }
            Schedule::Yearly(YearlySchedule::SpecificMonthWeek(mut s)) => {
                s.time = convert(s.time);
                Schedule::Yearly(YearlySchedule::SpecificMonthWeek(s))
            }
            other => other,
        }
    }
}

/// All seven tabs' sub-states
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleState {
    pub minutes: MinutelyState,
    pub hourly: HourlyState,
    pub daily: DailyState,
    pub weekly: WeeklyState,
    pub monthly: MonthlyState,
    pub yearly: YearlyState,
    pub advanced: AdvancedState,
}

impl ScheduleState {
    /// Seed every tab from the options' dialect, default time and week order
    pub fn defaults(options: &CronOptions) -> Result<Self> {
        let default = options.default_hms()?;
        let time = TimeOfDay::from_24_hour(
            default.hour,
            default.minute,
            default.second,
            options.use_24_hour_time,
        );
        let first_day = Weekday::first(options.week_starts_on_sunday);

        Ok(Self {
            minutes: MinutelyState {
                minutes: 1,
                seconds: 0,
            },
            hourly: HourlyState {
                hours: 1,
                minutes: 0,
                seconds: 0,
            },
            daily: DailyState {
                sub_tab: DailySubTab::EveryDays,
                every_days: EveryDaysState { days: 1, time },
                every_week_day: EveryWeekDayState { time },
            },
            weekly: WeeklyState {
                days: BTreeSet::from([first_day]),
                time,
            },
            monthly: MonthlyState {
                sub_tab: MonthlySubTab::SpecificDay,
                specific_day: SpecificDayState {
                    day: MonthDay::Day(1),
                    months: 1,
                    time,
                },
                specific_week_day: SpecificWeekDayState {
                    month_week: MonthWeek::First,
                    day: first_day,
                    months: 1,
                    time,
                },
            },
            yearly: YearlyState {
                sub_tab: YearlySubTab::SpecificMonthDay,
                specific_month_day: SpecificMonthDayState {
                    month: 1,
                    day: MonthDay::Day(1),
                    time,
                },
                specific_month_week: SpecificMonthWeekState {
                    month_week: MonthWeek::First,
                    day: first_day,
                    month: 1,
                    time,
                },
            },
            advanced: AdvancedState::default_for(options.cron_flavor),
        })
    }

    /// The schedule currently held for a tab, following its active sub-tab
    pub fn schedule(&self, tab: Tab) -> Schedule {
        match tab {
            Tab::Minutely => Schedule::Minutely(self.minutes),
            Tab::Hourly => Schedule::Hourly(self.hourly),
            Tab::Daily => Schedule::Daily(match self.daily.sub_tab {
                DailySubTab::EveryDays => DailySchedule::EveryDays(self.daily.every_days),
                DailySubTab::EveryWeekDay => {
                    DailySchedule::EveryWeekDay(self.daily.every_week_day)
                }
            }),
            Tab::Weekly => Schedule::Weekly(self.weekly.clone()),
            Tab::Monthly => Schedule::Monthly(match self.monthly.sub_tab {
                MonthlySubTab::SpecificDay => {
                    MonthlySchedule::SpecificDay(self.monthly.specific_day)
                }
                MonthlySubTab::SpecificWeekDay => {
                    MonthlySchedule::SpecificWeekDay(self.monthly.specific_week_day)
                }
            }),
            Tab::Yearly => Schedule::Yearly(match self.yearly.sub_tab {
                YearlySubTab::SpecificMonthDay => {
                    YearlySchedule::SpecificMonthDay(self.yearly.specific_month_day)
                }
                YearlySubTab::SpecificMonthWeek => {
                    YearlySchedule::SpecificMonthWeek(self.yearly.specific_month_week)
                }
            }),
            Tab::Advanced => Schedule::Advanced(self.advanced.clone()),
        }
    }

    /// Snapshot with one tab's sub-state (and sub-tab selection) replaced
    pub fn apply(&self, schedule: Schedule) -> Self {
        let mut next = self.clone();
        match schedule {
            Schedule::Minutely(s) => next.minutes = s,
            Schedule::Hourly(s) => next.hourly = s,
            Schedule::Daily(DailySchedule::EveryDays(s)) => {
                next.daily.sub_tab = DailySubTab::EveryDays;
                next.daily.every_days = s;
            }
            Schedule::Daily(DailySchedule::EveryWeekDay(s)) => {
                next.daily.sub_tab = DailySubTab::EveryWeekDay;
                next.daily.every_week_day = s;
            }
            Schedule::Weekly(s) => next.weekly = s,
            Schedule::Monthly(MonthlySchedule::SpecificDay(s)) => {
                next.monthly.sub_tab = MonthlySubTab::SpecificDay;
                next.monthly.specific_day = s;
            }
            Schedule::Monthly(MonthlySchedule::SpecificWeekDay(s)) => {
                next.monthly.sub_tab = MonthlySubTab::SpecificWeekDay;
                next.monthly.specific_week_day = s;
            }
            Schedule::Yearly(YearlySchedule::SpecificMonthDay(s)) => {
                next.yearly.sub_tab = YearlySubTab::SpecificMonthDay;
                next.yearly.specific_month_day = s;
            }
            Schedule::Yearly(YearlySchedule::SpecificMonthWeek(s)) => {
                next.yearly.sub_tab = YearlySubTab::SpecificMonthWeek;
                next.yearly.specific_month_week = s;
            }
            Schedule::Advanced(s) => next.advanced = s,
        }
        next
    }

    /// Snapshot with every stored hour converted to another display mode
    pub fn convert_hours(&self, from_24_hour_time: bool, to_24_hour_time: bool) -> Self {
        let convert = |time: TimeOfDay| time.convert(from_24_hour_time, to_24_hour_time);
        let mut next = self.clone();
        next.daily.every_days.time = convert(next.daily.every_days.time);
        next.daily.every_week_day.time = convert(next.daily.every_week_day.time);
        next.weekly.time = convert(next.weekly.time);
        next.monthly.specific_day.time = convert(next.monthly.specific_day.time);
        next.monthly.specific_week_day.time = convert(next.monthly.specific_week_day.time);
        next.yearly.specific_month_day.time = convert(next.yearly.specific_month_day.time);
        next.yearly.specific_month_week.time = convert(next.yearly.specific_month_week.time);
        next
    }

    /// Serialize the snapshot as JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
