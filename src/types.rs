//! Core vocabulary shared by the generator and the parser
//!
//! Every enum here has a fixed textual code used inside cron fields
//! (`MON`, `#1`, `LW`, ...) and serializes to that same code.

use crate::error::{CronEditorError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Cron dialect
///
/// - `Standard`: 5 fields (minute, hour, day-of-month, month, day-of-week)
/// - `Quartz`: 6 or 7 fields (second, minute, hour, day-of-month, month,
///   day-of-week, optional year)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    #[default]
    Standard,
    Quartz,
}

impl Dialect {
    /// Whether an expression with `count` fields is acceptable
    pub fn accepts_field_count(&self, count: usize) -> bool {
        match self {
            Dialect::Standard => count == 5,
            Dialect::Quartz => count == 6 || count == 7,
        }
    }

    /// Human readable arity, used in error messages
    pub fn arity_label(&self) -> &'static str {
        match self {
            Dialect::Standard => "5",
            Dialect::Quartz => "6 or 7",
        }
    }

    /// Wildcard used for a day field blanked by its mutually exclusive twin
    pub fn placeholder(&self) -> &'static str {
        match self {
            Dialect::Standard => "*",
            Dialect::Quartz => "?",
        }
    }

    pub fn is_quartz(&self) -> bool {
        matches!(self, Dialect::Quartz)
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::Standard => write!(f, "standard"),
            Dialect::Quartz => write!(f, "quartz"),
        }
    }
}

impl FromStr for Dialect {
    type Err = CronEditorError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "standard" => Ok(Dialect::Standard),
            "quartz" => Ok(Dialect::Quartz),
            other => Err(CronEditorError::InvalidValue(format!(
                "unknown cron flavor '{}'",
                other
            ))),
        }
    }
}

/// Schedule-shape category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    Minutely,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Advanced,
}

impl Tab {
    /// All tabs in display order
    pub const ALL: [Tab; 7] = [
        Tab::Minutely,
        Tab::Hourly,
        Tab::Daily,
        Tab::Weekly,
        Tab::Monthly,
        Tab::Yearly,
        Tab::Advanced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Minutely => "minutely",
            Tab::Hourly => "hourly",
            Tab::Daily => "daily",
            Tab::Weekly => "weekly",
            Tab::Monthly => "monthly",
            Tab::Yearly => "yearly",
            Tab::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = CronEditorError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            // "minutes" is the label older editors used for the minutely tab
            "minutely" | "minutes" => Ok(Tab::Minutely),
            "hourly" => Ok(Tab::Hourly),
            "daily" => Ok(Tab::Daily),
            "weekly" => Ok(Tab::Weekly),
            "monthly" => Ok(Tab::Monthly),
            "yearly" => Ok(Tab::Yearly),
            "advanced" => Ok(Tab::Advanced),
            other => Err(CronEditorError::InvalidSubTab(format!(
                "unknown tab '{}'",
                other
            ))),
        }
    }
}

/// AM/PM tag carried next to a 12-hour display hour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HourType {
    AM,
    PM,
}

impl fmt::Display for HourType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HourType::AM => write!(f, "AM"),
            HourType::PM => write!(f, "PM"),
        }
    }
}

impl FromStr for HourType {
    type Err = CronEditorError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "AM" => Ok(HourType::AM),
            "PM" => Ok(HourType::PM),
            other => Err(CronEditorError::InvalidValue(format!(
                "unknown hour type '{}'",
                other
            ))),
        }
    }
}

/// Hour display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HourDisplay {
    #[serde(rename = "12")]
    TwelveHour,
    #[serde(rename = "24")]
    TwentyFourHour,
}

impl HourDisplay {
    pub fn from_24_hour_flag(use_24_hour_time: bool) -> Self {
        if use_24_hour_time {
            HourDisplay::TwentyFourHour
        } else {
            HourDisplay::TwelveHour
        }
    }

    pub fn is_24_hour(&self) -> bool {
        matches!(self, HourDisplay::TwentyFourHour)
    }
}

impl fmt::Display for HourDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HourDisplay::TwelveHour => write!(f, "12-hour"),
            HourDisplay::TwentyFourHour => write!(f, "24-hour"),
        }
    }
}

impl FromStr for HourDisplay {
    type Err = CronEditorError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "12" | "12-hour" => Ok(HourDisplay::TwelveHour),
            "24" | "24-hour" => Ok(HourDisplay::TwentyFourHour),
            other => Err(CronEditorError::InvalidValue(format!(
                "unknown hour display mode '{}'",
                other
            ))),
        }
    }
}

/// Day-of-week code
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Weekday {
    const MONDAY_FIRST: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    const SUNDAY_FIRST: [Weekday; 7] = [
        Weekday::Sun,
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
    ];

    /// The seven weekdays in canonical week order
    pub fn week(starts_on_sunday: bool) -> [Weekday; 7] {
        if starts_on_sunday {
            Self::SUNDAY_FIRST
        } else {
            Self::MONDAY_FIRST
        }
    }

    /// First day of the week
    pub fn first(starts_on_sunday: bool) -> Weekday {
        Self::week(starts_on_sunday)[0]
    }

    pub fn code(&self) -> &'static str {
        match self {
            Weekday::Mon => "MON",
            Weekday::Tue => "TUE",
            Weekday::Wed => "WED",
            Weekday::Thu => "THU",
            Weekday::Fri => "FRI",
            Weekday::Sat => "SAT",
            Weekday::Sun => "SUN",
        }
    }

    /// Parse a bare three-letter code, `None` for anything else
    pub fn from_code(code: &str) -> Option<Weekday> {
        Self::MONDAY_FIRST.into_iter().find(|d| d.code() == code)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Weekday {
    type Err = CronEditorError;

    fn from_str(s: &str) -> Result<Self> {
        Weekday::from_code(s)
            .ok_or_else(|| CronEditorError::InvalidValue(format!("unknown weekday '{}'", s)))
    }
}

/// Occurrence of a weekday within a month (`#1`..`#5`, `L`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MonthWeek {
    #[serde(rename = "#1")]
    First,
    #[serde(rename = "#2")]
    Second,
    #[serde(rename = "#3")]
    Third,
    #[serde(rename = "#4")]
    Fourth,
    #[serde(rename = "#5")]
    Fifth,
    #[serde(rename = "L")]
    Last,
}

impl MonthWeek {
    pub const ALL: [MonthWeek; 6] = [
        MonthWeek::First,
        MonthWeek::Second,
        MonthWeek::Third,
        MonthWeek::Fourth,
        MonthWeek::Fifth,
        MonthWeek::Last,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            MonthWeek::First => "#1",
            MonthWeek::Second => "#2",
            MonthWeek::Third => "#3",
            MonthWeek::Fourth => "#4",
            MonthWeek::Fifth => "#5",
            MonthWeek::Last => "L",
        }
    }

    pub fn from_code(code: &str) -> Option<MonthWeek> {
        Self::ALL.into_iter().find(|w| w.code() == code)
    }
}

impl fmt::Display for MonthWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for MonthWeek {
    type Err = CronEditorError;

    fn from_str(s: &str) -> Result<Self> {
        MonthWeek::from_code(s).ok_or_else(|| {
            CronEditorError::InvalidValue(format!("unknown month week '{}'", s))
        })
    }
}

/// Day-of-month value: a literal day or one of the `L`, `LW`, `1W` sentinels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum MonthDay {
    Day(u32),
    /// `L`
    Last,
    /// `LW`
    LastWeekday,
    /// `1W`
    FirstWeekday,
}

impl MonthDay {
    /// Parse a day-of-month field, `None` when it is not a day or sentinel
    pub fn from_field(field: &str) -> Option<MonthDay> {
        match field {
            "L" => Some(MonthDay::Last),
            "LW" => Some(MonthDay::LastWeekday),
            "1W" => Some(MonthDay::FirstWeekday),
            digits => parse_digits(digits).map(MonthDay::Day),
        }
    }
}

impl Default for MonthDay {
    fn default() -> Self {
        MonthDay::Day(1)
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthDay::Day(day) => write!(f, "{}", day),
            MonthDay::Last => write!(f, "L"),
            MonthDay::LastWeekday => write!(f, "LW"),
            MonthDay::FirstWeekday => write!(f, "1W"),
        }
    }
}

impl FromStr for MonthDay {
    type Err = CronEditorError;

    fn from_str(s: &str) -> Result<Self> {
        MonthDay::from_field(s)
            .ok_or_else(|| CronEditorError::InvalidValue(format!("unknown month day '{}'", s)))
    }
}

impl TryFrom<String> for MonthDay {
    type Error = CronEditorError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<MonthDay> for String {
    fn from(day: MonthDay) -> Self {
        day.to_string()
    }
}

/// Daily tab sub-selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DailySubTab {
    #[default]
    EveryDays,
    EveryWeekDay,
}

impl FromStr for DailySubTab {
    type Err = CronEditorError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "everyDays" => Ok(DailySubTab::EveryDays),
            "everyWeekDay" => Ok(DailySubTab::EveryWeekDay),
            other => Err(CronEditorError::InvalidSubTab(format!(
                "invalid cron daily subtab selection '{}'",
                other
            ))),
        }
    }
}

/// Monthly tab sub-selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MonthlySubTab {
    #[default]
    SpecificDay,
    SpecificWeekDay,
}

impl FromStr for MonthlySubTab {
    type Err = CronEditorError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "specificDay" => Ok(MonthlySubTab::SpecificDay),
            "specificWeekDay" => Ok(MonthlySubTab::SpecificWeekDay),
            other => Err(CronEditorError::InvalidSubTab(format!(
                "invalid cron monthly subtab selection '{}'",
                other
            ))),
        }
    }
}

/// Yearly tab sub-selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum YearlySubTab {
    #[default]
    SpecificMonthDay,
    SpecificMonthWeek,
}

impl FromStr for YearlySubTab {
    type Err = CronEditorError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "specificMonthDay" => Ok(YearlySubTab::SpecificMonthDay),
            "specificMonthWeek" => Ok(YearlySubTab::SpecificMonthWeek),
            other => Err(CronEditorError::InvalidSubTab(format!(
                "invalid cron yearly subtab selection '{}'",
                other
            ))),
        }
    }
}

/// Business-week range rendered into the day-of-week field (e.g. `MON-FRI`)
///
/// Any single-token literal may be configured for generation, but only
/// the [`WeekdayRange::RECOGNIZED`] literals are classified back as daily.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WeekdayRange(String);

impl WeekdayRange {
    pub const RECOGNIZED: [&'static str; 4] = ["MON-FRI", "SUN-THU", "SUN-FRI", "MON-SAT"];

    /// Accept a range literal that fills exactly one cron field
    pub fn new(range: impl Into<String>) -> Result<Self> {
        let range = range.into();
        if range.is_empty() || range.chars().any(char::is_whitespace) {
            return Err(CronEditorError::InvalidValue(format!(
                "weekday range '{}' must be a single field",
                range
            )));
        }
        Ok(Self(range))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether `field` is one of the recognized business-week literals
    pub fn is_recognized(field: &str) -> bool {
        Self::RECOGNIZED.contains(&field)
    }
}

impl Default for WeekdayRange {
    fn default() -> Self {
        Self("MON-FRI".to_string())
    }
}

impl fmt::Display for WeekdayRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for WeekdayRange {
    type Error = CronEditorError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<WeekdayRange> for String {
    fn from(range: WeekdayRange) -> Self {
        range.0
    }
}

/// Parse a field made only of ASCII digits
pub(crate) fn parse_digits(field: &str) -> Option<u32> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}
