//! Editor configuration
//!
//! `CronOptions` is read by both the generator and the parser. It derives
//! serde with camelCase names so an options record can be loaded as-is
//! from a JSON configuration file.

use crate::error::{CronEditorError, Result};
use crate::types::{Dialect, Tab, Weekday, WeekdayRange};
use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Regions whose calendars start the week on Sunday
const SUNDAY_FIRST_REGIONS: &[&str] = &[
    "AG", "AS", "BD", "BR", "BS", "BT", "BW", "BZ", "CA", "CN", "CO", "DM", "DO", "ET", "GT",
    "GU", "HK", "HN", "ID", "IL", "IN", "JM", "JP", "KE", "KH", "KR", "LA", "MH", "MM", "MO",
    "MT", "MX", "MZ", "NI", "NP", "PA", "PE", "PH", "PK", "PR", "PT", "PY", "SA", "SG", "SV",
    "TH", "TT", "TW", "UM", "US", "VE", "VI", "WS", "YE", "ZA", "ZW",
];

/// Time of day used to seed new tab states, in 24-hour form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultTime {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

/// Cron editor options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CronOptions {
    /// Active dialect (default: standard)
    pub cron_flavor: Dialect,

    /// Day-of-week range emitted by the daily "every weekday" schedule
    #[serde(rename = "weekDays")]
    pub weekdays: WeekdayRange,

    /// `HH:MM:SS` used to seed time fields (default: `00:00:00`)
    pub default_time: String,

    /// Store and display hours as 0-23 instead of 1-12 with AM/PM
    #[serde(rename = "use24HourTime")]
    pub use_24_hour_time: bool,

    /// Append `st`/`nd`/`rd`/`th` to numeric month days in labels
    pub use_ordinal_suffixes: bool,

    /// Canonical week order starts on Sunday instead of Monday
    pub week_starts_on_sunday: bool,

    pub hide_minutes_tab: bool,
    pub hide_hourly_tab: bool,
    pub hide_daily_tab: bool,
    pub hide_weekly_tab: bool,
    pub hide_monthly_tab: bool,
    pub hide_yearly_tab: bool,
    pub hide_advanced_tab: bool,
}

impl Default for CronOptions {
    fn default() -> Self {
        Self {
            cron_flavor: Dialect::Standard,
            weekdays: WeekdayRange::default(),
            default_time: "00:00:00".to_string(),
            use_24_hour_time: true,
            use_ordinal_suffixes: true,
            week_starts_on_sunday: false,
            hide_minutes_tab: false,
            hide_hourly_tab: false,
            hide_daily_tab: false,
            hide_weekly_tab: false,
            hide_monthly_tab: false,
            hide_yearly_tab: false,
            hide_advanced_tab: false,
        }
    }
}

impl CronOptions {
    /// Default options with the week order taken from a BCP-47 locale
    ///
    /// ```
    /// use a3s_cron_editor::CronOptions;
    ///
    /// assert!(CronOptions::for_locale("en-US").week_starts_on_sunday);
    /// assert!(!CronOptions::for_locale("fr-FR").week_starts_on_sunday);
    /// ```
    pub fn for_locale(locale: &str) -> Self {
        Self {
            week_starts_on_sunday: locale_week_starts_on_sunday(locale),
            ..Self::default()
        }
    }

    /// Load options from a JSON document; missing keys take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let options: CronOptions = serde_json::from_str(json)?;
        options.default_hms()?;
        Ok(options)
    }

    pub fn with_flavor(mut self, dialect: Dialect) -> Self {
        self.cron_flavor = dialect;
        self
    }

    pub fn with_weekdays(mut self, range: impl Into<String>) -> Result<Self> {
        self.weekdays = WeekdayRange::new(range)?;
        Ok(self)
    }

    pub fn with_default_time(mut self, time: impl Into<String>) -> Self {
        self.default_time = time.into();
        self
    }

    pub fn with_24_hour_time(mut self, enabled: bool) -> Self {
        self.use_24_hour_time = enabled;
        self
    }

    pub fn with_week_starting_on_sunday(mut self, enabled: bool) -> Self {
        self.week_starts_on_sunday = enabled;
        self
    }

    /// Parse `default_time`
    pub fn default_hms(&self) -> Result<DefaultTime> {
        parse_time(&self.default_time)
    }

    /// Weekdays in canonical week order for this configuration
    pub fn week(&self) -> [Weekday; 7] {
        Weekday::week(self.week_starts_on_sunday)
    }

    /// Tabs that are not hidden, in display order
    pub fn visible_tabs(&self) -> Vec<Tab> {
        Tab::ALL
            .into_iter()
            .filter(|tab| !self.is_hidden(*tab))
            .collect()
    }

    fn is_hidden(&self, tab: Tab) -> bool {
        match tab {
            Tab::Minutely => self.hide_minutes_tab,
            Tab::Hourly => self.hide_hourly_tab,
            Tab::Daily => self.hide_daily_tab,
            Tab::Weekly => self.hide_weekly_tab,
            Tab::Monthly => self.hide_monthly_tab,
            Tab::Yearly => self.hide_yearly_tab,
            Tab::Advanced => self.hide_advanced_tab,
        }
    }
}

/// Parse an `HH:MM:SS` time of day
pub fn parse_time(value: &str) -> Result<DefaultTime> {
    let time = NaiveTime::parse_from_str(value, "%H:%M:%S")
        .map_err(|_| CronEditorError::InvalidTime(value.to_string()))?;
    Ok(DefaultTime {
        hour: time.hour(),
        minute: time.minute(),
        second: time.second(),
    })
}

fn locale_week_starts_on_sunday(locale: &str) -> bool {
    // Region is the first two-letter alphabetic subtag after the language
    locale
        .split(['-', '_'])
        .skip(1)
        .find(|tag| tag.len() == 2 && tag.chars().all(|c| c.is_ascii_alphabetic()))
        .map(|region| SUNDAY_FIRST_REGIONS.contains(&region.to_ascii_uppercase().as_str()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = CronOptions::default();
        assert_eq!(options.cron_flavor, Dialect::Standard);
        assert_eq!(options.weekdays.as_str(), "MON-FRI");
        assert!(options.use_24_hour_time);
        assert_eq!(
            options.default_hms().unwrap(),
            DefaultTime {
                hour: 0,
                minute: 0,
                second: 0
            }
        );
    }

    #[test]
    fn test_parse_time() {
        let time = parse_time("14:05:30").unwrap();
        assert_eq!((time.hour, time.minute, time.second), (14, 5, 30));
        assert!(matches!(
            parse_time("25:00:00"),
            Err(CronEditorError::InvalidTime(_))
        ));
        assert!(parse_time("10:00").is_err());
    }

    #[test]
    fn test_from_json_camel_case() {
        let options = CronOptions::from_json(
            r#"{
                "cronFlavor": "quartz",
                "weekDays": "SUN-THU",
                "defaultTime": "09:30:00",
                "use24HourTime": false,
                "hideAdvancedTab": true
            }"#,
        )
        .unwrap();
        assert_eq!(options.cron_flavor, Dialect::Quartz);
        assert_eq!(options.weekdays.as_str(), "SUN-THU");
        assert!(!options.use_24_hour_time);
        assert!(options.use_ordinal_suffixes);
        assert!(!options.visible_tabs().contains(&Tab::Advanced));
    }

    #[test]
    fn test_from_json_rejects_bad_time() {
        let err = CronOptions::from_json(r#"{"defaultTime": "noon"}"#).unwrap_err();
        assert!(matches!(err, CronEditorError::InvalidTime(_)));
    }

    #[test]
    fn test_weekday_range_is_validated() {
        let err = CronOptions::from_json(r#"{"weekDays": "MON - FRI"}"#).unwrap_err();
        assert!(matches!(err, CronEditorError::Serialization(_)));
        assert!(CronOptions::default().with_weekdays("").is_err());
    }

    #[test]
    fn test_visible_tabs_order() {
        let mut options = CronOptions::default();
        options.hide_hourly_tab = true;
        options.hide_yearly_tab = true;
        assert_eq!(
            options.visible_tabs(),
            vec![
                Tab::Minutely,
                Tab::Daily,
                Tab::Weekly,
                Tab::Monthly,
                Tab::Advanced
            ]
        );
    }

    #[test]
    fn test_locale_week_start() {
        assert!(locale_week_starts_on_sunday("en-US"));
        assert!(locale_week_starts_on_sunday("ja_JP"));
        assert!(locale_week_starts_on_sunday("zh-Hant-TW"));
        assert!(!locale_week_starts_on_sunday("en-GB"));
        assert!(!locale_week_starts_on_sunday("de"));
    }
}
