//! # a3s-cron-editor
//!
//! Bidirectional conversion between structured schedules and cron
//! expressions for the A3S ecosystem.
//!
//! ## Overview
//!
//! A schedule is described per tab (minutely, hourly, daily, weekly,
//! monthly, yearly, advanced). The generator renders a tab's schedule into
//! a cron expression; the parser classifies an expression against the
//! shapes the generator produces and reconstructs the schedule, falling
//! back to an advanced (raw) schedule when nothing matches.
//!
//! Two dialects are supported:
//! - **standard** (5 fields): `minute hour day-of-month month day-of-week`
//! - **quartz** (6 or 7 fields): `second minute hour day-of-month month day-of-week [year]`
//!
//! ## Quick Start
//!
//! ```rust
//! use a3s_cron_editor::{CronEditor, CronOptions, Schedule, Tab, WeeklyState, TimeOfDay, Weekday};
//! use std::collections::BTreeSet;
//!
//! # fn example() -> a3s_cron_editor::Result<()> {
//! let mut editor = CronEditor::new(CronOptions::default())?;
//!
//! // Edit a tab: the expression is regenerated
//! let cron = editor.set_schedule(Schedule::Weekly(WeeklyState {
//!     days: BTreeSet::from([Weekday::Mon, Weekday::Wed, Weekday::Fri]),
//!     time: TimeOfDay::from_24_hour(9, 0, 0, true),
//! }))?;
//! assert_eq!(cron, "0 9 * * MON,WED,FRI");
//!
//! // Supply an expression: the schedule is reconstructed
//! let schedule = editor.set_expression("0/15 * 1/1 * *")?;
//! assert_eq!(schedule.tab(), Tab::Minutely);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Architecture
//!
//! - **format**: hour conversions between cron and 12/24-hour display
//! - **generator**: `Schedule` → expression
//! - **parser**: expression → `Schedule`, via the ordered `SHAPES` rules
//! - **state**: all tabs' sub-states, applied as immutable snapshots
//! - **editor**: `CronEditor`, the stateful facade a form layer drives
//! - **display**: labels and the ordinal suffix formatter

pub mod display;
pub mod editor;
pub mod error;
pub mod format;
pub mod generator;
pub mod options;
pub mod parser;
pub mod state;
pub mod types;

// Re-export core types
pub use editor::{initial_expression, CronEditor};
pub use error::{CronEditorError, Result};
pub use format::{hour_type_of, to_24_hour, to_display_hour};
pub use generator::{generate, generate_tab};
pub use options::{CronOptions, DefaultTime};
pub use parser::{classify, parse, Fields, Shape, ShapeRule, SHAPES};
pub use state::{
    AdvancedState, DailySchedule, DailyState, EveryDaysState, EveryWeekDayState, HourlyState,
    MinutelyState, MonthlySchedule, MonthlyState, Schedule, ScheduleState, SpecificDayState,
    SpecificMonthDayState, SpecificMonthWeekState, SpecificWeekDayState, TimeOfDay, WeeklyState,
    YearlySchedule, YearlyState,
};
pub use types::{
    DailySubTab, Dialect, HourDisplay, HourType, MonthDay, MonthWeek, MonthlySubTab, Tab,
    Weekday, WeekdayRange, YearlySubTab,
};
