//! `CronEditor`, the stateful facade a form layer drives
//!
//! Holds the options, the full schedule state, the active tab and the
//! canonical expression. Editing a tab runs the generator. Supplying an
//! expression runs the parser, then the generator to expose the canonical
//! form. A failed operation leaves the editor unchanged.

use crate::error::{CronEditorError, Result};
use crate::generator::{generate, generate_tab};
use crate::options::{parse_time, CronOptions};
use crate::parser::parse;
use crate::state::{AdvancedState, Schedule, ScheduleState};
use crate::types::{Dialect, HourDisplay, Tab, WeekdayRange};

/// Expression a new editor starts from
pub fn initial_expression(dialect: Dialect) -> &'static str {
    match dialect {
        Dialect::Standard => "0 0 1/1 * *",
        Dialect::Quartz => "0 0 0 1/1 * *",
    }
}

/// Stateful cron editor
///
/// # Examples
///
/// ```
/// use a3s_cron_editor::{CronEditor, CronOptions, Tab};
///
/// let mut editor = CronEditor::new(CronOptions::default()).unwrap();
/// assert_eq!(editor.cron(), "0 0 1/1 * *");
/// assert_eq!(editor.active_tab(), Tab::Daily);
///
/// editor.set_expression("0 9 * * MON,WED,FRI").unwrap();
/// assert_eq!(editor.active_tab(), Tab::Weekly);
/// ```
#[derive(Debug, Clone)]
pub struct CronEditor {
    options: CronOptions,
    state: ScheduleState,
    active_tab: Tab,
    cron: String,
}

impl CronEditor {
    /// Create an editor seeded with defaults and the dialect's initial expression
    pub fn new(options: CronOptions) -> Result<Self> {
        let defaults = ScheduleState::defaults(&options)?;
        let cron = initial_expression(options.cron_flavor);
        let schedule = parse(cron, &options)?;

        Ok(Self {
            active_tab: schedule.tab(),
            state: defaults.apply(schedule),
            cron: cron.to_string(),
            options,
        })
    }

    /// Canonical expression
    pub fn cron(&self) -> &str {
        &self.cron
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn state(&self) -> &ScheduleState {
        &self.state
    }

    pub fn options(&self) -> &CronOptions {
        &self.options
    }

    pub fn visible_tabs(&self) -> Vec<Tab> {
        self.options.visible_tabs()
    }

    /// Commit a tab's schedule and regenerate the expression
    pub fn set_schedule(&mut self, schedule: Schedule) -> Result<&str> {
        let cron = generate(&schedule, &self.options)?;
        self.active_tab = schedule.tab();
        self.state = self.state.apply(schedule);
        self.cron = cron;
        Ok(&self.cron)
    }

    /// Classify an externally supplied expression and adopt it
    ///
    /// Returns the reconstructed schedule; its tab becomes the active tab.
    /// A recognized expression is exposed in its regenerated canonical form.
    /// An advanced one is kept exactly as supplied.
    pub fn set_expression(&mut self, expression: &str) -> Result<Schedule> {
        let schedule = parse(expression, &self.options)?;
        let cron = generate(&schedule, &self.options)?;
        self.active_tab = schedule.tab();
        self.state = self.state.apply(schedule.clone());
        self.cron = cron;
        Ok(schedule)
    }

    /// Make `tab` active, re-deriving the expression from its held values
    pub fn focus_tab(&mut self, tab: Tab) -> Result<&str> {
        let cron = generate_tab(tab, &self.state, &self.options)?;
        self.active_tab = tab;
        self.cron = cron;
        Ok(&self.cron)
    }

    /// Focus the tab at `index` in the visible tab list
    pub fn focus_tab_index(&mut self, index: usize) -> Result<&str> {
        let tab = self
            .visible_tabs()
            .get(index)
            .copied()
            .ok_or_else(|| CronEditorError::InvalidSubTab("Invalid tab selected".to_string()))?;
        self.focus_tab(tab)
    }

    /// Switch dialect and regenerate the active tab
    ///
    /// An advanced expression still equal to the old dialect's sample is
    /// replaced by the new dialect's sample.
    pub fn set_dialect(&mut self, dialect: Dialect) -> Result<&str> {
        let previous = self.options.cron_flavor;
        let mut options = self.options.clone();
        options.cron_flavor = dialect;

        let mut state = self.state.clone();
        if state.advanced == AdvancedState::default_for(previous) {
            state.advanced = AdvancedState::default_for(dialect);
        }

        let cron = generate_tab(self.active_tab, &state, &options)?;
        tracing::info!(from = %previous, to = %dialect, "Cron flavor changed");
        self.options = options;
        self.state = state;
        self.cron = cron;
        Ok(&self.cron)
    }

    /// Set the range emitted by the daily "every weekday" schedule
    pub fn set_weekday_range(&mut self, range: &str) -> Result<&str> {
        let mut options = self.options.clone();
        options.weekdays = WeekdayRange::new(range)?;

        let cron = generate_tab(self.active_tab, &self.state, &options)?;
        tracing::info!(range = %range, "Business week range changed");
        self.options = options;
        self.cron = cron;
        Ok(&self.cron)
    }

    /// Set the `HH:MM:SS` time used when tab states are seeded
    pub fn set_default_time(&mut self, time: &str) -> Result<()> {
        parse_time(time)?;
        self.options.default_time = time.to_string();
        tracing::info!(time = %time, "Default time changed");
        Ok(())
    }

    /// Switch between 12- and 24-hour display, converting every stored hour
    pub fn set_hour_display_mode(&mut self, mode: HourDisplay) -> Result<&str> {
        let from = self.options.use_24_hour_time;
        let to = mode.is_24_hour();
        let mut options = self.options.clone();
        options.use_24_hour_time = to;

        let state = self.state.convert_hours(from, to);
        let cron = generate_tab(self.active_tab, &state, &options)?;
        tracing::info!(mode = %mode, "Hour display mode changed");
        self.options = options;
        self.state = state;
        self.cron = cron;
        Ok(&self.cron)
    }

    /// Discard all edits and start over from the current options
    pub fn reset(&mut self) -> Result<&str> {
        *self = Self::new(self.options.clone())?;
        Ok(&self.cron)
    }
}
