//! Error types for a3s-cron-editor

use crate::types::Dialect;
use thiserror::Error;

/// Errors that can occur while generating or parsing cron expressions
#[derive(Debug, Error)]
pub enum CronEditorError {
    /// Expression does not have the number of fields the dialect requires
    #[error("Invalid cron expression, there must be {} segments (got {found})", .dialect.arity_label())]
    InvalidFieldCount {
        dialect: Dialect,
        found: usize,
    },

    /// Tab or sub-tab outside the fixed set
    #[error("Invalid tab selection: {0}")]
    InvalidSubTab(String),

    /// Default time is not `HH:MM:SS`
    #[error("Invalid time '{0}', expected HH:MM:SS")]
    InvalidTime(String),

    /// Unknown code or name (weekday, occurrence, day sentinel, dialect)
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// Weekly schedule with no weekday selected
    #[error("Weekly schedule must select at least one weekday")]
    EmptyWeekdaySelection,

    /// Serialization/deserialization failure
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for cron editor operations
pub type Result<T> = std::result::Result<T, CronEditorError>;
