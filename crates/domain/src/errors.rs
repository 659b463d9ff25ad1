//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for CalTally
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum CalTallyError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Calendar not found: {0}")]
    CalendarNotFound(String),

    /// A failure during the appointment pass. `partial_report` holds the text
    /// rendered from everything tallied before the failure.
    #[error("Execution error: {message}")]
    Execution { message: String, partial_report: String },

    #[error("Calendar source error: {0}")]
    Source(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CalTallyError {
    /// Stable label suitable for logging fields.
    pub fn label(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "invalid_input",
            Self::CalendarNotFound(_) => "calendar_not_found",
            Self::Execution { .. } => "execution",
            Self::Source(_) => "source",
            Self::Config(_) => "config",
            Self::Internal(_) => "internal",
        }
    }
}

/// Result type alias for CalTally operations
pub type Result<T> = std::result::Result<T, CalTallyError>;
