//! Plain-text rendering of run outcomes
//!
//! Callers that consume the report as a single string get the fixed sentinels
//! instead of structured errors. Execution failures keep the partial report in
//! front of the error message.

use caltally_domain::constants::{
    CALENDAR_NOT_FOUND_SENTINEL, EXECUTION_ERROR_PREFIX, INVALID_ARGUMENT_SENTINEL,
};
use caltally_domain::{CalTallyError, Result, TallyReport};

/// Render a run outcome as report text or sentinel
pub fn render_outcome(outcome: &Result<TallyReport>) -> String {
    match outcome {
        Ok(report) => report.text.clone(),
        Err(CalTallyError::InvalidInput(_)) => INVALID_ARGUMENT_SENTINEL.to_string(),
        Err(CalTallyError::CalendarNotFound(_)) => CALENDAR_NOT_FOUND_SENTINEL.to_string(),
        Err(CalTallyError::Execution { message, partial_report }) => {
            format!("{partial_report}{EXECUTION_ERROR_PREFIX}{message}")
        }
        Err(other) => format!("{EXECUTION_ERROR_PREFIX}{other}"),
    }
}
