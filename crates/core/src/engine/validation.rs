//! Request preconditions, checked before any work is done

use caltally_domain::{CalTallyError, Result, TallyRequest};

/// Check the preconditions of a run
///
/// # Errors
/// Returns `CalTallyError::InvalidInput` when the range is inverted, the
/// calendar name is blank, no categories are given, or a category name is
/// blank.
pub fn validate_request(request: &TallyRequest) -> Result<()> {
    if request.start > request.end {
        return Err(CalTallyError::InvalidInput(format!(
            "start {} is after end {}",
            request.start, request.end
        )));
    }

    if request.calendar_name.trim().is_empty() {
        return Err(CalTallyError::InvalidInput("calendar name is empty".to_string()));
    }

    if request.categories.is_empty() {
        return Err(CalTallyError::InvalidInput("no categories given".to_string()));
    }

    if let Some(position) = request.categories.iter().position(|c| c.name.trim().is_empty()) {
        return Err(CalTallyError::InvalidInput(format!(
            "category at position {position} has an empty name"
        )));
    }

    Ok(())
}
