//! Calendar integration port interfaces

use caltally_domain::{Appointment, Result};
use chrono::NaiveDateTime;

/// Trait for calendar providers
///
/// Implementations resolve a calendar by name and return its appointments in
/// the requested range, recurring events already expanded, ordered by start.
/// Retrieval may block; the engine treats the returned list as final.
pub trait CalendarSource: Send + Sync {
    /// Fetch appointments of `calendar_name` within `[start, end]`
    ///
    /// # Errors
    /// Returns `CalTallyError::CalendarNotFound` when the name cannot be
    /// resolved, or `CalTallyError::Source` for any other retrieval failure.
    fn fetch_appointments(
        &self,
        calendar_name: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<Appointment>>;
}
