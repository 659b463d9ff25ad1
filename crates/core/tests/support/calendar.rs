use std::sync::{Arc, Mutex};

use caltally_core::CalendarSource;
use caltally_domain::{Appointment, CalTallyError, Result as DomainResult};
use chrono::NaiveDateTime;

/// A recorded `fetch_appointments` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchCall {
    pub calendar_name: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// In-memory mock for `CalendarSource`.
///
/// Serves one named calendar with a fixed list of appointments, returned
/// unfiltered and in insertion order, and records every fetch so tests can
/// assert whether (and how) the collaborator was consulted.
#[derive(Clone)]
pub struct MockCalendarSource {
    calendar_name: String,
    appointments: Arc<Mutex<Vec<Appointment>>>,
    calls: Arc<Mutex<Vec<FetchCall>>>,
}

impl MockCalendarSource {
    /// Create a new mock serving `calendar_name` with the provided appointments.
    pub fn new(calendar_name: &str, appointments: Vec<Appointment>) -> Self {
        Self {
            calendar_name: calendar_name.to_string(),
            appointments: Arc::new(Mutex::new(appointments)),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Convenience helper for adding a single appointment to the mock.
    pub fn with_appointment(self, appointment: Appointment) -> Self {
        self.appointments.lock().unwrap().push(appointment);
        self
    }

    /// All fetches made so far.
    pub fn calls(&self) -> Vec<FetchCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl CalendarSource for MockCalendarSource {
    fn fetch_appointments(
        &self,
        calendar_name: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> DomainResult<Vec<Appointment>> {
        self.calls.lock().unwrap().push(FetchCall {
            calendar_name: calendar_name.to_string(),
            start,
            end,
        });

        if calendar_name != self.calendar_name {
            return Err(CalTallyError::CalendarNotFound(calendar_name.to_string()));
        }

        Ok(self.appointments.lock().unwrap().clone())
    }
}
