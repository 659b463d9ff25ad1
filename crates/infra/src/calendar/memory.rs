//! In-memory calendar source
//!
//! Calendars are looked up by name, ignoring case and surrounding whitespace.
//! A fetch returns the appointments lying entirely inside the requested range
//! (`start >= range_start` and `end <= range_end`), ordered by start time.

use std::collections::BTreeMap;

use caltally_core::CalendarSource;
use caltally_domain::{Appointment, CalTallyError, Result};
use chrono::NaiveDateTime;
use tracing::debug;

#[derive(Debug, Clone)]
struct StoredCalendar {
    name: String,
    appointments: Vec<Appointment>,
}

/// Calendar source backed by appointment lists held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryCalendarSource {
    calendars: BTreeMap<String, StoredCalendar>,
}

impl InMemoryCalendarSource {
    /// Source without any calendars
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder variant of [`insert`](Self::insert)
    #[must_use]
    pub fn with_calendar(mut self, name: &str, appointments: Vec<Appointment>) -> Self {
        self.insert(name, appointments);
        self
    }

    /// Add or replace a calendar. Returns the appointments previously stored
    /// under an equivalent name.
    pub fn insert(
        &mut self,
        name: &str,
        appointments: Vec<Appointment>,
    ) -> Option<Vec<Appointment>> {
        let stored = StoredCalendar { name: name.trim().to_string(), appointments };
        self.calendars.insert(lookup_key(name), stored).map(|previous| previous.appointments)
    }

    /// Whether a calendar with an equivalent name exists
    pub fn contains(&self, name: &str) -> bool {
        self.calendars.contains_key(&lookup_key(name))
    }

    /// Calendar names as inserted, ordered by lookup key
    pub fn calendar_names(&self) -> Vec<&str> {
        self.calendars.values().map(|calendar| calendar.name.as_str()).collect()
    }

    /// Number of stored calendars
    pub fn len(&self) -> usize {
        self.calendars.len()
    }

    /// Whether no calendar is stored
    pub fn is_empty(&self) -> bool {
        self.calendars.is_empty()
    }
}

impl CalendarSource for InMemoryCalendarSource {
    fn fetch_appointments(
        &self,
        calendar_name: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<Appointment>> {
        let calendar = self
            .calendars
            .get(&lookup_key(calendar_name))
            .ok_or_else(|| CalTallyError::CalendarNotFound(calendar_name.to_string()))?;

        let mut appointments: Vec<Appointment> = calendar
            .appointments
            .iter()
            .filter(|appointment| appointment.start >= start && appointment.end <= end)
            .cloned()
            .collect();
        appointments.sort_by_key(|appointment| appointment.start);

        debug!(
            calendar = %calendar.name,
            stored = calendar.appointments.len(),
            in_range = appointments.len(),
            "calendar fetched"
        );

        Ok(appointments)
    }
}

fn lookup_key(name: &str) -> String {
    name.trim().to_lowercase()
}
