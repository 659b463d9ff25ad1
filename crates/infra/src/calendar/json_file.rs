//! JSON-file calendar source
//!
//! File layout:
//!
//! ```json
//! {
//!   "calendars": {
//!     "Team Calendar": [
//!       { "subject": "Weekly MEETING", "start": "2024-03-04T09:00:00", "end": "2024-03-04T10:00:00" },
//!       { "subject": "Offsite", "start": "2024-03-11T00:00:00", "end": "2024-03-13T00:00:00", "all_day": true }
//!     ]
//!   }
//! }
//! ```
//!
//! The file is read once; fetches are served from memory.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use caltally_core::CalendarSource;
use caltally_domain::{Appointment, CalTallyError, Result};
use chrono::NaiveDateTime;
use serde::Deserialize;
use tracing::info;

use super::memory::InMemoryCalendarSource;
use crate::errors::InfraError;

#[derive(Debug, Deserialize)]
struct CalendarFile {
    calendars: BTreeMap<String, Vec<Appointment>>,
}

/// Calendar source loaded from a JSON file
#[derive(Debug, Clone)]
pub struct JsonCalendarSource {
    path: Option<PathBuf>,
    inner: InMemoryCalendarSource,
}

impl JsonCalendarSource {
    /// Load calendars from the file at `path`
    ///
    /// # Errors
    /// - `CalTallyError::Source` if the file cannot be read or parsed, or if
    ///   two calendar names differ only in case or surrounding whitespace
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| prefix_path(path, InfraError::from(e).into()))?;

        let mut source = Self::from_json_str(&contents)?;
        source.path = Some(path.to_path_buf());

        info!(
            path = %path.display(),
            calendars = source.inner.len(),
            "Calendar file loaded"
        );

        Ok(source)
    }

    /// Parse calendars from JSON text
    ///
    /// # Errors
    /// Same as [`from_path`](Self::from_path), minus the I/O failures.
    pub fn from_json_str(contents: &str) -> Result<Self> {
        let file: CalendarFile = serde_json::from_str(contents).map_err(InfraError::from)?;

        let mut inner = InMemoryCalendarSource::new();
        for (name, appointments) in file.calendars {
            if inner.contains(&name) {
                return Err(CalTallyError::Source(format!(
                    "calendar '{}' is defined more than once",
                    name.trim()
                )));
            }
            inner.insert(&name, appointments);
        }

        Ok(Self { path: None, inner })
    }

    /// File the calendars were loaded from, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Names of the loaded calendars
    pub fn calendar_names(&self) -> Vec<&str> {
        self.inner.calendar_names()
    }
}

impl CalendarSource for JsonCalendarSource {
    fn fetch_appointments(
        &self,
        calendar_name: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<Appointment>> {
        self.inner.fetch_appointments(calendar_name, start, end)
    }
}

fn prefix_path(path: &Path, err: CalTallyError) -> CalTallyError {
    match err {
        CalTallyError::Source(message) => {
            CalTallyError::Source(format!("{}: {message}", path.display()))
        }
        other => other,
    }
}
