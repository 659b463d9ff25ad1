//! Appointment records as delivered by a calendar source, and the records the
//! engine derives from them.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Normalized view of one calendar event
///
/// Start and end are local wall-clock times; recurring events arrive already
/// expanded into one record per occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub subject: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    #[serde(default)]
    pub all_day: bool,
}

impl Appointment {
    /// Create a timed (not all-day) appointment
    pub fn new(subject: impl Into<String>, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { subject: subject.into(), start, end, all_day: false }
    }

    /// Mark the appointment as an all-day event
    #[must_use]
    pub fn all_day(mut self) -> Self {
        self.all_day = true;
        self
    }

    /// Whole days between start and end, truncated toward zero.
    ///
    /// A same-day appointment spans 0 days.
    pub fn span_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// True when the end precedes the start
    pub fn is_inverted(&self) -> bool {
        self.end < self.start
    }
}

/// One appointment attributed to a category during a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub subject: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub all_day: bool,
    /// Classified into the weekend bucket
    pub weekend: bool,
    pub span_days: i64,
    /// The alias (or category name) whose text was found in the subject
    pub matched_alias: String,
}

impl MatchRecord {
    /// Build a record for `appointment` matched through `alias`
    pub fn from_appointment(appointment: &Appointment, alias: &str, weekend: bool) -> Self {
        Self {
            subject: appointment.subject.clone(),
            start: appointment.start,
            end: appointment.end,
            all_day: appointment.all_day,
            weekend,
            span_days: appointment.span_days(),
            matched_alias: alias.to_string(),
        }
    }
}

/// An appointment that passed the subject filter but matched no category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnmatchedAppointment {
    /// Filter text as supplied by the caller
    pub filter: String,
    pub subject: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}
