//! Per-run aggregation state
//!
//! A [`TallySheet`] is created by [`TallySheet::reset`] at the start of every
//! run and owned by that run alone. Category definitions stay untouched, so
//! nothing tallied in one run can leak into the next.

use caltally_domain::{
    Appointment, CalTallyError, CategoryDefinition, CategoryTally, Result, UnmatchedAppointment,
};

use super::matcher::MatchOutcome;

/// Tallies and diagnostics accumulated over one pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TallySheet {
    tallies: Vec<CategoryTally>,
    unmatched: Vec<UnmatchedAppointment>,
    filter: Option<String>,
    skipped: usize,
}

impl TallySheet {
    /// Fresh, zeroed sheet for `categories`
    ///
    /// `filter` is the subject filter as supplied by the caller; unmatched
    /// appointments are only recorded when it is present.
    pub fn reset(categories: &[CategoryDefinition], filter: Option<&str>) -> Self {
        Self {
            tallies: categories.iter().map(CategoryTally::fresh).collect(),
            unmatched: Vec::new(),
            filter: filter.map(str::to_string),
            skipped: 0,
        }
    }

    /// Fold the outcome of one appointment into the sheet
    ///
    /// # Errors
    /// Returns `CalTallyError::Internal` if the outcome references a category
    /// this sheet does not hold.
    pub fn apply(&mut self, appointment: &Appointment, outcome: MatchOutcome) -> Result<()> {
        match outcome {
            MatchOutcome::Matched { category_index, record } => {
                let count = self.tallies.len();
                let tally = self.tallies.get_mut(category_index).ok_or_else(|| {
                    CalTallyError::Internal(format!(
                        "category index {category_index} out of range ({count} categories)"
                    ))
                })?;
                tally.record(record);
            }
            MatchOutcome::Unmatched => {
                if let Some(filter) = &self.filter {
                    self.unmatched.push(UnmatchedAppointment {
                        filter: filter.clone(),
                        subject: appointment.subject.clone(),
                        start: appointment.start,
                        end: appointment.end,
                    });
                }
            }
            MatchOutcome::Skipped(_) => self.skipped += 1,
        }
        Ok(())
    }

    /// Per-category tallies in definition order
    pub fn tallies(&self) -> &[CategoryTally] {
        &self.tallies
    }

    /// Appointments that passed the filter but matched no category
    pub fn unmatched(&self) -> &[UnmatchedAppointment] {
        &self.unmatched
    }

    /// Subject filter of the run
    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    /// Appointments skipped by filter, ignore list or all-day restriction
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}
