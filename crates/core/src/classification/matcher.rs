//! Category matching
//!
//! Decides, for one appointment, whether it takes part in the run and which
//! category (if any) it belongs to. Comparison is case-insensitive substring
//! search on the subject.
//!
//! Steps, in order:
//! 1. Subject filter: when set, subjects not containing it are skipped
//! 2. Ignore list: per [`IgnoreListMode`], a hit skips the appointment or is
//!    only logged
//! 3. All-day restriction: timed appointments are skipped when requested
//! 4. Categories in definition order, aliases in alias order; the first alias
//!    found in the subject wins and nothing else is considered

use caltally_domain::{
    Appointment, CategoryDefinition, EngineConfig, IgnoreListMode, MatchRecord, TallyRequest,
};
use chrono::Weekday;
use tracing::debug;

use super::weekend::is_weekend;

/// Why an appointment did not take part in matching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Subject does not contain the filter text
    FilteredOut,
    /// Subject contains an ignore-list entry
    Ignored,
    /// Only all-day events were requested
    NotAllDay,
}

/// Result of evaluating one appointment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Not considered for any category
    Skipped(SkipReason),
    /// Attributed to the category at `category_index`
    Matched { category_index: usize, record: MatchRecord },
    /// Considered, but no alias of any category was found
    Unmatched,
}

/// Category with its aliases prepared for comparison
#[derive(Debug, Clone)]
struct PreparedCategory {
    /// (alias as defined, uppercased alias)
    aliases: Vec<(String, String)>,
}

impl PreparedCategory {
    fn from_definition(definition: &CategoryDefinition) -> Self {
        let aliases = definition
            .effective_aliases()
            .into_iter()
            .map(|alias| (alias.to_string(), alias.to_uppercase()))
            .collect();
        Self { aliases }
    }
}

/// Matches appointments against the categories of one request
#[derive(Debug, Clone)]
pub struct CategoryMatcher {
    categories: Vec<PreparedCategory>,
    filter: Option<String>,
    ignore_entries: Vec<String>,
    ignore_mode: IgnoreListMode,
    only_all_day: bool,
    week_start: Weekday,
}

impl CategoryMatcher {
    /// Prepare a matcher for `request` under `config`
    pub fn new(request: &TallyRequest, config: &EngineConfig) -> Self {
        let categories = request.categories.iter().map(PreparedCategory::from_definition).collect();

        let filter = request.active_filter().map(|f| f.trim().to_uppercase());

        let ignore_entries = request
            .ignore_list
            .iter()
            .map(|entry| entry.trim())
            .filter(|entry| !entry.is_empty())
            .map(str::to_uppercase)
            .collect();

        Self {
            categories,
            filter,
            ignore_entries,
            ignore_mode: config.ignore_mode,
            only_all_day: request.only_all_day_events,
            week_start: config.week_start,
        }
    }

    /// Whether a subject filter is active
    pub fn has_filter(&self) -> bool {
        self.filter.is_some()
    }

    /// Evaluate one appointment
    pub fn evaluate(&self, appointment: &Appointment) -> MatchOutcome {
        let subject = appointment.subject.to_uppercase();

        if let Some(filter) = &self.filter {
            if !subject.contains(filter.as_str()) {
                return MatchOutcome::Skipped(SkipReason::FilteredOut);
            }
        }

        if let Some(entry) = self.ignore_hit(&subject) {
            match self.ignore_mode {
                IgnoreListMode::Skip => {
                    debug!(subject = %appointment.subject, entry, "appointment ignored");
                    return MatchOutcome::Skipped(SkipReason::Ignored);
                }
                IgnoreListMode::Inspect => {
                    debug!(
                        subject = %appointment.subject,
                        entry,
                        "ignore-list hit kept in play (inspect mode)"
                    );
                }
            }
        }

        if self.only_all_day && !appointment.all_day {
            return MatchOutcome::Skipped(SkipReason::NotAllDay);
        }

        debug!(
            subject = %appointment.subject,
            start = %appointment.start,
            end = %appointment.end,
            "matching appointment"
        );

        match self.find_category(&subject) {
            Some((category_index, alias)) => {
                let weekend = is_weekend(appointment.start, appointment.end, self.week_start);
                let record = MatchRecord::from_appointment(appointment, alias, weekend);
                MatchOutcome::Matched { category_index, record }
            }
            None => MatchOutcome::Unmatched,
        }
    }

    fn ignore_hit(&self, subject: &str) -> Option<&str> {
        self.ignore_entries.iter().map(String::as_str).find(|entry| subject.contains(entry))
    }

    /// First (category index, alias) whose alias occurs in `subject`
    fn find_category(&self, subject: &str) -> Option<(usize, &str)> {
        self.categories.iter().enumerate().find_map(|(index, category)| {
            category
                .aliases
                .iter()
                .find(|(_, upper)| subject.contains(upper.as_str()))
                .map(|(alias, _)| (index, alias.as_str()))
        })
    }
}
