//! Run input and output

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::CategoryDefinition;
use super::stats::TallySummary;

/// Parameters of one tally run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TallyRequest {
    /// Calendar to read appointments from
    pub calendar_name: String,
    /// Inclusive lower bound of the date range
    pub start: NaiveDateTime,
    /// Inclusive upper bound of the date range
    pub end: NaiveDateTime,
    pub categories: Vec<CategoryDefinition>,
    /// Only subjects containing this text are considered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    /// Subjects containing any of these are not matched
    #[serde(default)]
    pub ignore_list: Vec<String>,
    /// Skip appointments that are not all-day events
    #[serde(default)]
    pub only_all_day_events: bool,
}

impl TallyRequest {
    /// Request without filter, ignore list or all-day restriction
    pub fn new(
        calendar_name: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
        categories: Vec<CategoryDefinition>,
    ) -> Self {
        Self {
            calendar_name: calendar_name.into(),
            start,
            end,
            categories,
            filter: None,
            ignore_list: Vec::new(),
            only_all_day_events: false,
        }
    }

    #[must_use]
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    #[must_use]
    pub fn with_ignore_list<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore_list = entries.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn only_all_day_events(mut self) -> Self {
        self.only_all_day_events = true;
        self
    }

    /// The filter as supplied, if it contains anything besides whitespace
    pub fn active_filter(&self) -> Option<&str> {
        self.filter.as_deref().filter(|f| !f.trim().is_empty())
    }
}

/// Result of a successful run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TallyReport {
    pub run_id: Uuid,
    pub summary: TallySummary,
    /// Rendered text report
    pub text: String,
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn day(d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap().and_hms_opt(0, 0, 0).unwrap()
    }

    #[test]
    fn test_builder_sets_options() {
        let request = TallyRequest::new("Team", day(1), day(31), vec![CategoryDefinition::new("A")])
            .with_filter("PROJECT")
            .with_ignore_list(["cancelled"])
            .only_all_day_events();

        assert_eq!(request.active_filter(), Some("PROJECT"));
        assert_eq!(request.ignore_list, vec!["cancelled".to_string()]);
        assert!(request.only_all_day_events);
    }

    #[test]
    fn test_blank_filter_is_inactive() {
        let request = TallyRequest::new("Team", day(1), day(2), Vec::new()).with_filter("   ");
        assert_eq!(request.active_filter(), None);
    }
}
