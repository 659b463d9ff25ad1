//! Statistics types produced by the aggregation step
//!
//! - Relative difference of a category against the busiest category
//! - Min/max extremes per bucket
//! - Per-category statistics and the overall run summary

use std::fmt;

use serde::{Deserialize, Serialize};

use super::appointment::{MatchRecord, UnmatchedAppointment};

/* -------------------------------------------------------------------------- */
/* Percentage Difference */
/* -------------------------------------------------------------------------- */

/// A category's count relative to the maximum count of its bucket
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "percent", rename_all = "snake_case")]
pub enum PercentDiff {
    /// The category holds the maximum count
    Top,
    /// Percentage points below the maximum, rounded to two decimals
    Below(f64),
}

impl fmt::Display for PercentDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Top => write!(f, "100%"),
            Self::Below(diff) => write!(f, "-{diff}%"),
        }
    }
}

/* -------------------------------------------------------------------------- */
/* Extremes */
/* -------------------------------------------------------------------------- */

/// Min/max of one bucket across all categories
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountExtremes {
    /// Highest count of any category
    pub max: i64,
    /// Lowest count among categories above the reporting threshold, or `None`
    /// when no category exceeds it
    pub min: Option<i64>,
}

/* -------------------------------------------------------------------------- */
/* Category Statistics */
/* -------------------------------------------------------------------------- */

/// Final statistics for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryStats {
    pub name: String,
    pub weekday_days: i64,
    /// Omitted when the count is 1 or less
    pub weekday_diff: Option<PercentDiff>,
    pub weekend_days: i64,
    pub weekend_diff: Option<PercentDiff>,
    pub matches: Vec<MatchRecord>,
}

/* -------------------------------------------------------------------------- */
/* Summary */
/* -------------------------------------------------------------------------- */

/// Everything a report is rendered from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TallySummary {
    /// Sorted by descending weekday count, ties in definition order
    pub categories: Vec<CategoryStats>,
    pub weekday: CountExtremes,
    pub weekend: CountExtremes,
    /// Appointments that passed the filter without matching, in pass order
    pub unmatched: Vec<UnmatchedAppointment>,
    pub filter: Option<String>,
}

impl TallySummary {
    /// Sum of weekday and weekend days over all categories
    pub fn total_days(&self) -> i64 {
        self.categories.iter().map(|c| c.weekday_days + c.weekend_days).sum()
    }

    /// Number of appointments attributed to any category
    pub fn matched_count(&self) -> usize {
        self.categories.iter().map(|c| c.matches.len()).sum()
    }

    /// Look up a category by name
    pub fn category(&self, name: &str) -> Option<&CategoryStats> {
        self.categories.iter().find(|c| c.name == name)
    }
}
