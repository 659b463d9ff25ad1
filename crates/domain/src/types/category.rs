//! Category definitions and their per-run tallies

use serde::{Deserialize, Serialize};

use super::appointment::MatchRecord;

/// A named classification target
///
/// Owned by the caller and never mutated by the engine; every run builds a
/// fresh [`CategoryTally`] from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDefinition {
    pub name: String,
    /// Substrings identifying membership, tried in order. When empty, the
    /// name itself is the only alias.
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl CategoryDefinition {
    /// Category matched by its own name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), aliases: Vec::new() }
    }

    /// Category matched by a list of aliases
    pub fn with_aliases<I, S>(name: impl Into<String>, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { name: name.into(), aliases: aliases.into_iter().map(Into::into).collect() }
    }

    /// Aliases to try, in order. Blank aliases are skipped; if none remain the
    /// category name is used.
    pub fn effective_aliases(&self) -> Vec<&str> {
        let aliases: Vec<&str> =
            self.aliases.iter().map(String::as_str).filter(|a| !a.trim().is_empty()).collect();

        if aliases.is_empty() {
            vec![self.name.as_str()]
        } else {
            aliases
        }
    }
}

/// Accumulated day counts for one category during a single run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTally {
    pub name: String,
    pub weekday_days: i64,
    pub weekend_days: i64,
    pub matches: Vec<MatchRecord>,
}

impl CategoryTally {
    /// Zeroed tally for `definition`
    pub fn fresh(definition: &CategoryDefinition) -> Self {
        Self {
            name: definition.name.clone(),
            weekday_days: 0,
            weekend_days: 0,
            matches: Vec::new(),
        }
    }

    /// Add a match to the bucket selected by its weekend flag
    pub fn record(&mut self, record: MatchRecord) {
        if record.weekend {
            self.weekend_days += record.span_days;
        } else {
            self.weekday_days += record.span_days;
        }
        self.matches.push(record);
    }

    /// Total days across both buckets
    pub fn total_days(&self) -> i64 {
        self.weekday_days + self.weekend_days
    }
}
