//! Statistics aggregation
//!
//! Turns the tallies of a finished pass into a [`TallySummary`]:
//! - max/min per bucket (min only over counts above the reporting threshold)
//! - each category's difference to the bucket maximum, in percent
//! - categories ranked by descending weekday count (stable)

use caltally_domain::{
    CategoryStats, CountExtremes, EngineConfig, PercentDiff, TallySummary,
};

use crate::classification::TallySheet;

/// Computes percentages and ranking for a finished tally
#[derive(Debug, Clone, Copy)]
pub struct StatisticsAggregator {
    reporting_threshold: i64,
}

impl StatisticsAggregator {
    /// Aggregator using `reporting_threshold` for the min statistic
    pub fn new(reporting_threshold: i64) -> Self {
        Self { reporting_threshold }
    }

    /// Aggregator configured from the engine settings
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.reporting_threshold)
    }

    /// Build the summary for `sheet`
    pub fn aggregate(&self, sheet: &TallySheet) -> TallySummary {
        let tallies = sheet.tallies();

        let threshold = self.reporting_threshold;
        let weekday = count_extremes(tallies.iter().map(|t| t.weekday_days), threshold);
        let weekend = count_extremes(tallies.iter().map(|t| t.weekend_days), threshold);

        let mut categories: Vec<CategoryStats> = tallies
            .iter()
            .map(|tally| CategoryStats {
                name: tally.name.clone(),
                weekday_days: tally.weekday_days,
                weekday_diff: percent_diff(tally.weekday_days, weekday.max),
                weekend_days: tally.weekend_days,
                weekend_diff: percent_diff(tally.weekend_days, weekend.max),
                matches: tally.matches.clone(),
            })
            .collect();

        // sort_by is stable: equal counts keep definition order
        categories.sort_by(|a, b| b.weekday_days.cmp(&a.weekday_days));

        TallySummary {
            categories,
            weekday,
            weekend,
            unmatched: sheet.unmatched().to_vec(),
            filter: sheet.filter().map(str::to_string),
        }
    }
}

/// Max over all counts, min over counts exceeding `threshold`
pub fn count_extremes(counts: impl Iterator<Item = i64> + Clone, threshold: i64) -> CountExtremes {
    CountExtremes {
        max: counts.clone().max().unwrap_or(0),
        min: counts.filter(|count| *count > threshold).min(),
    }
}

/// Difference of `count` to `max` in percent
///
/// Counts of 1 or less carry no annotation, which also keeps a zero maximum
/// out of the division.
pub fn percent_diff(count: i64, max: i64) -> Option<PercentDiff> {
    if count <= 1 {
        return None;
    }
    if count < max {
        #[allow(clippy::cast_precision_loss)]
        let share = count as f64 / (max as f64 * 0.01);
        Some(PercentDiff::Below(round_two_places(100.0 - share)))
    } else {
        Some(PercentDiff::Top)
    }
}

/// Round half to even at two decimals
fn round_two_places(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
