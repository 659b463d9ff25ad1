//! Statistics over a completed tally

pub mod aggregator;

pub use aggregator::{count_extremes, percent_diff, StatisticsAggregator};
