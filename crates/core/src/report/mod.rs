//! Text rendering of tally summaries

pub mod builder;

pub use builder::ReportBuilder;
