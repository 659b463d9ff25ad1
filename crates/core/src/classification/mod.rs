//! Appointment classification domain

pub mod matcher;
pub mod tally;
pub mod weekend;

pub use matcher::{CategoryMatcher, MatchOutcome, SkipReason};
pub use tally::TallySheet;
pub use weekend::{is_weekend, weekend_threshold};
