//! Domain types and models

pub mod appointment;
pub mod category;
pub mod request;
pub mod stats;

pub use appointment::{Appointment, MatchRecord, UnmatchedAppointment};
pub use category::{CategoryDefinition, CategoryTally};
pub use request::{TallyReport, TallyRequest};
pub use stats::{CategoryStats, CountExtremes, PercentDiff, TallySummary};
