//! # CalTally Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Appointment classification (weekend heuristic, category matching)
//! - Per-run tally lifecycle
//! - Statistics aggregation and report rendering
//! - The engine orchestrating a run
//! - Port interface for the calendar collaborator
//!
//! ## Architecture Principles
//! - Only depends on `caltally-domain`
//! - No file, network or platform code
//! - Calendar access via the [`CalendarSource`] trait
//! - Synchronous, single pass over an already materialised appointment list

pub mod calendar_ports;
pub mod classification;
pub mod engine;
pub mod report;
pub mod stats;

// Re-export specific items to avoid ambiguity
pub use calendar_ports::CalendarSource;
pub use classification::{is_weekend, CategoryMatcher, MatchOutcome, SkipReason, TallySheet};
pub use engine::{render_outcome, validate_request, TallyEngine};
pub use report::ReportBuilder;
pub use stats::StatisticsAggregator;
