//! Calendar sources
//!
//! Implementations of [`caltally_core::CalendarSource`]. Recurring series are
//! expected to arrive already expanded into single appointments.

pub mod json_file;
pub mod memory;

pub use json_file::JsonCalendarSource;
pub use memory::InMemoryCalendarSource;
