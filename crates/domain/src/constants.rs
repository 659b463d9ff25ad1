//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Statistics
/// Counts at or below this are left out of the min-count statistic
pub const DEFAULT_REPORTING_THRESHOLD: i64 = 10;

// Weekend heuristic
/// Added to the week-start index to get the last weekday index
pub const WEEKEND_THRESHOLD_OFFSET: u32 = 4;

// Report layout
/// Width the category line is padded to before the weekend diff
pub const DEFAULT_FIRST_SEGMENT_WIDTH: usize = 50;
/// Line terminator of the text report
pub const REPORT_LINE_ENDING: &str = "\n";
/// Separator between a count and its percentage difference
pub const DIFF_PREFIX: &str = " diff. ";
/// Label in front of the weekend count
pub const WEEKEND_LABEL: &str = "   Weekend:";
/// Heading of the unmatched-appointments block
pub const UNMATCHED_HEADER: &str = "ERROR: not found:";

// Legacy output sentinels
/// Text returned for a request that fails validation
pub const INVALID_ARGUMENT_SENTINEL: &str = "ERROR: values?";
/// Text returned when the calendar does not exist
pub const CALENDAR_NOT_FOUND_SENTINEL: &str = "ERROR: calendar not found!";
/// Prefix of the message for a failure during the pass
pub const EXECUTION_ERROR_PREFIX: &str = "EXEC ERROR:";

// Logging
/// Tracing filter used when none is configured
pub const DEFAULT_LOG_LEVEL: &str = "info";
