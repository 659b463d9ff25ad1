//! Weekend heuristic
//!
//! Days are indexed from Sunday (0) to Saturday (6). The last weekday sits
//! four days after the configured week start; an appointment is put into the
//! weekend bucket when its start or end falls after that day, or when it wraps
//! from the end of one week into the next.
//!
//! The whole span lands in one bucket. No per-day overlap is computed.

use caltally_domain::constants::WEEKEND_THRESHOLD_OFFSET;
use chrono::{Datelike, NaiveDateTime, Weekday};

/// Index of the last weekday for a week starting on `week_start`
pub fn weekend_threshold(week_start: Weekday) -> u32 {
    week_start.num_days_from_sunday() + WEEKEND_THRESHOLD_OFFSET
}

/// Whether an appointment spanning `start..end` counts as a weekend appointment
pub fn is_weekend(start: NaiveDateTime, end: NaiveDateTime, week_start: Weekday) -> bool {
    let threshold = weekend_threshold(week_start);
    let start_day = start.weekday().num_days_from_sunday();
    let end_day = end.weekday().num_days_from_sunday();

    start_day > threshold || end_day > threshold || start_day > end_day
}
