//! Configuration management

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_FIRST_SEGMENT_WIDTH, DEFAULT_LOG_LEVEL, DEFAULT_REPORTING_THRESHOLD,
};
use crate::impl_domain_enum_conversions;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub engine: EngineConfig,
    pub logging: LoggingConfig,
}

/// How entries of the ignore list affect matching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreListMode {
    /// A subject containing any ignore entry is skipped entirely.
    #[default]
    Skip,
    /// Entries are evaluated and hits are logged, but nothing is suppressed.
    /// Legacy report behaviour.
    Inspect,
}

impl_domain_enum_conversions!(IgnoreListMode {
    Skip => "skip",
    Inspect => "inspect",
});

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// First day of the week for the weekend heuristic
    pub week_start: Weekday,

    /// Counts must exceed this to take part in the min-count computation
    /// (default: 10)
    pub reporting_threshold: i64,

    /// Ignore-list semantics (default: skip)
    pub ignore_mode: IgnoreListMode,

    /// Width the "name / weekday / weekend count" segment of a report line is
    /// padded to (default: 50)
    pub first_segment_width: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            week_start: Weekday::Sun,
            reporting_threshold: DEFAULT_REPORTING_THRESHOLD,
            ignore_mode: IgnoreListMode::default(),
            first_segment_width: DEFAULT_FIRST_SEGMENT_WIDTH,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `info` or `caltally_core=debug`
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: DEFAULT_LOG_LEVEL.to_string(), json: false }
    }
}
