//! Report builder
//!
//! One line per category, in summary order:
//!
//! ```text
//! MEETING: 12 diff. 100%   Weekend:3               diff. 100%
//! TRAVEL:   6 diff. -50%   Weekend:1
//! ```
//!
//! Names are padded after the colon to the longest name so the weekday counts
//! line up; the first segment is padded to a fixed width before the weekend
//! annotation. A blank line follows the category lines, then the unmatched
//! block when any appointment passed the filter without matching.

use caltally_domain::constants::{
    DIFF_PREFIX, REPORT_LINE_ENDING, UNMATCHED_HEADER, WEEKEND_LABEL,
};
use caltally_domain::{CategoryStats, EngineConfig, PercentDiff, TallySummary, UnmatchedAppointment};

/// Renders a [`TallySummary`] as text
#[derive(Debug, Clone, Copy)]
pub struct ReportBuilder {
    first_segment_width: usize,
}

impl ReportBuilder {
    /// Builder padding the first segment to `first_segment_width`
    pub fn new(first_segment_width: usize) -> Self {
        Self { first_segment_width }
    }

    /// Builder configured from the engine settings
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.first_segment_width)
    }

    /// Render the full report
    pub fn render(&self, summary: &TallySummary) -> String {
        let name_width =
            summary.categories.iter().map(|c| c.name.chars().count()).max().unwrap_or(0);

        let mut report = String::new();
        for category in &summary.categories {
            report.push_str(&self.render_line(category, name_width));
            report.push_str(REPORT_LINE_ENDING);
        }

        if !report.is_empty() {
            report.push_str(REPORT_LINE_ENDING);
            report.push_str(&render_unmatched(&summary.unmatched));
        }

        report
    }

    fn render_line(&self, category: &CategoryStats, name_width: usize) -> String {
        let name_pad = name_width.saturating_sub(category.name.chars().count());

        let first_segment = format!(
            "{name}: {pad}{weekday}{diff}{label}{weekend}",
            name = category.name,
            pad = " ".repeat(name_pad),
            weekday = category.weekday_days,
            diff = diff_annotation(category.weekday_diff),
            label = WEEKEND_LABEL,
            weekend = category.weekend_days,
        );

        let segment_pad = self.first_segment_width.saturating_sub(first_segment.chars().count());

        format!(
            "{first_segment}{pad}{diff}",
            pad = " ".repeat(segment_pad),
            diff = diff_annotation(category.weekend_diff),
        )
    }
}

fn diff_annotation(diff: Option<PercentDiff>) -> String {
    diff.map(|d| format!("{DIFF_PREFIX}{d}")).unwrap_or_default()
}

/// Diagnostic block listing appointments that matched no category
fn render_unmatched(unmatched: &[UnmatchedAppointment]) -> String {
    if unmatched.is_empty() {
        return String::new();
    }

    let mut block = String::from(UNMATCHED_HEADER);
    block.push_str(REPORT_LINE_ENDING);
    for entry in unmatched {
        block.push_str(&format!("? Filter: {}  Subject:{}", entry.filter, entry.subject));
        block.push_str(REPORT_LINE_ENDING);
    }
    block
}
