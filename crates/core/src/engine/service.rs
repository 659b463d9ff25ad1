//! Tally engine - drives one run from request to report
//!
//! Lifecycle of a run:
//! 1. Validate the request (nothing is fetched or tallied on failure)
//! 2. Fetch appointments from the calendar source
//! 3. Reset: build a fresh [`TallySheet`] for the request's categories
//! 4. Accumulate: evaluate every appointment in source order
//! 5. Finalize: aggregate statistics and render the text report
//!
//! A malformed appointment stops step 4. The report rendered from what was
//! tallied so far travels with the error.

use std::sync::Arc;

use caltally_domain::{
    Appointment, CalTallyError, EngineConfig, Result, TallyReport, TallyRequest, TallySummary,
};
use tracing::{debug, info, info_span, warn};
use uuid::Uuid;

use super::legacy::render_outcome;
use super::validation::validate_request;
use crate::calendar_ports::CalendarSource;
use crate::classification::{CategoryMatcher, MatchOutcome, TallySheet};
use crate::report::ReportBuilder;
use crate::stats::StatisticsAggregator;

/// Categorises calendar appointments and reports day counts per category
pub struct TallyEngine {
    source: Arc<dyn CalendarSource>,
    config: EngineConfig,
}

impl TallyEngine {
    /// Create a new engine reading from `source`
    pub fn new(source: Arc<dyn CalendarSource>, config: EngineConfig) -> Self {
        Self { source, config }
    }

    /// Engine settings shared by every run
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Validate `request`, fetch its appointments and tally them
    ///
    /// # Errors
    /// - `CalTallyError::InvalidInput` if the request fails validation
    /// - any error of the calendar source, e.g. `CalendarNotFound`
    /// - `CalTallyError::Execution` if an appointment cannot be tallied
    pub fn run(&self, request: &TallyRequest) -> Result<TallyReport> {
        validate_request(request)?;

        let appointments =
            self.source.fetch_appointments(&request.calendar_name, request.start, request.end)?;

        debug!(
            calendar = %request.calendar_name,
            count = appointments.len(),
            "appointments fetched"
        );

        self.tally(request, &appointments)
    }

    /// Like [`run`](Self::run), rendered as plain text with error sentinels
    pub fn run_to_text(&self, request: &TallyRequest) -> String {
        render_outcome(&self.run(request))
    }

    /// Tally already retrieved appointments for `request`
    ///
    /// # Errors
    /// - `CalTallyError::InvalidInput` if the request fails validation
    /// - `CalTallyError::Execution` if an appointment cannot be tallied
    pub fn tally(
        &self,
        request: &TallyRequest,
        appointments: &[Appointment],
    ) -> Result<TallyReport> {
        validate_request(request)?;

        let run_id = Uuid::now_v7();
        let span = info_span!("tally_run", run_id = %run_id, calendar = %request.calendar_name);
        let _guard = span.enter();

        let matcher = CategoryMatcher::new(request, &self.config);
        let mut sheet = TallySheet::reset(&request.categories, request.active_filter());

        for appointment in appointments {
            if let Err(err) = accumulate(&matcher, &mut sheet, appointment) {
                warn!(
                    error = %err,
                    kind = err.label(),
                    subject = %appointment.subject,
                    "tally run aborted"
                );
                let message = match err {
                    CalTallyError::Execution { message, .. } => message,
                    other => other.to_string(),
                };
                let partial_report = self.render(&sheet).1;
                return Err(CalTallyError::Execution { message, partial_report });
            }
        }

        let (summary, text) = self.render(&sheet);

        info!(
            categories = summary.categories.len(),
            appointments = appointments.len(),
            matched = summary.matched_count(),
            unmatched = summary.unmatched.len(),
            skipped = sheet.skipped(),
            "tally run completed"
        );

        Ok(TallyReport { run_id, summary, text })
    }

    fn render(&self, sheet: &TallySheet) -> (TallySummary, String) {
        let summary = StatisticsAggregator::from_config(&self.config).aggregate(sheet);
        let text = ReportBuilder::from_config(&self.config).render(&summary);
        (summary, text)
    }
}

/// Evaluate one appointment and fold it into the sheet
///
/// A matched appointment ending before it starts fails the pass with an
/// `Execution` error; the caller attaches the partial report.
fn accumulate(
    matcher: &CategoryMatcher,
    sheet: &mut TallySheet,
    appointment: &Appointment,
) -> Result<()> {
    let outcome = matcher.evaluate(appointment);

    if matches!(outcome, MatchOutcome::Matched { .. }) && appointment.is_inverted() {
        return Err(CalTallyError::Execution {
            message: format!(
                "appointment '{}' ends ({}) before it starts ({})",
                appointment.subject, appointment.end, appointment.start
            ),
            partial_report: String::new(),
        });
    }

    sheet.apply(appointment, outcome)
}
