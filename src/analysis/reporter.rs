//! The reporting collaborator injected into the runner.
//!
//! The runner never logs on its own. It calls an [`AnalysisReporter`] at each
//! phase, so callers choose between structured logging, in-memory capture, or
//! both.

use tracing::{debug, info, warn};

use crate::error::AnalysisError;
use crate::models::{Finding, RecordIssue};

use super::report::DetectorKind;

/// Receives progress events from an analysis run.
pub trait AnalysisReporter {
    /// A record was skipped or contributed no shift.
    fn record_rejected(&mut self, issue: &RecordIssue);

    /// The build phase finished.
    fn timelines_built(&mut self, employees: usize, shifts: usize);

    /// One detector finished.
    fn detector_finished(&mut self, detector: DetectorKind, findings: &[Finding]);
}

impl<R: AnalysisReporter + ?Sized> AnalysisReporter for &mut R {
    fn record_rejected(&mut self, issue: &RecordIssue) {
        (**self).record_rejected(issue);
    }

    fn timelines_built(&mut self, employees: usize, shifts: usize) {
        (**self).timelines_built(employees, shifts);
    }

    fn detector_finished(&mut self, detector: DetectorKind, findings: &[Finding]) {
        (**self).detector_finished(detector, findings);
    }
}

/// Emits `tracing` events for every callback.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl AnalysisReporter for TracingReporter {
    fn record_rejected(&mut self, issue: &RecordIssue) {
        match &issue.error {
            AnalysisError::MissingShiftFields { employee_id, .. } => {
                debug!(row = issue.row, employee_id = %employee_id, "Row carries no shift");
            }
            error => {
                warn!(row = issue.row, error = %error, "Record rejected");
            }
        }
    }

    fn timelines_built(&mut self, employees: usize, shifts: usize) {
        info!(employees, shifts, "Timelines built");
    }

    fn detector_finished(&mut self, detector: DetectorKind, findings: &[Finding]) {
        info!(detector = %detector, findings = findings.len(), "Detector finished");
    }
}

/// Keeps every callback in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectingReporter {
    /// Rejected records, in input order.
    pub rejected: Vec<RecordIssue>,
    /// `(employees, shifts)` from the build phase, once it ran.
    pub built: Option<(usize, usize)>,
    /// `(detector, finding count)` in completion order.
    pub detectors: Vec<(DetectorKind, usize)>,
}

impl AnalysisReporter for CollectingReporter {
    fn record_rejected(&mut self, issue: &RecordIssue) {
        self.rejected.push(issue.clone());
    }

    fn timelines_built(&mut self, employees: usize, shifts: usize) {
        self.built = Some((employees, shifts));
    }

    fn detector_finished(&mut self, detector: DetectorKind, findings: &[Finding]) {
        self.detectors.push((detector, findings.len()));
    }
}
