//! Orchestration of one analysis run.

use crate::config::RuleConfig;
use crate::models::{EmployeeRegistry, RawShiftRecord};

use super::consecutive_days::detect_consecutive_days;
use super::long_shift::detect_long_shifts;
use super::report::{AnalysisReport, DetectorKind};
use super::reporter::{AnalysisReporter, TracingReporter};
use super::shift_gap::detect_shift_gaps;
use super::timeline_builder::build_timelines;

/// Builds timelines from raw records, then runs the three detectors over the
/// read-only registry.
///
/// Progress goes to the injected [`AnalysisReporter`].
///
/// # Example
///
/// ```
/// use shift_compliance::analysis::{AnalysisRunner, CollectingReporter};
/// use shift_compliance::config::RuleConfig;
/// use shift_compliance::models::RawShiftRecord;
/// use chrono::NaiveDateTime;
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
/// let mut runner = AnalysisRunner::with_reporter(RuleConfig::default(), CollectingReporter::default());
/// let report = runner.run(vec![
///     RawShiftRecord::shift("E1", "Ada", at("2026-01-15 06:00:00"), at("2026-01-15 21:00:00")),
/// ]);
///
/// assert_eq!(report.long_shifts[0].occurrences(), Some(1));
/// assert_eq!(runner.reporter().built, Some((1, 1)));
/// ```
#[derive(Debug, Clone)]
pub struct AnalysisRunner<R = TracingReporter> {
    rules: RuleConfig,
    reporter: R,
}

impl AnalysisRunner<TracingReporter> {
    /// Creates a runner that logs through `tracing`.
    pub fn new(rules: RuleConfig) -> Self {
        Self::with_reporter(rules, TracingReporter)
    }
}

impl<R: AnalysisReporter> AnalysisRunner<R> {
    /// Creates a runner reporting to `reporter`.
    pub fn with_reporter(rules: RuleConfig, reporter: R) -> Self {
        Self { rules, reporter }
    }

    /// The thresholds used by this runner.
    pub fn rules(&self) -> &RuleConfig {
        &self.rules
    }

    /// The injected reporter.
    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Consumes the runner, returning its reporter.
    pub fn into_reporter(self) -> R {
        self.reporter
    }

    /// Builds timelines from `records` and runs every detector.
    ///
    /// Record problems never abort the run; they are passed to the reporter
    /// and kept on the returned report. Empty input yields empty lists.
    pub fn run<I>(&mut self, records: I) -> AnalysisReport
    where
        I: IntoIterator<Item = RawShiftRecord>,
    {
        let outcome = build_timelines(records);

        for issue in &outcome.issues {
            self.reporter.record_rejected(issue);
        }
        self.reporter
            .timelines_built(outcome.registry.len(), outcome.registry.shift_count());

        let mut report = self.analyze(&outcome.registry);
        report.issues = outcome.issues;
        report
    }

    /// Runs every detector over an already built registry.
    pub fn analyze(&mut self, registry: &EmployeeRegistry) -> AnalysisReport {
        let consecutive_days = detect_consecutive_days(registry, &self.rules.consecutive_days);
        self.reporter
            .detector_finished(DetectorKind::ConsecutiveDays, &consecutive_days);

        let shift_gaps = detect_shift_gaps(registry, &self.rules.shift_gap);
        self.reporter
            .detector_finished(DetectorKind::ShiftGap, &shift_gaps);

        let long_shifts = detect_long_shifts(registry, &self.rules.long_shift);
        self.reporter
            .detector_finished(DetectorKind::LongShift, &long_shifts);

        AnalysisReport {
            rules: self.rules,
            employee_count: registry.len(),
            shift_count: registry.shift_count(),
            consecutive_days,
            shift_gaps,
            long_shifts,
            issues: Vec::new(),
        }
    }
}
