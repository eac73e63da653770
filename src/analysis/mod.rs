//! Shift analysis for the shift compliance engine.
//!
//! Raw records are grouped per employee by the timeline builder. Three
//! independent detectors then read the finished registry, and the runner ties
//! the phases together behind an injected reporter.

mod consecutive_days;
mod day_arithmetic;
mod long_shift;
mod report;
mod reporter;
mod runner;
mod shift_gap;
mod timeline_builder;

pub use consecutive_days::detect_consecutive_days;
pub use day_arithmetic::{is_consecutive_day, is_same_day, truncated_hours};
pub use long_shift::detect_long_shifts;
pub use report::{AnalysisReport, DetectorKind};
pub use reporter::{AnalysisReporter, CollectingReporter, TracingReporter};
pub use runner::AnalysisRunner;
pub use shift_gap::detect_shift_gaps;
pub use timeline_builder::{BuildOutcome, TimelineBuilder, build_timelines};
