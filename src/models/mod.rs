//! Core data models for the shift compliance engine.
//!
//! This module contains the shift, timeline, and finding types shared by the
//! timeline builder, the detectors, and the adapters.

mod finding;
mod record;
mod shift;
mod timeline;

pub use finding::{Finding, FindingDetail};
pub use record::{RawShiftRecord, RecordIssue};
pub use shift::Shift;
pub use timeline::{EmployeeRegistry, EmployeeTimeline};
