//! Configuration types for the detectors.
//!
//! These structures are deserialized from the rules YAML file. Every section
//! and field is optional and defaults to the standard limits.

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};

/// Threshold for the consecutive-days detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsecutiveDaysRule {
    /// Minimum streak of consecutive calendar days that is reported.
    pub min_days: u32,
}

impl Default for ConsecutiveDaysRule {
    fn default() -> Self {
        Self { min_days: 7 }
    }
}

/// Inclusive bounds for the gap detector, in whole hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShiftGapRule {
    /// Smallest reported gap.
    pub min_hours: i64,
    /// Largest reported gap.
    pub max_hours: i64,
}

impl Default for ShiftGapRule {
    fn default() -> Self {
        Self {
            min_hours: 1,
            max_hours: 10,
        }
    }
}

impl ShiftGapRule {
    /// Returns true if `gap_hours` falls inside the inclusive range.
    pub fn contains(&self, gap_hours: i64) -> bool {
        (self.min_hours..=self.max_hours).contains(&gap_hours)
    }
}

/// Threshold for the long-shift detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LongShiftRule {
    /// Minimum whole-hour duration of a counted shift.
    pub min_hours: i64,
}

impl Default for LongShiftRule {
    fn default() -> Self {
        Self { min_hours: 14 }
    }
}

/// The complete rule set applied by one analysis run.
///
/// # Example
///
/// ```
/// use shift_compliance::config::RuleConfig;
///
/// let rules: RuleConfig = serde_yaml::from_str("long_shift:\n  min_hours: 12\n").unwrap();
/// assert_eq!(rules.long_shift.min_hours, 12);
/// assert_eq!(rules.consecutive_days.min_days, 7);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    /// Consecutive working days.
    pub consecutive_days: ConsecutiveDaysRule,
    /// Short rest between shifts.
    pub shift_gap: ShiftGapRule,
    /// Overlong single shifts.
    pub long_shift: LongShiftRule,
}

impl RuleConfig {
    /// Checks that the thresholds describe a usable rule set.
    pub fn validate(&self) -> AnalysisResult<()> {
        if self.consecutive_days.min_days == 0 {
            return Err(AnalysisError::InvalidConfig {
                field: "consecutive_days.min_days".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        if self.shift_gap.min_hours > self.shift_gap.max_hours {
            return Err(AnalysisError::InvalidConfig {
                field: "shift_gap.min_hours".to_string(),
                message: format!(
                    "{} exceeds max_hours {}",
                    self.shift_gap.min_hours, self.shift_gap.max_hours
                ),
            });
        }

        if self.long_shift.min_hours < 1 {
            return Err(AnalysisError::InvalidConfig {
                field: "long_shift.min_hours".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        Ok(())
    }
}
