//! Configuration loading for the shift compliance engine.
//!
//! Detector thresholds are data. They are read from a single YAML file and
//! fall back to the standard compliance limits for anything left out.
//!
//! # Example
//!
//! ```no_run
//! use shift_compliance::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/rules.yaml").unwrap();
//! println!("Long shift threshold: {}h", loader.rules().long_shift.min_hours);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{ConsecutiveDaysRule, LongShiftRule, RuleConfig, ShiftGapRule};
