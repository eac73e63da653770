//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading detector
//! thresholds from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{AnalysisError, AnalysisResult};

use super::types::RuleConfig;

/// Loads and provides access to the rule configuration.
///
/// # File Format
///
/// ```text
/// consecutive_days:
///   min_days: 7
/// shift_gap:
///   min_hours: 1
///   max_hours: 10
/// long_shift:
///   min_hours: 14
/// ```
///
/// # Example
///
/// ```no_run
/// use shift_compliance::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/rules.yaml")?;
/// assert_eq!(loader.rules().shift_gap.max_hours, 10);
/// # Ok::<(), shift_compliance::error::AnalysisError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    rules: RuleConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing or unreadable
    /// - The file contains invalid YAML
    /// - A threshold violates its constraint
    pub fn load<P: AsRef<Path>>(path: P) -> AnalysisResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| AnalysisError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse(&content, &path_str)
    }

    /// Parses configuration from YAML text. `origin` names the source in errors.
    pub fn parse(content: &str, origin: &str) -> AnalysisResult<Self> {
        let rules: RuleConfig =
            serde_yaml::from_str(content).map_err(|e| AnalysisError::ConfigParseError {
                path: origin.to_string(),
                message: e.to_string(),
            })?;

        Self::from_rules(rules)
    }

    /// Wraps an already built rule set after validating it.
    pub fn from_rules(rules: RuleConfig) -> AnalysisResult<Self> {
        rules.validate()?;
        Ok(Self { rules })
    }

    /// Returns the loaded rules.
    pub fn rules(&self) -> &RuleConfig {
        &self.rules
    }
}
