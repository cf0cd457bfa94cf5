//! Matcher configuration.
//!
//! Loaded from TOML. Every field has a default, so an empty file (or no
//! file) yields the standard three-semester, eight-period grid.
//!
//! ```toml
//! semesters = 3
//! periods = 8
//! period_budget = 24
//! double_period = "reserve_on_placement"
//!
//! [tie_break]
//! mode = "random"
//! seed = 7
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

/// How requests with equal priority score are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum TieBreak {
    /// No perturbation; equal scores keep insertion order.
    #[default]
    Sequence,
    /// Adds a seeded perturbation in `[0, 0.01)` to every score.
    Random { seed: u64 },
}

/// How double-period courses block adjacent periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DoublePeriodPolicy {
    /// Only already-bound double-period courses block their partner period.
    ///
    /// A double-period course being placed ignores its own partner period,
    /// so it may overlap a course the student already holds there.
    BoundOnly,
    /// Additionally, a double-period course being placed needs its own
    /// partner period free.
    #[default]
    ReserveOnPlacement,
}

/// Matcher settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Number of semesters in the grid.
    pub semesters: usize,
    /// Number of periods per semester.
    pub periods: usize,
    /// Periods a student can attend over the year (flexibility baseline).
    pub period_budget: u32,
    /// Ordering of equal-score requests.
    pub tie_break: TieBreak,
    /// Double-period blocking rule.
    pub double_period: DoublePeriodPolicy,
    /// Display names of semesters.
    pub semester_labels: Vec<String>,
    /// Display names of periods.
    pub period_labels: Vec<String>,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            semesters: 3,
            periods: 8,
            period_budget: 24,
            tie_break: TieBreak::Sequence,
            double_period: DoublePeriodPolicy::ReserveOnPlacement,
            semester_labels: ["Fall", "Winter", "Spring"].map(String::from).to_vec(),
            period_labels: ["M1", "M2", "M3", "M4", "T1", "T2", "T3", "T4"]
                .map(String::from)
                .to_vec(),
        }
    }
}

impl MatcherConfig {
    /// Reads and validates a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parses and validates TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: MatcherConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the grid size.
    pub fn with_grid(mut self, semesters: usize, periods: usize) -> Self {
        self.semesters = semesters;
        self.periods = periods;
        self
    }

    /// Sets the tie-break mode.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Sets the double-period policy.
    pub fn with_double_period(mut self, policy: DoublePeriodPolicy) -> Self {
        self.double_period = policy;
        self
    }

    /// Checks the grid is non-empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.semesters == 0 || self.periods == 0 {
            return Err(ConfigError::Invalid(format!(
                "grid must be non-empty, got {}x{}",
                self.semesters, self.periods
            )));
        }
        Ok(())
    }

    /// Display name of a semester, falling back to its index.
    pub fn semester_label(&self, semester: usize) -> String {
        self.semester_labels
            .get(semester)
            .cloned()
            .unwrap_or_else(|| semester.to_string())
    }

    /// Display name of a period, falling back to its index.
    pub fn period_label(&self, period: usize) -> String {
        self.period_labels
            .get(period)
            .cloned()
            .unwrap_or_else(|| period.to_string())
    }
}
