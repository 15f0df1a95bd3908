//! Per-test baselines derived from recorded results.

use serde::{Deserialize, Serialize};

use super::types::{TestResult, TestType};
use crate::error::{CoachError, CoachResult};

/// Horizon of a performance target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetHorizon {
    /// 4-6 weeks
    ShortTerm,
    /// About three months
    MediumTerm,
    /// 6-12 months
    LongTerm,
}

/// Target values an athlete works toward, per horizon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceTargets {
    #[serde(default)]
    pub short_term: Option<f64>,
    #[serde(default)]
    pub medium_term: Option<f64>,
    #[serde(default)]
    pub long_term: Option<f64>,
}

impl PerformanceTargets {
    /// Target for a horizon, if set.
    pub fn get(&self, horizon: TargetHorizon) -> Option<f64> {
        match horizon {
            TargetHorizon::ShortTerm => self.short_term,
            TargetHorizon::MediumTerm => self.medium_term,
            TargetHorizon::LongTerm => self.long_term,
        }
    }

    /// Overlay the targets set in `update`, keeping the others.
    pub fn merge(&mut self, update: &PerformanceTargets) {
        if update.short_term.is_some() {
            self.short_term = update.short_term;
        }
        if update.medium_term.is_some() {
            self.medium_term = update.medium_term;
        }
        if update.long_term.is_some() {
            self.long_term = update.long_term;
        }
    }

    /// Every set target must be a positive finite value.
    pub fn validate(&self) -> CoachResult<()> {
        for (name, value) in [
            ("short_term", self.short_term),
            ("medium_term", self.medium_term),
            ("long_term", self.long_term),
        ] {
            if let Some(v) = value {
                if !(v.is_finite() && v > 0.0) {
                    return Err(CoachError::InvalidResult(format!(
                        "{} target must be a positive number (got {})",
                        name, v
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Reference point for one athlete and test type.
///
/// The reference is the first recorded value and never moves. The best
/// value is tracked alongside it and recomputed on every new result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Baseline {
    /// Test type this baseline covers
    pub test_type: TestType,
    /// First recorded value
    pub reference_value: f64,
    /// Week of the first recorded value
    pub reference_week: u32,
    /// Best value recorded so far
    pub best_value: f64,
    /// Week of the best value
    pub best_week: u32,
    /// Most recent value
    pub latest_value: f64,
    /// Week of the most recent value
    pub latest_week: u32,
    /// Number of results recorded
    pub tests_count: u32,
    /// Targets set for this test type
    #[serde(default)]
    pub targets: PerformanceTargets,
}

impl Baseline {
    /// Start a baseline from the first result of a test type.
    pub fn from_first(result: &TestResult) -> Self {
        Self {
            test_type: result.test_type,
            reference_value: result.value,
            reference_week: result.week,
            best_value: result.value,
            best_week: result.week,
            latest_value: result.value,
            latest_week: result.week,
            tests_count: 1,
            targets: PerformanceTargets::default(),
        }
    }

    /// Fold a later result in. Returns true when it set a new best.
    pub fn update(&mut self, result: &TestResult) -> bool {
        self.tests_count += 1;
        self.latest_value = result.value;
        self.latest_week = result.week;

        if self.test_type.is_better(result.value, self.best_value) {
            self.best_value = result.value;
            self.best_week = result.week;
            true
        } else {
            false
        }
    }

    /// Percent change of `value` relative to the reference, positive when improved.
    pub fn improvement_pct(&self, value: f64) -> f64 {
        self.test_type.improvement_pct(self.reference_value, value)
    }

    /// Improvement of the best value over the reference, rounded to two decimals.
    pub fn current_improvement(&self) -> f64 {
        round2(self.improvement_pct(self.best_value))
    }

    /// Improvement of the latest value over the reference, rounded to two decimals.
    pub fn latest_improvement(&self) -> f64 {
        round2(self.improvement_pct(self.latest_value))
    }

    /// Progress of the best value toward a target, 0-100.
    ///
    /// Measured as distance covered from the reference toward the target.
    /// 0 when no target is set, 100 when the target equals the reference.
    pub fn target_progress(&self, horizon: TargetHorizon) -> f64 {
        let Some(target) = self.targets.get(horizon) else {
            return 0.0;
        };
        let needed = (target - self.reference_value).abs();
        if needed == 0.0 {
            return 100.0;
        }
        let covered = (self.best_value - self.reference_value).abs();
        round2(covered / needed * 100.0).min(100.0)
    }

    /// Whether the best value has reached the target.
    pub fn target_met(&self, horizon: TargetHorizon) -> bool {
        self.targets.get(horizon).is_some() && self.target_progress(horizon) >= 100.0
    }
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
