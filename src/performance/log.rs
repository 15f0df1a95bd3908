//! Append-only per-athlete test result log.
//!
//! Results must arrive in non-decreasing week order. A result for an earlier
//! week than the latest recorded one is rejected, as is a second result for
//! the same week and test type. Backfill is not supported.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::baseline::{round2, Baseline, PerformanceTargets};
use super::types::{TestResult, TestType};
use crate::error::{CoachError, CoachResult};

/// Outcome of recording a result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineUpdate {
    /// Test type of the recorded result
    pub test_type: TestType,
    /// Whether this result created the baseline
    pub created: bool,
    /// Whether this result is a new best
    pub new_best: bool,
    /// Change from the baseline reference in percent (0 for the first result)
    pub improvement_from_baseline: f64,
    /// Change from the previous result of this type in percent
    pub improvement_from_last_test: Option<f64>,
    /// Baseline after the update
    pub baseline: Baseline,
}

/// Snapshot of one athlete's recorded results and derived baselines.
#[derive(Debug, Clone, PartialEq)]
pub struct TestResultLog {
    athlete_id: Uuid,
    results: Vec<TestResult>,
    baselines: BTreeMap<TestType, Baseline>,
}

impl TestResultLog {
    /// Create an empty log for an athlete.
    pub fn new(athlete_id: Uuid) -> Self {
        Self {
            athlete_id,
            results: Vec::new(),
            baselines: BTreeMap::new(),
        }
    }

    /// Build a log by recording results in order.
    pub fn from_results<I>(athlete_id: Uuid, results: I) -> CoachResult<Self>
    where
        I: IntoIterator<Item = TestResult>,
    {
        let mut log = Self::new(athlete_id);
        for result in results {
            log.record(result)?;
        }
        Ok(log)
    }

    /// Athlete this log belongs to.
    pub fn athlete_id(&self) -> Uuid {
        self.athlete_id
    }

    /// Fail with AthleteMismatch unless this log belongs to `athlete_id`.
    pub fn check_owner(&self, athlete_id: Uuid) -> CoachResult<()> {
        if self.athlete_id == athlete_id {
            Ok(())
        } else {
            Err(CoachError::AthleteMismatch {
                expected: athlete_id,
                found: self.athlete_id,
            })
        }
    }

    /// Append a result and recompute the baseline for its test type.
    ///
    /// The log is left unchanged when the result is rejected.
    pub fn record(&mut self, result: TestResult) -> CoachResult<BaselineUpdate> {
        result.validate()?;

        if result.athlete_id != self.athlete_id {
            return Err(CoachError::AthleteMismatch {
                expected: self.athlete_id,
                found: result.athlete_id,
            });
        }

        if let Some(latest) = self.latest_week() {
            if result.week < latest {
                return Err(CoachError::OutOfOrderResult {
                    week: result.week,
                    latest,
                });
            }
        }

        if self.get(result.week, result.test_type).is_some() {
            return Err(CoachError::DuplicateResult {
                week: result.week,
                test_type: result.test_type,
            });
        }

        let improvement_from_last_test = self
            .history(result.test_type)
            .last()
            .map(|prev| round2(result.test_type.improvement_pct(prev.value, result.value)));

        let update = match self.baselines.get_mut(&result.test_type) {
            Some(baseline) => {
                let new_best = baseline.update(&result);
                BaselineUpdate {
                    test_type: result.test_type,
                    created: false,
                    new_best,
                    improvement_from_baseline: round2(baseline.improvement_pct(result.value)),
                    improvement_from_last_test,
                    baseline: baseline.clone(),
                }
            }
            None => {
                let baseline = Baseline::from_first(&result);
                self.baselines.insert(result.test_type, baseline.clone());
                BaselineUpdate {
                    test_type: result.test_type,
                    created: true,
                    new_best: true,
                    improvement_from_baseline: 0.0,
                    improvement_from_last_test,
                    baseline,
                }
            }
        };

        tracing::debug!(
            athlete = %self.athlete_id,
            week = result.week,
            test = %result.test_type,
            value = result.value,
            created = update.created,
            "Recorded test result"
        );

        self.results.push(result);
        Ok(update)
    }

    /// All results in recording order.
    pub fn results(&self) -> &[TestResult] {
        &self.results
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Number of recorded results.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Highest recorded week.
    pub fn latest_week(&self) -> Option<u32> {
        self.results.last().map(|r| r.week)
    }

    /// Result for a week and test type.
    pub fn get(&self, week: u32, test_type: TestType) -> Option<&TestResult> {
        self.results
            .iter()
            .find(|r| r.week == week && r.test_type == test_type)
    }

    /// Results of one test type, ordered by week.
    pub fn history(&self, test_type: TestType) -> Vec<&TestResult> {
        self.results
            .iter()
            .filter(|r| r.test_type == test_type)
            .collect()
    }

    /// Results of one test type up to and including `week`.
    pub fn history_until(&self, test_type: TestType, week: u32) -> Vec<&TestResult> {
        self.results
            .iter()
            .filter(|r| r.test_type == test_type && r.week <= week)
            .collect()
    }

    /// Results recorded within an inclusive week span.
    pub fn results_between(&self, from_week: u32, to_week: u32) -> Vec<&TestResult> {
        self.results
            .iter()
            .filter(|r| r.week >= from_week && r.week <= to_week)
            .collect()
    }

    /// Distinct weeks with at least one result, ascending.
    pub fn weeks(&self) -> Vec<u32> {
        let mut weeks: Vec<u32> = self.results.iter().map(|r| r.week).collect();
        weeks.dedup();
        weeks
    }

    /// Current baseline of a test type.
    pub fn baseline(&self, test_type: TestType) -> Option<&Baseline> {
        self.baselines.get(&test_type)
    }

    /// Set targets on a test type's baseline. Horizons left unset in
    /// `targets` keep their current value.
    pub fn set_targets(
        &mut self,
        test_type: TestType,
        targets: PerformanceTargets,
    ) -> CoachResult<&Baseline> {
        targets.validate()?;
        let baseline = self
            .baselines
            .get_mut(&test_type)
            .ok_or_else(|| CoachError::InsufficientData {
                test_type,
                message: "no baseline to set targets on".to_string(),
            })?;
        baseline.targets.merge(&targets);

        tracing::debug!(athlete = %self.athlete_id, test = %test_type, "Updated performance targets");
        Ok(baseline)
    }

    /// All baselines, keyed by test type.
    pub fn baselines(&self) -> impl Iterator<Item = &Baseline> {
        self.baselines.values()
    }
}
