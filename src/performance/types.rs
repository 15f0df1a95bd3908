//! Performance test definitions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoachError, CoachResult};

/// Weekly field test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestType {
    /// Countermovement jump height (explosive power)
    VerticalJump,
    /// 20 meter sprint time (speed)
    #[serde(rename = "sprint_20m")]
    Sprint20m,
    /// T-test completion time (agility)
    TTest,
    /// Heart rate reached after the recovery interval (cardiorespiratory capacity)
    HeartRateRecovery,
}

impl TestType {
    /// All test types, in declaration order.
    pub const ALL: [TestType; 4] = [
        TestType::VerticalJump,
        TestType::Sprint20m,
        TestType::TTest,
        TestType::HeartRateRecovery,
    ];

    /// Stable snake_case identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            TestType::VerticalJump => "vertical_jump",
            TestType::Sprint20m => "sprint_20m",
            TestType::TTest => "t_test",
            TestType::HeartRateRecovery => "heart_rate_recovery",
        }
    }

    /// Whether a smaller value is a better result.
    ///
    /// Sprint and T-test are timed. Heart rate recovery records the heart
    /// rate reached after the recovery interval, so a lower value means a
    /// faster recovery.
    pub fn lower_is_better(&self) -> bool {
        !matches!(self, TestType::VerticalJump)
    }

    /// Primary metric recorded by this test.
    pub fn default_metric(&self) -> &'static str {
        match self {
            TestType::VerticalJump => "power",
            TestType::Sprint20m => "speed",
            TestType::TTest => "agility",
            TestType::HeartRateRecovery => "recovery_rate",
        }
    }

    /// Unit of the primary metric.
    pub fn default_unit(&self) -> &'static str {
        match self {
            TestType::VerticalJump => "cm",
            TestType::Sprint20m | TestType::TTest => "s",
            TestType::HeartRateRecovery => "bpm",
        }
    }

    /// Percent change from `reference` to `value`, positive when improved.
    ///
    /// Returns 0.0 for a zero reference.
    pub fn improvement_pct(&self, reference: f64, value: f64) -> f64 {
        if reference == 0.0 {
            return 0.0;
        }
        if self.lower_is_better() {
            (reference - value) / reference * 100.0
        } else {
            (value - reference) / reference * 100.0
        }
    }

    /// Whether `candidate` beats `current`.
    pub fn is_better(&self, candidate: f64, current: f64) -> bool {
        if self.lower_is_better() {
            candidate < current
        } else {
            candidate > current
        }
    }
}

impl std::fmt::Display for TestType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TestType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TestType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("Unknown test type: {}", s))
    }
}

/// One recorded test outcome. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    /// Athlete the result belongs to
    pub athlete_id: Uuid,
    /// Training week the test was performed in (1-based)
    pub week: u32,
    /// Test performed
    pub test_type: TestType,
    /// Primary metric name
    pub metric: String,
    /// Primary metric value
    pub value: f64,
    /// Unit of the value
    pub unit: String,
    /// Calendar date of the test, when known
    #[serde(default)]
    pub tested_on: Option<NaiveDate>,
}

impl TestResult {
    /// Create a result with the test type's default metric and unit.
    pub fn new(athlete_id: Uuid, week: u32, test_type: TestType, value: f64) -> Self {
        Self {
            athlete_id,
            week,
            test_type,
            metric: test_type.default_metric().to_string(),
            value,
            unit: test_type.default_unit().to_string(),
            tested_on: None,
        }
    }

    /// Set the test date.
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.tested_on = Some(date);
        self
    }

    /// Check the week and value are usable.
    pub fn validate(&self) -> CoachResult<()> {
        if self.week == 0 {
            return Err(CoachError::InvalidWeek(self.week));
        }
        if !self.value.is_finite() || self.value <= 0.0 {
            return Err(CoachError::InvalidResult(format!(
                "{} value must be a positive number (got {})",
                self.test_type, self.value
            )));
        }
        Ok(())
    }
}
