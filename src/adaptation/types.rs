//! Adaptation decision types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::performance::TestType;
use crate::plans::FocusCategory;

/// Tracking state of one test type for one athlete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackingState {
    /// No result recorded
    NoData,
    /// Exactly one result; it is the baseline
    Baseline,
    /// Two or more results; change is measured against the baseline
    Trending,
}

impl TrackingState {
    /// State after `count` results.
    pub fn from_count(count: usize) -> Self {
        match count {
            0 => TrackingState::NoData,
            1 => TrackingState::Baseline,
            _ => TrackingState::Trending,
        }
    }
}

/// Classified direction of a test's change from baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Improving,
    Stagnant,
    Declining,
}

impl TrendDirection {
    pub fn label(&self) -> &'static str {
        match self {
            TrendDirection::Improving => "improving",
            TrendDirection::Stagnant => "stagnant",
            TrendDirection::Declining => "declining",
        }
    }
}

impl std::fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Direction of load adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentDirection {
    /// Increase training load
    Increase,
    /// Maintain current load
    Maintain,
    /// Decrease training load
    Decrease,
}

impl AdjustmentDirection {
    pub fn label(&self) -> &'static str {
        match self {
            AdjustmentDirection::Increase => "Increase",
            AdjustmentDirection::Maintain => "Maintain",
            AdjustmentDirection::Decrease => "Decrease",
        }
    }
}

impl std::fmt::Display for AdjustmentDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Load adjustment recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadAdjustment {
    /// Direction of adjustment
    pub direction: AdjustmentDirection,
    /// Intensity change in percent (0 for maintain)
    pub percentage: f32,
    /// Reason for adjustment
    pub reason: String,
}

/// Overall injury/overtraining risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFlag {
    /// No declining test
    None,
    /// A non-critical test is declining
    Elevated,
    /// A capacity-critical test is declining
    High,
}

/// Per-test outcome of an evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestTrend {
    /// Test type
    pub test_type: TestType,
    /// Tracking state at the evaluated week
    pub state: TrackingState,
    /// Results considered
    pub results_count: usize,
    /// Baseline reference value
    pub reference_value: Option<f64>,
    /// Latest value considered
    pub latest_value: Option<f64>,
    /// Change of the latest value from the reference, positive when improved
    pub change_pct: Option<f64>,
    /// Classification, present only while trending
    pub direction: Option<TrendDirection>,
}

/// A test type left out of the aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exclusion {
    /// Excluded test type
    pub test_type: TestType,
    /// Why it was excluded
    pub reason: String,
}

/// Result of adapting to one week of test results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdaptationDecision {
    /// Athlete
    pub athlete_id: Uuid,
    /// Week whose results were evaluated
    pub week: u32,
    /// Per-test trends, in test type order
    pub trends: Vec<TestTrend>,
    /// Overall risk
    pub risk: RiskFlag,
    /// Directive for the next plan
    pub adjustment: LoadAdjustment,
    /// Categories to emphasize in the next plan
    pub emphasis: Vec<FocusCategory>,
    /// Required tests left out for insufficient data
    pub excluded: Vec<Exclusion>,
    /// Human-readable summary
    pub rationale: String,
}

impl AdaptationDecision {
    /// Directive for the next plan.
    pub fn directive(&self) -> AdjustmentDirection {
        self.adjustment.direction
    }

    /// Trend entry for a test type.
    pub fn trend(&self, test_type: TestType) -> Option<&TestTrend> {
        self.trends.iter().find(|t| t.test_type == test_type)
    }

    /// Tracking state of a test type.
    pub fn state(&self, test_type: TestType) -> TrackingState {
        self.trend(test_type)
            .map(|t| t.state)
            .unwrap_or(TrackingState::NoData)
    }
}
