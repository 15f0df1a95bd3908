//! Adaptation engine.
//!
//! Turns a week's test results into a load directive for the next plan.

pub mod engine;
pub mod types;

pub use engine::AdaptationEngine;
pub use types::{
    AdaptationDecision, AdjustmentDirection, Exclusion, LoadAdjustment, RiskFlag, TestTrend,
    TrackingState, TrendDirection,
};
