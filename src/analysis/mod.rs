//! Performance analysis.
//!
//! Provides:
//! - Performance reports over a span of weeks
//! - Improvement forecasts for a plan

pub mod forecast;
pub mod report;

pub use forecast::{forecast, ImprovementForecast, Quality, QualityForecast};
pub use report::{
    BaselinesSummary, GoalSuggestion, MetricSummary, PerformanceReport, ReportBuilder,
    RiskFactor, RiskKind, TargetStanding,
};
