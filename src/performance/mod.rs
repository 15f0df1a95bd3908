//! Performance tests, baselines and the per-athlete result log.

pub mod baseline;
pub mod log;
pub mod types;

pub use baseline::{Baseline, PerformanceTargets, TargetHorizon};
pub use log::{BaselineUpdate, TestResultLog};
pub use types::{TestResult, TestType};
