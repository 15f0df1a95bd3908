//! TrainAdapt - Adaptive Training Plan Engine
//!
//! Generates weekly training plans for athletes and adapts them to periodic
//! performance test results. Load moves up, holds or backs off depending on
//! how each test trends against the athlete's baseline.

pub mod adaptation;
pub mod analysis;
pub mod athletes;
pub mod coach;
pub mod config;
pub mod error;
pub mod performance;
pub mod plans;

// Re-export commonly used types
pub use adaptation::{AdaptationDecision, AdaptationEngine, AdjustmentDirection, TrendDirection};
pub use athletes::{AthleteProfile, FitnessLevel, ProfileInput, Sex, Sport};
pub use coach::{AthleteSnapshot, Coach};
pub use config::AppConfig;
pub use error::{CoachError, CoachResult};
pub use performance::{BaselineUpdate, PerformanceTargets, TestResult, TestResultLog, TestType};
pub use plans::{FocusCategory, PlanGenerator, TrainingPlan};
