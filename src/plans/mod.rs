//! Training plans.
//!
//! Provides plan types, sport exercise templates and the weekly plan generator.

pub mod generator;
pub mod templates;
pub mod types;

pub use generator::PlanGenerator;
pub use templates::{ExerciseParameters, SportTemplate};
pub use types::{
    ExercisePrescription, FocusCategory, IntensityLevel, PeriodizationTheme, Reps, TrainingPlan,
    TrainingSession,
};
