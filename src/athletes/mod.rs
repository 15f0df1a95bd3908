//! Athlete profiles.

pub mod profile;
pub mod types;

pub use profile::{AthleteProfile, ProfileInput};
pub use types::{FitnessLevel, Sex, Sport};
