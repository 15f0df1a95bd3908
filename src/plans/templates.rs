//! Sport exercise templates.
//!
//! Each sport with defined drills maps to its own template. Sports without
//! one resolve to [`SportTemplate::General`] unless strict mode is on.

use serde::{Deserialize, Serialize};

use super::types::{FocusCategory, Reps};
use crate::athletes::{FitnessLevel, Sport};
use crate::error::{CoachError, CoachResult};
use crate::performance::TestType;

/// Exercise template selected by sport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SportTemplate {
    Football,
    Basketball,
    Tennis,
    Running,
    Cycling,
    Swimming,
    /// Fallback for sports without dedicated drills
    General,
}

impl SportTemplate {
    /// Dedicated template for a sport, if one exists.
    pub fn for_sport(sport: Sport) -> Option<Self> {
        match sport {
            Sport::Football => Some(SportTemplate::Football),
            Sport::Basketball => Some(SportTemplate::Basketball),
            Sport::Tennis => Some(SportTemplate::Tennis),
            Sport::Running => Some(SportTemplate::Running),
            Sport::Cycling => Some(SportTemplate::Cycling),
            Sport::Swimming => Some(SportTemplate::Swimming),
            Sport::Volleyball | Sport::Badminton | Sport::Other => None,
        }
    }

    /// Template for a sport, falling back to General unless `strict`.
    pub fn resolve(sport: Sport, strict: bool) -> CoachResult<Self> {
        match Self::for_sport(sport) {
            Some(template) => Ok(template),
            None if strict => Err(CoachError::UnsupportedSport(sport)),
            None => {
                tracing::warn!("No exercise template for {}, using general template", sport);
                Ok(SportTemplate::General)
            }
        }
    }

    /// Tests the sport relies on for its adaptation checks.
    pub fn required_tests(&self) -> &'static [TestType] {
        match self {
            SportTemplate::Football => &[TestType::Sprint20m, TestType::TTest, TestType::VerticalJump],
            SportTemplate::Basketball => &[TestType::VerticalJump, TestType::TTest],
            SportTemplate::Tennis => &[TestType::TTest, TestType::Sprint20m],
            SportTemplate::Running => &[TestType::Sprint20m, TestType::HeartRateRecovery],
            SportTemplate::Cycling | SportTemplate::Swimming | SportTemplate::General => {
                &[TestType::HeartRateRecovery]
            }
        }
    }

    /// Exercises for a session of the given focus, at most three.
    pub fn exercises(&self, focus: FocusCategory, level: FitnessLevel) -> &'static [&'static str] {
        let list: &'static [&'static str] = match focus {
            FocusCategory::HighIntensity => match level {
                FitnessLevel::Beginner => &["burpees", "mountain_climbers", "high_knees"],
                FitnessLevel::Intermediate => &["box_jumps", "kettlebell_swings", "sprints"],
                FitnessLevel::Advanced => &["plyometric_jumps", "medicine_ball_slams", "sprint_intervals"],
                FitnessLevel::Elite => &["depth_jumps", "reactive_jumps", "olympic_lift_complexes"],
            },
            FocusCategory::Strength => match level {
                FitnessLevel::Beginner => &["bodyweight_squats", "push_ups", "lunges"],
                FitnessLevel::Intermediate => &["goblet_squats", "deadlifts", "rows"],
                FitnessLevel::Advanced => &["back_squats", "deadlifts", "clean_pulls"],
                FitnessLevel::Elite => &["back_squats", "power_cleans", "snatches"],
            },
            FocusCategory::AerobicCapacity => match self {
                SportTemplate::Cycling => &["bike_intervals", "tempo_ride"],
                SportTemplate::Swimming => &["swimming_sets", "rowing_intervals"],
                _ => &["tempo_runs", "bike_intervals"],
            },
            FocusCategory::SportSpecific => match self {
                SportTemplate::Football => &["40_yard_dash", "position_drills", "tackling_drills"],
                SportTemplate::Basketball => &["suicide_drills", "defensive_slides", "shooting_drills"],
                SportTemplate::Tennis => &["court_sprints", "serve_practice", "volley_drills"],
                SportTemplate::Running => &["interval_training", "hill_repeats", "strides"],
                SportTemplate::Cycling => &["hill_climbs", "sprint_intervals", "time_trials"],
                SportTemplate::Swimming => &["stroke_technique", "flip_turns", "breathing_drills"],
                SportTemplate::General => &["ladder_drills", "cone_drills", "5_10_5_drill"],
            },
            FocusCategory::Mobility => &["dynamic_stretching", "hip_mobility_flow", "foam_rolling"],
            FocusCategory::ActiveRecovery => &["easy_aerobic_flush", "static_stretching"],
        };
        list
    }

    /// Base set/rep/rest parameters for a focus and fitness level.
    pub fn base_parameters(focus: FocusCategory, level: FitnessLevel) -> ExerciseParameters {
        use FitnessLevel::*;
        match focus {
            FocusCategory::Strength => match level {
                Beginner => ExerciseParameters::new(2, Reps::Fixed { reps: 12 }, 90),
                Intermediate => ExerciseParameters::new(3, Reps::Range { min: 8, max: 12 }, 120),
                Advanced => ExerciseParameters::new(4, Reps::Range { min: 6, max: 10 }, 150),
                Elite => ExerciseParameters::new(5, Reps::Range { min: 4, max: 8 }, 180),
            },
            FocusCategory::HighIntensity | FocusCategory::SportSpecific => match level {
                Beginner => ExerciseParameters::new(3, Reps::Fixed { reps: 8 }, 120),
                Intermediate => ExerciseParameters::new(4, Reps::Range { min: 6, max: 8 }, 150),
                Advanced => ExerciseParameters::new(5, Reps::Range { min: 4, max: 6 }, 180),
                Elite => ExerciseParameters::new(6, Reps::Range { min: 3, max: 5 }, 200),
            },
            FocusCategory::AerobicCapacity => {
                ExerciseParameters::new(3, Reps::Timed { seconds: 300 }, 60)
            }
            FocusCategory::Mobility => ExerciseParameters::new(2, Reps::Timed { seconds: 45 }, 30),
            FocusCategory::ActiveRecovery => {
                ExerciseParameters::new(1, Reps::Timed { seconds: 600 }, 0)
            }
        }
    }
}

/// Unscaled exercise parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExerciseParameters {
    pub sets: u8,
    pub reps: Reps,
    pub rest_seconds: u16,
}

impl ExerciseParameters {
    fn new(sets: u8, reps: Reps, rest_seconds: u16) -> Self {
        Self {
            sets,
            reps,
            rest_seconds,
        }
    }
}
