//! Training plan types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::templates::SportTemplate;
use crate::adaptation::AdjustmentDirection;

/// Training stimulus a session targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusCategory {
    /// Short, high-intensity work recruiting fast-twitch fibers
    HighIntensity,
    /// Moderate-tempo work building oxidative capacity
    AerobicCapacity,
    /// Agility, speed and power drills chosen by sport
    SportSpecific,
    /// General strength
    Strength,
    /// Flexibility and mobility
    Mobility,
    /// Low-intensity flush between hard days
    ActiveRecovery,
}

impl FocusCategory {
    /// Categories every plan must cover.
    pub const MANDATORY: [FocusCategory; 3] = [
        FocusCategory::HighIntensity,
        FocusCategory::AerobicCapacity,
        FocusCategory::SportSpecific,
    ];

    /// Get display label.
    pub fn label(&self) -> &'static str {
        match self {
            FocusCategory::HighIntensity => "High Intensity",
            FocusCategory::AerobicCapacity => "Aerobic Capacity",
            FocusCategory::SportSpecific => "Sport-Specific",
            FocusCategory::Strength => "Strength",
            FocusCategory::Mobility => "Mobility",
            FocusCategory::ActiveRecovery => "Active Recovery",
        }
    }

    /// Multiplier on the fitness-level base intensity.
    pub fn intensity_factor(&self) -> f32 {
        match self {
            FocusCategory::HighIntensity => 1.15,
            FocusCategory::AerobicCapacity => 0.9,
            FocusCategory::SportSpecific => 1.05,
            FocusCategory::Strength => 1.0,
            FocusCategory::Mobility => 0.6,
            FocusCategory::ActiveRecovery => 0.5,
        }
    }

    /// Multiplier on the fitness-level main-block duration.
    pub fn duration_factor(&self) -> f32 {
        match self {
            FocusCategory::HighIntensity => 0.75,
            FocusCategory::AerobicCapacity => 1.3,
            FocusCategory::SportSpecific => 1.0,
            FocusCategory::Strength => 1.0,
            FocusCategory::Mobility => 0.75,
            FocusCategory::ActiveRecovery => 0.75,
        }
    }
}

impl std::fmt::Display for FocusCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Qualitative intensity band for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntensityLevel {
    Low,
    Moderate,
    High,
    VeryHigh,
    Maximal,
}

impl IntensityLevel {
    /// Band for an intensity percentage.
    pub fn from_pct(pct: u8) -> Self {
        match pct {
            90..=u8::MAX => IntensityLevel::Maximal,
            80..=89 => IntensityLevel::VeryHigh,
            70..=79 => IntensityLevel::High,
            60..=69 => IntensityLevel::Moderate,
            _ => IntensityLevel::Low,
        }
    }
}

/// Four-week periodization theme, used to name the plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodizationTheme {
    Strength,
    Hiit,
    Endurance,
    Agility,
}

impl PeriodizationTheme {
    /// Theme of a 1-based week.
    pub fn for_week(week: u32) -> Self {
        match week.saturating_sub(1) % 4 {
            0 => PeriodizationTheme::Strength,
            1 => PeriodizationTheme::Hiit,
            2 => PeriodizationTheme::Endurance,
            _ => PeriodizationTheme::Agility,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PeriodizationTheme::Strength => "Strength",
            PeriodizationTheme::Hiit => "HIIT",
            PeriodizationTheme::Endurance => "Endurance",
            PeriodizationTheme::Agility => "Agility",
        }
    }
}

impl std::fmt::Display for PeriodizationTheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Repetition prescription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Reps {
    /// Fixed repetition count
    Fixed { reps: u16 },
    /// Repetition range
    Range { min: u16, max: u16 },
    /// Timed work
    Timed { seconds: u16 },
}

impl std::fmt::Display for Reps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Reps::Fixed { reps } => write!(f, "{}", reps),
            Reps::Range { min, max } => write!(f, "{}-{}", min, max),
            Reps::Timed { seconds } => write!(f, "{} seconds", seconds),
        }
    }
}

/// One exercise within a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExercisePrescription {
    /// Exercise identifier
    pub name: String,
    /// Number of sets
    pub sets: u8,
    /// Repetitions per set
    pub reps: Reps,
    /// Rest between sets in seconds
    pub rest_seconds: u16,
}

/// One prescribed session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSession {
    /// Position in the plan (1-based)
    pub order: u8,
    /// Training day within the week (1-based)
    pub day: u8,
    /// Display name
    pub name: String,
    /// Focus tag
    pub focus: FocusCategory,
    /// Target intensity as a percentage of maximal effort
    pub intensity_pct: u8,
    /// Qualitative intensity band
    pub intensity_level: IntensityLevel,
    /// Warm-up in minutes
    pub warm_up_minutes: u8,
    /// Main block in minutes
    pub main_minutes: u16,
    /// Cool-down in minutes
    pub cool_down_minutes: u8,
    /// Exercises in order
    pub exercises: Vec<ExercisePrescription>,
}

impl TrainingSession {
    /// Total session duration in minutes.
    pub fn total_minutes(&self) -> u16 {
        self.warm_up_minutes as u16 + self.main_minutes + self.cool_down_minutes as u16
    }

    /// Sum of sets over all exercises.
    pub fn total_sets(&self) -> u32 {
        self.exercises.iter().map(|e| e.sets as u32).sum()
    }
}

/// A week's plan. Superseded by the next week's plan, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingPlan {
    /// Athlete the plan is for
    pub athlete_id: Uuid,
    /// Week number (1-based)
    pub week: u32,
    /// Display name
    pub name: String,
    /// Periodization theme of the week
    pub theme: PeriodizationTheme,
    /// Template the sport-specific work came from
    pub template: SportTemplate,
    /// Intensity factor relative to the baseline plan
    pub intensity_factor: f32,
    /// Volume factor relative to the baseline plan
    pub volume_factor: f32,
    /// Directive that produced this plan (None for a baseline plan)
    pub directive: Option<AdjustmentDirection>,
    /// Categories given extra volume
    pub emphasis: Vec<FocusCategory>,
    /// Sessions in order
    pub sessions: Vec<TrainingSession>,
}

impl TrainingPlan {
    /// Whether any session has this focus.
    pub fn covers(&self, category: FocusCategory) -> bool {
        self.sessions.iter().any(|s| s.focus == category)
    }

    /// Whether all mandatory categories are covered.
    pub fn covers_mandatory(&self) -> bool {
        FocusCategory::MANDATORY.iter().all(|c| self.covers(*c))
    }

    /// Main-block minutes over the week.
    pub fn total_volume_minutes(&self) -> u32 {
        self.sessions.iter().map(|s| s.main_minutes as u32).sum()
    }

    /// Sets over the week.
    pub fn total_sets(&self) -> u32 {
        self.sessions.iter().map(|s| s.total_sets()).sum()
    }

    /// Highest session intensity.
    pub fn peak_intensity_pct(&self) -> u8 {
        self.sessions
            .iter()
            .map(|s| s.intensity_pct)
            .max()
            .unwrap_or(0)
    }

    /// Same sessions and same load factors, ignoring week and naming.
    pub fn same_structure_as(&self, other: &TrainingPlan) -> bool {
        self.sessions == other.sessions
            && self.intensity_factor == other.intensity_factor
            && self.volume_factor == other.volume_factor
    }
}
