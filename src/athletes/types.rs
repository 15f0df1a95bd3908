//! Athlete attribute enums.

use serde::{Deserialize, Serialize};

/// Biological sex as declared in the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Female,
    Male,
    Other,
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sex::Female => write!(f, "female"),
            Sex::Male => write!(f, "male"),
            Sex::Other => write!(f, "other"),
        }
    }
}

/// Sport the athlete trains for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sport {
    Football,
    Basketball,
    Tennis,
    Running,
    Cycling,
    Swimming,
    Volleyball,
    Badminton,
    Other,
}

impl Sport {
    /// All sports, in declaration order.
    pub const ALL: [Sport; 9] = [
        Sport::Football,
        Sport::Basketball,
        Sport::Tennis,
        Sport::Running,
        Sport::Cycling,
        Sport::Swimming,
        Sport::Volleyball,
        Sport::Badminton,
        Sport::Other,
    ];

    /// Stable snake_case identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sport::Football => "football",
            Sport::Basketball => "basketball",
            Sport::Tennis => "tennis",
            Sport::Running => "running",
            Sport::Cycling => "cycling",
            Sport::Swimming => "swimming",
            Sport::Volleyball => "volleyball",
            Sport::Badminton => "badminton",
            Sport::Other => "other",
        }
    }
}

impl std::fmt::Display for Sport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Sport {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sport::ALL
            .iter()
            .copied()
            .find(|sport| sport.as_str() == s)
            .ok_or_else(|| format!("Unknown sport: {}", s))
    }
}

/// Declared fitness level.
///
/// Ordered from least to most trained so comparisons read naturally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitnessLevel {
    Beginner,
    Intermediate,
    Advanced,
    Elite,
}

impl FitnessLevel {
    /// Get display label.
    pub fn label(&self) -> &'static str {
        match self {
            FitnessLevel::Beginner => "Beginner",
            FitnessLevel::Intermediate => "Intermediate",
            FitnessLevel::Advanced => "Advanced",
            FitnessLevel::Elite => "Elite",
        }
    }

    /// Starting session intensity as a percentage of maximal effort.
    pub fn base_intensity_pct(&self) -> f32 {
        match self {
            FitnessLevel::Beginner => 60.0,
            FitnessLevel::Intermediate => 70.0,
            FitnessLevel::Advanced => 80.0,
            FitnessLevel::Elite => 85.0,
        }
    }

    /// Highest intensity any session may reach at this level.
    pub fn intensity_cap_pct(&self) -> f32 {
        match self {
            FitnessLevel::Beginner => 75.0,
            FitnessLevel::Intermediate => 85.0,
            FitnessLevel::Advanced => 92.0,
            FitnessLevel::Elite => 97.0,
        }
    }

    /// Main-block duration in minutes before any load factor.
    ///
    /// A 45 minute session scaled by 0.8 / 1.0 / 1.2 / 1.4, less 20 minutes
    /// of warm-up and cool-down.
    pub fn base_main_minutes(&self) -> f32 {
        match self {
            FitnessLevel::Beginner => 16.0,
            FitnessLevel::Intermediate => 25.0,
            FitnessLevel::Advanced => 34.0,
            FitnessLevel::Elite => 43.0,
        }
    }
}

impl std::fmt::Display for FitnessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
