//! Expected improvement forecast.
//!
//! Projects weekly improvement rates per physical quality from the athlete's
//! age, fitness level and sport, and the plan's periodization theme.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::athletes::{AthleteProfile, FitnessLevel, Sport};
use crate::error::{CoachError, CoachResult};
use crate::performance::baseline::round2;
use crate::plans::{PeriodizationTheme, TrainingPlan};

/// Physical quality a forecast is made for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quality {
    Power,
    Speed,
    Agility,
    Endurance,
    Strength,
    Flexibility,
}

impl Quality {
    pub const ALL: [Quality; 6] = [
        Quality::Power,
        Quality::Speed,
        Quality::Agility,
        Quality::Endurance,
        Quality::Strength,
        Quality::Flexibility,
    ];

    /// Untrained weekly improvement rate in percent.
    fn base_rate(&self) -> f64 {
        match self {
            Quality::Power => 2.0,
            Quality::Speed => 1.5,
            Quality::Agility => 1.8,
            Quality::Endurance => 2.5,
            Quality::Strength => 2.2,
            Quality::Flexibility => 1.0,
        }
    }

    /// How predictable gains in this quality are.
    fn confidence_factor(&self) -> f64 {
        match self {
            Quality::Strength => 0.8,
            Quality::Endurance => 0.75,
            Quality::Power | Quality::Speed => 0.7,
            Quality::Agility => 0.65,
            Quality::Flexibility => 0.6,
        }
    }

    /// Effect of a week's theme on this quality.
    fn theme_multiplier(&self, theme: PeriodizationTheme) -> f64 {
        use PeriodizationTheme as T;
        use Quality as Q;
        match (theme, self) {
            (T::Strength, Q::Power) => 1.3,
            (T::Strength, Q::Strength) => 1.5,
            (T::Strength, Q::Speed) => 1.1,
            (T::Strength, Q::Agility) => 0.9,
            (T::Strength, Q::Endurance) => 0.8,
            (T::Hiit, Q::Power) => 1.4,
            (T::Hiit, Q::Speed) => 1.3,
            (T::Hiit, Q::Agility) | (T::Hiit, Q::Endurance) => 1.2,
            (T::Endurance, Q::Endurance) => 1.5,
            (T::Endurance, Q::Speed) => 1.1,
            (T::Endurance, Q::Power) => 0.8,
            (T::Endurance, Q::Agility) | (T::Endurance, Q::Strength) => 0.9,
            (T::Agility, Q::Agility) => 1.5,
            (T::Agility, Q::Speed) => 1.2,
            (T::Agility, Q::Power) => 1.1,
            (T::Agility, Q::Endurance) | (T::Agility, Q::Strength) => 0.9,
            _ => 1.0,
        }
    }

    /// How much the sport develops this quality.
    fn sport_factor(&self, sport: Sport) -> f64 {
        use Quality as Q;
        match (sport, self) {
            (Sport::Football, Q::Power) => 1.2,
            (Sport::Football, Q::Strength) => 1.3,
            (Sport::Football, Q::Agility) => 1.2,
            (Sport::Football, Q::Speed) => 1.1,
            (Sport::Basketball, Q::Agility) => 1.3,
            (Sport::Basketball, Q::Power) => 1.2,
            (Sport::Basketball, Q::Endurance) | (Sport::Basketball, Q::Speed) => 1.1,
            (Sport::Tennis, Q::Agility) => 1.4,
            (Sport::Tennis, Q::Speed) | (Sport::Tennis, Q::Flexibility) => 1.2,
            (Sport::Tennis, Q::Endurance) => 1.1,
            (Sport::Running, Q::Endurance) => 1.4,
            (Sport::Running, Q::Speed) => 1.2,
            (Sport::Running, Q::Power) => 0.9,
            (Sport::Cycling, Q::Endurance) => 1.3,
            (Sport::Cycling, Q::Power) | (Sport::Cycling, Q::Strength) => 1.1,
            (Sport::Swimming, Q::Endurance) => 1.3,
            (Sport::Swimming, Q::Flexibility) => 1.2,
            (Sport::Swimming, Q::Strength) => 1.1,
            _ => 1.0,
        }
    }
}

impl std::fmt::Display for Quality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Quality::Power => "power",
            Quality::Speed => "speed",
            Quality::Agility => "agility",
            Quality::Endurance => "endurance",
            Quality::Strength => "strength",
            Quality::Flexibility => "flexibility",
        };
        write!(f, "{}", name)
    }
}

/// Forecast for one quality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityForecast {
    pub quality: Quality,
    /// Expected improvement per week in percent
    pub weekly_rate_pct: f64,
    /// Expected improvement over the horizon in percent
    pub predicted_improvement_pct: f64,
    /// 0.3-0.95
    pub confidence: f64,
}

/// Forecast over a horizon of weeks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImprovementForecast {
    pub athlete_id: Uuid,
    /// Week of the plan the forecast starts from
    pub from_week: u32,
    pub weeks_ahead: u32,
    pub theme: PeriodizationTheme,
    pub qualities: Vec<QualityForecast>,
}

impl ImprovementForecast {
    pub fn quality(&self, quality: Quality) -> Option<&QualityForecast> {
        self.qualities.iter().find(|q| q.quality == quality)
    }
}

fn level_multiplier(level: FitnessLevel) -> f64 {
    match level {
        FitnessLevel::Beginner => 1.5,
        FitnessLevel::Intermediate => 1.0,
        FitnessLevel::Advanced => 0.7,
        FitnessLevel::Elite => 0.5,
    }
}

/// Forecast improvement over `weeks_ahead` weeks of training on `plan`.
pub fn forecast(
    profile: &AthleteProfile,
    plan: &TrainingPlan,
    weeks_ahead: u32,
) -> CoachResult<ImprovementForecast> {
    if weeks_ahead == 0 {
        return Err(CoachError::InvalidWeek(weeks_ahead));
    }
    if plan.athlete_id != profile.id {
        return Err(CoachError::AthleteMismatch {
            expected: profile.id,
            found: plan.athlete_id,
        });
    }

    let mut age_factor = 1.0;
    if profile.age > 30 {
        age_factor *= 0.9;
    }
    if profile.age > 40 {
        age_factor *= 0.8;
    }
    let level = level_multiplier(profile.fitness_level);

    let mut confidence_base: f64 = 0.7;
    if profile.years_experience >= 3 {
        confidence_base += 0.1;
    }
    if profile.age > 35 {
        confidence_base -= 0.1;
    }

    let qualities = Quality::ALL
        .iter()
        .map(|quality| {
            let weekly = quality.base_rate()
                * age_factor
                * level
                * quality.theme_multiplier(plan.theme)
                * quality.sport_factor(profile.sport);

            let mut total = weekly * weeks_ahead as f64;
            if profile.years_experience > 5 {
                total *= 0.8;
            }
            if profile.age > 30 {
                total *= 0.9;
            }

            QualityForecast {
                quality: *quality,
                weekly_rate_pct: round2(weekly),
                predicted_improvement_pct: round2(total),
                confidence: round2((confidence_base * quality.confidence_factor()).clamp(0.3, 0.95)),
            }
        })
        .collect();

    tracing::debug!(athlete = %profile.id, week = plan.week, weeks_ahead, "Forecast improvement");

    Ok(ImprovementForecast {
        athlete_id: profile.id,
        from_week: plan.week,
        weeks_ahead,
        theme: plan.theme,
        qualities,
    })
}
