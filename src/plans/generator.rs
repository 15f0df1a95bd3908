//! Weekly training plan generation.
//!
//! A plan is built from the athlete's fitness level and training frequency,
//! scaled by intensity and volume factors that are carried from week to
//! week. The adaptation directive moves those factors; everything else in
//! the plan is a pure function of the profile, so the same inputs always
//! produce the same plan.

use super::templates::SportTemplate;
use super::types::{
    ExercisePrescription, FocusCategory, IntensityLevel, PeriodizationTheme, TrainingPlan,
    TrainingSession,
};
use crate::adaptation::{AdaptationDecision, AdjustmentDirection};
use crate::athletes::AthleteProfile;
use crate::config::{AppConfig, PlannerSettings};
use crate::error::{CoachError, CoachResult};

/// Session focus order. The first three are mandatory; later entries are
/// added as training frequency allows.
const SESSION_ORDER: [FocusCategory; 7] = [
    FocusCategory::HighIntensity,
    FocusCategory::AerobicCapacity,
    FocusCategory::SportSpecific,
    FocusCategory::Strength,
    FocusCategory::Mobility,
    FocusCategory::ActiveRecovery,
    FocusCategory::AerobicCapacity,
];

/// Minimum number of sessions in any plan.
const MIN_SESSIONS: usize = 3;

/// Share of a decrease's volume cut that emphasized sessions still take.
const EMPHASIS_CUT_SHARE: f32 = 0.5;

const WARM_UP_MINUTES: u8 = 10;
const COOL_DOWN_MINUTES: u8 = 10;

/// Builds weekly training plans.
#[derive(Debug, Clone, Default)]
pub struct PlanGenerator {
    settings: PlannerSettings,
}

impl PlanGenerator {
    /// Create a generator.
    pub fn new(settings: PlannerSettings) -> Self {
        Self { settings }
    }

    /// Create a generator from application configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.planner.clone())
    }

    /// Active settings.
    pub fn settings(&self) -> &PlannerSettings {
        &self.settings
    }

    /// Focus of each session for a training frequency.
    pub fn session_layout(frequency: u8) -> Vec<FocusCategory> {
        let count = (frequency as usize).clamp(MIN_SESSIONS, SESSION_ORDER.len());
        SESSION_ORDER[..count].to_vec()
    }

    /// Layout of a deload week. The last optional session becomes active
    /// recovery; with only the mandatory sessions there is no slot for it.
    pub fn recovery_layout(frequency: u8) -> Vec<FocusCategory> {
        let mut layout = Self::session_layout(frequency);
        if layout.len() > MIN_SESSIONS && !layout.contains(&FocusCategory::ActiveRecovery) {
            if let Some(last) = layout.last_mut() {
                *last = FocusCategory::ActiveRecovery;
            }
        }
        layout
    }

    /// Whether a deload week at this frequency includes active recovery.
    pub fn has_recovery_slot(frequency: u8) -> bool {
        Self::recovery_layout(frequency).contains(&FocusCategory::ActiveRecovery)
    }

    /// Profile-only plan used for week 1 or when there is no history.
    pub fn baseline(&self, profile: &AthleteProfile, week: u32) -> CoachResult<TrainingPlan> {
        self.generate(profile, None, week, None)
    }

    /// Generate the plan for `week`.
    ///
    /// `decision` is the adaptation of results up to the previous week and
    /// `previous` the plan it adapts. Without a decision the baseline plan
    /// is produced.
    pub fn generate(
        &self,
        profile: &AthleteProfile,
        decision: Option<&AdaptationDecision>,
        week: u32,
        previous: Option<&TrainingPlan>,
    ) -> CoachResult<TrainingPlan> {
        if week == 0 {
            return Err(CoachError::InvalidWeek(week));
        }
        profile.validate()?;
        for owner in decision
            .map(|d| d.athlete_id)
            .into_iter()
            .chain(previous.map(|p| p.athlete_id))
        {
            if owner != profile.id {
                return Err(CoachError::AthleteMismatch {
                    expected: profile.id,
                    found: owner,
                });
            }
        }

        let template = SportTemplate::resolve(profile.sport, self.settings.strict_sport_templates)?;
        let directive = decision.map(|d| d.directive());
        let frequency = profile.training_frequency;

        if directive == Some(AdjustmentDirection::Maintain) {
            if let Some(prev) = previous.filter(|p| reusable(p, template, frequency)) {
                tracing::info!(athlete = %profile.id, week, "Repeating previous plan");
                return Ok(TrainingPlan {
                    week,
                    name: plan_name(week),
                    theme: PeriodizationTheme::for_week(week),
                    directive,
                    ..prev.clone()
                });
            }
        }

        let (intensity_factor, volume_factor) = self.next_factors(previous, directive);
        let held_volume = previous.map(|p| p.volume_factor).unwrap_or(1.0);
        let mut emphasis = match directive {
            Some(AdjustmentDirection::Increase) | Some(AdjustmentDirection::Decrease) => {
                decision.map(|d| d.emphasis.clone()).unwrap_or_default()
            }
            _ => Vec::new(),
        };

        let layout = if directive == Some(AdjustmentDirection::Decrease)
            && emphasis.contains(&FocusCategory::ActiveRecovery)
        {
            Self::recovery_layout(frequency)
        } else {
            Self::session_layout(frequency)
        };
        emphasis.retain(|focus| layout.contains(focus));

        let sessions: Vec<TrainingSession> = layout
            .iter()
            .enumerate()
            .map(|(index, focus)| {
                let emphasized = emphasis.contains(focus);
                // Emphasis adds work only on an increase. On a decrease it
                // softens the cut, never past the previous week's volume.
                let (volume, bonus) = match directive {
                    Some(AdjustmentDirection::Increase) => (volume_factor, emphasized),
                    Some(AdjustmentDirection::Decrease) if emphasized => (
                        volume_factor + (held_volume - volume_factor).max(0.0) * EMPHASIS_CUT_SHARE,
                        false,
                    ),
                    _ => (volume_factor, false),
                };
                self.build_session(index, *focus, profile, template, intensity_factor, volume, bonus)
            })
            .collect();

        let plan = TrainingPlan {
            athlete_id: profile.id,
            week,
            name: plan_name(week),
            theme: PeriodizationTheme::for_week(week),
            template,
            intensity_factor,
            volume_factor,
            directive,
            emphasis,
            sessions,
        };

        tracing::info!(
            athlete = %profile.id,
            week,
            directive = ?plan.directive,
            sessions = plan.sessions.len(),
            volume_minutes = plan.total_volume_minutes(),
            "Generated training plan"
        );

        Ok(plan)
    }

    /// Factors for the next plan after applying a directive.
    fn next_factors(
        &self,
        previous: Option<&TrainingPlan>,
        directive: Option<AdjustmentDirection>,
    ) -> (f32, f32) {
        let s = &self.settings;
        let (intensity, volume) = previous
            .map(|p| (p.intensity_factor, p.volume_factor))
            .unwrap_or((1.0, 1.0));

        match directive {
            Some(AdjustmentDirection::Increase) => (
                (intensity * (1.0 + s.increase_step)).min(s.max_intensity_factor),
                volume,
            ),
            Some(AdjustmentDirection::Decrease) => (
                (intensity * (1.0 - s.decrease_step)).max(s.min_intensity_factor),
                (volume * (1.0 - s.volume_decrease_step)).max(s.min_volume_factor),
            ),
            Some(AdjustmentDirection::Maintain) | None => (intensity, volume),
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn build_session(
        &self,
        index: usize,
        focus: FocusCategory,
        profile: &AthleteProfile,
        template: SportTemplate,
        intensity_factor: f32,
        volume: f32,
        bonus: bool,
    ) -> TrainingSession {
        let level = profile.fitness_level;
        let day = (index % profile.training_frequency as usize) as u8 + 1;

        let mut cap = level.intensity_cap_pct();
        if profile.has_injuries {
            cap *= 1.0 - self.settings.injury_cap_reduction;
        }
        let intensity_pct = (level.base_intensity_pct() * focus.intensity_factor() * intensity_factor)
            .min(cap)
            .round() as u8;

        let duration_bonus = if bonus {
            1.0 + self.settings.emphasis_volume_bonus
        } else {
            1.0
        };
        let main_minutes =
            (level.base_main_minutes() * focus.duration_factor() * volume * duration_bonus).round() as u16;

        let params = SportTemplate::base_parameters(focus, level);
        let experience_factor = (0.6 + 0.08 * profile.years_experience as f32).min(1.0);
        let age_factor = if profile.age >= 30 { 0.9 } else { 1.0 };
        let sets = (params.sets as f32 * experience_factor * age_factor * volume)
            .round()
            .max(1.0) as u8
            + bonus as u8;

        let exercises = template
            .exercises(focus, level)
            .iter()
            .map(|name| ExercisePrescription {
                name: name.to_string(),
                sets,
                reps: params.reps,
                rest_seconds: params.rest_seconds,
            })
            .collect();

        TrainingSession {
            order: index as u8 + 1,
            day,
            name: format!("Day {} - {}", day, focus),
            focus,
            intensity_pct,
            intensity_level: IntensityLevel::from_pct(intensity_pct),
            warm_up_minutes: WARM_UP_MINUTES,
            main_minutes,
            cool_down_minutes: COOL_DOWN_MINUTES,
            exercises,
        }
    }
}

fn plan_name(week: u32) -> String {
    format!("Week {} - {} Focus", week, PeriodizationTheme::for_week(week))
}

/// A previous plan can be repeated only if it still fits the profile.
fn reusable(previous: &TrainingPlan, template: SportTemplate, frequency: u8) -> bool {
    let matches = |layout: Vec<FocusCategory>| {
        previous.sessions.len() == layout.len()
            && previous.sessions.iter().zip(&layout).all(|(s, f)| s.focus == *f)
    };
    previous.template == template
        && (matches(PlanGenerator::session_layout(frequency))
            || matches(PlanGenerator::recovery_layout(frequency)))
}
