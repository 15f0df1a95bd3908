//! Unit tests for weekly plan generation.

use trainadapt::plans::{IntensityLevel, PeriodizationTheme, Reps, SportTemplate};
use trainadapt::{AthleteProfile, FitnessLevel, FocusCategory, PlanGenerator, Sex, Sport};
use uuid::Uuid;

fn athlete(level: FitnessLevel, frequency: u8) -> AthleteProfile {
    AthleteProfile {
        id: Uuid::new_v4(),
        age: 21,
        height_cm: 170.0,
        weight_kg: 65.0,
        sex: Sex::Female,
        sport: Sport::Swimming,
        years_experience: 3,
        fitness_level: level,
        training_frequency: frequency,
        has_injuries: false,
    }
}

#[test]
fn test_every_frequency_covers_mandatory_categories() {
    let generator = PlanGenerator::default();
    for level in [
        FitnessLevel::Beginner,
        FitnessLevel::Intermediate,
        FitnessLevel::Advanced,
        FitnessLevel::Elite,
    ] {
        for frequency in 1..=7 {
            let plan = generator.baseline(&athlete(level, frequency), 1).unwrap();
            assert!(plan.sessions.len() >= 3);
            assert_eq!(plan.sessions.len(), (frequency as usize).max(3));
            assert!(plan.covers_mandatory());
            assert!(plan.sessions.iter().all(|s| s.day >= 1 && s.day <= frequency));
        }
    }
}

#[test]
fn test_extra_sessions_add_distinct_foci() {
    let generator = PlanGenerator::default();
    let plan = generator.baseline(&athlete(FitnessLevel::Intermediate, 6), 1).unwrap();
    let foci: Vec<FocusCategory> = plan.sessions.iter().map(|s| s.focus).collect();
    assert_eq!(
        foci,
        vec![
            FocusCategory::HighIntensity,
            FocusCategory::AerobicCapacity,
            FocusCategory::SportSpecific,
            FocusCategory::Strength,
            FocusCategory::Mobility,
            FocusCategory::ActiveRecovery,
        ]
    );
}

#[test]
fn test_lower_fitness_means_lower_load() {
    let generator = PlanGenerator::default();
    let beginner = generator.baseline(&athlete(FitnessLevel::Beginner, 4), 1).unwrap();
    let advanced = generator.baseline(&athlete(FitnessLevel::Advanced, 4), 1).unwrap();

    assert!(beginner.total_volume_minutes() < advanced.total_volume_minutes());
    assert!(beginner.peak_intensity_pct() < advanced.peak_intensity_pct());
    assert!(beginner.total_sets() < advanced.total_sets());
}

#[test]
fn test_session_details() {
    let generator = PlanGenerator::default();
    let plan = generator.baseline(&athlete(FitnessLevel::Intermediate, 3), 1).unwrap();

    assert_eq!(plan.template, SportTemplate::Swimming);
    assert_eq!(plan.theme, PeriodizationTheme::Strength);

    let aerobic = &plan.sessions[1];
    assert_eq!(aerobic.name, "Day 2 - Aerobic Capacity");
    assert_eq!(aerobic.intensity_pct, 63);
    assert_eq!(aerobic.intensity_level, IntensityLevel::Moderate);
    assert_eq!(aerobic.exercises[0].name, "swimming_sets");
    assert_eq!(aerobic.exercises[0].reps, Reps::Timed { seconds: 300 });
    assert_eq!(aerobic.total_minutes(), 20 + aerobic.main_minutes);

    let drills = &plan.sessions[2];
    assert_eq!(drills.focus, FocusCategory::SportSpecific);
    assert!(drills.exercises.iter().any(|e| e.name == "flip_turns"));
}

#[test]
fn test_plan_name_follows_theme() {
    let generator = PlanGenerator::default();
    let p = athlete(FitnessLevel::Intermediate, 3);
    assert_eq!(generator.baseline(&p, 2).unwrap().name, "Week 2 - HIIT Focus");
    assert_eq!(generator.baseline(&p, 7).unwrap().name, "Week 7 - Endurance Focus");
}
