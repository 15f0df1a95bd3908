//! Unit tests for athlete profile validation.

use trainadapt::{CoachError, FitnessLevel, ProfileInput, Sex, Sport};
use uuid::Uuid;

fn valid_input() -> ProfileInput {
    ProfileInput {
        id: Some(Uuid::new_v4()),
        age: Some(19),
        height_cm: Some(172.5),
        weight_kg: Some(64.0),
        sex: Some(Sex::Female),
        sport: Some(Sport::Tennis),
        years_experience: Some(6),
        fitness_level: Some(FitnessLevel::Advanced),
        training_frequency: Some(5),
        has_injuries: false,
    }
}

fn invalid_field(input: &ProfileInput) -> &'static str {
    match input.validate() {
        Err(CoachError::InvalidProfile { field, .. }) => field,
        other => panic!("expected InvalidProfile, got {:?}", other),
    }
}

#[test]
fn test_valid_input_builds_profile() {
    let profile = valid_input().validate().unwrap();
    assert_eq!(profile.age, 19);
    assert_eq!(profile.sport, Sport::Tennis);
    assert_eq!(profile.training_frequency, 5);
    assert_eq!(profile.bmi(), 21.51);
}

#[test]
fn test_missing_field_is_named() {
    let mut input = valid_input();
    input.sport = None;
    assert_eq!(invalid_field(&input), "sport");
}

#[test]
fn test_out_of_range_values() {
    let mut input = valid_input();
    input.age = Some(-4);
    assert_eq!(invalid_field(&input), "age");

    let mut input = valid_input();
    input.height_cm = Some(320.0);
    assert_eq!(invalid_field(&input), "height_cm");

    let mut input = valid_input();
    input.weight_kg = Some(12.0);
    assert_eq!(invalid_field(&input), "weight_kg");

    let mut input = valid_input();
    input.training_frequency = Some(0);
    assert_eq!(invalid_field(&input), "training_frequency");
}

#[test]
fn test_experience_cannot_exceed_age() {
    let mut input = valid_input();
    input.years_experience = Some(25);
    assert_eq!(invalid_field(&input), "years_experience");
}

#[test]
fn test_input_from_json() {
    let json = r#"{
        "id": "6f1c1f9e-3a44-4a53-9d1c-6a2f3f1f0a11",
        "age": 31,
        "height_cm": 181,
        "weight_kg": 79.5,
        "sex": "male",
        "sport": "cycling",
        "years_experience": 8,
        "fitness_level": "elite",
        "training_frequency": 6
    }"#;
    let input: ProfileInput = serde_json::from_str(json).unwrap();
    let profile = input.validate().unwrap();
    assert_eq!(profile.fitness_level, FitnessLevel::Elite);
    assert!(!profile.has_injuries);
}
