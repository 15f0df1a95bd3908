//! Integration tests for configuration loading.

use trainadapt::config::{load_config_from, save_config_to, ConfigError};
use trainadapt::{
    AppConfig, AthleteProfile, AthleteSnapshot, Coach, CoachError, FitnessLevel, Sex, Sport,
    TestResultLog,
};
use uuid::Uuid;

fn volleyball_player() -> AthleteProfile {
    AthleteProfile {
        id: Uuid::new_v4(),
        age: 26,
        height_cm: 195.0,
        weight_kg: 88.0,
        sex: Sex::Male,
        sport: Sport::Volleyball,
        years_experience: 9,
        fitness_level: FitnessLevel::Advanced,
        training_frequency: 4,
        has_injuries: false,
    }
}

#[test]
fn test_strict_templates_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[planner]\nstrict_sport_templates = true\n").unwrap();

    let config = load_config_from(&path).unwrap();
    let coach = Coach::new(&config);
    let p = volleyball_player();
    let log = TestResultLog::new(p.id);

    assert_eq!(
        coach.generate_plan(&AthleteSnapshot::new(&p, &log), 1),
        Err(CoachError::UnsupportedSport(Sport::Volleyball))
    );
    assert!(Coach::default()
        .generate_plan(&AthleteSnapshot::new(&p, &log), 1)
        .is_ok());
}

#[test]
fn test_saved_config_drives_coach() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let mut config = AppConfig::default();
    config.planner.injury_cap_reduction = 0.2;
    save_config_to(&config, &path).unwrap();

    let loaded = load_config_from(&path).unwrap();
    assert_eq!(loaded.planner.injury_cap_reduction, 0.2);

    let mut p = volleyball_player();
    p.has_injuries = true;
    let log = TestResultLog::new(p.id);
    let reduced_cap = Coach::new(&loaded)
        .generate_plan(&AthleteSnapshot::new(&p, &log), 1)
        .unwrap();
    let default_cap = Coach::default()
        .generate_plan(&AthleteSnapshot::new(&p, &log), 1)
        .unwrap();
    assert!(reduced_cap.peak_intensity_pct() < default_cap.peak_intensity_pct());
}

#[test]
fn test_invalid_config_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[adaptation]\ndead_band_pct = -1.0\n").unwrap();
    assert!(matches!(
        load_config_from(&path),
        Err(ConfigError::InvalidValue(_))
    ));
}
