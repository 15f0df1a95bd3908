//! Unit tests for trend classification and load adjustment.

use trainadapt::adaptation::{RiskFlag, TrackingState};
use trainadapt::config::AdaptationSettings;
use trainadapt::{
    AdaptationEngine, AdjustmentDirection, AthleteProfile, FitnessLevel, FocusCategory, Sex,
    Sport, TestResult, TestResultLog, TestType, TrendDirection,
};
use uuid::Uuid;

fn athlete(sport: Sport, age: u8) -> AthleteProfile {
    AthleteProfile {
        id: Uuid::new_v4(),
        age,
        height_cm: 185.0,
        weight_kg: 82.0,
        sex: Sex::Male,
        sport,
        years_experience: 5,
        fitness_level: FitnessLevel::Advanced,
        training_frequency: 5,
        has_injuries: false,
    }
}

fn record(log: &mut TestResultLog, week: u32, test_type: TestType, value: f64) {
    let id = log.athlete_id();
    log.record(TestResult::new(id, week, test_type, value)).unwrap();
}

#[test]
fn test_single_results_report_baseline_state() {
    let engine = AdaptationEngine::default();
    let p = athlete(Sport::Football, 24);
    let mut log = TestResultLog::new(p.id);
    for test_type in TestType::ALL {
        let value = match test_type {
            TestType::VerticalJump => 55.0,
            TestType::Sprint20m => 3.1,
            TestType::TTest => 9.8,
            TestType::HeartRateRecovery => 115.0,
        };
        record(&mut log, 1, test_type, value);
    }

    let decision = engine.evaluate(&p, &log, 1).unwrap();
    for test_type in TestType::ALL {
        assert_eq!(decision.state(test_type), TrackingState::Baseline);
        assert_ne!(decision.state(test_type), TrackingState::Trending);
    }
    assert_eq!(decision.directive(), AdjustmentDirection::Maintain);
}

#[test]
fn test_recovery_decline_takes_precedence() {
    let engine = AdaptationEngine::default();
    let p = athlete(Sport::Running, 28);
    let mut log = TestResultLog::new(p.id);
    record(&mut log, 1, TestType::VerticalJump, 40.0);
    record(&mut log, 1, TestType::Sprint20m, 3.40);
    record(&mut log, 1, TestType::HeartRateRecovery, 110.0);
    record(&mut log, 2, TestType::VerticalJump, 44.0);
    record(&mut log, 2, TestType::Sprint20m, 3.20);
    // 3.6% higher recovery heart rate is a decline.
    record(&mut log, 2, TestType::HeartRateRecovery, 114.0);

    let decision = engine.evaluate(&p, &log, 2).unwrap();
    assert_eq!(
        decision.trend(TestType::Sprint20m).unwrap().direction,
        Some(TrendDirection::Improving)
    );
    assert_eq!(decision.directive(), AdjustmentDirection::Decrease);
    assert_eq!(decision.risk, RiskFlag::High);
    assert!(decision.emphasis.contains(&FocusCategory::ActiveRecovery));
    assert!(decision.rationale.contains("heart_rate_recovery"));
}

#[test]
fn test_custom_dead_band() {
    let engine = AdaptationEngine::new(AdaptationSettings {
        dead_band_pct: 1.0,
        ..Default::default()
    });
    assert_eq!(engine.classify(2.0), TrendDirection::Improving);
    assert_eq!(engine.classify(-1.0), TrendDirection::Stagnant);
}

#[test]
fn test_no_critical_tests_configured() {
    let engine = AdaptationEngine::new(AdaptationSettings {
        capacity_critical: Vec::new(),
        ..Default::default()
    });
    let p = athlete(Sport::Basketball, 24);
    let mut log = TestResultLog::new(p.id);
    record(&mut log, 1, TestType::VerticalJump, 50.0);
    record(&mut log, 1, TestType::TTest, 10.0);
    record(&mut log, 1, TestType::HeartRateRecovery, 110.0);
    record(&mut log, 2, TestType::VerticalJump, 54.0);
    record(&mut log, 2, TestType::TTest, 9.5);
    record(&mut log, 2, TestType::HeartRateRecovery, 120.0);

    let decision = engine.evaluate(&p, &log, 2).unwrap();
    assert_eq!(decision.directive(), AdjustmentDirection::Increase);
    assert_eq!(decision.risk, RiskFlag::Elevated);
}

#[test]
fn test_decision_serializes_snake_case() {
    let engine = AdaptationEngine::default();
    let p = athlete(Sport::Tennis, 24);
    let log = TestResultLog::new(p.id);
    let decision = engine.evaluate(&p, &log, 1).unwrap();
    let json = serde_json::to_value(&decision).unwrap();
    assert_eq!(json["adjustment"]["direction"], "maintain");
    assert_eq!(json["risk"], "none");
    assert_eq!(json["trends"][0]["state"], "no_data");
}
