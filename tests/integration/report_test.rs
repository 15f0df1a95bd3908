//! Integration tests for performance reports and forecasts.

use trainadapt::analysis::{Quality, RiskKind};
use trainadapt::{
    AthleteProfile, AthleteSnapshot, Coach, CoachError, FitnessLevel, PerformanceTargets, Sex,
    Sport, TestResult, TestResultLog, TestType,
};
use uuid::Uuid;

fn athlete() -> AthleteProfile {
    AthleteProfile {
        id: Uuid::new_v4(),
        age: 38,
        height_cm: 168.0,
        weight_kg: 61.0,
        sex: Sex::Female,
        sport: Sport::Running,
        years_experience: 12,
        fitness_level: FitnessLevel::Advanced,
        training_frequency: 5,
        has_injuries: false,
    }
}

fn season(p: &AthleteProfile) -> TestResultLog {
    let entries = [
        (1, TestType::Sprint20m, 3.60),
        (1, TestType::HeartRateRecovery, 108.0),
        (2, TestType::Sprint20m, 3.52),
        (2, TestType::HeartRateRecovery, 106.0),
        (3, TestType::Sprint20m, 3.47),
        (3, TestType::HeartRateRecovery, 107.0),
        (4, TestType::Sprint20m, 3.41),
        (4, TestType::HeartRateRecovery, 104.0),
    ];
    TestResultLog::from_results(
        p.id,
        entries
            .iter()
            .map(|(w, t, v)| TestResult::new(p.id, *w, *t, *v)),
    )
    .unwrap()
}

#[test]
fn test_report_over_season() {
    let coach = Coach::default();
    let p = athlete();
    let log = season(&p);
    let report = coach
        .build_report(&AthleteSnapshot::new(&p, &log), 1, 4)
        .unwrap();

    assert_eq!(report.tests_completed, 8);
    assert_eq!(report.metrics.len(), 2);
    assert!(report.risk_factors.is_empty());

    let sprint = report.metric(TestType::Sprint20m).unwrap();
    assert_eq!(sprint.best_value, 3.41);
    assert_eq!(sprint.best_week, 4);
    assert!(sprint.improvement_from_baseline_pct > 5.0);
    assert!(sprint.trend_slope_pct > 0.0);

    let goal = report
        .goals
        .iter()
        .find(|g| g.test_type == TestType::Sprint20m)
        .unwrap();
    assert!(goal.target_value < goal.current_value);
}

#[test]
fn test_report_span_without_results() {
    let coach = Coach::default();
    let p = athlete();
    let log = season(&p);
    let err = coach
        .build_report(&AthleteSnapshot::new(&p, &log), 5, 8)
        .unwrap_err();
    assert!(matches!(err, CoachError::EmptySpan { from_week: 5, to_week: 8 }));
}

#[test]
fn test_report_flags_recovery_decline() {
    let coach = Coach::default();
    let p = athlete();
    let mut log = season(&p);
    log.record(TestResult::new(p.id, 5, TestType::HeartRateRecovery, 116.0))
        .unwrap();
    let report = coach
        .build_report(&AthleteSnapshot::new(&p, &log), 4, 5)
        .unwrap();
    assert!(report.has_risk(RiskKind::RecoveryDecline));
}

#[test]
fn test_analysis_and_forecast_for_season() {
    let coach = Coach::default();
    let p = athlete();
    let log = season(&p);

    let decisions = coach.get_analysis(&AthleteSnapshot::new(&p, &log)).unwrap();
    assert_eq!(decisions.len(), 4);
    assert!(decisions[0].excluded.len() == 2);
    assert!(decisions[3].excluded.is_empty());

    let plans = coach.plan_weeks(&p, &log, 5).unwrap();
    let forecast = coach.forecast(&p, &plans[4], 4).unwrap();
    assert_eq!(forecast.from_week, 5);
    let endurance = forecast.quality(Quality::Endurance).unwrap();
    let flexibility = forecast.quality(Quality::Flexibility).unwrap();
    assert!(endurance.predicted_improvement_pct > flexibility.predicted_improvement_pct);
}

#[test]
fn test_report_scores_target_progress() {
    let coach = Coach::default();
    let p = athlete();
    let mut log = season(&p);

    let sprint = coach
        .set_targets(
            &mut log,
            TestType::Sprint20m,
            PerformanceTargets {
                short_term: Some(3.40),
                long_term: Some(3.20),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(sprint.targets.long_term, Some(3.20));
    coach
        .set_targets(
            &mut log,
            TestType::HeartRateRecovery,
            PerformanceTargets {
                short_term: Some(100.0),
                ..Default::default()
            },
        )
        .unwrap();

    let report = coach.build_report(&AthleteSnapshot::new(&p, &log), 1, 4).unwrap();
    assert_eq!(report.baselines_summary.with_targets, 2);
    assert_eq!(report.baselines_summary.targets_met, 0);
    // sprint 0.19 of 0.20 s, recovery 4 of 8 bpm
    assert_eq!(report.overall_score, 72.5);
    assert_eq!(report.strengths.len(), 1);
    assert_eq!(report.strengths[0].test_type, TestType::Sprint20m);
    assert!(report.weaknesses.is_empty());

    // Lowering the bar meets it; the long-term target is kept.
    let sprint = coach
        .set_targets(
            &mut log,
            TestType::Sprint20m,
            PerformanceTargets {
                short_term: Some(3.45),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(sprint.targets.long_term, Some(3.20));
    let report = coach.build_report(&AthleteSnapshot::new(&p, &log), 1, 4).unwrap();
    assert_eq!(report.baselines_summary.targets_met, 1);
}

#[test]
fn test_targets_require_a_baseline() {
    let coach = Coach::default();
    let p = athlete();
    let mut log = season(&p);
    let result = coach.set_targets(
        &mut log,
        TestType::VerticalJump,
        PerformanceTargets {
            short_term: Some(50.0),
            ..Default::default()
        },
    );
    assert!(matches!(result, Err(CoachError::InsufficientData { .. })));
}
