//! Unit tests for the test result log and baselines.

use trainadapt::{CoachError, TestResult, TestResultLog, TestType};
use uuid::Uuid;

#[test]
fn test_first_result_creates_baseline() {
    let id = Uuid::new_v4();
    let mut log = TestResultLog::new(id);

    let update = log.record(TestResult::new(id, 1, TestType::VerticalJump, 42.0)).unwrap();
    assert!(update.created);
    assert_eq!(update.improvement_from_baseline, 0.0);
    assert_eq!(update.improvement_from_last_test, None);
    assert_eq!(update.baseline.reference_value, 42.0);
}

#[test]
fn test_baseline_reference_stays_while_best_moves() {
    let id = Uuid::new_v4();
    let mut log = TestResultLog::new(id);
    log.record(TestResult::new(id, 1, TestType::TTest, 11.0)).unwrap();
    log.record(TestResult::new(id, 2, TestType::TTest, 10.5)).unwrap();
    let update = log.record(TestResult::new(id, 3, TestType::TTest, 10.8)).unwrap();

    assert!(!update.new_best);
    let baseline = log.baseline(TestType::TTest).unwrap();
    assert_eq!(baseline.reference_value, 11.0);
    assert_eq!(baseline.best_value, 10.5);
    assert_eq!(baseline.best_week, 2);
    assert_eq!(baseline.tests_count, 3);
}

#[test]
fn test_out_of_order_result_rejected() {
    let id = Uuid::new_v4();
    let mut log = TestResultLog::new(id);
    log.record(TestResult::new(id, 3, TestType::Sprint20m, 3.2)).unwrap();

    let err = log
        .record(TestResult::new(id, 2, TestType::Sprint20m, 3.3))
        .unwrap_err();
    assert_eq!(err, CoachError::OutOfOrderResult { week: 2, latest: 3 });
    assert_eq!(log.len(), 1);
}

#[test]
fn test_in_order_results_accepted() {
    let id = Uuid::new_v4();
    let mut log = TestResultLog::new(id);
    log.record(TestResult::new(id, 2, TestType::Sprint20m, 3.3)).unwrap();
    log.record(TestResult::new(id, 3, TestType::Sprint20m, 3.2)).unwrap();
    // Same week, other test type.
    log.record(TestResult::new(id, 3, TestType::TTest, 10.1)).unwrap();
    assert_eq!(log.weeks(), vec![2, 3]);
}

#[test]
fn test_duplicate_rejected_log_unchanged() {
    let id = Uuid::new_v4();
    let mut log = TestResultLog::new(id);
    log.record(TestResult::new(id, 1, TestType::HeartRateRecovery, 118.0)).unwrap();
    let before = log.clone();

    let err = log
        .record(TestResult::new(id, 1, TestType::HeartRateRecovery, 112.0))
        .unwrap_err();
    assert!(matches!(err, CoachError::DuplicateResult { week: 1, .. }));
    assert_eq!(log, before);
}

#[test]
fn test_invalid_values_rejected() {
    let id = Uuid::new_v4();
    let mut log = TestResultLog::new(id);
    assert!(matches!(
        log.record(TestResult::new(id, 1, TestType::VerticalJump, f64::NAN)),
        Err(CoachError::InvalidResult(_))
    ));
    assert!(matches!(
        log.record(TestResult::new(id, 1, TestType::VerticalJump, -3.0)),
        Err(CoachError::InvalidResult(_))
    ));
    assert_eq!(
        log.record(TestResult::new(id, 0, TestType::VerticalJump, 40.0)),
        Err(CoachError::InvalidWeek(0))
    );
    assert!(log.is_empty());
}
