//! Performance report over a span of weeks.
//!
//! Summarizes each test type's results in the span:
//! - improvement from the baseline reference
//! - mean week-over-week change
//! - linear trend slope, normalized to percent of the mean
//! - consistency of the week-over-week changes
//!
//! and derives risk factors, next-period goals and short insights. Baselines
//! with a short-term target add an overall score and strengths and
//! weaknesses by target progress.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::adaptation::RiskFlag;
use crate::config::AdaptationSettings;
use crate::error::{CoachError, CoachResult};
use crate::performance::baseline::round2;
use crate::performance::{Baseline, TargetHorizon, TestResultLog, TestType};

/// Target improvement for next-period goals (fraction).
const GOAL_IMPROVEMENT: f64 = 0.03;

/// Goal horizon in weeks.
const GOAL_HORIZON_WEEKS: u32 = 4;

/// Target progress at or above which a test is a strength.
const STRENGTH_PROGRESS_PCT: f64 = 80.0;

/// Target progress below which a test is a weakness.
const WEAKNESS_PROGRESS_PCT: f64 = 30.0;

/// Summary of one test type within the span.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSummary {
    pub test_type: TestType,
    /// Results in the span
    pub count: usize,
    /// Baseline reference value (first ever recorded)
    pub baseline_value: f64,
    /// Best value in the span
    pub best_value: f64,
    /// Week of the best value
    pub best_week: u32,
    /// Latest value in the span
    pub latest_value: f64,
    /// Week of the latest value
    pub latest_week: u32,
    /// Latest value against the baseline, positive when improved
    pub improvement_from_baseline_pct: f64,
    /// Mean change against each result's predecessor
    pub mean_change_pct: Option<f64>,
    /// Least-squares slope as percent of mean per test, positive when improving
    pub trend_slope_pct: f64,
    /// 0-100, higher when week-over-week changes are steady
    pub consistency: f64,
}

/// Kind of risk found in a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskKind {
    /// Most week-over-week changes are sharp drops
    PerformanceDecline,
    /// A capacity-critical test is below its baseline
    RecoveryDecline,
}

/// A risk factor with severity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFactor {
    pub kind: RiskKind,
    pub severity: RiskFlag,
    pub description: String,
}

/// Suggested target for the next period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalSuggestion {
    pub test_type: TestType,
    pub metric: String,
    pub unit: String,
    pub current_value: f64,
    pub target_value: f64,
    pub horizon_weeks: u32,
}

/// Progress of one test toward its short-term target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetStanding {
    pub test_type: TestType,
    pub metric: String,
    /// 0-100
    pub progress_pct: f64,
    /// Best value against the baseline reference
    pub improvement_pct: f64,
}

/// Target summary over the athlete's baselines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselinesSummary {
    pub total_baselines: usize,
    /// Baselines with a short-term target
    pub with_targets: usize,
    pub targets_met: usize,
    /// Mean short-term progress over targeted baselines
    pub average_progress_pct: f64,
}

/// Report over an inclusive week span.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceReport {
    pub athlete_id: Uuid,
    pub from_week: u32,
    pub to_week: u32,
    /// Results in the span
    pub tests_completed: usize,
    /// Mean of all week-over-week changes in the span
    pub average_change_pct: f64,
    pub metrics: Vec<MetricSummary>,
    pub risk_factors: Vec<RiskFactor>,
    pub goals: Vec<GoalSuggestion>,
    pub insights: Vec<String>,
    /// 0-100, mean short-term target progress
    pub overall_score: f64,
    pub strengths: Vec<TargetStanding>,
    pub weaknesses: Vec<TargetStanding>,
    pub baselines_summary: BaselinesSummary,
}

impl PerformanceReport {
    /// Summary for a test type.
    pub fn metric(&self, test_type: TestType) -> Option<&MetricSummary> {
        self.metrics.iter().find(|m| m.test_type == test_type)
    }

    /// Whether a risk of this kind was found.
    pub fn has_risk(&self, kind: RiskKind) -> bool {
        self.risk_factors.iter().any(|r| r.kind == kind)
    }
}

/// Builds performance reports.
#[derive(Debug, Clone, Default)]
pub struct ReportBuilder {
    settings: AdaptationSettings,
}

impl ReportBuilder {
    pub fn new(settings: AdaptationSettings) -> Self {
        Self { settings }
    }

    /// Build the report for weeks `from_week..=to_week`.
    pub fn build(
        &self,
        log: &TestResultLog,
        from_week: u32,
        to_week: u32,
    ) -> CoachResult<PerformanceReport> {
        if from_week == 0 {
            return Err(CoachError::InvalidWeek(from_week));
        }
        if to_week < from_week {
            return Err(CoachError::InvalidWeek(to_week));
        }

        let in_span = log.results_between(from_week, to_week);
        if in_span.is_empty() {
            return Err(CoachError::EmptySpan { from_week, to_week });
        }

        let mut metrics = Vec::new();
        let mut all_changes = Vec::new();
        for test_type in TestType::ALL {
            let history = log.history(test_type);
            let changes: Vec<f64> = history
                .windows(2)
                .filter(|pair| pair[1].week >= from_week && pair[1].week <= to_week)
                .map(|pair| test_type.improvement_pct(pair[0].value, pair[1].value))
                .collect();
            all_changes.extend_from_slice(&changes);

            if let Some(summary) = self.summarize(log, test_type, from_week, to_week, &changes) {
                metrics.push(summary);
            }
        }

        let average_change_pct = mean(&all_changes).map(round2).unwrap_or(0.0);
        let risk_factors = self.risk_factors(&metrics, &all_changes);
        let goals: Vec<GoalSuggestion> = metrics.iter().map(goal_for).collect();
        let insights = insights(&metrics, in_span.len(), average_change_pct);

        let targeted: Vec<&Baseline> = log
            .baselines()
            .filter(|b| b.targets.get(TargetHorizon::ShortTerm).is_some())
            .collect();
        let baselines_summary = baselines_summary(log.baselines().count(), &targeted);
        let overall_score = baselines_summary.average_progress_pct.min(100.0);
        let (strengths, weaknesses) = strengths_weaknesses(&targeted);

        tracing::info!(
            athlete = %log.athlete_id(),
            from_week,
            to_week,
            tests = in_span.len(),
            risks = risk_factors.len(),
            "Built performance report"
        );

        Ok(PerformanceReport {
            athlete_id: log.athlete_id(),
            from_week,
            to_week,
            tests_completed: in_span.len(),
            average_change_pct,
            metrics,
            risk_factors,
            goals,
            insights,
            overall_score,
            strengths,
            weaknesses,
            baselines_summary,
        })
    }

    fn summarize(
        &self,
        log: &TestResultLog,
        test_type: TestType,
        from_week: u32,
        to_week: u32,
        changes: &[f64],
    ) -> Option<MetricSummary> {
        let results: Vec<_> = log
            .history(test_type)
            .into_iter()
            .filter(|r| r.week >= from_week && r.week <= to_week)
            .collect();
        let first = results.first()?;
        let latest = results.last()?;
        let baseline_value = log
            .baseline(test_type)
            .map(|b| b.reference_value)
            .unwrap_or(first.value);

        let mut best = *first;
        for result in &results[1..] {
            if test_type.is_better(result.value, best.value) {
                best = *result;
            }
        }

        let values: Vec<f64> = results.iter().map(|r| r.value).collect();

        Some(MetricSummary {
            test_type,
            count: results.len(),
            baseline_value,
            best_value: best.value,
            best_week: best.week,
            latest_value: latest.value,
            latest_week: latest.week,
            improvement_from_baseline_pct: round2(test_type.improvement_pct(baseline_value, latest.value)),
            mean_change_pct: mean(changes).map(round2),
            trend_slope_pct: round2(trend_slope_pct(test_type, &values)),
            consistency: consistency(changes),
        })
    }

    fn risk_factors(&self, metrics: &[MetricSummary], changes: &[f64]) -> Vec<RiskFactor> {
        let mut risks = Vec::new();

        let sharp = changes
            .iter()
            .filter(|c| **c < -self.settings.sharp_decline_pct)
            .count();
        if !changes.is_empty() && sharp * 2 > changes.len() {
            risks.push(RiskFactor {
                kind: RiskKind::PerformanceDecline,
                severity: RiskFlag::High,
                description: "Multiple performance metrics showing decline".to_string(),
            });
        }

        for metric in metrics {
            if self.settings.capacity_critical.contains(&metric.test_type)
                && metric.improvement_from_baseline_pct < -self.settings.dead_band_pct
            {
                risks.push(RiskFactor {
                    kind: RiskKind::RecoveryDecline,
                    severity: RiskFlag::High,
                    description: format!(
                        "{} is {:.1}% worse than baseline - reduce load and prioritize recovery",
                        metric.test_type, -metric.improvement_from_baseline_pct
                    ),
                });
            }
        }

        risks
    }
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Least-squares slope over sequence index, as percent of the mean value.
fn trend_slope_pct(test_type: TestType, values: &[f64]) -> f64 {
    let n = values.len() as f64;
    if values.len() < 2 {
        return 0.0;
    }

    let sum_x: f64 = (0..values.len()).map(|x| x as f64).sum();
    let sum_y: f64 = values.iter().sum();
    let sum_xy: f64 = values.iter().enumerate().map(|(x, y)| x as f64 * y).sum();
    let sum_x2: f64 = (0..values.len()).map(|x| (x * x) as f64).sum();

    let denominator = n * sum_x2 - sum_x * sum_x;
    let mean_y = sum_y / n;
    if denominator == 0.0 || mean_y == 0.0 {
        return 0.0;
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denominator;
    let pct = slope / mean_y * 100.0;
    if test_type.lower_is_better() {
        -pct
    } else {
        pct
    }
}

/// 100 minus ten times the variance of the changes, floored at 0.
fn consistency(changes: &[f64]) -> f64 {
    let Some(avg) = mean(changes).filter(|_| changes.len() >= 2) else {
        return 100.0;
    };
    let variance = changes.iter().map(|c| (c - avg).powi(2)).sum::<f64>() / changes.len() as f64;
    round2((100.0 - variance * 10.0).max(0.0))
}

fn goal_for(metric: &MetricSummary) -> GoalSuggestion {
    let factor = if metric.test_type.lower_is_better() {
        1.0 - GOAL_IMPROVEMENT
    } else {
        1.0 + GOAL_IMPROVEMENT
    };
    GoalSuggestion {
        test_type: metric.test_type,
        metric: metric.test_type.default_metric().to_string(),
        unit: metric.test_type.default_unit().to_string(),
        current_value: metric.latest_value,
        target_value: round2(metric.latest_value * factor),
        horizon_weeks: GOAL_HORIZON_WEEKS,
    }
}

fn baselines_summary(total_baselines: usize, targeted: &[&Baseline]) -> BaselinesSummary {
    let progress: Vec<f64> = targeted
        .iter()
        .map(|b| b.target_progress(TargetHorizon::ShortTerm))
        .collect();
    BaselinesSummary {
        total_baselines,
        with_targets: targeted.len(),
        targets_met: targeted
            .iter()
            .filter(|b| b.target_met(TargetHorizon::ShortTerm))
            .count(),
        average_progress_pct: mean(&progress).map(round2).unwrap_or(0.0),
    }
}

fn strengths_weaknesses(targeted: &[&Baseline]) -> (Vec<TargetStanding>, Vec<TargetStanding>) {
    let mut strengths = Vec::new();
    let mut weaknesses = Vec::new();
    for baseline in targeted {
        let progress_pct = baseline.target_progress(TargetHorizon::ShortTerm);
        let standing = TargetStanding {
            test_type: baseline.test_type,
            metric: baseline.test_type.default_metric().to_string(),
            progress_pct,
            improvement_pct: baseline.current_improvement(),
        };
        if progress_pct >= STRENGTH_PROGRESS_PCT {
            strengths.push(standing);
        } else if progress_pct < WEAKNESS_PROGRESS_PCT {
            weaknesses.push(standing);
        }
    }
    (strengths, weaknesses)
}

fn insights(metrics: &[MetricSummary], tests: usize, average_change_pct: f64) -> Vec<String> {
    let mut insights = Vec::new();

    if tests >= 2 {
        let line = if average_change_pct > 2.0 {
            "Excellent performance improvements observed this period"
        } else if average_change_pct > 0.0 {
            "Positive performance trend maintained"
        } else {
            "Performance plateaued - consider training adjustments"
        };
        insights.push(line.to_string());
    }

    for metric in metrics {
        if metric.count > 1 && metric.best_week == metric.latest_week {
            insights.push(format!(
                "New best {} of {} in week {}",
                metric.test_type, metric.best_value, metric.best_week
            ));
        }
    }

    insights
}
