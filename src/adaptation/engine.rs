//! Training load adaptation engine.
//!
//! Each test type moves NoData → Baseline → Trending as results arrive.
//! While trending, the latest value is compared with the first recorded
//! value (the baseline reference, which never moves) and classified against
//! a symmetric dead-band. Per-test trends are then folded into one directive:
//! a declining capacity-critical test forces a decrease, otherwise the strict
//! majority wins and ties maintain.

use super::types::{
    AdaptationDecision, AdjustmentDirection, Exclusion, LoadAdjustment, RiskFlag, TestTrend,
    TrackingState, TrendDirection,
};
use crate::athletes::AthleteProfile;
use crate::config::{AdaptationSettings, AppConfig, PlannerSettings};
use crate::error::{CoachError, CoachResult};
use crate::performance::{TestResultLog, TestType};
use crate::plans::{FocusCategory, PlanGenerator, SportTemplate};

/// Training load adaptation engine.
#[derive(Debug, Clone)]
pub struct AdaptationEngine {
    settings: AdaptationSettings,
    increase_pct: f32,
    decrease_pct: f32,
}

impl Default for AdaptationEngine {
    fn default() -> Self {
        Self::new(AdaptationSettings::default())
    }
}

impl AdaptationEngine {
    /// Create an engine with default planner step sizes.
    pub fn new(settings: AdaptationSettings) -> Self {
        Self::with_steps(settings, &PlannerSettings::default())
    }

    /// Create an engine reporting the planner's step sizes in its adjustments.
    pub fn with_steps(settings: AdaptationSettings, planner: &PlannerSettings) -> Self {
        Self {
            settings,
            increase_pct: planner.increase_step * 100.0,
            decrease_pct: planner.decrease_step * 100.0,
        }
    }

    /// Create an engine from application configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::with_steps(config.adaptation.clone(), &config.planner)
    }

    /// Active settings.
    pub fn settings(&self) -> &AdaptationSettings {
        &self.settings
    }

    /// Focus category trained by a test's quality.
    pub fn focus_for(test_type: TestType) -> FocusCategory {
        match test_type {
            TestType::VerticalJump => FocusCategory::HighIntensity,
            TestType::Sprint20m | TestType::TTest => FocusCategory::SportSpecific,
            TestType::HeartRateRecovery => FocusCategory::AerobicCapacity,
        }
    }

    /// Tests the athlete's sport and age make mandatory.
    pub fn required_tests(&self, profile: &AthleteProfile) -> Vec<TestType> {
        let template = SportTemplate::for_sport(profile.sport).unwrap_or(SportTemplate::General);
        let mut required = template.required_tests().to_vec();
        if profile.age >= self.settings.recovery_check_age
            && !required.contains(&TestType::HeartRateRecovery)
        {
            required.push(TestType::HeartRateRecovery);
        }
        required
    }

    /// Classify a percent change against the dead-band.
    pub fn classify(&self, change_pct: f64) -> TrendDirection {
        let band = self.settings.dead_band_pct;
        if change_pct > band {
            TrendDirection::Improving
        } else if change_pct < -band {
            TrendDirection::Declining
        } else {
            TrendDirection::Stagnant
        }
    }

    /// Assess one test type using results up to and including `week`.
    pub fn assess(&self, log: &TestResultLog, test_type: TestType, week: u32) -> TestTrend {
        let history = log.history_until(test_type, week);
        let state = TrackingState::from_count(history.len());
        let reference_value = history.first().map(|r| r.value);
        let latest_value = history.last().map(|r| r.value);

        let (change_pct, direction) = match (state, reference_value, latest_value) {
            (TrackingState::Trending, Some(reference), Some(latest)) => {
                let change = test_type.improvement_pct(reference, latest);
                (Some(change), Some(self.classify(change)))
            }
            _ => (None, None),
        };

        tracing::debug!(
            test = %test_type,
            ?state,
            change_pct,
            ?direction,
            "Assessed test trend"
        );

        TestTrend {
            test_type,
            state,
            results_count: history.len(),
            reference_value,
            latest_value,
            change_pct,
            direction,
        }
    }

    /// Fail with InsufficientData unless the trend has a prior result to compare with.
    pub fn require_trending(trend: &TestTrend) -> CoachResult<()> {
        if trend.state == TrackingState::Trending {
            return Ok(());
        }
        Err(CoachError::InsufficientData {
            test_type: trend.test_type,
            message: match trend.state {
                TrackingState::NoData => "no result recorded".to_string(),
                _ => "only a baseline result, no prior result to compare".to_string(),
            },
        })
    }

    /// Compute the decision for `week` from all results up to that week.
    pub fn evaluate(
        &self,
        profile: &AthleteProfile,
        log: &TestResultLog,
        week: u32,
    ) -> CoachResult<AdaptationDecision> {
        if week == 0 {
            return Err(CoachError::InvalidWeek(week));
        }
        log.check_owner(profile.id)?;

        let required = self.required_tests(profile);
        let mut trends = Vec::with_capacity(TestType::ALL.len());
        let mut excluded = Vec::new();

        for test_type in TestType::ALL {
            let trend = self.assess(log, test_type, week);
            if required.contains(&test_type) {
                if let Err(err) = Self::require_trending(&trend) {
                    tracing::warn!(athlete = %profile.id, week, "Excluding from aggregate: {}", err);
                    excluded.push(Exclusion {
                        test_type,
                        reason: err.to_string(),
                    });
                }
            }
            trends.push(trend);
        }

        let (direction, risk, reason) = self.aggregate(&trends);
        let (direction, reason) = if profile.has_injuries && direction == AdjustmentDirection::Increase {
            (
                AdjustmentDirection::Maintain,
                "Improving, but load is held while an injury is reported".to_string(),
            )
        } else {
            (direction, reason)
        };

        let recovery_slot = PlanGenerator::has_recovery_slot(profile.training_frequency);
        let emphasis = emphasis_for(&trends, direction, recovery_slot);
        let percentage = match direction {
            AdjustmentDirection::Increase => self.increase_pct,
            AdjustmentDirection::Decrease => self.decrease_pct,
            AdjustmentDirection::Maintain => 0.0,
        };
        let rationale = rationale(&trends, &excluded, &reason);

        tracing::info!(
            athlete = %profile.id,
            week,
            directive = %direction,
            ?risk,
            excluded = excluded.len(),
            "Adaptation decision"
        );

        Ok(AdaptationDecision {
            athlete_id: profile.id,
            week,
            trends,
            risk,
            adjustment: LoadAdjustment {
                direction,
                percentage,
                reason,
            },
            emphasis,
            excluded,
            rationale,
        })
    }

    /// One decision per week that has results, in week order.
    pub fn history(
        &self,
        profile: &AthleteProfile,
        log: &TestResultLog,
    ) -> CoachResult<Vec<AdaptationDecision>> {
        log.weeks()
            .into_iter()
            .map(|week| self.evaluate(profile, log, week))
            .collect()
    }

    fn aggregate(&self, trends: &[TestTrend]) -> (AdjustmentDirection, RiskFlag, String) {
        let critical_decline: Vec<TestType> = trends
            .iter()
            .filter(|t| t.direction == Some(TrendDirection::Declining))
            .filter(|t| self.settings.capacity_critical.contains(&t.test_type))
            .map(|t| t.test_type)
            .collect();

        if let Some(first) = critical_decline.first() {
            return (
                AdjustmentDirection::Decrease,
                RiskFlag::High,
                format!("{} is declining - load reduced to protect recovery", first),
            );
        }

        let count = |dir: TrendDirection| trends.iter().filter(|t| t.direction == Some(dir)).count();
        let improving = count(TrendDirection::Improving);
        let stagnant = count(TrendDirection::Stagnant);
        let declining = count(TrendDirection::Declining);

        let risk = if declining > 0 {
            RiskFlag::Elevated
        } else {
            RiskFlag::None
        };

        if improving + stagnant + declining == 0 {
            return (
                AdjustmentDirection::Maintain,
                risk,
                "No trending tests yet - current load maintained".to_string(),
            );
        }

        let (direction, reason) = if improving > stagnant && improving > declining {
            (
                AdjustmentDirection::Increase,
                "Most tracked tests are improving - gradual increase recommended",
            )
        } else if declining > improving && declining > stagnant {
            (
                AdjustmentDirection::Decrease,
                "Most tracked tests are declining - load reduced",
            )
        } else if stagnant > improving && stagnant > declining {
            (
                AdjustmentDirection::Maintain,
                "Most tracked tests are stagnant - current load maintained",
            )
        } else {
            (
                AdjustmentDirection::Maintain,
                "Trends are mixed - current load maintained",
            )
        };

        (direction, risk, reason.to_string())
    }
}

/// Categories to stress next week. A decrease adds active recovery when the
/// athlete's deload layout has a session for it.
fn emphasis_for(
    trends: &[TestTrend],
    direction: AdjustmentDirection,
    recovery_slot: bool,
) -> Vec<FocusCategory> {
    let mut emphasis = Vec::new();
    for wanted in [TrendDirection::Declining, TrendDirection::Stagnant] {
        for trend in trends.iter().filter(|t| t.direction == Some(wanted)) {
            let focus = AdaptationEngine::focus_for(trend.test_type);
            if !emphasis.contains(&focus) {
                emphasis.push(focus);
            }
        }
    }
    if direction == AdjustmentDirection::Decrease
        && recovery_slot
        && !emphasis.contains(&FocusCategory::ActiveRecovery)
    {
        emphasis.push(FocusCategory::ActiveRecovery);
    }
    emphasis
}

fn rationale(trends: &[TestTrend], excluded: &[Exclusion], reason: &str) -> String {
    let mut parts = Vec::new();

    let described: Vec<String> = trends
        .iter()
        .filter_map(|t| match (t.direction, t.change_pct) {
            (Some(dir), Some(change)) => Some(format!("{} {} ({:+.1}%)", t.test_type, dir, change)),
            _ => None,
        })
        .collect();
    if !described.is_empty() {
        parts.push(format!("Trends: {}.", described.join(", ")));
    }

    parts.push(format!("{}.", reason));

    if !excluded.is_empty() {
        let names: Vec<_> = excluded.iter().map(|e| e.test_type.as_str()).collect();
        parts.push(format!("Awaiting more results for: {}.", names.join(", ")));
    }

    parts.join(" ")
}
