//! Plan delivery operations.
//!
//! [`Coach`] bundles the adaptation engine, plan generator and report
//! builder behind the calls a delivery layer makes. Per-athlete state is
//! never held here: every call receives an [`AthleteSnapshot`], so separate
//! athletes can be served from separate threads without locking.

use crate::adaptation::{AdaptationDecision, AdaptationEngine};
use crate::analysis::{self, ImprovementForecast, PerformanceReport, ReportBuilder};
use crate::athletes::AthleteProfile;
use crate::config::AppConfig;
use crate::error::{CoachError, CoachResult};
use crate::performance::{Baseline, BaselineUpdate, PerformanceTargets, TestResult, TestResultLog, TestType};
use crate::plans::{PlanGenerator, TrainingPlan};

/// Borrowed view of one athlete's state for a single call.
#[derive(Debug, Clone, Copy)]
pub struct AthleteSnapshot<'a> {
    /// Athlete profile
    pub profile: &'a AthleteProfile,
    /// Recorded test results
    pub results: &'a TestResultLog,
    /// Plan of the previous week, if one was issued
    pub previous_plan: Option<&'a TrainingPlan>,
}

impl<'a> AthleteSnapshot<'a> {
    /// Create a snapshot without a previous plan.
    pub fn new(profile: &'a AthleteProfile, results: &'a TestResultLog) -> Self {
        Self {
            profile,
            results,
            previous_plan: None,
        }
    }

    /// Attach the previous week's plan.
    pub fn with_previous_plan(mut self, plan: &'a TrainingPlan) -> Self {
        self.previous_plan = Some(plan);
        self
    }
}

/// Planning facade.
#[derive(Debug, Clone, Default)]
pub struct Coach {
    engine: AdaptationEngine,
    generator: PlanGenerator,
    reports: ReportBuilder,
}

impl Coach {
    /// Create from application configuration.
    pub fn new(config: &AppConfig) -> Self {
        Self {
            engine: AdaptationEngine::from_config(config),
            generator: PlanGenerator::from_config(config),
            reports: ReportBuilder::new(config.adaptation.clone()),
        }
    }

    /// Adaptation engine used for decisions.
    pub fn engine(&self) -> &AdaptationEngine {
        &self.engine
    }

    /// Plan generator used for weekly plans.
    pub fn generator(&self) -> &PlanGenerator {
        &self.generator
    }

    /// Plan for `week`, adapted from all results up to the previous week.
    ///
    /// Falls back to the profile-only baseline plan for week 1 or when no
    /// result exists before `week`.
    pub fn generate_plan(&self, snapshot: &AthleteSnapshot<'_>, week: u32) -> CoachResult<TrainingPlan> {
        if week == 0 {
            return Err(CoachError::InvalidWeek(week));
        }
        snapshot.results.check_owner(snapshot.profile.id)?;

        let prior_week = week - 1;
        let has_history = snapshot
            .results
            .results()
            .iter()
            .any(|r| r.week <= prior_week);

        if prior_week == 0 || !has_history {
            tracing::debug!(athlete = %snapshot.profile.id, week, "No prior results, using baseline plan");
            return self.generator.baseline(snapshot.profile, week);
        }

        let decision = self
            .engine
            .evaluate(snapshot.profile, snapshot.results, prior_week)?;
        self.generator
            .generate(snapshot.profile, Some(&decision), week, snapshot.previous_plan)
    }

    /// Record a result and return the recomputed baseline.
    pub fn record_test_result(
        &self,
        log: &mut TestResultLog,
        result: TestResult,
    ) -> CoachResult<BaselineUpdate> {
        log.record(result)
    }

    /// Set performance targets on a test type's baseline.
    pub fn set_targets(
        &self,
        log: &mut TestResultLog,
        test_type: TestType,
        targets: PerformanceTargets,
    ) -> CoachResult<Baseline> {
        log.set_targets(test_type, targets).cloned()
    }

    /// One adaptation decision per week with results.
    pub fn get_analysis(&self, snapshot: &AthleteSnapshot<'_>) -> CoachResult<Vec<AdaptationDecision>> {
        snapshot.profile.validate()?;
        snapshot.results.check_owner(snapshot.profile.id)?;
        self.engine.history(snapshot.profile, snapshot.results)
    }

    /// Performance report over `from_week..=to_week`.
    pub fn build_report(
        &self,
        snapshot: &AthleteSnapshot<'_>,
        from_week: u32,
        to_week: u32,
    ) -> CoachResult<PerformanceReport> {
        snapshot.results.check_owner(snapshot.profile.id)?;
        self.reports.build(snapshot.results, from_week, to_week)
    }

    /// Expected improvement after `weeks_ahead` weeks on `plan`.
    pub fn forecast(
        &self,
        profile: &AthleteProfile,
        plan: &TrainingPlan,
        weeks_ahead: u32,
    ) -> CoachResult<ImprovementForecast> {
        analysis::forecast(profile, plan, weeks_ahead)
    }

    /// Plans for weeks `1..=weeks`, each adapted from the one before.
    pub fn plan_weeks(
        &self,
        profile: &AthleteProfile,
        results: &TestResultLog,
        weeks: u32,
    ) -> CoachResult<Vec<TrainingPlan>> {
        let mut plans: Vec<TrainingPlan> = Vec::with_capacity(weeks as usize);
        for week in 1..=weeks {
            let snapshot = AthleteSnapshot {
                profile,
                results,
                previous_plan: plans.last(),
            };
            let plan = self.generate_plan(&snapshot, week)?;
            plans.push(plan);
        }
        Ok(plans)
    }
}
