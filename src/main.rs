//! TrainAdapt - Adaptive Training Plan Engine
//!
//! Replays a JSON scenario week by week and prints the generated plans,
//! adaptation decisions, performance report and forecast as JSON.
//!
//! Usage: `trainadapt <scenario.json> [--config <config.toml>]`

use std::path::PathBuf;

use anyhow::{bail, Context};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use trainadapt::analysis::{ImprovementForecast, PerformanceReport};
use trainadapt::config::{load_config, load_config_from};
use trainadapt::{
    AdaptationDecision, AthleteProfile, AthleteSnapshot, Coach, PerformanceTargets, ProfileInput,
    TestResult, TestResultLog, TestType, TrainingPlan,
};

/// Weeks covered by the closing forecast.
const FORECAST_WEEKS: u32 = 4;

#[derive(Debug, Deserialize)]
struct Scenario {
    profile: ProfileInput,
    #[serde(default)]
    results: Vec<ScenarioResult>,
    #[serde(default)]
    targets: Vec<ScenarioTargets>,
    weeks: u32,
}

#[derive(Debug, Deserialize)]
struct ScenarioTargets {
    test_type: TestType,
    #[serde(flatten)]
    targets: PerformanceTargets,
}

#[derive(Debug, Deserialize)]
struct ScenarioResult {
    week: u32,
    test_type: TestType,
    value: f64,
    #[serde(default)]
    tested_on: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
struct ScenarioOutput {
    profile: AthleteProfile,
    plans: Vec<TrainingPlan>,
    decisions: Vec<AdaptationDecision>,
    report: Option<PerformanceReport>,
    forecast: Option<ImprovementForecast>,
}

struct Args {
    scenario: PathBuf,
    config: Option<PathBuf>,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut scenario = None;
    let mut config = None;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args.next().context("--config requires a path")?;
                config = Some(PathBuf::from(path));
            }
            _ if scenario.is_none() => scenario = Some(PathBuf::from(arg)),
            other => bail!("Unexpected argument: {}", other),
        }
    }
    let scenario = scenario.context("Usage: trainadapt <scenario.json> [--config <config.toml>]")?;
    Ok(Args { scenario, config })
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting TrainAdapt v{}", env!("CARGO_PKG_VERSION"));

    let args = parse_args()?;
    let config = match &args.config {
        Some(path) => load_config_from(path),
        None => load_config(),
    }
    .context("Failed to load configuration")?;
    let coach = Coach::new(&config);

    let content = std::fs::read_to_string(&args.scenario)
        .with_context(|| format!("Failed to read {}", args.scenario.display()))?;
    let scenario: Scenario = serde_json::from_str(&content).context("Invalid scenario file")?;

    let profile = scenario.profile.validate()?;
    let output = run(&coach, profile, scenario.results, &scenario.targets, scenario.weeks)?;

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Record results and issue plans in week order.
fn run(
    coach: &Coach,
    profile: AthleteProfile,
    mut results: Vec<ScenarioResult>,
    targets: &[ScenarioTargets],
    weeks: u32,
) -> anyhow::Result<ScenarioOutput> {
    results.sort_by_key(|r| r.week);

    let mut log = TestResultLog::new(profile.id);
    let mut plans: Vec<TrainingPlan> = Vec::new();
    let mut pending = results.into_iter().peekable();

    for week in 1..=weeks {
        let snapshot = AthleteSnapshot {
            profile: &profile,
            results: &log,
            previous_plan: plans.last(),
        };
        let plan = coach
            .generate_plan(&snapshot, week)
            .with_context(|| format!("Failed to generate plan for week {}", week))?;
        plans.push(plan);

        while let Some(entry) = pending.next_if(|r| r.week <= week) {
            let mut result = TestResult::new(profile.id, entry.week, entry.test_type, entry.value);
            if let Some(date) = entry.tested_on {
                result = result.with_date(date);
            }
            let update = coach.record_test_result(&mut log, result)?;
            if update.new_best && !update.created {
                tracing::info!(week, test = %update.test_type, "New best result");
            }
        }
    }

    for entry in targets {
        coach
            .set_targets(&mut log, entry.test_type, entry.targets)
            .with_context(|| format!("Failed to set targets for {}", entry.test_type))?;
    }

    let snapshot = AthleteSnapshot::new(&profile, &log);
    let decisions = coach.get_analysis(&snapshot)?;
    let report = match log.latest_week() {
        Some(latest) => Some(coach.build_report(&snapshot, 1, latest)?),
        None => None,
    };
    let forecast = match plans.last() {
        Some(plan) => Some(coach.forecast(&profile, plan, FORECAST_WEEKS)?),
        None => None,
    };

    Ok(ScenarioOutput {
        profile,
        plans,
        decisions,
        report,
        forecast,
    })
}
