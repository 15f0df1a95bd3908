//! Engine configuration.
//!
//! Settings live in `config.toml` under the platform data directory. A
//! missing file yields the defaults, which are the documented thresholds the
//! tests rely on.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::performance::TestType;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Application version
    pub version: String,
    /// Data directory path
    #[serde(skip)]
    pub data_dir: PathBuf,
    /// Trend classification and aggregation settings
    pub adaptation: AdaptationSettings,
    /// Plan generation settings
    pub planner: PlannerSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            data_dir: PathBuf::new(),
            adaptation: AdaptationSettings::default(),
            planner: PlannerSettings::default(),
        }
    }
}

/// Adaptation engine thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdaptationSettings {
    /// Half-width of the stagnant dead-band in percent.
    ///
    /// Changes above `+dead_band_pct` are improving, changes below
    /// `-dead_band_pct` are declining, anything in between is stagnant.
    pub dead_band_pct: f64,
    /// Tests whose decline forces a decrease directive
    pub capacity_critical: Vec<TestType>,
    /// Age from which heart rate recovery becomes a mandatory check
    pub recovery_check_age: u8,
    /// Week-over-week drop in percent counted as a sharp decline in reports
    pub sharp_decline_pct: f64,
}

impl Default for AdaptationSettings {
    fn default() -> Self {
        Self {
            dead_band_pct: 3.0,
            capacity_critical: vec![TestType::HeartRateRecovery],
            recovery_check_age: 35,
            sharp_decline_pct: 5.0,
        }
    }
}

/// Plan generator load steps and limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerSettings {
    /// Fail with UnsupportedSport instead of using the general template
    pub strict_sport_templates: bool,
    /// Intensity increase applied on an increase directive (fraction)
    pub increase_step: f32,
    /// Intensity reduction applied on a decrease directive (fraction)
    pub decrease_step: f32,
    /// Volume reduction applied on a decrease directive (fraction)
    pub volume_decrease_step: f32,
    /// Lower bound of the carried intensity factor
    pub min_intensity_factor: f32,
    /// Upper bound of the carried intensity factor
    pub max_intensity_factor: f32,
    /// Lower bound of the carried volume factor
    pub min_volume_factor: f32,
    /// Extra duration for emphasized categories (fraction)
    pub emphasis_volume_bonus: f32,
    /// Intensity cap reduction for athletes reporting an injury (fraction)
    pub injury_cap_reduction: f32,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            strict_sport_templates: false,
            increase_step: 0.05,
            decrease_step: 0.10,
            volume_decrease_step: 0.15,
            min_intensity_factor: 0.7,
            max_intensity_factor: 1.3,
            min_volume_factor: 0.5,
            emphasis_volume_bonus: 0.10,
            injury_cap_reduction: 0.10,
        }
    }
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "trainadapt", "TrainAdapt")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Load application configuration from the default location.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(&get_config_path())
}

/// Load application configuration from a specific file.
///
/// A missing file is not an error; defaults are returned.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!("No config at {}, using defaults", path.display());
        return Ok(AppConfig {
            data_dir: get_data_dir(),
            ..Default::default()
        });
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    let mut config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    config.data_dir = get_data_dir();
    config.validate()?;

    Ok(config)
}

/// Save application configuration to the default location.
pub fn save_config(config: &AppConfig) -> Result<(), ConfigError> {
    save_config_to(config, &get_config_path())
}

/// Save application configuration to a specific file.
pub fn save_config_to(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content = toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    Ok(())
}

impl AppConfig {
    /// Reject settings that would make classification or scaling meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let a = &self.adaptation;
        if !(a.dead_band_pct.is_finite() && a.dead_band_pct >= 0.0) {
            return Err(ConfigError::InvalidValue(
                "adaptation.dead_band_pct must be a non-negative number".into(),
            ));
        }

        let p = &self.planner;
        let steps = [
            ("planner.increase_step", p.increase_step),
            ("planner.decrease_step", p.decrease_step),
            ("planner.volume_decrease_step", p.volume_decrease_step),
            ("planner.emphasis_volume_bonus", p.emphasis_volume_bonus),
            ("planner.injury_cap_reduction", p.injury_cap_reduction),
        ];
        for (name, value) in steps {
            if !(0.0..1.0).contains(&value) {
                return Err(ConfigError::InvalidValue(format!(
                    "{} must be in [0, 1) (got {})",
                    name, value
                )));
            }
        }
        if !(p.min_intensity_factor > 0.0 && p.min_intensity_factor <= 1.0)
            || p.max_intensity_factor < 1.0
            || !(p.min_volume_factor > 0.0 && p.min_volume_factor <= 1.0)
        {
            return Err(ConfigError::InvalidValue(
                "planner factor bounds must bracket 1.0".into(),
            ));
        }
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),
}
