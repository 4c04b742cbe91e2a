use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::models::RuleWeights;

/// Error for settings that load but describe an unusable engine
#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    #[error("recommendation counts must satisfy 0 < default_count <= max_count (default_count={default_count}, max_count={max_count})")]
    InvalidCounts { default_count: usize, max_count: usize },

    #[error("scoring weight {name} must not be negative (got {value})")]
    NegativeWeight { name: &'static str, value: f64 },
}

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub recommendations: RecommendationSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationSettings {
    /// Result count when a caller expresses no preference (the coaching UI
    /// overrides this with its own page size)
    #[serde(default = "default_count")]
    pub default_count: usize,
    #[serde(default = "default_max_count")]
    pub max_count: usize,
}

impl Default for RecommendationSettings {
    fn default() -> Self {
        Self {
            default_count: default_count(),
            max_count: default_max_count(),
        }
    }
}

fn default_count() -> usize { 8 }
fn default_max_count() -> usize { 50 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

/// Per-rule score contributions, overridable from configuration
#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_level_exact")]
    pub level_exact: f64,
    #[serde(default = "default_level_one_below")]
    pub level_one_below: f64,
    #[serde(default = "default_level_two_below")]
    pub level_two_below: f64,
    #[serde(default = "default_equipment_bodyweight")]
    pub equipment_bodyweight: f64,
    #[serde(default = "default_equipment_exact")]
    pub equipment_exact: f64,
    #[serde(default = "default_equipment_partial")]
    pub equipment_partial: f64,
    #[serde(default = "default_goal_category")]
    pub goal_category: f64,
    #[serde(default = "default_goal_strength_bonus")]
    pub goal_strength_bonus: f64,
    #[serde(default = "default_goal_cardio_bonus")]
    pub goal_cardio_bonus: f64,
    #[serde(default = "default_goal_cap")]
    pub goal_cap: f64,
    #[serde(default = "default_location_perfect")]
    pub location_perfect: f64,
    #[serde(default = "default_location_partial")]
    pub location_partial: f64,
    #[serde(default = "default_type_match")]
    pub type_match: f64,
    #[serde(default = "default_type_cap")]
    pub type_cap: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            level_exact: default_level_exact(),
            level_one_below: default_level_one_below(),
            level_two_below: default_level_two_below(),
            equipment_bodyweight: default_equipment_bodyweight(),
            equipment_exact: default_equipment_exact(),
            equipment_partial: default_equipment_partial(),
            goal_category: default_goal_category(),
            goal_strength_bonus: default_goal_strength_bonus(),
            goal_cardio_bonus: default_goal_cardio_bonus(),
            goal_cap: default_goal_cap(),
            location_perfect: default_location_perfect(),
            location_partial: default_location_partial(),
            type_match: default_type_match(),
            type_cap: default_type_cap(),
        }
    }
}

impl From<WeightsConfig> for RuleWeights {
    fn from(config: WeightsConfig) -> Self {
        Self {
            level_exact: config.level_exact,
            level_one_below: config.level_one_below,
            level_two_below: config.level_two_below,
            equipment_bodyweight: config.equipment_bodyweight,
            equipment_exact: config.equipment_exact,
            equipment_partial: config.equipment_partial,
            goal_category: config.goal_category,
            goal_strength_bonus: config.goal_strength_bonus,
            goal_cardio_bonus: config.goal_cardio_bonus,
            goal_cap: config.goal_cap,
            location_perfect: config.location_perfect,
            location_partial: config.location_partial,
            type_match: config.type_match,
            type_cap: config.type_cap,
        }
    }
}

fn default_level_exact() -> f64 { 10.0 }
fn default_level_one_below() -> f64 { 5.0 }
fn default_level_two_below() -> f64 { 2.0 }
fn default_equipment_bodyweight() -> f64 { 8.0 }
fn default_equipment_exact() -> f64 { 10.0 }
fn default_equipment_partial() -> f64 { 7.0 }
fn default_goal_category() -> f64 { 8.0 }
fn default_goal_strength_bonus() -> f64 { 2.0 }
fn default_goal_cardio_bonus() -> f64 { 3.0 }
fn default_goal_cap() -> f64 { 15.0 }
fn default_location_perfect() -> f64 { 10.0 }
fn default_location_partial() -> f64 { 8.0 }
fn default_type_match() -> f64 { 8.0 }
fn default_type_cap() -> f64 { 10.0 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with FITCOACH_)
    ///    e.g., FITCOACH__SCORING__WEIGHTS__GOAL_CAP -> scoring.weights.goal_cap
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(
                Environment::with_prefix("FITCOACH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("FITCOACH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Reject settings that loaded cleanly but describe an unusable engine
    pub fn validate(&self) -> Result<(), SettingsError> {
        let counts = &self.recommendations;
        if counts.default_count == 0 || counts.max_count < counts.default_count {
            return Err(SettingsError::InvalidCounts {
                default_count: counts.default_count,
                max_count: counts.max_count,
            });
        }

        let w = &self.scoring.weights;
        let named = [
            ("level_exact", w.level_exact),
            ("level_one_below", w.level_one_below),
            ("level_two_below", w.level_two_below),
            ("equipment_bodyweight", w.equipment_bodyweight),
            ("equipment_exact", w.equipment_exact),
            ("equipment_partial", w.equipment_partial),
            ("goal_category", w.goal_category),
            ("goal_strength_bonus", w.goal_strength_bonus),
            ("goal_cardio_bonus", w.goal_cardio_bonus),
            ("goal_cap", w.goal_cap),
            ("location_perfect", w.location_perfect),
            ("location_partial", w.location_partial),
            ("type_match", w.type_match),
            ("type_cap", w.type_cap),
        ];
        for (name, value) in named {
            if value < 0.0 {
                return Err(SettingsError::NegativeWeight { name, value });
            }
        }

        Ok(())
    }
}
