//! Runtime configuration
//!
//! Two things are configurable:
//! - where the data file lives (`--data` > `ALQUIMIA_DATA_FILE` > local data dir)
//! - the Insight Engine thresholds, read from TOML
//!
//! Threshold config uses a two-layer approach:
//! 1. An override file (explicit path, `ALQUIMIA_CONFIG`, or
//!    `<data dir>/alquimia/config/insights.toml`)
//! 2. The default config embedded in the binary

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::insights::{InsightEngine, InsightThresholds};

/// Environment variable naming the data file
pub const DATA_FILE_ENV: &str = "ALQUIMIA_DATA_FILE";

/// Environment variable naming the insight config file
pub const CONFIG_ENV: &str = "ALQUIMIA_CONFIG";

pub const DATA_FILE_NAME: &str = "alquimia_data.json";

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/insights.toml");

/// Default location of the data file
pub fn default_data_file() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("alquimia").join(DATA_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(DATA_FILE_NAME))
}

/// Pick the data file: explicit path, then `ALQUIMIA_DATA_FILE`, then the default
pub fn resolve_data_file(explicit: Option<PathBuf>) -> PathBuf {
    resolve_data_file_with(explicit, std::env::var(DATA_FILE_ENV).ok())
}

fn resolve_data_file_with(explicit: Option<PathBuf>, env_value: Option<String>) -> PathBuf {
    explicit
        .or_else(|| {
            env_value
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
        })
        .unwrap_or_else(default_data_file)
}

/// Get the default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("alquimia").join("config").join("insights.toml"))
}

/// Where the threshold config comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Named by `--config` or `ALQUIMIA_CONFIG`; should exist
    Named(PathBuf),
    /// The per-user override location; optional
    UserDefault(PathBuf),
    /// Only the embedded default
    Embedded,
}

fn resolve_config_source(explicit: Option<&Path>, env_value: Option<String>) -> ConfigSource {
    let named = explicit.map(Path::to_path_buf).or_else(|| {
        env_value
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
    });
    match (named, default_config_path()) {
        (Some(path), _) => ConfigSource::Named(path),
        (None, Some(path)) => ConfigSource::UserDefault(path),
        (None, None) => ConfigSource::Embedded,
    }
}

/// Load thresholds (override first, then embedded default)
pub fn load_insight_thresholds(explicit: Option<&Path>) -> Result<InsightThresholds> {
    load_insight_thresholds_from(resolve_config_source(
        explicit,
        std::env::var(CONFIG_ENV).ok(),
    ))
}

fn load_insight_thresholds_from(source: ConfigSource) -> Result<InsightThresholds> {
    let content = match source {
        ConfigSource::Named(path) | ConfigSource::UserDefault(path) if path.exists() => {
            debug!(path = %path.display(), "Loading insight config");
            fs::read_to_string(&path)?
        }
        ConfigSource::Named(path) => {
            warn!(path = %path.display(), "Config file not found, using defaults");
            DEFAULT_CONFIG.to_string()
        }
        ConfigSource::UserDefault(_) | ConfigSource::Embedded => DEFAULT_CONFIG.to_string(),
    };

    parse_insight_config(&content)
}

/// Engine built from the resolved thresholds
pub fn load_insight_engine(explicit: Option<&Path>) -> Result<InsightEngine> {
    Ok(InsightEngine::with_thresholds(load_insight_thresholds(
        explicit,
    )?))
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    insights: Option<RawInsights>,
}

#[derive(Debug, Deserialize)]
struct RawInsights {
    critical_threshold: Option<f64>,
    low_threshold: Option<f64>,
    celebration_average: Option<f64>,
    focus_count: Option<usize>,
}

/// Parse thresholds from TOML content; absent keys keep the defaults
pub fn parse_insight_config(content: &str) -> Result<InsightThresholds> {
    let raw: RawConfig = toml::from_str(content)?;

    let mut thresholds = InsightThresholds::default();
    if let Some(insights) = raw.insights {
        if let Some(critical) = insights.critical_threshold {
            thresholds.critical = critical;
        }
        if let Some(low) = insights.low_threshold {
            thresholds.low = low;
        }
        if let Some(average) = insights.celebration_average {
            thresholds.celebration_average = average;
        }
        if let Some(count) = insights.focus_count {
            thresholds.focus_count = count;
        }
    }

    if thresholds.critical > thresholds.low {
        return Err(Error::InvalidData(format!(
            "critical_threshold ({}) must not exceed low_threshold ({})",
            thresholds.critical, thresholds.low
        )));
    }
    if thresholds.focus_count == 0 {
        return Err(Error::InvalidData(
            "focus_count must be at least 1".to_string(),
        ));
    }

    Ok(thresholds)
}
