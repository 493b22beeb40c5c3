//! Analysis configuration: rolling windows, model weights and ranking
//! parameters, loaded from JSON.

use crate::core::{default_config_path, write_string};
use crate::error::{FormError, Result};
use crate::fdr::{
    DifficultyMode, FallbackParams, FdrWeights, ScheduleParams, DEFAULT_FULL_GAMEWEEK_RATIO,
    DEFAULT_LOOKAHEAD,
};
use crate::form::{FormThresholds, DEFAULT_WINDOWS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;


/// Environment variable naming a config file to use when `--config` is not
/// given.
pub const CONFIG_ENV_VAR: &str = "FPL_FORM_CONFIG";

/// Minutes a player needs in the recent window to appear among form leaders.
pub const DEFAULT_RECENT_FORM_MIN_MINUTES: u32 = 200;

/// Season minutes a player needs to appear on the value board.
pub const DEFAULT_VALUE_MIN_MINUTES: u32 = 450;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub windows: Vec<usize>,
    pub weights: FdrWeights,
    pub fallback: FallbackParams,
    pub hot_form: FormThresholds,
    pub recent_form_min_minutes: u32,
    pub value_min_minutes: u32,
    pub horizon: u16,
    pub full_gameweek_ratio: f64,
    pub lookahead: u16,
    pub difficulty_mode: DifficultyMode,
    /// Difficulty memo size; `None` disables the memo.
    pub cache_capacity: Option<usize>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            windows: DEFAULT_WINDOWS.to_vec(),
            weights: FdrWeights::default(),
            fallback: FallbackParams::default(),
            hot_form: FormThresholds::default(),
            recent_form_min_minutes: DEFAULT_RECENT_FORM_MIN_MINUTES,
            value_min_minutes: DEFAULT_VALUE_MIN_MINUTES,
            horizon: 5,
            full_gameweek_ratio: DEFAULT_FULL_GAMEWEEK_RATIO,
            lookahead: DEFAULT_LOOKAHEAD,
            difficulty_mode: DifficultyMode::default(),
            cache_capacity: Some(512),
        }
    }
}

fn invalid(message: impl Into<String>) -> FormError {
    FormError::InvalidConfig {
        message: message.into(),
    }
}

impl AnalysisConfig {
    /// Ranking parameters with `horizon` overriding the configured one.
    pub fn schedule_params(&self, horizon: Option<u16>) -> ScheduleParams {
        ScheduleParams {
            horizon: horizon.unwrap_or(self.horizon),
            full_gameweek_ratio: self.full_gameweek_ratio,
            lookahead: self.lookahead,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.windows.is_empty() {
            return Err(invalid("windows must not be empty"));
        }
        if self.windows.contains(&0) {
            return Err(invalid("window sizes must be positive"));
        }
        if !(self.full_gameweek_ratio > 0.0 && self.full_gameweek_ratio <= 1.0) {
            return Err(invalid(format!(
                "full_gameweek_ratio must be in (0, 1], got {}",
                self.full_gameweek_ratio
            )));
        }
        if !self.weights.all_finite() {
            return Err(invalid("difficulty weights must be finite numbers"));
        }
        if !(self.hot_form.min_trend.is_finite() && self.hot_form.min_trend >= 0.0) {
            return Err(invalid("hot_form.min_trend must be a non-negative number"));
        }
        let f = &self.fallback;
        if ![f.strength_floor, f.strength_span, f.home_multiplier, f.away_multiplier]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
        {
            return Err(invalid("fallback parameters must be non-negative numbers"));
        }
        Ok(())
    }

    /// Parse and validate a config from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file; a missing file is an error.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        self.validate()?;
        let json = serde_json::to_string_pretty(self)?;
        write_string(path, &json)?;
        Ok(())
    }

    /// The config to use: `explicit`, else the file named by
    /// [`CONFIG_ENV_VAR`], else the default config file if it exists, else
    /// built-in defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match config_path(explicit) {
            Some(path) => {
                debug!(path = %path.display(), "loading config");
                Self::load(&path)
            }
            None => {
                debug!("no config file; using defaults");
                Ok(Self::default())
            }
        }
    }
}

/// Which config file [`AnalysisConfig::resolve`] would read, if any.
pub fn config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    let default = default_config_path();
    default.exists().then_some(default)
}
