use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::core::titan::advanced_linear_algebra::DEFAULT_EPSILON;

/// Tunables read from `~/.titan/numerics.toml` (or `--config`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TitanConfig {
    /// Pivot magnitude treated as zero by row reduction.
    pub elimination_epsilon: f64,
    /// CLI text output prints values smaller than this in magnitude as 0.
    pub comparison_epsilon: f64,
    /// Digits after the decimal point in CLI output.
    pub precision: usize,
}

impl Default for TitanConfig {
    fn default() -> Self {
        TitanConfig {
            elimination_epsilon: DEFAULT_EPSILON,
            comparison_epsilon: 1e-9,
            precision: 6,
        }
    }
}

impl TitanConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let cfg: TitanConfig = toml::from_str(text).context("Parse titan config")?;
        let non_negative = |e: f64| e >= 0.0;
        if !non_negative(cfg.elimination_epsilon) || !non_negative(cfg.comparison_epsilon) {
            anyhow::bail!("config epsilons must be non-negative numbers");
        }
        Ok(cfg)
    }

    /// Load from `path`; a missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(TitanConfig::default());
        };
        if !path.exists() {
            crate::debug_log!("config: {} not found, using defaults", path.display());
            return Ok(TitanConfig::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Read config {}", path.display()))?;
        TitanConfig::from_toml_str(&text)
            .with_context(|| format!("Load config {}", path.display()))
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    // ~/.titan/numerics.toml
    dirs_next::home_dir().map(|h| h.join(".titan").join("numerics.toml"))
}

pub fn resolve_config_path(cli_path: &Option<PathBuf>) -> Option<PathBuf> {
    if let Some(p) = cli_path {
        return Some(p.clone());
    }
    default_config_path()
}
