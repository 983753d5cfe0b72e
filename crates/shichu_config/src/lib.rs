//! File-based configuration for Four Pillars calculations.
//!
//! A config file is TOML with three optional tables:
//!
//! ```toml
//! [options]
//! useInternationalMode = true
//! useDST = true
//!
//! [thresholds]
//! strong = 20.0
//!
//! [weights]
//! visibleStem = 10.0
//! ```
//!
//! Every missing key keeps its default, so an empty file yields the legacy
//! options and the standard rule tables. The file is located by an explicit
//! path first, then the `SHICHU_CONFIG` environment variable.

pub mod error;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use shichu_base::{ProfileWeights, RuleBook, StrengthThresholds};
use shichu_time::CalculationOptions;

pub use error::ConfigError;

/// Environment variable naming a config file.
pub const CONFIG_ENV_VAR: &str = "SHICHU_CONFIG";

/// Parsed configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShichuConfig {
    pub options: CalculationOptions,
    pub thresholds: StrengthThresholds,
    pub weights: ProfileWeights,
}

impl ShichuConfig {
    /// Standard rule tables with this config's thresholds and weights.
    pub fn rule_book(&self) -> RuleBook {
        RuleBook {
            thresholds: self.thresholds,
            weights: self.weights.clone(),
            ..RuleBook::default()
        }
    }
}

/// Parse config text.
pub fn parse_config(text: &str) -> Result<ShichuConfig, ConfigError> {
    toml::from_str(text).map_err(|source| ConfigError::Parse { path: None, source })
}

/// Read and parse a config file.
pub fn load_config(path: &Path) -> Result<ShichuConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = toml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: Some(path.to_path_buf()),
        source,
    })?;
    tracing::debug!(path = %path.display(), "config loaded");
    Ok(config)
}

/// The config file in effect: `explicit`, else `$SHICHU_CONFIG`.
pub fn config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    explicit.map(Path::to_path_buf).or_else(|| {
        std::env::var_os(CONFIG_ENV_VAR)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    })
}

/// Load the config in effect, or defaults when no file is named.
pub fn resolve_config(explicit: Option<&Path>) -> Result<ShichuConfig, ConfigError> {
    match config_path(explicit) {
        Some(path) => load_config(&path),
        None => Ok(ShichuConfig::default()),
    }
}
