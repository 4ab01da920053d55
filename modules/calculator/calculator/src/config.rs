//! Configuration for the calculator module.

use std::path::Path;

use anyhow::{Context, Result, ensure};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};

use calculator_sdk::{MAX_VALUE, MIN_VALUE};

use crate::domain::ValidRange;

/// Prefix of environment variables that override file settings,
/// e.g. `CALCULATOR_MAX_VALUE=500`.
pub const ENV_PREFIX: &str = "CALCULATOR_";

/// Keys read from the environment. Other `CALCULATOR_*` variables are ignored.
const ENV_KEYS: [&str; 2] = ["min_value", "max_value"];

/// Module configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorConfig {
    /// Inclusive lower bound for operands.
    pub min_value: i64,
    /// Inclusive upper bound for operands.
    pub max_value: i64,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            min_value: MIN_VALUE,
            max_value: MAX_VALUE,
        }
    }
}

impl CalculatorConfig {
    /// The validated operand range.
    ///
    /// # Errors
    /// Fails if `min_value > max_value` or a bound is too large to compare
    /// against floats exactly.
    pub fn valid_range(&self) -> Result<ValidRange> {
        ValidRange::new(self.min_value, self.max_value).context("invalid calculator range")
    }

    /// Extract and validate the configuration from a prepared figment.
    ///
    /// # Errors
    /// Fails on unknown keys, wrongly typed values or invalid bounds.
    pub fn from_figment(figment: &Figment) -> Result<Self> {
        let cfg: Self = figment
            .extract()
            .context("failed to parse calculator configuration")?;
        cfg.valid_range()?;
        Ok(cfg)
    }

    /// Layer defaults, an optional YAML file and `CALCULATOR_*` environment
    /// variables, in that order of precedence.
    ///
    /// # Errors
    /// Fails if the file is missing or the merged configuration is invalid.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            ensure!(
                path.is_file(),
                "calculator config file not found: {}",
                path.display()
            );
            figment = figment.merge(Yaml::file(path));
        }
        figment = figment.merge(Env::prefixed(ENV_PREFIX).only(&ENV_KEYS));

        let cfg = Self::from_figment(&figment)?;
        tracing::info!(
            min_value = cfg.min_value,
            max_value = cfg.max_value,
            "calculator configuration loaded"
        );
        Ok(cfg)
    }
}
