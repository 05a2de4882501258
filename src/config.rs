//! Report configuration
//!
//! Values are layered: built-in defaults, then an optional TOML file, then
//! command-line flags. The file looks like:
//!
//! ```toml
//! deposit = "10000"
//! tax_rate = "0.33"
//! inflation = "0.015"
//! ```
//!
//! Every key is optional. Rates are fractions (`0.33` is 33%).

use anyhow::{anyhow, Context, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::RatesError;

const CONFIG_DIR: &str = "call-rates";
const CONFIG_FILENAME: &str = "config.toml";

/// Inputs for a best-rate report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportConfig {
    /// Amount to deposit; only accounts whose minimum is at or below it qualify
    pub deposit: Decimal,
    /// Withholding tax on interest, as a fraction
    pub tax_rate: Decimal,
    /// Annual inflation, as a fraction
    pub inflation: Decimal,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            deposit: Decimal::new(10000, 0),
            tax_rate: Decimal::new(33, 2),
            inflation: Decimal::new(15, 3),
        }
    }
}

/// Values read from a config file or given on the command line
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigOverrides {
    pub deposit: Option<Decimal>,
    pub tax_rate: Option<Decimal>,
    pub inflation: Option<Decimal>,
}

impl ReportConfig {
    pub fn apply(mut self, overrides: &ConfigOverrides) -> Self {
        if let Some(deposit) = overrides.deposit {
            self.deposit = deposit;
        }
        if let Some(tax_rate) = overrides.tax_rate {
            self.tax_rate = tax_rate;
        }
        if let Some(inflation) = overrides.inflation {
            self.inflation = inflation;
        }
        self
    }

    pub fn validate(&self) -> crate::error::Result<()> {
        if self.deposit < Decimal::ZERO {
            return Err(RatesError::InvalidArgument(format!(
                "deposit must not be negative, got {}",
                self.deposit
            )));
        }
        if self.tax_rate < Decimal::ZERO || self.tax_rate > Decimal::ONE {
            return Err(RatesError::InvalidArgument(format!(
                "tax rate must be a fraction between 0 and 1, got {}",
                self.tax_rate
            )));
        }
        Ok(())
    }
}

/// `<config home>/call-rates/config.toml`, honouring `XDG_CONFIG_HOME`
pub fn default_config_path() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(dir_spec::config_home)
        .map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILENAME))
}

pub fn parse_config(text: &str) -> Result<ConfigOverrides> {
    toml::from_str(text).map_err(|e| anyhow!("invalid configuration: {}", e))
}

/// Resolve the report configuration.
///
/// An explicit `path` must exist. The default location is read only when
/// present.
pub fn load_config(path: Option<&Path>, cli: &ConfigOverrides) -> Result<ReportConfig> {
    let from_file = match path {
        Some(path) => Some(read_config_file(path)?),
        None => match default_config_path() {
            Some(default) if default.is_file() => Some(read_config_file(&default)?),
            _ => {
                debug!("No configuration file found, using defaults");
                None
            }
        },
    };

    let mut config = ReportConfig::default();
    if let Some(file) = from_file.as_ref() {
        config = config.apply(file);
    }
    let config = config.apply(cli);
    config.validate()?;
    Ok(config)
}

fn read_config_file(path: &Path) -> Result<ConfigOverrides> {
    info!("Loading configuration from: {}", path.display());
    let text = std::fs::read_to_string(path)
        .map_err(RatesError::from)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    parse_config(&text).with_context(|| format!("Failed to parse config file {}", path.display()))
}
