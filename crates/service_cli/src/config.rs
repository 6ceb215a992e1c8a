//! CLI configuration management
//!
//! Handles loading configuration from environment variables, TOML files, and CLI arguments.

use deal_core::types::Thresholds;
use deal_models::FinancialModel;
use deal_optimiser::SearchStrategy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Environment variable for the log level.
pub const ENV_LOG_LEVEL: &str = "UNDERWRITE_LOG_LEVEL";
/// Environment variable for the valuation year.
pub const ENV_VALUATION_YEAR: &str = "UNDERWRITE_VALUATION_YEAR";
/// Environment variable for the default search strategy.
pub const ENV_STRATEGY: &str = "UNDERWRITE_STRATEGY";
/// Environment variable for the target cap rate.
pub const ENV_TARGET_CAP_RATE: &str = "UNDERWRITE_TARGET_CAP_RATE";
/// Environment variable for the target cash-on-cash return.
pub const ENV_TARGET_CASH_ON_CASH: &str = "UNDERWRITE_TARGET_CASH_ON_CASH";
/// Environment variable for the target DSCR.
pub const ENV_TARGET_DSCR: &str = "UNDERWRITE_TARGET_DSCR";
/// Environment variable for the target monthly cash flow.
pub const ENV_TARGET_MONTHLY_CASH_FLOW: &str = "UNDERWRITE_TARGET_MONTHLY_CASH_FLOW";

const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1800..=2200;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Unknown log level name
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// Unknown search strategy name
    #[error("Invalid search strategy: {0}. Must be one of: linear, bisection")]
    InvalidStrategy(String),

    /// Valuation year outside the supported range
    #[error("Invalid valuation year: {0}. Must be between 1800 and 2200")]
    InvalidYear(i32),

    /// Threshold that is negative or not finite
    #[error("Invalid threshold {field}: {value}. Must be finite and non-negative")]
    InvalidThreshold {
        /// Threshold name
        field: &'static str,
        /// Offending value
        value: f64,
    },

    /// Config file could not be read or parsed
    #[error("Configuration file error: {0}")]
    FileError(String),

    /// Environment variable could not be parsed
    #[error("Environment variable error: {0}")]
    EnvError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Search steps and every model evaluation
    Trace,
    /// Per-analysis summaries
    Debug,
    /// Command progress
    #[default]
    Info,
    /// Solver fallbacks
    Warn,
    /// Failures only
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Resolved CLI configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Year used to age buildings; the current year when unset
    pub valuation_year: Option<i32>,
    /// Search strategy used by `optimise` when none is given
    #[serde(deserialize_with = "deserialize_strategy")]
    pub strategy: SearchStrategy,
    /// Targets applied to deal files without a `[thresholds]` table
    pub thresholds: Thresholds,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

fn deserialize_strategy<'de, D>(deserializer: D) -> Result<SearchStrategy, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_strategy(&s).map_err(serde::de::Error::custom)
}

/// Parse a search strategy name.
pub fn parse_strategy(s: &str) -> Result<SearchStrategy, ConfigError> {
    SearchStrategy::from_str(&s.to_lowercase()).map_err(|_| ConfigError::InvalidStrategy(s.to_string()))
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            valuation_year: None,
            strategy: SearchStrategy::default(),
            thresholds: Thresholds::default(),
        }
    }
}

impl CliConfig {
    /// Create a new CliConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        config.apply_env(lookup)?;
        config.validate()?;
        Ok(config)
    }

    /// Override the fields whose `UNDERWRITE_*` variable is set
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }

        if let Some(year) = lookup(ENV_VALUATION_YEAR) {
            let year = year
                .trim()
                .parse()
                .map_err(|_| ConfigError::EnvError(format!("{ENV_VALUATION_YEAR}={year} is not a year")))?;
            self.valuation_year = Some(year);
        }

        if let Some(strategy) = lookup(ENV_STRATEGY) {
            self.strategy = parse_strategy(strategy.trim())?;
        }

        let targets: [(&str, &mut f64); 4] = [
            (ENV_TARGET_CAP_RATE, &mut self.thresholds.target_cap_rate),
            (ENV_TARGET_CASH_ON_CASH, &mut self.thresholds.target_cash_on_cash),
            (ENV_TARGET_DSCR, &mut self.thresholds.target_dscr),
            (
                ENV_TARGET_MONTHLY_CASH_FLOW,
                &mut self.thresholds.target_monthly_cash_flow,
            ),
        ];
        for (key, target) in targets {
            if let Some(raw) = lookup(key) {
                *target = raw
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::EnvError(format!("{key}={raw} is not a number")))?;
            }
        }

        Ok(())
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(year) = self.valuation_year {
            if !YEAR_RANGE.contains(&year) {
                return Err(ConfigError::InvalidYear(year));
            }
        }

        validate_thresholds(&self.thresholds)
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(log_level) = &cli.log_level {
            self.log_level = LogLevel::from_str(log_level)?;
        }
        if let Some(year) = cli.valuation_year {
            self.valuation_year = Some(year);
        }
        if let Some(strategy) = &cli.strategy {
            self.strategy = parse_strategy(strategy)?;
        }
        Ok(())
    }

    /// Financial model for the configured valuation year
    pub fn financial_model(&self) -> FinancialModel {
        self.valuation_year
            .map(FinancialModel::new)
            .unwrap_or_else(FinancialModel::current)
    }
}

/// CLI arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// Valuation year override
    pub valuation_year: Option<i32>,
    /// Search strategy override
    pub strategy: Option<String>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<CliConfig, ConfigError> {
    build_config_with(cli, |key| std::env::var(key).ok())
}

/// [`build_config`] with an explicit environment lookup
pub fn build_config_with<F>(cli: &CliArgs, lookup: F) -> Result<CliConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = if let Some(config_path) = &cli.config_file {
        CliConfig::from_file(config_path)?
    } else {
        CliConfig::default()
    };

    config.apply_env(lookup)?;
    config.merge_with_cli(cli)?;

    config.validate()?;

    Ok(config)
}

/// Reject non-finite targets and negative ratio targets.
///
/// Shared by the configuration and by a deal file's own `[thresholds]`.
pub fn validate_thresholds(t: &Thresholds) -> Result<(), ConfigError> {
    for (field, value) in [
        ("target_cap_rate", t.target_cap_rate),
        ("target_cash_on_cash", t.target_cash_on_cash),
        ("target_dscr", t.target_dscr),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(ConfigError::InvalidThreshold { field, value });
        }
    }
    // Negative monthly targets are allowed
    if !t.target_monthly_cash_flow.is_finite() {
        return Err(ConfigError::InvalidThreshold {
            field: "target_monthly_cash_flow",
            value: t.target_monthly_cash_flow,
        });
    }
    Ok(())
}
