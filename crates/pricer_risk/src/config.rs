//! Risk engine configuration management
//!
//! Handles loading configuration from TOML files and environment variables.
//!
//! Priority (highest to lowest):
//! 1. Environment variables
//! 2. Config file
//! 3. Default values

use pricer_core::traits::Float;
use pricer_models::instruments::{BarrierPolicy, Instrument};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

use crate::parallel::ParallelConfig;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Unknown log level name.
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// Environment override that does not parse.
    #[error("Invalid value for {key}: {value}")]
    InvalidValue {
        /// Variable name
        key: &'static str,
        /// Raw value
        value: String,
    },

    /// Parallel settings out of range.
    #[error("Invalid parallel configuration: {0}")]
    InvalidParallel(String),

    /// Barrier policy out of range.
    #[error("Invalid barrier policy: {0}")]
    InvalidBarrierPolicy(String),

    /// File could not be read or parsed.
    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels supported by the risk engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Everything, including per-position risk traces
    Trace,
    /// Barrier rule selection and snapshot commits
    Debug,
    /// One line per book run
    #[default]
    Info,
    /// Position failures only
    Warn,
    /// Errors only
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

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

/// Risk engine configuration structure
///
/// # Examples
/// ```
/// use pricer_risk::config::{LogLevel, RiskConfig};
///
/// let config = RiskConfig::from_toml_str(r#"
///     log_level = "debug"
///
///     [parallel]
///     parallel_threshold = 500
///
///     [barrier]
///     limit_haircut = 0.9
/// "#).unwrap();
///
/// assert_eq!(config.log_level, LogLevel::Debug);
/// assert_eq!(config.parallel.parallel_threshold, 500);
/// assert_eq!(config.parallel.batch_size, 64);
/// assert_eq!(config.barrier.limit_haircut, 0.9);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct RiskConfig {
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Threshold and batch size for book and batch runs
    pub parallel: ParallelConfig,
    /// Barrier resolution constants
    pub barrier: BarrierPolicy,
}

impl RiskConfig {
    /// Create a new RiskConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: RiskConfig = toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from an optional file, then environment variables
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Override fields from `PRICER_*` environment variables
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Override fields from an arbitrary key lookup
    ///
    /// Recognised keys: `PRICER_LOG_LEVEL`, `PRICER_BATCH_SIZE`,
    /// `PRICER_PARALLEL_THRESHOLD`, `PRICER_LIMIT_HAIRCUT`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup("PRICER_LOG_LEVEL") {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(value) = lookup("PRICER_BATCH_SIZE") {
            self.parallel.batch_size = parse_override("PRICER_BATCH_SIZE", value)?;
        }
        if let Some(value) = lookup("PRICER_PARALLEL_THRESHOLD") {
            self.parallel.parallel_threshold = parse_override("PRICER_PARALLEL_THRESHOLD", value)?;
        }
        if let Some(value) = lookup("PRICER_LIMIT_HAIRCUT") {
            self.barrier.limit_haircut = parse_override("PRICER_LIMIT_HAIRCUT", value)?;
        }
        Ok(())
    }

    /// Puts the configured barrier policy on a barrier instrument.
    ///
    /// Other instrument kinds pass through unchanged.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::instruments::{
    ///     BarrierConfig, BarrierDirection, BarrierOption, Instrument, InstrumentParams, OptionType,
    /// };
    /// use pricer_risk::config::RiskConfig;
    ///
    /// let config = RiskConfig::from_toml_str("[barrier]\nlimit_haircut = 0.9").unwrap();
    /// let params = InstrumentParams::new(100.0_f64, 1.0, 1.0).unwrap();
    /// let levels = BarrierConfig::from_levels(95.0, 0.0, 0.0, 0.0, BarrierDirection::Up).unwrap();
    /// let option = Instrument::from(BarrierOption::new(params, OptionType::Call, levels));
    ///
    /// let configured = config.apply_barrier_policy(option).unwrap();
    /// assert_eq!(configured.as_barrier().unwrap().policy().limit_haircut, 0.9);
    /// ```
    pub fn apply_barrier_policy<T: Float>(
        &self,
        instrument: Instrument<T>,
    ) -> Result<Instrument<T>, ConfigError> {
        match instrument {
            Instrument::Barrier(option) => option
                .with_policy(self.barrier)
                .map(Instrument::Barrier)
                .map_err(|e| ConfigError::InvalidBarrierPolicy(e.to_string())),
            other => Ok(other),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.parallel.batch_size == 0 {
            return Err(ConfigError::InvalidParallel(
                "batch_size must be at least 1".to_string(),
            ));
        }
        self.barrier
            .validate()
            .map_err(|e| ConfigError::InvalidBarrierPolicy(e.to_string()))
    }
}

fn parse_override<V: FromStr>(key: &'static str, value: String) -> Result<V, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue { key, value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_models::instruments::DormantRule;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = RiskConfig::default();
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.parallel, ParallelConfig::default());
        assert_eq!(config.barrier, BarrierPolicy::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Info").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::from_str("WARN").unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::from_str("error").unwrap(), LogLevel::Error);

        assert!(LogLevel::from_str("invalid").is_err());
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(RiskConfig::from_toml_str("").unwrap(), RiskConfig::default());
    }

    #[test]
    fn test_fractional_dormant_rule_from_toml() {
        let config = RiskConfig::from_toml_str(
            r#"
            [barrier.dormant]
            rule = "fractional"
            aligned = 0.7
            opposed = 0.5
            "#,
        )
        .unwrap();
        assert_eq!(config.barrier.dormant, DormantRule::fractional());
        assert_eq!(config.barrier.limit_haircut, 0.95);
    }

    #[test]
    fn test_invalid_toml_values() {
        assert!(matches!(
            RiskConfig::from_toml_str("log_level = \"loud\""),
            Err(ConfigError::FileError(_))
        ));
        assert!(matches!(
            RiskConfig::from_toml_str("[barrier]\nlimit_haircut = 1.5"),
            Err(ConfigError::FileError(msg)) if msg.contains("limit haircut")
        ));
        assert!(matches!(
            RiskConfig::from_toml_str("[parallel]\nbatch_size = 0"),
            Err(ConfigError::InvalidParallel(_))
        ));
    }

    #[test]
    fn test_overrides_take_precedence() {
        let mut config = RiskConfig::from_toml_str("log_level = \"warn\"").unwrap();
        config
            .apply_overrides(lookup(&[
                ("PRICER_LOG_LEVEL", "trace"),
                ("PRICER_BATCH_SIZE", "16"),
                ("PRICER_PARALLEL_THRESHOLD", " 2000 "),
                ("PRICER_LIMIT_HAIRCUT", "0.9"),
            ]))
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Trace);
        assert_eq!(config.parallel.batch_size, 16);
        assert_eq!(config.parallel.parallel_threshold, 2000);
        assert_eq!(config.barrier.limit_haircut, 0.9);
    }

    #[test]
    fn test_missing_overrides_keep_file_values() {
        let mut config = RiskConfig::from_toml_str("[parallel]\nbatch_size = 8").unwrap();
        config.apply_overrides(lookup(&[])).unwrap();
        assert_eq!(config.parallel.batch_size, 8);
    }

    #[test]
    fn test_bad_override_rejected() {
        let mut config = RiskConfig::default();
        let err = config
            .apply_overrides(lookup(&[("PRICER_BATCH_SIZE", "many")]))
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for PRICER_BATCH_SIZE: many");
    }

    #[test]
    fn test_haircut_override_is_validated() {
        let mut config = RiskConfig::default();
        config
            .apply_overrides(lookup(&[("PRICER_LIMIT_HAIRCUT", "1.5")]))
            .unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidBarrierPolicy(_))
        ));
    }

    #[test]
    fn test_haircut_override_reaches_barrier_price() {
        use pricer_core::market_data::MarketSnapshot;
        use pricer_core::traits::priceable::Priceable;
        use pricer_models::instruments::{
            BarrierConfig, BarrierDirection, BarrierOption, InstrumentParams, OptionType, Spot,
            VanillaOption,
        };

        let mut config = RiskConfig::default();
        config
            .apply_overrides(lookup(&[("PRICER_LIMIT_HAIRCUT", "0.8")]))
            .unwrap();
        config.validate().unwrap();

        let params = InstrumentParams::new(100.0, 1.0, 1.0).unwrap();
        let levels =
            BarrierConfig::from_levels(95.0, 0.0, 0.0, 0.0, BarrierDirection::Up).unwrap();
        let option = Instrument::from(BarrierOption::new(params, OptionType::Call, levels));
        let market = MarketSnapshot::new(100.0, 0.2, 0.05);

        let configured = config.apply_barrier_policy(option).unwrap();
        let vanilla = VanillaOption::new(params, OptionType::Call)
            .price(&market)
            .unwrap();
        let price = configured.price(&market).unwrap();
        assert!((price - 0.8 * vanilla).abs() < 1e-12);
        assert!(price != option.price(&market).unwrap());

        let spot = Instrument::from(Spot::<f64>::new());
        assert_eq!(config.apply_barrier_policy(spot).unwrap(), spot);
    }

    #[test]
    fn test_from_file_missing() {
        assert!(matches!(
            RiskConfig::from_file("/nonexistent/risk.toml"),
            Err(ConfigError::FileError(_))
        ));
    }
}
