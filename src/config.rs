//! Estimator Configuration
//!
//! Loaded from an optional JSON file, then overridden from environment
//! variables. Only presentation timing and logging are configurable; the
//! emission model itself is fixed.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Environment variable overriding the reveal delay (milliseconds)
pub const ENV_REVEAL_DELAY_MS: &str = "FOOTPRINT_REVEAL_DELAY_MS";

/// Environment variable overriding the log filter
pub const ENV_LOG: &str = "FOOTPRINT_LOG";

/// Path of an optional JSON config file
pub const ENV_CONFIG: &str = "FOOTPRINT_CONFIG";

pub const DEFAULT_REVEAL_DELAY_MS: u64 = 1500;

pub const DEFAULT_LOG_FILTER: &str = "footprint_estimator_rust=info,warn";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("environment variable {var} has invalid value '{value}'")]
    InvalidEnv { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EstimatorConfig {
    /// Cosmetic delay between submit and results (ms)
    pub reveal_delay_ms: u64,
    /// tracing filter directive for the binary
    pub log_filter: Option<String>,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            reveal_delay_ms: DEFAULT_REVEAL_DELAY_MS,
            log_filter: None,
        }
    }
}

impl EstimatorConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let config: EstimatorConfig = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config JSON: {:?}", path))?;

        Ok(config)
    }

    /// Defaults with environment overrides applied
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_overrides(env_lookup)
    }

    /// The file named by `FOOTPRINT_CONFIG` if set, otherwise defaults,
    /// with environment overrides on top
    pub fn resolve() -> Result<Self> {
        match env_lookup(ENV_CONFIG) {
            Some(path) => Ok(Self::load(Path::new(&path))?.with_overrides(env_lookup)?),
            None => Ok(Self::from_env()?),
        }
    }

    /// Apply overrides from a variable lookup (normally the process environment)
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_REVEAL_DELAY_MS) {
            self.reveal_delay_ms = raw.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                var: ENV_REVEAL_DELAY_MS,
                value: raw.clone(),
            })?;
        }

        if let Some(filter) = lookup(ENV_LOG).filter(|f| !f.trim().is_empty()) {
            self.log_filter = Some(filter);
        }

        Ok(self)
    }

    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}

/// Process environment lookup; unset and non-UTF-8 variables read as absent
pub fn env_lookup(var: &str) -> Option<String> {
    std::env::var(var).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = EstimatorConfig::default();
        assert_eq!(config.reveal_delay(), Duration::from_millis(1500));
        assert_eq!(config.log_filter(), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_partial_json_takes_defaults() {
        let config: EstimatorConfig = serde_json::from_str(r#"{"reveal_delay_ms": 0}"#).unwrap();
        assert_eq!(config.reveal_delay_ms, 0);
        assert_eq!(config.log_filter, None);
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let parsed = serde_json::from_str::<EstimatorConfig>(r#"{"reveal_delay": 10}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_env_overrides() {
        let config = EstimatorConfig::default()
            .with_overrides(lookup(&[(ENV_REVEAL_DELAY_MS, " 250 "), (ENV_LOG, "debug")]))
            .unwrap();
        assert_eq!(config.reveal_delay_ms, 250);
        assert_eq!(config.log_filter(), "debug");
    }

    #[test]
    fn test_from_env_reads_process_environment() {
        std::env::set_var(ENV_REVEAL_DELAY_MS, "42");
        let config = EstimatorConfig::from_env();
        std::env::remove_var(ENV_REVEAL_DELAY_MS);

        assert_eq!(config.unwrap().reveal_delay(), Duration::from_millis(42));
        assert_eq!(env_lookup(ENV_REVEAL_DELAY_MS), None);
    }

    #[test]
    fn test_invalid_env_delay() {
        let err = EstimatorConfig::default()
            .with_overrides(lookup(&[(ENV_REVEAL_DELAY_MS, "soon")]))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "environment variable FOOTPRINT_REVEAL_DELAY_MS has invalid value 'soon'"
        );
    }

    #[test]
    fn test_load_missing_file() {
        let err = EstimatorConfig::load(Path::new("/nonexistent/footprint.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
