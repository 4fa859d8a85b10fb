//! Top-level cider configuration with layered resolution.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ApiConfig, CacheConfig, ModelConfig, PollConfig, ReportConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`SKYPORTAL_TOKEN`, `CIDER_*`)
/// 3. Config file (TOML, passed with `--config`)
/// 4. Compiled defaults
///
/// `poll.start_time` in the file form is a quoted RFC 3339 string.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CiderConfig {
    pub api: ApiConfig,
    pub poll: PollConfig,
    pub model: ModelConfig,
    pub cache: CacheConfig,
    pub report: ReportConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub instance: Option<String>,
    pub token: Option<String>,
    pub interval_secs: Option<u64>,
    pub start_time: Option<DateTime<Utc>>,
    pub lookback_days: Option<i64>,
    pub instrument_ids: Option<Vec<i64>>,
    pub model_path: Option<String>,
    pub cache_dir: Option<String>,
    pub no_cache: bool,
    pub clear_cache: bool,
    pub results_log: Option<String>,
    pub publish: bool,
}

impl CiderConfig {
    /// Load configuration with layered resolution.
    ///
    /// Resolution order (highest priority first):
    /// 1. CLI flags
    /// 2. Environment variables (`SKYPORTAL_TOKEN`, `CIDER_*`)
    /// 3. Config file (when given; a missing file is an error)
    /// 4. Compiled defaults
    pub fn load(
        config_file: Option<&Path>,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        // Layer 3: config file. Keys the file omits keep their defaults.
        let mut config = match config_file {
            Some(path) => Self::from_toml_file(path)?,
            None => Self::default(),
        };

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Parse a TOML config file.
    /// Unknown keys are silently ignored (forward-compatible).
    fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Apply environment variable overrides.
    /// Pattern: `CIDER_INSTANCE_URL`, `CIDER_POLL_INTERVAL_SECS`, etc.
    /// `SKYPORTAL_TOKEN` is the conventional token variable.
    fn apply_env_overrides(config: &mut CiderConfig) {
        if let Ok(val) = std::env::var("SKYPORTAL_TOKEN") {
            if !val.is_empty() {
                config.api.token = Some(val);
            }
        }
        if let Ok(val) = std::env::var("CIDER_INSTANCE_URL") {
            if !val.is_empty() {
                config.api.instance_url = val;
            }
        }
        if let Ok(val) = std::env::var("CIDER_POLL_INTERVAL_SECS") {
            if let Ok(v) = val.parse::<u64>() {
                config.poll.interval_secs = v;
            }
        }
        if let Ok(val) = std::env::var("CIDER_LOOKBACK_DAYS") {
            if let Ok(v) = val.parse::<i64>() {
                config.poll.lookback_days = v;
            }
        }
        if let Ok(val) = std::env::var("CIDER_MODEL_PATH") {
            if !val.is_empty() {
                config.model.model_path = val;
            }
        }
        if let Ok(val) = std::env::var("CIDER_CACHE_DIR") {
            if !val.is_empty() {
                config.cache.dir = val;
            }
        }
        if let Ok(val) = std::env::var("CIDER_RESULTS_LOG") {
            if !val.is_empty() {
                config.report.results_log = Some(val);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut CiderConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.instance {
            config.api.instance_url = v.clone();
        }
        if let Some(ref v) = cli.token {
            config.api.token = Some(v.clone());
        }
        if let Some(v) = cli.interval_secs {
            config.poll.interval_secs = v;
        }
        if let Some(v) = cli.start_time {
            config.poll.start_time = Some(v);
        }
        if let Some(v) = cli.lookback_days {
            config.poll.lookback_days = v;
        }
        if let Some(ref v) = cli.instrument_ids {
            config.poll.instrument_ids = v.clone();
        }
        if let Some(ref v) = cli.model_path {
            config.model.model_path = v.clone();
        }
        if let Some(ref v) = cli.cache_dir {
            config.cache.dir = v.clone();
        }
        if cli.no_cache {
            config.cache.disabled = true;
        }
        if cli.clear_cache {
            config.cache.clear_on_start = true;
        }
        if let Some(ref v) = cli.results_log {
            config.report.results_log = Some(v.clone());
        }
        if cli.publish {
            config.report.publish = true;
        }
    }

    /// Validate the merged configuration.
    pub fn validate(config: &CiderConfig) -> Result<(), ConfigError> {
        if config.api.instance_url.is_empty() || !config.api.instance_url.starts_with("http") {
            return Err(ConfigError::ValidationFailed {
                field: "api.instance_url".to_string(),
                message: "must be an http(s) URL".to_string(),
            });
        }
        match config.api.token {
            Some(ref token) if !token.is_empty() => {}
            _ => {
                return Err(ConfigError::MissingValue {
                    field: "api.token".to_string(),
                });
            }
        }
        if config.poll.lookback_days < 0 {
            return Err(ConfigError::ValidationFailed {
                field: "poll.lookback_days".to_string(),
                message: "must be non-negative".to_string(),
            });
        }
        if config.model.grid_points < 2 {
            return Err(ConfigError::ValidationFailed {
                field: "model.grid_points".to_string(),
                message: "must be at least 2".to_string(),
            });
        }
        if config.model.grid_max_angstrom <= config.model.grid_min_angstrom {
            return Err(ConfigError::ValidationFailed {
                field: "model.grid_max_angstrom".to_string(),
                message: "must be greater than grid_min_angstrom".to_string(),
            });
        }
        if config.model.model_path.is_empty() {
            return Err(ConfigError::MissingValue {
                field: "model.model_path".to_string(),
            });
        }
        Ok(())
    }
}
