//! Configuration loading and management
//!
//! Configuration is loaded from `~/.config/contentlift/config.toml`
//!
//! This module follows the XDG Base Directory Specification:
//! - Config: `$XDG_CONFIG_HOME/contentlift/` (~/.config/contentlift/)
//! - State/Logs: `$XDG_STATE_HOME/contentlift/` (~/.local/state/contentlift/)

use crate::analytics::leaderboard::DEFAULT_TOP_N;
use crate::analytics::overview::DEFAULT_LAG_BAND;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Returns a best-effort home directory path.
fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Returns XDG_CONFIG_HOME or ~/.config
fn xdg_config_home() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"))
}

/// Returns XDG_STATE_HOME or ~/.local/state
fn xdg_state_home() -> PathBuf {
    std::env::var("XDG_STATE_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local/state"))
}

/// Main configuration struct
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Analytics configuration
    #[serde(default)]
    pub analytics: AnalyticsConfig,

    /// Default input file locations
    #[serde(default)]
    pub data: DataConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Analytics tuning
#[derive(Debug, Deserialize, Clone)]
pub struct AnalyticsConfig {
    /// Number of days on the top revenue leaderboard
    #[serde(default = "default_top_revenue_days")]
    pub top_revenue_days: usize,

    /// Half-width of the "average" band for lag status
    #[serde(default = "default_lag_band")]
    pub lag_band: f64,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            top_revenue_days: default_top_revenue_days(),
            lag_band: default_lag_band(),
        }
    }
}

impl AnalyticsConfig {
    /// Validate configuration, returning error message if invalid
    pub fn validate(&self) -> Result<()> {
        if self.top_revenue_days == 0 {
            return Err(Error::Config(
                "analytics.top_revenue_days must be at least 1".to_string(),
            ));
        }
        if !self.lag_band.is_finite() || self.lag_band < 0.0 {
            return Err(Error::Config(
                "analytics.lag_band must be a non-negative number".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_top_revenue_days() -> usize {
    DEFAULT_TOP_N
}

fn default_lag_band() -> f64 {
    DEFAULT_LAG_BAND
}

/// Default input file locations, used when no path is given on the command line
#[derive(Debug, Deserialize, Default, Clone)]
pub struct DataConfig {
    /// Content events JSON file
    pub content_path: Option<PathBuf>,
    /// Daily sales JSON file
    pub sales_path: Option<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Maximum number of log files to keep
    #[serde(default = "default_max_log_files")]
    pub max_files: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            max_files: default_max_log_files(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_log_files() -> usize {
    5
}

impl Config {
    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            return Ok(Config::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config file {:?}: {}", path, e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate every section
    pub fn validate(&self) -> Result<()> {
        self.analytics.validate()
    }

    /// Returns the default config file path
    ///
    /// `$XDG_CONFIG_HOME/contentlift/config.toml` (~/.config/contentlift/config.toml)
    pub fn config_path() -> PathBuf {
        xdg_config_home().join("contentlift").join("config.toml")
    }

    /// Returns the state directory path (for logs)
    ///
    /// `$XDG_STATE_HOME/contentlift/` (~/.local/state/contentlift/)
    pub fn state_dir() -> PathBuf {
        xdg_state_home().join("contentlift")
    }
}
