//! Configuration management
//!
//! Handles loading, validation, and merging of configuration from:
//! - TOML files
//! - CLI arguments

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

pub mod types;

pub use types::{InputConfig, LoggingConfig, ReplayConfig};

/// Upper bound for `input.max_touch_slots`
pub const MAX_TOUCH_SLOTS_LIMIT: u32 = 64;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Input translation configuration
    #[serde(default)]
    pub input: InputConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Trace replay configuration
    #[serde(default)]
    pub replay: ReplayConfig,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;

        config.validate()?;
        Ok(config)
    }

    /// Load from an explicit path, or from the default path if it exists
    ///
    /// An explicit path must exist. A missing default file falls back to
    /// [`Config::default_config`].
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            Some(path) => {
                warn!(
                    "No config at {}, using built-in defaults",
                    path.display()
                );
                Ok(Self::default_config())
            }
            None => {
                warn!("No config directory available, using built-in defaults");
                Ok(Self::default_config())
            }
        }
    }

    /// Default config location (`$XDG_CONFIG_HOME/vdisplay-bridge/config.toml`)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("vdisplay-bridge").join("config.toml"))
    }

    /// Create default configuration
    pub fn default_config() -> Self {
        Config {
            input: InputConfig::default(),
            logging: LoggingConfig::default(),
            replay: ReplayConfig::default(),
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => anyhow::bail!("Invalid log level: {}", self.logging.level),
        }

        match self.logging.format.as_str() {
            "pretty" | "compact" | "json" => {}
            _ => anyhow::bail!("Invalid log format: {}", self.logging.format),
        }

        if self.input.max_touch_slots == 0 || self.input.max_touch_slots > MAX_TOUCH_SLOTS_LIMIT {
            anyhow::bail!(
                "max_touch_slots ({}) must be between 1 and {}",
                self.input.max_touch_slots,
                MAX_TOUCH_SLOTS_LIMIT
            );
        }

        if !self.replay.speed.is_finite() || self.replay.speed <= 0.0 {
            anyhow::bail!("Replay speed must be positive, got {}", self.replay.speed);
        }

        Ok(())
    }

    /// Override config with CLI arguments
    pub fn with_overrides(
        mut self,
        log_format: Option<String>,
        no_timing: bool,
        speed: Option<f64>,
    ) -> Self {
        if let Some(format) = log_format {
            self.logging.format = format;
        }
        if no_timing {
            self.replay.honor_timestamps = false;
        }
        if let Some(speed) = speed {
            self.replay.speed = speed;
        }

        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}
