//! Configuration type definitions

use crate::input::touch::DEFAULT_MAX_SLOTS;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Input translation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Forward host keys with no device mapping as the unknown sentinel
    /// instead of dropping them
    #[serde(default)]
    pub forward_unknown_keys: bool,

    /// Number of touch slots per display; ids at or above this are logged as
    /// violations (and still forwarded)
    #[serde(default = "default_max_touch_slots")]
    pub max_touch_slots: u32,
}

fn default_max_touch_slots() -> u32 {
    DEFAULT_MAX_SLOTS
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            forward_unknown_keys: false,
            max_touch_slots: default_max_touch_slots(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level ("trace", "debug", "info", "warn", "error")
    #[serde(default = "default_level")]
    pub level: String,

    /// Output format ("pretty", "compact", "json")
    #[serde(default = "default_format")]
    pub format: String,

    /// Directory for log files (None = console only)
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
}

fn default_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
            log_dir: None,
        }
    }
}

/// Trace replay configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayConfig {
    /// Sleep between steps according to their timestamps
    #[serde(default = "default_honor_timestamps")]
    pub honor_timestamps: bool,

    /// Playback speed multiplier; delays are divided by this
    #[serde(default = "default_speed")]
    pub speed: f64,
}

fn default_honor_timestamps() -> bool {
    true
}

fn default_speed() -> f64 {
    1.0
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            honor_timestamps: default_honor_timestamps(),
            speed: default_speed(),
        }
    }
}
