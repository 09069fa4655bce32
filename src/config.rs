//! Application configuration.
//!
//! Layered as defaults, then an optional JSON file, then environment
//! variables. Use the builder methods to customise in tests.
//!
//! # Example
//!
//! ```ignore
//! use carbon_tracker::config::AppConfig;
//!
//! let config = AppConfig::default()
//!     .with_toast_duration(Duration::from_millis(500))
//!     .with_share_timeout(Duration::from_secs(1));
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::state::feed::DEFAULT_SHARE_FALLBACK;

pub const ENV_TICK_MS: &str = "CARBON_TRACKER_TICK_MS";
pub const ENV_TOAST_MS: &str = "CARBON_TRACKER_TOAST_MS";
pub const ENV_SHARE_TIMEOUT_MS: &str = "CARBON_TRACKER_SHARE_TIMEOUT_MS";
pub const ENV_LOG: &str = "CARBON_TRACKER_LOG";
pub const ENV_LOG_FILE: &str = "CARBON_TRACKER_LOG_FILE";

const APP_DIR: &str = "carbon-tracker";
const CONFIG_FILE: &str = "config.json";
const LOG_FILE: &str = "carbon-tracker.log";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{var} must be a positive integer, got {value:?}")]
    InvalidEnv { var: &'static str, value: String },

    #[error("{0}")]
    Invalid(String),
}

/// Per-counter animation durations (from the dashboard design).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationDurations {
    pub points: Duration,
    pub xp: Duration,
    pub carbon: Duration,
    pub streak: Duration,
}

impl Default for AnimationDurations {
    fn default() -> Self {
        Self {
            points: Duration::from_millis(700),
            xp: Duration::from_millis(900),
            carbon: Duration::from_millis(700),
            streak: Duration::from_millis(700),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// UI tick and animation frame interval (default 16ms, ~60fps)
    pub frame_interval: Duration,
    /// How long a toast stays visible (default 1800ms)
    pub toast_duration: Duration,
    /// Upper bound on a clipboard write during share (default 1500ms)
    pub share_timeout: Duration,
    pub animations: AnimationDurations,
    /// Link shared when a post id cannot be resolved
    pub share_fallback_url: String,
    /// `tracing` filter directive (default "info")
    pub log_filter: String,
    /// Log destination; `None` disables file logging
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            frame_interval: Duration::from_millis(16),
            toast_duration: Duration::from_millis(1800),
            share_timeout: Duration::from_millis(1500),
            animations: AnimationDurations::default(),
            share_fallback_url: DEFAULT_SHARE_FALLBACK.to_string(),
            log_filter: "info".to_string(),
            log_file: default_log_file(),
        }
    }
}

/// On-disk overrides. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    frame_interval_ms: Option<u64>,
    toast_ms: Option<u64>,
    share_timeout_ms: Option<u64>,
    share_fallback_url: Option<String>,
    log_filter: Option<String>,
    log_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults, then the user config file if present, then the environment.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(path) = default_config_file() {
            if path.exists() {
                config = config.merge_file(&path)?;
            }
        }
        config = config.merge_env(|var| std::env::var(var).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from a JSON file.
    pub fn merge_file(mut self, path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file: FileConfig = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(ms) = file.frame_interval_ms {
            self.frame_interval = Duration::from_millis(ms);
        }
        if let Some(ms) = file.toast_ms {
            self.toast_duration = Duration::from_millis(ms);
        }
        if let Some(ms) = file.share_timeout_ms {
            self.share_timeout = Duration::from_millis(ms);
        }
        if let Some(url) = file.share_fallback_url {
            self.share_fallback_url = url;
        }
        if let Some(filter) = file.log_filter {
            self.log_filter = filter;
        }
        if let Some(path) = file.log_file {
            self.log_file = Some(path);
        }
        Ok(self)
    }

    /// Apply overrides from environment variables, read through `lookup`.
    pub fn merge_env<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(ms) = parse_millis(&lookup, ENV_TICK_MS)? {
            self.frame_interval = ms;
        }
        if let Some(ms) = parse_millis(&lookup, ENV_TOAST_MS)? {
            self.toast_duration = ms;
        }
        if let Some(ms) = parse_millis(&lookup, ENV_SHARE_TIMEOUT_MS)? {
            self.share_timeout = ms;
        }
        if let Some(filter) = lookup(ENV_LOG) {
            self.log_filter = filter;
        }
        if let Some(path) = lookup(ENV_LOG_FILE) {
            self.log_file = if path.is_empty() {
                None
            } else {
                Some(PathBuf::from(path))
            };
        }
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frame_interval.is_zero() {
            return Err(ConfigError::Invalid("frame interval must be positive".into()));
        }
        if self.toast_duration.is_zero() {
            return Err(ConfigError::Invalid("toast duration must be positive".into()));
        }
        if self.share_timeout.is_zero() {
            return Err(ConfigError::Invalid("share timeout must be positive".into()));
        }
        Ok(())
    }

    pub fn with_frame_interval(mut self, interval: Duration) -> Self {
        self.frame_interval = interval;
        self
    }

    pub fn with_toast_duration(mut self, duration: Duration) -> Self {
        self.toast_duration = duration;
        self
    }

    pub fn with_share_timeout(mut self, timeout: Duration) -> Self {
        self.share_timeout = timeout;
        self
    }

    pub fn with_animations(mut self, animations: AnimationDurations) -> Self {
        self.animations = animations;
        self
    }

    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }
}

fn parse_millis<F>(lookup: &F, var: &'static str) -> Result<Option<Duration>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = lookup(var) else {
        return Ok(None);
    };
    match value.trim().parse::<u64>() {
        Ok(ms) if ms > 0 => Ok(Some(Duration::from_millis(ms))),
        _ => Err(ConfigError::InvalidEnv { var, value }),
    }
}

/// `<config dir>/carbon-tracker/config.json`
pub fn default_config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

/// `<data dir>/carbon-tracker/carbon-tracker.log`
pub fn default_log_file() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join(APP_DIR).join(LOG_FILE))
}
