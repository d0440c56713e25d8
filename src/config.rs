//! Configuration management with validation and defaults
//!
//! Values come from defaults, an optional TOML file, then `KUJI_*`
//! environment overrides. The binary applies CLI flags last.

use crate::draws::labels::Locale;
use crate::errors::{ConfigurationError, KujiResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Longest reveal delay accepted by `validate`.
pub const MAX_DELAY_MS: u64 = 60_000;

/// Complete draw tool configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct KujiConfig {
    pub animation: AnimationConfig,
    pub die: DieConfig,
    pub display: DisplayConfig,
}

/// Reveal timing
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnimationConfig {
    /// Delay between starting a draw and revealing it
    pub delay_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self { delay_ms: 1000 }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DieConfig {
    /// Sides used when a roll does not name them
    pub default_sides: u32,
}

impl Default for DieConfig {
    fn default() -> Self {
        Self { default_sides: 6 }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    pub locale: Locale,
    /// Render the history list after every reveal
    pub show_history_after_draw: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            locale: Locale::En,
            show_history_after_draw: true,
        }
    }
}

impl KujiConfig {
    /// Configuration that reveals draws immediately (scripting and tests)
    pub fn instant() -> Self {
        Self {
            animation: AnimationConfig { delay_ms: 0 },
            ..Default::default()
        }
    }

    /// Validate configuration for logical consistency
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.die.default_sides == 0 {
            return Err(ConfigValidationError::InvalidValue(
                "die.default_sides must be > 0".to_string(),
            ));
        }

        if self.animation.delay_ms > MAX_DELAY_MS {
            return Err(ConfigValidationError::InvalidValue(format!(
                "animation.delay_ms must be <= {}",
                MAX_DELAY_MS
            )));
        }

        Ok(())
    }

    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.animation.delay_ms)
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    InvalidValue(String),
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigValidationError::InvalidValue(msg) => write!(f, "Invalid configuration value: {}", msg),
        }
    }
}

impl std::error::Error for ConfigValidationError {}

impl From<ConfigValidationError> for ConfigurationError {
    fn from(e: ConfigValidationError) -> Self {
        ConfigurationError::ValidationFailed(e.to_string())
    }
}

/// Configuration loader with environment variable support
#[derive(Debug, Default)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the configuration file path
    pub fn with_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration from file and environment variables
    pub fn load(&self) -> KujiResult<KujiConfig> {
        let mut config = match &self.config_path {
            Some(path) => Self::load_from_file(path)?,
            None => KujiConfig::default(),
        };

        Self::apply_overrides(&mut config, |key| env::var(key).ok())?;

        config.validate().map_err(ConfigurationError::from)?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load_from_file(path: &Path) -> KujiResult<KujiConfig> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigurationError::LoadFailed(format!("Failed to read {}: {}", path.display(), e))
        })?;

        toml::from_str(&content)
            .map_err(|e| ConfigurationError::LoadFailed(format!("Failed to parse TOML: {}", e)).into())
    }

    /// Apply `KUJI_*` overrides read through `lookup`
    fn apply_overrides<F>(config: &mut KujiConfig, lookup: F) -> KujiResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(delay) = lookup("KUJI_DELAY_MS") {
            config.animation.delay_ms = delay.trim().parse().map_err(|_| ConfigurationError::InvalidValue {
                field: "KUJI_DELAY_MS".to_string(),
                value: delay.clone(),
                reason: "Invalid delay in milliseconds".to_string(),
            })?;
        }

        if let Some(sides) = lookup("KUJI_DIE_SIDES") {
            config.die.default_sides = sides.trim().parse().map_err(|_| ConfigurationError::InvalidValue {
                field: "KUJI_DIE_SIDES".to_string(),
                value: sides.clone(),
                reason: "Invalid number of sides".to_string(),
            })?;
        }

        if let Some(locale) = lookup("KUJI_LOCALE") {
            config.display.locale = locale.parse().map_err(|reason| ConfigurationError::InvalidValue {
                field: "KUJI_LOCALE".to_string(),
                value: locale.clone(),
                reason,
            })?;
        }

        Ok(())
    }
}
