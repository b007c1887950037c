//! Configuration management for Knack.
//!
//! Provides TOML-based configuration with XDG-compliant paths and
//! environment variable overrides. Nothing reads configuration implicitly:
//! callers load a [`KnackConfig`] and pass the relevant section to the
//! operations that need it.

use crate::error::{ConfigError, ConfigResult};
use crate::types::{ColorFormat, MonthOverflow, TemplateScan};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Env var overriding `color.default_format`.
pub const ENV_COLOR_FORMAT: &str = "KNACK_COLOR_FORMAT";
/// Env var overriding `calendar.month_overflow`.
pub const ENV_MONTH_OVERFLOW: &str = "KNACK_MONTH_OVERFLOW";
/// Env var overriding `calendar.template_scanning`.
pub const ENV_TEMPLATE_SCANNING: &str = "KNACK_TEMPLATE_SCANNING";

/// Main library configuration.
///
/// This is loaded from `~/.config/knack/config.toml` (or platform equivalent).
/// If the file doesn't exist, default values are used.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KnackConfig {
    /// Color conversion settings
    pub color: ColorConfig,
    /// Calendar arithmetic and formatting settings
    pub calendar: CalendarConfig,
}

impl KnackConfig {
    /// Load configuration from disk, falling back to defaults if not found.
    ///
    /// # Errors
    /// Returns error if:
    /// - Config directory cannot be determined
    /// - File exists but cannot be read
    /// - File contents are not valid TOML
    pub fn load() -> ConfigResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from an explicit path, falling back to defaults if
    /// the file is absent.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        if path.exists() {
            tracing::debug!("Loading config from {}", path.display());
            let contents = fs::read_to_string(path)?;
            let config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            tracing::debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration with environment variable overrides.
    ///
    /// Supports the following environment variables:
    /// - `KNACK_COLOR_FORMAT`: Override the default color format (hex/rgb/rgba)
    /// - `KNACK_MONTH_OVERFLOW`: Override month overflow handling (clamp/roll)
    /// - `KNACK_TEMPLATE_SCANNING`: Override template scanning (tokens/literal)
    pub fn load_with_env() -> ConfigResult<Self> {
        let mut config = Self::load()?;
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Apply overrides from a key lookup (normally the process environment).
    ///
    /// Values that do not parse are ignored and the configured value is kept.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup(ENV_COLOR_FORMAT) {
            match val.parse::<ColorFormat>() {
                Ok(format) => {
                    self.color.default_format = format;
                    tracing::debug!("Override color.default_format from env: {}", format);
                }
                Err(e) => tracing::warn!("Ignoring {}: {}", ENV_COLOR_FORMAT, e),
            }
        }

        if let Some(val) = lookup(ENV_MONTH_OVERFLOW) {
            match val.parse::<MonthOverflow>() {
                Ok(overflow) => {
                    self.calendar.month_overflow = overflow;
                    tracing::debug!("Override calendar.month_overflow from env: {:?}", overflow);
                }
                Err(e) => tracing::warn!("Ignoring {}: {}", ENV_MONTH_OVERFLOW, e),
            }
        }

        if let Some(val) = lookup(ENV_TEMPLATE_SCANNING) {
            match val.parse::<TemplateScan>() {
                Ok(scan) => {
                    self.calendar.template_scanning = scan;
                    tracing::debug!("Override calendar.template_scanning from env: {:?}", scan);
                }
                Err(e) => tracing::warn!("Ignoring {}: {}", ENV_TEMPLATE_SCANNING, e),
            }
        }
    }

    /// Save configuration to the platform config path.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> ConfigResult<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to an explicit path.
    pub fn save_to(&self, path: &Path) -> ConfigResult<()> {
        let config_dir = path.parent().ok_or_else(|| ConfigError::InvalidValue {
            field: "config_path".to_string(),
            reason: "no parent directory".to_string(),
        })?;

        fs::create_dir_all(config_dir)?;
        tracing::debug!("Saving config to {}", path.display());

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Get the path to the configuration file.
    ///
    /// Uses XDG base directories: `~/.config/knack/config.toml`
    pub fn config_path() -> ConfigResult<PathBuf> {
        let dirs = ProjectDirs::from("com", "knack", "knack").ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.config_dir().join("config.toml"))
    }
}

/// Color conversion settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    /// Format used when the caller does not name one
    pub default_format: ColorFormat,
}

/// Calendar settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Day-of-month handling for month and year arithmetic
    pub month_overflow: MonthOverflow,
    /// How date templates are expanded
    pub template_scanning: TemplateScan,
}
