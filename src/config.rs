//! Configuration management for crmbase
//!
//! This module handles loading, parsing, and validation of configuration
//! files.

use crate::constants::{APP_DIR_NAME, CONFIG_FILE_NAME, CONFIG_GENERATED, DEFAULT_BASE_CURRENCY, DEFAULT_LOCALE};
use crate::utils::datetime;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub app: AppConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// ISO 4217 code of the currency used for price display
    pub base_currency: String,
    /// Locale used when a caller does not specify one
    pub default_locale: String,
    /// Map of locale code -> display title, e.g. `en = "English"`
    pub available_locales: BTreeMap<String, String>,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Default chrono format string for rendered dates
    pub date_format: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable file logging
    pub enabled: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        let mut available_locales = BTreeMap::new();
        available_locales.insert("en".to_string(), "English".to_string());

        Self {
            base_currency: DEFAULT_BASE_CURRENCY.to_string(),
            default_locale: DEFAULT_LOCALE.to_string(),
            available_locales,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: crate::constants::DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(CONFIG_FILE_NAME);
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join(APP_DIR_NAME).join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let currency = &self.app.base_currency;
        if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_alphabetic()) {
            anyhow::bail!("base_currency must be a 3-letter ISO 4217 code, got '{}'", currency);
        }

        if self.app.available_locales.is_empty() {
            anyhow::bail!("available_locales cannot be empty");
        }

        if !self.app.available_locales.contains_key(&self.app.default_locale) {
            anyhow::bail!(
                "default_locale '{}' is not listed in available_locales",
                self.app.default_locale
            );
        }

        if !datetime::is_valid_format(&self.display.date_format) {
            anyhow::bail!("Invalid date_format '{}'", self.display.date_format);
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = "# Crmbase Configuration File\n\n";
        let full_content = header.to_string() + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        log::info!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(APP_DIR_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
