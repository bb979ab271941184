//! Configuration management for commandbook.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;
use std::time::Duration;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default config directory name.
const CONFIG_DIR_NAME: &str = "commandbook";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `COMMANDBOOK_`)
/// 2. TOML config file at `~/.config/commandbook/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Search configuration.
    pub search: SearchConfig,
    /// Catalog configuration.
    pub catalog: CatalogConfig,
}

/// Search-related configuration.
///
/// The result cap and the debounce delay are deliberately configuration
/// rather than constants: the search routine itself takes them as inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Maximum number of results a search returns.
    pub result_limit: usize,
    /// Maximum number of inline suggestions.
    pub suggestion_limit: usize,
    /// Trailing-edge delay for coalescing rapid queries, in milliseconds.
    pub debounce_ms: u64,
}

/// Catalog-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Path to a JSON file replacing the built-in command data set.
    pub commands_path: Option<PathBuf>,
    /// Path to a JSON file replacing the built-in example data set.
    pub examples_path: Option<PathBuf>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            result_limit: 10,
            suggestion_limit: 5,
            debounce_ms: 300,
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// Configuration is loaded in this order (later sources override earlier):
    /// 1. Default values
    /// 2. TOML config file (if exists)
    /// 3. Environment variables (prefixed with `COMMANDBOOK_`)
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file).nested())
            .merge(Env::prefixed("COMMANDBOOK_").split("_"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.search.result_limit == 0 {
            return Err(Error::config_validation(
                "search.result_limit must be greater than 0",
            ));
        }

        if self.search.suggestion_limit == 0 {
            return Err(Error::config_validation(
                "search.suggestion_limit must be greater than 0",
            ));
        }

        if let Some(path) = &self.catalog.commands_path {
            if path.as_os_str().is_empty() {
                return Err(Error::config_validation(
                    "catalog.commands_path must not be empty",
                ));
            }
        }

        if let Some(path) = &self.catalog.examples_path {
            if path.as_os_str().is_empty() {
                return Err(Error::config_validation(
                    "catalog.examples_path must not be empty",
                ));
            }
        }

        Ok(())
    }

    /// Get the debounce delay as a Duration.
    #[must_use]
    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.search.debounce_ms)
    }
}
