// src/infrastructure/config.rs
use crate::constants::{
    BROWSER_LAUNCH_DELAY_MS, CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_PAGE_TITLE,
};
use crate::domain::DomainError;
use crate::ports::Stylesheet;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// TOML configuration, every key optional
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub page: PageConfig,
    #[serde(default)]
    pub browser: BrowserConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct PageConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub stylesheet: Stylesheet,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct BrowserConfig {
    #[serde(default = "default_launch_delay_ms")]
    pub launch_delay_ms: u64,
}

fn default_title() -> String { DEFAULT_PAGE_TITLE.to_string() }
fn default_launch_delay_ms() -> u64 { BROWSER_LAUNCH_DELAY_MS }

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            stylesheet: Stylesheet::default(),
        }
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            launch_delay_ms: default_launch_delay_ms(),
        }
    }
}

impl Config {
    /// `<config_dir>/notion-clone/config.toml`, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load configuration from TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            DomainError::ConfigError(format!("{}: {}", path.display(), e))
        })?;

        Ok(config)
    }

    /// Explicit path must exist; otherwise the default location is used when
    /// present, and built-in defaults when not.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        Self::resolve_from(explicit, Self::default_path())
    }

    /// Same as `resolve` with the default location given by the caller
    pub fn resolve_from(explicit: Option<&Path>, default: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = explicit {
            debug!(?path, "Loading config from provided path");
            return Self::load(path);
        }

        match default {
            Some(path) if path.exists() => {
                debug!(?path, "Loading config from default location");
                Self::load(&path)
            }
            _ => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Save configuration to TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let toml_string = toml::to_string_pretty(self)
            .context("Failed to serialize config to TOML")?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
        }

        std::fs::write(path, toml_string)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;

        Ok(())
    }

    /// Create default configuration file at path
    pub fn create_default(path: impl AsRef<Path>) -> Result<Self> {
        let config = Self::default();
        config.save(path)?;
        Ok(config)
    }
}
