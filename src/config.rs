//! Configuration loader plus strongly typed settings structures.
//!
//! This module deserializes the TOML blobs we ship (config and menu
//! catalog), exposes path helpers for the app directory, and extracts
//! the embedded defaults on first run.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// Embed default configuration files at compile time
const DEFAULT_CONFIG: &str = include_str!("../defaults/config.toml");
pub const DEFAULT_MENU: &str = include_str!("../defaults/menu.toml");

/// Top-level configuration object.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
}

/// Presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Color theme name ("dark" or "light")
    #[serde(default = "default_theme_name")]
    pub theme: String,

    /// How long the event loop waits for terminal input, in milliseconds
    #[serde(default = "default_poll_timeout_ms")]
    pub poll_timeout_ms: u64,

    /// Show item descriptions under each menu row
    #[serde(default = "default_show_descriptions")]
    pub show_descriptions: bool,
}

fn default_theme_name() -> String {
    "dark".to_string()
}

fn default_poll_timeout_ms() -> u64 {
    100
}

fn default_show_descriptions() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: default_theme_name(),
            poll_timeout_ms: default_poll_timeout_ms(),
            show_descriptions: default_show_descriptions(),
        }
    }
}

impl Config {
    /// Get the base lunch-tray directory (~/.lunch-tray/)
    /// Can be overridden with LUNCH_TRAY_DIR environment variable
    pub fn config_dir() -> Result<PathBuf> {
        // Check for custom directory from environment variable
        if let Ok(custom_dir) = std::env::var("LUNCH_TRAY_DIR") {
            return Ok(PathBuf::from(custom_dir));
        }

        // Default to ~/.lunch-tray
        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(".lunch-tray"))
    }

    /// Get path to config.toml
    /// Returns: ~/.lunch-tray/config.toml
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Get path to the menu catalog
    /// Returns: ~/.lunch-tray/menu.toml
    pub fn menu_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("menu.toml"))
    }

    /// Get path to the debug log
    /// Returns: ~/.lunch-tray/debug.log
    pub fn log_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("debug.log"))
    }

    /// Extract embedded defaults on first run (idempotent, only creates
    /// missing files)
    pub fn extract_defaults() -> Result<()> {
        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir).context(format!("Failed to create app directory {:?}", dir))?;

        // Extract config.toml (if it doesn't exist)
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            fs::write(&config_path, DEFAULT_CONFIG).context("Failed to write config.toml")?;
            tracing::info!("Extracted config.toml to {:?}", config_path);
        }

        // Extract menu.toml (if it doesn't exist)
        let menu_path = Self::menu_path()?;
        if !menu_path.exists() {
            fs::write(&menu_path, DEFAULT_MENU).context("Failed to write menu.toml")?;
            tracing::info!("Extracted menu.toml to {:?}", menu_path);
        }

        Ok(())
    }

    pub fn load() -> Result<Self> {
        // Extract defaults on first run (idempotent)
        Self::extract_defaults()?;
        Self::load_from_path(&Self::config_path()?)
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .context(format!("Failed to read config file: {:?}", path))?;
        let config: Config = toml::from_str(&contents)
            .context(format!("Failed to parse config file: {:?}", path))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_default_config_parses() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.ui.theme, "dark");
        assert_eq!(config.ui.poll_timeout_ms, 100);
        assert!(config.ui.show_descriptions);
    }

    #[test]
    fn test_empty_config_falls_back_to_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.ui.theme, "dark");
        assert_eq!(config.ui.poll_timeout_ms, 100);
        assert!(config.ui.show_descriptions);
    }

    #[test]
    fn test_partial_ui_section_keeps_other_defaults() {
        let config: Config = toml::from_str("[ui]\ntheme = \"light\"\n").unwrap();
        assert_eq!(config.ui.theme, "light");
        assert_eq!(config.ui.poll_timeout_ms, 100);
    }

    #[test]
    fn test_embedded_default_menu_is_valid_toml() {
        assert!(DEFAULT_MENU.contains("[[entrees]]"));
        assert!(DEFAULT_MENU.contains("[[side_dishes]]"));
        assert!(DEFAULT_MENU.contains("[[accompaniments]]"));
    }
}
