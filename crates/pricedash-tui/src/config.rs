//! Dashboard configuration file.
//!
//! Read from `~/.pricedash/config.yaml` at startup. Every key is optional,
//! a missing file means defaults. The file is never written.

use std::path::{Path, PathBuf};
use std::time::Duration;

use pricedash_catalog::DisplayMode;
use pricedash_core::{DashError, Result, logging};
use serde::{Deserialize, Serialize};

use crate::theme::ThemeName;

/// Config file name inside the pricedash directory.
pub const CONFIG_FILE: &str = "config.yaml";

/// Dashboard configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    /// Starting color theme
    pub theme: ThemeName,

    /// Starting display mode (both, input, output)
    pub display_mode: DisplayMode,

    /// Open the settings panel on startup
    pub show_settings: bool,

    /// Event poll interval in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            theme: ThemeName::Default,
            display_mode: DisplayMode::Both,
            show_settings: false,
            tick_rate_ms: 100,
        }
    }
}

impl DashboardConfig {
    /// Default config path: `~/.pricedash/config.yaml`.
    pub fn default_path() -> Result<PathBuf> {
        Ok(logging::app_dir()?.join(CONFIG_FILE))
    }

    /// Load from `path`, or from the default path when `None`.
    ///
    /// A missing file yields the defaults. An unreadable or malformed file is
    /// an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_path()?,
        };

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content =
            std::fs::read_to_string(&path).map_err(|e| DashError::config_read(&path, e))?;
        let config = Self::from_yaml(&content).map_err(|e| DashError::config_invalid(&path, e))?;

        tracing::info!(path = %path.display(), theme = config.theme.display_name(), "loaded config");
        Ok(config)
    }

    /// Parse YAML content. Empty content yields the defaults.
    pub fn from_yaml(content: &str) -> std::result::Result<Self, String> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(content).map_err(|e| e.to_string())?;
        if config.tick_rate_ms == 0 {
            return Err("tick_rate_ms must be greater than zero".to_string());
        }
        Ok(config)
    }

    /// Event poll interval.
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::with_suffix(".yaml").unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.theme, ThemeName::Default);
        assert_eq!(config.display_mode, DisplayMode::Both);
        assert!(!config.show_settings);
        assert_eq!(config.tick_rate(), Duration::from_millis(100));
    }

    #[test]
    fn test_partial_yaml_keeps_other_defaults() {
        let config = DashboardConfig::from_yaml("theme: light\ndisplay_mode: output\n").unwrap();
        assert_eq!(config.theme, ThemeName::Light);
        assert_eq!(config.display_mode, DisplayMode::Output);
        assert_eq!(config.tick_rate_ms, 100);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(DashboardConfig::from_yaml("  \n").unwrap(), DashboardConfig::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(DashboardConfig::from_yaml("colour: red\n").is_err());
    }

    #[test]
    fn test_zero_tick_rate_rejected() {
        let err = DashboardConfig::from_yaml("tick_rate_ms: 0\n").unwrap_err();
        assert!(err.contains("tick_rate_ms"));
    }

    #[test]
    fn test_load_from_file() {
        let file = write_config("show_settings: true\ntick_rate_ms: 250\n");
        let config = DashboardConfig::load(Some(file.path())).unwrap();
        assert!(config.show_settings);
        assert_eq!(config.tick_rate(), Duration::from_millis(250));
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.yaml");
        let config = DashboardConfig::load(Some(&path)).unwrap();
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn test_load_invalid_file_is_config_error() {
        let file = write_config("theme: [not, a, theme]\n");
        let err = DashboardConfig::load(Some(file.path())).unwrap_err();
        assert!(err.is_config_error());
        assert!(err.to_string().contains("Invalid configuration"));
    }
}
