// SPDX-License-Identifier: MPL-2.0
//! Loading and saving user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[banner]` - Banner timings and whether the close control is shown
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_BANNER_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_banner::app::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.banner.inactivity_timeout_ms = Some(8_000);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::banner::{FocusDelay, InactivityTimeout, Timings};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Warning key reported when an existing config file cannot be parsed.
pub const CONFIG_LOAD_WARNING_KEY: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Banner behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BannerConfig {
    /// Delay before focus moves into a freshly shown banner (milliseconds).
    #[serde(
        default = "default_mount_focus_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub mount_focus_delay_ms: Option<u64>,

    /// Time focus may stay outside a banner before it asks to be dismissed
    /// (milliseconds).
    #[serde(
        default = "default_inactivity_timeout_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub inactivity_timeout_ms: Option<u64>,

    /// Whether banners render a close control.
    #[serde(default = "default_dismissable", skip_serializing_if = "Option::is_none")]
    pub dismissable: Option<bool>,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            mount_focus_delay_ms: default_mount_focus_delay_ms(),
            inactivity_timeout_ms: default_inactivity_timeout_ms(),
            dismissable: default_dismissable(),
        }
    }
}

impl BannerConfig {
    /// Returns the validated timings described by this section.
    #[must_use]
    pub fn timings(&self) -> Timings {
        Timings {
            mount_focus_delay: self
                .mount_focus_delay_ms
                .map(FocusDelay::new)
                .unwrap_or_default(),
            inactivity_timeout: self
                .inactivity_timeout_ms
                .map(InactivityTimeout::new)
                .unwrap_or_default(),
        }
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub banner: BannerConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_mount_focus_delay_ms() -> Option<u64> {
    Some(DEFAULT_MOUNT_FOCUS_DELAY_MS)
}

fn default_inactivity_timeout_ms() -> Option<u64> {
    Some(DEFAULT_INACTIVITY_TIMEOUT_MS)
}

fn default_dismissable() -> Option<bool> {
    Some(true)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "falling back to default config");
                    return (Config::default(), Some(CONFIG_LOAD_WARNING_KEY.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
            },
            banner: BannerConfig {
                mount_focus_delay_ms: Some(300),
                inactivity_timeout_ms: Some(8_000),
                dismissable: Some(false),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_warns_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[banner\n").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some(CONFIG_LOAD_WARNING_KEY));
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str("[general]\nlanguage = \"fr\"\n").expect("parse");
        assert_eq!(config.banner, BannerConfig::default());
        assert_eq!(config.general.language.as_deref(), Some("fr"));
    }

    #[test]
    fn partial_banner_section_keeps_other_defaults() {
        let config: Config =
            toml::from_str("[banner]\ninactivity_timeout_ms = 9000\n").expect("parse");
        assert_eq!(config.banner.inactivity_timeout_ms, Some(9_000));
        assert_eq!(
            config.banner.mount_focus_delay_ms,
            Some(DEFAULT_MOUNT_FOCUS_DELAY_MS)
        );
        assert_eq!(config.banner.dismissable, Some(true));
    }

    #[test]
    fn default_timings_match_constants() {
        let timings = BannerConfig::default().timings();
        assert_eq!(
            timings.mount_focus_delay.as_duration(),
            Duration::from_millis(DEFAULT_MOUNT_FOCUS_DELAY_MS)
        );
        assert_eq!(
            timings.inactivity_timeout.as_duration(),
            Duration::from_millis(DEFAULT_INACTIVITY_TIMEOUT_MS)
        );
    }

    #[test]
    fn out_of_range_timings_are_clamped() {
        let banner = BannerConfig {
            mount_focus_delay_ms: Some(60_000),
            inactivity_timeout_ms: Some(1),
            dismissable: None,
        };
        let timings = banner.timings();
        assert_eq!(timings.mount_focus_delay.value(), MAX_MOUNT_FOCUS_DELAY_MS);
        assert_eq!(timings.inactivity_timeout.value(), MIN_INACTIVITY_TIMEOUT_MS);
    }

    #[test]
    fn save_with_override_writes_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        save_with_override(&Config::default(), Some(temp_dir.path().to_path_buf()))
            .expect("save should succeed");
        assert!(temp_dir.path().join(CONFIG_FILE).exists());
    }
}
