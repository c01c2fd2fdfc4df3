// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[carousel]` - Success-story autoplay behavior
//! - `[ticker]` - Client logo ticker speed
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` on the command line
//! 3. `MERIDIAN_SHOWCASE_CONFIG_DIR` environment variable
//! 4. Platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use meridian_showcase::config;
//!
//! let (mut config, _warning) = config::load();
//! config.carousel.autoplay_interval_ms = Some(8000);
//! config::save_with_override(&config, None).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::carousel::{AutoplayInterval, AutoplayPolicy};
use crate::error::{Error, Result};
use crate::ui::logo_ticker::TickerSpeed;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            theme_mode: default_theme_mode(),
        }
    }
}

/// Success-story carousel settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CarouselConfig {
    /// Advance automatically while the stories page is open.
    #[serde(default = "default_autoplay", skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<bool>,

    /// Delay between automatic advances (milliseconds).
    #[serde(
        default = "default_autoplay_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub autoplay_interval_ms: Option<u64>,

    /// Restart the autoplay delay after each manual navigation.
    #[serde(
        default = "default_reset_on_manual_navigation",
        skip_serializing_if = "Option::is_none"
    )]
    pub reset_on_manual_navigation: Option<bool>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay: default_autoplay(),
            autoplay_interval_ms: default_autoplay_interval_ms(),
            reset_on_manual_navigation: default_reset_on_manual_navigation(),
        }
    }
}

/// Client logo ticker settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TickerConfig {
    /// Horizontal scroll speed in pixels per second.
    #[serde(
        default = "default_ticker_speed",
        skip_serializing_if = "Option::is_none"
    )]
    pub speed_px_per_sec: Option<f32>,
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self {
            speed_px_per_sec: default_ticker_speed(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub carousel: CarouselConfig,

    #[serde(default)]
    pub ticker: TickerConfig,
}

impl Config {
    /// Resolves the carousel section into a clamped autoplay policy.
    #[must_use]
    pub fn autoplay_policy(&self) -> AutoplayPolicy {
        let interval = self
            .carousel
            .autoplay_interval_ms
            .map(AutoplayInterval::new)
            .unwrap_or_default();

        AutoplayPolicy {
            enabled: self.carousel.autoplay.unwrap_or(true),
            interval,
            reset_on_manual_navigation: self.carousel.reset_on_manual_navigation.unwrap_or(false),
        }
    }

    /// Resolves the ticker section into a clamped speed.
    #[must_use]
    pub fn ticker_speed(&self) -> TickerSpeed {
        self.ticker
            .speed_px_per_sec
            .map(TickerSpeed::new)
            .unwrap_or_default()
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_autoplay() -> Option<bool> {
    Some(true)
}

fn default_autoplay_interval_ms() -> Option<u64> {
    Some(DEFAULT_AUTOPLAY_INTERVAL_MS)
}

fn default_reset_on_manual_navigation() -> Option<bool> {
    Some(false)
}

fn default_ticker_speed() -> Option<f32> {
    Some(DEFAULT_TICKER_SPEED)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    raw.parse::<ThemeMode>()
        .map_err(|_| D::Error::custom(format!("invalid theme_mode: {}", raw)))
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
/// default config with a warning message explaining what went wrong.
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
                    return (
                        Config::default(),
                        Some(format!(
                            "could not read {}, using defaults: {}",
                            path.display(),
                            err
                        )),
                    );
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

/// Saves the configuration to a custom directory, or the default one for `None`.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
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
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                theme_mode: ThemeMode::Light,
            },
            carousel: CarouselConfig {
                autoplay: Some(false),
                autoplay_interval_ms: Some(8000),
                reset_on_manual_navigation: Some(true),
            },
            ticker: TickerConfig {
                speed_px_per_sec: Some(60.0),
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

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn load_from_missing_path_is_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_from_path(&temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.carousel.autoplay, Some(true));
        assert_eq!(
            config.carousel.autoplay_interval_ms,
            Some(DEFAULT_AUTOPLAY_INTERVAL_MS)
        );
        assert_eq!(config.carousel.reset_on_manual_navigation, Some(false));
        assert_eq!(config.ticker.speed_px_per_sec, Some(DEFAULT_TICKER_SPEED));
    }

    #[test]
    fn empty_file_loads_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "").expect("failed to write empty file");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn partial_section_fills_missing_fields() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[carousel]\nautoplay_interval_ms = 7000\n")
            .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.carousel.autoplay_interval_ms, Some(7000));
        assert_eq!(loaded.carousel.autoplay, Some(true));
        assert_eq!(loaded.general.theme_mode, ThemeMode::System);
    }

    #[test]
    fn carousel_section_with_one_key_matches_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        let interval = DEFAULT_AUTOPLAY_INTERVAL_MS;
        fs::write(
            &config_path,
            format!("[carousel]\nautoplay_interval_ms = {interval}\n"),
        )
        .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\ntheme_mode = \"Dark\"\n")
            .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn unknown_theme_mode_is_rejected() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\ntheme_mode = \"sepia\"\n")
            .expect("failed to write config");

        assert!(matches!(
            load_from_path(&config_path),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn autoplay_policy_clamps_interval() {
        let mut config = Config::default();
        config.carousel.autoplay_interval_ms = Some(10);
        let policy = config.autoplay_policy();
        assert_eq!(policy.interval.value(), MIN_AUTOPLAY_INTERVAL_MS);
        assert!(policy.enabled);
        assert!(!policy.reset_on_manual_navigation);
    }

    #[test]
    fn missing_carousel_values_fall_back_to_defaults() {
        let config = Config {
            carousel: CarouselConfig {
                autoplay: None,
                autoplay_interval_ms: None,
                reset_on_manual_navigation: None,
            },
            ..Config::default()
        };
        assert_eq!(config.autoplay_policy(), AutoplayPolicy::default());
    }

    #[test]
    fn ticker_speed_is_clamped() {
        let mut config = Config::default();
        config.ticker.speed_px_per_sec = Some(10_000.0);
        assert_eq!(config.ticker_speed().value(), MAX_TICKER_SPEED);
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let mut config = Config::default();
        config.general.theme_mode = ThemeMode::Dark;
        save_with_override(&config, Some(base_dir.clone())).expect("failed to save config");

        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none());
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[[[broken")
            .expect("failed to write corrupted file");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }
}
