// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[server]` - Gallery server location
//! - `[viewer]` - Lightbox zoom bounds and touch swipe distance
//! - `[lazy_load]` - Thumbnail visibility margin, threshold and styling
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` on the command line
//! 3. `GALLERY_LIGHTBOX_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use gallery_lightbox::config;
//!
//! let (config, warning) = config::load();
//! if warning.is_none() {
//!     println!("gallery server: {}", config.server.url);
//! }
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::lazy_load::ObserverOptions;
use crate::lightbox::ZoomLimits;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Gallery server settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerConfig {
    /// Base URL of the gallery server, without a trailing path.
    #[serde(default = "default_server_url")]
    pub url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            url: default_server_url(),
        }
    }
}

/// Lightbox settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewerConfig {
    /// Scale increment for keyboard and wheel zoom.
    #[serde(default = "default_scale_step", skip_serializing_if = "Option::is_none")]
    pub scale_step: Option<f32>,

    /// Smallest allowed scale.
    #[serde(default = "default_min_scale", skip_serializing_if = "Option::is_none")]
    pub min_scale: Option<f32>,

    /// Largest allowed scale.
    #[serde(default = "default_max_scale", skip_serializing_if = "Option::is_none")]
    pub max_scale: Option<f32>,

    /// Finger travel in logical pixels that triggers swipe navigation.
    #[serde(
        default = "default_swipe_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub swipe_threshold: Option<f32>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            scale_step: default_scale_step(),
            min_scale: default_min_scale(),
            max_scale: default_max_scale(),
            swipe_threshold: default_swipe_threshold(),
        }
    }
}

/// Thumbnail lazy-loading settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LazyLoadConfig {
    /// Vertical margin around the grid viewport, in logical pixels.
    #[serde(default = "default_root_margin", skip_serializing_if = "Option::is_none")]
    pub root_margin: Option<f32>,

    /// Visible fraction of a tile required to start its fetch.
    #[serde(default = "default_threshold", skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f32>,

    /// Natural-width multiplier below which thumbnails render pixelated.
    #[serde(
        default = "default_pixelate_factor",
        skip_serializing_if = "Option::is_none"
    )]
    pub pixelate_factor: Option<u32>,

    /// Fraction of the window height a thumbnail may take before cropping.
    #[serde(
        default = "default_max_height_fraction",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_height_fraction: Option<f32>,
}

impl Default for LazyLoadConfig {
    fn default() -> Self {
        Self {
            root_margin: default_root_margin(),
            threshold: default_threshold(),
            pixelate_factor: default_pixelate_factor(),
            max_height_fraction: default_max_height_fraction(),
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
    pub server: ServerConfig,

    #[serde(default)]
    pub viewer: ViewerConfig,

    #[serde(default)]
    pub lazy_load: LazyLoadConfig,
}

impl Config {
    /// Zoom bounds for the lightbox, sanitized so a hand-edited file cannot
    /// produce an empty or inverted range.
    #[must_use]
    pub fn zoom_limits(&self) -> ZoomLimits {
        ZoomLimits::new(
            self.viewer.min_scale.unwrap_or(DEFAULT_MIN_SCALE),
            self.viewer.max_scale.unwrap_or(DEFAULT_MAX_SCALE),
            self.viewer.scale_step.unwrap_or(DEFAULT_SCALE_STEP),
        )
    }

    #[must_use]
    pub fn swipe_threshold(&self) -> f32 {
        let value = self
            .viewer
            .swipe_threshold
            .unwrap_or(DEFAULT_SWIPE_THRESHOLD);
        if value.is_finite() && value > 0.0 {
            value
        } else {
            DEFAULT_SWIPE_THRESHOLD
        }
    }

    #[must_use]
    pub fn observer_options(&self) -> ObserverOptions {
        ObserverOptions::new(
            self.lazy_load.root_margin.unwrap_or(DEFAULT_ROOT_MARGIN),
            self.lazy_load
                .threshold
                .unwrap_or(DEFAULT_VISIBILITY_THRESHOLD),
        )
    }

    #[must_use]
    pub fn pixelate_factor(&self) -> u32 {
        self.lazy_load
            .pixelate_factor
            .unwrap_or(DEFAULT_PIXELATE_FACTOR)
            .max(1)
    }

    #[must_use]
    pub fn max_height_fraction(&self) -> f32 {
        self.lazy_load
            .max_height_fraction
            .unwrap_or(DEFAULT_MAX_HEIGHT_FRACTION)
            .clamp(0.1, 1.0)
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_server_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

fn default_scale_step() -> Option<f32> {
    Some(DEFAULT_SCALE_STEP)
}

fn default_min_scale() -> Option<f32> {
    Some(DEFAULT_MIN_SCALE)
}

fn default_max_scale() -> Option<f32> {
    Some(DEFAULT_MAX_SCALE)
}

fn default_swipe_threshold() -> Option<f32> {
    Some(DEFAULT_SWIPE_THRESHOLD)
}

fn default_root_margin() -> Option<f32> {
    Some(DEFAULT_ROOT_MARGIN)
}

fn default_threshold() -> Option<f32> {
    Some(DEFAULT_VISIBILITY_THRESHOLD)
}

fn default_pixelate_factor() -> Option<u32> {
    Some(DEFAULT_PIXELATE_FACTOR)
}

fn default_max_height_fraction() -> Option<f32> {
    Some(DEFAULT_MAX_HEIGHT_FRACTION)
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
/// default config with the i18n key of a warning explaining what went wrong.
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
                    tracing::warn!(path = %path.display(), error = %err, "ignoring unreadable config");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
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
    use crate::error::Error;
    use crate::test_utils::assert_abs_diff_eq;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
            },
            server: ServerConfig {
                url: "http://gallery.lan:9000".to_string(),
            },
            viewer: ViewerConfig {
                scale_step: Some(0.5),
                ..ViewerConfig::default()
            },
            lazy_load: LazyLoadConfig::default(),
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
            Err(Error::Config(message)) => assert!(!message.is_empty()),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[server]\nurl = \"http://nas:8989\"\n")
            .expect("failed to write partial config");

        let loaded = load_from_path(&config_path).expect("partial config should load");

        assert_eq!(loaded.server.url, "http://nas:8989");
        assert_eq!(loaded.viewer, ViewerConfig::default());
        assert_eq!(loaded.lazy_load, LazyLoadConfig::default());
    }

    #[test]
    fn load_with_override_reports_warning_for_broken_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[viewer\nscale_step = ")
            .expect("failed to write broken config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.server.url, DEFAULT_SERVER_URL);
        assert_eq!(config.viewer.scale_step, Some(DEFAULT_SCALE_STEP));
        assert_eq!(config.viewer.min_scale, Some(DEFAULT_MIN_SCALE));
        assert_eq!(config.viewer.max_scale, Some(DEFAULT_MAX_SCALE));
        assert_eq!(config.lazy_load.root_margin, Some(DEFAULT_ROOT_MARGIN));
        assert_eq!(config.pixelate_factor(), DEFAULT_PIXELATE_FACTOR);
    }

    #[test]
    fn inverted_scale_bounds_are_sanitized() {
        let config = Config {
            viewer: ViewerConfig {
                min_scale: Some(8.0),
                max_scale: Some(2.0),
                ..ViewerConfig::default()
            },
            ..Config::default()
        };

        let limits = config.zoom_limits();
        assert!(limits.min() <= limits.max());
    }

    #[test]
    fn non_positive_swipe_threshold_uses_default() {
        let config = Config {
            viewer: ViewerConfig {
                swipe_threshold: Some(-4.0),
                ..ViewerConfig::default()
            },
            ..Config::default()
        };

        assert_abs_diff_eq!(config.swipe_threshold(), DEFAULT_SWIPE_THRESHOLD);
    }
}
