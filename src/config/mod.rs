// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[gallery]` - Grid layout and viewer fade
//! - `[catalog]` - Portfolio content file and image root
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()` with an explicit path
//! 2. Pass `--config-dir` or set `ICED_FOLIO_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! The application never writes this file; viewer state is not persisted.
//!
//! # Examples
//!
//! ```no_run
//! use iced_folio::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//! println!("{} columns", config.gallery.columns());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Initial theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Gallery grid and viewer settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Number of thumbnail columns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<u16>,

    /// Thumbnail height in logical pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_height: Option<f32>,

    /// Fade-in duration when switching images, in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fade_millis: Option<u64>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            columns: Some(DEFAULT_GRID_COLUMNS),
            thumbnail_height: Some(DEFAULT_THUMBNAIL_HEIGHT),
            fade_millis: Some(DEFAULT_FADE_MILLIS),
        }
    }
}

impl GalleryConfig {
    /// Column count, clamped to the supported range.
    #[must_use]
    pub fn columns(&self) -> u16 {
        self.columns
            .unwrap_or(DEFAULT_GRID_COLUMNS)
            .clamp(MIN_GRID_COLUMNS, MAX_GRID_COLUMNS)
    }

    /// Thumbnail height, clamped to the supported range.
    #[must_use]
    pub fn thumbnail_height(&self) -> f32 {
        self.thumbnail_height
            .unwrap_or(DEFAULT_THUMBNAIL_HEIGHT)
            .clamp(MIN_THUMBNAIL_HEIGHT, MAX_THUMBNAIL_HEIGHT)
    }

    /// Fade duration, capped at [`MAX_FADE_MILLIS`].
    #[must_use]
    pub fn fade_duration(&self) -> Duration {
        Duration::from_millis(
            self.fade_millis
                .unwrap_or(DEFAULT_FADE_MILLIS)
                .min(MAX_FADE_MILLIS),
        )
    }
}

/// Portfolio content location.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
    /// Catalog file replacing the built-in one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Root for relative image references of the built-in catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets_dir: Option<PathBuf>,
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
    pub gallery: GalleryConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,
}

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Load Functions
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
#[must_use]
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
#[must_use]
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!("{}: {}", path.display(), err)),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}
