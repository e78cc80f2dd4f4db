// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[video]` - Feed file paths, start channel and source loading
//! - `[controls]` - Start positions of the speed-limit sliders
//! - `[diagnostics]` - Size of the in-memory trace
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ROVER_CONSOLE_CONFIG_DIR` environment variable (or `--config-dir`)
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use rover_console::config;
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("fr".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::diagnostics::TraceCapacity;
use crate::domain::{ChannelSources, SpeedLimit, SpeedLimits, VideoChannel};
use crate::error::{Error, Result};
use crate::playback::SourceLoading;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Warning key returned when an existing config file cannot be read.
pub const LOAD_ERROR_KEY: &str = "notification-config-load-error";

// =============================================================================
// Enums
// =============================================================================

/// Channel shown at startup, as written in `settings.toml`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum StartChannel {
    #[default]
    Rgbd,
    Lidar,
    #[serde(rename = "trajectory-2d")]
    Trajectory2D,
    #[serde(rename = "trajectory-3d")]
    Trajectory3D,
}

impl From<StartChannel> for VideoChannel {
    fn from(channel: StartChannel) -> Self {
        match channel {
            StartChannel::Rgbd => VideoChannel::RgbD,
            StartChannel::Lidar => VideoChannel::Lidar,
            StartChannel::Trajectory2D => VideoChannel::Trajectory2D,
            StartChannel::Trajectory3D => VideoChannel::Trajectory3D,
        }
    }
}

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Video feed settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VideoConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rgbd_path: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lidar_path: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trajectory_2d_path: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trajectory_3d_path: Option<PathBuf>,

    /// Forward the selected channel's file to the playback engine.
    #[serde(
        default = "default_load_sources",
        skip_serializing_if = "Option::is_none"
    )]
    pub load_sources: Option<bool>,

    /// Channel selected at startup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_channel: Option<StartChannel>,
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            rgbd_path: None,
            lidar_path: None,
            trajectory_2d_path: None,
            trajectory_3d_path: None,
            load_sources: default_load_sources(),
            default_channel: Some(StartChannel::default()),
        }
    }
}

impl VideoConfig {
    /// Channel table with configured paths over the placeholders.
    #[must_use]
    pub fn channel_sources(&self) -> ChannelSources {
        let defaults = ChannelSources::default();
        let pick = |configured: &Option<PathBuf>, channel: VideoChannel| {
            configured
                .clone()
                .unwrap_or_else(|| defaults.path(channel).to_path_buf())
        };
        ChannelSources::new([
            pick(&self.rgbd_path, VideoChannel::RgbD),
            pick(&self.lidar_path, VideoChannel::Lidar),
            pick(&self.trajectory_2d_path, VideoChannel::Trajectory2D),
            pick(&self.trajectory_3d_path, VideoChannel::Trajectory3D),
        ])
    }

    #[must_use]
    pub fn source_loading(&self) -> SourceLoading {
        if self.load_sources.unwrap_or(DEFAULT_LOAD_SOURCES) {
            SourceLoading::Immediate
        } else {
            SourceLoading::Deferred
        }
    }

    #[must_use]
    pub fn start_channel(&self) -> VideoChannel {
        self.default_channel.unwrap_or_default().into()
    }
}

/// Start positions of the speed-limit sliders (raw slider units).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ControlsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_speed_raw: Option<u16>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angular_speed_raw: Option<u16>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_speed_raw: Option<u16>,
}

impl ControlsConfig {
    /// Slider start positions, clamped to each slider's range.
    #[must_use]
    pub fn speed_limits(&self) -> SpeedLimits {
        let raw = |value: Option<u16>, limit: SpeedLimit| value.unwrap_or(limit.default_raw());
        SpeedLimits::new(
            raw(self.max_speed_raw, SpeedLimit::MaxLinear),
            raw(self.angular_speed_raw, SpeedLimit::Angular),
            raw(self.min_speed_raw, SpeedLimit::MinLinear),
        )
    }
}

/// Diagnostic trace settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticsConfig {
    #[serde(
        default = "default_trace_capacity",
        skip_serializing_if = "Option::is_none"
    )]
    pub trace_capacity: Option<usize>,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            trace_capacity: default_trace_capacity(),
        }
    }
}

impl DiagnosticsConfig {
    #[must_use]
    pub fn capacity(&self) -> TraceCapacity {
        self.trace_capacity
            .map(TraceCapacity::new)
            .unwrap_or_default()
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
    pub video: VideoConfig,

    #[serde(default)]
    pub controls: ControlsConfig,

    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_load_sources() -> Option<bool> {
    Some(DEFAULT_LOAD_SOURCES)
}

fn default_trace_capacity() -> Option<usize> {
    Some(DEFAULT_TRACE_CAPACITY)
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
                    tracing::warn!(path = %path.display(), "failed to load config: {err}");
                    return (Config::default(), Some(LOAD_ERROR_KEY.to_string()));
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
