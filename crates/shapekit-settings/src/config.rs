//! Configuration and settings management for ShapeKit
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats, chosen by file extension.
//!
//! Configuration is organized into two sections:
//! - Canvas settings (size, grid)
//! - Style settings (fill opacity, selection outline, labels, default color)

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{SettingsError, SettingsResult};

/// Smallest grid spacing a config may ask for.
pub const MIN_GRID_SIZE: f64 = 1.0;

/// Canvas and grid settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    /// Canvas width in pixels
    pub width: f64,
    /// Canvas height in pixels
    pub height: f64,
    /// Grid spacing in pixels
    pub grid_size: f64,
    pub grid_color: String,
    pub grid_line_width: f64,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            grid_size: 5.0,
            grid_color: "#ddd".to_string(),
            grid_line_width: 0.5,
        }
    }
}

/// How shapes and their labels are painted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleSettings {
    /// Alpha applied to every shape fill, in `[0, 1]`
    pub fill_opacity: f64,
    /// Outline color of the selected shape
    pub selection_color: String,
    pub selection_line_width: f64,
    /// CSS font shorthand for shape labels
    pub label_font: String,
    pub label_color: String,
    /// Gap between the top of a shape and its label
    pub label_offset: f64,
    /// Color given to newly created shapes
    pub default_color: String,
}

impl Default for StyleSettings {
    fn default() -> Self {
        Self {
            fill_opacity: 0.5,
            selection_color: "#0066ff".to_string(),
            selection_line_width: 2.0,
            label_font: "14px New York".to_string(),
            label_color: "#000000".to_string(),
            label_offset: 5.0,
            default_color: "#000000".to_string(),
        }
    }
}

/// Supported on-disk formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(SettingsError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

/// Complete editor configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub canvas: CanvasSettings,
    pub style: StyleSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match ConfigFormat::from_path(path)? {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        std::fs::write(path, content)?;
        tracing::debug!("Saved config to {}", path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        // Validate canvas settings
        if !is_positive(self.canvas.width) {
            return Err(SettingsError::invalid("canvas.width", "must be > 0"));
        }
        if !is_positive(self.canvas.height) {
            return Err(SettingsError::invalid("canvas.height", "must be > 0"));
        }
        if self.canvas.grid_size.is_nan() || self.canvas.grid_size < MIN_GRID_SIZE {
            return Err(SettingsError::invalid(
                "canvas.grid_size",
                format!("must be at least {}", MIN_GRID_SIZE),
            ));
        }
        if !is_non_negative(self.canvas.grid_line_width) {
            return Err(SettingsError::invalid(
                "canvas.grid_line_width",
                "must not be negative",
            ));
        }

        // Validate style settings
        if !(0.0..=1.0).contains(&self.style.fill_opacity) {
            return Err(SettingsError::invalid(
                "style.fill_opacity",
                format!("{} is outside [0, 1]", self.style.fill_opacity),
            ));
        }
        if !is_non_negative(self.style.selection_line_width) {
            return Err(SettingsError::invalid(
                "style.selection_line_width",
                "must not be negative",
            ));
        }

        Ok(())
    }
}

// NaN fails both checks.
fn is_positive(value: f64) -> bool {
    value > 0.0
}

fn is_non_negative(value: f64) -> bool {
    value >= 0.0
}
