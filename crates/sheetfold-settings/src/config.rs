//! Configuration and settings management for Sheetfold
//!
//! Provides configuration file handling and validation.
//! Supports JSON and TOML file formats stored in platform-specific directories.
//!
//! Configuration is organized into logical sections:
//! - Canvas geometry (virtual canvas size, sheet margin, handle size)
//! - View limits (zoom range and wheel step)
//! - 3D preview (surface size, local frame, camera, turntable rate)
//! - Export naming (base file name, output directory)

use serde::{Deserialize, Serialize};
use sheetfold_core::constants as c;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{ConfigError, SettingsError, SettingsResult};

/// 2D canvas settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    /// Width of the virtual canvas the sheet is centred in
    pub width: f64,
    /// Height of the drawing surface
    pub height: f64,
    /// Gap above a freshly placed sheet
    pub top_margin: f64,
    /// Radius of fold endpoint handles (screen units)
    pub handle_radius: f64,
    /// Stroke width of fold lines
    pub fold_stroke_width: f64,
    /// Render and allow dragging of fold endpoints
    pub free_endpoints: bool,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            width: c::VIRTUAL_CANVAS_WIDTH,
            height: c::VIRTUAL_CANVAS_HEIGHT,
            top_margin: c::SHEET_TOP_MARGIN,
            handle_radius: c::HANDLE_RADIUS,
            fold_stroke_width: c::FOLD_STROKE_WIDTH,
            free_endpoints: true,
        }
    }
}

/// Zoom limits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Zoom change per wheel tick
    pub zoom_step: f64,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            min_zoom: c::MIN_ZOOM,
            max_zoom: c::MAX_ZOOM,
            zoom_step: c::ZOOM_STEP,
        }
    }
}

/// 3D fold preview settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewSettings {
    /// Build the preview at all
    pub enabled: bool,
    /// Surface width in pixels
    pub width: u32,
    /// Surface height in pixels
    pub height: u32,
    /// Half extent of the local frame along x
    pub half_width: f64,
    /// Half extent of the local frame along y
    pub half_height: f64,
    /// Z offset of the highlighted fold segment
    pub fold_line_lift: f64,
    /// Turntable rotation per frame (radians)
    pub spin_rate: f64,
    /// Distance from the camera to the scene origin
    pub camera_distance: f64,
    /// Vertical field of view
    pub fov_degrees: f64,
}

impl Default for PreviewSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            width: c::PREVIEW_WIDTH,
            height: c::PREVIEW_HEIGHT,
            half_width: c::PREVIEW_HALF_WIDTH,
            half_height: c::PREVIEW_HALF_HEIGHT,
            fold_line_lift: c::FOLD_LINE_LIFT,
            spin_rate: c::PREVIEW_SPIN_RATE,
            camera_distance: c::PREVIEW_CAMERA_DISTANCE,
            fov_degrees: c::PREVIEW_FOV_DEGREES,
        }
    }
}

impl PreviewSettings {
    /// Width over height of the preview surface.
    pub fn aspect_ratio(&self) -> f64 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f64 / self.height as f64
        }
    }
}

/// Export settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// File name without extension
    pub base_name: String,
    /// Directory the headless host writes downloads into
    pub output_dir: PathBuf,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            base_name: c::EXPORT_BASE_NAME.to_string(),
            output_dir: PathBuf::from("."),
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
    pub view: ViewSettings,
    pub preview: PreviewSettings,
    pub export: ExportSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default location of the config file.
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("sheetfold").join("config.toml"))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no platform config directory".to_string())
            })
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
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load config from file, or defaults if the file does not exist.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        let format = ConfigFormat::from_path(path)?;

        let content = match format {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("canvas.width", self.canvas.width)?;
        positive("canvas.height", self.canvas.height)?;
        non_negative("canvas.top_margin", self.canvas.top_margin)?;
        positive("canvas.handle_radius", self.canvas.handle_radius)?;
        positive("canvas.fold_stroke_width", self.canvas.fold_stroke_width)?;

        positive("view.min_zoom", self.view.min_zoom)?;
        positive("view.max_zoom", self.view.max_zoom)?;
        positive("view.zoom_step", self.view.zoom_step)?;
        if self.view.min_zoom > self.view.max_zoom {
            return Err(ConfigError::Inconsistent(format!(
                "view.min_zoom ({}) exceeds view.max_zoom ({})",
                self.view.min_zoom, self.view.max_zoom
            )));
        }

        if self.preview.width == 0 || self.preview.height == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "preview.size".to_string(),
                value: format!("{}x{}", self.preview.width, self.preview.height),
            });
        }
        positive("preview.half_width", self.preview.half_width)?;
        positive("preview.half_height", self.preview.half_height)?;
        non_negative("preview.fold_line_lift", self.preview.fold_line_lift)?;
        non_negative("preview.spin_rate", self.preview.spin_rate)?;
        positive("preview.camera_distance", self.preview.camera_distance)?;
        if !(self.preview.fov_degrees > 0.0 && self.preview.fov_degrees < 180.0) {
            return Err(ConfigError::ValueOutOfRange {
                key: "preview.fov_degrees".to_string(),
                value: self.preview.fov_degrees.to_string(),
            });
        }

        if self.export.base_name.trim().is_empty() {
            return Err(ConfigError::ValueOutOfRange {
                key: "export.base_name".to_string(),
                value: String::new(),
            });
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

fn positive(key: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::ValueOutOfRange {
            key: key.to_string(),
            value: value.to_string(),
        })
    }
}

fn non_negative(key: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::ValueOutOfRange {
            key: key.to_string(),
            value: value.to_string(),
        })
    }
}
