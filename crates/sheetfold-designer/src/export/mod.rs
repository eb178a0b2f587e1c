//! # Export Module
//!
//! Serialises the current design into downloadable files.
//!
//! ## Supported Formats
//! - SVG: the rendered 2D scene markup, coordinates exactly as drawn
//! - PNG: the SVG rasterised at its intrinsic pixel size
//! - DXF: minimal ASCII entity stream (sheet outline on layer `0`, folds on `FOLDS`)
//!
//! Every exporter checks for a valid sheet first and produces nothing when
//! that check fails.

pub mod dxf;
pub mod png;
pub mod svg;

use serde::{Deserialize, Serialize};
use sheetfold_core::{ExportError, ValidationError};
use sheetfold_settings::CanvasSettings;
use std::fmt;
use std::str::FromStr;

use crate::model::GeometryModel;
use crate::viewport::ViewTransform;

pub use dxf::export_dxf;
pub use png::{export_png, rasterize_svg};
pub use svg::{export_svg, scene_to_svg};

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Svg,
    Png,
    Dxf,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [Self::Svg, Self::Png, Self::Dxf];

    /// File extension without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Png => "png",
            Self::Dxf => "dxf",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Svg => "image/svg+xml",
            Self::Png => "image/png",
            Self::Dxf => "application/dxf",
        }
    }

    /// Full file name for `base_name`.
    pub fn file_name(&self, base_name: &str) -> String {
        format!("{}.{}", base_name, self.extension())
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "svg" => Ok(Self::Svg),
            "png" => Ok(Self::Png),
            "dxf" => Ok(Self::Dxf),
            _ => Err(format!("Unknown export format: {}", s)),
        }
    }
}

/// A finished export, ready for the download trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub bytes: Vec<u8>,
    pub mime_type: &'static str,
    pub file_name: String,
}

/// Fails unless a sheet with positive dimensions is present.
pub fn ensure_valid_sheet(model: &GeometryModel) -> Result<(), ValidationError> {
    match model.sheet() {
        Some(sheet) if sheet.width() > 0.0 && sheet.height() > 0.0 => Ok(()),
        _ => Err(ValidationError::ExportWithoutSheet),
    }
}

/// Runs the exporter for `format` and packages the result.
pub fn export(
    format: ExportFormat,
    model: &GeometryModel,
    view: &ViewTransform,
    canvas: &CanvasSettings,
    base_name: &str,
) -> Result<ExportArtifact, ExportError> {
    let bytes = match format {
        ExportFormat::Svg => export_svg(model, view, canvas)?.into_bytes(),
        ExportFormat::Png => export_png(model, view, canvas)?,
        ExportFormat::Dxf => export_dxf(model, view)?.into_bytes(),
    };

    Ok(ExportArtifact {
        bytes,
        mime_type: format.mime_type(),
        file_name: format.file_name(base_name),
    })
}
