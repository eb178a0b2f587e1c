//! Error handling for Sheetfold
//!
//! Provides the error types for every layer of the editor:
//! - Validation errors (sheet/fold input, exports without a sheet)
//! - Export errors (serialisation and rasterisation)
//! - Preview errors (3D surface acquisition)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Validation error type
///
/// Recovered locally and surfaced to the user through the error banner.
/// Every variant renders a fixed, human-readable message.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Sheet width or height is missing, non-numeric, or not positive
    #[error("Please enter valid width and height values to create your sheet.")]
    InvalidSheet,

    /// A fold was requested before a sheet exists
    #[error("Please create a sheet before adding fold lines.")]
    SheetMissing,

    /// Fold position outside the open interval (0, width)
    #[error("Fold position must be greater than 0 and less than the sheet width.")]
    FoldOutOfRange {
        /// The rejected position.
        position: f64,
        /// The sheet width at the time of the request.
        width: f64,
    },

    /// Bend direction text was neither "up" nor "down"
    #[error("Bend direction must be \"up\" or \"down\".")]
    InvalidDirection {
        /// The rejected text.
        value: String,
    },

    /// An export was attempted without a valid sheet
    #[error("Please create a valid sheet before downloading the design.")]
    ExportWithoutSheet,

    /// A fold index that does not exist was targeted
    #[error("Fold line {index} does not exist.")]
    UnknownFold {
        /// The requested fold index.
        index: usize,
    },
}

/// Export error type
///
/// Represents failures while serialising the current design.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The design failed validation; no file was produced
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The SVG could not be decoded for rasterisation
    #[error("SVG decode failed: {0}")]
    SvgDecode(String),

    /// The raster surface could not be allocated or encoded
    #[error("Rasterisation failed: {0}")]
    Raster(String),

    /// Writing the exported bytes failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Preview error type
///
/// ResourceUnavailable class: the 3D preview degrades to absent.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PreviewError {
    /// The rendering surface could not be created
    #[error("Rendering surface unavailable ({width}x{height}): {reason}")]
    SurfaceUnavailable {
        /// Requested surface width.
        width: u32,
        /// Requested surface height.
        height: u32,
        /// Backend-specific reason.
        reason: String,
    },

    /// A frame could not be captured from the surface
    #[error("Frame capture failed: {0}")]
    Capture(String),
}

/// Main error type for Sheetfold
#[derive(Error, Debug)]
pub enum Error {
    /// Validation error
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Export error
    #[error(transparent)]
    Export(#[from] ExportError),

    /// Preview error
    #[error(transparent)]
    Preview(#[from] PreviewError),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Creates a generic error from any message.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }
}

/// Result type for Sheetfold operations
pub type Result<T> = std::result::Result<T, Error>;
