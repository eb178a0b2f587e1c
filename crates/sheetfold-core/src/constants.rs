//! Editor-wide constants.
//!
//! These are the defaults the settings crate starts from; the running editor
//! reads the (possibly overridden) values from its configuration.

/// Width of the virtual canvas the sheet is centred in.
pub const VIRTUAL_CANVAS_WIDTH: f64 = 1000.0;

/// Height of the drawing surface (SVG/PNG export height).
pub const VIRTUAL_CANVAS_HEIGHT: f64 = 600.0;

/// Distance from the top of the canvas to the top edge of a freshly placed sheet.
pub const SHEET_TOP_MARGIN: f64 = 10.0;

/// Zoom limits and wheel step.
pub const MIN_ZOOM: f64 = 0.2;
pub const MAX_ZOOM: f64 = 3.0;
pub const ZOOM_STEP: f64 = 0.1;

/// Radius of fold endpoint handles, in screen units.
pub const HANDLE_RADIUS: f64 = 10.0;

/// Stroke width of fold lines on the 2D canvas.
pub const FOLD_STROKE_WIDTH: f64 = 2.0;

/// Default 3D preview surface size in pixels.
pub const PREVIEW_WIDTH: u32 = 300;
pub const PREVIEW_HEIGHT: u32 = 200;

/// Half extents of the local frame the sheet is mapped into for the 3D preview.
pub const PREVIEW_HALF_WIDTH: f64 = 90.0;
pub const PREVIEW_HALF_HEIGHT: f64 = 60.0;

/// Z offset of the highlighted fold segment in the 3D preview.
pub const FOLD_LINE_LIFT: f64 = 1.0;

/// Turntable rotation per rendered frame, in radians.
pub const PREVIEW_SPIN_RATE: f64 = 0.01;

/// Preview camera placement.
pub const PREVIEW_CAMERA_DISTANCE: f64 = 400.0;
pub const PREVIEW_FOV_DEGREES: f64 = 45.0;
pub const PREVIEW_NEAR: f64 = 0.1;
pub const PREVIEW_FAR: f64 = 1000.0;

/// Base file name used for every export.
pub const EXPORT_BASE_NAME: &str = "sheet-metal-design";

/// Fixed DXF layer names.
pub const DXF_SHEET_LAYER: &str = "0";
pub const DXF_FOLD_LAYER: &str = "FOLDS";

/// Sheet fill and outline colours.
pub const SHEET_FILL: &str = "#c2fbd7";
pub const SHEET_STROKE: &str = "#333";
