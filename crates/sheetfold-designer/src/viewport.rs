//! View transform between model space and screen space.
//!
//! Screen space has (0,0) at the top-left of the drawing surface with Y growing
//! down, the same orientation as model space, so no axis flip is involved:
//!
//! ```text
//! screen_x = pan_x + model_x * zoom
//! screen_y = pan_y + model_y * zoom
//! ```
//!
//! Zoom is anchored at the canvas origin, not at the pointer.

use std::fmt;

use sheetfold_settings::ViewSettings;

use crate::model::Point;

/// Represents the viewport transformation state (zoom and pan).
#[derive(Debug, Clone, PartialEq)]
pub struct ViewTransform {
    zoom: f64,
    pan_x: f64,
    pan_y: f64,
    min_zoom: f64,
    max_zoom: f64,
    zoom_step: f64,
}

impl ViewTransform {
    /// Creates an identity transform with the given zoom limits.
    pub fn new(settings: &ViewSettings) -> Self {
        Self {
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
            min_zoom: settings.min_zoom,
            max_zoom: settings.max_zoom,
            zoom_step: settings.zoom_step,
        }
    }

    /// Gets the current zoom level (1.0 = 100%).
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Gets the pan offset (X coordinate).
    pub fn pan_x(&self) -> f64 {
        self.pan_x
    }

    /// Gets the pan offset (Y coordinate).
    pub fn pan_y(&self) -> f64 {
        self.pan_y
    }

    pub fn min_zoom(&self) -> f64 {
        self.min_zoom
    }

    pub fn max_zoom(&self) -> f64 {
        self.max_zoom
    }

    /// Sets the zoom level, clamped to the configured range.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom.is_finite() {
            self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
        }
    }

    /// Sets the pan offset.
    pub fn set_pan(&mut self, x: f64, y: f64) {
        if x.is_finite() && y.is_finite() {
            self.pan_x = x;
            self.pan_y = y;
        }
    }

    /// Maps a model-space point to screen space.
    pub fn to_screen(&self, p: Point) -> Point {
        Point::new(self.pan_x + p.x * self.zoom, self.pan_y + p.y * self.zoom)
    }

    /// Maps a screen-space point back to model space.
    pub fn to_model(&self, p: Point) -> Point {
        Point::new((p.x - self.pan_x) / self.zoom, (p.y - self.pan_y) / self.zoom)
    }

    /// Applies one wheel tick.
    ///
    /// A positive `wheel_delta` (scrolling down) zooms out by one step, a
    /// negative one zooms in. Zero and non-finite deltas are ignored.
    /// Returns whether the zoom changed.
    pub fn apply_zoom_delta(&mut self, wheel_delta: f64) -> bool {
        if !wheel_delta.is_finite() || wheel_delta == 0.0 {
            return false;
        }
        let step = if wheel_delta > 0.0 {
            -self.zoom_step
        } else {
            self.zoom_step
        };
        let previous = self.zoom;
        self.zoom = (self.zoom + step).clamp(self.min_zoom, self.max_zoom);
        self.zoom != previous
    }

    /// Pans by a screen-space delta. Returns whether the pan changed.
    pub fn apply_pan(&mut self, dx: f64, dy: f64) -> bool {
        if !dx.is_finite() || !dy.is_finite() || (dx == 0.0 && dy == 0.0) {
            return false;
        }
        self.pan_x += dx;
        self.pan_y += dy;
        true
    }

    /// Places a sheet of `sheet_width` horizontally centred in a virtual
    /// canvas of `canvas_width`, `top_margin` below the top edge.
    pub fn center_sheet(&mut self, sheet_width: f64, canvas_width: f64, top_margin: f64) {
        self.pan_x = (canvas_width - sheet_width) / 2.0;
        self.pan_y = top_margin;
    }

    /// Resets to identity (zoom 1, no pan).
    pub fn reset(&mut self) {
        self.zoom = 1.0;
        self.pan_x = 0.0;
        self.pan_y = 0.0;
    }
}

impl fmt::Display for ViewTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Zoom: {:.2}x | Pan: ({:.1}, {:.1})",
            self.zoom, self.pan_x, self.pan_y
        )
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::new(&ViewSettings::default())
    }
}
