//! 2D scene renderer.
//! Turns the model and view transform into a flat list of screen-space draw
//! primitives. Performs no I/O; the drawing surface and the SVG exporter both
//! consume the same list.
//!
//! Draw order:
//! - Sheet rectangle (if a sheet is present)
//! - For each fold in insertion order: its line, then its two endpoint handles

use sheetfold_core::constants::{SHEET_FILL, SHEET_STROKE};
use sheetfold_core::BendDirection;
use sheetfold_settings::CanvasSettings;

use crate::model::{FoldEnd, FoldId, GeometryModel, Point};
use crate::viewport::ViewTransform;

/// Options that shape the rendered scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    /// Emit endpoint handles for every fold
    pub handles: bool,
    /// Handle radius in screen units
    pub handle_radius: f64,
    /// Fold line stroke width
    pub fold_stroke_width: f64,
}

impl RenderOptions {
    pub fn from_settings(settings: &CanvasSettings) -> Self {
        Self {
            handles: settings.free_endpoints,
            handle_radius: settings.handle_radius,
            fold_stroke_width: settings.fold_stroke_width,
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::from_settings(&CanvasSettings::default())
    }
}

/// A screen-space draw primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// The filled sheet rectangle
    Sheet {
        origin: Point,
        width: f64,
        height: f64,
        fill: &'static str,
        stroke: &'static str,
    },
    /// A fold line, tagged with its index for hit-testing
    FoldLine {
        fold: FoldId,
        start: Point,
        end: Point,
        direction: BendDirection,
        stroke_width: f64,
    },
    /// A draggable endpoint marker
    Handle {
        fold: FoldId,
        end: FoldEnd,
        center: Point,
        radius: f64,
    },
}

impl Primitive {
    /// The drag target under `point`, if this is a handle that contains it.
    pub fn handle_target(&self, point: Point) -> Option<(FoldId, FoldEnd)> {
        match self {
            Self::Handle {
                fold,
                end,
                center,
                radius,
            } if center.distance_to(&point) <= *radius => Some((*fold, *end)),
            _ => None,
        }
    }
}

/// Renders the scene for the current model and transform.
pub fn render_scene(
    model: &GeometryModel,
    view: &ViewTransform,
    options: &RenderOptions,
) -> Vec<Primitive> {
    let zoom = view.zoom();
    let mut scene = Vec::with_capacity(1 + model.fold_count() * 3);

    if let Some(sheet) = model.sheet() {
        scene.push(Primitive::Sheet {
            origin: view.to_screen(Point::new(0.0, 0.0)),
            width: sheet.width() * zoom,
            height: sheet.height() * zoom,
            fill: SHEET_FILL,
            stroke: SHEET_STROKE,
        });
    }

    for (index, fold) in model.folds().iter().enumerate() {
        let id = FoldId::new(index);
        let start = view.to_screen(fold.start);
        let end = view.to_screen(fold.end);

        scene.push(Primitive::FoldLine {
            fold: id,
            start,
            end,
            direction: fold.direction,
            stroke_width: options.fold_stroke_width,
        });

        if options.handles {
            for (which, center) in [(FoldEnd::Start, start), (FoldEnd::End, end)] {
                scene.push(Primitive::Handle {
                    fold: id,
                    end: which,
                    center,
                    radius: options.handle_radius,
                });
            }
        }
    }

    scene
}

/// Finds the topmost handle under a screen-space point.
///
/// Later primitives are drawn on top, so the search runs back to front.
pub fn hit_test_handle(scene: &[Primitive], point: Point) -> Option<(FoldId, FoldEnd)> {
    scene
        .iter()
        .rev()
        .find_map(|primitive| primitive.handle_target(point))
}
