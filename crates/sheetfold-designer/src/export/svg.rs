//! SVG serialisation of the rendered scene.
//! Writes the same primitives the canvas draws, with the same screen-space
//! coordinates, as a self-contained document.

use sheetfold_core::ExportError;
use sheetfold_settings::CanvasSettings;
use std::fmt::Write;

use crate::model::GeometryModel;
use crate::renderer::{render_scene, Primitive, RenderOptions};
use crate::viewport::ViewTransform;

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const HANDLE_FILL: &str = "#333";
const HANDLE_OPACITY: f64 = 0.35;

/// Exports the current scene as an SVG document.
pub fn export_svg(
    model: &GeometryModel,
    view: &ViewTransform,
    canvas: &CanvasSettings,
) -> Result<String, ExportError> {
    super::ensure_valid_sheet(model)?;
    let scene = render_scene(model, view, &RenderOptions::from_settings(canvas));
    Ok(scene_to_svg(&scene, canvas.width, canvas.height))
}

/// Serialises a primitive list as SVG markup.
pub fn scene_to_svg(scene: &[Primitive], width: f64, height: f64) -> String {
    let mut svg = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(
        svg,
        r#"<svg xmlns="{SVG_NS}" id="designCanvas" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    );

    for primitive in scene {
        let _ = match primitive {
            Primitive::Sheet {
                origin,
                width,
                height,
                fill,
                stroke,
            } => writeln!(
                svg,
                r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}" stroke="{}"/>"#,
                origin.x, origin.y, width, height, fill, stroke
            ),
            Primitive::FoldLine {
                fold,
                start,
                end,
                direction,
                stroke_width,
            } => writeln!(
                svg,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}" class="fold-line bend-{}" data-index="{}"/>"#,
                start.x,
                start.y,
                end.x,
                end.y,
                direction.stroke_color(),
                stroke_width,
                direction,
                fold.index()
            ),
            Primitive::Handle {
                fold,
                end,
                center,
                radius,
            } => writeln!(
                svg,
                r#"<circle cx="{}" cy="{}" r="{}" class="fold-endpoint" data-index="{}" data-end="{}" fill="{}" fill-opacity="{}"/>"#,
                center.x,
                center.y,
                radius,
                fold.index(),
                end.marker(),
                HANDLE_FILL,
                HANDLE_OPACITY
            ),
        };
    }

    svg.push_str("</svg>\n");
    svg
}
