//! PNG export: decode the SVG export and rasterise it.
//!
//! Each call allocates its own pixmap, so concurrent or back-to-back exports
//! never share a scratch surface.

use resvg::usvg;
use sheetfold_core::ExportError;
use sheetfold_settings::CanvasSettings;
use tiny_skia::{Pixmap, Transform};
use tracing::debug;

use crate::model::GeometryModel;
use crate::viewport::ViewTransform;

/// Exports the current scene as PNG bytes.
pub fn export_png(
    model: &GeometryModel,
    view: &ViewTransform,
    canvas: &CanvasSettings,
) -> Result<Vec<u8>, ExportError> {
    let svg = super::export_svg(model, view, canvas)?;
    rasterize_svg(&svg)
}

/// Rasterises SVG markup at the document's intrinsic pixel size.
pub fn rasterize_svg(svg: &str) -> Result<Vec<u8>, ExportError> {
    let options = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg, &options)
        .map_err(|e| ExportError::SvgDecode(e.to_string()))?;

    let size = tree.size().to_int_size();
    let mut pixmap = Pixmap::new(size.width(), size.height()).ok_or_else(|| {
        ExportError::Raster(format!(
            "cannot allocate {}x{} pixmap",
            size.width(),
            size.height()
        ))
    })?;

    resvg::render(&tree, Transform::identity(), &mut pixmap.as_mut());
    debug!("Rasterised SVG at {}x{}", size.width(), size.height());

    pixmap
        .encode_png()
        .map_err(|e| ExportError::Raster(e.to_string()))
}
