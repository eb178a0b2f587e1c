//! DXF export for the sheet outline and fold lines.
//!
//! Writes a bare ENTITIES section of `LINE` entities in screen-space
//! coordinates:
//! - Sheet outline (layer "0", four edges clockwise from the top-left corner)
//! - Fold lines (layer "FOLDS", one per fold in insertion order)

use sheetfold_core::constants::{DXF_FOLD_LAYER, DXF_SHEET_LAYER};
use sheetfold_core::{ExportError, ValidationError};
use std::fmt::Write;

use crate::model::{GeometryModel, Point};
use crate::viewport::ViewTransform;

/// Exports the current design as a DXF entity stream.
pub fn export_dxf(model: &GeometryModel, view: &ViewTransform) -> Result<String, ExportError> {
    let Some(sheet) = model.sheet() else {
        return Err(ValidationError::ExportWithoutSheet.into());
    };

    let mut dxf = String::from("0\nSECTION\n2\nENTITIES\n");

    let top_left = view.to_screen(Point::new(0.0, 0.0));
    let bottom_right = view.to_screen(Point::new(sheet.width(), sheet.height()));
    let (x1, y1) = (top_left.x, top_left.y);
    let (x2, y2) = (bottom_right.x, bottom_right.y);

    let outline = [
        (Point::new(x1, y1), Point::new(x2, y1)),
        (Point::new(x2, y1), Point::new(x2, y2)),
        (Point::new(x2, y2), Point::new(x1, y2)),
        (Point::new(x1, y2), Point::new(x1, y1)),
    ];
    for (start, end) in outline {
        write_line(&mut dxf, DXF_SHEET_LAYER, start, end);
    }

    for fold in model.folds() {
        write_line(
            &mut dxf,
            DXF_FOLD_LAYER,
            view.to_screen(fold.start),
            view.to_screen(fold.end),
        );
    }

    dxf.push_str("0\nENDSEC\n0\nEOF");
    Ok(dxf)
}

fn write_line(out: &mut String, layer: &str, start: Point, end: Point) {
    // Writing into a String cannot fail.
    let _ = write!(
        out,
        "0\nLINE\n8\n{}\n10\n{}\n20\n{}\n11\n{}\n21\n{}\n",
        layer, start.x, start.y, end.x, end.y
    );
}
