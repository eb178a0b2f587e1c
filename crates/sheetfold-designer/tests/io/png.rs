use sheetfold_core::{BendDirection, ExportError};
use sheetfold_designer::export::{export_png, rasterize_svg};
use sheetfold_designer::model::GeometryModel;
use sheetfold_designer::viewport::ViewTransform;
use sheetfold_settings::CanvasSettings;

fn decode(bytes: &[u8]) -> image::RgbaImage {
    image::load_from_memory_with_format(bytes, image::ImageFormat::Png)
        .unwrap()
        .to_rgba8()
}

#[test]
fn test_png_has_svg_intrinsic_size() {
    let mut model = GeometryModel::new();
    model.set_sheet(500.0, 300.0).unwrap();
    model.add_fold(250.0, BendDirection::Down).unwrap();
    let mut view = ViewTransform::default();
    view.center_sheet(500.0, 1000.0, 10.0);

    let png = export_png(&model, &view, &CanvasSettings::default()).unwrap();
    let image = decode(&png);
    assert_eq!(image.dimensions(), (1000, 600));

    // Inside the sheet, away from the fold: sheet fill.
    let pixel = image.get_pixel(300, 150);
    assert_eq!(&pixel.0[..3], &[0xc2, 0xfb, 0xd7]);

    // Outside the sheet: transparent background.
    assert_eq!(image.get_pixel(50, 500).0[3], 0);
}

#[test]
fn test_png_exports_are_independent() {
    let mut model = GeometryModel::new();
    model.set_sheet(200.0, 100.0).unwrap();
    let view = ViewTransform::default();
    let canvas = CanvasSettings::default();

    let first = export_png(&model, &view, &canvas).unwrap();
    let second = export_png(&model, &view, &canvas).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_png_without_sheet() {
    let result = export_png(
        &GeometryModel::new(),
        &ViewTransform::default(),
        &CanvasSettings::default(),
    );
    assert!(matches!(result, Err(ExportError::Validation(_))));
}

#[test]
fn test_rasterize_rejects_bad_markup() {
    let err = rasterize_svg("<not-svg").unwrap_err();
    assert!(matches!(err, ExportError::SvgDecode(_)));
}
