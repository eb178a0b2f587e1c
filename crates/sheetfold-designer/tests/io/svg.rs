use sheetfold_core::{BendDirection, ExportError, ValidationError};
use sheetfold_designer::export::{export_svg, scene_to_svg};
use sheetfold_designer::model::GeometryModel;
use sheetfold_designer::renderer::{render_scene, RenderOptions};
use sheetfold_designer::viewport::ViewTransform;
use sheetfold_settings::CanvasSettings;

fn design() -> (GeometryModel, ViewTransform) {
    let mut model = GeometryModel::new();
    model.set_sheet(500.0, 300.0).unwrap();
    model.add_fold(100.0, BendDirection::Up).unwrap();
    model.add_fold(400.0, BendDirection::Down).unwrap();
    let mut view = ViewTransform::default();
    view.center_sheet(500.0, 1000.0, 10.0);
    (model, view)
}

#[test]
fn test_svg_document_shape() {
    let (model, view) = design();
    let svg = export_svg(&model, &view, &CanvasSettings::default()).unwrap();

    assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" id="designCanvas" width="1000" height="600""#));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert_eq!(svg.matches("<rect").count(), 1);
    assert_eq!(svg.matches("<line").count(), 2);
    assert_eq!(svg.matches("<circle").count(), 4);
}

#[test]
fn test_svg_uses_rendered_coordinates() {
    let (model, view) = design();
    let svg = export_svg(&model, &view, &CanvasSettings::default()).unwrap();

    assert!(svg.contains(
        r##"<rect x="250" y="10" width="500" height="300" fill="#c2fbd7" stroke="#333"/>"##
    ));
    assert!(svg.contains(
        r##"<line x1="350" y1="10" x2="350" y2="310" stroke="#00f" stroke-width="2" class="fold-line bend-up" data-index="0"/>"##
    ));
    assert!(svg.contains(r##"stroke="#f00""##));
    assert!(svg.contains(r#"class="fold-line bend-down" data-index="1""#));
    assert!(svg.contains(
        r#"<circle cx="650" cy="310" r="10" class="fold-endpoint" data-index="1" data-end="2""#
    ));
}

#[test]
fn test_svg_matches_scene() {
    let (model, view) = design();
    let canvas = CanvasSettings::default();
    let scene = render_scene(&model, &view, &RenderOptions::from_settings(&canvas));
    let exported = export_svg(&model, &view, &canvas).unwrap();
    assert_eq!(exported, scene_to_svg(&scene, canvas.width, canvas.height));
}

#[test]
fn test_svg_without_handles() {
    let (model, view) = design();
    let canvas = CanvasSettings {
        free_endpoints: false,
        ..CanvasSettings::default()
    };
    let svg = export_svg(&model, &view, &canvas).unwrap();
    assert_eq!(svg.matches("<circle").count(), 0);
}

#[test]
fn test_svg_without_sheet() {
    let err = export_svg(
        &GeometryModel::new(),
        &ViewTransform::default(),
        &CanvasSettings::default(),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ExportError::Validation(ValidationError::ExportWithoutSheet)
    ));
}
