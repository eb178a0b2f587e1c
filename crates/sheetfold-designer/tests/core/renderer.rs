use sheetfold_core::BendDirection;
use sheetfold_designer::model::{FoldEnd, FoldId, GeometryModel, Point};
use sheetfold_designer::renderer::{hit_test_handle, render_scene, Primitive, RenderOptions};
use sheetfold_designer::viewport::ViewTransform;

fn centred_view(sheet_width: f64) -> ViewTransform {
    let mut view = ViewTransform::default();
    view.center_sheet(sheet_width, 1000.0, 10.0);
    view
}

#[test]
fn test_empty_model_renders_nothing() {
    let scene = render_scene(
        &GeometryModel::new(),
        &ViewTransform::default(),
        &RenderOptions::default(),
    );
    assert!(scene.is_empty());
}

#[test]
fn test_sheet_rectangle_uses_zoom() {
    let mut model = GeometryModel::new();
    model.set_sheet(500.0, 300.0).unwrap();
    let mut view = centred_view(500.0);
    view.set_zoom(2.0);

    let scene = render_scene(&model, &view, &RenderOptions::default());
    match &scene[0] {
        Primitive::Sheet {
            origin,
            width,
            height,
            fill,
            ..
        } => {
            assert_eq!(*origin, Point::new(250.0, 10.0));
            assert_eq!(*width, 1000.0);
            assert_eq!(*height, 600.0);
            assert_eq!(*fill, "#c2fbd7");
        }
        other => panic!("expected sheet first, got {:?}", other),
    }
}

#[test]
fn test_fold_lines_and_handles_in_order() {
    let mut model = GeometryModel::new();
    model.set_sheet(500.0, 300.0).unwrap();
    model.add_fold(100.0, BendDirection::Up).unwrap();
    model.add_fold(400.0, BendDirection::Down).unwrap();
    let view = centred_view(500.0);

    let scene = render_scene(&model, &view, &RenderOptions::default());
    assert_eq!(scene.len(), 1 + 2 * 3);

    match &scene[1] {
        Primitive::FoldLine {
            fold,
            start,
            end,
            direction,
            ..
        } => {
            assert_eq!(*fold, FoldId::new(0));
            assert_eq!(*start, Point::new(350.0, 10.0));
            assert_eq!(*end, Point::new(350.0, 310.0));
            assert_eq!(*direction, BendDirection::Up);
        }
        other => panic!("expected fold line, got {:?}", other),
    }
    assert!(matches!(
        scene[2],
        Primitive::Handle {
            end: FoldEnd::Start,
            radius,
            ..
        } if radius == 10.0
    ));
    assert!(matches!(
        scene[4],
        Primitive::FoldLine {
            direction: BendDirection::Down,
            ..
        }
    ));
}

#[test]
fn test_handles_can_be_disabled() {
    let mut model = GeometryModel::new();
    model.set_sheet(500.0, 300.0).unwrap();
    model.add_fold(100.0, BendDirection::Up).unwrap();
    let options = RenderOptions {
        handles: false,
        ..RenderOptions::default()
    };

    let scene = render_scene(&model, &centred_view(500.0), &options);
    assert_eq!(scene.len(), 2);
    assert!(hit_test_handle(&scene, Point::new(350.0, 10.0)).is_none());
}

#[test]
fn test_hit_test_prefers_topmost_handle() {
    let mut model = GeometryModel::new();
    model.set_sheet(500.0, 300.0).unwrap();
    model.add_fold(100.0, BendDirection::Up).unwrap();
    model.add_fold(105.0, BendDirection::Up).unwrap();
    let scene = render_scene(&model, &centred_view(500.0), &RenderOptions::default());

    // Both start handles cover (352, 10); fold 1 is drawn later.
    assert_eq!(
        hit_test_handle(&scene, Point::new(352.0, 10.0)),
        Some((FoldId::new(1), FoldEnd::Start))
    );
    assert_eq!(hit_test_handle(&scene, Point::new(600.0, 150.0)), None);
}

#[test]
fn test_handle_radius_is_in_screen_units() {
    let mut model = GeometryModel::new();
    model.set_sheet(500.0, 300.0).unwrap();
    model.add_fold(100.0, BendDirection::Up).unwrap();
    let mut view = centred_view(500.0);
    view.set_zoom(0.5);

    let scene = render_scene(&model, &view, &RenderOptions::default());
    // Start handle at (250 + 50, 10); 10 units away is still a hit.
    assert!(hit_test_handle(&scene, Point::new(310.0, 10.0)).is_some());
    assert!(hit_test_handle(&scene, Point::new(311.0, 10.0)).is_none());
}
