use proptest::prelude::*;
use sheetfold_designer::model::Point;
use sheetfold_designer::viewport::ViewTransform;
use sheetfold_settings::ViewSettings;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_view_transform_starts_at_identity() {
    let view = ViewTransform::default();
    assert_eq!(view.zoom(), 1.0);
    assert_eq!(view.pan_x(), 0.0);
    assert_eq!(view.pan_y(), 0.0);
    assert_eq!(view.min_zoom(), 0.2);
    assert_eq!(view.max_zoom(), 3.0);
}

#[test]
fn test_to_screen_and_back() {
    let mut view = ViewTransform::default();
    view.set_pan(250.0, 10.0);
    view.set_zoom(2.0);

    let screen = view.to_screen(Point::new(100.0, 50.0));
    assert_eq!(screen, Point::new(450.0, 110.0));

    let model = view.to_model(screen);
    assert!(approx(model.x, 100.0));
    assert!(approx(model.y, 50.0));
}

#[test]
fn test_wheel_down_zooms_out_by_one_step() {
    let mut view = ViewTransform::default();
    assert!(view.apply_zoom_delta(120.0));
    assert!(approx(view.zoom(), 0.9));
}

#[test]
fn test_wheel_up_zooms_in_by_one_step() {
    let mut view = ViewTransform::default();
    assert!(view.apply_zoom_delta(-3.0));
    assert!(approx(view.zoom(), 1.1));
}

#[test]
fn test_zoom_is_anchored_at_origin() {
    let mut view = ViewTransform::default();
    view.set_pan(250.0, 10.0);
    view.apply_zoom_delta(-1.0);
    assert_eq!(view.pan_x(), 250.0);
    assert_eq!(view.pan_y(), 10.0);
}

#[test]
fn test_zoom_clamps_at_limits() {
    let mut view = ViewTransform::default();
    for _ in 0..100 {
        view.apply_zoom_delta(1.0);
    }
    assert!(approx(view.zoom(), 0.2));
    assert!(!view.apply_zoom_delta(1.0));

    for _ in 0..100 {
        view.apply_zoom_delta(-1.0);
    }
    assert!(approx(view.zoom(), 3.0));
    assert!(!view.apply_zoom_delta(-1.0));
}

#[test]
fn test_zero_and_non_finite_wheel_deltas_are_ignored() {
    let mut view = ViewTransform::default();
    assert!(!view.apply_zoom_delta(0.0));
    assert!(!view.apply_zoom_delta(f64::NAN));
    assert!(!view.apply_zoom_delta(f64::NEG_INFINITY));
    assert_eq!(view.zoom(), 1.0);
}

#[test]
fn test_pan_adds_screen_deltas() {
    let mut view = ViewTransform::default();
    view.set_zoom(2.5);
    assert!(view.apply_pan(15.0, -5.0));
    assert!(view.apply_pan(5.0, 5.0));
    assert_eq!(view.pan_x(), 20.0);
    assert_eq!(view.pan_y(), 0.0);
    assert!(!view.apply_pan(0.0, 0.0));
}

#[test]
fn test_center_sheet() {
    let mut view = ViewTransform::default();
    view.center_sheet(500.0, 1000.0, 10.0);
    assert_eq!(view.pan_x(), 250.0);
    assert_eq!(view.pan_y(), 10.0);

    // Wider than the virtual canvas: negative offset.
    view.center_sheet(1400.0, 1000.0, 10.0);
    assert_eq!(view.pan_x(), -200.0);
}

#[test]
fn test_reset() {
    let mut view = ViewTransform::default();
    view.set_zoom(2.0);
    view.set_pan(1.0, 2.0);
    view.reset();
    assert_eq!(view, ViewTransform::default());
}

#[test]
fn test_custom_zoom_limits() {
    let settings = ViewSettings {
        min_zoom: 0.5,
        max_zoom: 1.5,
        zoom_step: 0.25,
    };
    let mut view = ViewTransform::new(&settings);
    view.apply_zoom_delta(-1.0);
    assert!(approx(view.zoom(), 1.25));
    view.apply_zoom_delta(-1.0);
    assert!(approx(view.zoom(), 1.5));
    view.set_zoom(0.1);
    assert!(approx(view.zoom(), 0.5));
}

#[test]
fn test_display() {
    let mut view = ViewTransform::default();
    view.set_pan(250.0, 10.0);
    assert_eq!(view.to_string(), "Zoom: 1.00x | Pan: (250.0, 10.0)");
}

proptest! {
    #[test]
    fn prop_zoom_stays_in_range(deltas in prop::collection::vec(-500.0f64..500.0, 0..200)) {
        let mut view = ViewTransform::default();
        for delta in deltas {
            let before = view.zoom();
            view.apply_zoom_delta(delta);
            let after = view.zoom();
            prop_assert!((0.2..=3.0).contains(&after));
            // One tick moves by at most one step.
            prop_assert!((after - before).abs() <= 0.1 + 1e-9);
        }
    }
}
