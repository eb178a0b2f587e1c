use sheetfold_core::BendDirection;
use sheetfold_designer::interaction::{InteractionController, InteractionState, PointerEvent};
use sheetfold_designer::model::{FoldEnd, FoldId, GeometryModel, Point};
use sheetfold_designer::renderer::{render_scene, RenderOptions};
use sheetfold_designer::viewport::ViewTransform;

struct Canvas {
    model: GeometryModel,
    view: ViewTransform,
    controller: InteractionController,
}

impl Canvas {
    /// 500x300 sheet centred at (250, 10) with one fold at x=250.
    fn with_fold() -> Self {
        let mut model = GeometryModel::new();
        model.set_sheet(500.0, 300.0).unwrap();
        model.add_fold(250.0, BendDirection::Up).unwrap();
        let mut view = ViewTransform::default();
        view.center_sheet(500.0, 1000.0, 10.0);
        Self {
            model,
            view,
            controller: InteractionController::new(),
        }
    }

    fn send(&mut self, event: PointerEvent) -> (bool, bool) {
        let scene = render_scene(&self.model, &self.view, &RenderOptions::default());
        let outcome = self
            .controller
            .handle(event, &mut self.model, &mut self.view, &scene);
        (outcome.view_changed, outcome.model_changed)
    }
}

#[test]
fn test_pan_on_drag() {
    let mut canvas = Canvas::with_fold();

    canvas.send(PointerEvent::down(100.0, 400.0));
    assert!(matches!(
        canvas.controller.state(),
        InteractionState::Panning { .. }
    ));

    let (view_changed, model_changed) = canvas.send(PointerEvent::moved(130.0, 380.0));
    assert!(view_changed);
    assert!(!model_changed);
    assert_eq!(canvas.view.pan_x(), 280.0);
    assert_eq!(canvas.view.pan_y(), -10.0);

    // Deltas are relative to the last move, not the press.
    canvas.send(PointerEvent::moved(140.0, 380.0));
    assert_eq!(canvas.view.pan_x(), 290.0);

    canvas.send(PointerEvent::Up);
    assert_eq!(canvas.controller.state(), InteractionState::Idle);

    let (view_changed, _) = canvas.send(PointerEvent::moved(500.0, 500.0));
    assert!(!view_changed);
    assert_eq!(canvas.view.pan_x(), 290.0);
}

#[test]
fn test_leave_ends_pan() {
    let mut canvas = Canvas::with_fold();
    canvas.send(PointerEvent::down(100.0, 400.0));
    canvas.send(PointerEvent::Leave);
    assert_eq!(canvas.controller.state(), InteractionState::Idle);
}

#[test]
fn test_handle_takes_priority_over_pan() {
    let mut canvas = Canvas::with_fold();
    // The start handle of fold 0 sits at (500, 10) in screen space.
    canvas.send(PointerEvent::down(504.0, 13.0));
    assert_eq!(
        canvas.controller.state(),
        InteractionState::DraggingEndpoint {
            fold: FoldId::new(0),
            end: FoldEnd::Start,
        }
    );
}

#[test]
fn test_drag_endpoint_moves_fold_in_model_space() {
    let mut canvas = Canvas::with_fold();
    canvas.send(PointerEvent::down(500.0, 310.0));

    let (view_changed, model_changed) = canvas.send(PointerEvent::moved(400.0, 210.0));
    assert!(!view_changed);
    assert!(model_changed);

    let fold = canvas.model.fold(FoldId::new(0)).unwrap();
    assert_eq!(fold.end, Point::new(150.0, 200.0));
    assert_eq!(fold.start, Point::new(250.0, 0.0));
    assert_eq!(canvas.view.pan_x(), 250.0);
}

#[test]
fn test_drag_outside_sheet_is_clamped() {
    let mut canvas = Canvas::with_fold();
    canvas.send(PointerEvent::down(500.0, 310.0));
    canvas.send(PointerEvent::moved(-300.0, 5000.0));

    let fold = canvas.model.fold(FoldId::new(0)).unwrap();
    assert_eq!(fold.end, Point::new(0.0, 300.0));
}

#[test]
fn test_drag_ends_on_release_anywhere() {
    let mut canvas = Canvas::with_fold();
    canvas.send(PointerEvent::down(500.0, 310.0));

    // Leaving the canvas does not end a drag.
    canvas.send(PointerEvent::Leave);
    assert!(matches!(
        canvas.controller.state(),
        InteractionState::DraggingEndpoint { .. }
    ));

    canvas.send(PointerEvent::Up);
    assert_eq!(canvas.controller.state(), InteractionState::Idle);

    let before = canvas.model.clone();
    canvas.send(PointerEvent::moved(10.0, 10.0));
    assert_eq!(canvas.model, before);
}

#[test]
fn test_wheel_zooms_without_changing_state() {
    let mut canvas = Canvas::with_fold();
    canvas.send(PointerEvent::down(100.0, 400.0));

    let (view_changed, _) = canvas.send(PointerEvent::wheel(-1.0));
    assert!(view_changed);
    assert!((canvas.view.zoom() - 1.1).abs() < 1e-9);
    assert!(matches!(
        canvas.controller.state(),
        InteractionState::Panning { .. }
    ));
}

#[test]
fn test_malformed_events_are_ignored() {
    let mut canvas = Canvas::with_fold();
    let (v, m) = canvas.send(PointerEvent::down(f64::NAN, 10.0));
    assert!(!v && !m);
    assert_eq!(canvas.controller.state(), InteractionState::Idle);

    let (v, _) = canvas.send(PointerEvent::wheel(f64::INFINITY));
    assert!(!v);
    assert_eq!(canvas.view.zoom(), 1.0);
}

#[test]
fn test_drag_aborts_when_fold_disappears() {
    let mut canvas = Canvas::with_fold();
    canvas.send(PointerEvent::down(500.0, 310.0));
    canvas.model.remove_last_fold();

    let (_, model_changed) = canvas.send(PointerEvent::moved(300.0, 100.0));
    assert!(!model_changed);
    assert_eq!(canvas.controller.state(), InteractionState::Idle);
}

#[test]
fn test_reset_drops_gesture() {
    let mut canvas = Canvas::with_fold();
    canvas.send(PointerEvent::down(100.0, 400.0));
    canvas.controller.reset();
    assert_eq!(canvas.controller.state(), InteractionState::Idle);
}
