//! Pointer interaction state machine for the 2D canvas.
//!
//! The controller consumes raw pointer and wheel events and mutates the view
//! transform or fold endpoints. It never draws; the session re-renders after
//! every event that reports a change.
//!
//! ```text
//! Idle --down on handle--> DraggingEndpoint --up (anywhere)--> Idle
//! Idle --down elsewhere--> Panning          --up / leave-----> Idle
//! wheel: zoom in any state, no transition
//! ```

use std::fmt;

use tracing::{debug, warn};

use crate::model::{FoldEnd, FoldId, GeometryModel, Point};
use crate::renderer::{hit_test_handle, Primitive};
use crate::viewport::ViewTransform;

/// Raw input from the drawing surface, in canvas-relative screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { position: Point },
    Move { position: Point },
    /// Released anywhere, including outside the canvas
    Up,
    /// Left the canvas bounds
    Leave,
    /// Wheel tick; positive `delta_y` scrolls down
    Wheel { delta_y: f64 },
}

impl PointerEvent {
    pub fn down(x: f64, y: f64) -> Self {
        Self::Down {
            position: Point::new(x, y),
        }
    }

    pub fn moved(x: f64, y: f64) -> Self {
        Self::Move {
            position: Point::new(x, y),
        }
    }

    pub fn wheel(delta_y: f64) -> Self {
        Self::Wheel { delta_y }
    }

    fn is_well_formed(&self) -> bool {
        match self {
            Self::Down { position } | Self::Move { position } => position.is_finite(),
            Self::Wheel { delta_y } => delta_y.is_finite(),
            Self::Up | Self::Leave => true,
        }
    }
}

/// Current gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Panning {
        last: Point,
    },
    DraggingEndpoint {
        fold: FoldId,
        end: FoldEnd,
    },
}

impl fmt::Display for InteractionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Panning { .. } => write!(f, "panning"),
            Self::DraggingEndpoint { fold, end } => write!(f, "dragging {:?} of fold {}", end, fold),
        }
    }
}

/// What an event changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InteractionOutcome {
    /// Pan or zoom changed
    pub view_changed: bool,
    /// A fold endpoint moved
    pub model_changed: bool,
}

impl InteractionOutcome {
    pub fn needs_redraw(&self) -> bool {
        self.view_changed || self.model_changed
    }
}

/// Pointer state machine, one per canvas.
#[derive(Debug, Clone, Default)]
pub struct InteractionController {
    state: InteractionState,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// Drops any gesture in progress.
    pub fn reset(&mut self) {
        self.state = InteractionState::Idle;
    }

    /// Feeds one event through the state machine.
    ///
    /// `scene` is the most recently rendered primitive list, used to hit-test
    /// endpoint handles. Malformed events are ignored.
    pub fn handle(
        &mut self,
        event: PointerEvent,
        model: &mut GeometryModel,
        view: &mut ViewTransform,
        scene: &[Primitive],
    ) -> InteractionOutcome {
        let mut outcome = InteractionOutcome::default();
        if !event.is_well_formed() {
            return outcome;
        }

        match event {
            PointerEvent::Wheel { delta_y } => {
                outcome.view_changed = view.apply_zoom_delta(delta_y);
            }
            PointerEvent::Down { position } => {
                // Handles win over panning.
                let next = match hit_test_handle(scene, position) {
                    Some((fold, end)) => InteractionState::DraggingEndpoint { fold, end },
                    None => InteractionState::Panning { last: position },
                };
                self.transition(next);
            }
            PointerEvent::Move { position } => match self.state {
                InteractionState::Idle => {}
                InteractionState::Panning { last } => {
                    outcome.view_changed =
                        view.apply_pan(position.x - last.x, position.y - last.y);
                    self.state = InteractionState::Panning { last: position };
                }
                InteractionState::DraggingEndpoint { fold, end } => {
                    let target = view.to_model(position);
                    match model.set_fold_endpoint(fold, end, target) {
                        Ok(changed) => outcome.model_changed = changed,
                        Err(e) => {
                            warn!("Endpoint drag aborted: {}", e);
                            self.transition(InteractionState::Idle);
                        }
                    }
                }
            },
            PointerEvent::Up => self.transition(InteractionState::Idle),
            PointerEvent::Leave => {
                if matches!(self.state, InteractionState::Panning { .. }) {
                    self.transition(InteractionState::Idle);
                }
            }
        }

        outcome
    }

    fn transition(&mut self, next: InteractionState) {
        if std::mem::discriminant(&self.state) != std::mem::discriminant(&next) {
            debug!("Interaction {} -> {}", self.state, next);
        }
        self.state = next;
    }
}
