//! Pointer and wheel input.

use super::DesignerState;
use crate::interaction::{InteractionOutcome, PointerEvent};

impl DesignerState {
    /// Routes one pointer event through the interaction controller.
    ///
    /// The scene is re-rendered in the same call when anything changed;
    /// listeners only hear about endpoint drags, which also clear the banner.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> InteractionOutcome {
        let outcome =
            self.controller
                .handle(event, &mut self.model, &mut self.view, &self.scene);

        if outcome.model_changed {
            self.succeed();
            self.geometry_changed();
        } else if outcome.view_changed {
            self.redraw();
        }
        outcome
    }
}
