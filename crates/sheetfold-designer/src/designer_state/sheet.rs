//! Sheet creation and clearing.

use sheetfold_core::{parse_field, ValidationError};
use tracing::debug;

use super::DesignerState;

impl DesignerState {
    /// Creates or re-dimensions the sheet and centres it in the virtual
    /// canvas.
    ///
    /// Zoom is left as it is. On failure the sheet becomes absent.
    pub fn set_sheet(&mut self, width: f64, height: f64) -> Result<(), ValidationError> {
        match self.model.set_sheet(width, height).map(|sheet| sheet.width()) {
            Ok(sheet_width) => {
                let canvas = &self.config.canvas;
                self.view
                    .center_sheet(sheet_width, canvas.width, canvas.top_margin);
                debug!("View centred: {}", self.view);
                self.succeed();
                self.geometry_changed();
                Ok(())
            }
            Err(e) => {
                self.geometry_changed();
                Err(self.fail(e))
            }
        }
    }

    /// [`set_sheet`](Self::set_sheet) from raw field text.
    pub fn set_sheet_from_input(&mut self, width: &str, height: &str) -> Result<(), ValidationError> {
        match (parse_field(width), parse_field(height)) {
            (Some(w), Some(h)) => self.set_sheet(w, h),
            _ => {
                self.model.clear();
                self.geometry_changed();
                Err(self.fail(ValidationError::InvalidSheet))
            }
        }
    }

    /// Empties the session: no sheet, no folds, identity transform.
    pub fn clear(&mut self) {
        self.model.clear();
        self.view.reset();
        self.controller.reset();
        debug!("Session cleared");
        self.succeed();
        self.geometry_changed();
    }
}
