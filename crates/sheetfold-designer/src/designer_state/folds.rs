//! Fold creation, removal, and endpoint edits.

use sheetfold_core::{parse_field, BendDirection, ValidationError};

use super::DesignerState;
use crate::model::{Fold, FoldEnd, FoldId, Point};

impl DesignerState {
    /// Appends a full-span fold at `pos`.
    pub fn add_fold(
        &mut self,
        pos: f64,
        direction: BendDirection,
    ) -> Result<FoldId, ValidationError> {
        match self.model.add_fold(pos, direction) {
            Ok(id) => {
                self.succeed();
                self.geometry_changed();
                Ok(id)
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// [`add_fold`](Self::add_fold) from raw field text.
    pub fn add_fold_from_input(
        &mut self,
        pos: &str,
        direction: &str,
    ) -> Result<FoldId, ValidationError> {
        let direction = match direction.parse::<BendDirection>() {
            Ok(direction) => direction,
            Err(e) => return Err(self.fail(e)),
        };
        // Unparseable text takes the same path as an out-of-range number.
        self.add_fold(parse_field(pos).unwrap_or(f64::NAN), direction)
    }

    /// Drops the last fold. Does nothing when there are no folds.
    pub fn remove_last_fold(&mut self) -> Option<Fold> {
        let removed = self.model.remove_last_fold()?;
        self.succeed();
        self.geometry_changed();
        Some(removed)
    }

    /// Moves one endpoint of a fold, clamped into the sheet.
    pub fn set_fold_endpoint(
        &mut self,
        id: FoldId,
        end: FoldEnd,
        point: Point,
    ) -> Result<(), ValidationError> {
        match self.model.set_fold_endpoint(id, end, point) {
            Ok(changed) => {
                self.succeed();
                if changed {
                    self.geometry_changed();
                }
                Ok(())
            }
            Err(e) => Err(self.fail(e)),
        }
    }
}
