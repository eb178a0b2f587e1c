//! Geometry model: the flat sheet and its ordered fold lines.
//!
//! Every fold endpoint stays inside `[0, width] x [0, height]` after every
//! mutation, including when the sheet itself is re-dimensioned.

mod fold;
mod sheet;

pub use fold::{Fold, FoldEnd, FoldId};
pub use sheet::Sheet;

use serde::{Deserialize, Serialize};
use sheetfold_core::{BendDirection, ValidationError};
use tracing::debug;

/// A point in model or screen space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Both coordinates are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// The sheet and its folds, owned by one editing session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeometryModel {
    sheet: Option<Sheet>,
    folds: Vec<Fold>,
}

impl GeometryModel {
    /// Creates an empty model with no sheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current sheet, if one is present.
    pub fn sheet(&self) -> Option<&Sheet> {
        self.sheet.as_ref()
    }

    /// Whether a valid sheet is present.
    pub fn is_present(&self) -> bool {
        self.sheet.is_some()
    }

    /// Folds in insertion order.
    pub fn folds(&self) -> &[Fold] {
        &self.folds
    }

    pub fn fold(&self, id: FoldId) -> Option<&Fold> {
        self.folds.get(id.index())
    }

    pub fn fold_count(&self) -> usize {
        self.folds.len()
    }

    /// Creates or re-dimensions the sheet.
    ///
    /// On failure the sheet becomes absent and any folds bound to the old
    /// sheet are dropped. On success existing folds are clamped into the new
    /// bounds.
    pub fn set_sheet(&mut self, width: f64, height: f64) -> Result<&Sheet, ValidationError> {
        let Some(sheet) = Sheet::new(width, height) else {
            if self.sheet.take().is_some() || !self.folds.is_empty() {
                debug!("Invalid sheet {}x{}, discarding previous sheet", width, height);
            }
            self.folds.clear();
            return Err(ValidationError::InvalidSheet);
        };

        for fold in &mut self.folds {
            fold.clamp_to(&sheet);
        }
        debug!("Sheet set to {}x{} ({} folds kept)", width, height, self.folds.len());
        Ok(self.sheet.insert(sheet))
    }

    /// Removes the sheet and every fold.
    pub fn clear(&mut self) {
        self.sheet = None;
        self.folds.clear();
    }

    /// Appends a full-span vertical fold at `pos`.
    pub fn add_fold(
        &mut self,
        pos: f64,
        direction: BendDirection,
    ) -> Result<FoldId, ValidationError> {
        let sheet = self.sheet.as_ref().ok_or(ValidationError::SheetMissing)?;
        if !pos.is_finite() || pos <= 0.0 || pos >= sheet.width() {
            return Err(ValidationError::FoldOutOfRange {
                position: pos,
                width: sheet.width(),
            });
        }

        let id = FoldId::new(self.folds.len());
        self.folds.push(Fold::full_span(pos, sheet, direction));
        debug!("Added {} fold {} at x={}", direction, id, pos);
        Ok(id)
    }

    /// Drops the highest-index fold. No-op on an empty list.
    pub fn remove_last_fold(&mut self) -> Option<Fold> {
        let removed = self.folds.pop();
        if removed.is_some() {
            debug!("Removed fold {}", self.folds.len());
        }
        removed
    }

    /// Moves one endpoint of a fold, clamped into the sheet.
    ///
    /// Returns `Ok(true)` when the stored point changed. Non-finite points are
    /// ignored.
    pub fn set_fold_endpoint(
        &mut self,
        id: FoldId,
        end: FoldEnd,
        point: Point,
    ) -> Result<bool, ValidationError> {
        let sheet = self.sheet.as_ref().ok_or(ValidationError::SheetMissing)?;
        let fold = self
            .folds
            .get_mut(id.index())
            .ok_or(ValidationError::UnknownFold { index: id.index() })?;

        if !point.is_finite() {
            return Ok(false);
        }

        let clamped = sheet.clamp(point);
        if fold.endpoint(end) == clamped {
            return Ok(false);
        }
        fold.set_endpoint(end, clamped);
        Ok(true)
    }
}
