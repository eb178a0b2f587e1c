use serde::{Deserialize, Serialize};
use sheetfold_core::BendDirection;
use std::fmt;

use super::{Point, Sheet};

/// Index of a fold in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FoldId(usize);

impl FoldId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for FoldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which endpoint of a fold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoldEnd {
    Start,
    End,
}

impl FoldEnd {
    /// Value of the `data-end` attribute on the handle markup.
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Start => "1",
            Self::End => "2",
        }
    }
}

/// A bend line on the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fold {
    pub start: Point,
    pub end: Point,
    pub direction: BendDirection,
}

impl Fold {
    /// A vertical fold spanning the full sheet height at `x = pos`.
    pub fn full_span(pos: f64, sheet: &Sheet, direction: BendDirection) -> Self {
        Self {
            start: Point::new(pos, 0.0),
            end: Point::new(pos, sheet.height()),
            direction,
        }
    }

    pub fn endpoint(&self, end: FoldEnd) -> Point {
        match end {
            FoldEnd::Start => self.start,
            FoldEnd::End => self.end,
        }
    }

    pub(crate) fn set_endpoint(&mut self, end: FoldEnd, point: Point) {
        match end {
            FoldEnd::Start => self.start = point,
            FoldEnd::End => self.end = point,
        }
    }

    pub(crate) fn clamp_to(&mut self, sheet: &Sheet) {
        self.start = sheet.clamp(self.start);
        self.end = sheet.clamp(self.end);
    }

    /// Whether the fold is a full-span vertical line on `sheet`.
    pub fn is_full_span(&self, sheet: &Sheet) -> bool {
        self.start.x == self.end.x && self.start.y == 0.0 && self.end.y == sheet.height()
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }
}
