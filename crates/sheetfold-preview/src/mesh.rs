//! Bent-sheet mesh derivation.
//!
//! The sheet is mapped into a fixed local frame centred on the origin with
//! half extents `half_width x half_height` (aspect ratio is not preserved).
//! Model y grows downward; local y grows upward.
//!
//! With no folds the mesh is one flat patch. Otherwise the local rectangle is
//! split by the infinite line through the first fold's endpoints. The patch on
//! the clockwise side of start->end stays in the z=0 plane; the other is
//! rotated a quarter turn about the fold line (positive for up, negative for
//! down). Folds after the first are not modelled.

use glam::{Quat, Vec2, Vec3};
use sheetfold_core::BendDirection;
use sheetfold_designer::model::{Fold, GeometryModel, Point, Sheet};
use sheetfold_settings::PreviewSettings;

/// Fill colour of the unbent (or only) patch.
pub const FIXED_COLOR: Rgb = Rgb::new(0xc2, 0xfb, 0xd7);
/// Fill colour of the rotated patch.
pub const FOLDED_COLOR: Rgb = Rgb::new(0x8f, 0xd6, 0xb4);

const UP_LINE_COLOR: Rgb = Rgb::new(0x00, 0x00, 0xff);
const DOWN_LINE_COLOR: Rgb = Rgb::new(0xff, 0x00, 0x00);

/// Fold endpoints closer than this in the local frame count as a point.
const DEGENERATE_FOLD_LENGTH: f32 = 1e-4;

/// 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Scales each channel by `factor`, saturating at 255.
    pub fn scaled(&self, factor: f32) -> Self {
        let scale = |c: u8| (c as f32 * factor).round().clamp(0.0, 255.0) as u8;
        Self::new(scale(self.r), scale(self.g), scale(self.b))
    }
}

/// Maps model coordinates into the centred preview frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalFrame {
    sheet_width: f64,
    sheet_height: f64,
    half_width: f32,
    half_height: f32,
}

impl LocalFrame {
    pub fn new(sheet: &Sheet, half_width: f32, half_height: f32) -> Self {
        Self {
            sheet_width: sheet.width(),
            sheet_height: sheet.height(),
            half_width,
            half_height,
        }
    }

    pub fn from_settings(sheet: &Sheet, settings: &PreviewSettings) -> Self {
        Self::new(
            sheet,
            settings.half_width as f32,
            settings.half_height as f32,
        )
    }

    /// Model point to local frame, y flipped.
    pub fn project(&self, point: Point) -> Vec2 {
        let x = (point.x / self.sheet_width - 0.5) * 2.0 * self.half_width as f64;
        let y = (0.5 - point.y / self.sheet_height) * 2.0 * self.half_height as f64;
        Vec2::new(x as f32, y as f32)
    }

    /// Frame corners, counter-clockwise from bottom-left.
    pub fn corners(&self) -> [Vec2; 4] {
        let (w, h) = (self.half_width, self.half_height);
        [
            Vec2::new(-w, -h),
            Vec2::new(w, -h),
            Vec2::new(w, h),
            Vec2::new(-w, h),
        ]
    }
}

/// What a patch represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchRole {
    /// Whole sheet, no folds
    Flat,
    /// Side of the fold that stays put
    Fixed,
    /// Side of the fold that is rotated
    Folded,
}

/// A planar polygon of the mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct Patch {
    pub role: PatchRole,
    /// Silhouette vertices in order
    pub vertices: Vec<Vec3>,
    pub color: Rgb,
}

impl Patch {
    /// Fewer than three vertices or zero area.
    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < 3 || self.area() <= f32::EPSILON
    }

    /// Unit normal from the vertex winding, or `Vec3::Z` for degenerate patches.
    pub fn normal(&self) -> Vec3 {
        self.newell().try_normalize().unwrap_or(Vec3::Z)
    }

    pub fn area(&self) -> f32 {
        self.newell().length() * 0.5
    }

    // Newell's method; exact for planar polygons.
    fn newell(&self) -> Vec3 {
        let n = self.vertices.len();
        (0..n).fold(Vec3::ZERO, |acc, i| {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            acc + Vec3::new(
                (a.y - b.y) * (a.z + b.z),
                (a.z - b.z) * (a.x + b.x),
                (a.x - b.x) * (a.y + b.y),
            )
        })
    }
}

/// The highlighted fold line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoldSegment {
    pub start: Vec3,
    pub end: Vec3,
    pub direction: BendDirection,
    pub color: Rgb,
}

/// Everything the preview draws for one model state.
#[derive(Debug, Clone, PartialEq)]
pub struct FoldMesh {
    pub patches: Vec<Patch>,
    pub fold_line: Option<FoldSegment>,
}

impl FoldMesh {
    pub fn is_flat(&self) -> bool {
        self.fold_line.is_none()
    }

    fn flat(frame: &LocalFrame) -> Self {
        Self {
            patches: vec![Patch {
                role: PatchRole::Flat,
                vertices: frame.corners().iter().map(|c| c.extend(0.0)).collect(),
                color: FIXED_COLOR,
            }],
            fold_line: None,
        }
    }
}

/// Builds the preview mesh, or `None` when there is no sheet.
pub fn build_fold_mesh(model: &GeometryModel, settings: &PreviewSettings) -> Option<FoldMesh> {
    let sheet = model.sheet()?;
    let frame = LocalFrame::from_settings(sheet, settings);

    let Some(fold) = model.folds().first() else {
        return Some(FoldMesh::flat(&frame));
    };
    Some(bend(&frame, fold, settings.fold_line_lift as f32))
}

fn bend(frame: &LocalFrame, fold: &Fold, lift: f32) -> FoldMesh {
    let s = frame.project(fold.start);
    let e = frame.project(fold.end);
    let axis = e - s;
    if axis.length() < DEGENERATE_FOLD_LENGTH {
        return FoldMesh::flat(frame);
    }

    let corners = frame.corners();
    let side = |p: Vec2| axis.perp_dot(p - s);
    let fixed = clip(&corners, |p| -side(p));
    let moving = clip(&corners, side);

    let angle = match fold.direction {
        BendDirection::Up => std::f32::consts::FRAC_PI_2,
        BendDirection::Down => -std::f32::consts::FRAC_PI_2,
    };
    let rotation = Quat::from_axis_angle(axis.normalize().extend(0.0), angle);
    let pivot = ((s + e) * 0.5).extend(0.0);

    let line_color = match fold.direction {
        BendDirection::Up => UP_LINE_COLOR,
        BendDirection::Down => DOWN_LINE_COLOR,
    };

    FoldMesh {
        patches: vec![
            Patch {
                role: PatchRole::Fixed,
                vertices: fixed.iter().map(|p| p.extend(0.0)).collect(),
                color: FIXED_COLOR,
            },
            Patch {
                role: PatchRole::Folded,
                vertices: moving
                    .iter()
                    .map(|p| pivot + rotation * (p.extend(0.0) - pivot))
                    .collect(),
                color: FOLDED_COLOR,
            },
        ],
        fold_line: Some(FoldSegment {
            start: s.extend(lift),
            end: e.extend(lift),
            direction: fold.direction,
            color: line_color,
        }),
    }
}

/// Keeps the part of a convex polygon where `distance(p) >= 0`.
fn clip(polygon: &[Vec2], distance: impl Fn(Vec2) -> f32) -> Vec<Vec2> {
    let mut out = Vec::with_capacity(polygon.len() + 1);
    for (i, &current) in polygon.iter().enumerate() {
        let next = polygon[(i + 1) % polygon.len()];
        let dc = distance(current);
        let dn = distance(next);

        if dc >= 0.0 {
            out.push(current);
        }
        if (dc > 0.0 && dn < 0.0) || (dc < 0.0 && dn > 0.0) {
            let t = dc / (dc - dn);
            out.push(current + (next - current) * t);
        }
    }
    out
}
