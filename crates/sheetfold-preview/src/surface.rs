//! Rendering surface seam.
//!
//! A [`PreviewBackend`] hands out surfaces; a [`RenderSurface`] draws frames
//! until it is released. The render loop owns exactly one surface at a time.

use glam::Mat4;
use sheetfold_core::PreviewError;

use crate::camera::{Camera, Lighting};
use crate::mesh::FoldMesh;

/// One frame of the turntable animation.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub mesh: &'a FoldMesh,
    /// Turntable angle about the vertical axis, radians
    pub spin: f32,
    pub camera: &'a Camera,
    pub lighting: &'a Lighting,
}

impl Frame<'_> {
    /// Model matrix applying the turntable rotation.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_y(self.spin)
    }
}

/// A surface that frames are drawn onto.
pub trait RenderSurface {
    /// Surface size in pixels.
    fn size(&self) -> (u32, u32);

    /// Draws one frame, replacing the previous one.
    fn render(&mut self, frame: &Frame<'_>) -> Result<(), PreviewError>;

    /// Releases GPU or pixel resources. Called exactly once, when the owning
    /// loop is cancelled.
    fn release(&mut self);

    /// Encodes the last rendered frame as PNG.
    fn capture_png(&self) -> Result<Vec<u8>, PreviewError> {
        Err(PreviewError::Capture(
            "surface does not support capture".to_string(),
        ))
    }
}

/// Source of rendering surfaces.
pub trait PreviewBackend {
    /// Acquires a new surface. Failure means the preview is unavailable.
    fn acquire(&mut self, width: u32, height: u32) -> Result<Box<dyn RenderSurface>, PreviewError>;
}
