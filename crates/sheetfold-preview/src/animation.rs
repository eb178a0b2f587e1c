//! Turntable render loop.
//!
//! An [`AnimationLoop`] is the handle for one running loop: it owns the
//! acquired surface and the mesh it animates. Cancelling or dropping the
//! handle releases the surface exactly once; a cancelled loop renders nothing.

use sheetfold_core::PreviewError;
use tracing::debug;

use crate::camera::{Camera, Lighting};
use crate::mesh::FoldMesh;
use crate::surface::{Frame, RenderSurface};

pub struct AnimationLoop {
    surface: Option<Box<dyn RenderSurface>>,
    mesh: FoldMesh,
    camera: Camera,
    lighting: Lighting,
    spin: f32,
    spin_rate: f32,
    frames: u64,
}

impl AnimationLoop {
    /// Starts a loop on an already acquired surface.
    pub fn start(
        surface: Box<dyn RenderSurface>,
        mesh: FoldMesh,
        camera: Camera,
        lighting: Lighting,
        spin_rate: f32,
    ) -> Self {
        Self {
            surface: Some(surface),
            mesh,
            camera,
            lighting,
            spin: 0.0,
            spin_rate,
            frames: 0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.surface.is_some()
    }

    pub fn mesh(&self) -> &FoldMesh {
        &self.mesh
    }

    /// Current turntable angle in radians.
    pub fn spin(&self) -> f32 {
        self.spin
    }

    /// Frames rendered so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Advances the turntable one step and renders.
    ///
    /// A cancelled loop does nothing.
    pub fn tick(&mut self) -> Result<(), PreviewError> {
        let Some(surface) = self.surface.as_mut() else {
            return Ok(());
        };
        self.spin += self.spin_rate;
        let frame = Frame {
            mesh: &self.mesh,
            spin: self.spin,
            camera: &self.camera,
            lighting: &self.lighting,
        };
        surface.render(&frame)?;
        self.frames += 1;
        Ok(())
    }

    pub fn capture_png(&self) -> Result<Vec<u8>, PreviewError> {
        match &self.surface {
            Some(surface) => surface.capture_png(),
            None => Err(PreviewError::Capture("render loop cancelled".to_string())),
        }
    }

    /// Stops the loop and releases its surface. Idempotent.
    pub fn cancel(&mut self) {
        if let Some(mut surface) = self.surface.take() {
            surface.release();
            debug!("Preview loop cancelled after {} frames", self.frames);
        }
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}
