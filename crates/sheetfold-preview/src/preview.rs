use sheetfold_core::PreviewError;
use sheetfold_designer::host::ModelListener;
use sheetfold_designer::model::GeometryModel;
use sheetfold_settings::PreviewSettings;
use tracing::{debug, warn};

use crate::animation::AnimationLoop;
use crate::camera::{Camera, Lighting};
use crate::mesh::{build_fold_mesh, FoldMesh};
use crate::surface::PreviewBackend;

/// The 3D fold preview.
///
/// Rebuilt from scratch on every model change. At most one [`AnimationLoop`]
/// is alive: the previous one is cancelled before a new surface is acquired.
/// When no surface can be acquired the preview stays absent and 2D editing
/// carries on.
pub struct FoldPreview<B: PreviewBackend> {
    backend: B,
    settings: PreviewSettings,
    camera: Camera,
    lighting: Lighting,
    active: Option<AnimationLoop>,
    rebuilds: u64,
}

impl<B: PreviewBackend> FoldPreview<B> {
    pub fn new(backend: B, settings: PreviewSettings) -> Self {
        let camera = Camera::from_settings(&settings);
        Self {
            backend,
            settings,
            camera,
            lighting: Lighting::default(),
            active: None,
            rebuilds: 0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.as_ref().is_some_and(AnimationLoop::is_active)
    }

    /// The mesh being animated, if the preview is up.
    pub fn mesh(&self) -> Option<&FoldMesh> {
        self.active.as_ref().map(AnimationLoop::mesh)
    }

    pub fn animation(&self) -> Option<&AnimationLoop> {
        self.active.as_ref()
    }

    /// Number of times the preview was rebuilt.
    pub fn rebuilds(&self) -> u64 {
        self.rebuilds
    }

    /// Tears down the current loop and starts a new one for `model`.
    pub fn rebuild(&mut self, model: &GeometryModel) {
        self.shutdown();
        self.rebuilds += 1;

        if !self.settings.enabled {
            return;
        }
        let Some(mesh) = build_fold_mesh(model, &self.settings) else {
            debug!("No sheet, preview left empty");
            return;
        };

        let surface = match self
            .backend
            .acquire(self.settings.width, self.settings.height)
        {
            Ok(surface) => surface,
            Err(e) => {
                warn!("3D preview unavailable: {}", e);
                return;
            }
        };

        debug!(
            "Preview rebuilt: {} patches, fold line: {}",
            mesh.patches.len(),
            mesh.fold_line.is_some()
        );
        let mut animation = AnimationLoop::start(
            surface,
            mesh,
            self.camera,
            self.lighting,
            self.settings.spin_rate as f32,
        );
        // First frame right away; a failing surface takes the preview down.
        if let Err(e) = animation.tick() {
            warn!("3D preview render failed: {}", e);
            return;
        }
        self.active = Some(animation);
    }

    /// Renders the next turntable frame. Does nothing while absent.
    pub fn tick(&mut self) {
        let Some(animation) = self.active.as_mut() else {
            return;
        };
        if let Err(e) = animation.tick() {
            warn!("3D preview render failed, stopping: {}", e);
            self.shutdown();
        }
    }

    /// PNG of the last rendered frame.
    pub fn capture_png(&self) -> Result<Vec<u8>, PreviewError> {
        match &self.active {
            Some(animation) => animation.capture_png(),
            None => Err(PreviewError::Capture("preview is not running".to_string())),
        }
    }

    /// Cancels the loop and releases its surface.
    pub fn shutdown(&mut self) {
        self.active = None;
    }
}

impl<B: PreviewBackend> ModelListener for FoldPreview<B> {
    fn on_model_changed(&mut self, model: &GeometryModel) {
        self.rebuild(model);
    }
}
