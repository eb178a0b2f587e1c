//! Designer state manager for host integration.
//! Owns the editing session: model, view transform, pointer controller, and
//! the last rendered scene.
//!
//! This module is split into submodules:
//! - `sheet`: sheet creation and clearing
//! - `folds`: fold creation, removal, and endpoint edits
//! - `pointer`: pointer and wheel input
//! - `file_io`: exports and downloads

mod file_io;
mod folds;
mod pointer;
mod sheet;

use sheetfold_core::ValidationError;
use sheetfold_settings::Config;
use tracing::warn;

use crate::host::{ErrorBanner, ModelListener, NullBanner};
use crate::interaction::{InteractionController, InteractionState};
use crate::model::GeometryModel;
use crate::renderer::{render_scene, Primitive, RenderOptions};
use crate::viewport::ViewTransform;

/// One editing session.
///
/// Every mutating call re-renders the scene before returning. Geometry
/// changes also notify the registered [`ModelListener`]s.
pub struct DesignerState {
    config: Config,
    model: GeometryModel,
    view: ViewTransform,
    controller: InteractionController,
    render_options: RenderOptions,
    scene: Vec<Primitive>,
    banner: Box<dyn ErrorBanner>,
    visible_error: Option<ValidationError>,
    listeners: Vec<Box<dyn ModelListener>>,
}

impl DesignerState {
    /// Creates an empty session with no banner attached.
    pub fn new(config: Config) -> Self {
        Self::with_banner(config, Box::new(NullBanner))
    }

    /// Creates an empty session reporting validation errors to `banner`.
    pub fn with_banner(config: Config, banner: Box<dyn ErrorBanner>) -> Self {
        let view = ViewTransform::new(&config.view);
        let render_options = RenderOptions::from_settings(&config.canvas);
        Self {
            config,
            model: GeometryModel::new(),
            view,
            controller: InteractionController::new(),
            render_options,
            scene: Vec::new(),
            banner,
            visible_error: None,
            listeners: Vec::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn model(&self) -> &GeometryModel {
        &self.model
    }

    pub fn view(&self) -> &ViewTransform {
        &self.view
    }

    /// The scene as of the last mutation.
    pub fn scene(&self) -> &[Primitive] {
        &self.scene
    }

    pub fn interaction_state(&self) -> InteractionState {
        self.controller.state()
    }

    /// The validation error currently shown, if any.
    pub fn visible_error(&self) -> Option<&ValidationError> {
        self.visible_error.as_ref()
    }

    /// Registers a geometry observer and hands it the current model.
    pub fn add_listener(&mut self, mut listener: Box<dyn ModelListener>) {
        listener.on_model_changed(&self.model);
        self.listeners.push(listener);
    }

    fn redraw(&mut self) {
        self.scene = render_scene(&self.model, &self.view, &self.render_options);
    }

    fn notify_listeners(&mut self) {
        for listener in &mut self.listeners {
            listener.on_model_changed(&self.model);
        }
    }

    /// Re-renders and notifies after a geometry change.
    fn geometry_changed(&mut self) {
        self.redraw();
        self.notify_listeners();
    }

    /// Clears the visible error after a successful operation.
    fn succeed(&mut self) {
        if self.visible_error.take().is_some() {
            self.banner.hide();
        }
    }

    /// Shows `error`, replacing any visible one, and hands it back.
    fn fail(&mut self, error: ValidationError) -> ValidationError {
        warn!("{}", error);
        self.banner.show(&error.to_string());
        self.visible_error = Some(error.clone());
        error
    }
}
