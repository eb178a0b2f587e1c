//! # Sheetfold Designer
//!
//! The 2D side of the sheet-metal layout editor: the flat sheet with its fold
//! lines, the pan/zoom canvas, pointer interaction, and the SVG/PNG/DXF
//! exporters.
//!
//! ## Architecture
//!
//! ```text
//! DesignerState (one editing session)
//!   ├── GeometryModel (sheet + ordered folds)
//!   ├── ViewTransform (pan + zoom)
//!   ├── InteractionController (idle / panning / dragging endpoint)
//!   ├── render_scene -> Vec<Primitive>
//!   └── export (svg, png, dxf)
//! ```
//!
//! The host supplies the collaborators in [`host`]: an error banner, a
//! download sink, and any number of model listeners (the 3D preview is one).
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sheetfold_designer::{DesignerState, ExportFormat};
//! use sheetfold_core::BendDirection;
//!
//! let mut session = DesignerState::new(Config::default());
//! session.set_sheet(500.0, 300.0)?;
//! session.add_fold(250.0, BendDirection::Up)?;
//! let dxf = session.export(ExportFormat::Dxf)?;
//! ```

pub mod designer_state;
pub mod export;
pub mod host;
pub mod interaction;
pub mod model;
pub mod renderer;
pub mod viewport;

pub use designer_state::DesignerState;
pub use export::{ExportArtifact, ExportFormat};
pub use host::{
    Download, DownloadSink, ErrorBanner, MemoryBanner, MemorySink, ModelListener, NullBanner,
};
pub use interaction::{InteractionController, InteractionOutcome, InteractionState, PointerEvent};
pub use model::{Fold, FoldEnd, FoldId, GeometryModel, Point, Sheet};
pub use renderer::{hit_test_handle, render_scene, Primitive, RenderOptions};
pub use viewport::ViewTransform;
