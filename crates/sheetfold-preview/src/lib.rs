//! # Sheetfold Preview
//!
//! Live 3D preview of the first fold of a sheet layout.
//!
//! ## Components
//! - **mesh**: maps the sheet into a fixed local frame and splits it into a
//!   fixed and a rotated patch along the first fold
//! - **camera**: perspective camera and ambient + directional lighting
//! - **surface**: backend/surface traits the render loop draws through
//! - **animation**: the turntable loop handle; dropping it releases the surface
//! - **preview**: [`FoldPreview`], a model listener that rebuilds the loop on
//!   every geometry change
//! - **raster**: headless tiny-skia surface
//!
//! ```rust,ignore
//! let preview = shared(FoldPreview::new(RasterBackend, config.preview.clone()));
//! session.add_listener(Box::new(preview.clone()));
//! preview.borrow_mut().tick();
//! ```

pub mod animation;
pub mod camera;
pub mod mesh;
pub mod preview;
pub mod raster;
pub mod surface;

pub use animation::AnimationLoop;
pub use camera::{Camera, Lighting};
pub use mesh::{build_fold_mesh, FoldMesh, FoldSegment, LocalFrame, Patch, PatchRole, Rgb};
pub use preview::FoldPreview;
pub use raster::{RasterBackend, RasterSurface};
pub use surface::{Frame, PreviewBackend, RenderSurface};
