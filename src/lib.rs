//! # Sheetfold
//!
//! Sheet-metal layout editor: a flat sheet with fold lines, a pan/zoom 2D
//! canvas, a live 3D preview of the first fold, and SVG/PNG/DXF export.
//!
//! ## Architecture
//!
//! Sheetfold is organized as a workspace with multiple crates:
//!
//! 1. **sheetfold-core** - Error taxonomy, constants, input field parsing
//! 2. **sheetfold-settings** - Editor configuration (TOML/JSON)
//! 3. **sheetfold-designer** - Geometry model, view transform, scene, interaction, exporters
//! 4. **sheetfold-preview** - 3D fold preview and its render loop
//! 5. **sheetfold** - Headless host: CLI, logging, file downloads

pub mod cli;
pub mod sink;

pub use sheetfold_core::{BendDirection, Error, ExportError, PreviewError, Result, ValidationError};
pub use sheetfold_designer::{
    DesignerState, ExportArtifact, ExportFormat, FoldEnd, FoldId, GeometryModel, Point,
    PointerEvent,
};
pub use sheetfold_preview::{FoldPreview, RasterBackend};
pub use sheetfold_settings::Config;
pub use sink::DirectorySink;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output on stderr, so command output on stdout stays clean
/// - RUST_LOG environment variable support, INFO by default
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
