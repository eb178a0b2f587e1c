//! Sheetfold Settings Crate
//!
//! Handles editor configuration: canvas geometry, zoom limits, 3D preview
//! parameters, and export naming. Supports JSON and TOML files stored in the
//! platform-specific config directory.

pub mod config;
pub mod error;

pub use config::{CanvasSettings, Config, ExportSettings, PreviewSettings, ViewSettings};
pub use error::{ConfigError, SettingsError, SettingsResult};
