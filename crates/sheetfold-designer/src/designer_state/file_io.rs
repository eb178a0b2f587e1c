//! Export and download operations for designer state.

use sheetfold_core::ExportError;
use tracing::{info, warn};

use super::DesignerState;
use crate::export::{self, ExportArtifact, ExportFormat};
use crate::host::DownloadSink;

impl DesignerState {
    /// Serialises the current design.
    ///
    /// Without a valid sheet nothing is produced and the banner shows the
    /// export validation message.
    pub fn export(&mut self, format: ExportFormat) -> Result<ExportArtifact, ExportError> {
        let result = export::export(
            format,
            &self.model,
            &self.view,
            &self.config.canvas,
            &self.config.export.base_name,
        );

        match result {
            Ok(artifact) => {
                self.succeed();
                info!(
                    "Exported {} ({} bytes)",
                    artifact.file_name,
                    artifact.bytes.len()
                );
                Ok(artifact)
            }
            Err(ExportError::Validation(e)) => Err(ExportError::Validation(self.fail(e))),
            Err(e) => {
                warn!("{} export failed: {}", format, e);
                Err(e)
            }
        }
    }

    /// Exports and hands the file to `sink`.
    pub fn export_to(
        &mut self,
        format: ExportFormat,
        sink: &mut dyn DownloadSink,
    ) -> Result<ExportArtifact, ExportError> {
        let artifact = self.export(format)?;
        sink.deliver(&artifact.bytes, artifact.mime_type, &artifact.file_name)?;
        Ok(artifact)
    }
}
