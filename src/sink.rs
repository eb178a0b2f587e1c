//! Download sink that writes files into a directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use sheetfold_core::ExportError;
use sheetfold_designer::DownloadSink;
use tracing::info;

/// Writes every delivered download into `dir`, creating it on first use.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            written: Vec::new(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Paths written so far, in delivery order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// Writes raw bytes under `file_name`.
    pub fn write_file(&mut self, file_name: &str, bytes: &[u8]) -> io::Result<PathBuf> {
        let name = Path::new(file_name)
            .file_name()
            .filter(|name| *name == file_name)
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("not a plain file name: {}", file_name),
                )
            })?;

        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(name);
        fs::write(&path, bytes)?;
        self.written.push(path.clone());
        Ok(path)
    }
}

impl DownloadSink for DirectorySink {
    fn deliver(
        &mut self,
        bytes: &[u8],
        mime_type: &str,
        file_name: &str,
    ) -> Result<(), ExportError> {
        let path = self.write_file(file_name, bytes)?;
        info!("Wrote {} ({}, {} bytes)", path.display(), mime_type, bytes.len());
        Ok(())
    }
}
