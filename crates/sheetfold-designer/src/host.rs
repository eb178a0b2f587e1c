//! Host collaborator interfaces
//!
//! The editing session calls out through these traits; the host decides how a
//! banner is shown, where downloads go, and who watches the model.

use std::cell::RefCell;
use std::rc::Rc;

use sheetfold_core::ExportError;

use crate::model::GeometryModel;

/// User-visible error banner.
pub trait ErrorBanner {
    /// Shows `message`, replacing whatever was visible.
    fn show(&mut self, message: &str);

    /// Hides the banner.
    fn hide(&mut self);
}

/// Banner that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullBanner;

impl ErrorBanner for NullBanner {
    fn show(&mut self, _message: &str) {}

    fn hide(&mut self) {}
}

/// Banner that keeps the visible message in memory.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryBanner {
    visible: Option<String>,
    shown: usize,
}

impl MemoryBanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// The message currently on screen.
    pub fn visible(&self) -> Option<&str> {
        self.visible.as_deref()
    }

    /// How many times `show` was called.
    pub fn shown_count(&self) -> usize {
        self.shown
    }
}

impl ErrorBanner for MemoryBanner {
    fn show(&mut self, message: &str) {
        self.visible = Some(message.to_string());
        self.shown += 1;
    }

    fn hide(&mut self) {
        self.visible = None;
    }
}

impl<T: ErrorBanner> ErrorBanner for Rc<RefCell<T>> {
    fn show(&mut self, message: &str) {
        self.borrow_mut().show(message);
    }

    fn hide(&mut self) {
        self.borrow_mut().hide();
    }
}

/// File-download trigger.
pub trait DownloadSink {
    /// Delivers one finished file.
    fn deliver(&mut self, bytes: &[u8], mime_type: &str, file_name: &str)
        -> Result<(), ExportError>;
}

/// A delivered download held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub bytes: Vec<u8>,
    pub mime_type: String,
    pub file_name: String,
}

/// Sink that collects downloads in memory.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    pub downloads: Vec<Download>,
}

impl DownloadSink for MemorySink {
    fn deliver(
        &mut self,
        bytes: &[u8],
        mime_type: &str,
        file_name: &str,
    ) -> Result<(), ExportError> {
        self.downloads.push(Download {
            bytes: bytes.to_vec(),
            mime_type: mime_type.to_string(),
            file_name: file_name.to_string(),
        });
        Ok(())
    }
}

/// Observer of geometry changes
///
/// Called synchronously after the sheet or the fold list changes. Pan and
/// zoom do not notify.
pub trait ModelListener {
    /// Called with the model after every geometry change
    fn on_model_changed(&mut self, _model: &GeometryModel) {}
}

impl<T: ModelListener> ModelListener for Rc<RefCell<T>> {
    fn on_model_changed(&mut self, model: &GeometryModel) {
        self.borrow_mut().on_model_changed(model);
    }
}
