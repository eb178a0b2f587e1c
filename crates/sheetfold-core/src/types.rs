//! Type aliases for shared single-threaded state.
//!
//! The editor runs on one event-loop thread, so host-side handles that several
//! components observe are `Rc<RefCell<T>>` rather than locks.
//!
//! ```rust,ignore
//! use sheetfold_core::types::{shared, Shared};
//!
//! let preview: Shared<FoldPreview<RasterBackend>> = shared(FoldPreview::new(backend, settings));
//! session.add_listener(Box::new(preview.clone()));
//! ```

use std::cell::RefCell;
use std::rc::Rc;

/// A reference-counted, interior-mutable wrapper for single-threaded sharing.
pub type Shared<T> = Rc<RefCell<T>>;

/// Wraps a value in a [`Shared`] handle.
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}
