//! Core cursor scheme operations

pub mod changer;
pub mod entry;
#[cfg(test)]
pub mod memory;
pub mod registry;
pub mod slot;
pub mod snapshot;
pub mod system;

pub use changer::CursorChanger;
pub use entry::{CursorEntry, CursorEntryList};
pub use registry::{CurrentUserRegistry, CursorRegistry};
pub use slot::SystemCursor;
pub use system::{SystemCursors, Win32Cursors};
