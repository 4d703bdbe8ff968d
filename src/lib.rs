//! cursor-changer library
//!
//! Replaces Windows system cursors through the per-user registry scheme and
//! applies them live, keeping a JSON snapshot of the original scheme so it
//! can be restored.

pub mod config;
pub mod cursor;
pub mod error;

pub use cursor::CursorChanger;
pub use error::CursorError;
