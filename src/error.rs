//! Error types for cursor operations

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::cursor::SystemCursor;

/// Errors raised while reading or changing the cursor scheme
#[derive(Error, Debug)]
pub enum CursorError {
    /// A replace operation was requested without a cursor file
    #[error("No cursor file specified")]
    NoCursorFile,

    /// Opening the cursor key failed
    #[error("Failed to open registry key {key}: {source}")]
    OpenKey {
        key: String,
        #[source]
        source: io::Error,
    },

    /// Reading or writing a single registry value failed
    #[error("Failed to {op} registry value {name:?}: {source}")]
    Registry {
        op: &'static str,
        name: String,
        #[source]
        source: io::Error,
    },

    /// LoadCursorFromFile returned no cursor
    #[error("Failed to load cursor from {}: {source}", path.display())]
    LoadCursor {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// SetSystemCursor rejected the cursor
    #[error("Failed to set system cursor {slot}: {source}")]
    SetSystemCursor {
        slot: SystemCursor,
        #[source]
        source: io::Error,
    },

    /// SPI_SETCURSORS failed
    #[error("Failed to reload cursor scheme: {0}")]
    ReloadScheme(#[source] io::Error),

    /// Reading or writing the snapshot file failed
    #[error("Snapshot file {}: {source}", path.display())]
    Snapshot {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The snapshot file is not valid JSON
    #[error("Failed to parse snapshot {}: {source}", path.display())]
    SnapshotFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Registry and cursor APIs are Windows-only
    #[error("Cursor operations are only supported on Windows")]
    Unsupported,
}

pub type Result<T> = std::result::Result<T, CursorError>;
