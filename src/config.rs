//! Platform-specific configuration and paths

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Registry subkey (under HKEY_CURRENT_USER) holding the cursor scheme
pub const CURSOR_SUBKEY: &str = r"Control Panel\Cursors";

/// Registry value names under the cursor key that are never snapshotted
///
/// These are either not cursor paths (`Scheme Source`, `CursorBaseSize`, ...)
/// or pen/touch cursors that are not system cursor slots.
pub const IGNORED_VALUE_NAMES: &[&str] = &[
    "NWPen",
    "Person",
    "Pin",
    "Scheme Source",
    "GestureVisualization",
    "CursorBaseSize",
    "ContactVisualization",
];

/// Whether a registry value name should be left out of snapshots and listings
pub fn is_ignored_value(name: &str) -> bool {
    name.is_empty() || name == "DWORD" || IGNORED_VALUE_NAMES.contains(&name)
}

/// Get the directory holding the default cursor snapshot
/// - Windows: %APPDATA%/WinCursorChanger/defaultCursors/
/// - elsewhere: the platform config dir, same layout
pub fn snapshot_dir() -> Result<PathBuf> {
    let appdata = dirs::config_dir().context("Could not determine AppData directory")?;
    Ok(appdata.join("WinCursorChanger").join("defaultCursors"))
}

/// Get the default cursor snapshot file (defaultCursors.json)
pub fn snapshot_path() -> Result<PathBuf> {
    Ok(snapshot_dir()?.join("defaultCursors.json"))
}

/// Get the system cursor directory (%SystemRoot%\Cursors)
pub fn system_cursor_dir() -> Result<PathBuf> {
    let root = std::env::var_os("SystemRoot")
        .or_else(|| std::env::var_os("windir"))
        .context("Could not determine %SystemRoot%")?;
    Ok(Path::new(&root).join("Cursors"))
}

/// Where the cursor changer reads and writes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Registry subkey under HKEY_CURRENT_USER
    pub cursor_subkey: String,
    /// JSON snapshot of the original scheme
    pub snapshot_path: PathBuf,
}

impl Settings {
    /// Settings with the default snapshot location
    pub fn load() -> Result<Self> {
        Ok(Self::with_snapshot_path(snapshot_path()?))
    }

    /// Settings with an explicit snapshot location
    pub fn with_snapshot_path(snapshot_path: impl Into<PathBuf>) -> Self {
        Self {
            cursor_subkey: CURSOR_SUBKEY.to_string(),
            snapshot_path: snapshot_path.into(),
        }
    }
}
