//! Shared utilities for commands

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

use cursor_changer::config::{self, Settings};
use cursor_changer::cursor::{CurrentUserRegistry, CursorChanger, Win32Cursors};

pub type PlatformChanger = CursorChanger<CurrentUserRegistry, Win32Cursors>;

/// Strip Windows extended-length path prefix (\\?\)
///
/// On Windows, `canonicalize()` returns paths like `\\?\C:\path` which
/// LoadCursorFromFile accepts but which read poorly in the registry. This
/// strips the prefix.
pub fn strip_windows_prefix(path: &Path) -> PathBuf {
    let path_str = path.to_string_lossy();
    if let Some(stripped) = path_str.strip_prefix(r"\\?\") {
        PathBuf::from(stripped)
    } else {
        path.to_path_buf()
    }
}

/// Resolve a cursor file argument to an absolute path
///
/// Paths that exist are used as given. A bare file name that does not exist
/// in the working directory is looked up in `%SystemRoot%\Cursors`.
pub fn resolve_cursor_file(arg: &str) -> Result<PathBuf> {
    let cursor_dir = config::system_cursor_dir().ok();
    resolve_in(arg, cursor_dir.as_deref())
}

fn resolve_in(arg: &str, cursor_dir: Option<&Path>) -> Result<PathBuf> {
    let path = PathBuf::from(arg);

    let found = if path.is_file() {
        path
    } else if let Some(candidate) = cursor_dir
        .filter(|_| path.components().count() == 1)
        .map(|dir| dir.join(&path))
        .filter(|candidate| candidate.is_file())
    {
        candidate
    } else {
        bail!("Cursor file does not exist: {}", path.display());
    };

    let absolute = found
        .canonicalize()
        .with_context(|| format!("Failed to resolve path: {}", found.display()))?;
    Ok(strip_windows_prefix(&absolute))
}

/// Open the current user's cursor scheme, snapshotting it on first use
pub fn open_changer(cursor_file: Option<PathBuf>, settings: Settings) -> Result<PlatformChanger> {
    CursorChanger::open(cursor_file, settings).context("Failed to open the cursor scheme")
}
