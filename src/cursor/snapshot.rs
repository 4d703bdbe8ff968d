//! Snapshot of the user's original cursor scheme

use std::path::Path;

use super::{CursorEntry, CursorEntryList, CursorRegistry};
use crate::config;
use crate::error::Result;

/// Read the current scheme from the registry, skipping ignored values
///
/// Values that are not strings are left out with a warning.
pub fn capture<R: CursorRegistry + ?Sized>(registry: &R) -> Result<CursorEntryList> {
    let mut entries = Vec::new();

    for name in registry.value_names()? {
        if config::is_ignored_value(&name) {
            continue;
        }
        match registry.get_value(&name)? {
            Some(path) => entries.push(CursorEntry::new(name, path)),
            None => log::warn!("Skipping non-string cursor value {:?}", name),
        }
    }

    Ok(CursorEntryList::new(entries))
}

/// Capture the scheme and write it to `path`, replacing any existing snapshot
pub fn take<R: CursorRegistry + ?Sized>(registry: &R, path: &Path) -> Result<CursorEntryList> {
    let list = capture(registry)?;
    list.write(path)?;
    log::info!(
        "Saved {} cursor entries to {}",
        list.len(),
        path.display()
    );
    Ok(list)
}

/// Take a snapshot unless one already exists
///
/// Returns whether a new snapshot was written. An existing file is never
/// touched, so the first run's scheme is what restore goes back to.
pub fn ensure<R: CursorRegistry + ?Sized>(registry: &R, path: &Path) -> Result<bool> {
    if path.exists() {
        log::debug!("Snapshot already present at {}", path.display());
        return Ok(false);
    }
    take(registry, path)?;
    Ok(true)
}
