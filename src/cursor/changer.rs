//! Replace and restore system cursors
//!
//! A [`CursorChanger`] writes a cursor file path into the registry slot of
//! each selected system cursor and installs it live, after making sure the
//! user's original scheme has been snapshotted. Every public operation reports
//! plain success or failure; the reason is logged.

use std::io;
use std::path::{Path, PathBuf};

use super::{snapshot, CursorEntryList, CursorRegistry, SystemCursor, SystemCursors};
use super::{CurrentUserRegistry, Win32Cursors};
use crate::config::Settings;
use crate::error::{CursorError, Result};

pub struct CursorChanger<R, S> {
    new_cursor_path: Option<PathBuf>,
    registry: R,
    system: S,
    settings: Settings,
    has_snapshot: bool,
}

impl CursorChanger<CurrentUserRegistry, Win32Cursors> {
    /// Open the current user's cursor scheme
    pub fn open(new_cursor_path: Option<PathBuf>, settings: Settings) -> Result<Self> {
        let registry = CurrentUserRegistry::open(&settings.cursor_subkey)?;
        Ok(Self::new(new_cursor_path, registry, Win32Cursors::new(), settings))
    }
}

impl<R: CursorRegistry, S: SystemCursors> CursorChanger<R, S> {
    /// Create a changer, snapshotting the current scheme on first run
    ///
    /// A failed snapshot is logged, not fatal: replacing still works, restore
    /// will report failure until a snapshot exists.
    pub fn new(new_cursor_path: Option<PathBuf>, registry: R, system: S, settings: Settings) -> Self {
        let has_snapshot = match snapshot::ensure(&registry, &settings.snapshot_path) {
            Ok(_) => true,
            Err(e) => {
                log::error!("Could not save default cursors: {}", e);
                false
            }
        };

        Self {
            new_cursor_path,
            registry,
            system,
            settings,
            has_snapshot,
        }
    }

    /// The snapshot file, if one exists
    pub fn snapshot_path(&self) -> Option<&Path> {
        self.has_snapshot
            .then_some(self.settings.snapshot_path.as_path())
    }

    /// Replace text select, normal select and link select
    pub fn replace_common_cursors(&mut self) -> bool {
        self.replace_cursors(&SystemCursor::COMMON)
    }

    /// Replace the link select (hand) cursor
    pub fn replace_link_select_cursor(&mut self) -> bool {
        self.replace_cursors(&SystemCursor::LINK)
    }

    /// Replace every system cursor
    pub fn replace_all_cursors(&mut self) -> bool {
        self.replace_cursors(&SystemCursor::ALL)
    }

    /// Replace the given slots with the cursor file
    ///
    /// A missing cursor file fails before anything is written. Otherwise every
    /// slot is attempted; the result is true only if all succeeded.
    pub fn replace_cursors(&mut self, slots: &[SystemCursor]) -> bool {
        let Some(path) = self.new_cursor_path.clone() else {
            log::error!("{}", CursorError::NoCursorFile);
            return false;
        };
        if !path.is_file() {
            let e = CursorError::LoadCursor {
                path,
                source: io::Error::from(io::ErrorKind::NotFound),
            };
            log::error!("There was an issue setting the cursor: {}", e);
            return false;
        }

        let mut ok = true;
        for &slot in slots {
            if let Err(e) = self.set_cursor(slot, &path) {
                log::error!("There was an issue setting the cursor: {}", e);
                ok = false;
            }
        }
        ok
    }

    /// Put the snapshotted scheme back and reload it
    ///
    /// Slots the snapshot does not mention are removed from the key, so a
    /// slot that only a replacement created falls back to the built-in cursor.
    pub fn restore_default_cursors(&mut self) -> bool {
        match self.try_restore() {
            Ok(count) => {
                log::info!("Restored {} cursor entries", count);
                true
            }
            Err(e) => {
                log::error!("Could not restore default cursors: {}", e);
                false
            }
        }
    }

    /// Overwrite the snapshot with the scheme as it is now
    pub fn take_snapshot(&mut self) -> bool {
        match snapshot::take(&self.registry, &self.settings.snapshot_path) {
            Ok(_) => {
                self.has_snapshot = true;
                true
            }
            Err(e) => {
                log::error!("Could not save default cursors: {}", e);
                false
            }
        }
    }

    fn set_cursor(&mut self, slot: SystemCursor, path: &Path) -> Result<()> {
        self.registry
            .set_value(slot.name(), &path.to_string_lossy())?;
        self.system.apply(slot, path)
    }

    fn try_restore(&mut self) -> Result<usize> {
        let list = CursorEntryList::read(&self.settings.snapshot_path)?;

        for entry in list.iter() {
            self.registry.set_value(&entry.name, &entry.path)?;
        }
        for slot in SystemCursor::ALL {
            if list.get(slot.name()).is_none() {
                self.registry.delete_value(slot.name())?;
            }
        }
        self.system.reload_scheme()?;

        Ok(list.len())
    }
}
