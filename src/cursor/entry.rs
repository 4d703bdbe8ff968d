//! Snapshot records
//!
//! The snapshot file keeps the layout of earlier releases:
//!
//! ```json
//! {"defaultCursorEntries":[{"ID":32512,"Name":"Arrow","Path":"%SystemRoot%\\cursors\\aero_arrow.cur"}]}
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::SystemCursor;
use crate::error::{CursorError, Result};

/// One registry value of the cursor scheme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorEntry {
    /// `OCR_*` identifier, 0 when the name is not a system cursor slot
    #[serde(rename = "ID", default)]
    pub id: u32,
    /// Registry value name
    #[serde(rename = "Name")]
    pub name: String,
    /// Cursor file path as stored in the registry (may be empty or unexpanded)
    #[serde(rename = "Path")]
    pub path: String,
}

impl CursorEntry {
    /// Build an entry, deriving the identifier from the value name
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        let name = name.into();
        let id = SystemCursor::from_name(&name).map_or(0, SystemCursor::id);
        Self {
            id,
            name,
            path: path.into(),
        }
    }
}

/// Ordered list of snapshot records
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorEntryList {
    #[serde(rename = "defaultCursorEntries", default)]
    pub entries: Vec<CursorEntry>,
}

impl CursorEntryList {
    pub fn new(entries: Vec<CursorEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CursorEntry> {
        self.entries.iter()
    }

    /// Find the entry for a registry value name
    pub fn get(&self, name: &str) -> Option<&CursorEntry> {
        self.entries
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(name))
    }

    /// Read a snapshot file
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| CursorError::Snapshot {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| CursorError::SnapshotFormat {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write a snapshot file, creating its directory if needed
    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let io_err = |source| CursorError::Snapshot {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|source| CursorError::SnapshotFormat {
                path: path.to_path_buf(),
                source,
            })?;
        fs::write(path, content + "\n").map_err(io_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_id_from_name() {
        assert_eq!(CursorEntry::new("Arrow", "a.cur").id, 32512);
        assert_eq!(CursorEntry::new("Hand", "").id, 32649);
        assert_eq!(CursorEntry::new("Unknown", "x.cur").id, 0);
        assert_eq!(CursorEntry::new("IBeam", "").id, SystemCursor::IBeam.id());
    }

    #[test]
    fn test_serialization_layout() {
        let list = CursorEntryList::new(vec![CursorEntry::new(
            "Arrow",
            r"%SystemRoot%\cursors\aero_arrow.cur",
        )]);

        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(
            json,
            r#"{"defaultCursorEntries":[{"ID":32512,"Name":"Arrow","Path":"%SystemRoot%\\cursors\\aero_arrow.cur"}]}"#
        );
    }

    #[test]
    fn test_read_legacy_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("defaultCursors.json");
        fs::write(
            &path,
            r#"{"defaultCursorEntries":[{"ID":32649,"Name":"Hand","Path":"C:\\Windows\\cursors\\aero_link.cur"},{"Name":"Custom","Path":""}]}"#,
        )
        .unwrap();

        let list = CursorEntryList::read(&path).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(
            list.get("hand").unwrap().path,
            r"C:\Windows\cursors\aero_link.cur"
        );
        assert_eq!(list.get("Custom").unwrap().id, 0);
    }

    #[test]
    fn test_write_creates_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("defaultCursors.json");
        let list = CursorEntryList::new(vec![CursorEntry::new("Wait", "busy.ani")]);

        list.write(&path).unwrap();

        assert_eq!(CursorEntryList::read(&path).unwrap(), list);
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = CursorEntryList::read(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, CursorError::Snapshot { .. }));
    }

    #[test]
    fn test_read_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "not json").unwrap();

        let err = CursorEntryList::read(&path).unwrap_err();
        assert!(matches!(err, CursorError::SnapshotFormat { .. }));
    }
}
