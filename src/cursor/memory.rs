//! In-memory registry and cursor backends
//!
//! Test doubles for exercising a [`CursorChanger`](super::CursorChanger)
//! without touching the real scheme.

use std::path::{Path, PathBuf};

use super::{CursorRegistry, SystemCursor, SystemCursors};
use crate::error::{CursorError, Result};

/// A cursor key held in memory, preserving insertion order
#[derive(Debug, Clone, Default)]
pub struct MemoryRegistry {
    values: Vec<(String, Option<String>)>,
    /// Value names whose writes fail
    pub read_only: Vec<String>,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from (name, string value) pairs
    pub fn with_values<'a>(values: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut registry = Self::new();
        for (name, value) in values {
            registry.insert(name, value);
        }
        registry
    }

    /// Insert or replace a string value
    pub fn insert(&mut self, name: &str, value: &str) {
        self.put(name, Some(value.to_string()));
    }

    /// Insert a value that is not a string (e.g. a DWORD)
    pub fn insert_non_string(&mut self, name: &str) {
        self.put(name, None);
    }

    /// A value as currently stored
    pub fn value(&self, name: &str) -> Option<&str> {
        self.position(name)
            .and_then(|i| self.values[i].1.as_deref())
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.values
            .iter()
            .position(|(n, _)| n.eq_ignore_ascii_case(name))
    }

    fn check_writable(&self, op: &'static str, name: &str) -> Result<()> {
        if self.read_only.iter().any(|n| n.eq_ignore_ascii_case(name)) {
            return Err(CursorError::Registry {
                op,
                name: name.to_string(),
                source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            });
        }
        Ok(())
    }

    fn put(&mut self, name: &str, value: Option<String>) {
        match self.position(name) {
            Some(i) => self.values[i].1 = value,
            None => self.values.push((name.to_string(), value)),
        }
    }
}

impl CursorRegistry for MemoryRegistry {
    fn value_names(&self) -> Result<Vec<String>> {
        Ok(self.values.iter().map(|(n, _)| n.clone()).collect())
    }

    fn get_value(&self, name: &str) -> Result<Option<String>> {
        Ok(self.value(name).map(str::to_string))
    }

    fn set_value(&mut self, name: &str, value: &str) -> Result<()> {
        self.check_writable("write", name)?;
        self.insert(name, value);
        Ok(())
    }

    fn delete_value(&mut self, name: &str) -> Result<()> {
        self.check_writable("delete", name)?;
        if let Some(i) = self.position(name) {
            self.values.remove(i);
        }
        Ok(())
    }
}

/// Records cursor installs instead of performing them
///
/// Like `LoadCursorFromFileW`, `apply` fails when the file does not exist.
#[derive(Debug, Clone, Default)]
pub struct RecordingCursors {
    pub applied: Vec<(SystemCursor, PathBuf)>,
    pub reloads: usize,
}

impl RecordingCursors {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SystemCursors for RecordingCursors {
    fn apply(&mut self, slot: SystemCursor, path: &Path) -> Result<()> {
        if !path.is_file() {
            return Err(CursorError::LoadCursor {
                path: path.to_path_buf(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            });
        }
        self.applied.push((slot, path.to_path_buf()));
        Ok(())
    }

    fn reload_scheme(&mut self) -> Result<()> {
        self.reloads += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_registry_preserves_order() {
        let mut registry = MemoryRegistry::with_values([("Arrow", "a"), ("Hand", "h")]);
        registry.insert_non_string("Scheme Source");
        registry.set_value("arrow", "b").unwrap();

        assert_eq!(
            registry.value_names().unwrap(),
            vec!["Arrow", "Hand", "Scheme Source"]
        );
        assert_eq!(registry.get_value("Arrow").unwrap().as_deref(), Some("b"));
        assert_eq!(registry.get_value("Scheme Source").unwrap(), None);
        assert_eq!(registry.get_value("Missing").unwrap(), None);
    }

    #[test]
    fn test_memory_registry_read_only() {
        let mut registry = MemoryRegistry::with_values([("Arrow", "a")]);
        registry.read_only.push("Arrow".to_string());

        assert!(registry.set_value("Arrow", "b").is_err());
        assert!(registry.delete_value("Arrow").is_err());
        assert_eq!(registry.value("Arrow"), Some("a"));
    }

    #[test]
    fn test_memory_registry_delete() {
        let mut registry = MemoryRegistry::with_values([("Arrow", "a"), ("Hand", "h")]);

        registry.delete_value("arrow").unwrap();
        registry.delete_value("Missing").unwrap();

        assert_eq!(registry.value_names().unwrap(), vec!["Hand"]);
        assert_eq!(registry.value("Arrow"), None);
    }

    #[test]
    fn test_recording_cursors_requires_file() {
        let mut cursors = RecordingCursors::new();
        let err = cursors
            .apply(SystemCursor::Arrow, Path::new("/nonexistent/cursor.cur"))
            .unwrap_err();
        assert!(matches!(err, CursorError::LoadCursor { .. }));
        assert!(cursors.applied.is_empty());
    }
}
