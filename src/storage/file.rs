//! Directory-backed slot storage.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::SlotStorage;
use crate::error::{Result, StayshelfError};

/// Slots stored as one JSON file each under a root directory.
///
/// The directory is created on the first write, so opening a store against
/// a fresh location never touches the filesystem.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Create a storage rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Get the root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the file that holds a slot.
    ///
    /// Every character outside `[A-Za-z0-9_-]` maps to `_`, so
    /// `stayshelf:favorites` lives in `stayshelf_favorites.json`.
    pub fn slot_path(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() {
            return Err(StayshelfError::InvalidSlotKey {
                key: key.to_string(),
            });
        }

        let file_stem: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                    c
                } else {
                    '_'
                }
            })
            .collect();

        Ok(self.root.join(format!("{}.json", file_stem)))
    }
}

impl SlotStorage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let path = self.slot_path(key)?;
        fs::create_dir_all(&self.root)?;

        // Write to a sibling temp file and rename so a crash never leaves a
        // half-written slot behind.
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, value)?;
        fs::rename(&temp_path, &path)?;

        tracing::debug!("Wrote slot '{}' to {:?}", key, path);
        Ok(())
    }

    fn erase(&self, key: &str) -> Result<()> {
        let path = self.slot_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
