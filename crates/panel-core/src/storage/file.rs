//! JSON document storage backend.
//!
//! The whole store is one JSON object (`{"KEY": "value", ...}`) on disk.
//! It is read once on open and rewritten atomically after every mutation,
//! which mirrors how browser storage behaves from the caller's side: each
//! write is immediately durable.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{PanelError, Result};
use crate::storage::traits::KeyValueStore;

/// File-backed key-value store.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`.
    ///
    /// A missing file opens as an empty store; nothing is written until the
    /// first `set` or `remove`.
    ///
    /// # Errors
    ///
    /// Returns `PanelError::Storage` if the file cannot be read, or
    /// `PanelError::Serialization` if it is not a JSON object of strings.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = match fs::read_to_string(&path) {
            Ok(contents) if contents.trim().is_empty() => BTreeMap::new(),
            Ok(contents) => serde_json::from_str(&contents).map_err(|e| {
                PanelError::Serialization(format!(
                    "Store file {} is not a JSON object: {}",
                    path.display(),
                    e
                ))
            })?,
            Err(err) if err.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => {
                return Err(PanelError::Storage(format!(
                    "Failed to read store {}: {}",
                    path.display(),
                    err
                )))
            }
        };
        tracing::debug!(path = %path.display(), keys = entries.len(), "opened file store");
        Ok(Self { path, entries })
    }

    fn flush(&self) -> Result<()> {
        let data = serde_json::to_vec_pretty(&self.entries)?;
        crate::fs::write_atomic(&self.path, &data).map_err(|e| {
            PanelError::Storage(format!("Failed to write store {}: {}", self.path.display(), e))
        })
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let previous = self.entries.insert(key.to_string(), value.to_string());
        if let Err(err) = self.flush() {
            // Keep memory consistent with what is on disk.
            match previous {
                Some(old) => self.entries.insert(key.to_string(), old),
                None => self.entries.remove(key),
            };
            return Err(err);
        }
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        match self.entries.remove(key) {
            Some(old) => {
                if let Err(err) = self.flush() {
                    self.entries.insert(key.to_string(), old);
                    return Err(err);
                }
                Ok(())
            }
            None => Ok(()),
        }
    }
}
