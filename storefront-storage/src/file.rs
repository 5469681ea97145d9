//! File-backed session storage.
//!
//! The whole session is one JSON object of string values. Every operation
//! reads the file, and every write replaces it, matching the full-replace
//! persistence model of the cart.

use crate::SessionStorage;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use storefront_core::{StorageError, StorefrontResult};

type SessionMap = BTreeMap<String, String>;

#[derive(Debug)]
pub struct FileSessionStorage {
    path: PathBuf,
    guard: Mutex<()>,
}

impl FileSessionStorage {
    /// Open (lazily) a session file. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            guard: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> StorefrontResult<SessionMap> {
        if !self.path.exists() {
            return Ok(SessionMap::new());
        }
        let contents = std::fs::read_to_string(&self.path).map_err(|e| StorageError::ReadFailed {
            key: self.path.display().to_string(),
            reason: e.to_string(),
        })?;
        if contents.trim().is_empty() {
            return Ok(SessionMap::new());
        }
        let map = serde_json::from_str::<SessionMap>(&contents).map_err(|e| {
            StorageError::Corrupt {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            }
        })?;
        Ok(map)
    }

    /// Current contents for a write; a corrupt session is discarded.
    fn read_map_for_write(&self) -> StorefrontResult<SessionMap> {
        match self.read_map() {
            Ok(map) => Ok(map),
            Err(storefront_core::StorefrontError::Storage(StorageError::Corrupt {
                path,
                reason,
            })) => {
                tracing::warn!(%path, %reason, "Discarding corrupt session file");
                Ok(SessionMap::new())
            }
            Err(err) => Err(err),
        }
    }

    /// `<file name>.tmp` next to the session file.
    fn staging_path(&self) -> PathBuf {
        match self.path.file_name() {
            Some(name) => {
                let mut staged = name.to_os_string();
                staged.push(".tmp");
                self.path.with_file_name(staged)
            }
            None => self.path.with_extension("tmp"),
        }
    }

    fn write_map(&self, key: &str, map: &SessionMap) -> StorefrontResult<()> {
        let write_failed = |reason: String| StorageError::WriteFailed {
            key: key.to_string(),
            reason,
        };
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| write_failed(e.to_string()))?;
            }
        }
        let contents = serde_json::to_string_pretty(map).map_err(|e| write_failed(e.to_string()))?;
        let staging = self.staging_path();
        std::fs::write(&staging, contents).map_err(|e| write_failed(e.to_string()))?;
        std::fs::rename(&staging, &self.path).map_err(|e| write_failed(e.to_string()))?;
        Ok(())
    }
}

impl SessionStorage for FileSessionStorage {
    fn get_item(&self, key: &str) -> StorefrontResult<Option<String>> {
        let _guard = self.guard.lock().map_err(|_| StorageError::LockPoisoned)?;
        Ok(self.read_map()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> StorefrontResult<()> {
        let _guard = self.guard.lock().map_err(|_| StorageError::LockPoisoned)?;
        let mut map = self.read_map_for_write()?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(key, &map)
    }

    fn remove_item(&self, key: &str) -> StorefrontResult<()> {
        let _guard = self.guard.lock().map_err(|_| StorageError::LockPoisoned)?;
        let mut map = self.read_map_for_write()?;
        if map.remove(key).is_some() {
            self.write_map(key, &map)?;
        }
        Ok(())
    }

    fn clear(&self) -> StorefrontResult<()> {
        let _guard = self.guard.lock().map_err(|_| StorageError::LockPoisoned)?;
        if self.path.exists() {
            std::fs::remove_file(&self.path).map_err(|e| StorageError::WriteFailed {
                key: self.path.display().to_string(),
                reason: e.to_string(),
            })?;
        }
        Ok(())
    }

    fn keys(&self) -> StorefrontResult<Vec<String>> {
        let _guard = self.guard.lock().map_err(|_| StorageError::LockPoisoned)?;
        Ok(self.read_map()?.into_keys().collect())
    }
}
