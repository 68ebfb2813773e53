// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Key/value persistence for saved artifacts
//!
//! The artifact lists live under fixed keys in a durable client-side
//! key/value store. There is no schema versioning; a reader must
//! tolerate absent keys as empty lists.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Durable key/value storage under fixed keys
pub trait KvStore {
    /// Read the value under a key; `None` when the key is absent
    fn get(&self, key: &str) -> Option<String>;

    /// Write the value under a key
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// File-backed store: each key is a JSON file inside one directory
pub struct FileKvStore {
    dir: PathBuf,
}

impl FileKvStore {
    /// Create a store rooted at `dir`, creating the directory if needed
    pub fn new(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir)
            .map_err(|e| Error::storage(format!("failed to create {:?}: {}", dir, e)))?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KvStore for FileKvStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        std::fs::write(self.path_for(key), value)
            .map_err(|e| Error::storage(format!("failed to write key '{}': {}", key, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_absent_key_reads_as_none() {
        let dir = tempdir().unwrap();
        let store = FileKvStore::new(dir.path()).unwrap();
        assert!(store.get("savedQueries").is_none());
    }

    #[test]
    fn test_roundtrip() {
        let dir = tempdir().unwrap();
        let store = FileKvStore::new(dir.path()).unwrap();
        store.set("queryHistory", "[]").unwrap();
        assert_eq!(store.get("queryHistory").as_deref(), Some("[]"));
    }
}
