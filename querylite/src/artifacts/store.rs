// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Saved queries and run history
//!
//! Both lists are append-only-with-eviction: saved queries are bounded
//! at 50 entries, history at 100 (newest first). Eviction is FIFO on the
//! oldest end. Saved queries have no update-in-place; editing is "load
//! into editor" plus a manual re-save.

use crate::artifacts::{FileKvStore, KvStore};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

/// Fixed storage key for the saved-query list
pub const SAVED_QUERIES_KEY: &str = "savedQueries";
/// Fixed storage key for the run-history list
pub const HISTORY_KEY: &str = "queryHistory";

/// Bound on the saved-query list
pub const MAX_SAVED_QUERIES: usize = 50;
/// Bound on the history list
pub const MAX_HISTORY_ITEMS: usize = 100;

/// A named, persisted query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedQuery {
    pub id: String,
    pub name: String,
    pub query: String,
}

/// One past run, newest first in the list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItem {
    pub id: String,
    pub query: String,
    pub timestamp_ms: i64,
}

/// Store for saved queries and run history
pub struct ArtifactStore {
    kv: Box<dyn KvStore>,
}

impl ArtifactStore {
    pub fn new(kv: Box<dyn KvStore>) -> Self {
        Self { kv }
    }

    /// Convenience constructor over a file-backed store
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(Box::new(FileKvStore::new(dir)?)))
    }

    /// The saved-query list; absent or malformed storage reads as empty
    pub fn saved_queries(&self) -> Vec<SavedQuery> {
        self.read_list(SAVED_QUERIES_KEY)
    }

    /// The run history, newest first; absent storage reads as empty
    pub fn history(&self) -> Vec<HistoryItem> {
        self.read_list(HISTORY_KEY)
    }

    /// Save a query under a name.
    ///
    /// A blank name is rejected before anything is written. Entries
    /// beyond the bound are evicted from the oldest end.
    pub fn save_query(&self, name: &str, query: &str) -> Result<SavedQuery> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::validation("a saved query needs a name"));
        }

        let entry = SavedQuery {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            query: query.to_string(),
        };

        let mut list = self.saved_queries();
        list.push(entry.clone());
        while list.len() > MAX_SAVED_QUERIES {
            list.remove(0);
        }
        self.write_list(SAVED_QUERIES_KEY, &list)?;
        Ok(entry)
    }

    /// Delete a saved query by id. Deleting an unknown id is a no-op.
    pub fn delete_query(&self, id: &str) -> Result<()> {
        let mut list = self.saved_queries();
        let before = list.len();
        list.retain(|q| q.id != id);
        if list.len() != before {
            self.write_list(SAVED_QUERIES_KEY, &list)?;
        }
        Ok(())
    }

    /// Record a run in history, newest first, truncated at the bound
    pub fn push_history(&self, query: &str) -> Result<HistoryItem> {
        let entry = HistoryItem {
            id: Uuid::new_v4().to_string(),
            query: query.to_string(),
            timestamp_ms: chrono::Utc::now().timestamp_millis(),
        };

        let mut list = self.history();
        list.insert(0, entry.clone());
        list.truncate(MAX_HISTORY_ITEMS);
        self.write_list(HISTORY_KEY, &list)?;
        Ok(entry)
    }

    fn read_list<T: serde::de::DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let Some(raw) = self.kv.get(key) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(list) => list,
            Err(e) => {
                log::warn!("malformed artifact list under '{}': {}", key, e);
                Vec::new()
            }
        }
    }

    fn write_list<T: Serialize>(&self, key: &str, list: &[T]) -> Result<()> {
        let raw = serde_json::to_string(list)?;
        self.kv.set(key, &raw)
    }
}
