// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Workbench coordinator - orchestration for the run-query lifecycle
//!
//! This is the main entry point for executing queries in the workbench.
//! It handles:
//! - Preconditions (handle initialized, non-blank text) before dispatch
//! - Busy gating: at most one execution in flight, new requests rejected
//! - The bounded execution log
//! - The cached result set and derived column list
//! - The catalog snapshot refresh after every run
//! - History recording for editor-initiated submissions
//!
//! Each run walks `Idle -> Running -> {Succeeded, Failed} -> Idle`. The
//! busy flag is advisory serialization around a single blocking engine
//! call, not a mutex; concurrent run requests are refused, never queued.

use crate::artifacts::ArtifactStore;
use crate::coordinator::{QueryLog, QueryLogEntry};
use crate::error::{Error, Result};
use crate::schema::TableSchema;
use crate::store::{QueryResult, StoreAdapter};
use std::sync::Arc;

/// Who asked for the run
///
/// Only editor-initiated ("named") submissions are recorded in history;
/// ad-hoc runs (one-off CLI executions, internal probes) are not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunSource {
    Editor,
    Adhoc,
}

/// Workbench coordinator - sequences run requests and owns derived state
pub struct WorkbenchCoordinator {
    /// Engine handle; `None` until the provider has initialized
    adapter: Option<Arc<StoreAdapter>>,
    /// Advisory single-slot execution gate
    busy: bool,
    log: QueryLog,
    /// Cached result of the last row-producing execution
    result: Option<QueryResult>,
    /// Column list derived from the key set of the first cached row,
    /// in the order produced by the engine
    columns: Vec<String>,
    /// Catalog snapshot, refreshed after every run
    schema: TableSchema,
    artifacts: ArtifactStore,
}

impl WorkbenchCoordinator {
    /// Create a coordinator with no engine handle yet
    ///
    /// `run_query` rejects with "database not ready" until `attach` is
    /// called with an initialized adapter.
    pub fn new(artifacts: ArtifactStore) -> Self {
        Self {
            adapter: None,
            busy: false,
            log: QueryLog::new(),
            result: None,
            columns: Vec::new(),
            schema: TableSchema::new(),
            artifacts,
        }
    }

    /// Create a coordinator bound to an initialized adapter
    pub fn with_adapter(adapter: Arc<StoreAdapter>, artifacts: ArtifactStore) -> Self {
        let mut coordinator = Self::new(artifacts);
        coordinator.attach(adapter);
        coordinator
    }

    /// Attach an initialized engine handle and take a first catalog snapshot
    pub fn attach(&mut self, adapter: Arc<StoreAdapter>) {
        self.adapter = Some(adapter);
        self.refresh_schema();
    }

    pub fn is_ready(&self) -> bool {
        self.adapter.is_some()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Execute a query through the engine.
    ///
    /// Rejections (busy, no handle, blank text) come back as
    /// `Error::Validation` and never reach the engine or the log. Engine
    /// failures are *not* errors here: they return a `QueryResult` with
    /// `QueryStatus::Error`, exactly one log entry, and still trigger a
    /// schema refresh (DDL may have executed inside a failed batch).
    pub fn run_query(&mut self, text: &str, source: RunSource) -> Result<QueryResult> {
        if self.busy {
            return Err(Error::validation("a query is already running"));
        }
        let adapter = self
            .adapter
            .clone()
            .ok_or_else(|| Error::validation("database not ready"))?;
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(Error::validation("empty query"));
        }

        // History records any validated editor submission, independent of
        // the engine outcome.
        if source == RunSource::Editor {
            if let Err(e) = self.artifacts.push_history(trimmed) {
                log::warn!("failed to record history: {}", e);
            }
        }

        self.busy = true;
        let result = adapter.execute(trimmed);
        self.busy = false;

        self.log.append(QueryLogEntry::from_result(&result));
        self.apply_result(&result);
        self.refresh_schema();

        Ok(result)
    }

    /// Replace or clear the cached result set and derived column list
    fn apply_result(&mut self, result: &QueryResult) {
        if result.rows.is_empty() {
            self.result = None;
            self.columns.clear();
        } else {
            self.columns = result.columns.clone();
            self.result = Some(result.clone());
        }
    }

    /// Rebuild the catalog snapshot from the engine.
    ///
    /// Failures are swallowed (logged) and keep the previous snapshot.
    pub fn refresh_schema(&mut self) {
        let Some(adapter) = self.adapter.as_ref() else {
            return;
        };
        match adapter.try_list_tables() {
            Ok(snapshot) => self.schema = snapshot,
            Err(e) => log::warn!("schema refresh failed, keeping previous snapshot: {}", e),
        }
    }

    /// Cached result of the last row-producing execution
    pub fn result(&self) -> Option<&QueryResult> {
        self.result.as_ref()
    }

    /// Derived column list of the cached result
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Current catalog snapshot
    pub fn schema(&self) -> &TableSchema {
        &self.schema
    }

    /// Execution log entries, newest first
    pub fn log_entries(&self) -> impl Iterator<Item = &QueryLogEntry> {
        self.log.entries()
    }

    pub fn log_len(&self) -> usize {
        self.log.len()
    }

    pub fn artifacts(&self) -> &ArtifactStore {
        &self.artifacts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::{ArtifactStore, FileKvStore};
    use crate::store::QueryStatus;
    use tempfile::tempdir;

    fn coordinator(dir: &std::path::Path) -> WorkbenchCoordinator {
        let artifacts = ArtifactStore::new(Box::new(FileKvStore::new(dir).unwrap()));
        let adapter = Arc::new(StoreAdapter::open_in_memory().unwrap());
        WorkbenchCoordinator::with_adapter(adapter, artifacts)
    }

    #[test]
    fn test_blank_query_rejected_without_log_entry() {
        let dir = tempdir().unwrap();
        let mut c = coordinator(dir.path());

        for text in ["", "   ", "\n\t  "] {
            let err = c.run_query(text, RunSource::Editor).unwrap_err();
            assert!(matches!(err, Error::Validation(_)));
        }
        assert_eq!(c.log_len(), 0);
        assert!(c.artifacts().history().is_empty());
    }

    #[test]
    fn test_not_ready_rejected() {
        let dir = tempdir().unwrap();
        let artifacts = ArtifactStore::new(Box::new(FileKvStore::new(dir.path()).unwrap()));
        let mut c = WorkbenchCoordinator::new(artifacts);

        let err = c.run_query("SELECT 1", RunSource::Editor).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(c.log_len(), 0);
    }

    #[test]
    fn test_busy_rejected() {
        let dir = tempdir().unwrap();
        let mut c = coordinator(dir.path());

        c.busy = true;
        let err = c.run_query("SELECT 1", RunSource::Editor).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(c.log_len(), 0);

        c.busy = false;
        assert!(c.run_query("SELECT 1", RunSource::Editor).is_ok());
    }

    #[test]
    fn test_columns_follow_first_row_key_set() {
        let dir = tempdir().unwrap();
        let mut c = coordinator(dir.path());

        let result = c
            .run_query("SELECT * FROM users", RunSource::Editor)
            .unwrap();
        assert_eq!(result.status, QueryStatus::Success);
        assert_eq!(result.rows.len(), 2);
        assert_eq!(c.columns(), &["id", "name", "email", "created_at"]);
        assert!(c.result().is_some());
    }

    #[test]
    fn test_empty_result_clears_cache() {
        let dir = tempdir().unwrap();
        let mut c = coordinator(dir.path());

        c.run_query("SELECT * FROM users", RunSource::Editor)
            .unwrap();
        assert!(c.result().is_some());

        c.run_query("SELECT * FROM users WHERE id < 0", RunSource::Editor)
            .unwrap();
        assert!(c.result().is_none());
        assert!(c.columns().is_empty());
    }

    #[test]
    fn test_one_log_entry_per_run_and_capacity() {
        let dir = tempdir().unwrap();
        let mut c = coordinator(dir.path());

        c.run_query("SELECT 1", RunSource::Adhoc).unwrap();
        assert_eq!(c.log_len(), 1);

        // Failures log too
        c.run_query("SELECT * FROM missing_table", RunSource::Adhoc)
            .unwrap();
        assert_eq!(c.log_len(), 2);

        for _ in 0..60 {
            c.run_query("SELECT 1", RunSource::Adhoc).unwrap();
        }
        assert_eq!(c.log_len(), crate::coordinator::LOG_CAPACITY);
    }

    #[test]
    fn test_failed_batch_still_refreshes_schema() {
        let dir = tempdir().unwrap();
        let mut c = coordinator(dir.path());
        assert!(c.schema().contains_table("users"));

        // DROP succeeds, the second statement fails; the snapshot must
        // still observe the drop.
        let result = c
            .run_query("DROP TABLE users; SELECT * FROM nowhere", RunSource::Editor)
            .unwrap();
        assert_eq!(result.status, QueryStatus::Error);
        assert!(!c.schema().contains_table("users"));
    }

    #[test]
    fn test_history_only_for_editor_runs() {
        let dir = tempdir().unwrap();
        let mut c = coordinator(dir.path());

        c.run_query("SELECT 1", RunSource::Adhoc).unwrap();
        assert!(c.artifacts().history().is_empty());

        c.run_query("SELECT 1", RunSource::Editor).unwrap();
        // Failed runs are recorded too
        c.run_query("SELECT * FROM missing", RunSource::Editor)
            .unwrap();

        let history = c.artifacts().history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].query, "SELECT * FROM missing");
    }
}
