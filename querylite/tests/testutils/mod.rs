//! Test fixture for QueryLite integration tests
//!
//! Provides isolated workbench instances using ONLY the public API.
//! Tests must not access internal components.

use querylite::artifacts::ArtifactStore;
use querylite::{QueryResult, RunSource, StoreAdapter, WorkbenchCoordinator};
use std::sync::Arc;

/// Workbench fixture with an isolated engine and artifact directory
pub struct WorkbenchFixture {
    pub coordinator: WorkbenchCoordinator,
    _temp_dir: tempfile::TempDir,
}

impl WorkbenchFixture {
    /// Fixture over a transient in-memory engine
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let temp_dir = tempfile::tempdir()?;
        let artifacts = ArtifactStore::open(temp_dir.path().join("artifacts"))?;
        let adapter = Arc::new(StoreAdapter::open_in_memory()?);
        let coordinator = WorkbenchCoordinator::with_adapter(adapter, artifacts);
        Ok(Self {
            coordinator,
            _temp_dir: temp_dir,
        })
    }

    /// Fixture over a database file inside the fixture's temp dir
    pub fn on_disk() -> Result<Self, Box<dyn std::error::Error>> {
        let temp_dir = tempfile::tempdir()?;
        let artifacts = ArtifactStore::open(temp_dir.path().join("artifacts"))?;
        let adapter = Arc::new(StoreAdapter::open(temp_dir.path().join("workbench.db"))?);
        let coordinator = WorkbenchCoordinator::with_adapter(adapter, artifacts);
        Ok(Self {
            coordinator,
            _temp_dir: temp_dir,
        })
    }

    /// Run an editor-initiated query, panicking on validation rejection
    pub fn run(&mut self, sql: &str) -> QueryResult {
        self.coordinator
            .run_query(sql, RunSource::Editor)
            .expect("query should pass validation")
    }
}
