// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! QueryLite - A lightweight embedded SQL workbench
//!
//! QueryLite is the orchestration layer of a SQL workbench backed by an
//! embedded engine (SQLite via rusqlite) that it does not implement.
//!
//! # Features
//!
//! - **Initialize-once handle**: one engine connection per process,
//!   idempotent seeding, concurrent initialization collapses into one
//! - **Run-query lifecycle**: validation, busy gating, structured
//!   results, a bounded execution log, catalog snapshot refresh
//! - **Result presentation**: client-side pagination and substring
//!   search over the cached result set
//! - **Saved artifacts**: bounded saved-query and run-history lists
//!   persisted in a client-side key/value store
//! - **Editor surface**: buffer sync, execute-trigger gating, and
//!   schema-driven autocomplete
//! - **CSV export** of the cached result set
//!
//! # Usage
//!
//! QueryLite is primarily used through the workbench CLI:
//!
//! ```bash
//! # Create and seed a database
//! querylite init --path ./my.db
//!
//! # Start the interactive workbench
//! querylite sql --path ./my.db
//!
//! # One-off execution
//! querylite query --path ./my.db "SELECT * FROM users"
//! ```

// Public modules
pub mod artifacts;
pub mod coordinator;
pub mod editor;
pub mod error;
pub mod export;
pub mod schema;
pub mod store;
pub mod view;

// Re-export the public API - WorkbenchCoordinator is the main entry point
pub use coordinator::{QueryLog, QueryLogEntry, RunSource, WorkbenchCoordinator, LOG_CAPACITY};
pub use error::{Error, Result};
pub use schema::TableSchema;
pub use store::{provider, QueryResult, QueryStatus, Row, StoreAdapter, StoreTarget, Value};

/// QueryLite version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// QueryLite crate name
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
