// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Persistent store adapter - the boundary to the embedded engine
//!
//! Wraps a single rusqlite connection. Everything the engine can do is
//! opaque to the rest of the workbench: the adapter exposes exactly
//! `execute` (a batch of statements, structured result of the last one)
//! and catalog introspection. Statement failures are captured into the
//! returned `QueryResult` rather than propagated.

use crate::error::{Error, Result};
use crate::schema::TableSchema;
use crate::store::{QueryResult, Row, Value};
use parking_lot::Mutex;
use rusqlite::Connection;
use std::collections::HashMap;
use std::path::Path;
use std::time::Instant;

/// Where the engine keeps its data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreTarget {
    /// Transient in-memory database
    InMemory,
    /// Database file on disk
    OnDisk(std::path::PathBuf),
}

/// Seed rows installed by `initialize`; each is guarded by a per-row
/// existence check so re-running the seed never duplicates data.
const SEED_USERS: &[(&str, &str)] = &[
    ("Ada Lovelace", "ada@example.com"),
    ("Grace Hopper", "grace@example.com"),
];

const SEED_SCHEMA: &str = "CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE,
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
)";

/// Output of one statement inside a batch
struct StatementOutput {
    columns: Vec<String>,
    rows: Vec<Row>,
    rows_affected: usize,
}

/// Adapter owning the live engine connection
///
/// The connection is guarded by a mutex; the workbench layer itself is
/// single-threaded, so the lock only matters when a handle is shared.
pub struct StoreAdapter {
    conn: Mutex<Connection>,
}

impl StoreAdapter {
    /// Open (or create) a database file and establish baseline objects
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path.as_ref())
            .map_err(|e| Error::init(format!("failed to open database: {}", e)))?;
        Self::from_connection(conn)
    }

    /// Open a transient in-memory database and establish baseline objects
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| Error::init(format!("failed to open database: {}", e)))?;
        Self::from_connection(conn)
    }

    /// Open the given target
    pub fn open_target(target: &StoreTarget) -> Result<Self> {
        match target {
            StoreTarget::InMemory => Self::open_in_memory(),
            StoreTarget::OnDisk(path) => Self::open(path),
        }
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        Self::seed(&conn).map_err(|e| Error::init(format!("failed to seed database: {}", e)))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Install baseline schema objects. Idempotent: re-running must not
    /// duplicate seed rows.
    fn seed(conn: &Connection) -> rusqlite::Result<()> {
        conn.execute_batch(SEED_SCHEMA)?;
        for (name, email) in SEED_USERS {
            let exists: bool = conn.query_row(
                "SELECT EXISTS(SELECT 1 FROM users WHERE email = ?1)",
                [email],
                |row| row.get(0),
            )?;
            if !exists {
                conn.execute(
                    "INSERT INTO users (name, email) VALUES (?1, ?2)",
                    [name, email],
                )?;
            }
        }
        Ok(())
    }

    /// Execute one or more statements; the result describes the last one.
    ///
    /// Measures wall-clock duration across the whole batch. Never returns
    /// an error: failures come back as `QueryStatus::Error` with the
    /// engine's message.
    pub fn execute(&self, sql: &str) -> QueryResult {
        let started = Instant::now();
        let conn = self.conn.lock();
        let outcome = Self::run_batch(&conn, sql);
        let duration_ms = started.elapsed().as_millis() as u64;

        match outcome {
            Ok(Some(last)) => {
                QueryResult::success(last.columns, last.rows, last.rows_affected, duration_ms)
            }
            Ok(None) => QueryResult::success(Vec::new(), Vec::new(), 0, duration_ms),
            Err(e) => {
                log::debug!("statement batch failed: {}", e);
                QueryResult::failure(e.to_string(), duration_ms)
            }
        }
    }

    fn run_batch(conn: &Connection, sql: &str) -> rusqlite::Result<Option<StatementOutput>> {
        let mut batch = rusqlite::Batch::new(conn, sql);
        let mut last = None;

        while let Some(mut stmt) = batch.next()? {
            let columns: Vec<String> = stmt
                .column_names()
                .iter()
                .map(|c| c.to_string())
                .collect();

            if columns.is_empty() {
                // DDL / DML statement without a result set
                let rows_affected = stmt.execute([])?;
                last = Some(StatementOutput {
                    columns,
                    rows: Vec::new(),
                    rows_affected,
                });
            } else {
                let mut rows = stmt.query([])?;
                let mut out = Vec::new();
                while let Some(row) = rows.next()? {
                    let mut values = HashMap::new();
                    for (i, column) in columns.iter().enumerate() {
                        values.insert(column.clone(), Value::from_sql(row.get_ref(i)?));
                    }
                    out.push(Row::from_values(values));
                }
                last = Some(StatementOutput {
                    columns,
                    rows: out,
                    rows_affected: 0,
                });
            }
        }

        Ok(last)
    }

    /// Catalog snapshot, or an empty mapping on failure (logged)
    pub fn list_tables(&self) -> TableSchema {
        self.try_list_tables().unwrap_or_else(|e| {
            log::warn!("catalog introspection failed: {}", e);
            TableSchema::default()
        })
    }

    /// Catalog snapshot, surfacing introspection failures to the caller
    /// (the coordinator keeps its previous snapshot on failure)
    pub fn try_list_tables(&self) -> Result<TableSchema> {
        let conn = self.conn.lock();
        Self::read_catalog(&conn).map_err(|e| Error::Execution(e.to_string()))
    }

    fn read_catalog(conn: &Connection) -> rusqlite::Result<TableSchema> {
        let mut stmt = conn.prepare(
            "SELECT name FROM sqlite_master
             WHERE type IN ('table', 'view') AND name NOT LIKE 'sqlite_%'
             ORDER BY name",
        )?;
        let names: Vec<String> = stmt
            .query_map([], |row| row.get(0))?
            .collect::<rusqlite::Result<_>>()?;

        let mut schema = TableSchema::new();
        for name in names {
            let sql = format!("PRAGMA table_info({})", quote_identifier(&name));
            let mut info = conn.prepare(&sql)?;
            let columns: Vec<String> = info
                .query_map([], |row| row.get(1))?
                .collect::<rusqlite::Result<_>>()?;
            schema.insert(name, columns);
        }
        Ok(schema)
    }
}

/// Quote a catalog identifier for interpolation into PRAGMA text
fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_identifier_escapes_quotes() {
        assert_eq!(quote_identifier("users"), "\"users\"");
        assert_eq!(quote_identifier("we\"ird"), "\"we\"\"ird\"");
    }
}
