// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Query execution results
//!
//! A `QueryResult` is produced once per `execute` call and is immutable
//! afterwards. For a multi-statement batch it describes the *last*
//! statement. Engine failures are folded into a result with
//! `QueryStatus::Error` rather than propagated, so callers never need to
//! catch anything at this boundary.

use crate::store::Value;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Outcome of a query execution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryStatus {
    Success,
    Error,
}

/// Single result row: a schema-less mapping of column name to value
///
/// Column order is not carried per row; it lives in
/// [`QueryResult::columns`], in the order produced by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Row {
    pub values: HashMap<String, Value>,
}

impl Row {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Create a row from a mapping of column name to value
    pub fn from_values(values: HashMap<String, Value>) -> Self {
        Self { values }
    }

    /// Get a value by column name
    pub fn get_value(&self, column: &str) -> Option<&Value> {
        self.values.get(column)
    }

    /// Add a value to the row
    pub fn add_value(&mut self, column: String, value: Value) {
        self.values.insert(column, value);
    }
}

impl Default for Row {
    fn default() -> Self {
        Self::new()
    }
}

/// Query execution result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResult {
    pub rows: Vec<Row>,
    /// Column names in the order produced by the engine
    pub columns: Vec<String>,
    /// Wall-clock duration of the whole batch
    pub duration_ms: u64,
    /// Rows changed by the last statement (0 for reads)
    pub rows_affected: usize,
    /// Human-readable outcome, also used for the execution log
    pub message: String,
    pub status: QueryStatus,
}

impl QueryResult {
    /// Build a success result from the last statement of a batch
    pub fn success(
        columns: Vec<String>,
        rows: Vec<Row>,
        rows_affected: usize,
        duration_ms: u64,
    ) -> Self {
        let message = if columns.is_empty() {
            format!("OK, {} row(s) affected", rows_affected)
        } else {
            format!("OK, {} row(s) returned", rows.len())
        };
        Self {
            rows,
            columns,
            duration_ms,
            rows_affected,
            message,
            status: QueryStatus::Success,
        }
    }

    /// Build a failure result carrying the engine's message
    pub fn failure(message: String, duration_ms: u64) -> Self {
        let message = if message.trim().is_empty() {
            "Query failed".to_string()
        } else {
            message
        };
        Self {
            rows: Vec::new(),
            columns: Vec::new(),
            duration_ms,
            rows_affected: 0,
            message,
            status: QueryStatus::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.status == QueryStatus::Error
    }
}
