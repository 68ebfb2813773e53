// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Cached catalog snapshot
//!
//! Maps table name to its ordered column list. The snapshot is rebuilt
//! wholesale after every executed statement (DDL may have changed it);
//! there is no incremental diffing. A failed refresh keeps the previous
//! snapshot in place.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Table-to-columns snapshot of the engine catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableSchema {
    tables: BTreeMap<String, Vec<String>>,
}

impl TableSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, table: String, columns: Vec<String>) {
        self.tables.insert(table, columns);
    }

    /// Table names, in catalog order
    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(|s| s.as_str())
    }

    /// Ordered column list for a table
    pub fn columns(&self, table: &str) -> Option<&[String]> {
        self.tables.get(table).map(|c| c.as_slice())
    }

    pub fn contains_table(&self, table: &str) -> bool {
        self.tables.contains_key(table)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.tables.iter().map(|(t, c)| (t.as_str(), c.as_slice()))
    }
}
