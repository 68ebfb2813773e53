// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Cell values mirroring SQLite storage classes
//!
//! Rows coming back from the engine are schema-less mappings of column
//! name to `Value`. No fixed column set is assumed across queries.

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// A single cell value as reported by the engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl Value {
    /// Convert a raw engine value into a `Value`
    pub fn from_sql(value: rusqlite::types::ValueRef<'_>) -> Self {
        use rusqlite::types::ValueRef;
        match value {
            ValueRef::Null => Value::Null,
            ValueRef::Integer(i) => Value::Integer(i),
            ValueRef::Real(r) => Value::Real(r),
            ValueRef::Text(t) => Value::Text(String::from_utf8_lossy(t).into_owned()),
            ValueRef::Blob(b) => Value::Blob(b.to_vec()),
        }
    }

    /// Render the value for display.
    ///
    /// NULL renders as the literal `NULL` so it stays distinguishable
    /// from empty-string data. Blobs get the SQLite hex literal form.
    pub fn display_string(&self) -> String {
        match self {
            Value::Null => "NULL".to_string(),
            Value::Integer(i) => i.to_string(),
            Value::Real(r) => r.to_string(),
            Value::Text(s) => s.clone(),
            Value::Blob(b) => Self::blob_literal(b),
        }
    }

    /// Convert to a JSON value (used by CSV export and JSON output)
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Integer(i) => serde_json::json!(i),
            Value::Real(r) => serde_json::json!(r),
            Value::Text(s) => serde_json::Value::String(s.clone()),
            Value::Blob(b) => serde_json::Value::String(Self::blob_literal(b)),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    fn blob_literal(bytes: &[u8]) -> String {
        let mut out = String::with_capacity(bytes.len() * 2 + 3);
        out.push_str("x'");
        for b in bytes {
            let _ = write!(out, "{:02X}", b);
        }
        out.push('\'');
        out
    }
}
