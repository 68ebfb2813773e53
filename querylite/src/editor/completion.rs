// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Autocomplete suggestions derived from the catalog snapshot
//!
//! Context rule: text immediately before the cursor matching
//! `<identifier>.` narrows the suggestions to that table's columns;
//! everywhere else the candidates are a fixed SQL keyword list plus all
//! known table names, filtered by the word being typed. Suggestions are
//! recomputed from whatever snapshot the caller holds, so they follow
//! every schema refresh.

use crate::schema::TableSchema;
use once_cell::sync::Lazy;
use regex::Regex;

/// Fixed keyword list offered outside the `table.` context
pub const SQL_KEYWORDS: &[&str] = &[
    "SELECT", "INSERT", "UPDATE", "DELETE", "FROM", "WHERE", "JOIN", "LEFT", "INNER", "OUTER",
    "ON", "AND", "OR", "NOT", "IN", "LIKE", "BETWEEN", "IS", "NULL", "AS", "ORDER", "BY",
    "GROUP", "HAVING", "LIMIT", "OFFSET", "DISTINCT", "VALUES", "SET", "CREATE", "DROP",
    "ALTER", "TABLE", "INDEX", "VIEW", "PRIMARY", "KEY", "FOREIGN", "REFERENCES", "UNIQUE",
    "DEFAULT", "COUNT", "SUM", "AVG", "MIN", "MAX", "COALESCE", "CAST", "INTEGER", "TEXT",
    "REAL", "BLOB",
];

/// `<identifier>.` right before the cursor, with an optional partial
/// column already typed after the dot
static TABLE_DOT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Za-z_][A-Za-z0-9_]*)\.([A-Za-z_][A-Za-z0-9_]*)?$").unwrap());

/// A completion request resolved against the snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completions {
    /// Byte offset in the line where the replacement starts
    pub start: usize,
    pub candidates: Vec<String>,
}

/// Compute suggestions for the cursor position `pos` in `line`
pub fn completions_at(line: &str, pos: usize, schema: &TableSchema) -> Completions {
    let before = &line[..pos];

    if let Some(caps) = TABLE_DOT.captures(before) {
        let table = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
        let partial = caps.get(2).map(|m| m.as_str()).unwrap_or_default();
        let start = pos - partial.len();

        let candidates = schema
            .columns(table)
            .map(|columns| {
                columns
                    .iter()
                    .filter(|c| starts_with_ci(c, partial))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        return Completions { start, candidates };
    }

    let start = word_start(before);
    let word = &before[start..];

    let mut candidates: Vec<String> = SQL_KEYWORDS
        .iter()
        .filter(|k| starts_with_ci(k, word))
        .map(|k| k.to_string())
        .collect();
    candidates.extend(
        schema
            .table_names()
            .filter(|t| starts_with_ci(t, word))
            .map(|t| t.to_string()),
    );
    candidates.sort();
    candidates.dedup();

    Completions { start, candidates }
}

fn starts_with_ci(candidate: &str, prefix: &str) -> bool {
    prefix.is_empty()
        || candidate
            .to_ascii_uppercase()
            .starts_with(&prefix.to_ascii_uppercase())
}

fn word_start(before: &str) -> usize {
    before
        .rfind(|c: char| c.is_whitespace() || c == '(' || c == ',' || c == '.' || c == ';')
        .map(|i| i + 1)
        .unwrap_or(0)
}
