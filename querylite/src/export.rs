// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! CSV export of the cached result set
//!
//! The header row is the plain comma-joined column list; every cell is
//! JSON-stringified before joining, so text gets quotes, numbers stay
//! bare, and NULL becomes `null`.

use crate::store::{QueryResult, Value};
use chrono::{DateTime, Utc};

/// Serialize a result set to CSV text
pub fn export_csv(result: &QueryResult) -> String {
    let mut out = String::new();
    out.push_str(&result.columns.join(","));
    out.push('\n');

    for row in &result.rows {
        let cells: Vec<String> = result
            .columns
            .iter()
            .map(|column| {
                let value = row.get_value(column).cloned().unwrap_or(Value::Null);
                serde_json::to_string(&value.to_json()).unwrap_or_else(|_| "null".to_string())
            })
            .collect();
        out.push_str(&cells.join(","));
        out.push('\n');
    }

    out
}

/// Download filename: `query-results-<ISO8601 seconds>.csv`
/// (no milliseconds, no zone suffix)
pub fn export_filename(now: DateTime<Utc>) -> String {
    format!("query-results-{}.csv", now.format("%Y-%m-%dT%H:%M:%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Row;
    use chrono::TimeZone;
    use std::collections::HashMap;

    #[test]
    fn test_cells_are_json_stringified() {
        let columns = vec!["col1".to_string(), "col2".to_string()];
        let mut rows = Vec::new();
        for (name, n) in [("alice", 1i64), ("bob", 2)] {
            let mut values = HashMap::new();
            values.insert("col1".to_string(), Value::Text(name.to_string()));
            values.insert("col2".to_string(), Value::Integer(n));
            rows.push(Row::from_values(values));
        }
        let result = QueryResult::success(columns, rows, 0, 0);

        let csv = export_csv(&result);
        assert_eq!(csv, "col1,col2\n\"alice\",1\n\"bob\",2\n");
    }

    #[test]
    fn test_null_cell_exports_as_json_null() {
        let columns = vec!["v".to_string()];
        let mut values = HashMap::new();
        values.insert("v".to_string(), Value::Null);
        let result = QueryResult::success(columns, vec![Row::from_values(values)], 0, 0);

        assert_eq!(export_csv(&result), "v\nnull\n");
    }

    #[test]
    fn test_filename_has_no_millis_or_zone() {
        let now = Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap();
        assert_eq!(
            export_filename(now),
            "query-results-2025-03-14T09:26:53.csv"
        );
    }
}
