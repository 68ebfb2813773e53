// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Result formatting for CLI output

use colored::*;
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use querylite::view::PageView;
use querylite::{export, QueryResult, QueryStatus, Row, TableSchema};

use crate::cli::commands::OutputFormat;

/// Result formatter for different output formats
pub struct ResultFormatter;

impl ResultFormatter {
    /// Format a full query result in the specified format
    pub fn format(result: &QueryResult, format: OutputFormat) -> String {
        match format {
            OutputFormat::Table => Self::format_table(result),
            OutputFormat::Json => Self::format_json(result),
            OutputFormat::Csv => export::export_csv(result),
        }
    }

    /// Format a result as a table using comfy-table
    fn format_table(result: &QueryResult) -> String {
        if result.status == QueryStatus::Error {
            return format!("{}\n", format!("Error: {}", result.message).red());
        }

        if result.rows.is_empty() {
            return format!(
                "{}\n{}\n",
                result.message.yellow(),
                format!("Execution time: {} ms", result.duration_ms)
            );
        }

        let mut output = String::new();
        output.push_str(&format!("{}\n", "Query Results".bold().green()));
        output.push_str(&format!("Execution time: {} ms\n", result.duration_ms));
        output.push_str(&format!("Rows returned: {}\n\n", result.rows.len()));

        let refs: Vec<&Row> = result.rows.iter().collect();
        output.push_str(&Self::render_rows(&result.columns, &refs));
        output.push('\n');
        output
    }

    /// Format one page of the filtered view as a table
    pub fn format_page(columns: &[String], page: &PageView<'_>, search: &str) -> String {
        let mut output = String::new();

        if page.total == 0 {
            if search.is_empty() {
                output.push_str(&format!("{}\n", "No results found".yellow()));
            } else {
                output.push_str(&format!(
                    "{}\n",
                    format!("No rows matching '{}'", search).yellow()
                ));
            }
            return output;
        }

        output.push_str(&Self::render_rows(columns, &page.rows));
        output.push_str(&format!(
            "\nPage {} of {} ({} row(s)",
            page.page,
            page.page_count.max(1),
            page.total
        ));
        if !search.is_empty() {
            output.push_str(&format!(", filter '{}'", search));
        }
        output.push_str(")\n");
        output
    }

    fn render_rows(columns: &[String], rows: &[&Row]) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);

        let header_cells: Vec<Cell> = columns
            .iter()
            .map(|col| Cell::new(col).fg(Color::Green))
            .collect();
        table.set_header(header_cells);

        for row in rows {
            let row_values: Vec<String> = columns
                .iter()
                .map(|col| {
                    row.get_value(col)
                        .map(|v| v.display_string())
                        .unwrap_or_else(|| "NULL".to_string())
                })
                .collect();
            table.add_row(row_values);
        }

        table.to_string()
    }

    /// Format a result as JSON
    fn format_json(result: &QueryResult) -> String {
        let json_result = serde_json::json!({
            "status": match result.status {
                QueryStatus::Success => "success",
                QueryStatus::Error => "error",
            },
            "message": result.message,
            "columns": result.columns,
            "rows": result.rows.iter().map(|row| {
                let mut row_map = serde_json::Map::new();
                for col in &result.columns {
                    let value = row.get_value(col)
                        .map(|v| v.to_json())
                        .unwrap_or(serde_json::Value::Null);
                    row_map.insert(col.clone(), value);
                }
                serde_json::Value::Object(row_map)
            }).collect::<Vec<_>>(),
            "duration_ms": result.duration_ms,
        });

        serde_json::to_string_pretty(&json_result).unwrap_or_else(|_| {
            "{\"status\": \"error\", \"error\": \"Could not serialize results to JSON\"}"
                .to_string()
        })
    }

    /// Format the catalog snapshot as a table
    pub fn format_schema(schema: &TableSchema) -> String {
        if schema.is_empty() {
            return format!("{}\n", "No tables".yellow());
        }

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec![
            Cell::new("Table").fg(Color::Green),
            Cell::new("Columns").fg(Color::Green),
        ]);
        for (name, columns) in schema.iter() {
            table.add_row(vec![name.to_string(), columns.join(", ")]);
        }

        format!("{}\n", table)
    }
}
