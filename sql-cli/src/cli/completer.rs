// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! TAB completion for the workbench REPL
//!
//! Thin rustyline adapter over the library's schema-driven suggestion
//! logic. The REPL swaps in a fresh snapshot after every run, so
//! completions follow schema changes.

use querylite::editor::completions_at;
use querylite::TableSchema;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::Helper;

/// rustyline helper carrying the current catalog snapshot
pub struct WorkbenchHelper {
    schema: TableSchema,
}

impl WorkbenchHelper {
    pub fn new(schema: TableSchema) -> Self {
        Self { schema }
    }

    /// Replace the snapshot after a schema refresh
    pub fn set_schema(&mut self, schema: TableSchema) {
        self.schema = schema;
    }
}

impl Completer for WorkbenchHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let completions = completions_at(line, pos, &self.schema);
        let pairs = completions
            .candidates
            .into_iter()
            .map(|candidate| Pair {
                display: candidate.clone(),
                replacement: candidate,
            })
            .collect();
        Ok((completions.start, pairs))
    }
}

impl Hinter for WorkbenchHelper {
    type Hint = String;
}

impl Highlighter for WorkbenchHelper {}
impl Validator for WorkbenchHelper {}
impl Helper for WorkbenchHelper {}
