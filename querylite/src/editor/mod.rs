// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Editor integration surface
//!
//! The editor widget itself is external; this module keeps its text
//! buffer in sync with the coordinator's query string, gates the
//! execute trigger, and computes autocomplete suggestions from the
//! cached catalog snapshot.

pub mod completion;

pub use completion::{completions_at, Completions, SQL_KEYWORDS};

/// Text buffer synchronized with the coordinator's query string
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    buffer: String,
    /// Set during an in-flight execution; suppresses the execute trigger
    read_only: bool,
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn set_buffer(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    /// The buffer content to execute, or `None` when the trigger is
    /// suppressed (read-only editor or uninitialized database)
    pub fn run_request(&self, database_ready: bool) -> Option<&str> {
        if self.read_only || !database_ready {
            None
        } else {
            Some(&self.buffer)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_request_gating() {
        let mut editor = EditorState::new();
        editor.set_buffer("SELECT 1");

        assert_eq!(editor.run_request(true), Some("SELECT 1"));
        assert_eq!(editor.run_request(false), None);

        editor.set_read_only(true);
        assert_eq!(editor.run_request(true), None);
    }
}
