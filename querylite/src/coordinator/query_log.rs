// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Bounded execution log
//!
//! One entry per dispatched execution, success or failure. The log is a
//! ring bounded at [`LOG_CAPACITY`] entries; the oldest entry is evicted
//! first and iteration yields newest first.

use crate::store::{QueryResult, QueryStatus};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Maximum number of retained log entries
pub const LOG_CAPACITY: usize = 50;

/// A single execution log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryLogEntry {
    pub message: String,
    pub status: QueryStatus,
    pub timestamp_ms: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

impl QueryLogEntry {
    /// Build a log entry from an execution result
    pub fn from_result(result: &QueryResult) -> Self {
        Self {
            message: result.message.clone(),
            status: result.status,
            timestamp_ms: chrono::Utc::now().timestamp_millis(),
            duration_ms: Some(result.duration_ms),
        }
    }
}

/// Ring of recent executions, newest first
#[derive(Debug, Default)]
pub struct QueryLog {
    entries: VecDeque<QueryLogEntry>,
}

impl QueryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, evicting the oldest beyond capacity
    pub fn append(&mut self, entry: QueryLogEntry) {
        self.entries.push_front(entry);
        while self.entries.len() > LOG_CAPACITY {
            self.entries.pop_back();
        }
    }

    /// Entries, newest first
    pub fn entries(&self) -> impl Iterator<Item = &QueryLogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
