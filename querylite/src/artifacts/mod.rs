// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Client-side persistence of saved artifacts

pub mod kv;
pub mod store;

pub use kv::{FileKvStore, KvStore};
pub use store::{
    ArtifactStore, HistoryItem, SavedQuery, HISTORY_KEY, MAX_HISTORY_ITEMS, MAX_SAVED_QUERIES,
    SAVED_QUERIES_KEY,
};
