// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Store layer: the boundary to the embedded engine
//!
//! The engine (SQLite via rusqlite) is an external collaborator; this
//! module owns the single live connection, the structured result types
//! that come back across the boundary, and the process-wide
//! initialize-once handle slot.

pub mod adapter;
pub mod provider;
pub mod result;
pub mod value;

pub use adapter::{StoreAdapter, StoreTarget};
pub use result::{QueryResult, QueryStatus, Row};
pub use value::Value;
