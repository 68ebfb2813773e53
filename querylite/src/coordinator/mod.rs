// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Coordinator module: run-query lifecycle and execution log

pub mod query_coordinator;
pub mod query_log;

pub use query_coordinator::{RunSource, WorkbenchCoordinator};
pub use query_log::{QueryLog, QueryLogEntry, LOG_CAPACITY};
