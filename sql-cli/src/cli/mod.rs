// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! CLI module for QueryLite
//!
//! Provides command-line interface for database initialization, the
//! interactive SQL workbench (REPL), and one-off query execution.

pub mod commands;
pub mod completer;
pub mod output;
pub mod workbench;

pub use commands::{Cli, Commands, OutputFormat};
pub use workbench::{handle_init, handle_query, handle_sql};
