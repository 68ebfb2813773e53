// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Command-line argument definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// QueryLite - A lightweight embedded SQL workbench
#[derive(Parser)]
#[command(name = "querylite", version, about)]
pub struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log level
    #[arg(long, global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show version information
    Version,

    /// Create and seed a workbench database file
    Init {
        /// Database file to create
        #[arg(long, default_value = "./querylite.db")]
        path: PathBuf,

        /// Recreate the baseline objects even if the file exists
        #[arg(long)]
        force: bool,
    },

    /// Start the interactive SQL workbench
    Sql {
        /// Database file (omitted: transient in-memory database)
        #[arg(long)]
        path: Option<PathBuf>,

        /// Directory for saved queries and history (default ~/.querylite)
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },

    /// Execute a single query and print the result
    Query {
        /// SQL text to execute
        query: String,

        /// Database file (omitted: transient in-memory database)
        #[arg(long)]
        path: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
}

/// Output format for query results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

/// Log level for the --log-level flag
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}
