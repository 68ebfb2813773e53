// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Error types for the workbench layer
//!
//! Engine-side statement failures never surface here: the store adapter
//! captures them into a `QueryResult` with `QueryStatus::Error`. This
//! taxonomy covers everything that is rejected before dispatch or that
//! fails outside the engine boundary.

use thiserror::Error;

/// Errors that can occur in the workbench layer
#[derive(Error, Debug)]
pub enum Error {
    /// The embedded engine could not be created or seeded.
    ///
    /// Surfaced as a "not ready" state; initialization may be retried.
    #[error("Initialization error: {0}")]
    Initialization(String),

    /// A statement failed outside the structured-result path
    /// (one-off execution where the caller wants a hard error).
    #[error("Execution error: {0}")]
    Execution(String),

    /// Input rejected before dispatch: blank query, blank save-name,
    /// busy coordinator, uninitialized handle.
    #[error("{0}")]
    Validation(String),

    /// Artifact persistence failure (saved queries / history).
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl Error {
    /// Create an initialization error
    pub fn init<S: Into<String>>(msg: S) -> Self {
        Self::Initialization(msg.into())
    }

    /// Create a validation error
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a storage error
    pub fn storage<S: Into<String>>(msg: S) -> Self {
        Self::Storage(msg.into())
    }
}

/// Result type alias for workbench operations
pub type Result<T> = std::result::Result<T, Error>;
