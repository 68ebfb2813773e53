// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Process-wide store handle
//!
//! The workbench opens exactly one engine handle per process lifetime.
//! The handle lives in a locked global slot: the first successful
//! `initialize` installs it, later calls return the same `Arc`, and a
//! concurrent call made while initialization is in flight waits on the
//! slot lock and then observes the installed handle instead of creating
//! a second one. A failed initialization leaves the slot empty, so the
//! next call retries.

use crate::error::Result;
use crate::store::{StoreAdapter, StoreTarget};
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::sync::Arc;

/// Process-wide adapter slot.
///
/// Lazy ensures thread-safe construction of the slot itself; the mutex
/// is held across engine initialization so concurrent calls collapse.
static GLOBAL_ADAPTER: Lazy<Mutex<Option<Arc<StoreAdapter>>>> = Lazy::new(|| Mutex::new(None));

/// Initialize the process-wide handle, or return the existing one.
///
/// The `target` only matters for the call that actually performs the
/// initialization; once a handle exists it is returned as-is.
pub fn initialize(target: &StoreTarget) -> Result<Arc<StoreAdapter>> {
    let mut slot = GLOBAL_ADAPTER.lock();
    if let Some(adapter) = slot.as_ref() {
        return Ok(adapter.clone());
    }

    let adapter = Arc::new(StoreAdapter::open_target(target)?);
    *slot = Some(adapter.clone());
    log::info!("store adapter initialized ({:?})", target);
    Ok(adapter)
}

/// The current handle, if one has been initialized
pub fn current() -> Option<Arc<StoreAdapter>> {
    GLOBAL_ADAPTER.lock().clone()
}

/// Whether the handle is ready for execution
pub fn is_initialized() -> bool {
    GLOBAL_ADAPTER.lock().is_some()
}

/// Drop the process-wide handle.
///
/// Primarily for tests (paired with `serial_test`); a real process keeps
/// its handle for its whole lifetime.
pub fn reset() {
    let mut slot = GLOBAL_ADAPTER.lock();
    *slot = None;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_initialize_returns_same_handle() {
        reset();

        let first = initialize(&StoreTarget::InMemory).unwrap();
        let second = initialize(&StoreTarget::InMemory).unwrap();
        assert!(Arc::ptr_eq(&first, &second));

        reset();
    }

    #[test]
    #[serial]
    fn test_current_reflects_slot_state() {
        reset();
        assert!(current().is_none());
        assert!(!is_initialized());

        let handle = initialize(&StoreTarget::InMemory).unwrap();
        let seen = current().expect("handle should be installed");
        assert!(Arc::ptr_eq(&handle, &seen));

        reset();
        assert!(current().is_none());
    }

    #[test]
    #[serial]
    fn test_reinitialize_does_not_duplicate_seed_rows() {
        reset();

        let first = initialize(&StoreTarget::InMemory).unwrap();
        let count = |adapter: &StoreAdapter| {
            let result = adapter.execute("SELECT COUNT(*) AS n FROM users");
            result.rows[0]
                .get_value("n")
                .cloned()
                .expect("count column")
        };
        let before = count(&first);

        let second = initialize(&StoreTarget::InMemory).unwrap();
        let after = count(&second);
        assert_eq!(before, after);

        reset();
    }
}
