// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Client-side result presentation
//!
//! Pagination and substring search over the in-memory result set the
//! engine already returned. This is pure derivation: nothing here goes
//! back to the engine.

use crate::store::Row;

/// Fixed page size of the results view
pub const PAGE_SIZE: usize = 10;

/// One page of the filtered result set
#[derive(Debug)]
pub struct PageView<'a> {
    pub rows: Vec<&'a Row>,
    /// 1-based page index actually shown (clamped into range)
    pub page: usize,
    /// `ceil(filtered / PAGE_SIZE)`
    pub page_count: usize,
    /// Size of the filtered set
    pub total: usize,
}

/// Search term and page position over the cached result set
///
/// Changing the search term resets the page to 1.
#[derive(Debug, Clone)]
pub struct ResultsView {
    search: String,
    page: usize,
}

impl ResultsView {
    pub fn new() -> Self {
        Self {
            search: String::new(),
            page: 1,
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Set the search term; a changed term resets to page 1
    pub fn set_search(&mut self, term: &str) {
        if term != self.search {
            self.search = term.to_string();
            self.page = 1;
        }
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn next_page(&mut self) {
        self.page += 1;
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    /// Filter and paginate the given rows.
    ///
    /// A row matches when any stringified field value contains the
    /// search term case-insensitively. The shown page is clamped into
    /// the valid range for the filtered set.
    pub fn paginate<'a>(&self, rows: &'a [Row]) -> PageView<'a> {
        let needle = self.search.to_lowercase();
        let filtered: Vec<&Row> = rows
            .iter()
            .filter(|row| needle.is_empty() || row_matches(row, &needle))
            .collect();

        let total = filtered.len();
        let page_count = (total + PAGE_SIZE - 1) / PAGE_SIZE;
        let page = self.page.min(page_count.max(1));

        let start = (page - 1) * PAGE_SIZE;
        let rows = filtered
            .into_iter()
            .skip(start)
            .take(PAGE_SIZE)
            .collect();

        PageView {
            rows,
            page,
            page_count,
            total,
        }
    }
}

impl Default for ResultsView {
    fn default() -> Self {
        Self::new()
    }
}

fn row_matches(row: &Row, needle_lower: &str) -> bool {
    row.values
        .values()
        .any(|v| v.display_string().to_lowercase().contains(needle_lower))
}
