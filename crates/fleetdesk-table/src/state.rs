//! Pagination, column visibility, and data-mode state for one table.

use std::collections::BTreeSet;
use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Where the rows backing the table come from.
///
/// `ClientSide` holds the entire collection locally and paginates it;
/// `ServerAssisted` reflects page/sort/search parameters into the fetch
/// request, so the local collection is the current page only and the item
/// total is authoritative from the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DataMode {
    #[default]
    ClientSide,
    ServerAssisted {
        total_items: usize,
    },
}

/// Pagination and column-visibility state for one table instance.
///
/// Pages are 1-indexed. No transition ever panics on an out-of-range page;
/// requests are clamped into `[1, page_count]`.
#[derive(Debug, Clone)]
pub struct TableState {
    mode: DataMode,
    page: usize,
    page_size: usize,
    filtered_len: usize,
    hidden_columns: BTreeSet<String>,
}

impl TableState {
    pub fn new(page_size: usize) -> Self {
        Self {
            mode: DataMode::ClientSide,
            page: 1,
            page_size: page_size.max(1),
            filtered_len: 0,
            hidden_columns: BTreeSet::new(),
        }
    }

    pub fn with_mode(mut self, mode: DataMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> DataMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: DataMode) {
        self.mode = mode;
        self.clamp_page();
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Total rows behind the table: the filtered length in client-side mode,
    /// the server-reported count in server-assisted mode.
    pub fn total_items(&self) -> usize {
        match self.mode {
            DataMode::ClientSide => self.filtered_len,
            DataMode::ServerAssisted { total_items } => total_items,
        }
    }

    /// Number of pages, never less than 1.
    pub fn page_count(&self) -> usize {
        self.total_items().div_ceil(self.page_size).max(1)
    }

    /// Record the filtered collection length. Re-clamps the page so a shrink
    /// never leaves the table on a page past the end.
    pub fn set_filtered_len(&mut self, len: usize) {
        self.filtered_len = len;
        self.clamp_page();
    }

    /// Go to a page, clamped into `[1, page_count]`.
    pub fn go_to_page(&mut self, page: usize) {
        self.page = page.clamp(1, self.page_count());
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.page + 1);
    }

    pub fn previous_page(&mut self) {
        self.go_to_page(self.page.saturating_sub(1));
    }

    /// Change the page size, re-clamping the current page so it is never
    /// left beyond the new page count.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.clamp_page();
    }

    /// Index range of the current page within the filtered set.
    pub fn page_range(&self) -> Range<usize> {
        let total = self.total_items();
        let start = (self.page - 1).saturating_mul(self.page_size).min(total);
        let end = (start + self.page_size).min(total);
        start..end
    }

    pub fn toggle_column_visibility(&mut self, column: &str) {
        if !self.hidden_columns.remove(column) {
            self.hidden_columns.insert(column.to_string());
        }
    }

    pub fn is_column_visible(&self, column: &str) -> bool {
        !self.hidden_columns.contains(column)
    }

    pub fn hidden_columns(&self) -> impl Iterator<Item = &str> {
        self.hidden_columns.iter().map(String::as_str)
    }

    fn clamp_page(&mut self) {
        self.page = self.page.clamp(1, self.page_count());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_page_count_derivation() {
        let mut state = TableState::new(10);
        state.set_filtered_len(25);
        assert_eq!(state.page_count(), 3);
        assert_eq!(state.total_items(), 25);

        state.set_filtered_len(0);
        assert_eq!(state.page_count(), 1);
    }

    #[test]
    fn test_out_of_range_page_clamps() {
        let mut state = TableState::new(10);
        state.set_filtered_len(25);
        state.go_to_page(99);
        assert_eq!(state.page(), 3);
        state.go_to_page(0);
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_page_size_change_reclamps_page() {
        // 25 rows at size 10 is 3 pages; growing to size 20 leaves 2.
        let mut state = TableState::new(10);
        state.set_filtered_len(25);
        state.go_to_page(3);
        state.set_page_size(20);
        assert_eq!(state.page(), 2);
        assert_eq!(state.page_count(), 2);
    }

    #[test]
    fn test_shrinking_filtered_len_reclamps_page() {
        let mut state = TableState::new(10);
        state.set_filtered_len(50);
        state.go_to_page(5);
        state.set_filtered_len(12);
        assert_eq!(state.page(), 2);
    }

    #[test]
    fn test_page_range_covers_filtered_set_exactly_once() {
        let mut state = TableState::new(10);
        state.set_filtered_len(25);
        let mut covered = Vec::new();
        for page in 1..=state.page_count() {
            state.go_to_page(page);
            covered.extend(state.page_range());
        }
        assert_eq!(covered, (0..25).collect::<Vec<_>>());
    }

    #[test]
    fn test_server_assisted_total_is_authoritative() {
        let mut state =
            TableState::new(10).with_mode(DataMode::ServerAssisted { total_items: 132 });
        state.set_filtered_len(10);
        assert_eq!(state.total_items(), 132);
        assert_eq!(state.page_count(), 14);
        state.go_to_page(14);
        assert_eq!(state.page(), 14);
    }

    #[test]
    fn test_column_visibility_toggle() {
        let mut state = TableState::new(10);
        assert!(state.is_column_visible("vin"));
        state.toggle_column_visibility("vin");
        assert!(!state.is_column_visible("vin"));
        state.toggle_column_visibility("vin");
        assert!(state.is_column_visible("vin"));
    }
}
