//! Per-page table session: collection + filter + pagination + selection.

use std::future::Future;

use fleetdesk_core::{
    FilterState, Result, SearchConfig, SortDirection, SortDirective, TableRow, TableSchema,
};

use crate::pipeline;
use crate::state::{DataMode, TableState};
use crate::SelectionSet;

/// Owns one list screen's fetched collection and every piece of derived
/// state around it.
///
/// Derived state is rebuilt from scratch on every input change instead of
/// patched incrementally; at the collection sizes a single host manages this
/// keeps the session trivially consistent.
pub struct TableSession<T: TableRow> {
    collection: Vec<T>,
    schema: TableSchema<T>,
    search: SearchConfig<T>,
    filter: FilterState,
    state: TableState,
    selection: SelectionSet<T::Id>,
    filtered: Vec<usize>,
}

impl<T: TableRow> TableSession<T> {
    pub fn new(
        collection: Vec<T>,
        schema: TableSchema<T>,
        search: SearchConfig<T>,
        page_size: usize,
    ) -> Self {
        let mut session = Self {
            collection,
            schema,
            search,
            filter: FilterState::new(),
            state: TableState::new(page_size),
            selection: SelectionSet::new(),
            filtered: Vec::new(),
        };
        session.rebuild();
        session
    }

    pub fn with_mode(mut self, mode: DataMode) -> Self {
        self.state.set_mode(mode);
        self
    }

    /// Replace the backing collection, e.g. after an invalidate/refetch.
    /// Filter, pagination, and selection state are kept; derived state is
    /// rebuilt.
    pub fn set_collection(&mut self, collection: Vec<T>) {
        self.collection = collection;
        self.rebuild();
    }

    pub fn collection(&self) -> &[T] {
        &self.collection
    }

    pub fn filter_state(&self) -> &FilterState {
        &self.filter
    }

    pub fn table_state(&self) -> &TableState {
        &self.state
    }

    pub fn selection(&self) -> &SelectionSet<T::Id> {
        &self.selection
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.set_query(query);
        self.rebuild();
    }

    pub fn set_category(&mut self, field: impl Into<String>, value: Option<String>) {
        self.filter.set_category(field, value);
        self.rebuild();
    }

    /// Sort by a declared field. Sorting by the already-sorted field toggles
    /// the direction; a new field starts ascending.
    pub fn sort_by(&mut self, field: impl Into<String>) {
        let field = field.into();
        self.filter.sort = match self.filter.sort.take() {
            Some(directive) if directive.field == field => Some(SortDirective {
                field,
                direction: directive.direction.toggle(),
            }),
            _ => Some(SortDirective::ascending(field)),
        };
        self.rebuild();
    }

    pub fn clear_sort(&mut self) {
        self.filter.sort = None;
        self.rebuild();
    }

    pub fn sort_direction(&self, field: &str) -> Option<SortDirection> {
        self.filter
            .sort
            .as_ref()
            .filter(|d| d.field == field)
            .map(|d| d.direction)
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.state.go_to_page(page);
    }

    pub fn next_page(&mut self) {
        self.state.next_page();
    }

    pub fn previous_page(&mut self) {
        self.state.previous_page();
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.state.set_page_size(page_size);
    }

    pub fn toggle_column_visibility(&mut self, column: &str) {
        self.state.toggle_column_visibility(column);
    }

    pub fn is_column_visible(&self, column: &str) -> bool {
        self.state.is_column_visible(column)
    }

    pub fn page(&self) -> usize {
        self.state.page()
    }

    pub fn page_size(&self) -> usize {
        self.state.page_size()
    }

    pub fn page_count(&self) -> usize {
        self.state.page_count()
    }

    pub fn total_items(&self) -> usize {
        self.state.total_items()
    }

    /// Rows on the current page, in display order. In server-assisted mode
    /// the collection already is the current page, so the whole filtered set
    /// is returned.
    pub fn view_slice(&self) -> Vec<&T> {
        let indices: &[usize] = match self.state.mode() {
            DataMode::ClientSide => &self.filtered[self.state.page_range()],
            DataMode::ServerAssisted { .. } => &self.filtered,
        };
        indices.iter().map(|&i| &self.collection[i]).collect()
    }

    /// The full filtered set in display order, independent of pagination.
    /// This is what exports consume.
    pub fn filtered_rows(&self) -> Vec<&T> {
        self.filtered.iter().map(|&i| &self.collection[i]).collect()
    }

    pub fn toggle_row_selected(&mut self, id: T::Id) {
        self.selection.toggle(id);
    }

    pub fn is_row_selected(&self, id: &T::Id) -> bool {
        self.selection.is_selected(id)
    }

    /// Select every row on the current view slice. Rows on other pages are
    /// not touched; selecting the whole filtered set requires paging through
    /// it.
    pub fn select_all_visible(&mut self) {
        let ids: Vec<T::Id> = self.view_slice().iter().map(|r| r.row_id()).collect();
        self.selection.select_many(ids);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Commit a bulk action over the materialized selected rows.
    ///
    /// Selection is cleared and `invalidate` fires regardless of the
    /// action's outcome; the action's error propagates. The session never
    /// mutates its own collection here; the caller refetches and calls
    /// [`set_collection`](Self::set_collection).
    pub async fn commit_bulk_action<F, Fut, I>(&mut self, action: F, invalidate: I) -> Result<()>
    where
        T: Clone,
        F: FnOnce(Vec<T>) -> Fut,
        Fut: Future<Output = Result<()>>,
        I: FnOnce(),
    {
        let rows: Vec<T> = self
            .collection
            .iter()
            .filter(|row| self.selection.is_selected(&row.row_id()))
            .cloned()
            .collect();
        self.selection.commit_bulk_action(rows, action, invalidate).await
    }

    fn rebuild(&mut self) {
        self.filtered = pipeline::filter(&self.collection, &self.filter, &self.search, &self.schema);
        self.state.set_filtered_len(self.filtered.len());
        tracing::debug!(
            total = self.collection.len(),
            filtered = self.filtered.len(),
            page = self.state.page(),
            "session rebuilt"
        );
    }
}
