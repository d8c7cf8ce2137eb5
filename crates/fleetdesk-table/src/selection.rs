//! Identity-keyed row selection and bulk-action commit.

use std::future::Future;
use std::hash::Hash;

use indexmap::IndexSet;

use fleetdesk_core::Result;

/// Rows marked for a bulk action, keyed by row identity rather than
/// position, so the set survives sorting, paging, and filtering within one
/// table session.
#[derive(Debug, Clone)]
pub struct SelectionSet<Id: Clone + Eq + Hash> {
    selected: IndexSet<Id>,
}

impl<Id: Clone + Eq + Hash> SelectionSet<Id> {
    pub fn new() -> Self {
        Self {
            selected: IndexSet::new(),
        }
    }

    pub fn toggle(&mut self, id: Id) {
        if !self.selected.shift_remove(&id) {
            self.selected.insert(id);
        }
    }

    pub fn select(&mut self, id: Id) {
        self.selected.insert(id);
    }

    pub fn select_many(&mut self, ids: impl IntoIterator<Item = Id>) {
        self.selected.extend(ids);
    }

    pub fn deselect(&mut self, id: &Id) {
        self.selected.shift_remove(id);
    }

    pub fn is_selected(&self, id: &Id) -> bool {
        self.selected.contains(id)
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Selected ids in selection order.
    pub fn ids(&self) -> impl Iterator<Item = &Id> {
        self.selected.iter()
    }

    /// Run a caller-supplied action over the materialized selected rows.
    ///
    /// The selection is cleared and `invalidate` fires whether the action
    /// succeeds or fails; only the action's error propagates. Callers are
    /// expected to re-fetch their source collection from `invalidate`.
    pub async fn commit_bulk_action<R, F, Fut, I>(
        &mut self,
        rows: Vec<R>,
        action: F,
        invalidate: I,
    ) -> Result<()>
    where
        F: FnOnce(Vec<R>) -> Fut,
        Fut: Future<Output = Result<()>>,
        I: FnOnce(),
    {
        tracing::info!(selected = rows.len(), "committing bulk action");
        let outcome = action(rows).await;
        if let Err(error) = &outcome {
            tracing::warn!(%error, "bulk action failed, selection cleared anyway");
        }
        self.clear();
        invalidate();
        outcome
    }
}

impl<Id: Clone + Eq + Hash> Default for SelectionSet<Id> {
    fn default() -> Self {
        Self::new()
    }
}
