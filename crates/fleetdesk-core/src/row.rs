//! Row identity

use std::hash::Hash;

/// A row in a displayed collection (vehicle, trip, guest, host, ...).
///
/// The engine only requires a stable unique identifier. Selection, bulk
/// actions, and reconciliation are keyed by this id rather than by row
/// position, so they survive sorting, paging, and filtering.
pub trait TableRow {
    /// Stable unique identifier type for this row kind.
    type Id: Clone + Eq + Hash;

    /// Returns the stable unique identifier of this row.
    fn row_id(&self) -> Self::Id;
}

impl<T: TableRow> TableRow for &T {
    type Id = T::Id;

    fn row_id(&self) -> Self::Id {
        (*self).row_id()
    }
}
