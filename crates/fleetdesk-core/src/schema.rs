//! Per-page table schema: categorical and sortable field declarations.

use indexmap::IndexMap;

use crate::{FieldAccessor, SortAccessor};

/// Declares, once per page, which fields support categorical filtering and
/// which support sorting, each resolved through an accessor closure.
///
/// Categorical comparison is case-sensitive exact match unless the page
/// opts into case-insensitive comparison.
#[derive(Clone)]
pub struct TableSchema<T> {
    categorical: IndexMap<String, FieldAccessor<T>>,
    sortable: IndexMap<String, SortAccessor<T>>,
    case_insensitive_categories: bool,
}

impl<T> TableSchema<T> {
    pub fn new() -> Self {
        Self {
            categorical: IndexMap::new(),
            sortable: IndexMap::new(),
            case_insensitive_categories: false,
        }
    }

    pub fn with_category(mut self, name: impl Into<String>, accessor: FieldAccessor<T>) -> Self {
        self.categorical.insert(name.into(), accessor);
        self
    }

    pub fn with_sort_field(mut self, name: impl Into<String>, accessor: SortAccessor<T>) -> Self {
        self.sortable.insert(name.into(), accessor);
        self
    }

    /// Compare categorical values ignoring case. Default is exact match.
    pub fn case_insensitive_categories(mut self, enabled: bool) -> Self {
        self.case_insensitive_categories = enabled;
        self
    }

    pub fn category_accessor(&self, field: &str) -> Option<&FieldAccessor<T>> {
        self.categorical.get(field)
    }

    pub fn sort_accessor(&self, field: &str) -> Option<&SortAccessor<T>> {
        self.sortable.get(field)
    }

    /// Compare a row's categorical value against the selected filter value.
    pub fn category_matches(&self, actual: &str, selected: &str) -> bool {
        if self.case_insensitive_categories {
            actual.eq_ignore_ascii_case(selected)
        } else {
            actual == selected
        }
    }
}

impl<T> Default for TableSchema<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SortValue;
    use std::sync::Arc;

    struct Trip {
        status: String,
        days: u32,
    }

    fn schema() -> TableSchema<Trip> {
        TableSchema::new()
            .with_category("status", Arc::new(|t: &Trip| Some(t.status.clone())))
            .with_sort_field("days", Arc::new(|t: &Trip| SortValue::Number(t.days as f64)))
    }

    #[test]
    fn test_accessor_lookup() {
        let schema = schema();
        let trip = Trip {
            status: "booked".into(),
            days: 3,
        };
        let accessor = schema.category_accessor("status").unwrap();
        assert_eq!(accessor(&trip), Some("booked".to_string()));
        assert!(schema.category_accessor("channel").is_none());

        let sort = schema.sort_accessor("days").unwrap();
        assert_eq!(sort(&trip), SortValue::Number(3.0));
    }

    #[test]
    fn test_category_match_case_sensitivity() {
        let schema = schema();
        assert!(schema.category_matches("booked", "booked"));
        assert!(!schema.category_matches("Booked", "booked"));

        let loose = self::schema().case_insensitive_categories(true);
        assert!(loose.category_matches("Booked", "booked"));
    }
}
