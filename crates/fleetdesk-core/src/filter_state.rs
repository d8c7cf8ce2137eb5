//! Filter and sort state for a table session
//!
//! `FilterState` is an explicit value object passed into the pure filter
//! pipeline. Where it is persisted (URL query state, memory, nowhere) is the
//! caller's concern; the engine only reads it.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ascending => "ASC",
            Self::Descending => "DESC",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// A sort directive: which declared field to sort by, and in which direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortDirective {
    pub field: String,
    pub direction: SortDirection,
}

impl SortDirective {
    pub fn ascending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Descending,
        }
    }
}

/// Current filter state for one table session.
///
/// Categorical selections map field name to the selected value; a field
/// absent from the map means "all" (no restriction). Lives for the page
/// session only, never persisted by the engine itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterState {
    /// Global search query; empty means no search.
    #[serde(default)]
    pub query: String,
    /// Selected categorical values, field name -> value.
    #[serde(default)]
    pub categories: IndexMap<String, String>,
    /// Active sort directive, if any.
    #[serde(default)]
    pub sort: Option<SortDirective>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or clear the search query.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Select a categorical value, or pass `None` to restore "all".
    pub fn set_category(&mut self, field: impl Into<String>, value: Option<String>) {
        let field = field.into();
        match value {
            Some(v) => {
                self.categories.insert(field, v);
            }
            None => {
                self.categories.shift_remove(&field);
            }
        }
    }

    /// True when no query, no categorical selection, and no sort is active.
    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.categories.is_empty() && self.sort.is_none()
    }
}
