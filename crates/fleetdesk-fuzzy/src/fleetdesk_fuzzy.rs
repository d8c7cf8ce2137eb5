//! Fuzzy string matching for Fleetdesk list screens
//!
//! Implements a lightweight fuzzy matcher over the searchable fields a page
//! declares. Supports:
//! - Edit-distance-tolerant substring matching (case-insensitive)
//! - A minimal extended query dialect: whitespace-separated terms are AND
//!   combined independent of order, `|` separates OR alternatives, and a
//!   leading `=` anchors a term to exact substring matching
//! - Weighted multi-field scoring with a configurable threshold
//!
//! Match position within a field is deliberately ignored: a hit at the start
//! of a value scores the same as a hit at the end, so rankings stay
//! deterministic across pages. Malformed dialect syntax degrades to a plain
//! substring interpretation, and missing field values score as non-matches;
//! neither ever raises an error.

mod engine;
mod matcher;
mod query;

pub use engine::*;
pub use matcher::*;
pub use query::*;
