//! Fleetdesk Core - shared abstractions for the client-side list engine
//!
//! This crate provides the fundamental traits and types that the other
//! fleetdesk crates depend on. It defines:
//!
//! - `TableRow` - Identity trait for rows in a displayed collection
//! - `FieldAccessor` / `SortAccessor` - Accessor-based field resolution over
//!   opaque domain records (vehicles, trips, guests, ...)
//! - `SearchConfig` - Weighted field declarations driving fuzzy matching
//! - `FilterState` - Query, categorical selections, and sort directive
//! - `TableSchema` - Per-page declaration of categorical and sortable fields
//!
//! Rows stay opaque: the engine never reflects over field names. Each page
//! declares closures that pull searchable text and sort keys out of its own
//! row type, so the engine remains domain-agnostic while staying type safe.

mod error;
mod field;
mod filter_state;
mod row;
mod schema;
mod search;

pub use error::*;
pub use field::*;
pub use filter_state::*;
pub use row::*;
pub use schema::*;
pub use search::*;
