//! Paged/sorted table engine for Fleetdesk list screens
//!
//! Composes the filter pipeline (fuzzy search, categorical filters, stable
//! sort), pagination and column-visibility state, identity-keyed row
//! selection with bulk actions, and persisted table settings. Pages own
//! their fetched collection and hand it to a [`TableSession`], which derives
//! the rendered view slice; the session rebuilds derived state from scratch
//! on every input change rather than patching it incrementally.

pub mod pipeline;

mod selection;
mod session;
mod settings;
mod state;

pub use selection::*;
pub use session::*;
pub use settings::*;
pub use state::*;
