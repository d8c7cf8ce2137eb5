//! Export transformers for Fleetdesk list screens
//!
//! Serializes a filtered row set into downloadable byte streams: CSV with
//! configurable delimiters and qualifiers, XLSX spreadsheets, and tabular
//! PDF documents.
//!
//! Exports always receive the FULL filtered set, never the current page;
//! what the user sees on screen and what lands in the file differ whenever
//! more than one page exists. Surface this in user-facing help text.
//! Missing cell values serialize as empty strings. All transformers are
//! pure; they never touch table state.

mod csv_export;
mod descriptor;
mod pdf_export;
mod xlsx_export;

pub use csv_export::*;
pub use descriptor::*;
pub use pdf_export::*;
pub use xlsx_export::*;
