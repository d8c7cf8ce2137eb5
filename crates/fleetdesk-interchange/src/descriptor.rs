//! Export column descriptors and shared export types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use fleetdesk_core::FieldAccessor;

/// Errors during export serialization
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(String),

    #[error("PDF error: {0}")]
    Pdf(String),

    #[error("No columns to export")]
    NoColumns,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ExportError>;

/// Supported export formats, with extensions for deterministic caller-side
/// file naming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ExportFormat {
    #[default]
    Csv,
    Xlsx,
    Pdf,
}

impl ExportFormat {
    pub fn all() -> &'static [Self] {
        &[Self::Csv, Self::Xlsx, Self::Pdf]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Csv => "CSV",
            Self::Xlsx => "Excel Workbook",
            Self::Pdf => "PDF Document",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Xlsx => "xlsx",
            Self::Pdf => "pdf",
        }
    }
}

/// One exported column: id, optional header label, and the accessor that
/// resolves a cell value from a row.
#[derive(Clone)]
pub struct ExportColumn<T> {
    pub id: String,
    pub label: Option<String>,
    pub accessor: FieldAccessor<T>,
}

impl<T> ExportColumn<T> {
    pub fn new(id: impl Into<String>, accessor: FieldAccessor<T>) -> Self {
        Self {
            id: id.into(),
            label: None,
            accessor,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Header text: the explicit label when present, otherwise the column id
    /// with its first letter uppercased. The fallback is naive on purpose;
    /// "created_at" becomes "Created_at", not "Created At".
    pub fn header(&self) -> String {
        match &self.label {
            Some(label) => label.clone(),
            None => capitalize_first(&self.id),
        }
    }

    /// Cell value for a row; a missing value is an empty string.
    pub fn cell(&self, row: &T) -> String {
        (self.accessor)(row).unwrap_or_default()
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    struct Trip {
        guest: Option<String>,
    }

    fn column() -> ExportColumn<Trip> {
        ExportColumn::new("guest_name", Arc::new(|t: &Trip| t.guest.clone()))
    }

    #[test]
    fn test_header_fallback_is_naive_capitalization() {
        assert_eq!(column().header(), "Guest_name");
        assert_eq!(column().with_label("Guest").header(), "Guest");
    }

    #[test]
    fn test_missing_cell_is_empty_string() {
        let trip = Trip { guest: None };
        assert_eq!(column().cell(&trip), "");
    }

    #[test]
    fn test_format_extensions() {
        assert_eq!(ExportFormat::Csv.extension(), "csv");
        assert_eq!(ExportFormat::Xlsx.extension(), "xlsx");
        assert_eq!(ExportFormat::Pdf.extension(), "pdf");
    }
}
