//! XLSX serialization via rust_xlsxwriter.

use rust_xlsxwriter::{Format, Workbook};

use crate::descriptor::{ExportColumn, ExportError, Result};

/// Serialize columns and rows into an XLSX workbook in memory.
///
/// One worksheet, a bold header row, one row per record. Missing values are
/// written as empty strings.
pub fn to_spreadsheet<T>(columns: &[ExportColumn<T>], rows: &[&T]) -> Result<Vec<u8>> {
    if columns.is_empty() {
        return Err(ExportError::NoColumns);
    }

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let header_format = Format::new().set_bold();

    for (col, column) in columns.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, column.header(), &header_format)
            .map_err(|e| ExportError::Spreadsheet(e.to_string()))?;
    }

    for (row_idx, row) in rows.iter().enumerate() {
        for (col, column) in columns.iter().enumerate() {
            worksheet
                .write_string((row_idx + 1) as u32, col as u16, column.cell(row))
                .map_err(|e| ExportError::Spreadsheet(e.to_string()))?;
        }
    }

    tracing::debug!(rows = rows.len(), columns = columns.len(), "xlsx export");
    workbook
        .save_to_buffer()
        .map_err(|e| ExportError::Spreadsheet(e.to_string()))
}
