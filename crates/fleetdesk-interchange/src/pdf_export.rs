//! Tabular PDF serialization via printpdf.

use printpdf::{BuiltinFont, Mm, PdfDocument};

use crate::descriptor::{ExportColumn, ExportError, Result};

const A4_WIDTH_MM: f32 = 210.0;
const A4_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 12.0;
const HEADER_FONT_SIZE: f32 = 10.0;
const BODY_FONT_SIZE: f32 = 9.0;
const ROW_HEIGHT_MM: f32 = 6.0;
const TITLE_GAP_MM: f32 = 12.0;

/// Serialize columns and rows into a tabular PDF, adding pages as needed.
///
/// Columns share the printable width evenly. Missing values render as empty
/// cells. Long values are not wrapped; this mirrors the spreadsheet export's
/// one-cell-per-value layout.
pub fn to_pdf<T>(columns: &[ExportColumn<T>], rows: &[&T], title: &str) -> Result<Vec<u8>> {
    if columns.is_empty() {
        return Err(ExportError::NoColumns);
    }

    let (doc, page1, layer1) =
        PdfDocument::new(title, Mm(A4_WIDTH_MM), Mm(A4_HEIGHT_MM), "Layer 1");
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ExportError::Pdf(format!("Failed to add font: {e:?}")))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ExportError::Pdf(format!("Failed to add font: {e:?}")))?;

    let column_width = (A4_WIDTH_MM - 2.0 * MARGIN_MM) / columns.len() as f32;
    let mut layer = doc.get_page(page1).get_layer(layer1);

    let mut y = A4_HEIGHT_MM - MARGIN_MM;
    layer.use_text(title, HEADER_FONT_SIZE + 2.0, Mm(MARGIN_MM), Mm(y), &bold);
    y -= TITLE_GAP_MM;

    let draw_header = |layer: &printpdf::PdfLayerReference, y: f32| {
        for (i, column) in columns.iter().enumerate() {
            let x = MARGIN_MM + i as f32 * column_width;
            layer.use_text(column.header(), HEADER_FONT_SIZE, Mm(x), Mm(y), &bold);
        }
    };

    draw_header(&layer, y);
    y -= ROW_HEIGHT_MM;

    for row in rows {
        if y < MARGIN_MM {
            let (page, new_layer) =
                doc.add_page(Mm(A4_WIDTH_MM), Mm(A4_HEIGHT_MM), "Layer 1");
            layer = doc.get_page(page).get_layer(new_layer);
            y = A4_HEIGHT_MM - MARGIN_MM;
            draw_header(&layer, y);
            y -= ROW_HEIGHT_MM;
        }

        for (i, column) in columns.iter().enumerate() {
            let x = MARGIN_MM + i as f32 * column_width;
            layer.use_text(column.cell(row), BODY_FONT_SIZE, Mm(x), Mm(y), &font);
        }
        y -= ROW_HEIGHT_MM;
    }

    tracing::debug!(rows = rows.len(), columns = columns.len(), "pdf export");
    doc.save_to_bytes()
        .map_err(|e| ExportError::Pdf(format!("Failed to save PDF: {e:?}")))
}
