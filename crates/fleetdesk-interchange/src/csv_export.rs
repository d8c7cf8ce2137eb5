//! CSV serialization with configurable delimiters and qualifiers.

use serde::{Deserialize, Serialize};

use crate::descriptor::ExportColumn;

/// Field delimiter for CSV export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FieldDelimiter {
    #[default]
    Comma,
    Tab,
    Semicolon,
    Pipe,
}

impl FieldDelimiter {
    pub fn all() -> &'static [Self] {
        &[Self::Comma, Self::Tab, Self::Semicolon, Self::Pipe]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Comma => "Comma (,)",
            Self::Tab => "Tab (\\t)",
            Self::Semicolon => "Semicolon (;)",
            Self::Pipe => "Pipe (|)",
        }
    }

    pub fn value(&self) -> &'static str {
        match self {
            Self::Comma => ",",
            Self::Tab => "\t",
            Self::Semicolon => ";",
            Self::Pipe => "|",
        }
    }
}

/// Record delimiter for CSV export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RecordDelimiter {
    #[default]
    Newline,
    CarriageReturnNewline,
}

impl RecordDelimiter {
    pub fn value(&self) -> &'static str {
        match self {
            Self::Newline => "\n",
            Self::CarriageReturnNewline => "\r\n",
        }
    }
}

/// Text qualifier for CSV export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextQualifier {
    #[default]
    DoubleQuote,
    SingleQuote,
    None,
}

impl TextQualifier {
    pub fn all() -> &'static [Self] {
        &[Self::DoubleQuote, Self::SingleQuote, Self::None]
    }

    pub fn value(&self) -> Option<char> {
        match self {
            Self::DoubleQuote => Some('"'),
            Self::SingleQuote => Some('\''),
            Self::None => None,
        }
    }
}

/// CSV export options.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CsvOptions {
    pub field_delimiter: FieldDelimiter,
    pub record_delimiter: RecordDelimiter,
    pub text_qualifier: TextQualifier,
    pub include_headers: bool,
}

impl CsvOptions {
    pub fn new() -> Self {
        Self {
            include_headers: true,
            ..Self::default()
        }
    }
}

/// Serialize columns and rows to CSV bytes.
///
/// A value is qualified whenever it contains the field delimiter, the record
/// delimiter, or the qualifier character itself; embedded qualifiers are
/// doubled.
pub fn to_csv<T>(columns: &[ExportColumn<T>], rows: &[&T], options: &CsvOptions) -> Vec<u8> {
    let mut out = String::new();
    let field_delim = options.field_delimiter.value();
    let record_delim = options.record_delimiter.value();

    if options.include_headers {
        let headers: Vec<String> = columns
            .iter()
            .map(|c| qualify_value(&c.header(), options))
            .collect();
        out.push_str(&headers.join(field_delim));
        out.push_str(record_delim);
    }

    for row in rows {
        let cells: Vec<String> = columns
            .iter()
            .map(|c| qualify_value(&c.cell(row), options))
            .collect();
        out.push_str(&cells.join(field_delim));
        out.push_str(record_delim);
    }

    tracing::debug!(rows = rows.len(), columns = columns.len(), "csv export");
    out.into_bytes()
}

fn qualify_value(value: &str, options: &CsvOptions) -> String {
    let Some(qualifier) = options.text_qualifier.value() else {
        return value.to_string();
    };

    let needs_qualifying = value.contains(options.field_delimiter.value())
        || value.contains(options.record_delimiter.value())
        || value.contains(qualifier);

    if needs_qualifying {
        let doubled = value.replace(qualifier, &format!("{qualifier}{qualifier}"));
        format!("{qualifier}{doubled}{qualifier}")
    } else {
        value.to_string()
    }
}
