//! Accessor-based field resolution over opaque rows.
//!
//! Pages declare closures that pull values out of their own row types; the
//! engine never reflects over field names. A missing value is `None` and is
//! treated as an empty string (search) or as sorting last (sort) downstream.

use std::cmp::Ordering;
use std::sync::Arc;

use chrono::{DateTime, Utc};

/// Resolves a searchable or categorical text value from a row.
pub type FieldAccessor<T> = Arc<dyn Fn(&T) -> Option<String> + Send + Sync>;

/// Resolves a sort key from a row.
pub type SortAccessor<T> = Arc<dyn Fn(&T) -> SortValue + Send + Sync>;

/// A typed sort key.
///
/// Numbers compare numerically, timestamps by instant, text lexically.
/// `Missing` always sorts last regardless of sort direction; that rule is
/// applied by the filter pipeline outside the direction flip, so `compare`
/// here only defines the within-kind ordering.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    Number(f64),
    Timestamp(DateTime<Utc>),
    Text(String),
    Missing,
}

impl SortValue {
    /// True when the row has no value for the sort field.
    pub fn is_missing(&self) -> bool {
        matches!(self, SortValue::Missing)
    }

    /// Best-effort conversion from a raw string value: number first, then
    /// RFC 3339 timestamp, then plain text. Empty input is `Missing`.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return SortValue::Missing;
        }
        if let Ok(n) = trimmed.parse::<f64>() {
            return SortValue::Number(n);
        }
        if let Ok(ts) = DateTime::parse_from_rfc3339(trimmed) {
            return SortValue::Timestamp(ts.with_timezone(&Utc));
        }
        SortValue::Text(trimmed.to_string())
    }

    /// Compare two sort values of the same field.
    ///
    /// Mixed kinds (a page whose sort accessor is inconsistent) fall back to
    /// a fixed kind order so the sort stays total and deterministic.
    pub fn compare(&self, other: &SortValue) -> Ordering {
        use SortValue::*;
        match (self, other) {
            (Number(a), Number(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (Timestamp(a), Timestamp(b)) => a.cmp(b),
            (Text(a), Text(b)) => a.cmp(b),
            (Missing, Missing) => Ordering::Equal,
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }

    fn kind_rank(&self) -> u8 {
        match self {
            SortValue::Number(_) => 0,
            SortValue::Timestamp(_) => 1,
            SortValue::Text(_) => 2,
            SortValue::Missing => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(SortValue::parse("42"), SortValue::Number(42.0));
        assert_eq!(SortValue::parse("-3.5"), SortValue::Number(-3.5));
    }

    #[test]
    fn test_parse_timestamp() {
        let v = SortValue::parse("2026-01-15T10:30:00Z");
        assert!(matches!(v, SortValue::Timestamp(_)));
    }

    #[test]
    fn test_parse_text_and_missing() {
        assert_eq!(
            SortValue::parse("Honda"),
            SortValue::Text("Honda".to_string())
        );
        assert_eq!(SortValue::parse("   "), SortValue::Missing);
    }

    #[test]
    fn test_compare_numbers() {
        let a = SortValue::Number(1.0);
        let b = SortValue::Number(2.0);
        assert_eq!(a.compare(&b), Ordering::Less);
        assert_eq!(b.compare(&a), Ordering::Greater);
        assert_eq!(a.compare(&a.clone()), Ordering::Equal);
    }

    #[test]
    fn test_compare_text() {
        let a = SortValue::Text("Ford".into());
        let b = SortValue::Text("Honda".into());
        assert_eq!(a.compare(&b), Ordering::Less);
    }
}
