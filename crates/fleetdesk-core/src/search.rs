//! Weighted search field declarations.

use crate::FieldAccessor;

/// Smallest weight a search field may carry; declared weights at or below
/// zero are clamped here instead of poisoning the score math.
const MIN_WEIGHT: f64 = 1e-6;

/// One searchable field: a name (for diagnostics), a positive weight, and
/// the accessor that resolves the field's text from a row.
#[derive(Clone)]
pub struct SearchField<T> {
    pub name: String,
    pub weight: f64,
    pub accessor: FieldAccessor<T>,
}

impl<T> SearchField<T> {
    pub fn new(name: impl Into<String>, weight: f64, accessor: FieldAccessor<T>) -> Self {
        let name = name.into();
        let weight = if weight > 0.0 {
            weight
        } else {
            tracing::warn!(field = %name, weight, "non-positive search weight clamped");
            MIN_WEIGHT
        };
        Self {
            name,
            weight,
            accessor,
        }
    }
}

/// Weighted field declarations plus matching sensitivity, declared once per
/// page.
///
/// `threshold` lives in [0, 1]; a row matches when its best weighted field
/// score reaches the threshold, so raising it never admits more rows.
#[derive(Clone)]
pub struct SearchConfig<T> {
    pub fields: Vec<SearchField<T>>,
    pub threshold: f64,
}

impl<T> SearchConfig<T> {
    pub fn new(threshold: f64) -> Self {
        Self {
            fields: Vec::new(),
            threshold: threshold.clamp(0.0, 1.0),
        }
    }

    pub fn with_field(
        mut self,
        name: impl Into<String>,
        weight: f64,
        accessor: FieldAccessor<T>,
    ) -> Self {
        self.fields.push(SearchField::new(name, weight, accessor));
        self
    }

    /// Largest declared weight, used to normalize scores back into [0, 1].
    pub fn max_weight(&self) -> f64 {
        self.fields
            .iter()
            .map(|f| f.weight)
            .fold(f64::MIN, f64::max)
            .max(MIN_WEIGHT)
    }
}
