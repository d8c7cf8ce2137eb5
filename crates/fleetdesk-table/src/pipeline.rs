//! The pure filter pipeline: fuzzy search, categorical filters, stable sort.
//!
//! `filter` is a pure function of its inputs and returns indices into the
//! collection; callers re-derive on any input change. The stage order is
//! fixed: search first, categorical retention second, sort last.

use std::cmp::Ordering;

use fleetdesk_core::{FilterState, SearchConfig, SortDirection, TableSchema};
use fleetdesk_fuzzy::FuzzyEngine;

/// Apply the full pipeline and return the surviving row indices in display
/// order.
///
/// 1. When the query is non-empty, the fuzzy engine ranks the collection and
///    defines the candidate set (and its relevance order); otherwise every
///    row is a candidate in original order.
/// 2. Each selected categorical value retains only rows whose field equals
///    it. A selection on a field the schema never declared retains nothing.
/// 3. An active sort directive stable-sorts by the declared field. Rows
///    missing the sort value go last regardless of direction; the direction
///    flips the comparator only, never the tie-break.
pub fn filter<T>(
    collection: &[T],
    filter: &FilterState,
    config: &SearchConfig<T>,
    schema: &TableSchema<T>,
) -> Vec<usize> {
    let mut indices: Vec<usize> =
        FuzzyEngine::search(collection, config, &filter.query)
            .into_iter()
            .map(|m| m.index)
            .collect();
    tracing::debug!(candidates = indices.len(), "search stage");

    for (field, selected) in &filter.categories {
        match schema.category_accessor(field) {
            Some(accessor) => {
                indices.retain(|&i| {
                    accessor(&collection[i])
                        .map(|actual| schema.category_matches(&actual, selected))
                        .unwrap_or(false)
                });
            }
            None => {
                tracing::warn!(field = %field, "categorical filter on undeclared field");
                indices.clear();
            }
        }
    }
    tracing::debug!(candidates = indices.len(), "categorical stage");

    if let Some(directive) = &filter.sort {
        if let Some(accessor) = schema.sort_accessor(&directive.field) {
            let descending = directive.direction == SortDirection::Descending;
            indices.sort_by(|&a, &b| {
                let va = accessor(&collection[a]);
                let vb = accessor(&collection[b]);
                match (va.is_missing(), vb.is_missing()) {
                    (true, true) => Ordering::Equal,
                    (true, false) => Ordering::Greater,
                    (false, true) => Ordering::Less,
                    (false, false) => {
                        let ord = va.compare(&vb);
                        if descending {
                            ord.reverse()
                        } else {
                            ord
                        }
                    }
                }
            });
        } else {
            tracing::warn!(field = %directive.field, "sort directive on undeclared field");
        }
    }

    indices
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleetdesk_core::{SortDirective, SortValue};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    #[derive(Clone)]
    struct Vehicle {
        make: &'static str,
        status: &'static str,
        daily_rate: Option<f64>,
    }

    fn fleet() -> Vec<Vehicle> {
        vec![
            Vehicle {
                make: "Honda",
                status: "active",
                daily_rate: Some(55.0),
            },
            Vehicle {
                make: "Toyota",
                status: "snoozed",
                daily_rate: Some(40.0),
            },
            Vehicle {
                make: "Honda",
                status: "active",
                daily_rate: None,
            },
            Vehicle {
                make: "Ford",
                status: "active",
                daily_rate: Some(40.0),
            },
            Vehicle {
                make: "Toyota",
                status: "active",
                daily_rate: Some(70.0),
            },
        ]
    }

    fn config() -> SearchConfig<Vehicle> {
        SearchConfig::new(0.7).with_field(
            "make",
            1.0,
            Arc::new(|v: &Vehicle| Some(v.make.to_string())),
        )
    }

    fn schema() -> TableSchema<Vehicle> {
        TableSchema::new()
            .with_category("status", Arc::new(|v: &Vehicle| Some(v.status.to_string())))
            .with_sort_field(
                "daily_rate",
                Arc::new(|v: &Vehicle| {
                    v.daily_rate.map(SortValue::Number).unwrap_or(SortValue::Missing)
                }),
            )
    }

    #[test]
    fn test_empty_filter_is_identity() {
        let fleet = fleet();
        let out = filter(&fleet, &FilterState::new(), &config(), &schema());
        assert_eq!(out, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_typo_query_keeps_matching_rows_in_order() {
        let fleet = fleet();
        let mut state = FilterState::new();
        state.set_query("hond");
        let out = filter(&fleet, &state, &config(), &schema());
        assert_eq!(out, vec![0, 2]);
    }

    #[test]
    fn test_categorical_retention() {
        let fleet = fleet();
        let mut state = FilterState::new();
        state.set_category("status", Some("snoozed".to_string()));
        let out = filter(&fleet, &state, &config(), &schema());
        assert_eq!(out, vec![1]);
    }

    #[test]
    fn test_zero_match_category_yields_empty() {
        let fleet = fleet();
        let mut state = FilterState::new();
        state.set_category("status", Some("archived".to_string()));
        let out = filter(&fleet, &state, &config(), &schema());
        assert!(out.is_empty());
    }

    #[test]
    fn test_undeclared_category_retains_nothing() {
        let fleet = fleet();
        let mut state = FilterState::new();
        state.set_category("channel", Some("web".to_string()));
        let out = filter(&fleet, &state, &config(), &schema());
        assert!(out.is_empty());
    }

    #[test]
    fn test_sort_is_stable_and_missing_goes_last() {
        let fleet = fleet();
        let mut state = FilterState::new();
        state.sort = Some(SortDirective::ascending("daily_rate"));
        let out = filter(&fleet, &state, &config(), &schema());
        // 40.0 ties keep original order (1 before 3); missing rate sorts last.
        assert_eq!(out, vec![1, 3, 0, 4, 2]);
    }

    #[test]
    fn test_descending_flips_comparator_not_missing_rule() {
        let fleet = fleet();
        let mut state = FilterState::new();
        state.sort = Some(SortDirective::descending("daily_rate"));
        let out = filter(&fleet, &state, &config(), &schema());
        assert_eq!(out, vec![4, 0, 1, 3, 2]);
    }

    #[test]
    fn test_stage_order_search_then_category_then_sort() {
        let fleet = fleet();
        let mut state = FilterState::new();
        state.set_query("toyota");
        state.set_category("status", Some("active".to_string()));
        state.sort = Some(SortDirective::ascending("daily_rate"));
        let out = filter(&fleet, &state, &config(), &schema());
        assert_eq!(out, vec![4]);
    }
}
