//! Weighted multi-field ranking over a row collection.

use fleetdesk_core::SearchConfig;

use crate::matcher::{contains_exact, substring_score};
use crate::query::{ParsedQuery, QueryTerm};

/// A row that survived the threshold, with its normalized score in [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct RankedMatch {
    /// Index of the row in the input collection.
    pub index: usize,
    pub score: f64,
}

/// Stateless ranking engine. Holds no data; pages pass their collection and
/// config on every call so the result is a pure function of its inputs.
pub struct FuzzyEngine;

impl FuzzyEngine {
    /// Rank `collection` against `query`.
    ///
    /// An empty or whitespace-only query returns every row with score 1.0 in
    /// original order. Otherwise rows whose score reaches the configured
    /// threshold (and is positive) are returned sorted by score descending,
    /// ties broken by original index.
    pub fn search<T>(collection: &[T], config: &SearchConfig<T>, query: &str) -> Vec<RankedMatch> {
        let parsed = ParsedQuery::parse(query);
        if parsed.is_empty() {
            return (0..collection.len())
                .map(|index| RankedMatch { index, score: 1.0 })
                .collect();
        }

        let max_weight = config.max_weight();
        let mut matches: Vec<RankedMatch> = collection
            .iter()
            .enumerate()
            .filter_map(|(index, row)| {
                let score = row_score(row, config, &parsed, max_weight);
                (score >= config.threshold && score > 0.0)
                    .then_some(RankedMatch { index, score })
            })
            .collect();

        matches.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.index.cmp(&b.index))
        });
        matches
    }
}

/// Score a row: each AND group must match somewhere, and the row's score is
/// the weakest group's best contribution. Within a group, OR alternatives
/// take the best alternative; across fields, the highest weighted field wins.
fn row_score<T>(
    row: &T,
    config: &SearchConfig<T>,
    query: &ParsedQuery,
    max_weight: f64,
) -> f64 {
    let values: Vec<(String, f64)> = config
        .fields
        .iter()
        .map(|field| ((field.accessor)(row).unwrap_or_default(), field.weight))
        .collect();

    let mut row_score = f64::MAX;
    for group in &query.groups {
        let mut group_score = 0.0f64;
        for term in group {
            for (value, weight) in &values {
                let raw = term_score(term, value);
                group_score = group_score.max(raw * weight / max_weight);
            }
        }
        row_score = row_score.min(group_score);
    }
    row_score
}

fn term_score(term: &QueryTerm, value: &str) -> f64 {
    if term.exact {
        if contains_exact(value, &term.text) {
            1.0
        } else {
            0.0
        }
    } else {
        substring_score(&term.text, value)
    }
}
