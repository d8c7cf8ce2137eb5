//! Minimal extended query dialect.
//!
//! Grammar: whitespace separates terms that must all match (in any order);
//! `|` inside a term separates OR alternatives; a term starting with `=`
//! must occur as an exact substring (no edit tolerance). Examples:
//!
//! - `honda civic`: both terms must match, order-independent
//! - `honda|toyota`: either make matches
//! - `=active`: rows whose field contains "active" verbatim
//!
//! Malformed syntax (a lone `=`, empty OR alternatives) degrades to a plain
//! substring interpretation of the raw query rather than erroring.

/// One search term alternative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTerm {
    pub text: String,
    /// When true, only exact substring containment matches.
    pub exact: bool,
}

/// A parsed query: outer groups are AND-combined, alternatives within a
/// group are OR-combined.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedQuery {
    pub groups: Vec<Vec<QueryTerm>>,
}

impl ParsedQuery {
    /// Parse the extended dialect, falling back to a plain substring
    /// interpretation when the syntax is malformed.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::default();
        }

        match Self::parse_strict(trimmed) {
            Some(parsed) => parsed,
            None => {
                tracing::warn!(query = %trimmed, "malformed extended query, using plain substring");
                Self::plain(trimmed)
            }
        }
    }

    /// Plain interpretation: the whole query is a single fuzzy term.
    pub fn plain(raw: &str) -> Self {
        Self {
            groups: vec![vec![QueryTerm {
                text: raw.to_string(),
                exact: false,
            }]],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    fn parse_strict(raw: &str) -> Option<Self> {
        let mut groups = Vec::new();
        for token in raw.split_whitespace() {
            let mut alternatives = Vec::new();
            for alt in token.split('|') {
                if alt.is_empty() {
                    return None; // "a||b" or leading/trailing pipe
                }
                if let Some(anchor) = alt.strip_prefix('=') {
                    if anchor.is_empty() {
                        return None; // lone "="
                    }
                    alternatives.push(QueryTerm {
                        text: anchor.to_string(),
                        exact: true,
                    });
                } else {
                    alternatives.push(QueryTerm {
                        text: alt.to_string(),
                        exact: false,
                    });
                }
            }
            groups.push(alternatives);
        }
        Some(Self { groups })
    }
}
