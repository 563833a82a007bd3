//! Fuzzy symbol search over a dataset snapshot.
//!
//! The index precomputes lowercase match text per record; queries score the
//! symbol and name fields independently and combine them with the symbol
//! weighted above the name, so a partial ticker match outranks an equally
//! close company-name match. Candidates past the edit-distance budget are
//! excluded outright rather than ranked low.

use std::cmp::Ordering;

use crate::StockRecord;

const SYMBOL_WEIGHT: f64 = 0.7;
const NAME_WEIGHT: f64 = 0.3;

const EXACT_SCORE: f64 = 1.0;
const PREFIX_SCORE: f64 = 0.9;
const SUBSTRING_SCORE: f64 = 0.75;
const EDIT_SCORE_CEILING: f64 = 0.6;

#[derive(Debug)]
struct IndexEntry {
    symbol: String,
    name: String,
}

/// Precomputed match text for one dataset snapshot.
#[derive(Debug, Default)]
pub struct SearchIndex {
    entries: Vec<IndexEntry>,
}

impl SearchIndex {
    pub fn build(records: &[StockRecord]) -> Self {
        let entries = records
            .iter()
            .map(|record| IndexEntry {
                symbol: record.symbol.as_str().to_lowercase(),
                name: record.name.to_lowercase(),
            })
            .collect();
        Self { entries }
    }

    /// Record indices in descending relevance order, truncated to `limit`.
    /// Ties keep feed order.
    pub fn query(&self, query: &str, limit: usize) -> Vec<usize> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() || limit == 0 {
            return Vec::new();
        }

        let mut scored: Vec<(usize, f64)> = self
            .entries
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| {
                let score = SYMBOL_WEIGHT * field_score(&needle, &entry.symbol)
                    + NAME_WEIGHT * field_score(&needle, &entry.name);
                (score > 0.0).then_some((index, score))
            })
            .collect();

        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        scored.truncate(limit);
        scored.into_iter().map(|(index, _)| index).collect()
    }
}

/// Similarity of one lowercase field to the lowercase query, in `[0, 1]`.
/// Zero means the field is past the match threshold.
fn field_score(needle: &str, field: &str) -> f64 {
    if field == needle {
        return EXACT_SCORE;
    }
    if field.starts_with(needle) {
        return PREFIX_SCORE;
    }
    if field.contains(needle) {
        return SUBSTRING_SCORE;
    }

    let needle_len = needle.chars().count();
    let budget = edit_budget(needle_len);
    let best = field
        .split_whitespace()
        .filter(|token| token.chars().count().abs_diff(needle_len) <= budget)
        .map(|token| levenshtein(needle, token))
        .min();

    match best {
        Some(distance) if distance <= budget => {
            EDIT_SCORE_CEILING * (1.0 - distance as f64 / needle_len.max(1) as f64)
        }
        _ => 0.0,
    }
}

/// Typos tolerated scales with query length, capped at two edits.
fn edit_budget(query_chars: usize) -> usize {
    (query_chars / 3).clamp(1, 2)
}

fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0usize; b.len() + 1];
    for (i, ca) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            current[j + 1] = substitution.min(prev[j + 1] + 1).min(current[j] + 1);
        }
        std::mem::swap(&mut prev, &mut current);
    }
    prev[b.len()]
}
