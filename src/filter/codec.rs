//! Bidirectional mapping between [`FilterState`] and the query encoding.
//!
//! The query encoding is the only wire format in the system: an ordered
//! mapping of string keys to string values, rendered at the session boundary
//! as a query string. Encoding elides every field that equals its default, so
//! the all-defaults state encodes to the empty mapping — this is what makes
//! the default view's address canonical and shareable.
//!
//! Decoding is **total and tolerant**: it never fails, whatever the input.
//! Unknown keys are ignored, malformed numbers fall back to defaults or to an
//! absent bound, the "All" sentinel collapses to the canonical empty set, and
//! duplicate labels are deduplicated. The round-trip law
//! `decode(encode(s)) == s` holds for every reachable state; the reverse trip
//! is only required to be semantically equivalent (decoding normalizes).

use crate::filter::state::{FilterState, PRICE_CEILING, PRICE_FLOOR};

/// Query key for the comma-joined type selection.
pub const KEY_TYPES: &str = "types";
/// Query key for the lower price bound.
pub const KEY_PRICE_MIN: &str = "priceMin";
/// Query key for the upper price bound.
pub const KEY_PRICE_MAX: &str = "priceMax";
/// Query key for the lower size bound.
pub const KEY_SIZE_MIN: &str = "sizeMin";
/// Query key for the upper size bound.
pub const KEY_SIZE_MAX: &str = "sizeMax";
/// Query key for the comma-joined feature selection.
pub const KEY_FEATURES: &str = "features";

/// Encodes a filter state into ordered key/value pairs, eliding defaults.
///
/// Rules:
/// - `types`: present only if the selection is non-empty; comma-joined in
///   selection order
/// - `priceMin` / `priceMax`: present only when ≠ 100 / ≠ 10000
/// - `sizeMin` / `sizeMax`: present only when set; decimal string
/// - `features`: present only if non-empty; comma-joined
#[must_use]
pub fn encode(filters: &FilterState) -> Vec<(String, String)> {
    let mut pairs = Vec::new();

    if !filters.selected_types.is_empty() {
        pairs.push((KEY_TYPES.to_string(), filters.selected_types.join(",")));
    }
    if filters.price_min != PRICE_FLOOR {
        pairs.push((KEY_PRICE_MIN.to_string(), filters.price_min.to_string()));
    }
    if filters.price_max != PRICE_CEILING {
        pairs.push((KEY_PRICE_MAX.to_string(), filters.price_max.to_string()));
    }
    if let Some(min) = filters.size_min {
        pairs.push((KEY_SIZE_MIN.to_string(), min.to_string()));
    }
    if let Some(max) = filters.size_max {
        pairs.push((KEY_SIZE_MAX.to_string(), max.to_string()));
    }
    if !filters.selected_features.is_empty() {
        pairs.push((KEY_FEATURES.to_string(), filters.selected_features.join(",")));
    }

    pairs
}

/// Decodes key/value pairs into a filter state. Never fails.
///
/// Absent or invalid fields fall back to their defaults; see the module docs
/// for the tolerance rules. When a key appears more than once, the first
/// occurrence wins. The decoded state always satisfies the `FilterState`
/// invariants: the price pair is re-clamped through the mutation rule, and an
/// inconsistent incoming size pair drops its max side.
#[must_use]
pub fn decode(pairs: &[(String, String)]) -> FilterState {
    let lookup = |key: &str| pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str());

    let selected_types = lookup(KEY_TYPES).map(split_raw).unwrap_or_default();

    let price_min = lookup(KEY_PRICE_MIN)
        .and_then(|v| v.trim().parse::<u32>().ok())
        .unwrap_or(PRICE_FLOOR);
    let price_max = lookup(KEY_PRICE_MAX)
        .and_then(|v| v.trim().parse::<u32>().ok())
        .unwrap_or(PRICE_CEILING);

    let size_min = lookup(KEY_SIZE_MIN).and_then(|v| v.trim().parse::<u32>().ok());
    let size_max = lookup(KEY_SIZE_MAX).and_then(|v| v.trim().parse::<u32>().ok());

    // An inconsistent incoming pair never materializes: the later-conflicting
    // max side is treated as malformed and dropped.
    let size_max = match (size_min, size_max) {
        (Some(min), Some(max)) if min > max => None,
        (_, max) => max,
    };

    let selected_features = lookup(KEY_FEATURES)
        .map(|v| dedup(split_raw(v)))
        .unwrap_or_default();

    let state = FilterState {
        selected_types: vec![],
        size_min,
        size_max,
        selected_features,
        ..FilterState::default()
    }
    .with_price_range(price_min, price_max);

    // with_types collapses an incoming "All" (alone or mixed) to the empty set.
    state.with_types(&selected_types)
}

/// Renders ordered pairs as a flat query string (`k=v&k=v`).
///
/// The all-defaults state renders as the empty string.
#[must_use]
pub fn format_query(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// Parses a flat query string into ordered pairs.
///
/// Tolerant: empty segments are skipped, a segment without `=` becomes a key
/// with an empty value, and nothing is ever rejected.
#[must_use]
pub fn parse_query(query: &str) -> Vec<(String, String)> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut parts = segment.splitn(2, '=');
            let key = parts.next().unwrap_or("").to_string();
            let value = parts.next().unwrap_or("").to_string();
            (key, value)
        })
        .collect()
}

/// Splits a comma-joined value into non-empty trimmed labels, order preserved.
fn split_raw(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}

/// Deduplicates labels preserving first occurrence.
fn dedup(labels: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(labels.len());
    for label in labels {
        if !out.contains(&label) {
            out.push(label);
        }
    }
    out
}
