//! Canonical filter selection and the pure match predicate.
//!
//! This module defines [`FilterState`], the single source of truth for the
//! current filter selection, together with its functional mutation operations
//! and the predicate that decides whether a listing matches it.
//!
//! # Mutation Contract
//!
//! Every edit operation takes `&self` and produces a fresh state; shared state
//! is never mutated in place. This is what lets the transition controller diff
//! old against new, and guarantees concurrent readers never observe a
//! half-updated selection.
//!
//! # Canonical Representation
//!
//! The "All" type sentinel shown in the UI is collapsed at this boundary:
//! inside `FilterState` the unrestricted case is always the empty set. The
//! sentinel reappears only in the query codec and the catalog index.

use crate::catalog::TYPE_ALL;
use crate::domain::Listing;

/// Lowest selectable monthly price.
pub const PRICE_FLOOR: u32 = 100;

/// Highest selectable monthly price.
pub const PRICE_CEILING: u32 = 10_000;

/// Which end of the size range an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeSide {
    /// The lower bound (`size_min`).
    Min,
    /// The upper bound (`size_max`).
    Max,
}

/// The canonical current filter selection.
///
/// Replaced wholesale on every user edit; see the module docs for the
/// mutation contract. The default value is the "no active filters" state and
/// is reachable both initially and via [`FilterState::reset`].
///
/// # Invariants
///
/// - `price_min <= price_max` after every operation, enforced at the point of
///   mutation rather than checked after the fact
/// - `selected_types` and `selected_features` are deduplicated and hold no
///   "All" sentinel
/// - `size_min`/`size_max`, when both set, satisfy `size_min <= size_max`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    /// Type labels the user has explicitly chosen, in selection order.
    ///
    /// Empty is a distinct, meaningful value: no explicit restriction, so all
    /// types pass.
    pub selected_types: Vec<String>,

    /// Lower price bound, inclusive. Always concrete; defaults to [`PRICE_FLOOR`].
    pub price_min: u32,

    /// Upper price bound, inclusive. Always concrete; defaults to [`PRICE_CEILING`].
    pub price_max: u32,

    /// Lower size bound, inclusive. `None` means unbounded below.
    pub size_min: Option<u32>,

    /// Upper size bound, inclusive. `None` means unbounded above.
    pub size_max: Option<u32>,

    /// Feature labels a listing must *all* carry, in selection order.
    ///
    /// Conjunctive: empty means unrestricted, no sentinel needed.
    pub selected_features: Vec<String>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            selected_types: vec![],
            price_min: PRICE_FLOOR,
            price_max: PRICE_CEILING,
            size_min: None,
            size_max: None,
            selected_features: vec![],
        }
    }
}

impl FilterState {
    /// Returns `true` if any field differs from its default.
    #[must_use]
    pub fn has_active_filters(&self) -> bool {
        *self != Self::default()
    }

    /// Decides whether a listing matches the current selection.
    ///
    /// The predicate is the conjunction of four independent sub-predicates,
    /// all of which must hold:
    ///
    /// 1. **Type**: `selected_types` is empty, or contains the listing's type
    /// 2. **Price**: `price_min <= listing.price <= price_max` (always evaluated)
    /// 3. **Size**: each set bound is honoured; an unset side is unbounded
    /// 4. **Features**: every selected feature is present on the listing
    ///    (set containment, explicitly not "any of")
    #[must_use]
    pub fn matches(&self, listing: &Listing) -> bool {
        let type_ok =
            self.selected_types.is_empty() || self.selected_types.iter().any(|t| t == &listing.kind);

        let price_ok = listing.price >= self.price_min && listing.price <= self.price_max;

        let size_ok = self.size_min.map_or(true, |min| listing.size >= min)
            && self.size_max.map_or(true, |max| listing.size <= max);

        let features_ok = self
            .selected_features
            .iter()
            .all(|feature| listing.has_feature(feature));

        type_ok && price_ok && size_ok && features_ok
    }

    /// Returns a state with the type selection replaced.
    ///
    /// If `labels` contains the "All" marker anywhere, the result is the
    /// canonical unrestricted empty set. Otherwise labels are deduplicated
    /// preserving first occurrence.
    #[must_use]
    pub fn with_types<S: AsRef<str>>(&self, labels: &[S]) -> Self {
        let selected_types = if labels.iter().any(|l| l.as_ref() == TYPE_ALL) {
            vec![]
        } else {
            dedup_preserving_order(labels)
        };
        Self {
            selected_types,
            ..self.clone()
        }
    }

    /// Returns a state with membership of a single type flipped.
    ///
    /// Toggling the "All" marker clears the selection. If the resulting set
    /// becomes empty, the canonical empty-set form is used; no residual
    /// sentinel is stored.
    #[must_use]
    pub fn toggle_type(&self, label: &str) -> Self {
        if label == TYPE_ALL {
            return Self {
                selected_types: vec![],
                ..self.clone()
            };
        }
        Self {
            selected_types: toggle_membership(&self.selected_types, label),
            ..self.clone()
        }
    }

    /// Returns a state with the feature selection replaced (deduplicated).
    #[must_use]
    pub fn with_features<S: AsRef<str>>(&self, labels: &[S]) -> Self {
        Self {
            selected_features: dedup_preserving_order(labels),
            ..self.clone()
        }
    }

    /// Returns a state with membership of a single feature flipped.
    #[must_use]
    pub fn toggle_feature(&self, label: &str) -> Self {
        Self {
            selected_features: toggle_membership(&self.selected_features, label),
            ..self.clone()
        }
    }

    /// Returns a state with the price range replaced, clamped to stay valid.
    ///
    /// The two bounds are clamped against each other, never independently:
    /// `min` is clamped against `max` and into the selectable span first, then
    /// `max` to `[min', PRICE_CEILING]`. The invariant `price_min <= price_max`
    /// holds after every call even under out-of-order input — `(9000, 500)`
    /// yields `(500, 500)`, not a swap.
    #[must_use]
    pub fn with_price_range(&self, min: u32, max: u32) -> Self {
        let price_min = min.min(max).clamp(PRICE_FLOOR, PRICE_CEILING);
        let price_max = max.max(price_min).min(PRICE_CEILING);
        Self {
            price_min,
            price_max,
            ..self.clone()
        }
    }

    /// Returns a state with one size bound replaced, or `None` if the input
    /// is rejected.
    ///
    /// - Blank input clears the bound for that side (`Some`, bound absent)
    /// - Non-numeric input is rejected: `None`, caller keeps the prior state
    /// - A numeric value that would make `size_min > size_max` against the
    ///   other bound as it stands right now is rejected the same way
    ///
    /// Rejection is a silent no-op at the caller, not an error. Because every
    /// entry is validated against the other bound at entry time, a stored pair
    /// can never become inconsistent later.
    #[must_use]
    pub fn with_size_bound(&self, side: RangeSide, raw: &str) -> Option<Self> {
        let raw = raw.trim();

        if raw.is_empty() {
            let mut next = self.clone();
            match side {
                RangeSide::Min => next.size_min = None,
                RangeSide::Max => next.size_max = None,
            }
            return Some(next);
        }

        let value: u32 = raw.parse().ok()?;

        match side {
            RangeSide::Min => {
                if self.size_max.is_some_and(|max| value > max) {
                    return None;
                }
                Some(Self {
                    size_min: Some(value),
                    ..self.clone()
                })
            }
            RangeSide::Max => {
                if self.size_min.is_some_and(|min| value < min) {
                    return None;
                }
                Some(Self {
                    size_max: Some(value),
                    ..self.clone()
                })
            }
        }
    }

    /// Returns the canonical default tuple verbatim.
    #[must_use]
    pub fn reset(&self) -> Self {
        Self::default()
    }
}

/// Applies the filter selection to the catalog, preserving relative order.
///
/// Returns every matching listing — no pagination, no implicit cap. The
/// function is deterministic and side-effect free; the catalog is never
/// reordered or mutated, so it is safe to recompute on every state change.
#[must_use]
pub fn project(catalog: &[Listing], filters: &FilterState) -> Vec<Listing> {
    catalog
        .iter()
        .filter(|listing| filters.matches(listing))
        .cloned()
        .collect()
}

/// Deduplicates labels preserving first occurrence order.
fn dedup_preserving_order<S: AsRef<str>>(labels: &[S]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(labels.len());
    for label in labels {
        if !out.iter().any(|existing| existing == label.as_ref()) {
            out.push(label.as_ref().to_string());
        }
    }
    out
}

/// Flips membership of `label` in `set`, preserving the order of the rest.
fn toggle_membership(set: &[String], label: &str) -> Vec<String> {
    if set.iter().any(|existing| existing == label) {
        set.iter().filter(|e| e.as_str() != label).cloned().collect()
    } else {
        let mut out = set.to_vec();
        out.push(label.to_string());
        out
    }
}
