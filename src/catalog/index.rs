//! Facet vocabulary derivation from the raw catalog.
//!
//! This module computes the [`CatalogIndex`]: the ordered set of distinct
//! listing types (with a synthetic leading "All" marker) and the sorted set of
//! distinct feature labels. The index is derived once from the catalog and is
//! immutable thereafter — it only changes if the catalog itself changes, which
//! never happens after load.

use crate::domain::Listing;

/// Synthetic type marker meaning "no type restriction".
///
/// The marker exists only at the selection-UI and codec boundaries. Inside
/// [`FilterState`](crate::filter::FilterState) the unrestricted case is always
/// the canonical empty set, never this sentinel.
pub const TYPE_ALL: &str = "All";

/// Derived, read-only facet vocabularies offered to the user.
///
/// # Fields
///
/// - `types`: `["All"]` followed by distinct type labels in first-seen catalog order
/// - `features`: distinct feature labels across the whole catalog, lexicographically sorted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogIndex {
    pub types: Vec<String>,
    pub features: Vec<String>,
}

impl CatalogIndex {
    /// Derives the facet vocabularies from the full listing sequence.
    ///
    /// No errors are possible: an empty catalog yields `types = ["All"]` and
    /// `features = []`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rentlens::catalog::CatalogIndex;
    /// use rentlens::domain::Listing;
    ///
    /// let catalog = vec![
    ///     Listing::new(1, "Studio", 2000, 400, &["Pool"]),
    ///     Listing::new(2, "1BR", 3000, 650, &["Gym", "Pool"]),
    /// ];
    /// let index = CatalogIndex::from_listings(&catalog);
    /// assert_eq!(index.types, vec!["All", "Studio", "1BR"]);
    /// assert_eq!(index.features, vec!["Gym", "Pool"]);
    /// ```
    #[must_use]
    pub fn from_listings(catalog: &[Listing]) -> Self {
        let mut types = vec![TYPE_ALL.to_string()];
        for listing in catalog {
            if !types.iter().any(|t| t == &listing.kind) {
                types.push(listing.kind.clone());
            }
        }

        let mut features: Vec<String> = Vec::new();
        for listing in catalog {
            for feature in &listing.features {
                if !features.iter().any(|f| f == feature) {
                    features.push(feature.clone());
                }
            }
        }
        features.sort();

        tracing::debug!(
            type_count = types.len() - 1,
            feature_count = features.len(),
            "catalog index derived"
        );

        Self { types, features }
    }
}
