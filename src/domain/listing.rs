//! Listing domain model.
//!
//! This module defines the core `Listing` type representing one rental property
//! record in the catalog. Listings are externally supplied, assumed well-formed,
//! and never mutated after load; the engine only reads them.

use serde::{Deserialize, Serialize};

/// Represents one rental property record in the catalog.
///
/// A listing is an immutable record supplied at startup. The filter engine
/// consumes `kind`, `price`, `size`, and `features`; the remaining fields are
/// opaque display data carried for the rendering layer.
///
/// # Fields
///
/// - `id`: Unique, stable identifier within the catalog
/// - `kind`: Type label (serialized as `type`), e.g. `"Studio"` or `"1BR"`
/// - `price`: Positive integer, currency units per month
/// - `size`: Positive integer, area units
/// - `features`: Set of feature labels; order is irrelevant
/// - `title`, `location`, `image`: Display-only fields, never filtered on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: String,
    pub price: u32,
    pub size: u32,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub image: String,
}

impl Listing {
    /// Creates a listing with the filterable fields set and display fields empty.
    ///
    /// Display fields (`title`, `location`, `image`) default to empty strings;
    /// catalogs loaded from JSON populate them directly.
    ///
    /// # Examples
    ///
    /// ```
    /// use rentlens::domain::Listing;
    ///
    /// let listing = Listing::new(1, "Studio", 2000, 400, &["Pool"]);
    /// assert_eq!(listing.kind, "Studio");
    /// assert_eq!(listing.features, vec!["Pool".to_string()]);
    /// ```
    #[must_use]
    pub fn new(id: u32, kind: &str, price: u32, size: u32, features: &[&str]) -> Self {
        Self {
            id,
            kind: kind.to_string(),
            price,
            size,
            features: features.iter().map(ToString::to_string).collect(),
            title: String::new(),
            location: String::new(),
            image: String::new(),
        }
    }

    /// Returns `true` if the listing carries the given feature label.
    #[must_use]
    pub fn has_feature(&self, label: &str) -> bool {
        self.features.iter().any(|f| f == label)
    }
}
