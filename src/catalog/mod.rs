//! Catalog loading and facet vocabulary derivation.
//!
//! The catalog is a static, already-validated list of listing records supplied
//! at startup. This module loads it from JSON ([`load_catalog`]) and derives
//! the read-only [`CatalogIndex`] of selectable types and features.

pub mod index;
pub mod json;

pub use index::{CatalogIndex, TYPE_ALL};
pub use json::load_catalog;
