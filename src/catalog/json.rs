//! JSON file-based catalog loading.
//!
//! This module reads the raw catalog — an ordered sequence of listing records —
//! from a human-readable JSON file. The catalog is loaded exactly once at
//! startup; the engine treats it as pre-validated and never writes it back.
//!
//! # File Format
//!
//! ```json
//! [
//!   {
//!     "id": 1,
//!     "type": "Studio",
//!     "price": 2000,
//!     "size": 400,
//!     "features": ["Pool"],
//!     "title": "Sunny studio",
//!     "location": "San Francisco",
//!     "image": "https://example.com/1.jpg"
//!   }
//! ]
//! ```

use crate::domain::error::{RentlensError, Result};
use crate::domain::Listing;
use std::path::Path;

/// Loads the catalog from a JSON file.
///
/// Listing order in the file is preserved; projection results keep this
/// relative order.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The contents are not a JSON array of listing records
///
/// # Examples
///
/// ```no_run
/// use rentlens::catalog::load_catalog;
///
/// let catalog = load_catalog("properties.json")?;
/// # Ok::<(), rentlens::domain::RentlensError>(())
/// ```
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<Listing>> {
    let path = path.as_ref();
    tracing::debug!(path = ?path, "loading catalog");

    let contents = std::fs::read_to_string(path)?;
    let catalog: Vec<Listing> = serde_json::from_str(&contents)
        .map_err(|e| RentlensError::Catalog(format!("failed to parse JSON: {e}")))?;

    tracing::debug!(listing_count = catalog.len(), "catalog loaded");
    Ok(catalog)
}
