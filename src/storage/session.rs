//! Ephemeral per-session favourites store.
//!
//! Favourited listing ids live only for the duration of a session. The store
//! serializes to a flat JSON id array — the exact shape the host keeps in its
//! session storage slot — and restoring from a malformed snapshot degrades to
//! an empty store rather than an error.

use serde::{Deserialize, Serialize};

/// Insertion-ordered set of favourited listing ids for the current session.
///
/// Ids are unique; toggling flips membership. The store has no interaction
/// with the filter selection or the query encoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionFavorites {
    ids: Vec<u32>,
}

impl SessionFavorites {
    /// Flips the favourite flag for a listing.
    ///
    /// Returns the new membership state: `true` if the listing is now a
    /// favourite.
    pub fn toggle(&mut self, id: u32) -> bool {
        if let Some(pos) = self.ids.iter().position(|&existing| existing == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    /// Returns `true` if the listing is currently favourited.
    #[must_use]
    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    /// Favourited ids in insertion order.
    #[must_use]
    pub fn ids(&self) -> &[u32] {
        &self.ids
    }

    /// Serializes the store to the JSON id-array snapshot format.
    #[must_use]
    pub fn snapshot(&self) -> String {
        serde_json::to_string(&self.ids).unwrap_or_else(|_| "[]".to_string())
    }

    /// Restores a store from a snapshot, tolerating malformed text.
    ///
    /// Anything that does not parse as a JSON id array yields an empty store.
    #[must_use]
    pub fn restore(snapshot: &str) -> Self {
        let ids: Vec<u32> = serde_json::from_str(snapshot).unwrap_or_default();
        let mut store = Self::default();
        for id in ids {
            if !store.contains(id) {
                store.ids.push(id);
            }
        }
        store
    }
}
