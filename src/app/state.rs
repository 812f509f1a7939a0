//! Application state container and result projection.
//!
//! This module defines [`AppState`], the central state container for the
//! engine: the immutable catalog and its derived index, the current
//! [`FilterState`], the projected visible sequence, the published query
//! encoding, and the busy/settled transition bookkeeping.
//!
//! # Architecture
//!
//! `AppState` separates core data (the catalog, loaded once and never
//! mutated) from derived state (index, visible listings, query encoding) to
//! keep transitions consistent. The filter selection is replaced wholesale on
//! every edit — never partially mutated from outside — which is what makes
//! diffing old against new trivial and keeps readers from observing a
//! half-updated selection.
//!
//! # Transition Bookkeeping
//!
//! Every filter replacement bumps a monotonic `generation` token and raises
//! `busy`. The settle signal scheduled for a transition carries its
//! generation; signals from superseded transitions are discarded, so only the
//! last transition's settle is ever observed.

use crate::catalog::CatalogIndex;
use crate::domain::Listing;
use crate::filter::{self, codec, FilterState};
use crate::storage::SessionFavorites;

/// Default cosmetic delay before the settled signal, in milliseconds.
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 300;

/// Central state container for the filter engine.
///
/// Created once per session from the catalog and the query encoding present
/// at load time; replaced filter selections flow through
/// [`handle_event`](crate::app::handle_event).
#[derive(Debug, Clone)]
pub struct AppState {
    /// The raw catalog, supplied at startup and never mutated.
    pub catalog: Vec<Listing>,

    /// Facet vocabularies derived once from the catalog.
    pub index: CatalogIndex,

    /// The canonical current filter selection.
    pub filters: FilterState,

    /// Listings matching the current selection, in catalog order.
    ///
    /// Recomputed by `apply_filters()` after every selection replacement.
    pub visible: Vec<Listing>,

    /// The published query encoding for the current selection.
    ///
    /// Defaults are elided, so the all-defaults state publishes the empty
    /// mapping.
    pub query: Vec<(String, String)>,

    /// Whether the UI should show interim feedback for an in-flight transition.
    ///
    /// Raised on every selection replacement, lowered when the matching
    /// generation's settle signal arrives.
    pub busy: bool,

    /// Monotonic transition counter; identifies the settle timer that is
    /// still allowed to fire.
    pub generation: u64,

    /// Ephemeral per-session favourite listing ids.
    pub favorites: SessionFavorites,

    /// Cosmetic settle delay handed to the host with each transition.
    pub settle_delay_ms: u64,
}

impl AppState {
    /// Creates a session state with default filters.
    ///
    /// The catalog index is derived immediately and the default selection is
    /// projected, so `visible` starts as the full catalog.
    #[must_use]
    pub fn new(catalog: Vec<Listing>) -> Self {
        Self::with_query(catalog, &[])
    }

    /// Creates a session state by decoding the query encoding present at load
    /// time.
    ///
    /// Decoding is total: absent or invalid fields fall back to defaults, so
    /// this never fails whatever the incoming address looks like.
    #[must_use]
    pub fn with_query(catalog: Vec<Listing>, pairs: &[(String, String)]) -> Self {
        let index = CatalogIndex::from_listings(&catalog);
        let filters = codec::decode(pairs);
        let query = codec::encode(&filters);

        let mut state = Self {
            catalog,
            index,
            filters,
            visible: vec![],
            query,
            busy: false,
            generation: 0,
            favorites: SessionFavorites::default(),
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
        };
        state.apply_filters();
        state
    }

    /// Recomputes the visible listing sequence from the current selection.
    ///
    /// Order-preserving and side-effect free apart from the state field it
    /// fills; safe to call on every transition.
    pub fn apply_filters(&mut self) {
        let _span = tracing::debug_span!(
            "apply_filters",
            catalog_size = self.catalog.len(),
            active = self.filters.has_active_filters()
        )
        .entered();

        self.visible = filter::project(&self.catalog, &self.filters);

        tracing::debug!(visible_count = self.visible.len(), "projection recomputed");
    }

    /// Replaces the filter selection wholesale, if it actually changed.
    ///
    /// Returns `false` and leaves everything untouched when the new selection
    /// equals the current one. Otherwise installs it, re-projects, re-encodes
    /// the query, bumps the generation, and raises the busy flag.
    pub fn replace_filters(&mut self, next: FilterState) -> bool {
        if next == self.filters {
            tracing::debug!("filters unchanged, skipping transition");
            return false;
        }

        self.filters = next;
        self.apply_filters();
        self.query = codec::encode(&self.filters);
        self.generation += 1;
        self.busy = true;

        tracing::debug!(
            generation = self.generation,
            visible_count = self.visible.len(),
            query = %codec::format_query(&self.query),
            "transition started"
        );
        true
    }

    /// Lowers the busy flag if the settle signal belongs to the current
    /// transition.
    ///
    /// Returns `true` only when the generation matches and the flag was
    /// raised; stale signals from superseded transitions are discarded.
    pub fn settle(&mut self, generation: u64) -> bool {
        if generation == self.generation && self.busy {
            self.busy = false;
            tracing::debug!(generation, "transition settled");
            true
        } else {
            tracing::debug!(
                stale_generation = generation,
                current_generation = self.generation,
                "discarding stale settle signal"
            );
            false
        }
    }
}
