//! Rentlens: a filter-state engine for rental listing catalogs.
//!
//! Rentlens narrows a fixed in-memory catalog of rental listings by type,
//! price range, size range, and amenity features, and keeps the current
//! selection synchronized with a shareable, reloadable query-string encoding.
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host Shim (main.rs / embedding runtime)            │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Transition rule
//! │  - Action dispatching                               │
//! │  - Result projection into state                     │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Filter Core   │   │ Catalog Layer │   │ Storage Layer │
//! │ (filter/)     │   │ (catalog/)    │   │ (storage/)    │
//! │ - FilterState │   │ - JSON load   │   │ - Session     │
//! │ - Predicate   │   │ - Facet index │   │   favourites  │
//! │ - Query codec │   │               │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Observability Layers                      │
//! │  - Listing model, error types (domain/)             │
//! │  - Tracing setup (observability/)                   │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Data Flow
//!
//! 1. The catalog is loaded once and [`CatalogIndex`](catalog::CatalogIndex)
//!    is derived from it.
//! 2. [`AppState`] is initialized by decoding the query encoding present at
//!    load time (or defaults).
//! 3. Every user edit flows through [`handle_event`] as an [`Event`],
//!    producing a wholesale-replaced [`FilterState`].
//! 4. The new selection is re-encoded into the query ([`Action::ReplaceQuery`],
//!    replace-not-append) and re-projected against the catalog.
//! 5. A cancellable settle timer ([`Action::ScheduleSettle`]) smooths the UI:
//!    only the latest transition's settled signal is ever observed.
//!
//! # Example
//!
//! ```
//! use rentlens::{handle_event, AppState, Event};
//! use rentlens::domain::Listing;
//! use rentlens::filter::codec;
//!
//! let catalog = vec![
//!     Listing::new(1, "Studio", 2000, 400, &["Pool"]),
//!     Listing::new(2, "1BR", 3000, 650, &["Gym", "Pool"]),
//! ];
//!
//! // Initialize from an incoming shared address
//! let pairs = codec::parse_query("types=1BR");
//! let mut state = AppState::with_query(catalog, &pairs);
//! assert_eq!(state.visible.len(), 1);
//!
//! // A user edit replaces the selection and republishes the query
//! let (should_render, actions) =
//!     handle_event(&mut state, &Event::ToggleFeature("Gym".to_string()))?;
//! assert!(should_render);
//! assert_eq!(actions.len(), 2);
//! # Ok::<(), rentlens::RentlensError>(())
//! ```
//!
//! # Key Design Decisions
//!
//! ## Canonical Empty Set
//!
//! The "All" type sentinel shown to users exists only at the codec and index
//! boundaries. Inside [`FilterState`](filter::FilterState) the unrestricted
//! case is always the empty set, removing the "is it All or is it []"
//! ambiguity wholesale.
//!
//! ## Functional State Replacement
//!
//! Every mutation takes the current selection and returns a new one; the
//! handler replaces the whole value. This keeps the round-trip and
//! monotonicity properties straightforward to test and lets the transition
//! controller diff old against new.
//!
//! ## Generation-Token Settle Timer
//!
//! The busy/settled signal is cosmetic, not a real computation. It is modelled
//! as a timer keyed by a monotonic generation token: a settle signal whose
//! generation is no longer current is discarded, so rapid edits collapse to a
//! single observed settle without the host cancelling anything.

pub mod app;
pub mod catalog;
pub mod domain;
pub mod filter;
pub mod storage;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, DEFAULT_SETTLE_DELAY_MS};
pub use domain::{Listing, RentlensError, Result};
pub use filter::FilterState;

use serde::Deserialize;
use std::path::Path;

/// Host configuration for the engine shim.
///
/// All fields are optional in the TOML form and fall back to defaults:
///
/// ```toml
/// settle_delay_ms = 300
/// trace_level = "debug"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Cosmetic delay before the settled signal, in milliseconds.
    pub settle_delay_ms: u64,

    /// Tracing level for the subscriber, e.g. `"info"` or `"debug"`.
    ///
    /// `None` defers to the `RUST_LOG` environment variable.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            trace_level: None,
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML for
    /// this shape. Missing keys fall back to defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        toml::from_str(&contents)
            .map_err(|e| RentlensError::Config(format!("failed to parse TOML: {e}")))
    }
}

/// Initializes a session from the catalog, incoming query pairs, and config.
///
/// Convenience wrapper over [`AppState::with_query`] that applies the
/// configured settle delay.
#[must_use]
pub fn initialize(config: &Config, catalog: Vec<Listing>, pairs: &[(String, String)]) -> AppState {
    tracing::debug!(
        listing_count = catalog.len(),
        settle_delay_ms = config.settle_delay_ms,
        "initializing rentlens session"
    );

    let mut state = AppState::with_query(catalog, pairs);
    state.settle_delay_ms = config.settle_delay_ms;
    state
}
