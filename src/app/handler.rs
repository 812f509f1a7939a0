//! Event handling and transition sequencing.
//!
//! This module implements the event handler that processes user edits,
//! external address changes, and settle-timer signals, translating them into
//! filter replacements and host actions. It is the single control-flow
//! coordinator for the engine.
//!
//! # Transition Rule
//!
//! Every event that replaces the filter selection follows the same sequence:
//!
//! 1. Build the candidate selection from the current one (functional update)
//! 2. If it equals the current selection, skip entirely
//! 3. Otherwise install it, re-project, re-encode the query, bump the
//!    generation, raise the busy flag
//! 4. Return `ReplaceQuery` and `ScheduleSettle` actions for the host
//!
//! The settle timer is cancellable by construction: the scheduled signal
//! carries its generation, and [`AppState::settle`] discards any signal whose
//! generation is no longer current.

use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::filter::{codec, RangeSide};

/// Events triggered by user edits, the host, or timer callbacks.
///
/// Each event represents a discrete occurrence. The handler processes them
/// sequentially and to completion, so state transitions are deterministic and
/// no event ever observes a half-applied edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Replaces the type selection. The "All" marker anywhere collapses the
    /// selection to the canonical unrestricted empty set.
    SetTypes(Vec<String>),
    /// Flips membership of a single type label.
    ToggleType(String),
    /// Replaces the required-feature selection (conjunctive).
    SetFeatures(Vec<String>),
    /// Flips membership of a single feature label.
    ToggleFeature(String),
    /// Replaces the price range; bounds are clamped against each other.
    SetPriceRange {
        /// Requested lower bound.
        min: u32,
        /// Requested upper bound.
        max: u32,
    },
    /// Edits one size bound from raw text input.
    ///
    /// Blank clears the bound; non-numeric or inconsistent input is a silent
    /// no-op that retains the previous state.
    SetSizeBound {
        /// Which end of the range the edit targets.
        side: RangeSide,
        /// Raw text as typed by the user.
        raw: String,
    },
    /// Returns the selection to the canonical default tuple.
    ResetFilters,

    /// The session address changed externally; decode and adopt its encoding.
    QueryChanged {
        /// Ordered key/value pairs from the new address.
        pairs: Vec<(String, String)>,
    },

    /// The settle timer for a transition elapsed.
    ///
    /// Honoured only when `generation` still identifies the current
    /// transition; signals from superseded transitions are discarded.
    SettleElapsed {
        /// Generation token the timer was armed with.
        generation: u64,
    },

    /// Flips the per-session favourite flag for a listing.
    ToggleFavorite {
        /// Listing id to toggle.
        id: u32,
    },
}

/// Processes an event, mutates application state, and returns actions to
/// execute.
///
/// Returns `(should_render, actions)`: `should_render` tells the host whether
/// visible output changed; the actions publish the query encoding and arm the
/// settle timer. Malformed input never produces an error — it degrades to a
/// no-op per the mutation contract — so the `Result` covers future host-level
/// failures only.
///
/// # Errors
///
/// Currently infallible; the signature matches the host boundary.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::SetTypes(labels) => {
            let next = state.filters.with_types(labels);
            Ok(transition(state, next))
        }
        Event::ToggleType(label) => {
            let next = state.filters.toggle_type(label);
            Ok(transition(state, next))
        }
        Event::SetFeatures(labels) => {
            let next = state.filters.with_features(labels);
            Ok(transition(state, next))
        }
        Event::ToggleFeature(label) => {
            let next = state.filters.toggle_feature(label);
            Ok(transition(state, next))
        }
        Event::SetPriceRange { min, max } => {
            let next = state.filters.with_price_range(*min, *max);
            Ok(transition(state, next))
        }
        Event::SetSizeBound { side, raw } => {
            match state.filters.with_size_bound(*side, raw) {
                Some(next) => Ok(transition(state, next)),
                None => {
                    // Rejected input surfaces as a no-op, not an error dialog.
                    tracing::debug!(side = ?side, raw = %raw, "size bound rejected, state retained");
                    Ok((false, vec![]))
                }
            }
        }
        Event::ResetFilters => Ok(transition(state, state.filters.reset())),
        Event::QueryChanged { pairs } => Ok(transition(state, codec::decode(pairs))),
        Event::SettleElapsed { generation } => Ok((state.settle(*generation), vec![])),
        Event::ToggleFavorite { id } => {
            let favorited = state.favorites.toggle(*id);
            tracing::debug!(listing_id = id, favorited, "favourite toggled");
            Ok((true, vec![]))
        }
    }
}

/// Runs the shared transition sequence for a candidate selection.
///
/// Skips entirely when nothing changed; otherwise replaces the state and
/// returns the query-publication and settle-timer actions.
fn transition(state: &mut AppState, next: crate::filter::FilterState) -> (bool, Vec<Action>) {
    if !state.replace_filters(next) {
        return (false, vec![]);
    }

    let actions = vec![
        Action::ReplaceQuery {
            pairs: state.query.clone(),
        },
        Action::ScheduleSettle {
            generation: state.generation,
            delay_ms: state.settle_delay_ms,
        },
    ];
    (true, actions)
}
