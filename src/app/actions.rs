//! Actions representing side effects to be executed by the host runtime.
//!
//! This module defines the [`Action`] type, the imperative commands produced by
//! the event handler after processing a state transition. Actions bridge pure
//! state replacement and the effectful world of the host: publishing the query
//! encoding to the address bar and arming the settle timer.
//!
//! The event handler returns a `Vec<Action>` after each event; the host
//! executes them in sequence. The engine itself performs no I/O.

/// Commands representing side effects to be executed by the host runtime.
///
/// Actions are produced by [`handle_event`](crate::app::handle_event) and
/// executed by whatever runtime embeds the engine (browser shell, CLI shim,
/// test harness).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Publishes a new query encoding for the session's navigable address.
    ///
    /// The host must *replace* the current address, never append to history,
    /// so that repeated edits do not accumulate history entries.
    ReplaceQuery {
        /// Ordered key/value pairs, defaults already elided.
        pairs: Vec<(String, String)>,
    },

    /// Arms the settle timer for a transition.
    ///
    /// After `delay_ms` the host must feed back
    /// [`Event::SettleElapsed`](crate::app::Event::SettleElapsed) carrying the
    /// same generation. The handler discards the signal if a newer transition
    /// has started in the meantime, so the host never needs to cancel timers
    /// itself — last transition wins.
    ScheduleSettle {
        /// Generation token identifying the transition this timer belongs to.
        generation: u64,
        /// Cosmetic delay before the settled signal, in milliseconds.
        delay_ms: u64,
    },
}
