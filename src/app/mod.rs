//! Application layer: state container, events, actions, and the handler.
//!
//! This layer wires the pure filter core to an event-driven host. Events flow
//! in ([`Event`]), the handler replaces the selection and re-projects, and
//! actions flow out ([`Action`]) for the host to execute. All processing is
//! single-threaded and run-to-completion; the only asynchrony is the settle
//! timer the host arms on the engine's behalf.

pub mod actions;
pub mod handler;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use state::{AppState, DEFAULT_SETTLE_DELAY_MS};
