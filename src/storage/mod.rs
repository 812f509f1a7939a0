//! Session-scoped persistence.
//!
//! The only stored state in the engine is the ephemeral favourites set; the
//! catalog is read-only and the filter selection persists exclusively through
//! the query encoding.

pub mod session;

pub use session::SessionFavorites;
