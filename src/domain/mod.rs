//! Core domain types shared across the engine.
//!
//! This module groups the types every other layer depends on: the immutable
//! [`Listing`] record and the centralized error type. Nothing in here performs
//! I/O or holds mutable state.

pub mod error;
pub mod listing;

pub use error::{RentlensError, Result};
pub use listing::Listing;
