//! Filter state, match predicate, result projection, and query codec.
//!
//! This is the core of the engine. [`FilterState`] is the canonical selection,
//! [`project`] derives the visible listing sequence from it, and [`codec`]
//! maps it to and from the flat query encoding with default-elision.
//!
//! # Round-Trip Law
//!
//! For every state reachable through the mutation operations,
//! `codec::decode(&codec::encode(&s)) == s`. The reverse direction only
//! normalizes: an incoming `types=All` or `priceMin=100` is elided away on
//! re-encode, leaving a semantically equivalent encoding.

pub mod codec;
pub mod state;

pub use state::{project, FilterState, RangeSide, PRICE_CEILING, PRICE_FLOOR};

#[cfg(test)]
mod codec_tests;
