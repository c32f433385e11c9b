//! Arithmetic and geometric progressions for the sequences page.
//!
//! Terms are 1-indexed: `nth_term(1)` is the first term and `sum_first(n)`
//! adds terms `1..=n`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod classify;
pub mod progression;

#[cfg(test)]
mod proptests;

pub use classify::{classify, Classification, MIN_CLASSIFY_TERMS};
pub use progression::{Arithmetic, Geometric, Progression};
