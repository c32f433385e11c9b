//! # zenbaki-vector
//!
//! Two-dimensional vectors with the operations used on the vectors page:
//! sum, difference, scaling, dot product, magnitude and direction angle.
//!
//! Every operation is total over finite inputs and returns a fresh value.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod vector;

#[cfg(test)]
mod proptests;

pub use vector::Vector2;
