//! # zenbaki-poly
//!
//! Univariate polynomials with real coefficients.
//!
//! This crate provides:
//! - [`Polynomial`]: coefficient list, most significant term first
//! - Addition, subtraction and schoolbook multiplication
//! - Horner evaluation and human-readable formatting
//! - Ruffini's rule ([`Polynomial::synthetic_division`]) and integer root search
//!
//! ## Representation
//!
//! A polynomial of degree `d` always stores `d + 1` coefficients. Zero
//! leading coefficients produced by arithmetic are kept; dropping them is
//! a display concern handled by the `Display` impl.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod polynomial;
pub mod roots;
pub mod ruffini;

#[cfg(test)]
mod proptests;

pub use polynomial::Polynomial;
pub use roots::{factor_integer_roots, integer_root_candidates, Factorization, MAX_ROOT_CONSTANT};
pub use ruffini::Division;
