//! # zenbaki-units
//!
//! Unit conversion through a per-category "factor relative to the base
//! unit" table. Length, mass and volume follow the metric prefixes; time
//! uses the non-decimal factors 60, 3600, 86400 and 604800.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod table;

#[cfg(test)]
mod proptests;

pub use table::{convert, format_quantity, Category, Unit, RESULT_DECIMALS};
