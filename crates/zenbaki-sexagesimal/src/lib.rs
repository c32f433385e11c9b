//! # zenbaki-sexagesimal
//!
//! Angles (or durations) written in degrees, minutes and seconds.
//!
//! A normalized [`Dms`] keeps `0 ≤ minutes < 60` and `0 ≤ seconds < 60`
//! with the sign on the whole angle. [`Unnormalized`] holds raw field
//! sums before base-60 carrying.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod dms;

#[cfg(test)]
mod proptests;

pub use dms::{
    decimal_to_dms, dms_to_decimal, try_decimal_to_dms, Dms, Unnormalized, MAX_DEGREES,
    SECONDS_DECIMALS,
};
