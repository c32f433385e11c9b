//! # zenbaki-core
//!
//! Pieces shared by every zenbaki topic crate:
//! - [`MathError`] for contract violations (bad coefficient lists, unknown units, ...)
//! - approximate comparison of reals
//! - number formatting for prompts and worked solutions
//!
//! Domain violations such as `ln(-1)` are not errors here. Topic crates
//! return `Option<f64>` for those, `None` meaning "not evaluable".

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod approx;
pub mod error;
pub mod format;

pub use approx::{approx_eq, finite, round_to, DEFAULT_EPSILON};
pub use error::{MathError, MathResult};
pub use format::{format_number, format_signed, superscript};
