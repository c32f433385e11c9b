//! # zenbaki-calculus
//!
//! Numeric calculus for the derivatives and integrals pages.
//!
//! This crate provides:
//! - [`Function`]: the fixed catalog (x², x³, sin, cos, eˣ, ln x, √x) with
//!   closed-form derivative and antiderivative
//! - [`definite_integral`]: `F(b) - F(a)` from the closed form
//! - [`riemann_sum`]: left/right/midpoint rectangle approximation
//! - [`sample_curve`]: plot sampling that breaks at non-evaluable points
//! - [`tangent_at`], [`polynomial_tangent`]: tangent lines for the derivatives page
//!
//! Every evaluation returns `Option<f64>`; `None` means the point lies
//! outside the function's domain.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod catalog;
pub mod definite;
pub mod plot;
pub mod riemann;

pub use catalog::Function;
pub use definite::{compare, definite_integral, Comparison};
pub use plot::{
    central_difference, polynomial_tangent, sample_curve, tangent_at, CurveSegment, TangentLine,
};
pub use riemann::{riemann_sum, Rectangle, RiemannRule, RiemannSum, MAX_SUBINTERVALS};
