//! Definite integrals from the closed-form antiderivative.

use zenbaki_core::MathResult;

use crate::riemann::{riemann_sum, RiemannRule};
use crate::Function;

/// Computes `∫_a^b f(x) dx = F(b) - F(a)`.
///
/// Returns `None` when either bound lies outside the antiderivative's
/// domain.
#[must_use]
pub fn definite_integral(f: Function, a: f64, b: f64) -> Option<f64> {
    Some(f.antiderivative(b)? - f.antiderivative(a)?)
}

/// Closed-form value against a rectangle approximation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Comparison {
    /// `F(b) - F(a)`.
    pub exact: f64,
    /// Riemann approximation.
    pub approximation: f64,
    /// `|exact - approximation|`.
    pub error: f64,
    /// Sub-interval count used.
    pub subintervals: usize,
}

/// Compares the exact integral with an `n`-rectangle approximation.
///
/// Returns `Ok(None)` when the closed form is not evaluable on `[a, b]`.
///
/// # Errors
///
/// Propagates [`riemann_sum`] errors (`n == 0`, non-finite bounds).
pub fn compare(
    f: Function,
    a: f64,
    b: f64,
    n: usize,
    rule: RiemannRule,
) -> MathResult<Option<Comparison>> {
    let approximation = riemann_sum(|x| f.eval(x), a, b, n, rule)?.value;
    Ok(definite_integral(f, a, b).map(|exact| Comparison {
        exact,
        approximation,
        error: (exact - approximation).abs(),
        subintervals: n,
    }))
}
