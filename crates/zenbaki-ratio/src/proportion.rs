//! Proportional magnitudes.

use zenbaki_core::{approx_eq, MathError, MathResult};

/// How two magnitudes in a table relate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Proportionality {
    /// `y / x` is constant.
    Direct {
        /// The constant `k` in `y = k·x`.
        constant: f64,
    },
    /// `x · y` is constant.
    Inverse {
        /// The constant `k` in `x·y = k`.
        constant: f64,
    },
    /// Neither.
    None,
}

/// Direct rule of three: if `a` corresponds to `b`, `c` corresponds to
/// `b·c / a`.
///
/// # Errors
///
/// Returns [`MathError::ZeroReference`] if `a` is zero.
pub fn direct_rule_of_three(a: f64, b: f64, c: f64) -> MathResult<f64> {
    if a == 0.0 {
        return Err(MathError::ZeroReference);
    }
    Ok(b * c / a)
}

/// Inverse rule of three: if `a` corresponds to `b`, `c` corresponds to
/// `a·b / c`.
///
/// # Errors
///
/// Returns [`MathError::ZeroReference`] if `c` is zero.
pub fn inverse_rule_of_three(a: f64, b: f64, c: f64) -> MathResult<f64> {
    if c == 0.0 {
        return Err(MathError::ZeroReference);
    }
    Ok(a * b / c)
}

/// `percent`% of `total`.
#[must_use]
pub fn percent_of(percent: f64, total: f64) -> f64 {
    total * percent / 100.0
}

/// Applies an increase (positive) or decrease (negative) of `percent`%.
#[must_use]
pub fn apply_percent_change(value: f64, percent: f64) -> f64 {
    value * (1.0 + percent / 100.0)
}

/// Decides whether `pairs` of `(x, y)` are directly or inversely
/// proportional, comparing the constants within `epsilon`.
///
/// Tables with fewer than two pairs, or with a zero `x`, are
/// [`Proportionality::None`]. Direct is checked first.
#[must_use]
pub fn classify_table(pairs: &[(f64, f64)], epsilon: f64) -> Proportionality {
    if pairs.len() < 2 || pairs.iter().any(|(x, _)| *x == 0.0) {
        return Proportionality::None;
    }

    let (x0, y0) = pairs[0];
    let ratio = y0 / x0;
    if pairs.iter().all(|(x, y)| approx_eq(y / x, ratio, epsilon)) {
        return Proportionality::Direct { constant: ratio };
    }

    let product = x0 * y0;
    if pairs.iter().all(|(x, y)| approx_eq(x * y, product, epsilon)) {
        return Proportionality::Inverse { constant: product };
    }

    Proportionality::None
}
