//! Approximate comparison of floating-point values.

/// Tolerance used when a caller does not pick one.
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Returns true if `a` and `b` differ by at most `epsilon`.
///
/// NaN never compares equal to anything.
#[must_use]
pub fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() <= epsilon
}

/// Wraps a raw floating-point result, mapping NaN and infinities to `None`.
#[must_use]
pub fn finite(x: f64) -> Option<f64> {
    x.is_finite().then_some(x)
}

/// Rounds `x` to `decimals` places after the point.
#[must_use]
pub fn round_to(x: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (x * factor).round() / factor
}
