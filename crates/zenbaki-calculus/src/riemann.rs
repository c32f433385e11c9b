//! Riemann sums.
//!
//! The interval `[a, b]` is cut into `n` equal sub-intervals and each one
//! contributes `f(sample) * Δx`. Sub-intervals where `f` is not evaluable
//! at the sample point contribute nothing and are counted in
//! [`RiemannSum::skipped`].

use zenbaki_core::{MathError, MathResult};

/// Largest number of sub-intervals [`riemann_sum`] accepts.
pub const MAX_SUBINTERVALS: usize = 10_000_000;

/// Where inside each sub-interval the function is sampled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RiemannRule {
    /// Left endpoint.
    Left,
    /// Right endpoint.
    Right,
    /// Midpoint.
    #[default]
    Midpoint,
}

impl RiemannRule {
    fn sample_point(self, left: f64, width: f64) -> f64 {
        match self {
            RiemannRule::Left => left,
            RiemannRule::Right => left + width,
            RiemannRule::Midpoint => left + width / 2.0,
        }
    }
}

/// One rectangle of the approximation, as drawn on the integrals page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rectangle {
    /// Left edge of the sub-interval.
    pub left: f64,
    /// Signed height `f(sample)`.
    pub height: f64,
}

/// Result of a Riemann sum.
#[derive(Clone, Debug, PartialEq)]
pub struct RiemannSum {
    /// Approximated integral.
    pub value: f64,
    /// Sub-interval width `Δx = (b - a) / n`.
    pub width: f64,
    /// Rectangles for evaluable sub-intervals.
    pub rectangles: Vec<Rectangle>,
    /// Number of sub-intervals skipped as not evaluable.
    pub skipped: usize,
}

/// Approximates `∫_a^b f(x) dx` with `n` rectangles.
///
/// # Errors
///
/// Returns [`MathError::NoSubintervals`] if `n == 0`,
/// [`MathError::TooManySubintervals`] above [`MAX_SUBINTERVALS`], and
/// [`MathError::NonFinite`] if a bound is NaN or infinite.
///
/// # Example
///
/// ```
/// use zenbaki_calculus::{riemann_sum, Function, RiemannRule};
///
/// let sum = riemann_sum(|x| Function::Square.eval(x), 0.0, 2.0, 100, RiemannRule::Midpoint).unwrap();
/// assert!((sum.value - 8.0 / 3.0).abs() < 1e-3);
/// ```
pub fn riemann_sum<F>(f: F, a: f64, b: f64, n: usize, rule: RiemannRule) -> MathResult<RiemannSum>
where
    F: Fn(f64) -> Option<f64>,
{
    if n == 0 {
        return Err(MathError::NoSubintervals);
    }
    if n > MAX_SUBINTERVALS {
        return Err(MathError::TooManySubintervals {
            got: n,
            limit: MAX_SUBINTERVALS,
        });
    }
    for bound in [a, b] {
        if !bound.is_finite() {
            return Err(MathError::NonFinite(bound));
        }
    }

    #[allow(clippy::cast_precision_loss)]
    let width = (b - a) / n as f64;
    let mut rectangles = Vec::with_capacity(n);
    let mut skipped = 0;
    let mut value = 0.0;

    for i in 0..n {
        #[allow(clippy::cast_precision_loss)]
        let left = a + i as f64 * width;
        match f(rule.sample_point(left, width)) {
            Some(height) => {
                value += height * width;
                rectangles.push(Rectangle { left, height });
            }
            None => skipped += 1,
        }
    }

    tracing::trace!(a, b, n, ?rule, value, skipped, "riemann sum");
    Ok(RiemannSum {
        value,
        width,
        rectangles,
        skipped,
    })
}
