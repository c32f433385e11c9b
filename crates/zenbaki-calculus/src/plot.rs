//! Sampling helpers for the interactive graphs.

use zenbaki_core::{finite, MathError, MathResult};
use zenbaki_poly::Polynomial;

use crate::Function;

/// A run of consecutive plottable points.
pub type CurveSegment = Vec<(f64, f64)>;

/// Samples `f` at `steps + 1` evenly spaced points over `[from, to]`.
///
/// The curve is split wherever `f` is not evaluable, so the caller never
/// draws a line across a hole in the domain.
///
/// # Errors
///
/// Returns [`MathError::NoSubintervals`] if `steps == 0`.
pub fn sample_curve<F>(f: F, from: f64, to: f64, steps: usize) -> MathResult<Vec<CurveSegment>>
where
    F: Fn(f64) -> Option<f64>,
{
    if steps == 0 {
        return Err(MathError::NoSubintervals);
    }

    #[allow(clippy::cast_precision_loss)]
    let dx = (to - from) / steps as f64;
    let mut segments = Vec::new();
    let mut current = CurveSegment::new();

    for i in 0..=steps {
        #[allow(clippy::cast_precision_loss)]
        let x = from + i as f64 * dx;
        match f(x) {
            Some(y) => current.push((x, y)),
            None if !current.is_empty() => segments.push(std::mem::take(&mut current)),
            None => {}
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }

    Ok(segments)
}

/// The tangent line `y = slope * x + intercept`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TangentLine {
    /// Point of tangency.
    pub x0: f64,
    /// `f(x0)`.
    pub y0: f64,
    /// `f'(x0)`.
    pub slope: f64,
    /// Value at x = 0.
    pub intercept: f64,
}

impl TangentLine {
    /// Evaluates the line at `x`.
    #[must_use]
    pub fn at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Tangent line to a catalog function at `x0`, if `f` and `f'` exist there.
#[must_use]
pub fn tangent_at(f: Function, x0: f64) -> Option<TangentLine> {
    let y0 = f.eval(x0)?;
    let slope = f.derivative(x0)?;
    Some(TangentLine {
        x0,
        y0,
        slope,
        intercept: y0 - slope * x0,
    })
}

/// Tangent line to a polynomial at `x0`.
#[must_use]
pub fn polynomial_tangent(p: &Polynomial, x0: f64) -> TangentLine {
    let y0 = p.evaluate(x0);
    let slope = p.derivative().evaluate(x0);
    TangentLine {
        x0,
        y0,
        slope,
        intercept: y0 - slope * x0,
    }
}

/// Symmetric difference quotient `(f(x+h) - f(x-h)) / 2h`.
///
/// The derivatives page shows it next to the closed form as the secant
/// shrinks.
#[must_use]
pub fn central_difference<F>(f: F, x: f64, h: f64) -> Option<f64>
where
    F: Fn(f64) -> Option<f64>,
{
    if h == 0.0 {
        return None;
    }
    finite((f(x + h)? - f(x - h)?) / (2.0 * h))
}
