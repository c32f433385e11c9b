//! Integer root search and factoring by repeated Ruffini division.

use num_traits::Zero;
use zenbaki_core::{MathError, MathResult};

use crate::Polynomial;

/// Remainders below this count as exact when testing integer roots.
const ROOT_EPSILON: f64 = 1e-9;

/// Largest constant term whose divisors are searched.
pub const MAX_ROOT_CONSTANT: u64 = 1_000_000_000_000;

/// Result of peeling integer roots off a polynomial.
#[derive(Clone, Debug, PartialEq)]
pub struct Factorization {
    /// Integer roots found, with multiplicity, in discovery order.
    pub roots: Vec<i64>,
    /// What is left after dividing out every `x - root`.
    pub residual: Polynomial,
}

/// Candidate integer roots: the divisors of the constant term, both signs.
///
/// Coefficients are expected to be integers; the constant term is rounded.
/// A zero constant term yields `[0]`, since `x` then divides the polynomial.
///
/// # Errors
///
/// Returns [`MathError::ConstantTooLarge`] when the constant term is not
/// finite or its magnitude exceeds [`MAX_ROOT_CONSTANT`].
#[allow(clippy::cast_precision_loss)]
pub fn integer_root_candidates(p: &Polynomial) -> MathResult<Vec<i64>> {
    let constant = p.coefficient(0).round();
    if !constant.is_finite() || constant.abs() > MAX_ROOT_CONSTANT as f64 {
        return Err(MathError::ConstantTooLarge {
            got: constant,
            limit: MAX_ROOT_CONSTANT,
        });
    }
    if constant == 0.0 {
        return Ok(vec![0]);
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let n = constant.abs() as u64;
    let mut candidates = Vec::new();
    let mut d = 1u64;
    while d * d <= n {
        if n % d == 0 {
            for divisor in [d, n / d] {
                if let Ok(v) = i64::try_from(divisor) {
                    if !candidates.contains(&v) {
                        candidates.push(v);
                        candidates.push(-v);
                    }
                }
            }
        }
        d += 1;
    }
    candidates.sort_by_key(|c| (c.abs(), *c < 0));
    Ok(candidates)
}

/// Repeatedly divides out integer roots with Ruffini's rule.
///
/// Stops when the remaining quotient is constant or no candidate divides
/// it exactly. The zero polynomial has no factorization and comes back
/// unchanged with no roots.
///
/// # Errors
///
/// Propagates division errors and [`MathError::ConstantTooLarge`]; a
/// polynomial of nominal degree 0 returns an empty factorization instead
/// of failing.
pub fn factor_integer_roots(p: &Polynomial) -> MathResult<Factorization> {
    let mut residual = p.clone();
    let mut roots = Vec::new();

    'outer: while residual.degree() >= 1 && !residual.is_zero() {
        for candidate in integer_root_candidates(&residual)? {
            #[allow(clippy::cast_precision_loss)]
            let division = residual.synthetic_division(candidate as f64)?;
            if division.is_exact(ROOT_EPSILON) {
                roots.push(candidate);
                residual = division.quotient;
                continue 'outer;
            }
        }
        break;
    }

    tracing::debug!(?roots, residual = %residual, "factored integer roots");
    Ok(Factorization { roots, residual })
}
