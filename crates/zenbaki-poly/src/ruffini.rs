//! Synthetic division by a linear factor (Ruffini's rule).

use zenbaki_core::{format_number, MathError, MathResult};

use crate::Polynomial;

/// Outcome of dividing `P(x)` by `x - root`.
#[derive(Clone, Debug, PartialEq)]
pub struct Division {
    /// The divisor's root `r` in `x - r`.
    pub root: f64,
    /// Quotient, one degree lower than the dividend.
    pub quotient: Polynomial,
    /// Remainder, equal to `P(root)` by the Factor Theorem.
    pub remainder: f64,
    /// Middle row of the Ruffini tableau: each product `r * q[i]`
    /// added to the next dividend coefficient.
    pub products: Vec<f64>,
}

impl Division {
    /// Returns true if `x - root` divides the polynomial, i.e. the
    /// remainder is within `epsilon` of zero.
    #[must_use]
    pub fn is_exact(&self, epsilon: f64) -> bool {
        self.remainder.abs() <= epsilon
    }

    /// Renders the three-row tableau as shown on the polynomials page.
    #[must_use]
    pub fn tableau(&self, dividend: &Polynomial) -> String {
        let cell = |x: f64| format!("{:>6}", format_number(x, 3));

        let top: String = dividend.coeffs().iter().map(|&c| cell(c)).collect();
        let middle: String = std::iter::once(" ".repeat(6))
            .chain(self.products.iter().map(|&p| cell(p)))
            .collect();
        let bottom: String = self
            .quotient
            .coeffs()
            .iter()
            .chain(std::iter::once(&self.remainder))
            .map(|&c| cell(c))
            .collect();

        format!(
            "{:>6} |{top}\n{:>6} |{middle}\n{} +{}\n{:>6}  {bottom}",
            "",
            format_number(self.root, 3),
            "-".repeat(6),
            "-".repeat(bottom.len()),
            ""
        )
    }
}

impl Polynomial {
    /// Divides by `x - root` with Ruffini's rule.
    ///
    /// The quotient has one coefficient fewer than `self`; the last value
    /// produced by the carry chain is the remainder.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::TooFewCoefficients`] for constant polynomials,
    /// where there is nothing to divide.
    pub fn synthetic_division(&self, root: f64) -> MathResult<Division> {
        let coeffs = self.coeffs();
        if coeffs.len() < 2 {
            return Err(MathError::TooFewCoefficients(coeffs.len()));
        }
        if !root.is_finite() {
            return Err(MathError::NonFinite(root));
        }

        let mut row = Vec::with_capacity(coeffs.len());
        let mut products = Vec::with_capacity(coeffs.len() - 1);
        let mut carry = coeffs[0];
        row.push(carry);

        for &c in &coeffs[1..] {
            let product = carry * root;
            products.push(product);
            carry = c + product;
            row.push(carry);
        }

        let remainder = row.pop().unwrap_or_default();
        tracing::trace!(root, remainder, "ruffini division");

        Ok(Division {
            root,
            quotient: Polynomial::new(row),
            remainder,
            products,
        })
    }
}
