//! Dense univariate polynomials over the reals.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_traits::{One, Zero};
use zenbaki_core::{format_number, superscript};

/// Decimal places kept when printing coefficients.
const DISPLAY_DECIMALS: usize = 4;

/// A univariate polynomial.
///
/// Coefficients are stored in descending degree order: `coeffs[i]` is the
/// coefficient of `x^(degree - i)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial {
    coeffs: Vec<f64>,
}

impl Polynomial {
    /// Creates a polynomial from coefficients, highest degree first.
    ///
    /// Leading zeros are kept. An empty list becomes the zero constant.
    #[must_use]
    pub fn new(coeffs: Vec<f64>) -> Self {
        if coeffs.is_empty() {
            return Self { coeffs: vec![0.0] };
        }
        Self { coeffs }
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: f64) -> Self {
        Self::new(vec![c])
    }

    /// Creates the monomial `c * x^n`.
    #[must_use]
    pub fn monomial(c: f64, n: usize) -> Self {
        let mut coeffs = vec![0.0; n + 1];
        coeffs[0] = c;
        Self::new(coeffs)
    }

    /// Creates `x - root`.
    #[must_use]
    pub fn linear_factor(root: f64) -> Self {
        Self::new(vec![1.0, -root])
    }

    /// Returns the nominal degree, `len - 1`.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Returns the degree ignoring zero leading coefficients.
    #[must_use]
    pub fn effective_degree(&self) -> usize {
        self.coeffs
            .iter()
            .position(|c| *c != 0.0)
            .map_or(0, |i| self.degree() - i)
    }

    /// Returns the first stored coefficient.
    #[must_use]
    pub fn leading_coefficient(&self) -> f64 {
        self.coeffs[0]
    }

    /// Returns the coefficient of `x^power`, zero beyond the degree.
    #[must_use]
    pub fn coefficient(&self, power: usize) -> f64 {
        if power > self.degree() {
            return 0.0;
        }
        self.coeffs[self.degree() - power]
    }

    /// Returns all coefficients, highest degree first.
    #[must_use]
    pub fn coeffs(&self) -> &[f64] {
        &self.coeffs
    }

    /// Evaluates the polynomial at `x` using Horner's method.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.coeffs.iter().fold(0.0, |acc, c| acc * x + c)
    }

    /// Adds two polynomials, padding the shorter one with leading zeros.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        self.zip_padded(other, |a, b| a + b)
    }

    /// Subtracts `other` from `self`, padding like [`Polynomial::add`].
    #[must_use]
    pub fn subtract(&self, other: &Self) -> Self {
        self.zip_padded(other, |a, b| a - b)
    }

    fn zip_padded(&self, other: &Self, op: impl Fn(f64, f64) -> f64) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());
        let pad_a = len - self.coeffs.len();
        let pad_b = len - other.coeffs.len();

        let coeffs = (0..len)
            .map(|i| {
                let a = if i < pad_a { 0.0 } else { self.coeffs[i - pad_a] };
                let b = if i < pad_b { 0.0 } else { other.coeffs[i - pad_b] };
                op(a, b)
            })
            .collect();

        Self::new(coeffs)
    }

    /// Multiplies two polynomials by discrete convolution.
    ///
    /// The result has `len(a) + len(b) - 1` coefficients.
    #[must_use]
    pub fn multiply(&self, other: &Self) -> Self {
        let n = self.coeffs.len();
        let m = other.coeffs.len();
        let mut result = vec![0.0; n + m - 1];

        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in other.coeffs.iter().enumerate() {
                result[i + j] += a * b;
            }
        }

        Self::new(result)
    }

    /// Multiplies every coefficient by `k`.
    #[must_use]
    pub fn scale(&self, k: f64) -> Self {
        Self::new(self.coeffs.iter().map(|c| c * k).collect())
    }

    /// Computes the formal derivative.
    #[must_use]
    pub fn derivative(&self) -> Self {
        let degree = self.degree();
        if degree == 0 {
            return Self::zero();
        }

        #[allow(clippy::cast_precision_loss)]
        let coeffs = self.coeffs[..degree]
            .iter()
            .enumerate()
            .map(|(i, c)| c * (degree - i) as f64)
            .collect();

        Self::new(coeffs)
    }

    /// Computes the antiderivative with zero constant term.
    #[must_use]
    pub fn antiderivative(&self) -> Self {
        let degree = self.degree();

        #[allow(clippy::cast_precision_loss)]
        let mut coeffs: Vec<f64> = self
            .coeffs
            .iter()
            .enumerate()
            .map(|(i, c)| c / (degree - i + 1) as f64)
            .collect();
        coeffs.push(0.0);

        Self::new(coeffs)
    }

    /// Computes `∫_a^b P(x) dx` from the antiderivative.
    #[must_use]
    pub fn definite_integral(&self, a: f64, b: f64) -> f64 {
        let antiderivative = self.antiderivative();
        antiderivative.evaluate(b) - antiderivative.evaluate(a)
    }

    /// Raises the polynomial to a non-negative integer power.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result.multiply(&base);
            }
            base = base.multiply(&base);
            exp >>= 1;
        }

        result
    }
}

impl Add for Polynomial {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Polynomial::add(&self, &rhs)
    }
}

impl Sub for Polynomial {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.subtract(&rhs)
    }
}

impl Mul for Polynomial {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl Add<&Polynomial> for Polynomial {
    type Output = Self;

    fn add(self, rhs: &Polynomial) -> Self {
        Polynomial::add(&self, rhs)
    }
}

impl Sub<&Polynomial> for Polynomial {
    type Output = Self;

    fn sub(self, rhs: &Polynomial) -> Self {
        self.subtract(rhs)
    }
}

impl Mul<&Polynomial> for Polynomial {
    type Output = Self;

    fn mul(self, rhs: &Polynomial) -> Self {
        self.multiply(rhs)
    }
}

impl Neg for Polynomial {
    type Output = Self;

    fn neg(self) -> Self {
        self.scale(-1.0)
    }
}

impl Zero for Polynomial {
    fn zero() -> Self {
        Self::constant(0.0)
    }

    fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|c| *c == 0.0)
    }
}

impl One for Polynomial {
    fn one() -> Self {
        Self::constant(1.0)
    }
}

impl fmt::Display for Polynomial {
    /// Renders e.g. `x³ - 6x² + 11x - 6`.
    ///
    /// Zero terms are omitted, unit coefficients are omitted except on the
    /// constant term, and the zero polynomial prints as `0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let degree = self.degree();
        let mut out = String::new();

        for (i, &c) in self.coeffs.iter().enumerate() {
            let magnitude = format_number(c.abs(), DISPLAY_DECIMALS);
            if magnitude == "0" {
                continue;
            }
            let power = degree - i;

            if out.is_empty() {
                if c < 0.0 {
                    out.push('-');
                }
            } else {
                out.push_str(if c < 0.0 { " - " } else { " + " });
            }

            if power == 0 || magnitude != "1" {
                out.push_str(&magnitude);
            }
            match power {
                0 => {}
                1 => out.push('x'),
                _ => {
                    out.push('x');
                    out.push_str(&superscript(power));
                }
            }
        }

        if out.is_empty() {
            out.push('0');
        }
        write!(f, "{out}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_ops() {
        let p = Polynomial::new(vec![2.0, 1.0]); // 2x + 1
        let q = Polynomial::new(vec![1.0, 0.0, 3.0]); // x² + 3

        assert_eq!(Polynomial::add(&p, &q).coeffs(), &[1.0, 2.0, 4.0]);
        assert_eq!(p.subtract(&q).coeffs(), &[-1.0, 2.0, -2.0]);
        assert_eq!(q.subtract(&q).coeffs(), &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_method_call_with_ops_in_scope() {
        // `Add`, `Sub` and `Mul` are imported here, so these go through the
        // by-reference operator impls.
        let p = Polynomial::new(vec![2.0, 1.0]);
        let q = Polynomial::new(vec![1.0, 0.0, 3.0]);

        assert_eq!(p.clone().add(&q).coeffs(), &[1.0, 2.0, 4.0]);
        assert_eq!(p.clone().sub(&q).coeffs(), &[-1.0, 2.0, -2.0]);
        assert_eq!(p.clone().mul(&q).coeffs(), &[2.0, 1.0, 6.0, 3.0]);
        assert_eq!(p.clone() + &q, Polynomial::add(&p, &q));
        assert_eq!(p.clone() - &q, p.subtract(&q));
        assert_eq!(p.clone() * &q, p.multiply(&q));
    }

    #[test]
    fn test_multiply() {
        // (x - 1)(x - 2) = x² - 3x + 2
        let prod = Polynomial::linear_factor(1.0) * Polynomial::linear_factor(2.0);
        assert_eq!(prod.coeffs(), &[1.0, -3.0, 2.0]);
    }

    #[test]
    fn test_evaluate() {
        // x³ - 6x² + 11x - 6 at x = 4 is 64 - 96 + 44 - 6 = 6
        let p = Polynomial::new(vec![1.0, -6.0, 11.0, -6.0]);
        assert_eq!(p.evaluate(4.0), 6.0);
        assert_eq!(p.evaluate(1.0), 0.0);
    }

    #[test]
    fn test_degree_and_coefficients() {
        let p = Polynomial::new(vec![0.0, 3.0, 0.0, -1.0]);
        assert_eq!(p.degree(), 3);
        assert_eq!(p.effective_degree(), 2);
        assert_eq!(p.coefficient(2), 3.0);
        assert_eq!(p.coefficient(0), -1.0);
        assert_eq!(p.coefficient(7), 0.0);
    }

    #[test]
    fn test_derivative() {
        // d/dx (4x³ - 2x + 5) = 12x² - 2
        let p = Polynomial::new(vec![4.0, 0.0, -2.0, 5.0]);
        assert_eq!(p.derivative().coeffs(), &[12.0, 0.0, -2.0]);
        assert!(Polynomial::constant(7.0).derivative().is_zero());
    }

    #[test]
    fn test_antiderivative() {
        // ∫ (3x² + 2x + 1) dx = x³ + x² + x
        let p = Polynomial::new(vec![3.0, 2.0, 1.0]);
        assert_eq!(p.antiderivative().coeffs(), &[1.0, 1.0, 1.0, 0.0]);
        assert_eq!(p.antiderivative().derivative(), p);
        // ∫_0^2 x² dx = 8/3
        let sq = Polynomial::monomial(1.0, 2);
        assert!((sq.definite_integral(0.0, 2.0) - 8.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_pow() {
        // (x + 1)² = x² + 2x + 1
        let p = Polynomial::new(vec![1.0, 1.0]).pow(2);
        assert_eq!(p.coeffs(), &[1.0, 2.0, 1.0]);
        assert_eq!(Polynomial::new(vec![3.0, 1.0]).pow(0), Polynomial::one());
    }

    #[test]
    fn test_display() {
        let p = Polynomial::new(vec![1.0, -6.0, 11.0, -6.0]);
        assert_eq!(p.to_string(), "x³ - 6x² + 11x - 6");

        let q = Polynomial::new(vec![-1.0, 0.0, 1.0, 0.0]);
        assert_eq!(q.to_string(), "-x³ + x");

        let r = Polynomial::new(vec![0.0, 2.5, -1.0]);
        assert_eq!(r.to_string(), "2.5x - 1");

        assert_eq!(Polynomial::new(vec![0.0, 0.0]).to_string(), "0");
        assert_eq!(Polynomial::constant(1.0).to_string(), "1");
        assert_eq!(Polynomial::constant(-1.0).to_string(), "-1");
    }
}
