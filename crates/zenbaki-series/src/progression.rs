//! Closed-form term and partial-sum formulas.

use std::fmt;

use zenbaki_core::{format_number, format_signed};

/// Shared interface of both progression kinds.
pub trait Progression {
    /// The first term `a₁`.
    fn first(&self) -> f64;

    /// The `n`th term, 1-indexed.
    fn nth_term(&self, n: u32) -> f64;

    /// Sum of terms `1..=n`. The empty sum is 0.
    fn sum_first(&self, n: u32) -> f64;

    /// The first `count` terms in order.
    fn terms(&self, count: u32) -> Vec<f64> {
        (1..=count).map(|n| self.nth_term(n)).collect()
    }
}

/// `aₙ = a₁ + (n - 1)·d`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arithmetic {
    /// First term.
    pub first: f64,
    /// Common difference.
    pub difference: f64,
}

impl Arithmetic {
    /// Creates an arithmetic progression.
    #[must_use]
    pub const fn new(first: f64, difference: f64) -> Self {
        Self { first, difference }
    }
}

impl Progression for Arithmetic {
    fn first(&self) -> f64 {
        self.first
    }

    fn nth_term(&self, n: u32) -> f64 {
        self.first + (f64::from(n) - 1.0) * self.difference
    }

    fn sum_first(&self, n: u32) -> f64 {
        if n == 0 {
            return 0.0;
        }
        f64::from(n) * (self.first + self.nth_term(n)) / 2.0
    }
}

impl fmt::Display for Arithmetic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "aₙ = {} {}·(n - 1)",
            format_number(self.first, 4),
            format_signed(self.difference, 4)
        )
    }
}

/// `aₙ = a₁·r^(n - 1)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometric {
    /// First term.
    pub first: f64,
    /// Common ratio, non-zero.
    pub ratio: f64,
}

impl Geometric {
    /// Creates a geometric progression.
    #[must_use]
    pub const fn new(first: f64, ratio: f64) -> Self {
        Self { first, ratio }
    }

    /// Limit of the partial sums when `|r| < 1`.
    #[must_use]
    pub fn infinite_sum(&self) -> Option<f64> {
        (self.ratio.abs() < 1.0).then(|| self.first / (1.0 - self.ratio))
    }
}

impl Progression for Geometric {
    fn first(&self) -> f64 {
        self.first
    }

    fn nth_term(&self, n: u32) -> f64 {
        self.first * self.ratio.powf(f64::from(n) - 1.0)
    }

    #[allow(clippy::float_cmp)]
    fn sum_first(&self, n: u32) -> f64 {
        if self.ratio == 1.0 {
            return f64::from(n) * self.first;
        }
        self.first * (1.0 - self.ratio.powf(f64::from(n))) / (1.0 - self.ratio)
    }
}

impl fmt::Display for Geometric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "aₙ = {}·{}ⁿ⁻¹",
            format_number(self.first, 4),
            if self.ratio < 0.0 {
                format!("({})", format_number(self.ratio, 4))
            } else {
                format_number(self.ratio, 4)
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic_example() {
        let a = Arithmetic::new(3.0, 4.0);
        assert_eq!(a.nth_term(20), 79.0);
        assert_eq!(a.sum_first(20), 820.0);
        assert_eq!(a.terms(4), vec![3.0, 7.0, 11.0, 15.0]);
        assert_eq!(a.sum_first(0), 0.0);
    }

    #[test]
    fn test_geometric() {
        let g = Geometric::new(2.0, 3.0);
        assert_eq!(g.terms(4), vec![2.0, 6.0, 18.0, 54.0]);
        assert_eq!(g.sum_first(4), 80.0);
    }

    #[test]
    fn test_geometric_ratio_one() {
        let g = Geometric::new(5.0, 1.0);
        assert_eq!(g.sum_first(7), 35.0);
    }

    #[test]
    fn test_geometric_alternating() {
        let g = Geometric::new(1.0, -2.0);
        assert_eq!(g.terms(4), vec![1.0, -2.0, 4.0, -8.0]);
        assert_eq!(g.sum_first(4), -5.0);
    }

    #[test]
    fn test_infinite_sum() {
        assert_eq!(Geometric::new(1.0, 0.5).infinite_sum(), Some(2.0));
        assert_eq!(Geometric::new(1.0, 2.0).infinite_sum(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Arithmetic::new(3.0, -2.0).to_string(), "aₙ = 3 - 2·(n - 1)");
        assert_eq!(Geometric::new(2.0, -3.0).to_string(), "aₙ = 2·(-3)ⁿ⁻¹");
    }
}
