//! The catalog of named functions shown on the calculus pages.

use std::fmt;

use zenbaki_core::finite;

/// A catalog function with closed-form derivative and antiderivative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Function {
    /// x²
    Square,
    /// x³
    Cube,
    /// sin x
    Sin,
    /// cos x
    Cos,
    /// eˣ
    Exp,
    /// ln x, defined for x > 0
    Ln,
    /// √x, defined for x ≥ 0
    Sqrt,
}

impl Function {
    /// Every catalog entry, in display order.
    pub const ALL: [Function; 7] = [
        Function::Square,
        Function::Cube,
        Function::Sin,
        Function::Cos,
        Function::Exp,
        Function::Ln,
        Function::Sqrt,
    ];

    /// Entries whose antiderivative is defined on the whole real line,
    /// used when a random interval may contain non-positive values.
    pub const EVERYWHERE_DEFINED: [Function; 5] = [
        Function::Square,
        Function::Cube,
        Function::Sin,
        Function::Cos,
        Function::Exp,
    ];

    /// Evaluates `f(x)`.
    #[must_use]
    pub fn eval(self, x: f64) -> Option<f64> {
        let y = match self {
            Function::Square => x * x,
            Function::Cube => x * x * x,
            Function::Sin => x.sin(),
            Function::Cos => x.cos(),
            Function::Exp => x.exp(),
            Function::Ln if x <= 0.0 => return None,
            Function::Ln => x.ln(),
            Function::Sqrt if x < 0.0 => return None,
            Function::Sqrt => x.sqrt(),
        };
        finite(y)
    }

    /// Evaluates the closed-form derivative `f'(x)`.
    ///
    /// `√x` has no derivative at 0, so that point is `None` as well.
    #[must_use]
    pub fn derivative(self, x: f64) -> Option<f64> {
        let y = match self {
            Function::Square => 2.0 * x,
            Function::Cube => 3.0 * x * x,
            Function::Sin => x.cos(),
            Function::Cos => -x.sin(),
            Function::Exp => x.exp(),
            Function::Ln if x <= 0.0 => return None,
            Function::Ln => 1.0 / x,
            Function::Sqrt if x <= 0.0 => return None,
            Function::Sqrt => 0.5 / x.sqrt(),
        };
        finite(y)
    }

    /// Evaluates the catalog's representative antiderivative `F(x)`.
    ///
    /// The integration constant is fixed per entry:
    ///
    /// | f | F | F(0) |
    /// |---|---|---|
    /// | x² | x³/3 | 0 |
    /// | x³ | x⁴/4 | 0 |
    /// | sin x | -cos x | -1 |
    /// | cos x | sin x | 0 |
    /// | eˣ | eˣ | 1 |
    /// | ln x | x ln x - x | 0 (continuous extension) |
    /// | √x | (2/3) x^(3/2) | 0 |
    #[must_use]
    pub fn antiderivative(self, x: f64) -> Option<f64> {
        let y = match self {
            Function::Square => x * x * x / 3.0,
            Function::Cube => x.powi(4) / 4.0,
            Function::Sin => -x.cos(),
            Function::Cos => x.sin(),
            Function::Exp => x.exp(),
            Function::Ln if x < 0.0 => return None,
            Function::Ln if x == 0.0 => 0.0,
            Function::Ln => x * x.ln() - x,
            Function::Sqrt if x < 0.0 => return None,
            Function::Sqrt => 2.0 / 3.0 * x * x.sqrt(),
        };
        finite(y)
    }

    /// Returns true if `f(x)` is defined.
    #[must_use]
    pub fn in_domain(self, x: f64) -> bool {
        self.eval(x).is_some()
    }

    /// Label of `f`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Function::Square => "x²",
            Function::Cube => "x³",
            Function::Sin => "sin(x)",
            Function::Cos => "cos(x)",
            Function::Exp => "eˣ",
            Function::Ln => "ln(x)",
            Function::Sqrt => "√x",
        }
    }

    /// Label of `f'`.
    #[must_use]
    pub fn derivative_label(self) -> &'static str {
        match self {
            Function::Square => "2x",
            Function::Cube => "3x²",
            Function::Sin => "cos(x)",
            Function::Cos => "-sin(x)",
            Function::Exp => "eˣ",
            Function::Ln => "1/x",
            Function::Sqrt => "1/(2√x)",
        }
    }

    /// Label of `F`.
    #[must_use]
    pub fn antiderivative_label(self) -> &'static str {
        match self {
            Function::Square => "x³/3",
            Function::Cube => "x⁴/4",
            Function::Sin => "-cos(x)",
            Function::Cos => "sin(x)",
            Function::Exp => "eˣ",
            Function::Ln => "x·ln(x) - x",
            Function::Sqrt => "(2/3)·x^(3/2)",
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_derivative_is_2x() {
        for x in [-3.0, -0.5, 0.0, 1.25, 4.0] {
            assert_eq!(Function::Square.derivative(x), Some(2.0 * x));
        }
    }

    #[test]
    fn test_domain_violations() {
        assert_eq!(Function::Ln.eval(0.0), None);
        assert_eq!(Function::Ln.eval(-1.0), None);
        assert_eq!(Function::Sqrt.eval(-0.01), None);
        assert_eq!(Function::Sqrt.eval(0.0), Some(0.0));
        assert_eq!(Function::Sqrt.derivative(0.0), None);
        assert_eq!(Function::Ln.derivative(-2.0), None);
        assert!(!Function::Ln.in_domain(0.0));
    }

    #[test]
    fn test_antiderivative_constants() {
        assert_eq!(Function::Square.antiderivative(0.0), Some(0.0));
        assert_eq!(Function::Cube.antiderivative(0.0), Some(0.0));
        assert_eq!(Function::Sin.antiderivative(0.0), Some(-1.0));
        assert_eq!(Function::Cos.antiderivative(0.0), Some(0.0));
        assert_eq!(Function::Exp.antiderivative(0.0), Some(1.0));
        assert_eq!(Function::Ln.antiderivative(0.0), Some(0.0));
        assert_eq!(Function::Sqrt.antiderivative(0.0), Some(0.0));
    }

    #[test]
    fn test_antiderivative_differentiates_back() {
        let h = 1e-5;
        for f in Function::ALL {
            let x = 1.5;
            let f_upper = f.antiderivative(x + h).unwrap();
            let f_lower = f.antiderivative(x - h).unwrap();
            let slope = (f_upper - f_lower) / (2.0 * h);
            assert!((slope - f.eval(x).unwrap()).abs() < 1e-6, "{f}");
        }
    }

    #[test]
    fn test_overflow_is_not_evaluable() {
        assert_eq!(Function::Exp.eval(1000.0), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Function::Cube.to_string(), "x³");
        assert_eq!(Function::Ln.derivative_label(), "1/x");
        assert_eq!(Function::Sin.antiderivative_label(), "-cos(x)");
    }
}
