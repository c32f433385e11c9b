//! Error type for precondition failures in the numeric core.

use thiserror::Error;

/// Contract violations reported by the topic crates.
///
/// These signal a caller bug or an unvalidated input reaching the core,
/// never a domain restriction of a function being evaluated.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum MathError {
    /// Synthetic division needs at least a linear polynomial.
    #[error("synthetic division needs at least 2 coefficients, got {0}")]
    TooFewCoefficients(usize),

    /// Unit symbol not present in the category's table.
    #[error("unknown unit `{unit}` in category {category}")]
    UnknownUnit {
        /// The symbol that was looked up.
        unit: String,
        /// Category name.
        category: String,
    },

    /// Category name that matches no unit table.
    #[error("unknown unit category `{0}`")]
    UnknownCategory(String),

    /// A Riemann sum over zero sub-intervals.
    #[error("number of sub-intervals must be positive")]
    NoSubintervals,

    /// More sub-intervals than a Riemann sum accepts.
    #[error("at most {limit} sub-intervals are supported, got {got}")]
    TooManySubintervals {
        /// Sub-intervals requested.
        got: usize,
        /// Largest accepted count.
        limit: usize,
    },

    /// Constant term too large for the integer root search.
    #[error("constant term {got} is outside the root search range of ±{limit}")]
    ConstantTooLarge {
        /// The rounded constant term.
        got: f64,
        /// Largest accepted magnitude.
        limit: u64,
    },

    /// Angle too large to split into whole degrees.
    #[error("{value}° is outside the supported range of ±{limit}°")]
    AngleOutOfRange {
        /// Decimal degrees supplied.
        value: f64,
        /// Largest whole-degree magnitude.
        limit: u32,
    },

    /// Sequence classification needs a minimum number of terms.
    #[error("need at least {needed} terms to classify a sequence, got {got}")]
    TooFewTerms {
        /// Minimum accepted.
        needed: usize,
        /// Terms supplied.
        got: usize,
    },

    /// Rule of three with a zero reference quantity.
    #[error("reference quantity must be non-zero")]
    ZeroReference,

    /// Input that must be a finite real was NaN or infinite.
    #[error("expected a finite number, got {0}")]
    NonFinite(f64),
}

/// Result alias used across the zenbaki crates.
pub type MathResult<T> = Result<T, MathError>;
