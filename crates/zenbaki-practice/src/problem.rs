//! Practice problems and how learner answers are graded.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use zenbaki_sexagesimal::Dms;

use crate::answer::parse_number;

/// Looser tolerance for the seconds field of a DMS answer.
pub const SECONDS_TOLERANCE: f64 = 1.0;

/// A topic page with a practice mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Topic {
    /// Plane vectors.
    Vectors,
    /// Polynomial arithmetic and Ruffini's rule.
    Polynomials,
    /// Derivatives and tangent lines.
    Derivatives,
    /// Definite integrals and Riemann sums.
    Integrals,
    /// Rule of three and percentages.
    Proportionality,
    /// Arithmetic and geometric progressions.
    Sequences,
    /// Degree-minute-second arithmetic.
    Sexagesimal,
    /// Unit conversion.
    Units,
}

impl Topic {
    /// Every topic, in page order.
    pub const ALL: [Topic; 8] = [
        Topic::Vectors,
        Topic::Polynomials,
        Topic::Derivatives,
        Topic::Integrals,
        Topic::Proportionality,
        Topic::Sequences,
        Topic::Sexagesimal,
        Topic::Units,
    ];

    /// Identifier used in configuration and on the command line.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Topic::Vectors => "vectors",
            Topic::Polynomials => "polynomials",
            Topic::Derivatives => "derivatives",
            Topic::Integrals => "integrals",
            Topic::Proportionality => "proportionality",
            Topic::Sequences => "sequences",
            Topic::Sexagesimal => "sexagesimal",
            Topic::Units => "units",
        }
    }

    /// Page title in Basque.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Topic::Vectors => "Bektoreak",
            Topic::Polynomials => "Polinomioak",
            Topic::Derivatives => "Deribatuak",
            Topic::Integrals => "Integralak",
            Topic::Proportionality => "Proportzionaltasuna",
            Topic::Sequences => "Segidak",
            Topic::Sexagesimal => "Sistema hirurogeitarra",
            Topic::Units => "Unitate-bihurketak",
        }
    }

    /// Exercise kinds offered by this topic.
    #[must_use]
    pub fn kinds(self) -> Vec<ProblemKind> {
        ProblemKind::ALL
            .into_iter()
            .filter(|k| k.topic() == self)
            .collect()
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A topic name that matches no page.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown topic `{0}`")]
pub struct UnknownTopic(pub String);

impl FromStr for Topic {
    type Err = UnknownTopic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Topic::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownTopic(s.to_string()))
    }
}

/// Tag identifying the exercise type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProblemKind {
    /// `u + v`, answered as two components.
    VectorSum,
    /// `|u|`.
    VectorMagnitude,
    /// `u · v`.
    DotProduct,
    /// Direction of `u` in degrees.
    VectorAngle,
    /// `P(a)`.
    PolynomialValue,
    /// Remainder of `P(x) ÷ (x - r)` by Ruffini's rule.
    RuffiniRemainder,
    /// A coefficient of `P(x)·Q(x)`.
    ProductCoefficient,
    /// `f'(a)` for a polynomial.
    PolynomialSlope,
    /// `f'(a)` for a catalog function.
    CatalogSlope,
    /// Y-intercept of the tangent line.
    TangentIntercept,
    /// `∫_a^b P(x) dx`.
    PolynomialIntegral,
    /// `∫_a^b f(x) dx` for a catalog function.
    CatalogIntegral,
    /// Midpoint-rule approximation.
    MidpointSum,
    /// Direct rule of three.
    DirectRule,
    /// Inverse rule of three.
    InverseRule,
    /// `p%` of a quantity.
    Percentage,
    /// Price after a percentage change.
    PercentChange,
    /// `aₙ` of an arithmetic progression.
    ArithmeticTerm,
    /// `Sₙ` of an arithmetic progression.
    ArithmeticSum,
    /// `aₙ` of a geometric progression.
    GeometricTerm,
    /// `Sₙ` of a geometric progression.
    GeometricSum,
    /// Arithmetic or geometric?
    IdentifySequence,
    /// Decimal degrees to DMS.
    DecimalToDms,
    /// DMS to decimal degrees.
    DmsToDecimal,
    /// DMS addition with carrying.
    DmsAddition,
    /// DMS subtraction with borrowing.
    DmsSubtraction,
    /// Conversion between units of a category.
    UnitConversion,
}

impl ProblemKind {
    /// Every kind, grouped by topic.
    pub const ALL: [ProblemKind; 27] = [
        ProblemKind::VectorSum,
        ProblemKind::VectorMagnitude,
        ProblemKind::DotProduct,
        ProblemKind::VectorAngle,
        ProblemKind::PolynomialValue,
        ProblemKind::RuffiniRemainder,
        ProblemKind::ProductCoefficient,
        ProblemKind::PolynomialSlope,
        ProblemKind::CatalogSlope,
        ProblemKind::TangentIntercept,
        ProblemKind::PolynomialIntegral,
        ProblemKind::CatalogIntegral,
        ProblemKind::MidpointSum,
        ProblemKind::DirectRule,
        ProblemKind::InverseRule,
        ProblemKind::Percentage,
        ProblemKind::PercentChange,
        ProblemKind::ArithmeticTerm,
        ProblemKind::ArithmeticSum,
        ProblemKind::GeometricTerm,
        ProblemKind::GeometricSum,
        ProblemKind::IdentifySequence,
        ProblemKind::DecimalToDms,
        ProblemKind::DmsToDecimal,
        ProblemKind::DmsAddition,
        ProblemKind::DmsSubtraction,
        ProblemKind::UnitConversion,
    ];

    /// The page this kind belongs to.
    #[must_use]
    pub fn topic(self) -> Topic {
        use ProblemKind::{
            ArithmeticSum, ArithmeticTerm, CatalogIntegral, CatalogSlope, DecimalToDms,
            DirectRule, DmsAddition, DmsSubtraction, DmsToDecimal, DotProduct, GeometricSum,
            GeometricTerm, IdentifySequence, InverseRule, MidpointSum, PercentChange,
            Percentage, PolynomialIntegral, PolynomialSlope, PolynomialValue,
            ProductCoefficient, RuffiniRemainder, TangentIntercept, UnitConversion, VectorAngle,
            VectorMagnitude, VectorSum,
        };
        match self {
            VectorSum | VectorMagnitude | DotProduct | VectorAngle => Topic::Vectors,
            PolynomialValue | RuffiniRemainder | ProductCoefficient => Topic::Polynomials,
            PolynomialSlope | CatalogSlope | TangentIntercept => Topic::Derivatives,
            PolynomialIntegral | CatalogIntegral | MidpointSum => Topic::Integrals,
            DirectRule | InverseRule | Percentage | PercentChange => Topic::Proportionality,
            ArithmeticTerm | ArithmeticSum | GeometricTerm | GeometricSum | IdentifySequence => {
                Topic::Sequences
            }
            DecimalToDms | DmsToDecimal | DmsAddition | DmsSubtraction => Topic::Sexagesimal,
            UnitConversion => Topic::Units,
        }
    }
}

/// The expected answer of a problem.
#[derive(Clone, Debug, PartialEq)]
pub enum Solution {
    /// A single number.
    Scalar(f64),
    /// Two numbers, e.g. vector components.
    Pair(f64, f64),
    /// Degrees, minutes and seconds.
    Dms(Dms),
    /// One of a fixed list of labels.
    Choice {
        /// Index of the right option.
        index: usize,
        /// Option labels, shown to the learner.
        options: Vec<&'static str>,
    },
}

impl Solution {
    /// Number of input fields the learner fills in.
    #[must_use]
    pub fn field_count(&self) -> usize {
        match self {
            Solution::Scalar(_) | Solution::Choice { .. } => 1,
            Solution::Pair(..) => 2,
            Solution::Dms(_) => 3,
        }
    }

    /// The solution written as learner input, one string per field.
    #[must_use]
    pub fn answer_fields(&self) -> Vec<String> {
        match self {
            Solution::Scalar(x) => vec![x.to_string()],
            Solution::Pair(x, y) => vec![x.to_string(), y.to_string()],
            Solution::Dms(dms) => vec![
                dms.signed_degrees().to_string(),
                dms.minutes.to_string(),
                dms.seconds.to_string(),
            ],
            Solution::Choice { index, options } => {
                vec![options.get(*index).copied().unwrap_or_default().to_string()]
            }
        }
    }
}

/// Outcome of checking an answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Within tolerance.
    Correct,
    /// Parsed, but wrong.
    Incorrect,
    /// Not a number (or wrong number of fields); not scored.
    Invalid,
}

/// A generated exercise.
#[derive(Clone, Debug, PartialEq)]
pub struct Problem {
    /// Exercise type.
    pub kind: ProblemKind,
    /// Question shown to the learner.
    pub prompt: String,
    /// Expected answer.
    pub solution: Solution,
    /// Worked solution shown after answering.
    pub hint: String,
    /// Absolute tolerance for numeric fields.
    pub tolerance: f64,
}

impl Problem {
    /// The page this problem belongs to.
    #[must_use]
    pub fn topic(&self) -> Topic {
        self.kind.topic()
    }

    /// Grades learner input, one string per field.
    ///
    /// Any field that fails to parse makes the whole answer
    /// [`Verdict::Invalid`]. DMS answers compare degrees and minutes with
    /// the problem tolerance and seconds with [`SECONDS_TOLERANCE`].
    #[must_use]
    pub fn check(&self, fields: &[&str]) -> Verdict {
        if fields.len() != self.solution.field_count() {
            return Verdict::Invalid;
        }

        let verdict = match &self.solution {
            Solution::Choice { index, options } => {
                let input = fields[0].trim();
                let picked = options
                    .iter()
                    .position(|o| o.eq_ignore_ascii_case(input))
                    .or_else(|| {
                        input
                            .parse::<usize>()
                            .ok()
                            .and_then(|n| n.checked_sub(1))
                            .filter(|i| *i < options.len())
                    });
                match picked {
                    Some(i) if i == *index => Verdict::Correct,
                    Some(_) => Verdict::Incorrect,
                    None => Verdict::Invalid,
                }
            }
            solution => {
                let Some(values) = fields
                    .iter()
                    .map(|f| parse_number(f))
                    .collect::<Option<Vec<f64>>>()
                else {
                    return Verdict::Invalid;
                };
                let close = |got: f64, want: f64, tol: f64| (got - want).abs() <= tol;
                let correct = match solution {
                    Solution::Scalar(x) => close(values[0], *x, self.tolerance),
                    Solution::Pair(x, y) => {
                        close(values[0], *x, self.tolerance) && close(values[1], *y, self.tolerance)
                    }
                    Solution::Dms(dms) => {
                        #[allow(clippy::cast_precision_loss)]
                        let degrees = dms.signed_degrees() as f64;
                        close(values[0], degrees, self.tolerance)
                            && close(values[1], f64::from(dms.minutes), self.tolerance)
                            && close(values[2], dms.seconds, SECONDS_TOLERANCE)
                    }
                    Solution::Choice { .. } => false,
                };
                if correct {
                    Verdict::Correct
                } else {
                    Verdict::Incorrect
                }
            }
        };

        tracing::debug!(kind = ?self.kind, ?verdict, "answer checked");
        verdict
    }
}
