//! Arithmetic and geometric progression exercises.

use rand::Rng;
use zenbaki_series::{Arithmetic, Geometric, Progression};

use super::{int, nonzero_int, num, pick};
use crate::problem::{Problem, ProblemKind, Solution};

const TOLERANCE: f64 = 0.01;
const RATIOS: [f64; 5] = [-3.0, -2.0, 2.0, 3.0, 0.5];
const TERMS_SHOWN: u32 = 5;

/// Labels of the identify-the-sequence choice.
pub(super) const SEQUENCE_OPTIONS: [&str; 2] = ["aritmetikoa", "geometrikoa"];

fn list(terms: &[f64]) -> String {
    terms.iter().map(|t| num(*t)).collect::<Vec<_>>().join(", ")
}

fn random_arithmetic<R: Rng + ?Sized>(rng: &mut R) -> Arithmetic {
    Arithmetic::new(int(rng, -10, 10), nonzero_int(rng, -5, 5))
}

fn random_geometric<R: Rng + ?Sized>(rng: &mut R) -> Geometric {
    let ratio = pick(rng, &RATIOS);
    // Halving needs an even start to stay readable
    let first = if ratio < 1.0 && ratio > 0.0 {
        64.0 * pick(rng, &[1.0, 2.0, 3.0])
    } else {
        int(rng, 1, 5)
    };
    Geometric::new(first, ratio)
}

pub(super) fn generate<R: Rng + ?Sized>(kind: ProblemKind, rng: &mut R) -> Problem {
    match kind {
        ProblemKind::ArithmeticTerm => {
            let s = random_arithmetic(rng);
            let n = rng.gen_range(6..=25);
            let term = s.nth_term(n);
            Problem {
                kind,
                prompt: format!(
                    "Segida aritmetikoa: {}, ... Kalkulatu a{n}.",
                    list(&s.terms(4))
                ),
                solution: Solution::Scalar(term),
                hint: format!(
                    "d = {}. aₙ = a₁ + (n - 1)·d ⇒ a{n} = {} + {}·{} = {}.",
                    num(s.difference),
                    num(s.first),
                    n - 1,
                    num(s.difference),
                    num(term)
                ),
                tolerance: TOLERANCE,
            }
        }
        ProblemKind::ArithmeticSum => {
            let s = random_arithmetic(rng);
            let n = rng.gen_range(5..=20);
            let sum = s.sum_first(n);
            Problem {
                kind,
                prompt: format!(
                    "Segida aritmetikoa: {}, ... Kalkulatu lehen {n} gaien batura.",
                    list(&s.terms(4))
                ),
                solution: Solution::Scalar(sum),
                hint: format!(
                    "a{n} = {}. Sₙ = n·(a₁ + aₙ)/2 ⇒ S{n} = {n}·({} + {})/2 = {}.",
                    num(s.nth_term(n)),
                    num(s.first),
                    num(s.nth_term(n)),
                    num(sum)
                ),
                tolerance: TOLERANCE,
            }
        }
        ProblemKind::GeometricTerm => {
            let s = random_geometric(rng);
            let n = rng.gen_range(4..=7);
            let term = s.nth_term(n);
            Problem {
                kind,
                prompt: format!(
                    "Segida geometrikoa: {}, ... Kalkulatu a{n}.",
                    list(&s.terms(3))
                ),
                solution: Solution::Scalar(term),
                hint: format!(
                    "r = {}. aₙ = a₁·rⁿ⁻¹ ⇒ a{n} = {}·{}^{} = {}.",
                    num(s.ratio),
                    num(s.first),
                    super::factor(s.ratio),
                    n - 1,
                    num(term)
                ),
                tolerance: TOLERANCE,
            }
        }
        ProblemKind::GeometricSum => {
            let s = random_geometric(rng);
            let n = rng.gen_range(3..=6);
            let sum = s.sum_first(n);
            Problem {
                kind,
                prompt: format!(
                    "Segida geometrikoa: {}, ... Kalkulatu lehen {n} gaien batura.",
                    list(&s.terms(3))
                ),
                solution: Solution::Scalar(sum),
                hint: format!(
                    "Sₙ = a₁·(1 - rⁿ)/(1 - r) ⇒ S{n} = {}·(1 - {}^{n})/(1 - {}) = {}.",
                    num(s.first),
                    super::factor(s.ratio),
                    super::factor(s.ratio),
                    num(sum)
                ),
                tolerance: TOLERANCE,
            }
        }
        ProblemKind::IdentifySequence => {
            // Constant sequences are both kinds; d ≠ 0 and r ≠ 1 rule them out
            let geometric = rng.gen_bool(0.5);
            let (terms, hint) = if geometric {
                let s = random_geometric(rng);
                (
                    s.terms(TERMS_SHOWN),
                    format!("Gai bakoitza aurrekoa bider {} da: geometrikoa.", num(s.ratio)),
                )
            } else {
                let s = random_arithmetic(rng);
                (
                    s.terms(TERMS_SHOWN),
                    format!(
                        "Gai bakoitza aurrekoa gehi {} da: aritmetikoa.",
                        super::factor(s.difference)
                    ),
                )
            };
            Problem {
                kind,
                prompt: format!(
                    "{}, ... segida aritmetikoa ala geometrikoa da? (1: {}, 2: {})",
                    list(&terms),
                    SEQUENCE_OPTIONS[0],
                    SEQUENCE_OPTIONS[1]
                ),
                solution: Solution::Choice {
                    index: usize::from(geometric),
                    options: SEQUENCE_OPTIONS.to_vec(),
                },
                hint,
                tolerance: 0.0,
            }
        }
        other => unreachable!("{other:?} is not a sequence exercise"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use zenbaki_series::classify;

    #[test]
    fn test_identify_is_unambiguous() {
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        for _ in 0..100 {
            let s = random_arithmetic(&mut rng);
            let c = classify(&s.terms(TERMS_SHOWN), 1e-9).unwrap();
            assert!(c.is_arithmetic() && !c.is_ambiguous());

            let g = random_geometric(&mut rng);
            let c = classify(&g.terms(TERMS_SHOWN), 1e-9).unwrap();
            assert!(c.is_geometric() && !c.is_ambiguous());
        }
    }
}
