//! Polynomial exercises: evaluation, Ruffini's rule, products.

use rand::Rng;
use zenbaki_poly::Polynomial;

use super::{factor, int, nonzero_int, num};
use crate::problem::{Problem, ProblemKind, Solution};

const TOLERANCE: f64 = 0.01;
const REMAINDER_EPSILON: f64 = 1e-9;

/// A polynomial of the given degree with small integer coefficients and a
/// non-zero leading term.
pub(super) fn random_polynomial<R: Rng + ?Sized>(rng: &mut R, degree: usize) -> Polynomial {
    let mut coeffs = Vec::with_capacity(degree + 1);
    coeffs.push(nonzero_int(rng, -4, 4));
    for _ in 0..degree {
        coeffs.push(int(rng, -6, 6));
    }
    Polynomial::new(coeffs)
}

pub(super) fn generate<R: Rng + ?Sized>(kind: ProblemKind, rng: &mut R) -> Problem {
    match kind {
        ProblemKind::PolynomialValue => {
            let degree = rng.gen_range(2..=3);
            let p = random_polynomial(rng, degree);
            let x = int(rng, -3, 3);
            let value = p.evaluate(x);
            Problem {
                kind,
                prompt: format!("Kalkulatu P({}), P(x) = {p} bada.", num(x)),
                solution: Solution::Scalar(value),
                hint: format!(
                    "Ordezkatu x = {}: P({}) = {}. Ruffiniren erregelaz ere lor daiteke: hondarra P({}) da.",
                    factor(x),
                    num(x),
                    num(value),
                    num(x)
                ),
                tolerance: TOLERANCE,
            }
        }
        ProblemKind::RuffiniRemainder => {
            let degree = rng.gen_range(2..=4);
            let root = nonzero_int(rng, -3, 3);
            // Half the time build an exact factor so the remainder is zero
            let p = if rng.gen_bool(0.5) {
                random_polynomial(rng, degree - 1).multiply(&Polynomial::linear_factor(root))
            } else {
                random_polynomial(rng, degree)
            };
            let divisor = Polynomial::linear_factor(root);
            let (remainder, hint) = match p.synthetic_division(root) {
                Ok(division) => {
                    let mut hint = format!(
                        "Ruffini:\n{}\nZatidura: {}. Hondarra: {}.",
                        division.tableau(&p),
                        division.quotient,
                        num(division.remainder)
                    );
                    if division.is_exact(REMAINDER_EPSILON) {
                        hint.push_str(&format!(" Beraz, ({divisor}) P(x)-ren faktorea da."));
                    } else {
                        hint.push_str(&format!(
                            " Faktorearen teoremaz, P({}) = {} ere bada.",
                            num(root),
                            num(division.remainder)
                        ));
                    }
                    (division.remainder, hint)
                }
                Err(err) => (p.evaluate(root), err.to_string()),
            };
            Problem {
                kind,
                prompt: format!(
                    "Ruffiniren erregela erabiliz, zatitu P(x) = {p} polinomioa ({divisor}) binomioaz. Zein da hondarra?"
                ),
                solution: Solution::Scalar(remainder),
                hint,
                tolerance: TOLERANCE,
            }
        }
        ProblemKind::ProductCoefficient => {
            let a_degree = rng.gen_range(1..=2);
            let b_degree = rng.gen_range(1..=2);
            let a = random_polynomial(rng, a_degree);
            let b = random_polynomial(rng, b_degree);
            let product = a.multiply(&b);
            let power = rng.gen_range(0..=product.degree());
            let coefficient = product.coefficient(power);
            let term = match power {
                0 => "gai askearen".to_string(),
                1 => "x-ren koefizientearen".to_string(),
                p => format!("x{}-ren koefizientearen", zenbaki_core::superscript(p)),
            };
            Problem {
                kind,
                prompt: format!(
                    "Biderkatu P(x) = {a} eta Q(x) = {b}. Zein da emaitzaren {term} balioa?"
                ),
                solution: Solution::Scalar(coefficient),
                hint: format!("P(x)·Q(x) = {product}."),
                tolerance: TOLERANCE,
            }
        }
        other => unreachable!("{other:?} is not a polynomial exercise"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_random_polynomial_shape() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for degree in 1..=4 {
            let p = random_polynomial(&mut rng, degree);
            assert_eq!(p.degree(), degree);
            assert!(p.leading_coefficient() != 0.0);
        }
    }

    #[test]
    fn test_remainder_hint_shows_tableau() {
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        for _ in 0..50 {
            let problem = generate(ProblemKind::RuffiniRemainder, &mut rng);
            assert!(problem.hint.starts_with("Ruffini:"));
        }
    }
}
