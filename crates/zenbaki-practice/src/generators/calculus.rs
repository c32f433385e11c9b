//! Derivative and integral exercises.

use rand::Rng;
use zenbaki_calculus::{
    definite_integral, polynomial_tangent, riemann_sum, tangent_at, Function, RiemannRule,
};

use super::polynomials::random_polynomial;
use super::{factor, int, num, pick};
use crate::problem::{Problem, ProblemKind, Solution};

const TOLERANCE: f64 = 0.01;

/// Integer points inside every catalog domain.
const POSITIVE_POINTS: [f64; 4] = [1.0, 2.0, 3.0, 4.0];

pub(super) fn generate<R: Rng + ?Sized>(kind: ProblemKind, rng: &mut R) -> Problem {
    match kind {
        ProblemKind::PolynomialSlope => {
            let degree = rng.gen_range(2..=3);
            let p = random_polynomial(rng, degree);
            let x = int(rng, -3, 3);
            let derivative = p.derivative();
            let slope = derivative.evaluate(x);
            Problem {
                kind,
                prompt: format!("Kalkulatu f'({}), f(x) = {p} bada.", num(x)),
                solution: Solution::Scalar(slope),
                hint: format!(
                    "Berreketaren erregela: f'(x) = {derivative}. Beraz, f'({}) = {}.",
                    num(x),
                    num(slope)
                ),
                tolerance: TOLERANCE,
            }
        }
        ProblemKind::CatalogSlope => {
            let (f, x, slope) = loop {
                let f = pick(rng, &Function::ALL);
                let x = pick(rng, &POSITIVE_POINTS);
                if let Some(slope) = f.derivative(x) {
                    break (f, x, slope);
                }
            };
            Problem {
                kind,
                prompt: format!(
                    "Kalkulatu f'({}), f(x) = {} bada (bi hamartarrekin).",
                    num(x),
                    f.label()
                ),
                solution: Solution::Scalar(slope),
                hint: format!(
                    "f'(x) = {}, beraz f'({}) ≈ {}.",
                    f.derivative_label(),
                    num(x),
                    num(slope)
                ),
                tolerance: TOLERANCE,
            }
        }
        ProblemKind::TangentIntercept => {
            let (label, x, line) = if rng.gen_bool(0.5) {
                let p = random_polynomial(rng, 2);
                let x = int(rng, -3, 3);
                (p.to_string(), x, polynomial_tangent(&p, x))
            } else {
                loop {
                    let f = pick(rng, &[Function::Square, Function::Cube]);
                    let x = int(rng, -3, 3);
                    if let Some(line) = tangent_at(f, x) {
                        break (f.label().to_string(), x, line);
                    }
                }
            };
            Problem {
                kind,
                prompt: format!(
                    "f(x) = {label} kurbaren x = {} puntuko zuzen ukitzailea y = mx + n da. Zenbat da n?",
                    num(x)
                ),
                solution: Solution::Scalar(line.intercept),
                hint: format!(
                    "m = f'({x}) = {m}, f({x}) = {y}. y - {yf} = {m}·(x - {xf}) ⇒ n = {y} - {mf}·{xf} = {n}.",
                    x = num(x),
                    m = num(line.slope),
                    mf = factor(line.slope),
                    y = num(line.y0),
                    yf = factor(line.y0),
                    xf = factor(x),
                    n = num(line.intercept)
                ),
                tolerance: TOLERANCE,
            }
        }
        ProblemKind::PolynomialIntegral => {
            let degree = rng.gen_range(1..=2);
            let p = random_polynomial(rng, degree);
            let a = int(rng, -2, 1);
            let b = a + int(rng, 1, 3);
            let antiderivative = p.antiderivative();
            let value = p.definite_integral(a, b);
            Problem {
                kind,
                prompt: format!(
                    "Kalkulatu ∫ ({p}) dx, x = {} eta x = {} artean (bi hamartarrekin).",
                    num(a),
                    num(b)
                ),
                solution: Solution::Scalar(value),
                hint: format!(
                    "F(x) = {antiderivative}. Barrow: F({}) - F({}) = {} - {} = {}.",
                    num(b),
                    num(a),
                    factor(antiderivative.evaluate(b)),
                    factor(antiderivative.evaluate(a)),
                    num(value)
                ),
                tolerance: TOLERANCE,
            }
        }
        ProblemKind::CatalogIntegral => {
            let (f, a, b, value) = loop {
                let f = pick(rng, &Function::ALL);
                let a = int(rng, 0, 2);
                let b = a + int(rng, 1, 2);
                if let Some(value) = definite_integral(f, a, b) {
                    break (f, a, b, value);
                }
            };
            Problem {
                kind,
                prompt: format!(
                    "Kalkulatu ∫ {} dx, x = {} eta x = {} artean (bi hamartarrekin).",
                    f.label(),
                    num(a),
                    num(b)
                ),
                solution: Solution::Scalar(value),
                hint: format!(
                    "Jatorrizko funtzioa: F(x) = {}. F({}) - F({}) ≈ {}.",
                    f.antiderivative_label(),
                    num(b),
                    num(a),
                    num(value)
                ),
                tolerance: TOLERANCE,
            }
        }
        ProblemKind::MidpointSum => {
            let f = pick(rng, &[Function::Square, Function::Cube, Function::Sqrt]);
            let a = int(rng, 0, 2);
            let b = a + int(rng, 1, 2);
            let n = pick(rng, &[2usize, 4]);
            let Ok(sum) = riemann_sum(|x| f.eval(x), a, b, n, RiemannRule::Midpoint) else {
                unreachable!("{n} sub-intervals over finite bounds always sum");
            };
            let midpoints: Vec<String> = sum
                .rectangles
                .iter()
                .map(|r| num(r.left + sum.width / 2.0))
                .collect();
            Problem {
                kind,
                prompt: format!(
                    "Hurbildu ∫ {} dx, x = {} eta x = {} artean, erdiko puntuaren erregelarekin eta {n} laukizuzenekin (bi hamartarrekin).",
                    f.label(),
                    num(a),
                    num(b)
                ),
                solution: Solution::Scalar(sum.value),
                hint: format!(
                    "Δx = {}; erdiko puntuak: {}. Batura: Δx·Σf(xᵢ) ≈ {}. Balio zehatza: {}.",
                    num(sum.width),
                    midpoints.join(", "),
                    num(sum.value),
                    definite_integral(f, a, b).map_or_else(|| "-".to_string(), num)
                ),
                tolerance: TOLERANCE,
            }
        }
        other => unreachable!("{other:?} is not a calculus exercise"),
    }
}
