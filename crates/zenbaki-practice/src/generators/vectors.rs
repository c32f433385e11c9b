//! Vector exercises.

use rand::Rng;
use zenbaki_vector::Vector2;

use super::{factor, int, num, pick};
use crate::problem::{Problem, ProblemKind, Solution};

const TOLERANCE: f64 = 0.01;
const ANGLE_TOLERANCE: f64 = 0.5;

fn random_vector<R: Rng + ?Sized>(rng: &mut R) -> Vector2 {
    Vector2::new(int(rng, -6, 6), int(rng, -6, 6))
}

fn nonzero_vector<R: Rng + ?Sized>(rng: &mut R) -> Vector2 {
    loop {
        let v = random_vector(rng);
        if v.magnitude() > 0.0 {
            return v;
        }
    }
}

pub(super) fn generate<R: Rng + ?Sized>(kind: ProblemKind, rng: &mut R) -> Problem {
    let u = random_vector(rng);
    let v = random_vector(rng);

    match kind {
        ProblemKind::VectorSum => {
            let sum = u + v;
            Problem {
                kind,
                prompt: format!("Kalkulatu u + v, u = {u} eta v = {v} badira."),
                solution: Solution::Pair(sum.x, sum.y),
                hint: format!(
                    "Osagaiak banan-banan batzen dira: ({} + {}, {} + {}) = {sum}.",
                    num(u.x),
                    factor(v.x),
                    num(u.y),
                    factor(v.y)
                ),
                tolerance: TOLERANCE,
            }
        }
        ProblemKind::VectorMagnitude => {
            // 3-4-5 style triples give integer answers half the time
            let u = if rng.gen_bool(0.5) {
                let (a, b) = pick(rng, &[(3.0, 4.0), (6.0, 8.0), (5.0, 12.0), (8.0, 6.0)]);
                let sx = pick(rng, &[-1.0, 1.0]);
                let sy = pick(rng, &[-1.0, 1.0]);
                Vector2::new(sx * a, sy * b)
            } else {
                u
            };
            let m = u.magnitude();
            Problem {
                kind,
                prompt: format!("Kalkulatu u = {u} bektorearen modulua (bi hamartarrekin)."),
                solution: Solution::Scalar(m),
                hint: format!(
                    "|u| = √({}² + {}²) = √{} ≈ {}.",
                    factor(u.x),
                    factor(u.y),
                    num(u.dot(u)),
                    num(m)
                ),
                tolerance: TOLERANCE,
            }
        }
        ProblemKind::DotProduct => {
            let dot = u.dot(v);
            let mut hint = format!(
                "u · v = {}·{} + {}·{} = {}.",
                factor(u.x),
                factor(v.x),
                factor(u.y),
                factor(v.y),
                num(dot)
            );
            if u.is_perpendicular(v, 0.0) {
                hint.push_str(" Emaitza 0 denez, bektoreak perpendikularrak dira.");
            }
            Problem {
                kind,
                prompt: format!("Kalkulatu u · v biderkadura eskalarra, u = {u} eta v = {v} badira."),
                solution: Solution::Scalar(dot),
                hint,
                tolerance: TOLERANCE,
            }
        }
        ProblemKind::VectorAngle => {
            let u = nonzero_vector(rng);
            let angle = u.angle_degrees();
            Problem {
                kind,
                prompt: format!(
                    "Zein da u = {u} bektorearen norabide-angelua gradutan (0° eta 360° artean)?"
                ),
                solution: Solution::Scalar(angle),
                hint: format!(
                    "θ = atan2({}, {}) ≈ {}°, X ardatz positibotik neurtuta.",
                    num(u.y),
                    num(u.x),
                    num(angle)
                ),
                tolerance: ANGLE_TOLERANCE,
            }
        }
        other => unreachable!("{other:?} is not a vector exercise"),
    }
}
