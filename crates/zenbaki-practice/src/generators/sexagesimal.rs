//! Degree-minute-second exercises.

use rand::Rng;
use zenbaki_sexagesimal::{decimal_to_dms, Dms};

use super::num;
use crate::problem::{Problem, ProblemKind, Solution};

/// Degrees and minutes must match exactly once parsed.
const FIELD_TOLERANCE: f64 = 0.01;
/// Decimal answers are asked with four decimals.
const DECIMAL_TOLERANCE: f64 = 0.001;

fn random_dms<R: Rng + ?Sized>(rng: &mut R, max_degrees: i64) -> Dms {
    Dms::new(
        rng.gen_range(0..=max_degrees),
        rng.gen_range(0..60),
        f64::from(rng.gen_range(0u32..60)),
    )
}

pub(super) fn generate<R: Rng + ?Sized>(kind: ProblemKind, rng: &mut R) -> Problem {
    match kind {
        ProblemKind::DecimalToDms => {
            let value = f64::from(rng.gen_range(0u32..90)) + f64::from(rng.gen_range(1u32..10_000)) / 10_000.0;
            let dms = decimal_to_dms(value);
            let minutes_exact = value.fract() * 60.0;
            Problem {
                kind,
                prompt: format!("Adierazi {}° gradu, minutu eta segundotan.", num(value)),
                solution: Solution::Dms(dms),
                hint: format!(
                    "Zati osoa: {}°. {}·60 = {}' ⇒ {}'. {}·60 ≈ {}\". Emaitza: {dms}.",
                    dms.degrees,
                    num(value.fract()),
                    num(minutes_exact),
                    dms.minutes,
                    num(minutes_exact.fract()),
                    num(dms.seconds)
                ),
                tolerance: FIELD_TOLERANCE,
            }
        }
        ProblemKind::DmsToDecimal => {
            let dms = random_dms(rng, 89);
            let value = dms.to_decimal();
            Problem {
                kind,
                prompt: format!("Adierazi {dms} gradu hamartarretan (lau hamartarrekin)."),
                solution: Solution::Scalar(value),
                hint: format!(
                    "{} + {}/60 + {}/3600 ≈ {}°.",
                    dms.degrees,
                    dms.minutes,
                    num(dms.seconds),
                    num(value)
                ),
                tolerance: DECIMAL_TOLERANCE,
            }
        }
        ProblemKind::DmsAddition => {
            let a = random_dms(rng, 90);
            let b = random_dms(rng, 90);
            let raw = a.unnormalized().plus(b.unnormalized());
            let sum = a + b;
            Problem {
                kind,
                prompt: format!("Kalkulatu {a} + {b}."),
                solution: Solution::Dms(sum),
                hint: format!(
                    "Batu eremuak banan-banan: {raw}. 60\" = 1' eta 60' = 1° eramanez: {sum}."
                ),
                tolerance: FIELD_TOLERANCE,
            }
        }
        ProblemKind::DmsSubtraction => {
            let x = random_dms(rng, 120);
            let y = random_dms(rng, 120);
            let (a, b) = if x.total_seconds() >= y.total_seconds() {
                (x, y)
            } else {
                (y, x)
            };
            let difference = a - b;
            let borrow = if b.seconds > a.seconds || b.minutes > a.minutes {
                " Kentzailea handiagoa den eremuetan, hurrengo unitatetik 1 hartu (1' = 60\", 1° = 60')."
            } else {
                ""
            };
            Problem {
                kind,
                prompt: format!("Kalkulatu {a} - {b}."),
                solution: Solution::Dms(difference),
                hint: format!("Kendu segundoak, minutuak eta graduak.{borrow} Emaitza: {difference}."),
                tolerance: FIELD_TOLERANCE,
            }
        }
        other => unreachable!("{other:?} is not a sexagesimal exercise"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_subtraction_is_never_negative() {
        let mut rng = ChaCha8Rng::seed_from_u64(12);
        for _ in 0..100 {
            let problem = generate(ProblemKind::DmsSubtraction, &mut rng);
            let Solution::Dms(dms) = problem.solution else {
                panic!("expected a DMS solution");
            };
            assert!(!dms.negative);
        }
    }
}
