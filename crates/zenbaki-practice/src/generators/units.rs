//! Unit conversion exercises.

use rand::Rng;
use zenbaki_units::{convert, format_quantity, Category, Unit};

use super::{int, num, pick};
use crate::problem::{Problem, ProblemKind, Solution};

const TOLERANCE: f64 = 0.01;
/// Metric conversions span at most this many prefix steps.
const MAX_METRIC_STEPS: usize = 3;

/// Picks two distinct units, the larger first.
fn unit_pair<R: Rng + ?Sized>(rng: &mut R, category: Category) -> (&'static Unit, &'static Unit) {
    let units = category.units();
    let max_steps = if category == Category::Time {
        units.len() - 1
    } else {
        MAX_METRIC_STEPS
    };
    let larger = rng.gen_range(0..units.len() - 1);
    let smaller = rng.gen_range(larger + 1..=(larger + max_steps).min(units.len() - 1));
    (&units[larger], &units[smaller])
}

pub(super) fn generate<R: Rng + ?Sized>(kind: ProblemKind, rng: &mut R) -> Problem {
    match kind {
        ProblemKind::UnitConversion => {
            let category = pick(rng, &Category::ALL);
            let (larger, smaller) = unit_pair(rng, category);
            let ratio = larger.factor / smaller.factor;

            // Keep both sides whole numbers: scale the smaller-unit side by the ratio
            let (value, from, to) = if rng.gen_bool(0.5) {
                (int(rng, 1, 25), larger, smaller)
            } else {
                ((int(rng, 1, 25) * ratio).round(), smaller, larger)
            };
            let Ok(answer) = convert(value, from.symbol, to.symbol, category) else {
                unreachable!("{} and {} come from the {category:?} table", from.symbol, to.symbol);
            };

            Problem {
                kind,
                prompt: format!(
                    "Bihurtu {} {} ({}) {}-tara.",
                    num(value),
                    from.symbol,
                    category.label(),
                    to.name
                ),
                solution: Solution::Scalar(answer),
                hint: format!(
                    "1 {} = {} {}. Beraz, {} = {}.",
                    larger.symbol,
                    num(ratio.round()),
                    smaller.symbol,
                    format_quantity(value, from),
                    format_quantity(answer, to)
                ),
                tolerance: TOLERANCE,
            }
        }
        other => unreachable!("{other:?} is not a unit exercise"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_unit_pair_order() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        for _ in 0..200 {
            let category = pick(&mut rng, &Category::ALL);
            let (larger, smaller) = unit_pair(&mut rng, category);
            assert!(larger.factor > smaller.factor);
            if category != Category::Time {
                assert!(larger.factor / smaller.factor <= 1000.0 + 1e-9);
            }
        }
    }

    #[test]
    fn test_answers_are_whole() {
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        for _ in 0..200 {
            let problem = generate(ProblemKind::UnitConversion, &mut rng);
            let Solution::Scalar(answer) = problem.solution else {
                panic!("expected a scalar solution");
            };
            assert!((answer - answer.round()).abs() < 1e-6, "{}", problem.prompt);
        }
    }
}
