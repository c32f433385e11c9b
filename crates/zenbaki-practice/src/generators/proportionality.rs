//! Rule-of-three and percentage exercises.

use rand::Rng;
use zenbaki_ratio::{apply_percent_change, direct_rule_of_three, inverse_rule_of_three, percent_of};

use super::{int, num, pick};
use crate::problem::{Problem, ProblemKind, Solution};

const TOLERANCE: f64 = 0.01;

/// Goods sold by weight, with a per-kilo price.
const GOODS: [&str; 4] = ["sagar", "gazta", "kafe", "arroz"];

fn divisors(n: u32) -> Vec<u32> {
    (1..=n).filter(|d| n % d == 0).collect()
}

pub(super) fn generate<R: Rng + ?Sized>(kind: ProblemKind, rng: &mut R) -> Problem {
    match kind {
        ProblemKind::DirectRule => {
            let good = pick(rng, &GOODS);
            let a = int(rng, 2, 10);
            let price = int(rng, 1, 9);
            let b = a * price;
            let mut c = int(rng, 2, 15);
            while (c - a).abs() < f64::EPSILON {
                c = int(rng, 2, 15);
            }
            let Ok(answer) = direct_rule_of_three(a, b, c) else {
                unreachable!("reference quantity {a} is never zero");
            };
            Problem {
                kind,
                prompt: format!(
                    "{} kg {good}ek {} € balio badute, zenbat balio dute {} kg-k?",
                    num(a),
                    num(b),
                    num(c)
                ),
                solution: Solution::Scalar(answer),
                hint: format!(
                    "Zuzenki proportzionalak dira: {} / {} = x / {} ⇒ x = {}·{} / {} = {} €.",
                    num(b),
                    num(a),
                    num(c),
                    num(b),
                    num(c),
                    num(a),
                    num(answer)
                ),
                tolerance: TOLERANCE,
            }
        }
        ProblemKind::InverseRule => {
            let workers = rng.gen_range(2u32..=8);
            let days = rng.gen_range(2u32..=12);
            let total = workers * days;
            let options: Vec<u32> = divisors(total)
                .into_iter()
                .filter(|d| *d != workers)
                .collect();
            let other = pick(rng, &options);
            let (a, b, c) = (f64::from(other), f64::from(total / other), f64::from(workers));
            let Ok(answer) = inverse_rule_of_three(a, b, c) else {
                unreachable!("worker count {c} is never zero");
            };
            Problem {
                kind,
                prompt: format!(
                    "{} langilek {} egunetan egiten dute lan bat. Zenbat egun beharko lituzkete {} langilek?",
                    num(a),
                    num(b),
                    num(c)
                ),
                solution: Solution::Scalar(answer),
                hint: format!(
                    "Alderantziz proportzionalak dira: {}·{} = {}·x ⇒ x = {} / {} = {} egun.",
                    num(a),
                    num(b),
                    num(c),
                    num(a * b),
                    num(c),
                    num(answer)
                ),
                tolerance: TOLERANCE,
            }
        }
        ProblemKind::Percentage => {
            let percent = 5.0 * int(rng, 1, 19);
            let total = 20.0 * int(rng, 1, 25);
            let answer = percent_of(percent, total);
            Problem {
                kind,
                prompt: format!("Kalkulatu {}ren %{}.", num(total), num(percent)),
                solution: Solution::Scalar(answer),
                hint: format!(
                    "{}·{} / 100 = {}.",
                    num(total),
                    num(percent),
                    num(answer)
                ),
                tolerance: TOLERANCE,
            }
        }
        ProblemKind::PercentChange => {
            let price = 10.0 * int(rng, 2, 30);
            let percent = 5.0 * int(rng, 1, 8);
            let increase = rng.gen_bool(0.5);
            let signed = if increase { percent } else { -percent };
            let answer = apply_percent_change(price, signed);
            let (what, sign) = if increase {
                ("igoera", "+")
            } else {
                ("beherapena", "-")
            };
            Problem {
                kind,
                prompt: format!(
                    "{} €-ko produktu batek %{}eko {what} du. Zenbat balio du orain?",
                    num(price),
                    num(percent)
                ),
                solution: Solution::Scalar(answer),
                hint: format!(
                    "{}·(1 {sign} {}/100) = {}·{} = {} €.",
                    num(price),
                    num(percent),
                    num(price),
                    num(1.0 + signed / 100.0),
                    num(answer)
                ),
                tolerance: TOLERANCE,
            }
        }
        other => unreachable!("{other:?} is not a proportionality exercise"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_divisors() {
        assert_eq!(divisors(12), vec![1, 2, 3, 4, 6, 12]);
    }

    #[test]
    fn test_direct_answers_come_from_rule_of_three() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for _ in 0..50 {
            let problem = generate(ProblemKind::DirectRule, &mut rng);
            let Solution::Scalar(price) = problem.solution else {
                panic!("expected a scalar solution");
            };
            assert!(price >= 2.0);
            assert!((price - price.round()).abs() < 1e-9, "{}", problem.hint);
            assert!(problem.hint.ends_with(&format!("= {} €.", num(price))));
        }
    }

    #[test]
    fn test_inverse_answers_are_whole_days() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        for _ in 0..50 {
            let problem = generate(ProblemKind::InverseRule, &mut rng);
            let Solution::Scalar(days) = problem.solution else {
                panic!("expected a scalar solution");
            };
            assert!((days - days.round()).abs() < 1e-9);
        }
    }
}
