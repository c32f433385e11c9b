//! Random exercise generators, one module per topic.
//!
//! Every generator takes the random source explicitly so tests can seed
//! it. Operands are small integers, picked so the expected answer is an
//! integer or needs at most a couple of decimals.

mod calculus;
mod polynomials;
mod proportionality;
mod sequences;
mod sexagesimal;
mod units;
mod vectors;

use rand::Rng;
use zenbaki_core::format_number;

use crate::problem::{Problem, ProblemKind, Topic};

/// Decimals used for numbers embedded in prompts and hints.
const TEXT_DECIMALS: usize = 4;

/// Generates a problem of a random kind within `topic`.
pub fn generate<R: Rng + ?Sized>(topic: Topic, rng: &mut R) -> Problem {
    let kinds = topic.kinds();
    let kind = kinds[rng.gen_range(0..kinds.len())];
    generate_kind(kind, rng)
}

/// Generates a problem of the given kind.
pub fn generate_kind<R: Rng + ?Sized>(kind: ProblemKind, rng: &mut R) -> Problem {
    let problem = match kind.topic() {
        Topic::Vectors => vectors::generate(kind, rng),
        Topic::Polynomials => polynomials::generate(kind, rng),
        Topic::Derivatives | Topic::Integrals => calculus::generate(kind, rng),
        Topic::Proportionality => proportionality::generate(kind, rng),
        Topic::Sequences => sequences::generate(kind, rng),
        Topic::Sexagesimal => sexagesimal::generate(kind, rng),
        Topic::Units => units::generate(kind, rng),
    };
    tracing::debug!(?kind, prompt = %problem.prompt, "generated problem");
    problem
}

/// Formats a number for running text.
fn num(x: f64) -> String {
    format_number(x, TEXT_DECIMALS)
}

/// Formats a number, wrapping negatives in parentheses for products.
fn factor(x: f64) -> String {
    if x < 0.0 {
        format!("({})", num(x))
    } else {
        num(x)
    }
}

/// A random integer in `lo..=hi` as `f64`.
fn int<R: Rng + ?Sized>(rng: &mut R, lo: i32, hi: i32) -> f64 {
    f64::from(rng.gen_range(lo..=hi))
}

/// A random non-zero integer in `lo..=hi` as `f64`.
fn nonzero_int<R: Rng + ?Sized>(rng: &mut R, lo: i32, hi: i32) -> f64 {
    loop {
        let x = rng.gen_range(lo..=hi);
        if x != 0 {
            return f64::from(x);
        }
    }
}

/// Picks one element of a non-empty slice.
fn pick<T: Copy, R: Rng + ?Sized>(rng: &mut R, items: &[T]) -> T {
    items[rng.gen_range(0..items.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::Verdict;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_every_kind_accepts_its_solution() {
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        for kind in ProblemKind::ALL {
            for _ in 0..25 {
                let problem = generate_kind(kind, &mut rng);
                assert_eq!(problem.kind, kind);
                assert!(!problem.prompt.is_empty());
                assert!(!problem.hint.is_empty());

                let answer = problem.solution.answer_fields();
                let fields: Vec<&str> = answer.iter().map(String::as_str).collect();
                assert_eq!(problem.check(&fields), Verdict::Correct, "{problem:?}");
            }
        }
    }

    #[test]
    fn test_generate_stays_in_topic() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for topic in Topic::ALL {
            for _ in 0..10 {
                assert_eq!(generate(topic, &mut rng).topic(), topic);
            }
        }
    }

    #[test]
    fn test_same_seed_same_problem() {
        let a = generate(Topic::Polynomials, &mut ChaCha8Rng::seed_from_u64(11));
        let b = generate(Topic::Polynomials, &mut ChaCha8Rng::seed_from_u64(11));
        assert_eq!(a, b);
    }

    #[test]
    fn test_nonzero_int() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        for _ in 0..100 {
            assert!(nonzero_int(&mut rng, -1, 1) != 0.0);
        }
    }

    #[test]
    fn test_factor_parenthesizes_negatives() {
        assert_eq!(factor(-3.0), "(-3)");
        assert_eq!(factor(2.5), "2.5");
    }
}
