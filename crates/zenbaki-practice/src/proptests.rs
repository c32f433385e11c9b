//! Property-based tests for generated problems.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::{generate, generate_kind, parse_number, ProblemKind, Solution, Topic, Verdict};

    fn any_topic() -> impl Strategy<Value = Topic> {
        (0..Topic::ALL.len()).prop_map(|i| Topic::ALL[i])
    }

    fn any_kind() -> impl Strategy<Value = ProblemKind> {
        (0..ProblemKind::ALL.len()).prop_map(|i| ProblemKind::ALL[i])
    }

    proptest! {
        #[test]
        fn own_solution_is_correct(seed in any::<u64>(), topic in any_topic()) {
            let problem = generate(topic, &mut ChaCha8Rng::seed_from_u64(seed));
            let answer = problem.solution.answer_fields();
            let fields: Vec<&str> = answer.iter().map(String::as_str).collect();
            prop_assert_eq!(problem.check(&fields), Verdict::Correct);
        }

        #[test]
        fn garbage_is_invalid(seed in any::<u64>(), kind in any_kind()) {
            let problem = generate_kind(kind, &mut ChaCha8Rng::seed_from_u64(seed));
            let fields = vec!["ez dakit"; problem.solution.field_count()];
            prop_assert_eq!(problem.check(&fields), Verdict::Invalid);
        }

        #[test]
        fn wrong_field_count_is_invalid(seed in any::<u64>(), kind in any_kind()) {
            let problem = generate_kind(kind, &mut ChaCha8Rng::seed_from_u64(seed));
            let fields = vec!["1"; problem.solution.field_count() + 1];
            prop_assert_eq!(problem.check(&fields), Verdict::Invalid);
        }

        #[test]
        fn far_off_scalar_is_incorrect(seed in any::<u64>(), kind in any_kind()) {
            let problem = generate_kind(kind, &mut ChaCha8Rng::seed_from_u64(seed));
            if let Solution::Scalar(x) = problem.solution {
                let wrong = (x + 1000.0).to_string();
                prop_assert_eq!(problem.check(&[wrong.as_str()]), Verdict::Incorrect);
            }
        }

        #[test]
        fn solutions_are_finite(seed in any::<u64>(), kind in any_kind()) {
            let problem = generate_kind(kind, &mut ChaCha8Rng::seed_from_u64(seed));
            for field in problem.solution.answer_fields() {
                if !matches!(problem.solution, Solution::Choice { .. }) {
                    prop_assert!(parse_number(&field).is_some(), "{}", field);
                }
            }
        }

        #[test]
        fn comma_decimals_parse(int in -1000i32..1000, frac in 0u32..100) {
            let text = format!("{int},{frac:02}");
            let expected = format!("{int}.{frac:02}").parse::<f64>().unwrap();
            prop_assert_eq!(parse_number(&text), Some(expected));
        }
    }
}
