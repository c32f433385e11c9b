//! Property-based tests for progression formulas.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{classify, Arithmetic, Geometric, Progression};

    fn small_int() -> impl Strategy<Value = f64> {
        (-50i32..50i32).prop_map(f64::from)
    }

    fn non_unit_ratio() -> impl Strategy<Value = f64> {
        prop_oneof![(-4i32..=-1i32), (2i32..=4i32)].prop_map(f64::from)
    }

    proptest! {
        #[test]
        fn arithmetic_sum_difference_is_term(a1 in small_int(), d in small_int(), n in 2u32..60) {
            let a = Arithmetic::new(a1, d);
            prop_assert_eq!(a.sum_first(n) - a.sum_first(n - 1), a.nth_term(n));
        }

        #[test]
        fn geometric_sum_difference_is_term(a1 in small_int(), r in non_unit_ratio(), n in 2u32..12) {
            let g = Geometric::new(a1, r);
            let diff = g.sum_first(n) - g.sum_first(n - 1);
            let term = g.nth_term(n);
            prop_assert!((diff - term).abs() <= 1e-9 * term.abs().max(1.0));
        }

        #[test]
        fn terms_match_nth_term(a1 in small_int(), d in small_int(), count in 0u32..20) {
            let a = Arithmetic::new(a1, d);
            let terms = a.terms(count);
            prop_assert_eq!(terms.len(), count as usize);
            for (i, t) in terms.iter().enumerate() {
                prop_assert_eq!(*t, a.nth_term(i as u32 + 1));
            }
        }

        #[test]
        fn generated_arithmetic_is_recognized(a1 in small_int(), d in small_int()) {
            let terms = Arithmetic::new(a1, d).terms(5);
            let c = classify(&terms, 1e-9).unwrap();
            prop_assert_eq!(c.difference, Some(d));
        }

        #[test]
        fn generated_geometric_is_recognized(a1 in (1i32..20).prop_map(f64::from), r in non_unit_ratio()) {
            let terms = Geometric::new(a1, r).terms(5);
            let c = classify(&terms, 1e-9).unwrap();
            prop_assert_eq!(c.ratio, Some(r));
            prop_assert!(!c.is_arithmetic());
        }
    }
}
