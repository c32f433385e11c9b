//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use proptest::prelude::*;

    use crate::Polynomial;

    // Integer coefficients keep every operation exact in f64
    fn small_coeff() -> impl Strategy<Value = f64> {
        (-20i32..20i32).prop_map(f64::from)
    }

    // Strategy for generating small polynomials (degree 0-4)
    fn small_poly() -> impl Strategy<Value = Polynomial> {
        proptest::collection::vec(small_coeff(), 1..=5).prop_map(Polynomial::new)
    }

    // Leading coefficient non-zero
    fn monic_like_poly() -> impl Strategy<Value = Polynomial> {
        small_poly().prop_filter("leading coefficient must be non-zero", |p| {
            p.leading_coefficient() != 0.0
        })
    }

    fn small_point() -> impl Strategy<Value = f64> {
        (-5i32..=5i32).prop_map(f64::from)
    }

    proptest! {
        #[test]
        fn add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn add_keeps_longer_length(a in small_poly(), b in small_poly()) {
            let sum = a.add(&b);
            prop_assert_eq!(sum.degree(), a.degree().max(b.degree()));
        }

        #[test]
        fn evaluate_distributes_over_add(a in small_poly(), b in small_poly(), x in small_point()) {
            prop_assert_eq!(a.add(&b).evaluate(x), a.evaluate(x) + b.evaluate(x));
        }

        #[test]
        fn evaluate_distributes_over_subtract(a in small_poly(), b in small_poly(), x in small_point()) {
            prop_assert_eq!(a.subtract(&b).evaluate(x), a.evaluate(x) - b.evaluate(x));
        }

        #[test]
        fn evaluate_distributes_over_multiply(a in small_poly(), b in small_poly(), x in small_point()) {
            prop_assert_eq!(a.multiply(&b).evaluate(x), a.evaluate(x) * b.evaluate(x));
        }

        #[test]
        fn multiply_degree_is_sum(a in monic_like_poly(), b in monic_like_poly()) {
            let prod = a.multiply(&b);
            prop_assert_eq!(prod.degree(), a.degree() + b.degree());
            prop_assert!(prod.leading_coefficient() != 0.0);
        }

        #[test]
        fn multiply_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.multiply(&b), b.multiply(&a));
        }

        #[test]
        fn subtract_self_is_zero(a in small_poly()) {
            prop_assert!(a.subtract(&a).is_zero());
        }

        #[test]
        fn factor_theorem(coeffs in proptest::collection::vec(small_coeff(), 2..=5), root in small_point()) {
            let p = Polynomial::new(coeffs);
            let div = p.synthetic_division(root).unwrap();
            prop_assert_eq!(div.remainder, p.evaluate(root));
            prop_assert_eq!(div.quotient.degree() + 1, p.degree());
        }

        #[test]
        fn constructed_root_divides_exactly(q in small_poly(), root in small_point()) {
            let p = q.multiply(&Polynomial::linear_factor(root));
            let div = p.synthetic_division(root).unwrap();
            prop_assert!(div.is_exact(1e-9));
            prop_assert_eq!(div.quotient, q);
        }
    }
}
