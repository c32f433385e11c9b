//! Property-based tests for vector arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::Vector2;

    fn small_component() -> impl Strategy<Value = f64> {
        (-100i32..100i32).prop_map(f64::from)
    }

    fn small_vector() -> impl Strategy<Value = Vector2> {
        (small_component(), small_component()).prop_map(|(x, y)| Vector2::new(x, y))
    }

    fn nonzero_vector() -> impl Strategy<Value = Vector2> {
        small_vector().prop_filter("vector must be non-zero", |v| v.magnitude() > 0.0)
    }

    proptest! {
        #[test]
        fn add_commutative(a in small_vector(), b in small_vector()) {
            prop_assert_eq!(a.add(b), b.add(a));
        }

        #[test]
        fn subtract_is_add_negated(a in small_vector(), b in small_vector()) {
            prop_assert_eq!(a.subtract(b), a.add(b.scale(-1.0)));
        }

        #[test]
        fn magnitude_scales_linearly(a in small_vector(), k in -20i32..20i32) {
            let k = f64::from(k);
            let lhs = a.scale(k).magnitude();
            let rhs = k.abs() * a.magnitude();
            prop_assert!((lhs - rhs).abs() <= 1e-9 * rhs.max(1.0));
        }

        #[test]
        fn magnitude_non_negative(a in small_vector()) {
            prop_assert!(a.magnitude() >= 0.0);
        }

        #[test]
        fn rotated_quarter_turn_is_perpendicular(a in nonzero_vector()) {
            let b = Vector2::new(-a.y, a.x);
            prop_assert!(a.is_perpendicular(b, 1e-9));
            prop_assert_eq!(a.dot(b), 0.0);
        }

        #[test]
        fn oblique_vectors_are_not_perpendicular(
            a in nonzero_vector(),
            k in prop_oneof![-5i32..0, 1i32..6],
        ) {
            // k·a plus a quarter turn of a: neither parallel nor perpendicular
            let b = a.scale(f64::from(k)).add(Vector2::new(-a.y, a.x));
            prop_assert_ne!(a.dot(b), 0.0);
            prop_assert!(!a.is_perpendicular(b, 1e-9));
            let angle = a.angle_between(b).unwrap();
            prop_assert!(angle > 0.0 && angle < 180.0);
            prop_assert!((angle - 90.0).abs() > 1e-6);
        }

        #[test]
        fn dot_zero_iff_right_angle(a in nonzero_vector(), b in nonzero_vector()) {
            let right = (a.angle_between(b).unwrap() - 90.0).abs() < 1e-9;
            prop_assert_eq!(a.dot(b) == 0.0, right);
            prop_assert_eq!(a.is_perpendicular(b, 1e-9), right);
        }

        #[test]
        fn dot_with_self_is_squared_magnitude(a in small_vector()) {
            let m = a.magnitude();
            prop_assert!((a.dot(a) - m * m).abs() <= 1e-6);
        }

        #[test]
        fn angle_in_range(a in small_vector()) {
            let angle = a.angle_degrees();
            prop_assert!((0.0..360.0).contains(&angle));
        }
    }
}
