//! Property-based tests for sexagesimal conversion and arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{decimal_to_dms, dms_to_decimal, Dms};

    fn whole_seconds_dms() -> impl Strategy<Value = Dms> {
        (-359i64..360, 0u32..60, 0u32..60)
            .prop_map(|(d, m, s)| Dms::new(d, m, f64::from(s)))
    }

    proptest! {
        #[test]
        fn decimal_round_trip(value in -720.0f64..720.0) {
            let dms = decimal_to_dms(value);
            let back = dms.to_decimal();
            // 0.005" of rounding is under 1.4e-6 degrees
            prop_assert!((back - value).abs() < 2e-6);
        }

        #[test]
        fn normalized_fields_in_range(value in -720.0f64..720.0) {
            let dms = decimal_to_dms(value);
            prop_assert!(dms.minutes < 60);
            prop_assert!((0.0..60.0).contains(&dms.seconds));
        }

        #[test]
        fn field_round_trip(d in 0i64..360, m in 0u32..60, s in 0u32..60) {
            let value = dms_to_decimal(d, m, f64::from(s));
            prop_assert_eq!(decimal_to_dms(value), Dms::new(d, m, f64::from(s)));
        }

        #[test]
        fn add_then_subtract_restores(a in whole_seconds_dms(), b in whole_seconds_dms()) {
            prop_assert_eq!((a + b) - b, a);
        }

        #[test]
        fn add_matches_total_seconds(a in whole_seconds_dms(), b in whole_seconds_dms()) {
            let sum = a + b;
            prop_assert_eq!(sum.total_seconds(), a.total_seconds() + b.total_seconds());
        }

        #[test]
        fn add_commutative(a in whole_seconds_dms(), b in whole_seconds_dms()) {
            prop_assert_eq!(a + b, b + a);
        }
    }
}
