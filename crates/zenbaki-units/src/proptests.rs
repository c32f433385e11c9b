//! Property-based tests for unit conversion.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{convert, Category};

    fn category_and_units() -> impl Strategy<Value = (Category, &'static str, &'static str)> {
        proptest::sample::select(Category::ALL.to_vec()).prop_flat_map(|category| {
            let symbols: Vec<&'static str> = category.units().iter().map(|u| u.symbol).collect();
            (
                Just(category),
                proptest::sample::select(symbols.clone()),
                proptest::sample::select(symbols),
            )
        })
    }

    proptest! {
        #[test]
        fn round_trip((category, a, b) in category_and_units(), value in -1.0e6f64..1.0e6) {
            let there = convert(value, a, b, category).unwrap();
            let back = convert(there, b, a, category).unwrap();
            prop_assert!((back - value).abs() <= 1e-9 * value.abs().max(1.0));
        }

        #[test]
        fn same_unit_is_identity((category, a, _b) in category_and_units(), value in -1.0e6f64..1.0e6) {
            prop_assert_eq!(convert(value, a, a, category).unwrap(), value);
        }
    }
}
