//! Number formatting for prompts, tables and worked solutions.
//!
//! Results are rounded to a fixed number of decimals and trailing zeros
//! are stripped, so `0.1 + 0.2` prints as `0.3` and `2.50` as `2.5`.

/// Formats `x` rounded to `decimals` places with trailing zeros removed.
///
/// Negative zero prints as `0`.
#[must_use]
pub fn format_number(x: f64, decimals: usize) -> String {
    if !x.is_finite() {
        return if x.is_nan() {
            "NaN".to_string()
        } else if x > 0.0 {
            "∞".to_string()
        } else {
            "-∞".to_string()
        };
    }

    let mut s = format!("{x:.decimals$}");
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}

/// Formats `x` with an explicit leading sign, e.g. `+ 3` or `- 2.5`.
///
/// Used when appending a term to an expression that already has a head.
#[must_use]
pub fn format_signed(x: f64, decimals: usize) -> String {
    let magnitude = format_number(x.abs(), decimals);
    if x < 0.0 && magnitude != "0" {
        format!("- {magnitude}")
    } else {
        format!("+ {magnitude}")
    }
}

/// Renders a non-negative integer with Unicode superscript digits.
#[must_use]
pub fn superscript(n: usize) -> String {
    const DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];
    n.to_string()
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| DIGITS[d as usize])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_trailing_zeros() {
        assert_eq!(format_number(2.5, 4), "2.5");
        assert_eq!(format_number(1000.0, 6), "1000");
        assert_eq!(format_number(0.1 + 0.2, 6), "0.3");
        assert_eq!(format_number(2.0 / 3.0, 3), "0.667");
    }

    #[test]
    fn test_negative_zero() {
        assert_eq!(format_number(-0.0, 2), "0");
        assert_eq!(format_number(-0.0001, 2), "0");
    }

    #[test]
    fn test_no_decimals() {
        assert_eq!(format_number(12.0, 0), "12");
    }

    #[test]
    fn test_signed() {
        assert_eq!(format_signed(3.0, 2), "+ 3");
        assert_eq!(format_signed(-2.5, 2), "- 2.5");
    }

    #[test]
    fn test_superscript() {
        assert_eq!(superscript(2), "²");
        assert_eq!(superscript(10), "¹⁰");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_number(f64::NAN, 2), "NaN");
        assert_eq!(format_number(f64::INFINITY, 2), "∞");
    }
}
