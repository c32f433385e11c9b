//! Parsing learner input.

/// Parses a number typed by a learner.
///
/// Accepts a decimal comma (`3,5`), surrounding whitespace and a leading
/// `+`. Returns `None` for anything that is not a finite number.
#[must_use]
pub fn parse_number(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    let normalized = trimmed.replace(',', ".");
    normalized
        .parse::<f64>()
        .ok()
        .filter(|x| x.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(parse_number("42"), Some(42.0));
        assert_eq!(parse_number(" -3.5 "), Some(-3.5));
        assert_eq!(parse_number("3,5"), Some(3.5));
        assert_eq!(parse_number("+2"), Some(2.0));
    }

    #[test]
    fn test_reject() {
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("   "), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("1,000.5"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("NaN"), None);
    }
}
