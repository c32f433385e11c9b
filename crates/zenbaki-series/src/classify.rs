//! Deciding whether a list of terms is arithmetic or geometric.

use zenbaki_core::{approx_eq, MathError, MathResult};

/// Fewest terms accepted by [`classify`].
pub const MIN_CLASSIFY_TERMS: usize = 3;

/// What a list of terms is consistent with.
///
/// Both fields can be set at once: a constant sequence has difference 0
/// and ratio 1. The practice generator never produces such lists, but
/// callers that accept arbitrary input must handle the overlap.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Classification {
    /// Common difference, if consecutive differences agree.
    pub difference: Option<f64>,
    /// Common ratio, if consecutive ratios agree and no term is zero.
    pub ratio: Option<f64>,
}

impl Classification {
    /// True if the terms form an arithmetic progression.
    #[must_use]
    pub fn is_arithmetic(&self) -> bool {
        self.difference.is_some()
    }

    /// True if the terms form a geometric progression.
    #[must_use]
    pub fn is_geometric(&self) -> bool {
        self.ratio.is_some()
    }

    /// True if the terms are both, i.e. constant and non-zero.
    #[must_use]
    pub fn is_ambiguous(&self) -> bool {
        self.is_arithmetic() && self.is_geometric()
    }
}

/// Classifies `terms`, comparing differences and ratios within `epsilon`.
///
/// # Errors
///
/// Returns [`MathError::TooFewTerms`] for fewer than
/// [`MIN_CLASSIFY_TERMS`] terms.
pub fn classify(terms: &[f64], epsilon: f64) -> MathResult<Classification> {
    if terms.len() < MIN_CLASSIFY_TERMS {
        return Err(MathError::TooFewTerms {
            needed: MIN_CLASSIFY_TERMS,
            got: terms.len(),
        });
    }

    let difference = terms[1] - terms[0];
    let arithmetic = terms
        .windows(2)
        .all(|w| approx_eq(w[1] - w[0], difference, epsilon));

    let geometric = terms.iter().all(|t| *t != 0.0) && {
        let ratio = terms[1] / terms[0];
        terms
            .windows(2)
            .all(|w| approx_eq(w[1] / w[0], ratio, epsilon))
    };

    Ok(Classification {
        difference: arithmetic.then_some(difference),
        ratio: geometric.then(|| terms[1] / terms[0]),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic() {
        let c = classify(&[2.0, 5.0, 8.0, 11.0], 1e-9).unwrap();
        assert_eq!(c.difference, Some(3.0));
        assert!(!c.is_geometric());
    }

    #[test]
    fn test_geometric() {
        let c = classify(&[3.0, -6.0, 12.0, -24.0], 1e-9).unwrap();
        assert_eq!(c.ratio, Some(-2.0));
        assert!(!c.is_arithmetic());
    }

    #[test]
    fn test_neither() {
        let c = classify(&[1.0, 2.0, 4.0, 7.0], 1e-9).unwrap();
        assert_eq!(c, Classification::default());
    }

    #[test]
    fn test_constant_is_both() {
        let c = classify(&[4.0, 4.0, 4.0], 1e-9).unwrap();
        assert!(c.is_ambiguous());
        assert_eq!(c.difference, Some(0.0));
        assert_eq!(c.ratio, Some(1.0));
    }

    #[test]
    fn test_zero_terms_not_geometric() {
        let c = classify(&[0.0, 0.0, 0.0], 1e-9).unwrap();
        assert!(c.is_arithmetic());
        assert!(!c.is_geometric());
    }

    #[test]
    fn test_floating_tolerance() {
        let c = classify(&[0.1, 0.2, 0.30000000000000004, 0.4], 1e-9).unwrap();
        assert!(c.is_arithmetic());
    }

    #[test]
    fn test_too_few() {
        assert_eq!(
            classify(&[1.0, 2.0], 1e-9),
            Err(MathError::TooFewTerms { needed: 3, got: 2 })
        );
    }
}
