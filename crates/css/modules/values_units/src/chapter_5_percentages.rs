//! CSS Values & Units Level 3: §5 Percentages
//! Spec: <https://www.w3.org/TR/css-values-3/#percentages>

use crate::CssNumber;

/// A CSS <percentage>, stored in CSS units (`50.0` is `50%`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Percentage(pub f32);

impl Percentage {
    /// Resolve against a reference size (§5.1).
    ///
    /// An unresolved reference yields an unresolved result.
    #[inline]
    pub fn of(self, reference: CssNumber) -> CssNumber {
        reference * (self.0 / 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if a percentage does not scale a definite reference, or resolves against an
    /// indefinite one.
    fn percentage_of_reference() {
        assert_eq!(
            Percentage(25.0).of(CssNumber::new(200.0)),
            CssNumber::new(50.0)
        );
        assert!(!Percentage(25.0).of(CssNumber::UNRESOLVED).is_resolved());
    }
}
