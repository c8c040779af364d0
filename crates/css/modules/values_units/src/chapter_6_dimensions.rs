//! CSS Values & Units Level 3: §6 Dimensions
//! Spec: <https://www.w3.org/TR/css-values-3/#lengths>
//!
//! `CssDimension` is the specified form of every sizing property the flex algorithm reads
//! (`width`, `height`, `flex-basis`, `margin-*`, `gap`). Lengths are already in CSS px: unit
//! conversion belongs to the cascade, not to layout.

use crate::{CssNumber, Percentage};

/// Specified value of a sizing property.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum CssDimension {
    /// `auto`: meaning depends on the property (content size, free-space absorbing margin, ...).
    #[default]
    Auto,
    /// An absolute length in CSS px.
    Length(f32),
    /// A percentage of the reference size, in CSS units (`50.0` is `50%`).
    Percentage(f32),
    /// `content`: size from the box's contents (valid for `flex-basis`).
    Content,
}

impl CssDimension {
    /// Resolve against `reference` (usually the containing block size on the relevant axis).
    ///
    /// - `Length` resolves to itself.
    /// - `Percentage` scales `reference`; stays unresolved when `reference` is.
    /// - `Auto` and `Content` are always unresolved; the caller decides what they mean.
    #[inline]
    pub fn resolve(self, reference: CssNumber) -> CssNumber {
        match self {
            Self::Length(px) => CssNumber::new(px),
            Self::Percentage(percent) => Percentage(percent).of(reference),
            Self::Auto | Self::Content => CssNumber::UNRESOLVED,
        }
    }

    #[inline]
    pub const fn is_auto(self) -> bool {
        matches!(self, Self::Auto)
    }

    /// True when resolving against `reference` yields a definite value.
    #[inline]
    pub fn is_definite(self, reference: CssNumber) -> bool {
        self.resolve(reference).is_resolved()
    }
}

impl From<f32> for CssDimension {
    #[inline]
    fn from(px: f32) -> Self {
        Self::Length(px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if lengths and percentages do not resolve per §6 or keywords resolve to a value.
    fn resolves_against_reference() {
        let reference = CssNumber::new(400.0);
        assert_eq!(
            CssDimension::Length(12.0).resolve(reference),
            CssNumber::new(12.0)
        );
        assert_eq!(
            CssDimension::Percentage(50.0).resolve(reference),
            CssNumber::new(200.0)
        );
        assert!(!CssDimension::Auto.resolve(reference).is_resolved());
        assert!(!CssDimension::Content.resolve(reference).is_resolved());
    }

    #[test]
    /// # Panics
    /// Panics if a percentage against an indefinite size is reported as definite.
    fn percentage_of_indefinite_is_unresolved() {
        assert!(!CssDimension::Percentage(10.0).is_definite(CssNumber::UNRESOLVED));
        assert!(CssDimension::Length(10.0).is_definite(CssNumber::UNRESOLVED));
    }
}
