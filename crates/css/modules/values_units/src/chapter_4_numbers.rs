//! CSS Values & Units Level 3: §4 Numbers
//! Spec: <https://www.w3.org/TR/css-values-3/#numeric-types>
//!
//! Layout arithmetic works on resolved numbers. A value that cannot be known yet (a percentage of
//! an indefinite size, an `auto` width) is carried as the unresolved sentinel instead of an error.

use core::fmt;
use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// A resolved CSS <number> in CSS px, or the unresolved sentinel (`NaN`).
///
/// Arithmetic propagates the sentinel: any operation with an unresolved operand is unresolved.
/// Comparisons with an unresolved operand are always false, so callers must check
/// [`CssNumber::is_resolved`] before treating a value as definite.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct CssNumber(f32);

impl CssNumber {
    /// The "not yet known" value.
    pub const UNRESOLVED: Self = Self(f32::NAN);
    /// Zero px.
    pub const ZERO: Self = Self(0.0);
    /// Unbounded, used for absent maximum constraints.
    pub const INFINITY: Self = Self(f32::INFINITY);

    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Raw value; `NaN` when unresolved.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }

    #[inline]
    pub const fn is_resolved(self) -> bool {
        !self.0.is_nan()
    }

    /// `Some(value)` when resolved.
    #[inline]
    pub fn to_option(self) -> Option<f32> {
        self.is_resolved().then_some(self.0)
    }

    /// This value if resolved, otherwise `fallback`.
    #[inline]
    #[must_use]
    pub const fn or(self, fallback: Self) -> Self {
        if self.is_resolved() { self } else { fallback }
    }

    /// Raw value if resolved, otherwise `fallback`.
    #[inline]
    pub const fn unwrap_or(self, fallback: f32) -> f32 {
        if self.is_resolved() { self.0 } else { fallback }
    }

    /// Larger of two values; unresolved if either operand is.
    #[inline]
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        if self.is_resolved() && other.is_resolved() {
            Self(self.0.max(other.0))
        } else {
            Self::UNRESOLVED
        }
    }

    /// Smaller of two values; unresolved if either operand is.
    #[inline]
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        if self.is_resolved() && other.is_resolved() {
            Self(self.0.min(other.0))
        } else {
            Self::UNRESOLVED
        }
    }

    /// Clamp into `[min, max]`, ignoring bounds that are unresolved.
    ///
    /// When `min > max` the minimum wins, matching CSS min/max precedence.
    #[inline]
    #[must_use]
    pub fn clamp_between(self, min: Self, max: Self) -> Self {
        if !self.is_resolved() {
            return self;
        }
        let capped = if max.is_resolved() && self.0 > max.0 {
            max.0
        } else {
            self.0
        };
        if min.is_resolved() && capped < min.0 {
            Self(min.0)
        } else {
            Self(capped)
        }
    }
}

impl Default for CssNumber {
    /// Layout values start out unknown.
    #[inline]
    fn default() -> Self {
        Self::UNRESOLVED
    }
}

impl From<f32> for CssNumber {
    #[inline]
    fn from(value: f32) -> Self {
        Self(value)
    }
}

impl fmt::Display for CssNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_resolved() {
            write!(f, "{:.3}px", self.0)
        } else {
            f.write_str("unresolved")
        }
    }
}

impl Add for CssNumber {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for CssNumber {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for CssNumber {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for CssNumber {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Mul<f32> for CssNumber {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self(self.0 * rhs)
    }
}

impl Div<f32> for CssNumber {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f32) -> Self {
        Self(self.0 / rhs)
    }
}

impl Neg for CssNumber {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if the unresolved sentinel does not propagate through arithmetic or display.
    fn unresolved_propagates_through_arithmetic() {
        let known = CssNumber::new(10.0);
        assert!(!(known + CssNumber::UNRESOLVED).is_resolved());
        assert!(!(CssNumber::UNRESOLVED * 2.0).is_resolved());
        assert!(!known.max(CssNumber::UNRESOLVED).is_resolved());
        assert!(!known.min(CssNumber::UNRESOLVED).is_resolved());
        assert_eq!((known - CssNumber::new(4.0)).to_option(), Some(6.0));
        assert_eq!(known.to_string(), "10.000px");
        assert_eq!(CssNumber::UNRESOLVED.to_string(), "unresolved");
    }

    #[test]
    /// # Panics
    /// Panics if comparisons treat an unresolved value as a real layout value.
    fn unresolved_never_compares() {
        let unresolved = CssNumber::UNRESOLVED;
        assert_ne!(unresolved, CssNumber::UNRESOLVED);
        assert_eq!(unresolved.partial_cmp(&CssNumber::ZERO), None);
        assert_eq!(CssNumber::ZERO.partial_cmp(&unresolved), None);
    }

    #[test]
    /// # Panics
    /// Panics if clamping does not skip unresolved bounds or does not let min win over max.
    fn clamp_ignores_unresolved_bounds() {
        let value = CssNumber::new(50.0);
        assert_eq!(
            value.clamp_between(CssNumber::UNRESOLVED, CssNumber::new(30.0)),
            CssNumber::new(30.0)
        );
        assert_eq!(
            value.clamp_between(CssNumber::new(60.0), CssNumber::UNRESOLVED),
            CssNumber::new(60.0)
        );
        assert_eq!(
            value.clamp_between(CssNumber::new(40.0), CssNumber::new(20.0)),
            CssNumber::new(40.0)
        );
        assert_eq!(
            value.clamp_between(CssNumber::ZERO, CssNumber::INFINITY),
            value
        );
    }

    #[test]
    /// # Panics
    /// Panics if fallbacks are not used for unresolved values only.
    fn fallbacks_apply_only_when_unresolved() {
        assert!((CssNumber::UNRESOLVED.unwrap_or(3.0) - 3.0).abs() < 0.01);
        assert!((CssNumber::new(1.0).unwrap_or(3.0) - 1.0).abs() < 0.01);
        assert_eq!(
            CssNumber::UNRESOLVED.or(CssNumber::new(2.0)),
            CssNumber::new(2.0)
        );
        assert_eq!(CssNumber::default().to_option(), None);
    }
}
