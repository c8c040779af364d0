//! Two-dimensional value shapes shared by layout code.

use crate::{CssDimension, CssNumber};

/// A `(width, height)` pair over any value type.
///
/// The components are independent: nothing here couples width to height.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CssSize<T> {
    pub width: T,
    pub height: T,
}

impl<T> CssSize<T> {
    #[inline]
    pub const fn new(width: T, height: T) -> Self {
        Self { width, height }
    }

    /// Apply `transform` to both components.
    #[inline]
    pub fn map<U>(self, mut transform: impl FnMut(T) -> U) -> CssSize<U> {
        CssSize {
            width: transform(self.width),
            height: transform(self.height),
        }
    }
}

impl<T: Copy> CssSize<T> {
    /// Both components set to `value`.
    #[inline]
    pub const fn splat(value: T) -> Self {
        Self {
            width: value,
            height: value,
        }
    }
}

impl CssSize<CssNumber> {
    /// A size with neither component known.
    #[inline]
    pub const fn unresolved() -> Self {
        Self::splat(CssNumber::UNRESOLVED)
    }

    /// A definite size in CSS px.
    #[inline]
    pub const fn px(width: f32, height: f32) -> Self {
        Self::new(CssNumber::new(width), CssNumber::new(height))
    }
}

impl CssSize<CssDimension> {
    /// Both components `auto`.
    #[inline]
    pub const fn auto() -> Self {
        Self::splat(CssDimension::Auto)
    }

    /// Resolve each component against the matching component of `reference`.
    #[inline]
    pub fn resolve(self, reference: CssSize<CssNumber>) -> CssSize<CssNumber> {
        CssSize {
            width: self.width.resolve(reference.width),
            height: self.height.resolve(reference.height),
        }
    }
}

/// A position `(x, y)` relative to a containing box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CssPoint<T> {
    pub x: T,
    pub y: T,
}

impl<T> CssPoint<T> {
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

/// Four independent edge values, in CSS shorthand order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CssRectangle<T> {
    pub top: T,
    pub right: T,
    pub bottom: T,
    pub left: T,
}

impl<T: Copy> CssRectangle<T> {
    #[inline]
    pub const fn new(top: T, right: T, bottom: T, left: T) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// All four edges set to `value`.
    #[inline]
    pub const fn all(value: T) -> Self {
        Self::new(value, value, value, value)
    }

    /// Apply `transform` to every edge.
    #[inline]
    pub fn map<U: Copy>(self, mut transform: impl FnMut(T) -> U) -> CssRectangle<U> {
        CssRectangle {
            top: transform(self.top),
            right: transform(self.right),
            bottom: transform(self.bottom),
            left: transform(self.left),
        }
    }
}

/// Specified margins; an `Auto` edge absorbs free space during flex alignment.
pub type CssMarginRectangle = CssRectangle<CssDimension>;

impl CssMarginRectangle {
    /// Zero-length margins on every edge (the CSS initial value).
    pub const ZERO: Self = Self::all(CssDimension::Length(0.0));
}
