//! Flex style record: the subset of computed style the flex algorithm reads for one box.
//!
//! A `FlexStyle` is built once per node before layout and is read-only during a pass. Invalid
//! values are rejected by [`FlexStyleBuilder::build`], so the pipeline never sees them.

use css_values_units::{CssDimension, CssMarginRectangle, CssSize};
use thiserror::Error;

use crate::chapter4::CssVisibility;
use crate::chapter5::{FlexDirection, FlexWrap};
use crate::chapter8::{AlignContent, AlignItems, AlignSelf, JustifyContent};

/// Initial `flex-shrink` value.
const INITIAL_FLEX_SHRINK: f32 = 1.0;

/// Errors raised while constructing a [`FlexStyle`].
#[derive(Copy, Clone, Debug, Error, PartialEq)]
pub enum StyleError {
    /// `flex-grow` was negative (or not a number).
    #[error("flex-grow must be >= 0, got {0}")]
    NegativeFlexGrow(f32),
    /// `flex-shrink` was negative (or not a number).
    #[error("flex-shrink must be >= 0, got {0}")]
    NegativeFlexShrink(f32),
}

/// Flex-relevant computed style for one node.
#[derive(Clone, Debug, PartialEq)]
pub struct FlexStyle {
    /// Direction of the container's main axis.
    flex_direction: FlexDirection,
    /// Single-line vs multi-line, and the direction new lines stack in.
    flex_wrap: FlexWrap,
    /// Flex grow factor (>= 0).
    flex_grow: f32,
    /// Flex shrink factor (>= 0).
    flex_shrink: f32,
    /// Initial main size before free space is distributed.
    flex_basis: CssDimension,
    /// Main-axis alignment of the items of each line.
    justify_content: JustifyContent,
    /// Default cross-axis alignment for the container's items.
    align_items: AlignItems,
    /// Cross-axis alignment override for this item.
    align_self: AlignSelf,
    /// Packing of lines in a multi-line container.
    align_content: AlignContent,
    /// Sort key for order-modified document order.
    order: i32,
    /// Margins; `auto` edges absorb free space.
    margin: CssMarginRectangle,
    /// Whether the box takes part in layout.
    visibility: CssVisibility,
    /// Preferred `width`/`height`.
    size: CssSize<CssDimension>,
    /// `min-width`/`min-height`; `auto` resolves to zero.
    min_size: CssSize<CssDimension>,
    /// `max-width`/`max-height`; `auto` means unbounded.
    max_size: CssSize<CssDimension>,
    /// `column-gap` (width) and `row-gap` (height).
    gap: CssSize<CssDimension>,
}

impl Default for FlexStyle {
    fn default() -> Self {
        Self {
            flex_direction: FlexDirection::default(),
            flex_wrap: FlexWrap::default(),
            flex_grow: 0.0,
            flex_shrink: INITIAL_FLEX_SHRINK,
            flex_basis: CssDimension::Auto,
            justify_content: JustifyContent::default(),
            align_items: AlignItems::default(),
            align_self: AlignSelf::default(),
            align_content: AlignContent::default(),
            order: 0,
            margin: CssMarginRectangle::ZERO,
            visibility: CssVisibility::default(),
            size: CssSize::auto(),
            min_size: CssSize::auto(),
            max_size: CssSize::auto(),
            gap: CssSize::splat(CssDimension::Length(0.0)),
        }
    }
}

impl FlexStyle {
    /// Start a builder from the initial values.
    #[inline]
    pub fn builder() -> FlexStyleBuilder {
        FlexStyleBuilder {
            style: Self::default(),
        }
    }

    /// Start a builder from this style, for deriving a variant.
    #[inline]
    pub fn to_builder(&self) -> FlexStyleBuilder {
        FlexStyleBuilder {
            style: self.clone(),
        }
    }

    #[inline]
    pub const fn flex_direction(&self) -> FlexDirection {
        self.flex_direction
    }

    #[inline]
    pub const fn flex_wrap(&self) -> FlexWrap {
        self.flex_wrap
    }

    #[inline]
    pub const fn flex_grow(&self) -> f32 {
        self.flex_grow
    }

    #[inline]
    pub const fn flex_shrink(&self) -> f32 {
        self.flex_shrink
    }

    #[inline]
    pub const fn flex_basis(&self) -> CssDimension {
        self.flex_basis
    }

    #[inline]
    pub const fn justify_content(&self) -> JustifyContent {
        self.justify_content
    }

    #[inline]
    pub const fn align_items(&self) -> AlignItems {
        self.align_items
    }

    #[inline]
    pub const fn align_self(&self) -> AlignSelf {
        self.align_self
    }

    #[inline]
    pub const fn align_content(&self) -> AlignContent {
        self.align_content
    }

    #[inline]
    pub const fn order(&self) -> i32 {
        self.order
    }

    #[inline]
    pub const fn margin(&self) -> CssMarginRectangle {
        self.margin
    }

    #[inline]
    pub const fn visibility(&self) -> CssVisibility {
        self.visibility
    }

    #[inline]
    pub const fn size(&self) -> CssSize<CssDimension> {
        self.size
    }

    #[inline]
    pub const fn min_size(&self) -> CssSize<CssDimension> {
        self.min_size
    }

    #[inline]
    pub const fn max_size(&self) -> CssSize<CssDimension> {
        self.max_size
    }

    #[inline]
    pub const fn gap(&self) -> CssSize<CssDimension> {
        self.gap
    }
}

/// Builder for [`FlexStyle`]; validation happens in [`FlexStyleBuilder::build`].
#[derive(Clone, Debug)]
#[must_use]
pub struct FlexStyleBuilder {
    style: FlexStyle,
}

impl FlexStyleBuilder {
    pub const fn flex_direction(mut self, flex_direction: FlexDirection) -> Self {
        self.style.flex_direction = flex_direction;
        self
    }

    pub const fn flex_wrap(mut self, flex_wrap: FlexWrap) -> Self {
        self.style.flex_wrap = flex_wrap;
        self
    }

    pub const fn flex_grow(mut self, flex_grow: f32) -> Self {
        self.style.flex_grow = flex_grow;
        self
    }

    pub const fn flex_shrink(mut self, flex_shrink: f32) -> Self {
        self.style.flex_shrink = flex_shrink;
        self
    }

    pub const fn flex_basis(mut self, flex_basis: CssDimension) -> Self {
        self.style.flex_basis = flex_basis;
        self
    }

    pub const fn justify_content(mut self, justify_content: JustifyContent) -> Self {
        self.style.justify_content = justify_content;
        self
    }

    pub const fn align_items(mut self, align_items: AlignItems) -> Self {
        self.style.align_items = align_items;
        self
    }

    pub const fn align_self(mut self, align_self: AlignSelf) -> Self {
        self.style.align_self = align_self;
        self
    }

    pub const fn align_content(mut self, align_content: AlignContent) -> Self {
        self.style.align_content = align_content;
        self
    }

    pub const fn order(mut self, order: i32) -> Self {
        self.style.order = order;
        self
    }

    pub const fn margin(mut self, margin: CssMarginRectangle) -> Self {
        self.style.margin = margin;
        self
    }

    pub const fn visibility(mut self, visibility: CssVisibility) -> Self {
        self.style.visibility = visibility;
        self
    }

    pub const fn size(mut self, size: CssSize<CssDimension>) -> Self {
        self.style.size = size;
        self
    }

    /// Shorthand for the `width` component of [`Self::size`].
    pub const fn width(mut self, width: CssDimension) -> Self {
        self.style.size.width = width;
        self
    }

    /// Shorthand for the `height` component of [`Self::size`].
    pub const fn height(mut self, height: CssDimension) -> Self {
        self.style.size.height = height;
        self
    }

    pub const fn min_size(mut self, min_size: CssSize<CssDimension>) -> Self {
        self.style.min_size = min_size;
        self
    }

    pub const fn max_size(mut self, max_size: CssSize<CssDimension>) -> Self {
        self.style.max_size = max_size;
        self
    }

    pub const fn gap(mut self, gap: CssSize<CssDimension>) -> Self {
        self.style.gap = gap;
        self
    }

    /// Validate and produce the style.
    ///
    /// # Errors
    /// Returns [`StyleError::NegativeFlexGrow`] or [`StyleError::NegativeFlexShrink`] when a flex
    /// factor is negative or `NaN`. Values are never clamped.
    pub fn build(self) -> Result<FlexStyle, StyleError> {
        let grow = self.style.flex_grow;
        let shrink = self.style.flex_shrink;
        if grow.is_nan() || grow < 0.0 {
            return Err(StyleError::NegativeFlexGrow(grow));
        }
        if shrink.is_nan() || shrink < 0.0 {
            return Err(StyleError::NegativeFlexShrink(shrink));
        }
        Ok(self.style)
    }
}
