//! Per-container state threaded through the pipeline.

use css_values_units::{CssNumber, CssSize};

use super::LayoutOptions;
use crate::chapter5::{FlexDirection, FlexWrap};
use crate::chapter6::{FlexItemArena, ItemId};
use crate::chapter7::{Axes, AxisPair as _, FlexAxis, resolve_axes};
use crate::style::FlexStyle;

/// One flex line: a run of items laid out together along the main axis.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlexLine {
    /// Items of the line, in layout order.
    pub items: Vec<ItemId>,
    /// Cross size of the line (after align-content stretch).
    pub cross_size: f32,
    /// Physical cross offset of the line's cross-start edge within the container.
    pub cross_offset: f32,
}

/// Mutable state for one run of the pipeline over one container.
///
/// Exclusively owned by that run; child containers get their own context.
pub struct FlexibleBoxLayoutContext<'pass, 'node> {
    /// Items of the whole pass.
    pub(crate) arena: &'pass mut FlexItemArena<'node>,
    /// The container being laid out.
    pub(crate) container: ItemId,
    pub(crate) direction: FlexDirection,
    pub(crate) wrap: FlexWrap,
    pub(crate) axes: Axes,
    /// Content-box size of the container; unresolved components are sized from content.
    pub(crate) inner_size: CssSize<CssNumber>,
    /// Working list of participating items, in layout order.
    pub(crate) flex_items: Vec<ItemId>,
    pub(crate) lines: Vec<FlexLine>,
    pub(crate) options: LayoutOptions,
}

impl<'pass, 'node> FlexibleBoxLayoutContext<'pass, 'node> {
    pub(crate) fn new(
        arena: &'pass mut FlexItemArena<'node>,
        container: ItemId,
        inner_size: CssSize<CssNumber>,
        options: LayoutOptions,
    ) -> Self {
        let style = arena[container].style();
        let direction = style.flex_direction();
        let wrap = style.flex_wrap();
        Self {
            arena,
            container,
            direction,
            wrap,
            axes: resolve_axes(direction, wrap),
            inner_size,
            flex_items: Vec::new(),
            lines: Vec::new(),
            options,
        }
    }

    /// The container's own style.
    #[inline]
    pub fn container_style(&self) -> &'node FlexStyle {
        self.arena[self.container].style()
    }

    #[inline]
    pub const fn container(&self) -> ItemId {
        self.container
    }

    #[inline]
    pub fn flex_items(&self) -> &[ItemId] {
        &self.flex_items
    }

    #[inline]
    pub fn lines(&self) -> &[FlexLine] {
        &self.lines
    }

    #[inline]
    pub const fn inner_size(&self) -> CssSize<CssNumber> {
        self.inner_size
    }

    /// Container inner size along the main axis.
    #[inline]
    pub fn main_size(&self) -> CssNumber {
        *self.inner_size.axis(FlexAxis::MainAxis, self.direction)
    }

    /// Container inner size along the cross axis.
    #[inline]
    pub fn cross_size(&self) -> CssNumber {
        *self.inner_size.axis(FlexAxis::CrossAxis, self.direction)
    }

    /// Gap between adjacent items of a line, in px.
    pub fn main_gap(&self) -> f32 {
        self.gap(FlexAxis::MainAxis)
    }

    /// Gap between adjacent lines, in px.
    pub fn cross_gap(&self) -> f32 {
        self.gap(FlexAxis::CrossAxis)
    }

    fn gap(&self, axis: FlexAxis) -> f32 {
        let gap = self.container_style().gap();
        let reference = *self.inner_size.axis(axis, self.direction);
        gap.axis(axis, self.direction)
            .resolve(reference)
            .unwrap_or(0.0)
            .max(0.0)
    }

    /// Resolved `[min, max]` of the container itself along `axis`, against the available size.
    pub(crate) fn container_bounds(&self, axis: FlexAxis) -> (CssNumber, CssNumber) {
        let style = self.container_style();
        let reference = *self.inner_size.axis(axis, self.direction);
        let min = style
            .min_size()
            .axis(axis, self.direction)
            .resolve(reference)
            .or(CssNumber::ZERO);
        let max = style
            .max_size()
            .axis(axis, self.direction)
            .resolve(reference)
            .or(CssNumber::INFINITY);
        (min, max)
    }

    /// Total gap space between `count` adjacent boxes.
    #[inline]
    pub(crate) fn gaps_total(gap: f32, count: usize) -> f32 {
        if count > 1 {
            gap * (count as f32 - 1.0)
        } else {
            0.0
        }
    }
}
