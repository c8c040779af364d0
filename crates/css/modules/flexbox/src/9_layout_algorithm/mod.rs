//! Flex Layout Algorithm: the step pipeline
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#layout-algorithm>
//!
//! Layout of one container is a strict linear sequence of [`FlexibleBoxStep`]s sharing one
//! [`FlexibleBoxLayoutContext`]. Each step's postcondition is the next step's precondition; there
//! is no branching, retry, or partial re-run. The last step writes geometry back to the items and
//! lays out each item's own children, depth-first.

mod context;
mod intrinsic;
mod steps;

#[cfg(test)]
mod tests;

use css_values_units::{CssNumber, CssPoint, CssSize};
use log::debug;

use crate::chapter4::FlexNode;
use crate::chapter6::{FlexItem, FlexItemArena, ItemId};

pub use context::{FlexLine, FlexibleBoxLayoutContext};
pub use steps::{
    AlignContentStep, CollectFlexLinesStep, CreateFlexItemsStep, CrossAxisAlignmentStep,
    DetermineCrossSizesStep, DetermineFlexBaseSizeStep, FinalizeLayoutStep, FlexFactors,
    LineRange, MainAxisAlignmentStep, ResolveFlexibleLengthsStep, break_into_lines,
    resolve_flexible_lengths,
};

/// One stage of the flex layout pipeline.
pub trait FlexibleBoxStep {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Run the step against `context`.
    fn layout(&self, context: &mut FlexibleBoxLayoutContext<'_, '_>);
}

/// The pipeline, in execution order.
pub const PIPELINE: [&dyn FlexibleBoxStep; 9] = [
    &CreateFlexItemsStep,
    &DetermineFlexBaseSizeStep,
    &CollectFlexLinesStep,
    &ResolveFlexibleLengthsStep,
    &DetermineCrossSizesStep,
    &MainAxisAlignmentStep,
    &AlignContentStep,
    &CrossAxisAlignmentStep,
    &FinalizeLayoutStep,
];

/// Knobs for a layout pass.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct LayoutOptions {
    /// Snap written-back sizes and positions to the 1/64 px layout unit.
    pub quantize_to_layout_unit: bool,
}

/// Results of one layout pass: every participating item with its resolved geometry.
#[derive(Debug)]
pub struct FlexLayout<'node> {
    arena: FlexItemArena<'node>,
    root: ItemId,
}

impl<'node> FlexLayout<'node> {
    /// The container `layout` was called on.
    #[inline]
    pub const fn root(&self) -> ItemId {
        self.root
    }

    #[inline]
    pub fn item(&self, id: ItemId) -> Option<&FlexItem<'node>> {
        self.arena.get(id)
    }

    /// Children of `id` in layout order; empty for unknown ids.
    #[inline]
    pub fn children(&self, id: ItemId) -> &[ItemId] {
        self.arena.get(id).map_or(&[][..], FlexItem::children)
    }

    /// Resolved size of `id`; unresolved for unknown ids.
    #[inline]
    pub fn size(&self, id: ItemId) -> CssSize<CssNumber> {
        self.arena
            .get(id)
            .map_or_else(CssSize::unresolved, FlexItem::size)
    }

    /// Resolved position of `id` within its parent's content box.
    #[inline]
    pub fn position(&self, id: ItemId) -> CssPoint<CssNumber> {
        self.arena.get(id).map_or(
            CssPoint::new(CssNumber::UNRESOLVED, CssNumber::UNRESOLVED),
            FlexItem::position,
        )
    }

    /// Every item of the pass, root first.
    pub fn iter(&self) -> impl Iterator<Item = (ItemId, &FlexItem<'node>)> {
        self.arena.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }
}

/// Lay out `container` and its subtree within `available` space.
///
/// Unresolved components of `available` size the container to its content.
pub fn layout(container: &dyn FlexNode, available: CssSize<CssNumber>) -> FlexLayout<'_> {
    layout_with_options(container, available, LayoutOptions::default())
}

/// [`layout`] with explicit options.
pub fn layout_with_options(
    container: &dyn FlexNode,
    available: CssSize<CssNumber>,
    options: LayoutOptions,
) -> FlexLayout<'_> {
    let mut arena = FlexItemArena::new();
    let root = arena.push(container);
    let style = container.style();
    let min = style.min_size().resolve(available);
    let max = style.max_size().resolve(available);
    let preferred = style.size().resolve(available);
    let inner_size = CssSize::new(
        preferred
            .width
            .or(available.width)
            .clamp_between(min.width, max.width),
        preferred
            .height
            .or(available.height)
            .clamp_between(min.height, max.height),
    );
    debug!(
        target: "css::flexbox::pipeline",
        "[LAYOUT] root available=({}, {}) inner=({}, {})",
        available.width,
        available.height,
        inner_size.width,
        inner_size.height
    );
    let resolved = layout_container(&mut arena, root, inner_size, options);
    arena[root].set_geometry(resolved, CssPoint::new(CssNumber::ZERO, CssNumber::ZERO));
    FlexLayout { arena, root }
}

/// Run the pipeline over one container. Returns the container's resolved inner size.
pub fn layout_container(
    arena: &mut FlexItemArena<'_>,
    container: ItemId,
    inner_size: CssSize<CssNumber>,
    options: LayoutOptions,
) -> CssSize<CssNumber> {
    let mut context = FlexibleBoxLayoutContext::new(arena, container, inner_size, options);
    for step in PIPELINE {
        debug!(
            target: "css::flexbox::pipeline",
            "[PIPELINE] container={} step={}",
            container.index(),
            step.name()
        );
        step.layout(&mut context);
    }
    context.inner_size
}

/// Quantize a CSS pixel value to the layout unit (1/64 px) to match Chromium's subpixel model.
#[inline]
pub fn quantize_layout(value: f32) -> f32 {
    (value * 64.0).round() / 64.0
}
