//! Cross sizes of items, lines and the container.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#algo-cross-item>
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#algo-cross-line>
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#algo-stretch>

use css_values_units::CssNumber;
use log::debug;

use super::margin_sum;
use crate::chapter6::{CachedDimension, FlexItem, FlexItemArena, ItemId};
use crate::chapter7::{AxisEdges as _, AxisPair as _, FlexAxis, PhysicalAxis};
use crate::chapter8::{AlignContent, AlignItems};
use crate::chapter9::intrinsic::content_size;
use crate::chapter9::{FlexibleBoxLayoutContext, FlexibleBoxStep};

/// Sizes items, lines and the container along the cross axis.
///
/// Covers hypothetical cross sizes, line cross sizes, an indefinite container cross size,
/// `align-content: stretch` and `align-self: stretch`.
#[derive(Copy, Clone, Debug, Default)]
pub struct DetermineCrossSizesStep;

impl FlexibleBoxStep for DetermineCrossSizesStep {
    fn name(&self) -> &'static str {
        "determine-cross-sizes"
    }

    fn layout(&self, context: &mut FlexibleBoxLayoutContext<'_, '_>) {
        let cross_axis = context.axes.cross;
        let cross_reference = context.cross_size();

        for id in context.flex_items.clone() {
            let hypothetical =
                hypothetical_cross_size(context.arena, id, cross_axis, cross_reference);
            let item = &mut context.arena[id];
            item.cache.insert(CachedDimension::HypotheticalCrossSize, hypothetical);
        }

        for line in &mut context.lines {
            line.cross_size = line
                .items
                .iter()
                .map(|id| {
                    let item = &context.arena[*id];
                    cached_cross_size(item) + margin_sum(item, cross_axis)
                })
                .fold(0.0f32, f32::max);
        }

        resolve_container_cross_size(context);
        let container_cross = context.cross_size().unwrap_or(0.0);
        size_lines(context, container_cross);
        stretch_items(context, container_cross);

        debug!(
            target: "css::flexbox::cross_sizes",
            "[CROSS] container={} cross={:.3} lines={:?}",
            context.container.index(),
            container_cross,
            context
                .lines
                .iter()
                .map(|line| line.cross_size)
                .collect::<Vec<_>>()
        );
    }
}

/// Preferred (or content) cross size of `id`, clamped by its min/max cross size.
fn hypothetical_cross_size(
    arena: &mut FlexItemArena<'_>,
    id: ItemId,
    cross_axis: PhysicalAxis,
    reference: CssNumber,
) -> CssNumber {
    let style = arena[id].style();
    let specified = style.size().physical(cross_axis).resolve(reference);
    let preferred = if specified.is_resolved() {
        specified
    } else {
        CssNumber::new(content_size(arena, id, cross_axis))
    };
    let min_cross = style.min_size().physical(cross_axis).resolve(reference);
    let max_cross = style.max_size().physical(cross_axis).resolve(reference);
    preferred
        .clamp_between(min_cross, max_cross)
        .max(CssNumber::ZERO)
}

#[inline]
fn cached_cross_size(item: &FlexItem<'_>) -> f32 {
    item.cache
        .get(CachedDimension::HypotheticalCrossSize)
        .map_or(0.0, |value| value.unwrap_or(0.0))
}

/// Size an indefinite container cross size from its lines, clamped by its own min/max.
fn resolve_container_cross_size(context: &mut FlexibleBoxLayoutContext<'_, '_>) {
    if context.cross_size().is_resolved() {
        return;
    }
    let content_cross = context.lines.iter().map(|line| line.cross_size).sum::<f32>()
        + FlexibleBoxLayoutContext::gaps_total(context.cross_gap(), context.lines.len());
    let (min_cross, max_cross) = context.container_bounds(FlexAxis::CrossAxis);
    let resolved = CssNumber::new(content_cross).clamp_between(min_cross, max_cross);
    context
        .inner_size
        .set_axis(FlexAxis::CrossAxis, context.direction, resolved);
    debug!(
        target: "css::flexbox::cross_sizes",
        "[CROSS] container={} cross size from content={}",
        context.container.index(),
        resolved
    );
}

/// A single line fills the container; multi-line containers share leftover space on stretch.
fn size_lines(context: &mut FlexibleBoxLayoutContext<'_, '_>, container_cross: f32) {
    if !context.wrap.is_multi_line() {
        if let Some(line) = context.lines.first_mut() {
            line.cross_size = container_cross;
        }
        return;
    }
    if context.container_style().align_content() != AlignContent::Stretch
        || context.lines.is_empty()
    {
        return;
    }
    let used = context.lines.iter().map(|line| line.cross_size).sum::<f32>()
        + FlexibleBoxLayoutContext::gaps_total(context.cross_gap(), context.lines.len());
    let free = container_cross - used;
    if free > 0.0 {
        let extra = free / context.lines.len() as f32;
        for line in &mut context.lines {
            line.cross_size += extra;
        }
    }
}

/// Final item cross sizes: stretched items fill their line, others keep their hypothetical size.
fn stretch_items(context: &mut FlexibleBoxLayoutContext<'_, '_>, container_cross: f32) {
    let cross_axis = context.axes.cross;
    let align_items = context.container_style().align_items();
    let reference = CssNumber::new(container_cross);
    for line in &context.lines {
        for id in &line.items {
            let item = &mut context.arena[*id];
            let style = item.style();
            let stretches = style.align_self().resolve(align_items) == AlignItems::Stretch
                && style.size().physical(cross_axis).is_auto()
                && !item.margin_auto.leading(cross_axis)
                && !item.margin_auto.trailing(cross_axis);
            item.cross_size = if stretches {
                let min_cross = style.min_size().physical(cross_axis).resolve(reference);
                let max_cross = style.max_size().physical(cross_axis).resolve(reference);
                CssNumber::new(line.cross_size - margin_sum(item, cross_axis))
                    .clamp_between(min_cross, max_cross)
                    .unwrap_or(0.0)
                    .max(0.0)
            } else {
                cached_cross_size(item)
            };
        }
    }
}
