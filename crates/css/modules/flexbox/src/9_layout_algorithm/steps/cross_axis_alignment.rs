//! Cross-axis alignment of items within their line.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#algo-cross-margins>
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#align-items-property>

use css_values_units::CssRectangle;
use log::debug;

use super::margin_sum;
use crate::chapter7::{AxisEdges as _, PhysicalAxis};
use crate::chapter8::AlignItems;
use crate::chapter9::{FlexibleBoxLayoutContext, FlexibleBoxStep};

/// Offset of an item's outer box from its line's cross-start edge.
///
/// Under `wrap-reverse` the cross-start edge is the physical end, so start and end swap.
pub fn cross_alignment_offset(align: AlignItems, free_space: f32, wrap_reverse: bool) -> f32 {
    match (align, wrap_reverse) {
        (AlignItems::FlexStart | AlignItems::Stretch, false) | (AlignItems::FlexEnd, true) => 0.0,
        (AlignItems::FlexEnd, false) | (AlignItems::FlexStart | AlignItems::Stretch, true) => {
            free_space
        }
        (AlignItems::Center, _) => free_space / 2.0,
    }
}

/// Give positive free space to the auto margins along `axis`, split evenly when both are auto.
fn absorb_into_auto_margins(
    margin: &mut CssRectangle<f32>,
    auto: CssRectangle<bool>,
    axis: PhysicalAxis,
    free: f32,
) {
    match (auto.leading(axis), auto.trailing(axis)) {
        (true, true) => {
            *margin.leading_mut(axis) += free / 2.0;
            *margin.trailing_mut(axis) += free / 2.0;
        }
        (true, false) => *margin.leading_mut(axis) += free,
        (false, _) => *margin.trailing_mut(axis) += free,
    }
}

/// Resolves auto cross margins and `align-self`, writing each item's cross offset.
///
/// An item with an auto cross margin never falls back to `align-self`: with no free space it
/// sits flush against the line's cross-start edge.
#[derive(Copy, Clone, Debug, Default)]
pub struct CrossAxisAlignmentStep;

impl FlexibleBoxStep for CrossAxisAlignmentStep {
    fn name(&self) -> &'static str {
        "cross-axis-alignment"
    }

    fn layout(&self, context: &mut FlexibleBoxLayoutContext<'_, '_>) {
        let cross_axis = context.axes.cross;
        let wrap_reverse = context.axes.cross_reverse;
        let align_items = context.container_style().align_items();
        for line in &context.lines {
            for id in &line.items {
                let item = &mut context.arena[*id];
                let free = line.cross_size - item.cross_size - margin_sum(item, cross_axis);
                let has_auto_margin = item.margin_auto.leading(cross_axis)
                    || item.margin_auto.trailing(cross_axis);
                let align = item.style().align_self().resolve(align_items);
                let in_line = if has_auto_margin && free > 0.0 {
                    absorb_into_auto_margins(&mut item.margin, item.margin_auto, cross_axis, free);
                    0.0
                } else if has_auto_margin {
                    cross_alignment_offset(AlignItems::FlexStart, free, wrap_reverse)
                } else {
                    cross_alignment_offset(align, free, wrap_reverse)
                };
                item.cross_offset = line.cross_offset + in_line + item.margin.leading(cross_axis);
                debug!(
                    target: "css::flexbox::cross_align",
                    "[CROSS-ALIGN] item={} align={:?} free={:.3} offset={:.3}",
                    id.index(),
                    align,
                    free,
                    item.cross_offset
                );
            }
        }
    }
}
