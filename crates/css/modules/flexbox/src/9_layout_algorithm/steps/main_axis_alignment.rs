//! Main-axis alignment: auto margins, then `justify-content`.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#algo-main-align>

use log::debug;

use super::margin_sum;
use crate::chapter6::{FlexItemArena, ItemId};
use crate::chapter7::{AxisEdges as _, PhysicalAxis};
use crate::chapter8::{JustifyContent, justify_params};
use crate::chapter9::{FlexibleBoxLayoutContext, FlexibleBoxStep};

/// Positions the items of each line along the main axis.
///
/// Positive free space goes to auto margins first; only when a line has none does
/// `justify-content` distribute it. Reverse directions place items from the main-end edge.
#[derive(Copy, Clone, Debug, Default)]
pub struct MainAxisAlignmentStep;

impl FlexibleBoxStep for MainAxisAlignmentStep {
    fn name(&self) -> &'static str {
        "main-axis-alignment"
    }

    fn layout(&self, context: &mut FlexibleBoxLayoutContext<'_, '_>) {
        let main_axis = context.axes.main;
        let reverse = context.axes.main_reverse;
        let main_size = context.main_size().unwrap_or(0.0);
        let main_gap = context.main_gap();
        let justify = context.container_style().justify_content();

        for line in &context.lines {
            let used = line
                .items
                .iter()
                .map(|id| {
                    let item = &context.arena[*id];
                    item.target_main_size + margin_sum(item, main_axis)
                })
                .sum::<f32>()
                + FlexibleBoxLayoutContext::gaps_total(main_gap, line.items.len());
            let free = main_size - used;

            let auto_margins = count_auto_margins(context.arena, &line.items, main_axis);
            let (remaining, line_justify) = if auto_margins > 0 && free > 0.0 {
                let share = free / auto_margins as f32;
                grow_auto_margins(context.arena, &line.items, main_axis, share);
                (0.0, JustifyContent::FlexStart)
            } else {
                (free, justify)
            };

            let (start, between) = justify_params(line_justify, remaining, line.items.len());
            debug!(
                target: "css::flexbox::justify",
                "[JUSTIFY] container={} {:?} free={:.3} start={:.3} between={:.3} auto={}",
                context.container.index(),
                line_justify,
                remaining,
                start,
                between,
                auto_margins
            );

            let mut cursor = start;
            for id in &line.items {
                let item = &mut context.arena[*id];
                let outer = item.target_main_size + margin_sum(item, main_axis);
                let outer_start = if reverse {
                    main_size - cursor - outer
                } else {
                    cursor
                };
                item.main_offset = outer_start + item.margin.leading(main_axis);
                cursor += outer + main_gap + between;
            }
        }
    }
}

/// Number of auto margin edges along `axis` across `items`.
fn count_auto_margins(arena: &FlexItemArena<'_>, items: &[ItemId], axis: PhysicalAxis) -> usize {
    items
        .iter()
        .map(|id| {
            let auto = arena[*id].margin_auto;
            usize::from(auto.leading(axis)) + usize::from(auto.trailing(axis))
        })
        .sum()
}

/// Add `share` to every auto margin edge along `axis`.
fn grow_auto_margins(
    arena: &mut FlexItemArena<'_>,
    items: &[ItemId],
    axis: PhysicalAxis,
    share: f32,
) {
    for id in items {
        let item = &mut arena[*id];
        if item.margin_auto.leading(axis) {
            *item.margin.leading_mut(axis) += share;
        }
        if item.margin_auto.trailing(axis) {
            *item.margin.trailing_mut(axis) += share;
        }
    }
}
