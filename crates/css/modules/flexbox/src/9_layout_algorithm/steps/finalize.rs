//! Writing geometry back and laying out nested containers.

use css_values_units::{CssNumber, CssPoint, CssSize};
use log::debug;

use crate::chapter7::AxisPair as _;
use crate::chapter9::{FlexibleBoxLayoutContext, FlexibleBoxStep, layout_container, quantize_layout};

/// Sets every item's size and position, then runs the pipeline on each item that has children.
///
/// Children are laid out depth-first with the size their parent just resolved for them.
#[derive(Copy, Clone, Debug, Default)]
pub struct FinalizeLayoutStep;

impl FlexibleBoxStep for FinalizeLayoutStep {
    fn name(&self) -> &'static str {
        "finalize-layout"
    }

    fn layout(&self, context: &mut FlexibleBoxLayoutContext<'_, '_>) {
        let axes = context.axes;
        let options = context.options;
        let snap = |value: f32| {
            if options.quantize_to_layout_unit {
                quantize_layout(value)
            } else {
                value
            }
        };
        for id in context.flex_items.clone() {
            let item = &context.arena[id];
            let mut size = CssSize::unresolved();
            *size.physical_mut(axes.main) = CssNumber::new(snap(item.target_main_size));
            *size.physical_mut(axes.cross) = CssNumber::new(snap(item.cross_size));
            let mut position = CssPoint::new(CssNumber::ZERO, CssNumber::ZERO);
            *position.physical_mut(axes.main) = CssNumber::new(snap(item.main_offset));
            *position.physical_mut(axes.cross) = CssNumber::new(snap(item.cross_offset));

            let has_children = !context.arena.collect_children(id).is_empty();
            let size = if has_children {
                layout_container(context.arena, id, size, options)
            } else {
                size
            };
            context.arena[id].set_geometry(size, position);
            debug!(
                target: "css::flexbox::finalize",
                "[FINALIZE] item={} size=({}, {}) position=({}, {}) nested={}",
                id.index(),
                size.width,
                size.height,
                position.x,
                position.y,
                has_children
            );
        }
    }
}
