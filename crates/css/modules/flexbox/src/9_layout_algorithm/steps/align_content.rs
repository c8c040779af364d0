//! Packing flex lines along the cross axis.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#align-content-property>

use log::debug;

use crate::chapter8::align_content_params;
use crate::chapter9::{FlexibleBoxLayoutContext, FlexibleBoxStep};

/// Computes each line's cross offset; `wrap-reverse` stacks lines from the cross-end edge.
#[derive(Copy, Clone, Debug, Default)]
pub struct AlignContentStep;

impl FlexibleBoxStep for AlignContentStep {
    fn name(&self) -> &'static str {
        "align-content"
    }

    fn layout(&self, context: &mut FlexibleBoxLayoutContext<'_, '_>) {
        let cross_size = context.cross_size().unwrap_or(0.0);
        let cross_gap = context.cross_gap();
        let line_count = context.lines.len();
        let used = context.lines.iter().map(|line| line.cross_size).sum::<f32>()
            + FlexibleBoxLayoutContext::gaps_total(cross_gap, line_count);
        let free = cross_size - used;
        let (start, between) = if context.wrap.is_multi_line() {
            align_content_params(context.container_style().align_content(), free, line_count)
        } else {
            (0.0, 0.0)
        };
        let reverse = context.axes.cross_reverse;
        let mut cursor = start;
        for line in &mut context.lines {
            line.cross_offset = if reverse {
                cross_size - cursor - line.cross_size
            } else {
                cursor
            };
            cursor += line.cross_size + cross_gap + between;
        }
        debug!(
            target: "css::flexbox::align_content",
            "[ALIGN-CONTENT] container={} free={:.3} start={:.3} between={:.3} reverse={}",
            context.container.index(),
            free,
            start,
            between,
            reverse
        );
    }
}
