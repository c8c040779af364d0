//! Spec: <https://www.w3.org/TR/css-flexbox-1/#algo-available>

use log::debug;

use crate::chapter9::{FlexibleBoxLayoutContext, FlexibleBoxStep};

/// Builds the container's working list: children sorted by `order`, then filtered by visibility.
#[derive(Copy, Clone, Debug, Default)]
pub struct CreateFlexItemsStep;

impl FlexibleBoxStep for CreateFlexItemsStep {
    fn name(&self) -> &'static str {
        "create-flex-items"
    }

    fn layout(&self, context: &mut FlexibleBoxLayoutContext<'_, '_>) {
        context.flex_items = context.arena.collect_children(context.container);
        debug!(
            target: "css::flexbox::items",
            "[ITEMS] container={} count={}",
            context.container.index(),
            context.flex_items.len()
        );
    }
}
