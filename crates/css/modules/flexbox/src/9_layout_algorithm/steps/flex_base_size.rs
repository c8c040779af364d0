//! Flex base size and hypothetical main size.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#algo-main-item>

use css_values_units::{CssDimension, CssNumber};
use log::debug;

use crate::chapter6::CachedDimension;
use crate::chapter7::AxisPair as _;
use crate::chapter9::intrinsic::content_size;
use crate::chapter9::{FlexibleBoxLayoutContext, FlexibleBoxStep};

/// Resolves margins, the flex base size and the clamped hypothetical main size of every item.
#[derive(Copy, Clone, Debug, Default)]
pub struct DetermineFlexBaseSizeStep;

impl FlexibleBoxStep for DetermineFlexBaseSizeStep {
    fn name(&self) -> &'static str {
        "determine-flex-base-size"
    }

    fn layout(&self, context: &mut FlexibleBoxLayoutContext<'_, '_>) {
        let main_axis = context.axes.main;
        let main_reference = context.main_size();
        // Margin percentages resolve against the container's inline size on both axes.
        let margin_reference = context.inner_size.width;
        for id in context.flex_items.clone() {
            let style = context.arena[id].style();
            let margins = style.margin();
            {
                let item = &mut context.arena[id];
                item.margin = margins.map(|edge| edge.resolve(margin_reference).unwrap_or(0.0));
                item.margin_auto = margins.map(CssDimension::is_auto);
            }

            let specified = style.size().physical(main_axis).resolve(main_reference);
            let basis = match style.flex_basis() {
                definite @ (CssDimension::Length(_) | CssDimension::Percentage(_)) => {
                    definite.resolve(main_reference)
                }
                CssDimension::Auto => specified,
                CssDimension::Content => CssNumber::UNRESOLVED,
            };
            let base_size = if basis.is_resolved() {
                basis
            } else {
                CssNumber::new(content_size(context.arena, id, main_axis))
            };

            let min_main = style
                .min_size()
                .physical(main_axis)
                .resolve(main_reference)
                .or(CssNumber::ZERO);
            let max_main = style
                .max_size()
                .physical(main_axis)
                .resolve(main_reference)
                .or(CssNumber::INFINITY);
            let hypothetical = base_size.clamp_between(min_main, max_main);

            let item = &mut context.arena[id];
            item.flex_base_size = base_size;
            item.cache.insert(CachedDimension::MinMainSize, min_main);
            item.cache.insert(CachedDimension::MaxMainSize, max_main);
            item.cache.insert(CachedDimension::HypotheticalMainSize, hypothetical);
            debug!(
                target: "css::flexbox::basis",
                "[BASIS] item={} basis={:?} base={} hypothetical={} min={} max={}",
                id.index(),
                style.flex_basis(),
                base_size,
                hypothetical,
                min_main,
                max_main
            );
        }
    }
}
