//! Collecting flex items into flex lines.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#algo-line-break>

use css_values_units::CssNumber;
use log::debug;

use super::margin_sum;
use crate::chapter6::CachedDimension;
use crate::chapter7::{AxisPair as _, FlexAxis};
use crate::chapter9::{FlexLine, FlexibleBoxLayoutContext, FlexibleBoxStep};

/// Half-open `[start, end)` range of item indices forming one line.
pub type LineRange = (usize, usize);

/// Partition items into lines by their outer hypothetical main sizes.
///
/// An item starts a new line when adding it (plus the gap before it) would overflow
/// `container_main_size`. The first item of a line is always accepted, so an item wider than the
/// container sits alone on its own line and no line is ever empty.
/// A line that fits exactly (`used == container_main_size`) keeps the item.
pub fn break_into_lines(
    container_main_size: f32,
    main_gap: f32,
    outer_sizes: &[f32],
) -> Vec<LineRange> {
    let mut line_ranges = Vec::new();
    let mut start = 0usize;
    let mut cursor = 0.0f32;
    let gap = main_gap.max(0.0);
    for (index, size) in outer_sizes.iter().copied().enumerate() {
        let is_first_in_line = index == start;
        let next = if is_first_in_line { size } else { cursor + gap + size };
        if next <= container_main_size || is_first_in_line {
            cursor = next;
        } else {
            line_ranges.push((start, index));
            start = index;
            cursor = size;
        }
    }
    if start < outer_sizes.len() {
        line_ranges.push((start, outer_sizes.len()));
    }
    line_ranges
}

/// Resolves an indefinite container main size from its items, then breaks items into lines.
#[derive(Copy, Clone, Debug, Default)]
pub struct CollectFlexLinesStep;

impl FlexibleBoxStep for CollectFlexLinesStep {
    fn name(&self) -> &'static str {
        "collect-flex-lines"
    }

    fn layout(&self, context: &mut FlexibleBoxLayoutContext<'_, '_>) {
        let main_axis = context.axes.main;
        let outer_sizes: Vec<f32> = context
            .flex_items
            .iter()
            .map(|id| {
                let item = &context.arena[*id];
                let hypothetical = item
                    .cache
                    .get(CachedDimension::HypotheticalMainSize)
                    .unwrap_or(CssNumber::ZERO)
                    .unwrap_or(0.0);
                hypothetical + margin_sum(item, main_axis)
            })
            .collect();
        let main_gap = context.main_gap();

        if !context.main_size().is_resolved() {
            let content_main = outer_sizes.iter().sum::<f32>()
                + FlexibleBoxLayoutContext::gaps_total(main_gap, outer_sizes.len());
            let (min_main, max_main) = context.container_bounds(FlexAxis::MainAxis);
            let resolved = CssNumber::new(content_main).clamp_between(min_main, max_main);
            context
                .inner_size
                .set_axis(FlexAxis::MainAxis, context.direction, resolved);
            debug!(
                target: "css::flexbox::lines",
                "[LINES] container={} main size from content={}",
                context.container.index(),
                resolved
            );
        }

        let ranges = if context.wrap.is_multi_line() {
            break_into_lines(context.main_size().unwrap_or(0.0), main_gap, &outer_sizes)
        } else if outer_sizes.is_empty() {
            Vec::new()
        } else {
            vec![(0, outer_sizes.len())]
        };
        context.lines = ranges
            .iter()
            .map(|&(start, end)| FlexLine {
                items: context.flex_items[start..end].to_vec(),
                ..FlexLine::default()
            })
            .collect();
        debug!(
            target: "css::flexbox::lines",
            "[LINES] container={} wrap={:?} ranges={:?}",
            context.container.index(),
            context.wrap,
            ranges
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if lines are not broken before the overflowing item.
    fn breaks_before_overflow() {
        let ranges = break_into_lines(100.0, 0.0, &[40.0, 40.0, 40.0, 40.0]);
        assert_eq!(ranges, vec![(0, 2), (2, 4)]);
    }

    #[test]
    /// # Panics
    /// Panics if the gap is not counted between items of a line, or an exact fit is broken.
    fn gap_counts_toward_line_length() {
        // 40 + 20 + 40 == 100 fits; the third item would need 160.
        let exact_fit = break_into_lines(100.0, 20.0, &[40.0, 40.0, 40.0]);
        assert_eq!(exact_fit, vec![(0, 2), (2, 3)]);
        let overflow = break_into_lines(100.0, 20.0, &[40.0, 41.0, 40.0]);
        assert_eq!(overflow, vec![(0, 1), (1, 2), (2, 3)]);
    }

    #[test]
    /// # Panics
    /// Panics if an oversized item is split off into an empty line or dropped.
    fn oversized_item_gets_its_own_line() {
        let ranges = break_into_lines(100.0, 0.0, &[30.0, 250.0, 30.0]);
        assert_eq!(ranges, vec![(0, 1), (1, 2), (2, 3)]);
        assert!(ranges.iter().all(|(start, end)| end > start));
    }

    #[test]
    /// # Panics
    /// Panics if no items produce any line.
    fn no_items_no_lines() {
        assert!(break_into_lines(100.0, 0.0, &[]).is_empty());
    }
}
