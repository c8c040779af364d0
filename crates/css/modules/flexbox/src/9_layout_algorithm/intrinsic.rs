//! Intrinsic (max-content) sizing of flex items.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#intrinsic-sizes>
//!
//! Used when an item's flex basis or cross size comes from its content. A leaf asks the host via
//! [`crate::FlexNode::measure`]; a container sums its children along its own main axis and takes
//! the largest child along its cross axis. Results are memoized in the item's dimension cache.

use css_values_units::{CssDimension, CssNumber, CssSize};
use log::trace;

use crate::chapter6::{CachedDimension, FlexItemArena, ItemId};
use crate::chapter7::{AxisEdges as _, AxisPair as _, FlexAxis, PhysicalAxis, physical_axis};

/// Max-content size of `item`'s contents along `axis`, in px.
pub fn content_size(arena: &mut FlexItemArena<'_>, item: ItemId, axis: PhysicalAxis) -> f32 {
    let key = CachedDimension::content(axis);
    if let Some(cached) = arena[item].cache.get(key) {
        return cached.unwrap_or(0.0);
    }
    let children = arena.collect_children(item);
    let value = if children.is_empty() {
        let measured = arena[item].node().measure(CssSize::unresolved());
        measured.physical(axis).unwrap_or(0.0).max(0.0)
    } else {
        let style = arena[item].style();
        let main_axis = physical_axis(FlexAxis::MainAxis, style.flex_direction());
        let mut sum = 0.0f32;
        let mut largest = 0.0f32;
        for child in children.iter().copied() {
            let outer = preferred_outer_size(arena, child, axis, main_axis);
            sum += outer;
            largest = largest.max(outer);
        }
        if axis == main_axis {
            let gap = style
                .gap()
                .physical(axis)
                .resolve(CssNumber::UNRESOLVED)
                .unwrap_or(0.0)
                .max(0.0);
            gap.mul_add(children.len() as f32 - 1.0, sum)
        } else {
            largest
        }
    };
    trace!(
        target: "css::flexbox::intrinsic",
        "[INTRINSIC] item={} axis={:?} content={:.3}",
        item.index(),
        axis,
        value
    );
    arena[item].cache.insert(key, CssNumber::new(value));
    value
}

/// Outer max-content contribution of `item` along `axis` inside a container whose main axis is
/// `container_main`.
fn preferred_outer_size(
    arena: &mut FlexItemArena<'_>,
    item: ItemId,
    axis: PhysicalAxis,
    container_main: PhysicalAxis,
) -> f32 {
    let style = arena[item].style();
    let indefinite = CssNumber::UNRESOLVED;
    let basis = match style.flex_basis() {
        CssDimension::Length(px) if axis == container_main => CssNumber::new(px),
        _ => CssNumber::UNRESOLVED,
    };
    let specified = basis.or(style.size().physical(axis).resolve(indefinite));
    let inner = if specified.is_resolved() {
        specified
    } else {
        CssNumber::new(content_size(arena, item, axis))
    };
    let min = style.min_size().physical(axis).resolve(indefinite);
    let max = style.max_size().physical(axis).resolve(indefinite);
    let margins = style.margin();
    let leading = margins.leading(axis).resolve(indefinite).unwrap_or(0.0);
    let trailing = margins.trailing(axis).resolve(indefinite).unwrap_or(0.0);
    inner.clamp_between(min, max).unwrap_or(0.0).max(0.0) + leading + trailing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chapter4::StyledNode;
    use crate::chapter5::FlexDirection;
    use crate::style::FlexStyle;
    use css_values_units::CssMarginRectangle;

    #[test]
    /// # Panics
    /// Panics if a leaf's measured content is not reported per axis.
    fn leaf_uses_measured_content() {
        let leaf = StyledNode::leaf(FlexStyle::default(), CssSize::px(40.0, 12.0));
        let mut arena = FlexItemArena::new();
        let id = arena.push(&leaf);
        assert!((content_size(&mut arena, id, PhysicalAxis::Horizontal) - 40.0).abs() < 0.01);
        assert!((content_size(&mut arena, id, PhysicalAxis::Vertical) - 12.0).abs() < 0.01);
        assert_eq!(
            arena[id].cache.get(CachedDimension::ContentWidth),
            Some(CssNumber::new(40.0))
        );
    }

    #[test]
    /// # Panics
    /// Panics if a row container does not sum widths (with margins and gaps) and max heights.
    fn row_container_sums_main_and_maxes_cross() {
        let margin = CssMarginRectangle::new(
            CssDimension::Length(0.0),
            CssDimension::Length(5.0),
            CssDimension::Length(0.0),
            CssDimension::Length(5.0),
        );
        let first = StyledNode::leaf(
            FlexStyle::builder().margin(margin).build().unwrap_or_default(),
            CssSize::px(30.0, 10.0),
        );
        let second = StyledNode::leaf(
            FlexStyle::builder()
                .width(CssDimension::Length(50.0))
                .build()
                .unwrap_or_default(),
            CssSize::px(20.0, 25.0),
        );
        let container_style = FlexStyle::builder()
            .gap(CssSize::splat(CssDimension::Length(4.0)))
            .build()
            .unwrap_or_default();
        let container = StyledNode::with_children(container_style, vec![first, second]);
        let mut arena = FlexItemArena::new();
        let id = arena.push(&container);
        // 5 + 30 + 5 + gap 4 + 50
        assert!((content_size(&mut arena, id, PhysicalAxis::Horizontal) - 94.0).abs() < 0.01);
        assert!((content_size(&mut arena, id, PhysicalAxis::Vertical) - 25.0).abs() < 0.01);
    }

    #[test]
    /// # Panics
    /// Panics if a column container does not stack its children vertically.
    fn column_container_stacks_vertically() {
        let child = || StyledNode::leaf(FlexStyle::default(), CssSize::px(30.0, 10.0));
        let style = FlexStyle::builder()
            .flex_direction(FlexDirection::Column)
            .build()
            .unwrap_or_default();
        let container = StyledNode::with_children(style, vec![child(), child(), child()]);
        let mut arena = FlexItemArena::new();
        let id = arena.push(&container);
        assert!((content_size(&mut arena, id, PhysicalAxis::Vertical) - 30.0).abs() < 0.01);
        assert!((content_size(&mut arena, id, PhysicalAxis::Horizontal) - 30.0).abs() < 0.01);
    }
}
