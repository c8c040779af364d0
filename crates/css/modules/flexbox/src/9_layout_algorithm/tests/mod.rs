//! Tests for the flex layout pipeline.

use super::*;
use crate::chapter4::StyledNode;
use crate::style::{FlexStyle, FlexStyleBuilder};
use css_values_units::{CssDimension, CssMarginRectangle};

mod flex_distribution_tests;
mod line_breaking_tests;

/// Route `log` output to the test harness; repeated calls are no-ops.
pub fn init_logging() {
    if let Err(error) = env_logger::builder().is_test(true).try_init() {
        log::trace!(target: "css::flexbox::tests", "logger already installed: {error}");
    }
}

/// Builder for an item with a fixed flex basis and no shrinking.
#[inline]
pub fn basis(px: f32) -> FlexStyleBuilder {
    FlexStyle::builder()
        .flex_basis(CssDimension::Length(px))
        .flex_shrink(0.0)
}

/// Content-less leaf from a builder; invalid builders fall back to the initial style.
#[inline]
pub fn leaf(builder: FlexStyleBuilder) -> StyledNode {
    StyledNode::new(builder.build().unwrap_or_default())
}

/// Container from a builder.
#[inline]
pub fn container(builder: FlexStyleBuilder, children: Vec<StyledNode>) -> StyledNode {
    StyledNode::with_children(builder.build().unwrap_or_default(), children)
}

/// Margins in px; `None` is `auto`.
#[inline]
pub fn margins(
    top: Option<f32>,
    right: Option<f32>,
    bottom: Option<f32>,
    left: Option<f32>,
) -> CssMarginRectangle {
    let edge = |value: Option<f32>| value.map_or(CssDimension::Auto, CssDimension::Length);
    CssMarginRectangle::new(edge(top), edge(right), edge(bottom), edge(left))
}

/// `(x, y, width, height)` of each child of `parent`, in layout order.
pub fn boxes(result: &FlexLayout<'_>, parent: ItemId) -> Vec<(f32, f32, f32, f32)> {
    result
        .children(parent)
        .iter()
        .map(|id| {
            let size = result.size(*id);
            let position = result.position(*id);
            (
                position.x.unwrap_or(f32::NAN),
                position.y.unwrap_or(f32::NAN),
                size.width.unwrap_or(f32::NAN),
                size.height.unwrap_or(f32::NAN),
            )
        })
        .collect()
}

/// Lay out `root` in a definite `width` x `height` box and return its children's boxes.
pub fn layout_children(root: &StyledNode, width: f32, height: f32) -> Vec<(f32, f32, f32, f32)> {
    init_logging();
    let result = layout(root, CssSize::px(width, height));
    boxes(&result, result.root())
}

/// Compare boxes with a 0.01 px tolerance.
///
/// # Panics
/// Panics if the lengths differ or any component is further than 0.01 px away.
pub fn assert_boxes(actual: &[(f32, f32, f32, f32)], expected: &[(f32, f32, f32, f32)]) {
    assert_eq!(actual.len(), expected.len(), "got {actual:?}");
    for (got, want) in actual.iter().zip(expected) {
        let close = (got.0 - want.0).abs() < 0.01
            && (got.1 - want.1).abs() < 0.01
            && (got.2 - want.2).abs() < 0.01
            && (got.3 - want.3).abs() < 0.01;
        assert!(close, "got {actual:?}, expected {expected:?}");
    }
}
