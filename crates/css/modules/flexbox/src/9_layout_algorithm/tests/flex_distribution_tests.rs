//! Tests for flex-grow and flex-shrink distribution through the full pipeline.

use super::*;

#[test]
/// Three 50px items growing equally in a 300px row.
///
/// # Panics
/// Panics if free space is not split evenly or items are not placed back to back.
fn equal_grow_fills_container() {
    let root = container(
        FlexStyle::builder(),
        (0..3).map(|_| leaf(basis(50.0).flex_grow(1.0))).collect(),
    );
    let out = layout_children(&root, 300.0, 100.0);
    assert_boxes(
        &out,
        &[
            (0.0, 0.0, 100.0, 100.0),
            (100.0, 0.0, 100.0, 100.0),
            (200.0, 0.0, 100.0, 100.0),
        ],
    );
}

#[test]
/// # Panics
/// Panics if grow factors do not weight the distribution.
fn grow_is_proportional_to_factor() {
    let root = container(
        FlexStyle::builder(),
        vec![
            leaf(basis(0.0).flex_grow(1.0)),
            leaf(basis(0.0).flex_grow(3.0)),
        ],
    );
    let out = layout_children(&root, 200.0, 10.0);
    assert_boxes(&out, &[(0.0, 0.0, 50.0, 10.0), (50.0, 0.0, 150.0, 10.0)]);
}

#[test]
/// # Panics
/// Panics if a max-width clamp is not frozen with its excess handed to the other items.
fn grow_respects_max_and_redistributes() {
    let root = container(
        FlexStyle::builder(),
        vec![
            leaf(
                basis(50.0)
                    .flex_grow(1.0)
                    .max_size(CssSize::new(CssDimension::Length(80.0), CssDimension::Auto)),
            ),
            leaf(basis(50.0).flex_grow(1.0)),
            leaf(basis(50.0).flex_grow(1.0)),
        ],
    );
    let out = layout_children(&root, 300.0, 10.0);
    let widths: Vec<f32> = out.iter().map(|placement| placement.2).collect();
    assert!((widths[0] - 80.0).abs() < 0.01);
    assert!((widths[1] - 110.0).abs() < 0.01);
    assert!((widths[2] - 110.0).abs() < 0.01);
    let total: f32 = widths.iter().sum();
    assert!((total - 300.0).abs() < 0.01);
}

#[test]
/// # Panics
/// Panics if shrinking ignores min-width or the remaining deficit is not shared.
fn shrink_respects_min_and_freezes() {
    let shrinking = || basis(50.0).flex_shrink(1.0);
    let min_width = CssSize::new(CssDimension::Length(40.0), CssDimension::Auto);
    let root = container(
        FlexStyle::builder(),
        vec![
            leaf(shrinking().min_size(min_width)),
            leaf(shrinking()),
            leaf(shrinking()),
        ],
    );
    let out = layout_children(&root, 100.0, 10.0);
    assert_boxes(
        &out,
        &[
            (0.0, 0.0, 40.0, 10.0),
            (40.0, 0.0, 30.0, 10.0),
            (70.0, 0.0, 30.0, 10.0),
        ],
    );
}

#[test]
/// # Panics
/// Panics if items without grow factors change size when there is free space.
fn zero_grow_keeps_base_size() {
    let root = container(FlexStyle::builder(), vec![leaf(basis(50.0)), leaf(basis(70.0))]);
    let out = layout_children(&root, 300.0, 10.0);
    assert_boxes(&out, &[(0.0, 0.0, 50.0, 10.0), (50.0, 0.0, 70.0, 10.0)]);
}

#[test]
/// # Panics
/// Panics if the initial flex-shrink of 1 does not apply to overflowing items.
fn initial_shrink_factor_absorbs_overflow() {
    let sized = || FlexStyle::builder().width(CssDimension::Length(100.0));
    let root = container(FlexStyle::builder(), vec![leaf(sized()), leaf(sized())]);
    let out = layout_children(&root, 150.0, 10.0);
    assert_boxes(&out, &[(0.0, 0.0, 75.0, 10.0), (75.0, 0.0, 75.0, 10.0)]);
}

#[test]
/// # Panics
/// Panics if a percentage basis is not resolved against the container's main size.
fn percentage_basis_resolves_against_container() {
    let root = container(
        FlexStyle::builder(),
        vec![leaf(FlexStyle::builder().flex_basis(CssDimension::Percentage(25.0)))],
    );
    let out = layout_children(&root, 200.0, 10.0);
    assert_boxes(&out, &[(0.0, 0.0, 50.0, 10.0)]);
}

#[test]
/// # Panics
/// Panics if a content basis does not use the measured content width.
fn content_basis_uses_measured_size() {
    let root = container(
        FlexStyle::builder(),
        vec![StyledNode::leaf(
            FlexStyle::builder()
                .flex_basis(CssDimension::Content)
                .width(CssDimension::Length(90.0))
                .build()
                .unwrap_or_default(),
            CssSize::px(35.0, 10.0),
        )],
    );
    let out = layout_children(&root, 200.0, 10.0);
    assert_boxes(&out, &[(0.0, 0.0, 35.0, 10.0)]);
}
