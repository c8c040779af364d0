//! Tests for multi-line containers: line breaking, align-content and wrap-reverse.

use super::*;
use crate::chapter5::FlexWrap;
use crate::chapter8::AlignContent;

/// Four 40x20 items in a wrapping row.
fn four_items(container_style: FlexStyleBuilder) -> StyledNode {
    container(
        container_style.flex_wrap(FlexWrap::Wrap),
        (0..4)
            .map(|_| leaf(basis(40.0).height(CssDimension::Length(20.0))))
            .collect(),
    )
}

#[test]
/// # Panics
/// Panics if the third item is not pushed onto a second line or the lines do not stretch.
fn wraps_and_stretches_lines() {
    let out = layout_children(&four_items(FlexStyle::builder()), 100.0, 100.0);
    // Free cross space 60 is split over two lines: each line is 50 tall.
    assert_boxes(
        &out,
        &[
            (0.0, 0.0, 40.0, 20.0),
            (40.0, 0.0, 40.0, 20.0),
            (0.0, 50.0, 40.0, 20.0),
            (40.0, 50.0, 40.0, 20.0),
        ],
    );
}

#[test]
/// # Panics
/// Panics if flex-start packing leaves space between lines.
fn flex_start_packs_lines() {
    let root = four_items(FlexStyle::builder().align_content(AlignContent::FlexStart));
    let out = layout_children(&root, 100.0, 100.0);
    let rows: Vec<f32> = out.iter().map(|placement| placement.1).collect();
    assert_eq!(rows, vec![0.0, 0.0, 20.0, 20.0]);
}

#[test]
/// # Panics
/// Panics if space-between does not pin the lines to both cross edges.
fn space_between_pins_lines_to_edges() {
    let root = four_items(FlexStyle::builder().align_content(AlignContent::SpaceBetween));
    let out = layout_children(&root, 100.0, 100.0);
    let rows: Vec<f32> = out.iter().map(|placement| placement.1).collect();
    assert_eq!(rows, vec![0.0, 0.0, 80.0, 80.0]);
}

#[test]
/// # Panics
/// Panics if wrap-reverse does not stack lines from the bottom while keeping item order.
fn wrap_reverse_stacks_from_cross_end() {
    let root = container(
        FlexStyle::builder()
            .flex_wrap(FlexWrap::WrapReverse)
            .align_content(AlignContent::FlexStart),
        (0..4)
            .map(|_| leaf(basis(40.0).height(CssDimension::Length(20.0))))
            .collect(),
    );
    let out = layout_children(&root, 100.0, 100.0);
    assert_boxes(
        &out,
        &[
            (0.0, 80.0, 40.0, 20.0),
            (40.0, 80.0, 40.0, 20.0),
            (0.0, 60.0, 40.0, 20.0),
            (40.0, 60.0, 40.0, 20.0),
        ],
    );
}

#[test]
/// # Panics
/// Panics if column and row gaps are not applied between items and lines.
fn gaps_separate_items_and_lines() {
    let root = container(
        FlexStyle::builder()
            .flex_wrap(FlexWrap::Wrap)
            .align_content(AlignContent::FlexStart)
            .gap(CssSize::new(CssDimension::Length(10.0), CssDimension::Length(5.0))),
        (0..3)
            .map(|_| leaf(basis(40.0).height(CssDimension::Length(20.0))))
            .collect(),
    );
    let out = layout_children(&root, 100.0, 100.0);
    assert_boxes(
        &out,
        &[
            (0.0, 0.0, 40.0, 20.0),
            (50.0, 0.0, 40.0, 20.0),
            (0.0, 25.0, 40.0, 20.0),
        ],
    );
}

#[test]
/// # Panics
/// Panics if items that fill the line exactly, gap included, are wrapped early.
fn exact_fit_with_gap_stays_on_one_line() {
    let root = container(
        FlexStyle::builder()
            .flex_wrap(FlexWrap::Wrap)
            .align_content(AlignContent::FlexStart)
            .gap(CssSize::new(CssDimension::Length(20.0), CssDimension::Length(0.0))),
        (0..3)
            .map(|_| leaf(basis(40.0).height(CssDimension::Length(20.0))))
            .collect(),
    );
    let out = layout_children(&root, 100.0, 100.0);
    assert_boxes(
        &out,
        &[
            (0.0, 0.0, 40.0, 20.0),
            (60.0, 0.0, 40.0, 20.0),
            (0.0, 20.0, 40.0, 20.0),
        ],
    );
}

#[test]
/// # Panics
/// Panics if an item wider than the container is split or dropped instead of sitting alone.
fn oversized_item_sits_alone() {
    let root = container(
        FlexStyle::builder()
            .flex_wrap(FlexWrap::Wrap)
            .align_content(AlignContent::FlexStart),
        vec![
            leaf(basis(30.0).height(CssDimension::Length(10.0))),
            leaf(basis(150.0).height(CssDimension::Length(10.0))),
            leaf(basis(30.0).height(CssDimension::Length(10.0))),
        ],
    );
    let out = layout_children(&root, 100.0, 100.0);
    assert_boxes(
        &out,
        &[
            (0.0, 0.0, 30.0, 10.0),
            (0.0, 10.0, 150.0, 10.0),
            (0.0, 20.0, 30.0, 10.0),
        ],
    );
}

#[test]
/// # Panics
/// Panics if a nowrap container breaks its items into several lines.
fn nowrap_keeps_a_single_line() {
    let root = container(
        FlexStyle::builder(),
        (0..4)
            .map(|_| leaf(basis(40.0).height(CssDimension::Length(20.0))))
            .collect(),
    );
    let out = layout_children(&root, 100.0, 100.0);
    let rows: Vec<f32> = out.iter().map(|placement| placement.1).collect();
    assert_eq!(rows, vec![0.0; 4]);
    let columns: Vec<f32> = out.iter().map(|placement| placement.0).collect();
    assert_eq!(columns, vec![0.0, 40.0, 80.0, 120.0]);
}
