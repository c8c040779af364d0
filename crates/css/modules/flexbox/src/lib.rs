//! CSS Flexible Box Layout Module Level 1: the flex layout core.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/>
//!
//! The host owns the node tree and implements [`FlexNode`]; [`layout`] runs the flex algorithm
//! over a container and its subtree and returns a [`FlexLayout`] holding each item's resolved size
//! and position. Styles are validated when built ([`FlexStyleBuilder::build`]), so a layout pass
//! never fails.

// Chapter modules mapped to the Flexbox Level 1 spec structure.
// Spec: §4 Flex Formatting Context (host boundary, visibility)
#[path = "4_flex_formatting_context/mod.rs"]
mod chapter4;
// Spec: §5 Flex Containers
#[path = "5_flex_containers/mod.rs"]
mod chapter5;
// Spec: §6 Flex Items
#[path = "6_flex_items/mod.rs"]
mod chapter6;
// Spec: §5.4 / §9 Axis resolution and order
#[path = "7_axis_and_order/mod.rs"]
mod chapter7;
// Spec: §8 Alignment (justify-content, align-items/self, align-content)
#[path = "8_alignment/mod.rs"]
mod chapter8;
// Spec: §9 Flex Layout Algorithm
#[path = "9_layout_algorithm/mod.rs"]
mod chapter9;
mod style;

pub use chapter4::{CssVisibility, FlexNode, StyledNode};
pub use chapter5::{FlexDirection, FlexWrap};
pub use chapter6::{
    CachedDimension, DimensionCache, FlexItem, FlexItemArena, ItemId, collect_flex_items,
    is_flex_item,
};
pub use chapter7::{
    Axes, AxisEdges, AxisPair, FlexAxis, PhysicalAxis, order_key, physical_axis, resolve_axes,
    sort_items_by_order_stable,
};
pub use chapter8::{
    AlignContent, AlignItems, AlignSelf, JustifyContent, align_content_params, justify_params,
};
pub use chapter9::{
    AlignContentStep, CollectFlexLinesStep, CreateFlexItemsStep, CrossAxisAlignmentStep,
    DetermineCrossSizesStep, DetermineFlexBaseSizeStep, FinalizeLayoutStep, FlexFactors,
    FlexLayout, FlexLine, FlexibleBoxLayoutContext, FlexibleBoxStep, LayoutOptions, LineRange,
    MainAxisAlignmentStep, PIPELINE, ResolveFlexibleLengthsStep, break_into_lines, layout,
    layout_with_options, resolve_flexible_lengths,
};
pub use style::{FlexStyle, FlexStyleBuilder, StyleError};

pub use css_values_units::{
    CssDimension, CssMarginRectangle, CssNumber, CssPoint, CssRectangle, CssSize,
};
