//! The individual pipeline steps, one file per algorithm phase.

mod align_content;
mod create_flex_items;
mod cross_axis_alignment;
mod cross_sizes;
mod finalize;
mod flex_base_size;
mod flex_lines;
mod flexible_lengths;
mod main_axis_alignment;

pub use align_content::AlignContentStep;
pub use create_flex_items::CreateFlexItemsStep;
pub use cross_axis_alignment::CrossAxisAlignmentStep;
pub use cross_sizes::DetermineCrossSizesStep;
pub use finalize::FinalizeLayoutStep;
pub use flex_base_size::DetermineFlexBaseSizeStep;
pub use flex_lines::{CollectFlexLinesStep, LineRange, break_into_lines};
pub use flexible_lengths::{FlexFactors, ResolveFlexibleLengthsStep, resolve_flexible_lengths};
pub use main_axis_alignment::MainAxisAlignmentStep;

use crate::chapter6::FlexItem;
use crate::chapter7::{AxisEdges as _, PhysicalAxis};

/// Sum of an item's leading and trailing margins along `axis`.
#[inline]
fn margin_sum(item: &FlexItem<'_>, axis: PhysicalAxis) -> f32 {
    item.margin.leading(axis) + item.margin.trailing(axis)
}
