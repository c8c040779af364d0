//! Axis resolution and ordering utilities
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#box-model>
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#propdef-order>

use css_values_units::{CssPoint, CssRectangle, CssSize};

use crate::chapter5::{FlexDirection, FlexWrap};

/// Abstract flex axis.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum FlexAxis {
    MainAxis,
    CrossAxis,
}

impl FlexAxis {
    #[inline]
    const fn table_index(self) -> usize {
        match self {
            Self::MainAxis => 0,
            Self::CrossAxis => 1,
        }
    }
}

/// Concrete axis: `Horizontal` selects width/x/left-right, `Vertical` selects height/y/top-bottom.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PhysicalAxis {
    Horizontal,
    Vertical,
}

impl PhysicalAxis {
    #[inline]
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

/// Physical axes for `[MainAxis, CrossAxis]` under `direction`.
///
/// Starts from main=width, cross=height; a reverse direction swaps the pair, and a column
/// direction swaps it again. Row and column-reverse therefore measure the main axis as width,
/// row-reverse and column measure it as height.
const fn compose_axes(direction: FlexDirection) -> [PhysicalAxis; 2] {
    let initial = [PhysicalAxis::Horizontal, PhysicalAxis::Vertical];
    let reversed = if direction.is_reverse() {
        swap_axes(initial)
    } else {
        initial
    };
    if direction.is_column() {
        swap_axes(reversed)
    } else {
        reversed
    }
}

#[inline]
const fn swap_axes([first, second]: [PhysicalAxis; 2]) -> [PhysicalAxis; 2] {
    [second, first]
}

/// Lookup table indexed by `[direction][axis]`.
const AXIS_TABLE: [[PhysicalAxis; 2]; 4] = [
    compose_axes(FlexDirection::Row),
    compose_axes(FlexDirection::RowReverse),
    compose_axes(FlexDirection::Column),
    compose_axes(FlexDirection::ColumnReverse),
];

/// Physical axis that `axis` maps to under `direction`.
#[inline]
pub const fn physical_axis(axis: FlexAxis, direction: FlexDirection) -> PhysicalAxis {
    AXIS_TABLE[direction.table_index()][axis.table_index()]
}

/// Resolved axes information for a flex container.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Axes {
    /// Physical axis measured as the main axis.
    pub main: PhysicalAxis,
    /// Physical axis measured as the cross axis.
    pub cross: PhysicalAxis,
    /// True when items are placed from main-end (row-reverse or column-reverse).
    pub main_reverse: bool,
    /// True when lines are stacked from cross-end (wrap-reverse).
    pub cross_reverse: bool,
}

/// Resolve main/cross axes and placement direction for a container.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-direction-property>
pub const fn resolve_axes(direction: FlexDirection, wrap: FlexWrap) -> Axes {
    Axes {
        main: physical_axis(FlexAxis::MainAxis, direction),
        cross: physical_axis(FlexAxis::CrossAxis, direction),
        main_reverse: direction.is_reverse(),
        cross_reverse: wrap.is_reverse(),
    }
}

/// Read/write access to the width-or-height (x-or-y) component selected by an axis.
pub trait AxisPair<T> {
    fn physical(&self, axis: PhysicalAxis) -> &T;

    fn physical_mut(&mut self, axis: PhysicalAxis) -> &mut T;

    /// Component the abstract `axis` maps to under `direction`.
    #[inline]
    fn axis(&self, axis: FlexAxis, direction: FlexDirection) -> &T {
        self.physical(physical_axis(axis, direction))
    }

    #[inline]
    fn axis_mut(&mut self, axis: FlexAxis, direction: FlexDirection) -> &mut T {
        self.physical_mut(physical_axis(axis, direction))
    }

    #[inline]
    fn set_axis(&mut self, axis: FlexAxis, direction: FlexDirection, value: T) {
        *self.axis_mut(axis, direction) = value;
    }
}

impl<T> AxisPair<T> for CssSize<T> {
    #[inline]
    fn physical(&self, axis: PhysicalAxis) -> &T {
        match axis {
            PhysicalAxis::Horizontal => &self.width,
            PhysicalAxis::Vertical => &self.height,
        }
    }

    #[inline]
    fn physical_mut(&mut self, axis: PhysicalAxis) -> &mut T {
        match axis {
            PhysicalAxis::Horizontal => &mut self.width,
            PhysicalAxis::Vertical => &mut self.height,
        }
    }
}

impl<T> AxisPair<T> for CssPoint<T> {
    #[inline]
    fn physical(&self, axis: PhysicalAxis) -> &T {
        match axis {
            PhysicalAxis::Horizontal => &self.x,
            PhysicalAxis::Vertical => &self.y,
        }
    }

    #[inline]
    fn physical_mut(&mut self, axis: PhysicalAxis) -> &mut T {
        match axis {
            PhysicalAxis::Horizontal => &mut self.x,
            PhysicalAxis::Vertical => &mut self.y,
        }
    }
}

/// Edge access along a physical axis: leading is left/top, trailing is right/bottom.
pub trait AxisEdges<T> {
    fn leading(&self, axis: PhysicalAxis) -> T;

    fn trailing(&self, axis: PhysicalAxis) -> T;

    fn leading_mut(&mut self, axis: PhysicalAxis) -> &mut T;

    fn trailing_mut(&mut self, axis: PhysicalAxis) -> &mut T;
}

impl<T: Copy> AxisEdges<T> for CssRectangle<T> {
    #[inline]
    fn leading(&self, axis: PhysicalAxis) -> T {
        match axis {
            PhysicalAxis::Horizontal => self.left,
            PhysicalAxis::Vertical => self.top,
        }
    }

    #[inline]
    fn trailing(&self, axis: PhysicalAxis) -> T {
        match axis {
            PhysicalAxis::Horizontal => self.right,
            PhysicalAxis::Vertical => self.bottom,
        }
    }

    #[inline]
    fn leading_mut(&mut self, axis: PhysicalAxis) -> &mut T {
        match axis {
            PhysicalAxis::Horizontal => &mut self.left,
            PhysicalAxis::Vertical => &mut self.top,
        }
    }

    #[inline]
    fn trailing_mut(&mut self, axis: PhysicalAxis) -> &mut T {
        match axis {
            PhysicalAxis::Horizontal => &mut self.right,
            PhysicalAxis::Vertical => &mut self.bottom,
        }
    }
}

/// Compute a stable ordering key for a flex item.
///
/// Returns (order, `original_index`) so a stable sort by this key respects DOM order ties.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#propdef-order>
pub const fn order_key(order: i32, original_index: usize) -> (i32, usize) {
    (order, original_index)
}

type OrderKey = (i32, usize);

/// Stable sort of `(handle, order)` pairs by order, preserving input order for ties.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#order-property>
pub fn sort_items_by_order_stable<T: Copy>(items: &[(T, i32)]) -> Vec<T> {
    let mut with_index: Vec<(OrderKey, T)> = items
        .iter()
        .enumerate()
        .map(|(original_index, &(handle, order))| (order_key(order, original_index), handle))
        .collect();
    with_index.sort_by_key(|(key, _)| *key);
    with_index.into_iter().map(|(_, handle)| handle).collect()
}
