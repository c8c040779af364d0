//! Flex Containers: container properties and enums
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-containers>

/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-direction-property>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum FlexDirection {
    #[default]
    Row,
    RowReverse,
    Column,
    ColumnReverse,
}

impl FlexDirection {
    /// All directions, in table order.
    pub const ALL: [Self; 4] = [Self::Row, Self::RowReverse, Self::Column, Self::ColumnReverse];

    #[inline]
    pub const fn is_column(self) -> bool {
        matches!(self, Self::Column | Self::ColumnReverse)
    }

    /// True when items are placed starting from the main-end edge.
    #[inline]
    pub const fn is_reverse(self) -> bool {
        matches!(self, Self::RowReverse | Self::ColumnReverse)
    }

    /// Row index into per-direction lookup tables.
    #[inline]
    pub(crate) const fn table_index(self) -> usize {
        match self {
            Self::Row => 0,
            Self::RowReverse => 1,
            Self::Column => 2,
            Self::ColumnReverse => 3,
        }
    }
}

/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-wrap-property>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum FlexWrap {
    #[default]
    Nowrap,
    Wrap,
    WrapReverse,
}

impl FlexWrap {
    /// False for single-line containers.
    #[inline]
    pub const fn is_multi_line(self) -> bool {
        !matches!(self, Self::Nowrap)
    }

    /// True when lines stack from the cross-end edge.
    #[inline]
    pub const fn is_reverse(self) -> bool {
        matches!(self, Self::WrapReverse)
    }
}
