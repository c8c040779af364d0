//! Flex Formatting Context (FFC): the boundary between the host tree and the flex algorithm
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-containers>
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#visibility-collapse>

use css_values_units::{CssNumber, CssSize};

use crate::style::FlexStyle;

/// The `visibility` property, as far as layout cares.
///
/// Spec: <https://www.w3.org/TR/CSS2/visufx.html#visibility>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum CssVisibility {
    #[default]
    Visible,
    /// Not painted, but still reserves its space.
    Hidden,
    /// Removed from flow entirely: the item never enters the container's working list.
    Collapse,
}

impl CssVisibility {
    /// Whether a box with this visibility takes part in its container's layout.
    #[inline]
    pub const fn affects_layout(self) -> bool {
        !matches!(self, Self::Collapse)
    }

    /// Whether the box would be painted.
    #[inline]
    pub const fn is_rendered(self) -> bool {
        matches!(self, Self::Visible)
    }
}

/// Read-only view of one node of the host's tree.
///
/// Every node is treated as a flex container for its own children; a node without
/// participating children is a leaf sized by [`FlexNode::measure`].
pub trait FlexNode {
    /// Computed flex style. Must not change during a layout pass.
    fn style(&self) -> &FlexStyle;

    /// Children in document order.
    fn children(&self) -> Vec<&dyn FlexNode>;

    /// Intrinsic (max-content) size of a leaf's own content.
    ///
    /// Components left unresolved are treated as zero.
    fn measure(&self, _available: CssSize<CssNumber>) -> CssSize<CssNumber> {
        CssSize::unresolved()
    }
}

/// A plain owned node: style, children, and a fixed content size for leaves.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyledNode {
    style: FlexStyle,
    children: Vec<StyledNode>,
    content_size: CssSize<CssNumber>,
}

impl StyledNode {
    /// A node with no children and no intrinsic content.
    #[inline]
    pub fn new(style: FlexStyle) -> Self {
        Self {
            style,
            children: Vec::new(),
            content_size: CssSize::unresolved(),
        }
    }

    /// A leaf whose content measures `content_size`.
    #[inline]
    pub fn leaf(style: FlexStyle, content_size: CssSize<CssNumber>) -> Self {
        Self {
            style,
            children: Vec::new(),
            content_size,
        }
    }

    /// A container with the given children.
    #[inline]
    pub fn with_children(style: FlexStyle, children: Vec<Self>) -> Self {
        Self {
            style,
            children,
            content_size: CssSize::unresolved(),
        }
    }

    #[inline]
    pub fn push_child(&mut self, child: Self) {
        self.children.push(child);
    }
}

impl FlexNode for StyledNode {
    fn style(&self) -> &FlexStyle {
        &self.style
    }

    fn children(&self) -> Vec<&dyn FlexNode> {
        self.children
            .iter()
            .map(|child| child as &dyn FlexNode)
            .collect()
    }

    fn measure(&self, _available: CssSize<CssNumber>) -> CssSize<CssNumber> {
        self.content_size
    }
}
