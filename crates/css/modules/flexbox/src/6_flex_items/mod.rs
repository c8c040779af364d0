//! Flex Items: identification and the per-pass working model
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-items>
//!
//! Flex items are transient: an arena of them is built at the start of a layout pass, addressed
//! by [`ItemId`], and discarded with the pass. Nothing is persisted on the host's nodes.

use core::fmt;
use core::ops::{Index, IndexMut};

use css_values_units::{CssNumber, CssPoint, CssRectangle, CssSize};

use crate::chapter4::FlexNode;
use crate::chapter5::FlexDirection;
use crate::chapter7::{PhysicalAxis, sort_items_by_order_stable};
use crate::style::FlexStyle;

/// Index of a flex item inside its pass's [`FlexItemArena`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ItemId(usize);

impl ItemId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Quantities memoized per item within one pass.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum CachedDimension {
    /// Max-content width of the item's contents.
    ContentWidth,
    /// Max-content height of the item's contents.
    ContentHeight,
    /// Flex base size clamped by the min/max main size.
    HypotheticalMainSize,
    /// Resolved min main size (auto resolves to zero).
    MinMainSize,
    /// Resolved max main size (auto resolves to infinity).
    MaxMainSize,
    /// Preferred or content cross size clamped by the min/max cross size.
    HypotheticalCrossSize,
}

impl CachedDimension {
    /// Number of cache slots.
    pub const COUNT: usize = 6;

    #[inline]
    const fn slot(self) -> usize {
        match self {
            Self::ContentWidth => 0,
            Self::ContentHeight => 1,
            Self::HypotheticalMainSize => 2,
            Self::MinMainSize => 3,
            Self::MaxMainSize => 4,
            Self::HypotheticalCrossSize => 5,
        }
    }

    /// Content-size key for a physical axis.
    #[inline]
    pub const fn content(axis: PhysicalAxis) -> Self {
        match axis {
            PhysicalAxis::Horizontal => Self::ContentWidth,
            PhysicalAxis::Vertical => Self::ContentHeight,
        }
    }
}

/// Fixed-size memo table keyed by [`CachedDimension`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DimensionCache {
    slots: [Option<CssNumber>; CachedDimension::COUNT],
}

impl DimensionCache {
    #[inline]
    pub const fn get(&self, key: CachedDimension) -> Option<CssNumber> {
        self.slots[key.slot()]
    }

    #[inline]
    pub fn insert(&mut self, key: CachedDimension, value: CssNumber) {
        self.slots[key.slot()] = Some(value);
    }
}

/// One node wrapped for one layout pass.
///
/// Working fields are written by the pipeline steps in order; `size` and `position` hold the
/// result once the container's pipeline has finished.
pub struct FlexItem<'node> {
    node: &'node dyn FlexNode,
    /// Participating children in order-modified document order.
    children: Vec<ItemId>,
    children_collected: bool,
    pub(crate) flex_base_size: CssNumber,
    pub(crate) cache: DimensionCache,
    /// Resolved margins in px; `auto` edges hold the space they absorbed (zero until aligned).
    pub(crate) margin: CssRectangle<f32>,
    /// Which margin edges are `auto`.
    pub(crate) margin_auto: CssRectangle<bool>,
    /// Main size after flexible length resolution.
    pub(crate) target_main_size: f32,
    /// Cross size after stretch.
    pub(crate) cross_size: f32,
    /// Border-box offsets from the container's content-box origin.
    pub(crate) main_offset: f32,
    pub(crate) cross_offset: f32,
    size: CssSize<CssNumber>,
    position: CssPoint<CssNumber>,
}

impl<'node> FlexItem<'node> {
    fn new(node: &'node dyn FlexNode) -> Self {
        Self {
            node,
            children: Vec::new(),
            children_collected: false,
            flex_base_size: CssNumber::UNRESOLVED,
            cache: DimensionCache::default(),
            margin: CssRectangle::all(0.0),
            margin_auto: CssRectangle::all(false),
            target_main_size: 0.0,
            cross_size: 0.0,
            main_offset: 0.0,
            cross_offset: 0.0,
            size: CssSize::unresolved(),
            position: CssPoint::new(CssNumber::UNRESOLVED, CssNumber::UNRESOLVED),
        }
    }

    #[inline]
    pub fn node(&self) -> &'node dyn FlexNode {
        self.node
    }

    #[inline]
    pub fn style(&self) -> &'node FlexStyle {
        self.node.style()
    }

    #[inline]
    pub fn direction(&self) -> FlexDirection {
        self.style().flex_direction()
    }

    /// Flex base size resolved in this pass; unresolved before the basis step ran.
    #[inline]
    pub const fn flex_base_size(&self) -> CssNumber {
        self.flex_base_size
    }

    /// Participating children, in layout order.
    #[inline]
    pub fn children(&self) -> &[ItemId] {
        &self.children
    }

    /// Resolved border-box size.
    #[inline]
    pub const fn size(&self) -> CssSize<CssNumber> {
        self.size
    }

    /// Resolved offset relative to the parent container's content box.
    #[inline]
    pub const fn position(&self) -> CssPoint<CssNumber> {
        self.position
    }

    #[inline]
    pub(crate) fn set_geometry(&mut self, size: CssSize<CssNumber>, position: CssPoint<CssNumber>) {
        self.size = size;
        self.position = position;
    }
}

impl fmt::Debug for FlexItem<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlexItem")
            .field("children", &self.children)
            .field("flex_base_size", &self.flex_base_size)
            .field("size", &self.size)
            .field("position", &self.position)
            .finish_non_exhaustive()
    }
}

/// Storage for every flex item of one pass.
#[derive(Debug, Default)]
pub struct FlexItemArena<'node> {
    items: Vec<FlexItem<'node>>,
}

impl<'node> FlexItemArena<'node> {
    #[inline]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Wrap `node` in a new item.
    #[inline]
    pub fn push(&mut self, node: &'node dyn FlexNode) -> ItemId {
        let id = ItemId(self.items.len());
        self.items.push(FlexItem::new(node));
        id
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn get(&self, id: ItemId) -> Option<&FlexItem<'node>> {
        self.items.get(id.0)
    }

    /// Every item with its id, in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (ItemId, &FlexItem<'node>)> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| (ItemId(index), item))
    }

    /// Items for `parent`'s participating children, created on first request.
    ///
    /// Children are collected at most once per pass, so repeated calls return the same ids.
    pub fn collect_children(&mut self, parent: ItemId) -> Vec<ItemId> {
        if !self[parent].children_collected {
            let node = self[parent].node;
            let ordered = collect_flex_items(&node.children());
            let ids: Vec<ItemId> = ordered.into_iter().map(|child| self.push(child)).collect();
            let item = &mut self[parent];
            item.children = ids;
            item.children_collected = true;
        }
        self[parent].children.clone()
    }
}

impl<'node> Index<ItemId> for FlexItemArena<'node> {
    type Output = FlexItem<'node>;

    #[inline]
    fn index(&self, index: ItemId) -> &Self::Output {
        debug_assert!(index.0 < self.items.len(), "ItemId from another pass");
        &self.items[index.0]
    }
}

impl IndexMut<ItemId> for FlexItemArena<'_> {
    #[inline]
    fn index_mut(&mut self, index: ItemId) -> &mut Self::Output {
        debug_assert!(index.0 < self.items.len(), "ItemId from another pass");
        &mut self.items[index.0]
    }
}

/// Order children for flex layout and drop the ones that do not participate.
///
/// Sorting by `order` happens first (stable, so ties keep document order); children whose
/// visibility does not affect layout are removed afterwards.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-items>
pub fn collect_flex_items<'node>(children: &[&'node dyn FlexNode]) -> Vec<&'node dyn FlexNode> {
    let keyed: Vec<(&'node dyn FlexNode, i32)> = children
        .iter()
        .map(|child| (*child, child.style().order()))
        .collect();
    sort_items_by_order_stable(&keyed)
        .into_iter()
        .filter(|child| is_flex_item(child.style()))
        .collect()
}

/// Returns true when a child with `style` takes part in its container's layout.
#[inline]
pub const fn is_flex_item(style: &FlexStyle) -> bool {
    style.visibility().affects_layout()
}
