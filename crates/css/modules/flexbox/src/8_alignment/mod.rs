//! Alignment: justify-content, align-items/align-self, align-content
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#alignment>

/// Spec: <https://www.w3.org/TR/css-flexbox-1/#justify-content-property>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum JustifyContent {
    #[default]
    FlexStart,
    FlexEnd,
    Center,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

/// Spec: <https://www.w3.org/TR/css-flexbox-1/#align-items-property>
///
/// Baseline alignment is not modelled: items carry no baseline metrics.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum AlignItems {
    FlexStart,
    FlexEnd,
    Center,
    #[default]
    Stretch,
}

/// Spec: <https://www.w3.org/TR/css-flexbox-1/#propdef-align-self>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum AlignSelf {
    /// Use the container's `align-items`.
    #[default]
    Auto,
    FlexStart,
    FlexEnd,
    Center,
    Stretch,
}

impl AlignSelf {
    /// Resolve `auto` against the container's `align-items`.
    #[inline]
    pub const fn resolve(self, align_items: AlignItems) -> AlignItems {
        match self {
            Self::Auto => align_items,
            Self::FlexStart => AlignItems::FlexStart,
            Self::FlexEnd => AlignItems::FlexEnd,
            Self::Center => AlignItems::Center,
            Self::Stretch => AlignItems::Stretch,
        }
    }
}

/// Spec: <https://www.w3.org/TR/css-flexbox-1/#align-content-property>
///
/// Only multi-line containers pack their lines; a single line always fills the container.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum AlignContent {
    FlexStart,
    FlexEnd,
    Center,
    SpaceBetween,
    SpaceAround,
    #[default]
    Stretch,
}

/// Compute the justify-content start offset and between-spacing for one line.
///
/// `free_space` is the line's leftover main-axis space after item sizes, margins and gaps. It may
/// be negative (overflow). Returns `(start_offset, between_spacing)` in flow order.
///
/// - `space-between` and `space-around` fall back to `flex-start` when the line holds one item.
/// - With negative free space `space-between` packs at start; `space-around` and `space-evenly`
///   overflow equally on both sides like `center`.
#[inline]
pub fn justify_params(justify: JustifyContent, free_space: f32, item_count: usize) -> (f32, f32) {
    if item_count == 0 {
        return (0.0, 0.0);
    }
    let count = item_count as f32;
    match justify {
        JustifyContent::FlexStart => (0.0, 0.0),
        JustifyContent::FlexEnd => (free_space, 0.0),
        JustifyContent::Center => (free_space * 0.5, 0.0),
        JustifyContent::SpaceBetween => {
            if item_count > 1 && free_space > 0.0 {
                (0.0, free_space / (count - 1.0))
            } else {
                (0.0, 0.0)
            }
        }
        JustifyContent::SpaceAround => {
            if item_count == 1 {
                (0.0, 0.0)
            } else if free_space > 0.0 {
                (free_space / (count * 2.0), free_space / count)
            } else {
                (free_space * 0.5, 0.0)
            }
        }
        JustifyContent::SpaceEvenly => {
            if free_space > 0.0 {
                let slots = count + 1.0;
                (free_space / slots, free_space / slots)
            } else {
                (free_space * 0.5, 0.0)
            }
        }
    }
}

/// Compute the align-content start offset and between-spacing for a multi-line container.
///
/// `stretch` returns `(0, 0)`: the leftover space was already folded into the line sizes.
#[inline]
pub fn align_content_params(align: AlignContent, free_space: f32, line_count: usize) -> (f32, f32) {
    if line_count == 0 {
        return (0.0, 0.0);
    }
    let count = line_count as f32;
    match align {
        AlignContent::FlexStart | AlignContent::Stretch => (0.0, 0.0),
        AlignContent::FlexEnd => (free_space, 0.0),
        AlignContent::Center => (free_space * 0.5, 0.0),
        AlignContent::SpaceBetween => {
            if line_count > 1 && free_space > 0.0 {
                (0.0, free_space / (count - 1.0))
            } else {
                (0.0, 0.0)
            }
        }
        AlignContent::SpaceAround => {
            if free_space > 0.0 {
                (free_space / (count * 2.0), free_space / count)
            } else {
                (free_space * 0.5, 0.0)
            }
        }
    }
}
