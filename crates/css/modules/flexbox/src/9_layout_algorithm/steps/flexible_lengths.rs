//! Resolving flexible lengths.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#resolve-flexible-lengths>

use log::{debug, trace};

use super::margin_sum;
use crate::chapter6::{CachedDimension, FlexItem};
use crate::chapter7::PhysicalAxis;
use crate::chapter9::{FlexibleBoxLayoutContext, FlexibleBoxStep};

/// Inputs of the flexible length resolution for one item.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FlexFactors {
    /// Flex base size.
    pub base: f32,
    /// Flex base size clamped by `min`/`max`.
    pub hypothetical: f32,
    pub grow: f32,
    pub shrink: f32,
    pub min: f32,
    pub max: f32,
    /// Sum of the item's main-axis margins.
    pub margins: f32,
}

impl FlexFactors {
    /// Item with no flexibility and no constraints.
    #[inline]
    pub const fn fixed(base: f32) -> Self {
        Self {
            base,
            hypothetical: base,
            grow: 0.0,
            shrink: 0.0,
            min: 0.0,
            max: f32::INFINITY,
            margins: 0.0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn with_grow(mut self, grow: f32) -> Self {
        self.grow = grow;
        self
    }

    #[inline]
    #[must_use]
    pub const fn with_shrink(mut self, shrink: f32) -> Self {
        self.shrink = shrink;
        self
    }

    /// Set min/max and recompute the hypothetical size from them.
    #[inline]
    #[must_use]
    pub fn with_bounds(mut self, min: f32, max: f32) -> Self {
        self.min = min;
        self.max = max;
        self.hypothetical = self.clamp(self.base);
        self
    }

    #[inline]
    #[must_use]
    pub const fn with_margins(mut self, margins: f32) -> Self {
        self.margins = margins;
        self
    }

    /// Clamp by max then min (min wins), never below zero.
    #[inline]
    fn clamp(self, value: f32) -> f32 {
        value.min(self.max).max(self.min).max(0.0)
    }
}

#[derive(Copy, Clone, Debug)]
struct Working {
    target: f32,
    frozen: bool,
}

/// Target main sizes for one line with `available` main space (gaps already removed).
///
/// Follows the freeze loop: inflexible items are frozen at their hypothetical size, remaining free
/// space goes to unfrozen items by grow factor (or by shrink factor times base size), min/max
/// violations are clamped and frozen by the sign of the total violation, and the loop repeats
/// until every item is frozen.
pub fn resolve_flexible_lengths(items: &[FlexFactors], available: f32) -> Vec<f32> {
    let hypothetical_outer: f32 = items.iter().map(|item| item.hypothetical + item.margins).sum();
    let growing = hypothetical_outer < available;
    let mut working = initial_states(items, growing);
    let initial_free_space = free_space(items, &working, available);

    // Every pass freezes at least one item, so this terminates within `items.len()` passes.
    for _ in 0..=items.len() {
        if working.iter().all(|state| state.frozen) {
            break;
        }
        let remaining =
            remaining_free_space(items, &working, available, initial_free_space, growing);
        distribute_free_space(items, &mut working, remaining, growing);
        let total_violation = clamp_and_freeze(items, &mut working);
        trace!(
            target: "css::flexbox::flexible_lengths",
            "[FLEX] remaining={remaining:.3} total_violation={total_violation:.3}"
        );
    }

    working.into_iter().map(|state| state.target).collect()
}

/// Freeze inflexible items at their hypothetical size; everything else starts at its base size.
fn initial_states(items: &[FlexFactors], growing: bool) -> Vec<Working> {
    items
        .iter()
        .map(|item| {
            let factor = if growing { item.grow } else { item.shrink };
            let inflexible = factor <= 0.0
                || (growing && item.base > item.hypothetical)
                || (!growing && item.base < item.hypothetical);
            Working {
                target: if inflexible { item.hypothetical } else { item.base },
                frozen: inflexible,
            }
        })
        .collect()
}

/// `available` minus frozen targets and unfrozen base sizes, margins included.
fn free_space(items: &[FlexFactors], states: &[Working], available: f32) -> f32 {
    let used: f32 = items
        .iter()
        .zip(states)
        .map(|(item, state)| {
            let inner = if state.frozen { state.target } else { item.base };
            inner + item.margins
        })
        .sum();
    available - used
}

/// Free space for this pass; unfrozen factors summing below one only take that share of the
/// initial free space.
fn remaining_free_space(
    items: &[FlexFactors],
    states: &[Working],
    available: f32,
    initial_free_space: f32,
    growing: bool,
) -> f32 {
    let free = free_space(items, states, available);
    let factor_sum: f32 = items
        .iter()
        .zip(states)
        .filter(|(_, state)| !state.frozen)
        .map(|(item, _)| if growing { item.grow } else { item.shrink })
        .sum();
    let scaled = initial_free_space * factor_sum;
    if factor_sum < 1.0 && scaled.abs() < free.abs() {
        scaled
    } else {
        free
    }
}

/// Set unfrozen targets from the base size plus their weighted share of `remaining`.
///
/// Growing weighs by grow factor; shrinking weighs by shrink factor times base size.
fn distribute_free_space(
    items: &[FlexFactors],
    states: &mut [Working],
    remaining: f32,
    growing: bool,
) {
    let weight = |item: &FlexFactors| {
        if growing {
            item.grow
        } else {
            item.shrink * item.base
        }
    };
    let weight_sum: f32 = items
        .iter()
        .zip(states.iter())
        .filter(|(_, state)| !state.frozen)
        .map(|(item, _)| weight(item))
        .sum();
    for (item, state) in items.iter().zip(states.iter_mut()) {
        if state.frozen {
            continue;
        }
        state.target = if remaining == 0.0 || weight_sum <= 0.0 {
            item.base
        } else if growing {
            remaining.mul_add(weight(item) / weight_sum, item.base)
        } else {
            remaining.abs().mul_add(-(weight(item) / weight_sum), item.base)
        };
    }
}

/// Clamp unfrozen targets by min/max and freeze by the sign of the total violation.
///
/// Returns the total violation.
fn clamp_and_freeze(items: &[FlexFactors], states: &mut [Working]) -> f32 {
    let mut violations = Vec::with_capacity(items.len());
    for (item, state) in items.iter().zip(states.iter_mut()) {
        if state.frozen {
            violations.push(0.0f32);
            continue;
        }
        let clamped = item.clamp(state.target);
        violations.push(clamped - state.target);
        state.target = clamped;
    }
    let total_violation: f32 = violations.iter().sum();
    for (state, violation) in states.iter_mut().zip(&violations) {
        if state.frozen {
            continue;
        }
        state.frozen = if total_violation == 0.0 {
            true
        } else if total_violation > 0.0 {
            *violation > 0.0
        } else {
            *violation < 0.0
        };
    }
    total_violation
}

/// Flex factors of one item, read from its style and the basis step's cache.
fn item_factors(item: &FlexItem<'_>, main_axis: PhysicalAxis) -> FlexFactors {
    let style = item.style();
    FlexFactors {
        base: item.flex_base_size.unwrap_or(0.0),
        hypothetical: cached_or(item, CachedDimension::HypotheticalMainSize, 0.0),
        grow: style.flex_grow(),
        shrink: style.flex_shrink(),
        min: cached_or(item, CachedDimension::MinMainSize, 0.0),
        max: cached_or(item, CachedDimension::MaxMainSize, f32::INFINITY),
        margins: margin_sum(item, main_axis),
    }
}

#[inline]
fn cached_or(item: &FlexItem<'_>, key: CachedDimension, fallback: f32) -> f32 {
    item.cache
        .get(key)
        .map_or(fallback, |value| value.unwrap_or(fallback))
}

/// Distributes each line's free space and records every item's target main size.
#[derive(Copy, Clone, Debug, Default)]
pub struct ResolveFlexibleLengthsStep;

impl FlexibleBoxStep for ResolveFlexibleLengthsStep {
    fn name(&self) -> &'static str {
        "resolve-flexible-lengths"
    }

    fn layout(&self, context: &mut FlexibleBoxLayoutContext<'_, '_>) {
        let main_axis = context.axes.main;
        let main_size = context.main_size().unwrap_or(0.0);
        let main_gap = context.main_gap();
        for line in &context.lines {
            let factors: Vec<FlexFactors> = line
                .items
                .iter()
                .map(|id| item_factors(&context.arena[*id], main_axis))
                .collect();
            let available =
                main_size - FlexibleBoxLayoutContext::gaps_total(main_gap, line.items.len());
            let targets = resolve_flexible_lengths(&factors, available);
            for (id, target) in line.items.iter().zip(targets) {
                context.arena[*id].target_main_size = target;
            }
            debug!(
                target: "css::flexbox::flexible_lengths",
                "[FLEX] container={} line_items={} available={:.3}",
                context.container.index(),
                line.items.len(),
                available
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: &[f32], expected: &[f32]) {
        assert_eq!(actual.len(), expected.len());
        for (got, want) in actual.iter().zip(expected) {
            assert!((got - want).abs() < 0.01, "got {actual:?}, expected {expected:?}");
        }
    }

    #[test]
    /// # Panics
    /// Panics if items that cannot flex move away from their hypothetical size.
    fn inflexible_items_keep_hypothetical_size() {
        let items = [FlexFactors::fixed(50.0), FlexFactors::fixed(70.0)];
        assert_close(&resolve_flexible_lengths(&items, 300.0), &[50.0, 70.0]);
        assert_close(&resolve_flexible_lengths(&items, 10.0), &[50.0, 70.0]);
    }

    #[test]
    /// # Panics
    /// Panics if a factor sum below one hands out the whole free space.
    fn fractional_grow_takes_a_share() {
        let items = [FlexFactors::fixed(0.0).with_grow(0.5)];
        assert_close(&resolve_flexible_lengths(&items, 100.0), &[50.0]);
    }

    #[test]
    /// # Panics
    /// Panics if a max violation is not frozen and its excess redistributed.
    fn max_violation_redistributes() {
        let items = [
            FlexFactors::fixed(0.0).with_grow(1.0).with_bounds(0.0, 20.0),
            FlexFactors::fixed(0.0).with_grow(1.0),
        ];
        assert_close(&resolve_flexible_lengths(&items, 100.0), &[20.0, 80.0]);
    }

    #[test]
    /// # Panics
    /// Panics if shrinking is not weighted by base size or crosses zero.
    fn shrink_weighted_and_floored() {
        let items = [
            FlexFactors::fixed(100.0).with_shrink(1.0),
            FlexFactors::fixed(300.0).with_shrink(1.0),
        ];
        assert_close(&resolve_flexible_lengths(&items, 200.0), &[50.0, 150.0]);
        let with_margins = [FlexFactors::fixed(100.0).with_shrink(1.0).with_margins(20.0)];
        assert_close(&resolve_flexible_lengths(&with_margins, 0.0), &[0.0]);
    }
}
