//! The `(items + 1) x (capacity + 1)` table of best scaled costs.
//!
//! Row `i` holds, for every weight budget, the best cost reachable using the
//! first `i` items. Row 0 and column 0 stay at zero.

use packer_core::Item;

use crate::scale::ScaleFactors;

/// An item converted into table units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct ScaledItem {
    pub(super) index: u32,
    pub(super) weight: usize,
    pub(super) cost: u64,
}

impl ScaledItem {
    pub(super) fn new(item: &Item, scale: &ScaleFactors) -> Self {
        // A weight that cannot be addressed never fits the table either.
        let weight = usize::try_from(scale.scale_weight(item.weight())).unwrap_or(usize::MAX);
        Self {
            index: item.index(),
            weight,
            cost: scale.scale_cost(item.cost()),
        }
    }
}

#[derive(Debug)]
pub(super) struct Table {
    rows: Vec<Vec<u64>>,
}

impl Table {
    pub(super) fn build(items: &[ScaledItem], capacity: usize) -> Self {
        let width = capacity.saturating_add(1);
        let mut rows = Vec::with_capacity(items.len().saturating_add(1));
        let mut previous = vec![0_u64; width];
        for item in items {
            let next = next_row(&previous, item);
            rows.push(std::mem::replace(&mut previous, next));
        }
        rows.push(previous);
        Self { rows }
    }

    pub(super) fn value(&self, row: usize, budget: usize) -> u64 {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(budget))
            .copied()
            .unwrap_or_default()
    }

    /// Best cost over all items at the full budget.
    pub(super) fn optimum(&self) -> u64 {
        self.rows
            .last()
            .and_then(|cells| cells.last())
            .copied()
            .unwrap_or_default()
    }

    /// Recover the chosen item indices, last row first.
    pub(super) fn backtrack(&self, items: &[ScaledItem], capacity: usize) -> Vec<u32> {
        let mut chosen = Vec::new();
        let mut budget = capacity;
        for (offset, item) in items.iter().enumerate().rev() {
            if budget == 0 {
                break;
            }
            let row = offset.saturating_add(1);
            if self.value(row, budget) != self.value(offset, budget) {
                chosen.push(item.index);
                budget = budget.saturating_sub(item.weight);
            }
        }
        chosen
    }
}

fn next_row(previous: &[u64], item: &ScaledItem) -> Vec<u64> {
    previous
        .iter()
        .enumerate()
        .map(|(budget, &without)| {
            if budget == 0 {
                return 0;
            }
            budget
                .checked_sub(item.weight)
                .and_then(|rest| previous.get(rest))
                .map_or(without, |&base| without.max(base.saturating_add(item.cost)))
        })
        .collect()
}
