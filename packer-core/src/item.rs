//! Candidate items competing for space in a container.

use std::cmp::Ordering;

use thiserror::Error;

/// A single candidate item.
///
/// Output identity is [`Item::index`], never the item's position in a
/// collection. Two items are equal when index, weight and cost all match.
///
/// # Examples
///
/// ```
/// use packer_core::Item;
///
/// # fn main() -> Result<(), packer_core::ItemError> {
/// let item = Item::new(1, 53.38, 45.0)?;
/// assert_eq!(item.index(), 1);
/// assert!(item.ratio() < 1.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Item {
    index: u32,
    weight: f64,
    cost: f64,
}

/// Errors returned by [`Item::new`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ItemError {
    /// Item indices start at one.
    #[error("item index must be positive")]
    ZeroIndex,
    /// Weight was zero, negative or not finite.
    #[error("item {index} weight {weight} must be a positive finite number")]
    NonPositiveWeight {
        /// Index of the rejected item.
        index: u32,
        /// Weight as supplied.
        weight: f64,
    },
    /// Cost was negative or not finite.
    #[error("item {index} cost {cost} must be a non-negative finite number")]
    NegativeCost {
        /// Index of the rejected item.
        index: u32,
        /// Cost as supplied.
        cost: f64,
    },
}

impl Item {
    /// Validates and constructs an [`Item`].
    pub fn new(index: u32, weight: f64, cost: f64) -> Result<Self, ItemError> {
        if index == 0 {
            return Err(ItemError::ZeroIndex);
        }
        if !weight.is_finite() || weight <= 0.0 {
            return Err(ItemError::NonPositiveWeight { index, weight });
        }
        if !cost.is_finite() || cost < 0.0 {
            return Err(ItemError::NegativeCost { index, cost });
        }
        Ok(Self {
            index,
            weight,
            cost,
        })
    }

    /// Identifier reported in solver output.
    #[must_use]
    pub const fn index(&self) -> u32 {
        self.index
    }

    /// Item weight.
    #[must_use]
    pub const fn weight(&self) -> f64 {
        self.weight
    }

    /// Item cost, i.e. the value gained by packing it.
    #[must_use]
    pub const fn cost(&self) -> f64 {
        self.cost
    }

    /// Cost per unit of weight.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "value density is inherently a floating-point ratio"
    )]
    pub fn ratio(&self) -> f64 {
        self.cost / self.weight
    }

    /// Orders items by descending cost-to-weight ratio.
    ///
    /// Equal ratios compare as [`Ordering::Equal`], so a stable sort keeps
    /// their input order.
    #[must_use]
    pub fn cmp_by_ratio(&self, other: &Self) -> Ordering {
        other.ratio().total_cmp(&self.ratio())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn accepts_zero_cost() {
        let item = Item::new(3, 1.5, 0.0).expect("zero cost is allowed");
        assert_eq!(item.index(), 3);
        assert!(item.cost().abs() < f64::EPSILON);
    }

    #[rstest]
    fn rejects_zero_index() {
        assert_eq!(Item::new(0, 1.0, 1.0), Err(ItemError::ZeroIndex));
    }

    #[rstest]
    #[case(0.0)]
    #[case(-2.5)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn rejects_invalid_weight(#[case] weight: f64) {
        let result = Item::new(1, weight, 10.0);
        assert!(matches!(result, Err(ItemError::NonPositiveWeight { index: 1, .. })));
    }

    #[rstest]
    #[case(-0.01)]
    #[case(f64::NAN)]
    #[case(f64::NEG_INFINITY)]
    fn rejects_invalid_cost(#[case] cost: f64) {
        let result = Item::new(2, 1.0, cost);
        assert!(matches!(result, Err(ItemError::NegativeCost { index: 2, .. })));
    }

    #[rstest]
    fn higher_ratio_sorts_first() {
        let dense = Item::new(1, 10.0, 60.0).expect("valid item");
        let sparse = Item::new(2, 30.0, 120.0).expect("valid item");
        assert_eq!(dense.cmp_by_ratio(&sparse), Ordering::Less);
        assert_eq!(sparse.cmp_by_ratio(&dense), Ordering::Greater);
    }

    #[rstest]
    fn stable_sort_keeps_input_order_for_equal_ratios() {
        let mut items = vec![
            Item::new(1, 10.0, 20.0).expect("valid item"),
            Item::new(2, 5.0, 10.0).expect("valid item"),
            Item::new(3, 1.0, 5.0).expect("valid item"),
        ];
        items.sort_by(Item::cmp_by_ratio);
        let order: Vec<u32> = items.iter().map(Item::index).collect();
        assert_eq!(order, vec![3, 1, 2]);
    }

    #[rstest]
    fn equality_covers_every_field() {
        let item = Item::new(1, 10.0, 60.0).expect("valid item");
        assert_eq!(item, Item::new(1, 10.0, 60.0).expect("valid item"));
        assert_ne!(item, Item::new(1, 10.0, 61.0).expect("valid item"));
        assert_ne!(item, Item::new(2, 10.0, 60.0).expect("valid item"));
    }
}
