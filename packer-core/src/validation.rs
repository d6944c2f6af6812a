//! Bound checks applied before any solving work.
//!
//! Validation is cheap relative to building a solver table, so every instance
//! passes through [`ValidationLimits::validate`] first. Checks run in a fixed
//! order and the first violation wins:
//!
//! 1. item count
//! 2. capacity
//! 3. lightest item against capacity (only with more than one item)
//! 4. per-item weight, then per-item cost, in input order

use thiserror::Error;

use crate::ProblemInstance;

/// Configured ceilings for problem instances.
///
/// # Examples
///
/// ```
/// use packer_core::{Item, ProblemInstance, ValidationError, ValidationLimits};
///
/// # fn main() -> Result<(), packer_core::ItemError> {
/// let limits = ValidationLimits::default();
/// let instance = ProblemInstance::new(101, vec![Item::new(1, 1.0, 1.0)?]);
/// assert!(matches!(
///     limits.validate(&instance),
///     Err(ValidationError::CapacityTooLarge { capacity: 101, max: 100 })
/// ));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationLimits {
    /// Largest accepted container capacity.
    pub max_total_weight: u32,
    /// Largest accepted number of items per instance.
    pub max_item_count: usize,
    /// Largest accepted weight for a single item.
    pub max_item_weight: u32,
    /// Largest accepted cost for a single item.
    pub max_item_cost: u32,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            max_total_weight: 100,
            max_item_count: 15,
            max_item_weight: 100,
            max_item_cost: 100,
        }
    }
}

/// Errors returned by [`ValidationLimits::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// More items than allowed.
    #[error("instance has {count} items but at most {max} are allowed")]
    TooManyItems {
        /// Items in the instance.
        count: usize,
        /// Configured maximum.
        max: usize,
    },
    /// Capacity above the configured maximum.
    #[error("capacity {capacity} exceeds the maximum of {max}")]
    CapacityTooLarge {
        /// Capacity of the instance.
        capacity: u32,
        /// Configured maximum.
        max: u32,
    },
    /// Even the lightest item cannot fit.
    #[error("lightest item {index} weighs {weight}, more than the capacity of {capacity}")]
    MinimumWeightExceedsCapacity {
        /// Index of the lightest item.
        index: u32,
        /// Its weight.
        weight: f64,
        /// Capacity of the instance.
        capacity: u32,
    },
    /// An item is heavier than allowed.
    #[error("item {index} weighs {weight}, more than the maximum of {max}")]
    ItemWeightTooLarge {
        /// Index of the offending item.
        index: u32,
        /// Its weight.
        weight: f64,
        /// Configured maximum.
        max: u32,
    },
    /// An item costs more than allowed.
    #[error("item {index} costs {cost}, more than the maximum of {max}")]
    ItemCostTooLarge {
        /// Index of the offending item.
        index: u32,
        /// Its cost.
        cost: f64,
        /// Configured maximum.
        max: u32,
    },
}

impl ValidationLimits {
    /// Check an instance against these limits.
    ///
    /// Pure and stateless; see the module documentation for the order in
    /// which checks are applied.
    pub fn validate(&self, instance: &ProblemInstance) -> Result<(), ValidationError> {
        self.check_item_count(instance)?;
        self.check_capacity(instance)?;
        Self::check_lightest_item(instance)?;
        self.check_items(instance)
    }

    const fn check_item_count(&self, instance: &ProblemInstance) -> Result<(), ValidationError> {
        let count = instance.len();
        if count > self.max_item_count {
            return Err(ValidationError::TooManyItems {
                count,
                max: self.max_item_count,
            });
        }
        Ok(())
    }

    const fn check_capacity(&self, instance: &ProblemInstance) -> Result<(), ValidationError> {
        let capacity = instance.capacity();
        if capacity > self.max_total_weight {
            return Err(ValidationError::CapacityTooLarge {
                capacity,
                max: self.max_total_weight,
            });
        }
        Ok(())
    }

    // A lone item is exempt: the solver never packs single-item instances.
    fn check_lightest_item(instance: &ProblemInstance) -> Result<(), ValidationError> {
        if instance.len() < 2 {
            return Ok(());
        }
        let capacity = instance.capacity();
        match instance.lightest_item() {
            Some(item) if item.weight() > f64::from(capacity) => {
                Err(ValidationError::MinimumWeightExceedsCapacity {
                    index: item.index(),
                    weight: item.weight(),
                    capacity,
                })
            }
            _ => Ok(()),
        }
    }

    fn check_items(&self, instance: &ProblemInstance) -> Result<(), ValidationError> {
        let max_weight = f64::from(self.max_item_weight);
        let max_cost = f64::from(self.max_item_cost);
        for item in instance.items() {
            if item.weight() > max_weight {
                return Err(ValidationError::ItemWeightTooLarge {
                    index: item.index(),
                    weight: item.weight(),
                    max: self.max_item_weight,
                });
            }
            if item.cost() > max_cost {
                return Err(ValidationError::ItemCostTooLarge {
                    index: item.index(),
                    cost: item.cost(),
                    max: self.max_item_cost,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Item;
    use rstest::{fixture, rstest};

    fn items(specs: &[(u32, f64, f64)]) -> Vec<Item> {
        specs
            .iter()
            .map(|&(index, weight, cost)| Item::new(index, weight, cost).expect("valid item"))
            .collect()
    }

    #[fixture]
    fn limits() -> ValidationLimits {
        ValidationLimits::default()
    }

    #[rstest]
    fn accepts_instance_within_limits(limits: ValidationLimits) {
        let instance = ProblemInstance::new(
            50,
            items(&[(1, 10.0, 60.0), (2, 20.0, 100.0), (3, 30.0, 100.0)]),
        );
        assert_eq!(limits.validate(&instance), Ok(()));
    }

    #[rstest]
    fn rejects_too_many_items(limits: ValidationLimits) {
        let specs: Vec<(u32, f64, f64)> = (1..=16).map(|i| (i, 10.0, 60.0)).collect();
        let instance = ProblemInstance::new(50, items(&specs));
        assert_eq!(
            limits.validate(&instance),
            Err(ValidationError::TooManyItems { count: 16, max: 15 })
        );
    }

    #[rstest]
    fn accepts_exactly_max_items(limits: ValidationLimits) {
        let specs: Vec<(u32, f64, f64)> = (1..=15).map(|i| (i, 10.0, 60.0)).collect();
        let instance = ProblemInstance::new(50, items(&specs));
        assert_eq!(limits.validate(&instance), Ok(()));
    }

    #[rstest]
    fn rejects_capacity_above_maximum(limits: ValidationLimits) {
        let instance = ProblemInstance::new(101, items(&[(1, 10.0, 60.0), (2, 20.0, 60.0)]));
        assert_eq!(
            limits.validate(&instance),
            Err(ValidationError::CapacityTooLarge {
                capacity: 101,
                max: 100
            })
        );
    }

    #[rstest]
    fn rejects_when_lightest_item_exceeds_capacity(limits: ValidationLimits) {
        let instance = ProblemInstance::new(
            9,
            items(&[(1, 10.0, 60.0), (2, 20.0, 100.0), (3, 30.0, 100.0)]),
        );
        assert!(matches!(
            limits.validate(&instance),
            Err(ValidationError::MinimumWeightExceedsCapacity {
                index: 1,
                capacity: 9,
                ..
            })
        ));
    }

    #[rstest]
    fn single_item_is_exempt_from_lightest_check(limits: ValidationLimits) {
        let instance = ProblemInstance::new(8, items(&[(1, 15.3, 34.0)]));
        assert_eq!(limits.validate(&instance), Ok(()));
    }

    #[rstest]
    fn rejects_heavy_item(limits: ValidationLimits) {
        let instance = ProblemInstance::new(100, items(&[(1, 10.0, 60.0), (2, 101.0, 60.0)]));
        assert!(matches!(
            limits.validate(&instance),
            Err(ValidationError::ItemWeightTooLarge {
                index: 2,
                max: 100,
                ..
            })
        ));
    }

    #[rstest]
    fn rejects_expensive_item(limits: ValidationLimits) {
        let instance = ProblemInstance::new(100, items(&[(1, 50.0, 101.0), (2, 10.0, 60.0)]));
        assert!(matches!(
            limits.validate(&instance),
            Err(ValidationError::ItemCostTooLarge {
                index: 1,
                max: 100,
                ..
            })
        ));
    }

    #[rstest]
    #[case::count_before_capacity(
        ValidationLimits { max_item_count: 1, ..ValidationLimits::default() },
        200,
        "TooManyItems"
    )]
    #[case::capacity_before_lightest(
        ValidationLimits { max_total_weight: 1, ..ValidationLimits::default() },
        2,
        "CapacityTooLarge"
    )]
    #[case::lightest_before_item_bounds(ValidationLimits::default(), 1, "MinimumWeightExceedsCapacity")]
    fn reports_first_violation_in_order(
        #[case] limits: ValidationLimits,
        #[case] capacity: u32,
        #[case] expected: &str,
    ) {
        // Every item also breaks the per-item weight and cost ceilings.
        let instance = ProblemInstance::new(capacity, items(&[(1, 150.0, 150.0), (2, 120.0, 150.0)]));
        let err = limits.validate(&instance).expect_err("instance is invalid");
        let variant = format!("{err:?}");
        assert!(
            variant.starts_with(expected),
            "expected {expected}, found {variant}"
        );
    }

    #[rstest]
    fn weight_is_checked_before_cost_per_item(limits: ValidationLimits) {
        let instance = ProblemInstance::new(100, items(&[(1, 150.0, 150.0), (2, 10.0, 10.0)]));
        assert!(matches!(
            limits.validate(&instance),
            Err(ValidationError::ItemWeightTooLarge { index: 1, .. })
        ));
    }

    #[rstest]
    fn empty_instance_passes_validation(limits: ValidationLimits) {
        let instance = ProblemInstance::new(10, Vec::new());
        assert_eq!(limits.validate(&instance), Ok(()));
    }
}
