//! A single packing problem: one capacity, many candidate items.

use crate::Item;

/// One line of work for the solver.
///
/// The instance owns its items; validators and solvers only borrow them.
/// An empty item list is representable so that solvers can report it as
/// degenerate input rather than indexing into nothing.
///
/// # Examples
///
/// ```
/// use packer_core::{Item, ProblemInstance};
///
/// # fn main() -> Result<(), packer_core::ItemError> {
/// let items = vec![Item::new(1, 10.0, 60.0)?, Item::new(2, 20.0, 100.0)?];
/// let instance = ProblemInstance::new(50, items);
/// assert_eq!(instance.capacity(), 50);
/// assert_eq!(instance.len(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ProblemInstance {
    capacity: u32,
    items: Vec<Item>,
}

impl ProblemInstance {
    /// Construct an instance from a capacity and its candidate items.
    #[must_use]
    pub const fn new(capacity: u32, items: Vec<Item>) -> Self {
        Self { capacity, items }
    }

    /// Maximum total weight the container accepts.
    #[must_use]
    pub const fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Candidate items in input order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of candidate items.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the instance has no candidate items.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The lightest item; the earliest one wins when weights tie.
    #[must_use]
    pub fn lightest_item(&self) -> Option<&Item> {
        self.items
            .iter()
            .min_by(|lhs, rhs| lhs.weight().total_cmp(&rhs.weight()))
    }

    /// A copy of the items ordered by descending cost-to-weight ratio.
    ///
    /// The sort is stable: items with equal ratios keep their input order.
    /// The instance itself is left untouched.
    #[must_use]
    pub fn sorted_by_ratio(&self) -> Vec<Item> {
        let mut sorted = self.items.clone();
        sorted.sort_by(Item::cmp_by_ratio);
        sorted
    }
}
