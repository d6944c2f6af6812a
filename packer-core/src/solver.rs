//! The solver seam and the selection it returns.

use thiserror::Error;

use crate::ProblemInstance;

/// Indices of the items chosen for the container.
///
/// Indices are held in ascending order. An empty selection means nothing was
/// packed.
///
/// # Examples
/// ```rust
/// use packer_core::Selection;
///
/// let selection = Selection::from_indices(vec![3, 2]);
/// assert_eq!(selection.indices(), &[2, 3]);
/// assert!(Selection::none().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Selection {
    indices: Vec<u32>,
}

impl Selection {
    /// The empty selection.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            indices: Vec::new(),
        }
    }

    /// Build a selection from item indices in any order.
    #[must_use]
    pub fn from_indices(mut indices: Vec<u32>) -> Self {
        indices.sort_unstable();
        Self { indices }
    }

    /// Chosen indices in ascending order.
    #[must_use]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Whether nothing was chosen.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Number of chosen items.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.indices.len()
    }
}

/// Errors returned by [`Solver::solve`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The instance has no items to choose from.
    ///
    /// Parsers and validators should keep empty instances away from the
    /// solver; this guards direct library callers.
    #[error("problem instance has no items")]
    DegenerateInput,
    /// The optimisation table would exceed the configured ceiling.
    #[error("solver table of {cells} cells exceeds the limit of {limit}")]
    TableTooLarge {
        /// Cells the instance would need.
        cells: u128,
        /// Configured ceiling.
        limit: u64,
    },
}

/// Choose the items to pack for a validated [`ProblemInstance`].
///
/// Implementations assume the instance already passed
/// [`ValidationLimits::validate`](crate::ValidationLimits::validate) and do
/// not re-check bounds. They must hold no per-call state, so the same solver
/// may be shared across threads.
pub trait Solver: Send + Sync {
    /// Solve an instance, producing the chosen indices or an error.
    fn solve(&self, instance: &ProblemInstance) -> Result<Selection, SolveError>;
}
