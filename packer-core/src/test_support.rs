//! Test-only builders and a canned `Solver` used by unit and behaviour tests.

use crate::{Item, ProblemInstance, Selection, SolveError, Solver};

/// Build an [`Item`] from literal test values.
///
/// # Panics
///
/// Panics when the values would be rejected by [`Item::new`].
#[must_use]
#[expect(
    clippy::expect_used,
    reason = "test builders fail loudly on malformed fixtures"
)]
pub fn item(index: u32, weight: f64, cost: f64) -> Item {
    Item::new(index, weight, cost).expect("test item should be valid")
}

/// Build a [`ProblemInstance`] from `(index, weight, cost)` triples.
///
/// # Panics
///
/// Panics when any triple would be rejected by [`Item::new`].
#[must_use]
pub fn instance(capacity: u32, specs: &[(u32, f64, f64)]) -> ProblemInstance {
    let items = specs
        .iter()
        .map(|&(index, weight, cost)| item(index, weight, cost))
        .collect();
    ProblemInstance::new(capacity, items)
}

/// `Solver` returning the same outcome for every instance.
#[derive(Debug, Clone)]
pub struct FixedSolver {
    outcome: Result<Selection, SolveError>,
}

impl FixedSolver {
    /// Always select the given indices.
    #[must_use]
    pub fn selecting(indices: Vec<u32>) -> Self {
        Self {
            outcome: Ok(Selection::from_indices(indices)),
        }
    }

    /// Always fail with the given error.
    #[must_use]
    pub const fn failing(error: SolveError) -> Self {
        Self {
            outcome: Err(error),
        }
    }
}

impl Solver for FixedSolver {
    fn solve(&self, _instance: &ProblemInstance) -> Result<Selection, SolveError> {
        self.outcome.clone()
    }
}
