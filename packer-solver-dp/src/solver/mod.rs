//! `DpSolver` implementation over a scaled-integer knapsack table.
//!
//! Single-item instances always yield an empty selection.

use packer_core::{ProblemInstance, Selection, SolveError, Solver};

use crate::scale::ScaleFactors;

use self::table::{ScaledItem, Table};

mod table;

/// Default ceiling on the number of table cells a single solve may allocate.
pub const DEFAULT_MAX_TABLE_CELLS: u64 = 16_777_216;

/// Configuration for [`DpSolver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DpSolverConfig {
    /// Multipliers converting real weights and costs into table units.
    pub scale: ScaleFactors,
    /// Upper bound on `(items + 1) * (scaled capacity + 1)`.
    pub max_table_cells: u64,
}

impl Default for DpSolverConfig {
    fn default() -> Self {
        Self {
            scale: ScaleFactors::default(),
            max_table_cells: DEFAULT_MAX_TABLE_CELLS,
        }
    }
}

/// Exact 0/1 knapsack solver using dynamic programming.
///
/// Items are sorted by descending cost-to-weight ratio (stable, so ties keep
/// input order) before the table is filled. Backtracking walks the rows from
/// the last item upwards and records an item only when its row improves on
/// the row above, so among equal-cost subsets the one built from earlier
/// (denser) items wins.
///
/// An instance with exactly one item returns [`Selection::none`] even when
/// that item fits. An empty instance is rejected with
/// [`SolveError::DegenerateInput`].
///
/// # Examples
///
/// ```
/// use packer_core::{Item, ProblemInstance, Solver};
/// use packer_solver_dp::DpSolver;
///
/// let items = vec![
///     Item::new(1, 15.3, 34.0)?,
///     Item::new(2, 10.0, 60.0)?,
/// ];
/// let instance = ProblemInstance::new(20, items);
/// let selection = DpSolver::new().solve(&instance)?;
/// assert_eq!(selection.indices(), &[2]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct DpSolver {
    config: DpSolverConfig,
}

impl DpSolver {
    /// Construct a solver using default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a solver with explicit configuration.
    #[must_use]
    pub const fn with_config(config: DpSolverConfig) -> Self {
        Self { config }
    }

    /// Configuration in effect for this solver.
    #[must_use]
    pub const fn config(&self) -> &DpSolverConfig {
        &self.config
    }

    fn table_width(&self, instance: &ProblemInstance) -> Result<usize, SolveError> {
        let scaled_capacity = self.config.scale.scale_capacity(instance.capacity());
        let rows = u128::try_from(instance.len())
            .unwrap_or(u128::MAX)
            .saturating_add(1);
        let cells = rows.saturating_mul(u128::from(scaled_capacity).saturating_add(1));
        let too_large = SolveError::TableTooLarge {
            cells,
            limit: self.config.max_table_cells,
        };
        if cells > u128::from(self.config.max_table_cells) {
            return Err(too_large);
        }
        usize::try_from(scaled_capacity).map_err(|_| too_large)
    }
}

impl Solver for DpSolver {
    fn solve(&self, instance: &ProblemInstance) -> Result<Selection, SolveError> {
        if instance.is_empty() {
            return Err(SolveError::DegenerateInput);
        }
        if instance.len() == 1 {
            log::trace!("single-item instance; returning an empty selection");
            return Ok(Selection::none());
        }

        let capacity = self.table_width(instance)?;
        let scale = &self.config.scale;
        let items: Vec<ScaledItem> = instance
            .sorted_by_ratio()
            .iter()
            .map(|item| ScaledItem::new(item, scale))
            .collect();

        log::debug!(
            "filling knapsack table with {} rows and {} columns",
            items.len().saturating_add(1),
            capacity.saturating_add(1)
        );
        let table = Table::build(&items, capacity);
        let chosen = table.backtrack(&items, capacity);
        log::trace!(
            "best scaled cost {} reached by items {chosen:?}",
            table.optimum()
        );

        Ok(Selection::from_indices(chosen))
    }
}
