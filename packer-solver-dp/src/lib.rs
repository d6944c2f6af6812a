//! Scaled-integer dynamic programming solver for packer.
//!
//! This crate provides [`DpSolver`], the default implementation of the
//! [`Solver`](packer_core::Solver) trait. Fractional weights and costs are
//! multiplied by fixed integer [`ScaleFactors`] and rounded so the classic
//! 0/1 knapsack table can be indexed by integer weight budgets.
//!
//! Items are ordered by descending cost-to-weight ratio before the table is
//! built. Combined with backtracking that only records an item when it
//! strictly improves on the row above, this makes the solver prefer subsets
//! built from denser items whenever several subsets reach the same cost.
//!
//! Instances holding a single item are never packed; see
//! [`DpSolver`] for details.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod scale;
mod solver;

pub use scale::{ScaleFactorError, ScaleFactors};
pub use solver::{DEFAULT_MAX_TABLE_CELLS, DpSolver, DpSolverConfig};
