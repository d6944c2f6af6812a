//! Facade crate for the packer knapsack engine.
//!
//! This crate re-exports the core domain types and exposes the dynamic
//! programming solver behind the `solver-dp` feature flag.

#![forbid(unsafe_code)]

pub use packer_core::{
    Item, ItemError, ProblemInstance, Selection, SolveError, Solver, ValidationError,
    ValidationLimits,
};

#[cfg(feature = "solver-dp")]
pub use packer_solver_dp::{
    DEFAULT_MAX_TABLE_CELLS, DpSolver, DpSolverConfig, ScaleFactorError, ScaleFactors,
};
