//! Core domain types for the packer engine.
//!
//! An [`Item`] carries an index, a weight and a cost. A [`ProblemInstance`]
//! pairs a weight capacity with the items competing for it. Instances are
//! checked against configured ceilings by [`ValidationLimits`] and then handed
//! to a [`Solver`], which picks the subset of items to pack.
//!
//! Constructors return `Result` to surface invalid input early; nothing is
//! mutated once built.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod instance;
mod item;
mod solver;
mod validation;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use instance::ProblemInstance;
pub use item::{Item, ItemError};
pub use solver::{Selection, SolveError, Solver};
pub use validation::{ValidationError, ValidationLimits};
