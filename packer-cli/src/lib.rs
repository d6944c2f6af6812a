//! Command-line driver for the packer knapsack engine.
//!
//! `packer pack <input>` reads one problem per line, validates it against the
//! configured limits, solves it with the DP solver and prints the chosen item
//! indices in input order.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod fs;
pub mod pack;
pub mod parse;

pub use error::CliError;

use pack::PackArgs;

pub(crate) const ARG_INPUT: &str = "input";
pub(crate) const ARG_MAX_TOTAL_WEIGHT: &str = "max-total-weight";
pub(crate) const ARG_MAX_ITEM_COUNT: &str = "max-item-count";
pub(crate) const ARG_MAX_ITEM_WEIGHT: &str = "max-item-weight";
pub(crate) const ARG_MAX_ITEM_COST: &str = "max-item-cost";
pub(crate) const ARG_WEIGHT_SCALE_FACTOR: &str = "weight-scale-factor";
pub(crate) const ARG_COST_SCALE_FACTOR: &str = "cost-scale-factor";
pub(crate) const ARG_MAX_TABLE_CELLS: &str = "max-table-cells";
pub(crate) const ARG_ON_INVALID: &str = "on-invalid";
pub(crate) const ARG_OUTPUT_FORMAT: &str = "output-format";
pub(crate) const ENV_INPUT: &str = "PACKER_CMDS_PACK_INPUT";

/// Run the packer CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Pack(args) => pack::run_pack(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "packer",
    about = "Choose the most valuable items that fit each package",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Solve every problem in an input file.
    Pack(PackArgs),
}

#[cfg(test)]
mod tests;
