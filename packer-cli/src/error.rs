//! Error types emitted by the packer CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use packer_core::{SolveError, ValidationError};
use packer_solver_dp::ScaleFactorError;
use thiserror::Error;

use crate::parse::ParseError;

/// Errors emitted by the packer CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set <{field}> or {env})")]
    MissingArgument {
        /// Argument name as shown in `--help`.
        field: &'static str,
        /// Environment variable that can supply the value.
        env: &'static str,
    },
    /// A numeric limit resolved to zero.
    #[error("--{field} must be positive")]
    InvalidLimit {
        /// Flag naming the limit.
        field: &'static str,
    },
    /// A scale factor resolved to zero.
    #[error(transparent)]
    InvalidScaleFactor(#[from] ScaleFactorError),
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist or is not a file")]
    MissingSourceFile {
        /// Argument naming the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Argument naming the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Argument naming the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Opening the input file failed.
    #[error("failed to open input at {path:?}: {source}")]
    OpenInput {
        /// Input path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Reading a line of input failed.
    #[error("failed to read input: {0}")]
    ReadInput(#[source] std::io::Error),
    /// A line did not match the problem format.
    #[error("line {line}: {source}")]
    Parse {
        /// 1-based input line number.
        line: usize,
        /// Parser failure.
        #[source]
        source: ParseError,
    },
    /// A parsed instance broke a configured limit.
    #[error("line {line}: {source}")]
    Validate {
        /// 1-based input line number.
        line: usize,
        /// Violated limit.
        #[source]
        source: ValidationError,
    },
    /// The solver rejected an instance.
    #[error("line {line}: solver failed: {source}")]
    Solve {
        /// 1-based input line number.
        line: usize,
        /// Solver failure.
        #[source]
        source: SolveError,
    },
    /// Serializing a JSON output record failed.
    #[error("failed to serialize output: {0}")]
    SerializeOutput(#[source] serde_json::Error),
    /// Writing the output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
