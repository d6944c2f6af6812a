//! Pack command implementation for the packer CLI.

use std::io::{BufRead, BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, ValueEnum};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use packer_core::{ProblemInstance, Selection, Solver, ValidationLimits};
use packer_solver_dp::{DEFAULT_MAX_TABLE_CELLS, DpSolver, DpSolverConfig, ScaleFactors};
use serde::{Deserialize, Serialize};

use crate::fs::{file_is_file, open_utf8_file};
use crate::parse::{ParseError, parsed_lines};
use crate::{
    ARG_COST_SCALE_FACTOR, ARG_INPUT, ARG_MAX_ITEM_COST, ARG_MAX_ITEM_COUNT, ARG_MAX_ITEM_WEIGHT,
    ARG_MAX_TABLE_CELLS, ARG_MAX_TOTAL_WEIGHT, ARG_ON_INVALID, ARG_OUTPUT_FORMAT,
    ARG_WEIGHT_SCALE_FACTOR, CliError, ENV_INPUT,
};

/// What to do with a line that fails to parse, validate or solve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InvalidLinePolicy {
    /// Stop at the first bad line and report it.
    #[default]
    Abort,
    /// Log a warning and print `-` for the bad line.
    Skip,
}

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// One line per problem: comma-joined indices, or `-` when empty.
    #[default]
    Text,
    /// One JSON object per problem.
    Json,
}

/// CLI arguments for the `pack` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Solve every problem in a text file and print the chosen \
                 item indices, one line per problem. Limits and scale \
                 factors can come from CLI flags, configuration files, or \
                 environment variables.",
    about = "Pack items for each problem in an input file"
)]
#[ortho_config(prefix = "PACKER")]
pub struct PackArgs {
    /// Path to the input file.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub input: Option<Utf8PathBuf>,
    /// Largest accepted capacity.
    #[arg(long = ARG_MAX_TOTAL_WEIGHT, value_name = "weight")]
    #[serde(default)]
    pub max_total_weight: Option<u32>,
    /// Largest accepted number of items per problem.
    #[arg(long = ARG_MAX_ITEM_COUNT, value_name = "count")]
    #[serde(default)]
    pub max_item_count: Option<u32>,
    /// Largest accepted weight for a single item.
    #[arg(long = ARG_MAX_ITEM_WEIGHT, value_name = "weight")]
    #[serde(default)]
    pub max_item_weight: Option<u32>,
    /// Largest accepted cost for a single item.
    #[arg(long = ARG_MAX_ITEM_COST, value_name = "cost")]
    #[serde(default)]
    pub max_item_cost: Option<u32>,
    /// Multiplier turning weights into integer table units.
    #[arg(long = ARG_WEIGHT_SCALE_FACTOR, value_name = "factor")]
    #[serde(default)]
    pub weight_scale_factor: Option<u32>,
    /// Multiplier turning costs into integer table units.
    #[arg(long = ARG_COST_SCALE_FACTOR, value_name = "factor")]
    #[serde(default)]
    pub cost_scale_factor: Option<u32>,
    /// Ceiling on DP table cells per problem.
    #[arg(long = ARG_MAX_TABLE_CELLS, value_name = "cells")]
    #[serde(default)]
    pub max_table_cells: Option<u64>,
    /// Policy for lines that fail to parse, validate or solve.
    #[arg(long = ARG_ON_INVALID, value_enum)]
    #[serde(default)]
    pub on_invalid: Option<InvalidLinePolicy>,
    /// Output format.
    #[arg(long = ARG_OUTPUT_FORMAT, value_enum)]
    #[serde(default)]
    pub output_format: Option<OutputFormat>,
}

impl PackArgs {
    pub(crate) fn into_config(self) -> Result<PackConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PackConfig::try_from(merged)
    }
}

/// Resolved `pack` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackConfig {
    /// Path to the input file.
    pub input: Utf8PathBuf,
    /// Limits every parsed problem must respect.
    pub limits: ValidationLimits,
    /// Scale factors and table ceiling for the DP solver.
    pub solver: DpSolverConfig,
    /// Policy for bad lines.
    pub on_invalid: InvalidLinePolicy,
    /// Output format.
    pub output_format: OutputFormat,
}

impl PackConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.input, ARG_INPUT)
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<PackArgs> for PackConfig {
    type Error = CliError;

    fn try_from(args: PackArgs) -> Result<Self, Self::Error> {
        let input = args.input.ok_or(CliError::MissingArgument {
            field: ARG_INPUT,
            env: ENV_INPUT,
        })?;

        let defaults = ValidationLimits::default();
        let max_item_count = positive(
            args.max_item_count,
            u32::try_from(defaults.max_item_count).unwrap_or(u32::MAX),
            ARG_MAX_ITEM_COUNT,
        )?;
        let limits = ValidationLimits {
            max_total_weight: positive(
                args.max_total_weight,
                defaults.max_total_weight,
                ARG_MAX_TOTAL_WEIGHT,
            )?,
            max_item_count: usize::try_from(max_item_count).map_err(|_| {
                CliError::InvalidLimit {
                    field: ARG_MAX_ITEM_COUNT,
                }
            })?,
            max_item_weight: positive(
                args.max_item_weight,
                defaults.max_item_weight,
                ARG_MAX_ITEM_WEIGHT,
            )?,
            max_item_cost: positive(
                args.max_item_cost,
                defaults.max_item_cost,
                ARG_MAX_ITEM_COST,
            )?,
        };

        let default_scale = ScaleFactors::default();
        let scale = ScaleFactors::new(
            args.weight_scale_factor
                .unwrap_or(default_scale.weight_factor()),
            args.cost_scale_factor
                .unwrap_or(default_scale.cost_factor()),
        )?;
        let solver = DpSolverConfig {
            scale,
            max_table_cells: positive(
                args.max_table_cells,
                DEFAULT_MAX_TABLE_CELLS,
                ARG_MAX_TABLE_CELLS,
            )?,
        };

        Ok(Self {
            input,
            limits,
            solver,
            on_invalid: args.on_invalid.unwrap_or_default(),
            output_format: args.output_format.unwrap_or_default(),
        })
    }
}

fn positive<T>(value: Option<T>, default: T, field: &'static str) -> Result<T, CliError>
where
    T: Copy + Default + PartialEq,
{
    let resolved = value.unwrap_or(default);
    if resolved == T::default() {
        Err(CliError::InvalidLimit { field })
    } else {
        Ok(resolved)
    }
}

/// Result of packing one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// The line solved to this selection.
    Packed(Selection),
    /// The line was rejected and skipped, with the reason.
    Skipped(String),
}

/// One input line's outcome together with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedLine {
    /// 1-based input line number.
    pub line: usize,
    /// What happened to the line.
    pub outcome: LineOutcome,
}

#[derive(Debug, Serialize)]
struct JsonLine<'a> {
    line: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    selection: Option<&'a Selection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    skipped: Option<&'a str>,
}

/// Builds a solver instance for the current pack invocation.
pub trait PackSolverBuilder {
    /// Construct the solver used for every line of the batch.
    fn build(&self, config: &PackConfig) -> Box<dyn Solver>;
}

/// Builds a [`DpSolver`] from the resolved configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPackSolverBuilder;

impl PackSolverBuilder for DefaultPackSolverBuilder {
    fn build(&self, config: &PackConfig) -> Box<dyn Solver> {
        Box::new(DpSolver::with_config(config.solver))
    }
}

pub(crate) fn run_pack(args: PackArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_pack_with(args, &DefaultPackSolverBuilder, &mut stdout)
}

/// Resolve configuration, pack the input file and write the results.
///
/// Nothing is written when the batch aborts on a bad line.
pub fn run_pack_with(
    args: PackArgs,
    builder: &dyn PackSolverBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_pack_config(args)?;
    let file = open_utf8_file(&config.input).map_err(|source| CliError::OpenInput {
        path: config.input.clone(),
        source,
    })?;
    let solver = builder.build(&config);

    log::info!("packing problems from {}", config.input);
    let packed = pack_reader(
        BufReader::new(file),
        &config.limits,
        config.on_invalid,
        solver.as_ref(),
    )?;
    let skipped = packed
        .iter()
        .filter(|entry| matches!(entry.outcome, LineOutcome::Skipped(_)))
        .count();
    log::info!("packed {} problems ({skipped} skipped)", packed.len());

    write_packed(writer, &packed, config.output_format)
}

fn resolve_pack_config(args: PackArgs) -> Result<PackConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Parse, validate and solve every non-blank line of `reader`.
///
/// Under [`InvalidLinePolicy::Abort`] the first bad line ends the batch with
/// its error; under [`InvalidLinePolicy::Skip`] it becomes
/// [`LineOutcome::Skipped`]. Read failures always abort.
pub fn pack_reader<R: BufRead>(
    reader: R,
    limits: &ValidationLimits,
    policy: InvalidLinePolicy,
    solver: &dyn Solver,
) -> Result<Vec<PackedLine>, CliError> {
    let mut packed = Vec::new();
    for entry in parsed_lines(reader) {
        let (line, parsed) = entry.map_err(CliError::ReadInput)?;
        let outcome = match pack_line(line, parsed, limits, solver) {
            Ok(selection) => {
                log::debug!("line {line}: selected {:?}", selection.indices());
                LineOutcome::Packed(selection)
            }
            Err(err) if policy == InvalidLinePolicy::Skip => {
                log::warn!("skipping {err}");
                LineOutcome::Skipped(err.to_string())
            }
            Err(err) => return Err(err),
        };
        packed.push(PackedLine { line, outcome });
    }
    Ok(packed)
}

fn pack_line(
    line: usize,
    parsed: Result<ProblemInstance, ParseError>,
    limits: &ValidationLimits,
    solver: &dyn Solver,
) -> Result<Selection, CliError> {
    let instance = parsed.map_err(|source| CliError::Parse { line, source })?;
    limits
        .validate(&instance)
        .map_err(|source| CliError::Validate { line, source })?;
    solver
        .solve(&instance)
        .map_err(|source| CliError::Solve { line, source })
}

/// Render a selection as comma-joined indices, or `-` when empty.
#[must_use]
pub fn render_selection(selection: &Selection) -> String {
    if selection.is_empty() {
        return "-".to_owned();
    }
    selection
        .indices()
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

fn render_text(outcome: &LineOutcome) -> String {
    match outcome {
        LineOutcome::Packed(selection) => render_selection(selection),
        LineOutcome::Skipped(_) => "-".to_owned(),
    }
}

fn render_json(entry: &PackedLine) -> Result<String, CliError> {
    let record = match &entry.outcome {
        LineOutcome::Packed(selection) => JsonLine {
            line: entry.line,
            selection: Some(selection),
            skipped: None,
        },
        LineOutcome::Skipped(reason) => JsonLine {
            line: entry.line,
            selection: None,
            skipped: Some(reason.as_str()),
        },
    };
    serde_json::to_string(&record).map_err(CliError::SerializeOutput)
}

fn write_packed(
    writer: &mut dyn Write,
    packed: &[PackedLine],
    format: OutputFormat,
) -> Result<(), CliError> {
    for entry in packed {
        let rendered = match format {
            OutputFormat::Text => render_text(&entry.outcome),
            OutputFormat::Json => render_json(entry)?,
        };
        writeln!(writer, "{rendered}").map_err(CliError::WriteOutput)?;
    }
    writer.flush().map_err(CliError::WriteOutput)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<PackConfig, CliError> {
    let merged = PackArgs::merge_from_layers(layers).map_err(CliError::from)?;
    PackConfig::try_from(merged)
}
