//! Focused unit tests covering batch packing and output rendering.

use super::helpers::{EXAMPLE_INPUT, EXAMPLE_OUTPUT, temp_workspace, write_utf8};
use super::*;
use crate::pack::{
    DefaultPackSolverBuilder, InvalidLinePolicy, LineOutcome, PackedLine, pack_reader,
    render_selection, run_pack_with,
};
use crate::parse::ParseError;
use packer_core::test_support::FixedSolver;
use packer_core::{Selection, SolveError, ValidationError, ValidationLimits};
use packer_solver_dp::DpSolver;
use rstest::rstest;

fn pack_text(input: &str, policy: InvalidLinePolicy) -> Result<Vec<PackedLine>, CliError> {
    pack_reader(
        input.as_bytes(),
        &ValidationLimits::default(),
        policy,
        &DpSolver::new(),
    )
}

#[rstest]
#[case::empty(Selection::none(), "-")]
#[case::single(Selection::from_indices(vec![4]), "4")]
#[case::several(Selection::from_indices(vec![9, 8]), "8,9")]
fn renders_selections(#[case] selection: Selection, #[case] expected: &str) {
    assert_eq!(render_selection(&selection), expected);
}

#[rstest]
fn example_batch_matches_known_answers() {
    let packed = pack_text(EXAMPLE_INPUT, InvalidLinePolicy::Abort).expect("batch should pack");
    let rendered: Vec<String> = packed
        .iter()
        .map(|entry| match &entry.outcome {
            LineOutcome::Packed(selection) => render_selection(selection),
            LineOutcome::Skipped(reason) => panic!("unexpected skip: {reason}"),
        })
        .collect();
    assert_eq!(rendered, vec!["4", "-", "2,7", "8,9"]);
    let lines: Vec<usize> = packed.iter().map(|entry| entry.line).collect();
    assert_eq!(lines, vec![1, 2, 3, 4]);
}

#[rstest]
fn abort_policy_stops_at_parse_failure() {
    let input = "8 : (1,15.3,€34)\n8 : (1,15.3,34)\n";
    match pack_text(input, InvalidLinePolicy::Abort).expect_err("batch should abort") {
        CliError::Parse { line, source } => {
            assert_eq!(line, 2);
            assert!(matches!(source, ParseError::MissingCurrency { .. }));
        }
        other => panic!("expected Parse, found {other:?}"),
    }
}

#[rstest]
fn abort_policy_stops_at_validation_failure() {
    let input = "9 : (1,10.0,€60) (2,20.0,€100)\n";
    match pack_text(input, InvalidLinePolicy::Abort).expect_err("batch should abort") {
        CliError::Validate { line, source } => {
            assert_eq!(line, 1);
            assert!(matches!(
                source,
                ValidationError::MinimumWeightExceedsCapacity { .. }
            ));
        }
        other => panic!("expected Validate, found {other:?}"),
    }
}

#[rstest]
fn skip_policy_keeps_lines_aligned() {
    let input = "50 : (1,10.0,€60)\nbroken\n101 : (1,10.0,€60) (2,5.0,€10)\n50 : (1,10.0,€60) (2,20.0,€100)\n";
    let packed = pack_text(input, InvalidLinePolicy::Skip).expect("skip should not abort");
    assert_eq!(packed.len(), 4);
    assert!(matches!(
        packed.get(1).map(|entry| &entry.outcome),
        Some(LineOutcome::Skipped(_))
    ));
    assert!(matches!(
        packed.get(2).map(|entry| &entry.outcome),
        Some(LineOutcome::Skipped(_))
    ));
    assert_eq!(
        packed.get(3).map(|entry| &entry.outcome),
        Some(&LineOutcome::Packed(Selection::from_indices(vec![1, 2])))
    );
}

#[rstest]
fn solver_failures_carry_line_numbers() {
    let solver = FixedSolver::failing(SolveError::DegenerateInput);
    let result = pack_reader(
        "\n50 : (1,10.0,€60) (2,20.0,€100)\n".as_bytes(),
        &ValidationLimits::default(),
        InvalidLinePolicy::Abort,
        &solver,
    );
    match result.expect_err("solver failure should abort") {
        CliError::Solve { line, source } => {
            assert_eq!(line, 2);
            assert_eq!(source, SolveError::DegenerateInput);
        }
        other => panic!("expected Solve, found {other:?}"),
    }
}

#[rstest]
fn run_pack_writes_text_output() {
    let (_tmp, root) = temp_workspace();
    let input = root.join("input.txt");
    write_utf8(&input, EXAMPLE_INPUT.as_bytes());
    let args = PackArgs {
        input: Some(input),
        ..PackArgs::default()
    };

    let mut stdout = Vec::new();
    run_pack_with(args, &DefaultPackSolverBuilder, &mut stdout).expect("pack should succeed");
    assert_eq!(String::from_utf8(stdout).expect("utf-8 output"), EXAMPLE_OUTPUT);
}

#[rstest]
fn aborted_run_writes_nothing() {
    let (_tmp, root) = temp_workspace();
    let input = root.join("input.txt");
    write_utf8(&input, "8 : (1,15.3,€34)\nbroken\n".as_bytes());
    let args = PackArgs {
        input: Some(input),
        ..PackArgs::default()
    };

    let mut stdout = Vec::new();
    let err = run_pack_with(args, &DefaultPackSolverBuilder, &mut stdout)
        .expect_err("bad line should abort");
    assert!(matches!(err, CliError::Parse { line: 2, .. }));
    assert!(stdout.is_empty());
}

#[rstest]
fn outcomes_come_from_the_injected_solver() {
    let solver = FixedSolver::selecting(vec![3, 1]);
    let packed = pack_reader(
        "50 : (1,10.0,€60) (2,20.0,€100) (3,5.0,€10)\n".as_bytes(),
        &ValidationLimits::default(),
        InvalidLinePolicy::Abort,
        &solver,
    )
    .expect("batch should pack");
    assert_eq!(
        packed,
        vec![PackedLine {
            line: 1,
            outcome: LineOutcome::Packed(Selection::from_indices(vec![1, 3])),
        }]
    );
}
