//! Integration tests for the fixture harness
//!
//! These drive the runner over the fixture trees in `tests/fixtures/` and the sample fixtures in
//! `test_cases/`, the same way the CLI does.

use std::path::Path;

use leetrun::cli::ExitCode;
use leetrun::cli::test_interfaces::FilesystemDiscovery;
use leetrun::cli::test_runner::{ConsoleReporter, RunSummary, run_fixtures};
use leetrun::config::{ArrayParseMode, RunConfig};
use leetrun::errors::HarnessError;
use leetrun::fixture::parse_fixture;
use leetrun::problem::{Expected, MergeArrayInput, ProblemInput, ProblemKind, SolveOutput};
use leetrun::registry::{Registry, solver_for};

/// Run `config` against the real filesystem, discarding the report.
fn run(config: &RunConfig) -> RunSummary {
    let registry = Registry::with_builtin_problems();
    let mut reporter = ConsoleReporter::new(Vec::new(), false, false);
    run_fixtures(config, &registry, &FilesystemDiscovery, &mut reporter).expect("fixtures root should be readable")
}

fn counts(summary: &RunSummary) -> Vec<(String, usize, usize)> {
    summary
        .kinds
        .iter()
        .map(|k| (k.kind.to_string(), k.passed, k.failed))
        .collect()
}

#[test]
fn test_passing_tree_all_pass() {
    let summary = run(&RunConfig::new().with_root("tests/fixtures/passing"));
    assert_eq!(summary.total(), 8);
    assert_eq!(summary.failed, 0);
    assert_eq!(summary.exit_code(), ExitCode::SUCCESS);
}

#[test]
fn test_compact_spelling_all_pass() {
    let summary = run(&RunConfig::new().with_root("tests/fixtures/compact"));
    assert_eq!(
        counts(&summary),
        vec![
            ("merge_array".to_string(), 1, 0),
            ("remove_element".to_string(), 1, 0),
            ("two_sum".to_string(), 1, 0),
        ]
    );
}

#[test]
fn test_sample_fixtures_all_pass() {
    let summary = run(&RunConfig::new().with_root("test_cases"));
    assert_eq!(summary.failed, 0, "{:?}", counts(&summary));
    assert_eq!(summary.total(), 11);
}

#[test]
fn test_mixed_tree_counts() {
    let summary = run(&RunConfig::new().with_root("tests/fixtures/mixed"));
    assert_eq!(
        counts(&summary),
        vec![
            ("merge_array".to_string(), 1, 1),
            ("remove_element".to_string(), 2, 1),
            ("two_sum".to_string(), 1, 2),
            ("unknown_kind".to_string(), 0, 1),
        ]
    );
    assert_eq!((summary.total(), summary.passed, summary.failed), (9, 4, 5));
    assert_eq!(summary.exit_code(), ExitCode::FAILURE);
}

#[test]
fn test_strict_mode_fails_malformed_elements() {
    let config = RunConfig::new()
        .with_root("tests/fixtures/mixed")
        .with_problem("remove_element")
        .with_parse_mode(ArrayParseMode::Strict);
    let summary = run(&config);
    assert_eq!(counts(&summary), vec![("remove_element".to_string(), 1, 2)]);
}

#[test]
fn test_single_problem_selection() {
    let config = RunConfig::new().with_root("tests/fixtures/passing").with_problem("two_sum");
    let summary = run(&config);
    assert_eq!(counts(&summary), vec![("two_sum".to_string(), 3, 0)]);
}

#[test]
fn test_unknown_problem_without_directory_counts_nothing() {
    let config = RunConfig::new()
        .with_root("tests/fixtures/passing")
        .with_problem("unknown_kind");
    let summary = run(&config);
    assert_eq!(summary.total(), 0);
    assert_eq!(summary.exit_code(), ExitCode::SUCCESS);
}

#[test]
fn test_unknown_problem_with_directory_fails_each_fixture() {
    let config = RunConfig::new()
        .with_root("tests/fixtures/mixed")
        .with_problem("unknown_kind");
    let summary = run(&config);
    assert_eq!(counts(&summary), vec![("unknown_kind".to_string(), 0, 1)]);
}

#[test]
fn test_alias_selects_aliased_solver() {
    let solver = solver_for(&ProblemKind::from("merge_sorted_array")).expect("alias should resolve");
    let case = parse_fixture(
        Path::new("tests/fixtures/passing/merge_array/example1.txt"),
        &ProblemKind::from("merge_sorted_array"),
        &solver,
        ArrayParseMode::Lenient,
    )
    .expect("fixture should parse");
    let actual = (solver.solve)(&case.input).expect("fixture should solve");
    assert!((solver.compare)(&case.expected, &actual).passed);
}

#[test]
fn test_keyword_filter_and_extension() {
    let config = RunConfig::new()
        .with_root("tests/fixtures/mixed")
        .with_problem("two_sum")
        .with_filter("pass");
    assert_eq!(counts(&run(&config)), vec![("two_sum".to_string(), 1, 0)]);

    let config = RunConfig::new()
        .with_root("tests/fixtures/mixed")
        .with_problem("two_sum")
        .with_extension("md");
    // notes.md is picked up and fails for lack of an Input: line
    assert_eq!(counts(&run(&config)), vec![("two_sum".to_string(), 0, 1)]);
}

#[test]
fn test_exitfirst_stops_at_first_failure() {
    let config = RunConfig::new()
        .with_root("tests/fixtures/mixed")
        .with_stop_on_fail(true);
    let summary = run(&config);
    assert!(summary.stopped_early);
    assert_eq!(counts(&summary), vec![("merge_array".to_string(), 0, 1)]);
}

#[test]
fn test_missing_root_is_reported() {
    let registry = Registry::with_builtin_problems();
    let mut reporter = ConsoleReporter::new(Vec::new(), false, false);
    let result = run_fixtures(
        &RunConfig::new().with_root("tests/fixtures/does_not_exist"),
        &registry,
        &FilesystemDiscovery,
        &mut reporter,
    );
    assert!(result.is_err());
}

// =============================================================================
// End-to-end examples
// =============================================================================

fn solve_file(kind: &str, path: &str) -> (Expected, SolveOutput) {
    let kind = ProblemKind::from(kind);
    let solver = solver_for(&kind).expect("built-in kind");
    let case = parse_fixture(Path::new(path), &kind, &solver, ArrayParseMode::Lenient).expect("fixture should parse");
    let actual = (solver.solve)(&case.input).expect("fixture should solve");
    (case.expected, actual)
}

#[test]
fn test_two_sum_example() {
    let (expected, actual) = solve_file("two_sum", "tests/fixtures/passing/two_sum/example1.txt");
    assert_eq!(expected, Expected::Array(vec![0, 1]));
    assert_eq!(actual, SolveOutput::Array(vec![0, 1]));
}

#[test]
fn test_merge_example() {
    let (expected, actual) = solve_file("merge_array", "tests/fixtures/passing/merge_array/example1.txt");
    assert_eq!(expected, Expected::Array(vec![1, 2, 2, 3, 5, 6]));
    assert_eq!(actual, SolveOutput::Array(vec![1, 2, 2, 3, 5, 6]));
}

#[test]
fn test_merge_empty_second_array() {
    let kind = ProblemKind::from("merge_array");
    let solver = solver_for(&kind).expect("built-in kind");
    let case = parse_fixture(
        Path::new("tests/fixtures/passing/merge_array/example2.txt"),
        &kind,
        &solver,
        ArrayParseMode::Lenient,
    )
    .expect("fixture should parse");
    assert_eq!(
        case.input,
        ProblemInput::MergeArray(MergeArrayInput {
            nums1: vec![1],
            m: 1,
            nums2: vec![],
            n: 0,
        })
    );
    assert_eq!((solver.solve)(&case.input).expect("solve"), SolveOutput::Array(vec![1]));
}

#[test]
fn test_remove_element_example() {
    let (expected, actual) = solve_file("remove_element", "tests/fixtures/passing/remove_element/example1.txt");
    assert_eq!(
        expected,
        Expected::Compacted {
            length: 2,
            array: Some(vec![2, 2])
        }
    );
    assert_eq!(
        actual,
        SolveOutput::Compacted {
            length: 2,
            array: vec![2, 2]
        }
    );
}

#[test]
fn test_missing_output_line_is_missing_section() {
    let kind = ProblemKind::from("two_sum");
    let solver = solver_for(&kind).expect("built-in kind");
    let err = parse_fixture(
        Path::new("tests/fixtures/mixed/two_sum/missing_output.txt"),
        &kind,
        &solver,
        ArrayParseMode::Lenient,
    )
    .unwrap_err();
    assert!(matches!(err, HarnessError::MissingSection { section: "Output:", .. }));
}
