//! Fixture runner implementation
//!
//! ## TestReporter Trait
//!
//! The runner uses a `TestReporter` trait to separate reporting from execution. [`ConsoleReporter`] is the
//! default, plain-text implementation; the `render_*` functions it is built from are pure so the report layout
//! can be checked without capturing a terminal.
//!
//! ## I/O Boundaries
//!
//! Enumerating kinds and fixture files goes through [`FixtureDiscovery`] (see `test_interfaces.rs`). Reading a
//! fixture's contents is done by the fixture parser.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use miette::Diagnostic;

use super::test_interfaces::{DiscoveryError, FilesystemDiscovery, FixtureDiscovery};
use super::{CliError, CliResult, ExitCode};
use crate::config::{ArrayParseMode, RunConfig};
use crate::errors::{HarnessError, HarnessResult};
use crate::fixture::parse_fixture;
use crate::problem::{Comparison, Detail, ProblemKind};
use crate::registry::{Registry, Solver};

// ============================================================================
// Test Reporter Trait
// ============================================================================

/// Trait for reporting fixture results as the run progresses.
pub trait TestReporter {
    /// Called before the fixtures of a kind are run
    fn on_kind_start(&mut self, _kind: &ProblemKind, _fixture_count: usize) {}

    /// Called when a fixture has been judged
    fn on_fixture_complete(&mut self, result: &FixtureResult);

    /// Called after the last fixture of a kind
    fn on_kind_complete(&mut self, summary: &KindSummary);

    /// Called when all kinds have completed
    fn on_run_complete(&mut self, summary: &RunSummary);
}

/// Why a fixture failed.
#[derive(Debug)]
pub enum FailureReason {
    /// The fixture could not be parsed or solved, or its kind has no solver.
    Error(HarnessError),
    /// The solver ran; the comparator rejected its result.
    Mismatch(Comparison),
}

#[derive(Debug)]
pub enum FixtureOutcome {
    Passed(Comparison),
    Failed(FailureReason),
}

/// Result of running a single fixture
#[derive(Debug)]
pub struct FixtureResult {
    pub path: PathBuf,
    pub kind: ProblemKind,
    pub outcome: FixtureOutcome,
}

impl FixtureResult {
    pub fn passed(&self) -> bool {
        matches!(self.outcome, FixtureOutcome::Passed(_))
    }

    /// File name of the fixture, falling back to the full path.
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Pass/fail tally for one problem kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindSummary {
    pub kind: ProblemKind,
    pub passed: usize,
    pub failed: usize,
}

impl KindSummary {
    fn new(kind: ProblemKind) -> Self {
        Self {
            kind,
            passed: 0,
            failed: 0,
        }
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed
    }
}

/// Summary of a whole run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub kinds: Vec<KindSummary>,
    pub passed: usize,
    pub failed: usize,
    /// Set when `--exitfirst` cut the run short.
    pub stopped_early: bool,
    pub duration: Duration,
}

impl RunSummary {
    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.failed > 0 { ExitCode::FAILURE } else { ExitCode::SUCCESS }
    }
}

// ============================================================================
// Console reporter
// ============================================================================

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

fn paint(text: &str, style: &str, color: bool) -> String {
    if color {
        format!("{style}{text}{RESET}")
    } else {
        text.to_string()
    }
}

/// `=== Testing Problem: <kind> ===`
pub fn render_kind_header(kind: &ProblemKind, color: bool) -> String {
    paint(&format!("=== Testing Problem: {kind} ==="), BOLD, color)
}

/// The `PASS:`/`FAIL:` line of a fixture plus its indented expected-vs-actual lines.
pub fn render_fixture(result: &FixtureResult, color: bool) -> String {
    let name = result.display_name();
    let mut lines = Vec::new();

    match &result.outcome {
        FixtureOutcome::Passed(comparison) => {
            lines.push(format!("{}: {name}", paint("PASS", GREEN, color)));
            lines.extend(render_details(&comparison.details));
        }
        FixtureOutcome::Failed(FailureReason::Mismatch(comparison)) => {
            lines.push(format!("{}: {name}", paint("FAIL", RED, color)));
            lines.extend(render_details(&comparison.details));
        }
        FixtureOutcome::Failed(FailureReason::Error(error)) => {
            lines.push(format!("{}: {name}", paint("FAIL", RED, color)));
            lines.extend(render_error(error));
        }
    }

    lines.join("\n")
}

fn render_details(details: &[Detail]) -> Vec<String> {
    let mut lines = Vec::with_capacity(details.len() * 2);
    for detail in details {
        let (expected_key, got_key) = match detail.label {
            Some(label) => (format!("Expected {label}:"), format!("Got {label}:")),
            None => ("Expected:".to_string(), "Got:".to_string()),
        };
        let width = expected_key.len().max(got_key.len());
        let expected = detail.expected.as_deref().unwrap_or("(not checked)");
        let marker = if detail.matched { "" } else { " ✗" };
        lines.push(format!("   {expected_key:<width$} {expected}"));
        lines.push(format!("   {got_key:<width$} {}{marker}", detail.actual));
    }
    lines
}

fn render_error(error: &HarnessError) -> Vec<String> {
    let mut lines = vec![match error.code() {
        Some(code) => format!("   error[{code}]: {error}"),
        None => format!("   error: {error}"),
    }];
    if let Some(help) = error.help() {
        lines.push(format!("   help: {help}"));
    }
    lines
}

/// `Results for <kind>: N passed, M failed`
pub fn render_kind_summary(summary: &KindSummary) -> String {
    format!(
        "Results for {}: {} passed, {} failed",
        summary.kind, summary.passed, summary.failed
    )
}

/// The closing `=== Summary ===` block.
pub fn render_run_summary(summary: &RunSummary, color: bool) -> String {
    let mut lines = vec![
        paint("=== Summary ===", BOLD, color),
        format!("Total: {}", summary.total()),
        format!("Passed: {}", summary.passed),
        format!("Failed: {}", summary.failed),
    ];
    if summary.stopped_early {
        lines.push("Stopped after first failure (--exitfirst)".to_string());
    }
    lines.join("\n")
}

/// Default console reporter.
pub struct ConsoleReporter<W: Write> {
    out: W,
    pub verbose: bool,
    pub color: bool,
}

impl ConsoleReporter<io::Stdout> {
    pub fn stdout(verbose: bool, color: bool) -> Self {
        Self::new(io::stdout(), verbose, color)
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W, verbose: bool, color: bool) -> Self {
        Self { out, verbose, color }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: &str) {
        if let Err(error) = writeln!(self.out, "{text}") {
            tracing::debug!(%error, "failed to write report line");
        }
    }
}

impl<W: Write> TestReporter for ConsoleReporter<W> {
    fn on_kind_start(&mut self, kind: &ProblemKind, _fixture_count: usize) {
        let header = render_kind_header(kind, self.color);
        self.emit(&header);
    }

    fn on_fixture_complete(&mut self, result: &FixtureResult) {
        let text = render_fixture(result, self.color);
        self.emit(&text);
    }

    fn on_kind_complete(&mut self, summary: &KindSummary) {
        let text = render_kind_summary(summary);
        self.emit(&text);
        self.emit("");
    }

    fn on_run_complete(&mut self, summary: &RunSummary) {
        let text = render_run_summary(summary, self.color);
        self.emit(&text);
        if self.verbose {
            let timing = format!("Finished in {:.2}s", summary.duration.as_secs_f64());
            self.emit(&timing);
        }
    }
}

// ============================================================================
// Runner
// ============================================================================

/// Run every selected fixture and report as it goes.
///
/// Fixture-level problems never abort the run: each becomes one failed [`FixtureResult`]. A kind whose
/// directory is missing or unreadable is logged and counted as having no fixtures.
///
/// ## Errors
/// - [`DiscoveryError`] if no kind was requested and the fixtures root cannot be listed or holds no kinds.
pub fn run_fixtures(
    config: &RunConfig,
    registry: &Registry,
    discovery: &dyn FixtureDiscovery,
    reporter: &mut dyn TestReporter,
) -> Result<RunSummary, DiscoveryError> {
    let start = Instant::now();

    let kinds: Vec<ProblemKind> = match &config.problem {
        Some(kind) => vec![kind.clone()],
        None => discovery
            .discover_kinds(&config.root)?
            .into_iter()
            .map(ProblemKind::from)
            .collect(),
    };

    let mut summary = RunSummary {
        kinds: Vec::with_capacity(kinds.len()),
        passed: 0,
        failed: 0,
        stopped_early: false,
        duration: Duration::ZERO,
    };

    for kind in kinds {
        let files = fixture_files(config, discovery, &kind);
        let solver = registry.lookup(&kind);
        if solver.is_none() {
            tracing::warn!(kind = %kind, "no solver registered; every fixture of this kind will fail");
        }

        reporter.on_kind_start(&kind, files.len());
        let mut kind_summary = KindSummary::new(kind.clone());

        for path in files {
            let result = run_fixture(&path, &kind, solver, config.parse_mode);
            if result.passed() {
                kind_summary.passed += 1;
            } else {
                kind_summary.failed += 1;
            }
            reporter.on_fixture_complete(&result);

            if config.stop_on_fail && !result.passed() {
                summary.stopped_early = true;
                break;
            }
        }

        reporter.on_kind_complete(&kind_summary);
        summary.passed += kind_summary.passed;
        summary.failed += kind_summary.failed;
        summary.kinds.push(kind_summary);

        if summary.stopped_early {
            break;
        }
    }

    summary.duration = start.elapsed();
    reporter.on_run_complete(&summary);
    Ok(summary)
}

fn fixture_files(config: &RunConfig, discovery: &dyn FixtureDiscovery, kind: &ProblemKind) -> Vec<PathBuf> {
    let kind_dir = config.root.join(kind.as_str());
    let mut files = match discovery.discover_fixture_files(&kind_dir, &config.extension) {
        Ok(files) => files,
        Err(error) => {
            tracing::warn!(kind = %kind, dir = %kind_dir.display(), %error, "skipping problem kind");
            return Vec::new();
        }
    };

    if let Some(keyword) = config.filter.as_deref() {
        files.retain(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|name| name.contains(keyword))
        });
    }

    if files.is_empty() {
        tracing::warn!(kind = %kind, dir = %kind_dir.display(), "no fixtures found");
    }
    files
}

/// Parse, solve and judge one fixture.
pub fn run_fixture(path: &Path, kind: &ProblemKind, solver: Option<&Solver>, mode: ArrayParseMode) -> FixtureResult {
    let outcome = match solver {
        None => FixtureOutcome::Failed(FailureReason::Error(HarnessError::UnknownProblemKind {
            kind: kind.to_string(),
        })),
        Some(solver) => match evaluate(path, kind, solver, mode) {
            Ok(comparison) if comparison.passed => FixtureOutcome::Passed(comparison),
            Ok(comparison) => FixtureOutcome::Failed(FailureReason::Mismatch(comparison)),
            Err(error) => {
                tracing::debug!(path = %path.display(), %error, "fixture errored");
                FixtureOutcome::Failed(FailureReason::Error(error))
            }
        },
    };

    FixtureResult {
        path: path.to_path_buf(),
        kind: kind.clone(),
        outcome,
    }
}

fn evaluate(path: &Path, kind: &ProblemKind, solver: &Solver, mode: ArrayParseMode) -> HarnessResult<Comparison> {
    let case = parse_fixture(path, kind, solver, mode)?;
    let actual = (solver.solve)(&case.input)?;
    Ok((solver.compare)(&case.expected, &actual))
}

/// Run the fixtures selected by `config` and print a console report.
pub fn run_tests(config: &RunConfig, registry: &Registry) -> CliResult<ExitCode> {
    let mut reporter = ConsoleReporter::stdout(config.verbose, config.color);
    let summary = run_fixtures(config, registry, &FilesystemDiscovery, &mut reporter)
        .map_err(|e| CliError::new(format!("{:?}", miette::Report::new(e)), ExitCode::USAGE))?;

    match summary.exit_code() {
        ExitCode::SUCCESS => Ok(ExitCode::SUCCESS),
        // Failures - return error with empty message (summary already printed)
        code => Err(CliError::new("", code)),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::problem::Expected;

    /// Discovery over a fixed listing; paths need not exist.
    struct StaticDiscovery {
        kinds: Vec<&'static str>,
        files: Vec<(&'static str, Vec<PathBuf>)>,
    }

    impl FixtureDiscovery for StaticDiscovery {
        fn discover_kinds(&self, root: &Path) -> Result<Vec<String>, DiscoveryError> {
            if self.kinds.is_empty() {
                return Err(DiscoveryError::NoKinds {
                    path: root.to_path_buf(),
                });
            }
            Ok(self.kinds.iter().map(|k| k.to_string()).collect())
        }

        fn discover_fixture_files(&self, kind_dir: &Path, _extension: &str) -> Result<Vec<PathBuf>, DiscoveryError> {
            self.files
                .iter()
                .find(|(kind, _)| kind_dir.ends_with(kind))
                .map(|(_, files)| files.clone())
                .ok_or_else(|| DiscoveryError::Io {
                    path: kind_dir.to_path_buf(),
                    source: io::Error::from(io::ErrorKind::NotFound),
                })
        }
    }

    #[derive(Default)]
    struct RecordingReporter {
        events: Vec<String>,
    }

    impl TestReporter for RecordingReporter {
        fn on_kind_start(&mut self, kind: &ProblemKind, fixture_count: usize) {
            self.events.push(format!("start {kind} {fixture_count}"));
        }

        fn on_fixture_complete(&mut self, result: &FixtureResult) {
            self.events.push(format!("{} {}", result.display_name(), result.passed()));
        }

        fn on_kind_complete(&mut self, summary: &KindSummary) {
            self.events.push(format!("done {} {}", summary.kind, summary.total()));
        }

        fn on_run_complete(&mut self, summary: &RunSummary) {
            self.events.push(format!("run {}", summary.total()));
        }
    }

    fn missing(name: &str) -> PathBuf {
        PathBuf::from("no/such/dir").join(name)
    }

    #[test]
    fn test_unknown_kind_fails_every_fixture() {
        let discovery = StaticDiscovery {
            kinds: vec!["three_sum"],
            files: vec![("three_sum", vec![missing("a.txt"), missing("b.txt")])],
        };
        let mut reporter = RecordingReporter::default();
        let summary = run_fixtures(
            &RunConfig::new(),
            &Registry::with_builtin_problems(),
            &discovery,
            &mut reporter,
        )
        .unwrap();

        assert_eq!(summary.failed, 2);
        assert_eq!(summary.exit_code(), ExitCode::FAILURE);
        assert_eq!(
            reporter.events,
            vec!["start three_sum 2", "a.txt false", "b.txt false", "done three_sum 2", "run 2"]
        );
    }

    #[test]
    fn test_requested_kind_without_directory_counts_nothing() {
        let discovery = StaticDiscovery {
            kinds: vec![],
            files: vec![],
        };
        let config = RunConfig::new().with_problem("unknown_kind");
        let mut reporter = RecordingReporter::default();
        let summary = run_fixtures(&config, &Registry::with_builtin_problems(), &discovery, &mut reporter).unwrap();

        assert_eq!(summary.total(), 0);
        assert_eq!(summary.exit_code(), ExitCode::SUCCESS);
    }

    #[test]
    fn test_empty_root_is_discovery_error() {
        let discovery = StaticDiscovery {
            kinds: vec![],
            files: vec![],
        };
        let mut reporter = RecordingReporter::default();
        let err = run_fixtures(
            &RunConfig::new(),
            &Registry::with_builtin_problems(),
            &discovery,
            &mut reporter,
        )
        .unwrap_err();
        assert!(matches!(err, DiscoveryError::NoKinds { .. }));
        assert!(reporter.events.is_empty());
    }

    #[test]
    fn test_exitfirst_stops_the_whole_run() {
        let discovery = StaticDiscovery {
            kinds: vec!["two_sum", "zzz"],
            files: vec![
                ("two_sum", vec![missing("a.txt"), missing("b.txt")]),
                ("zzz", vec![missing("c.txt")]),
            ],
        };
        let config = RunConfig::new().with_stop_on_fail(true);
        let mut reporter = RecordingReporter::default();
        let summary = run_fixtures(&config, &Registry::with_builtin_problems(), &discovery, &mut reporter).unwrap();

        assert!(summary.stopped_early);
        assert_eq!(summary.total(), 1);
        assert_eq!(summary.kinds.len(), 1);
    }

    #[test]
    fn test_keyword_filter_on_file_name() {
        let discovery = StaticDiscovery {
            kinds: vec!["zzz"],
            files: vec![("zzz", vec![missing("edge_empty.txt"), missing("basic.txt")])],
        };
        let config = RunConfig::new().with_filter("edge");
        let mut reporter = RecordingReporter::default();
        let summary = run_fixtures(&config, &Registry::new(), &discovery, &mut reporter).unwrap();

        assert_eq!(summary.total(), 1);
        assert_eq!(reporter.events[1], "edge_empty.txt false");
    }

    #[test]
    fn test_missing_fixture_file_is_io_failure() {
        let result = run_fixture(
            &missing("gone.txt"),
            &ProblemKind::from("two_sum"),
            Some(&crate::problem::two_sum::SOLVER),
            ArrayParseMode::Lenient,
        );
        assert!(matches!(
            result.outcome,
            FixtureOutcome::Failed(FailureReason::Error(HarnessError::Io { .. }))
        ));
    }

    #[test]
    fn test_render_mismatch_without_color() {
        let comparison = crate::problem::compare_exact(
            &Expected::Array(vec![0, 1]),
            &crate::problem::SolveOutput::Array(vec![1, 2]),
        );
        let result = FixtureResult {
            path: PathBuf::from("test_cases/two_sum/example1.txt"),
            kind: ProblemKind::from("two_sum"),
            outcome: FixtureOutcome::Failed(FailureReason::Mismatch(comparison)),
        };
        assert_eq!(
            render_fixture(&result, false),
            "FAIL: example1.txt\n   Expected: [0,1]\n   Got:      [1,2] ✗"
        );
    }

    #[test]
    fn test_render_pass_carries_details() {
        let comparison = crate::problem::compare_exact(
            &Expected::Array(vec![0, 1]),
            &crate::problem::SolveOutput::Array(vec![0, 1]),
        );
        let result = FixtureResult {
            path: PathBuf::from("example1.txt"),
            kind: ProblemKind::from("two_sum"),
            outcome: FixtureOutcome::Passed(comparison),
        };
        assert_eq!(
            render_fixture(&result, true),
            "\x1b[32mPASS\x1b[0m: example1.txt\n   Expected: [0,1]\n   Got:      [0,1]"
        );
    }
}
