//! CLI module for the leetrun fixture harness
//!
//! ## Usage
//!
//! - `leetrun` - Run every problem kind found under the fixtures root
//! - `leetrun <problem>` - Run only that kind's fixtures
//! - `leetrun --list` - Print the registered problem kinds
//!
//! ## Modules
//!
//! - `commands` - Non-run commands (`--list`)
//! - `test_interfaces` - Fixture discovery boundary
//! - `test_runner` - Fixture execution and reporting
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;
pub mod test_interfaces;
pub mod test_runner;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use crate::config::{ArrayParseMode, DEFAULT_FIXTURE_EXTENSION, DEFAULT_FIXTURES_ROOT, RunConfig};
use crate::registry::Registry;
use crate::version::LEETRUN_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    /// At least one fixture failed.
    pub const FAILURE: ExitCode = ExitCode(1);
    /// Bad arguments or an unusable fixtures root.
    pub const USAGE: ExitCode = ExitCode(2);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a usage error (exit code 2).
    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::USAGE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Run problem solvers against fixture files
#[derive(Parser, Debug)]
#[command(name = "leetrun")]
#[command(version = LEETRUN_VERSION)]
#[command(about = "Run problem solvers against input/output fixture files", long_about = None)]
pub struct Cli {
    /// Problem kind to test (default: every subdirectory of the fixtures root)
    #[arg(value_name = "PROBLEM")]
    pub problem: Option<String>,

    /// Directory holding one subdirectory of fixtures per problem kind
    #[arg(long, value_name = "DIR", default_value = DEFAULT_FIXTURES_ROOT)]
    pub root: PathBuf,

    /// Fixture file extension
    #[arg(long = "ext", value_name = "EXT", default_value = DEFAULT_FIXTURE_EXTENSION)]
    pub extension: String,

    /// Print the run duration after the summary
    #[arg(short, long)]
    pub verbose: bool,

    /// Stop on first failure
    #[arg(short = 'x', long = "exitfirst")]
    pub stop_on_fail: bool,

    /// Only run fixtures whose file name contains EXPR
    #[arg(short = 'k', value_name = "EXPR")]
    pub filter: Option<String>,

    /// Fail fixtures whose arrays contain non-integer elements instead of skipping them
    #[arg(long)]
    pub strict: bool,

    /// Disable ANSI colors in the report
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// List the registered problem kinds and exit
    #[arg(long, conflicts_with = "problem")]
    pub list: bool,
}

impl Cli {
    /// Translate parsed arguments into a run configuration.
    pub fn run_config(&self) -> RunConfig {
        let mut config = RunConfig::new()
            .with_root(&self.root)
            .with_extension(&self.extension)
            .with_verbose(self.verbose)
            .with_stop_on_fail(self.stop_on_fail)
            .with_color(!self.no_color);
        if let Some(problem) = &self.problem {
            config = config.with_problem(problem.as_str());
        }
        if let Some(filter) = &self.filter {
            config = config.with_filter(filter.as_str());
        }
        if self.strict {
            config = config.with_parse_mode(ArrayParseMode::Strict);
        }
        config
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    // clap exits with status 2 on bad arguments, matching ExitCode::USAGE
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    let registry = Registry::with_builtin_problems();

    if cli.list {
        return commands::list_problems(&registry);
    }

    if cli.extension.trim_start_matches('.').is_empty() {
        return Err(CliError::usage("Error: --ext must not be empty"));
    }

    test_runner::run_tests(&cli.run_config(), &registry)
}

// ============================================================================
// Tests
// ============================================================================
