//! Run configuration for the fixture harness.

use std::path::PathBuf;

use crate::problem::ProblemKind;

/// Directory scanned for `<kind>/` fixture folders when no root is given.
pub const DEFAULT_FIXTURES_ROOT: &str = "test_cases";

/// Extension (without the dot) of fixture files.
pub const DEFAULT_FIXTURE_EXTENSION: &str = "txt";

/// How array bodies with non-integer elements are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArrayParseMode {
    /// Skip the element and log a warning.
    #[default]
    Lenient,
    /// Fail the fixture with `MalformedElement`.
    Strict,
}

/// Configuration for one harness run
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Root directory holding one subdirectory per problem kind
    pub root: PathBuf,
    /// Restrict the run to a single problem kind
    pub problem: Option<ProblemKind>,
    /// Fixture file extension, without the leading dot
    pub extension: String,
    /// Print the run duration after the summary
    pub verbose: bool,
    /// Stop at the first failed fixture
    pub stop_on_fail: bool,
    /// Keep only fixtures whose file name contains this keyword
    pub filter: Option<String>,
    /// Treatment of malformed array elements
    pub parse_mode: ArrayParseMode,
    /// Emit ANSI colors in the console report
    pub color: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_FIXTURES_ROOT),
            problem: None,
            extension: DEFAULT_FIXTURE_EXTENSION.to_string(),
            verbose: false,
            stop_on_fail: false,
            filter: None,
            parse_mode: ArrayParseMode::Lenient,
            color: true,
        }
    }
}

impl RunConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fixtures root directory
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Restrict the run to one problem kind
    pub fn with_problem(mut self, problem: impl Into<ProblemKind>) -> Self {
        self.problem = Some(problem.into());
        self
    }

    /// Set the fixture file extension (a leading dot is ignored)
    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = extension.trim_start_matches('.').to_string();
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_stop_on_fail(mut self, stop_on_fail: bool) -> Self {
        self.stop_on_fail = stop_on_fail;
        self
    }

    /// Set the fixture file-name keyword filter
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn with_parse_mode(mut self, mode: ArrayParseMode) -> Self {
        self.parse_mode = mode;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}
