//! Fixture parsing
//!
//! A fixture is a plain-text file holding one test case:
//!
//! ```text
//! Example 1:
//!
//! Input: nums = [2,7,11,15], target = 9
//! Output: [0,1]
//! ```
//!
//! ## Modules
//!
//! - `reader` - Locates the `Input:` / `Output:` lines
//! - `extract` - Pulls named fields and integer arrays out of those lines
//!
//! Which fields are read, and how the `Output:` line is interpreted, depends on the problem kind; that part is
//! supplied by the kind's [`Solver`].

pub mod extract;
pub mod reader;

use std::path::{Path, PathBuf};

use crate::config::ArrayParseMode;
use crate::errors::HarnessResult;
use crate::problem::{Expected, ProblemInput, ProblemKind};
use crate::registry::Solver;

pub use extract::{format_int_array, parse_int_array};
pub use reader::{FixtureSections, read_sections};

/// One parsed fixture, ready to be solved and compared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub path: PathBuf,
    pub kind: ProblemKind,
    pub input: ProblemInput,
    pub expected: Expected,
}

/// Parse the fixture at `path` using `solver`'s input and output parsers.
#[tracing::instrument(skip_all, fields(path = %path.display(), kind = %kind))]
pub fn parse_fixture(
    path: &Path,
    kind: &ProblemKind,
    solver: &Solver,
    mode: ArrayParseMode,
) -> HarnessResult<TestCase> {
    let sections = read_sections(path)?;
    let input = (solver.parse_input)(&sections.input, mode)?;
    let expected = (solver.parse_expected)(&sections.output, mode)?;

    Ok(TestCase {
        path: path.to_path_buf(),
        kind: kind.clone(),
        input,
        expected,
    })
}
