//! Locate the `Input:` and `Output:` lines of a fixture file.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::errors::{HarnessError, HarnessResult};

pub const INPUT_PREFIX: &str = "Input:";
pub const OUTPUT_PREFIX: &str = "Output:";

/// The two marker lines of a fixture, with their prefixes stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureSections {
    pub input: String,
    pub output: String,
}

/// Read the first `Input:` line and the first `Output:` line after it.
///
/// Lines are scanned sequentially. The output search resumes where the input search stopped, so an `Output:`
/// line above the input line is never picked. The file handle is released as soon as both lines are found.
///
/// ## Errors
/// - `Io` if the file cannot be opened or a line cannot be read.
/// - `MissingSection` if either prefix never starts a line.
pub fn read_sections(path: &Path) -> HarnessResult<FixtureSections> {
    let io_err = |source| HarnessError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_err)?;
    let mut lines = BufReader::new(file).lines();

    let input = find_prefixed(&mut lines, INPUT_PREFIX)
        .map_err(io_err)?
        .ok_or_else(|| HarnessError::MissingSection {
            path: path.to_path_buf(),
            section: INPUT_PREFIX,
        })?;

    let output = find_prefixed(&mut lines, OUTPUT_PREFIX)
        .map_err(io_err)?
        .ok_or_else(|| HarnessError::MissingSection {
            path: path.to_path_buf(),
            section: OUTPUT_PREFIX,
        })?;

    Ok(FixtureSections { input, output })
}

fn find_prefixed<I>(lines: &mut I, prefix: &str) -> std::io::Result<Option<String>>
where
    I: Iterator<Item = std::io::Result<String>>,
{
    for line in lines {
        let line = line?;
        if let Some(rest) = line.strip_prefix(prefix) {
            return Ok(Some(rest.to_string()));
        }
    }
    Ok(None)
}
