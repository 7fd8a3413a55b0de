//! Pattern-based extraction of named fields from fixture lines.
//!
//! ## Notes
//! - Array fields look like `name=[v1, v2, ...]`, scalar fields like `name=<integer>`. Whitespace around `=`
//!   is tolerated and names match on a word boundary, so `nums` never matches inside `nums1`.
//! - Array bodies go through [`parse_int_array`]: empty segments are skipped and, in lenient mode, so are
//!   segments that are not integers.
//! - Field patterns for every parameter in the built-in vocabulary are compiled once and shared.

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::LazyLock;

use leetrun_core::problems::{OutputShape, PROBLEMS, ParamShape, ProblemInfo};
use regex::Regex;

use crate::config::ArrayParseMode;
use crate::errors::{HarnessError, HarnessResult};
use crate::problem::Expected;

static BRACKETED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.*?)\]").expect("INVARIANT: bracket pattern is valid"));

static LEADING_INT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+)").expect("INVARIANT: leading integer pattern is valid"));

static FIELD_PATTERNS: LazyLock<HashMap<(&'static str, ParamShape), Regex>> = LazyLock::new(|| {
    PROBLEMS
        .iter()
        .flat_map(|problem| problem.params)
        .map(|param| ((param.name, param.shape), compile_field_regex(param.name, param.shape)))
        .collect()
});

/// A parameter value pulled from an `Input:` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Int(i64),
    IntArray(Vec<i64>),
}

/// Named fields extracted for one problem kind.
///
/// Values are taken out by name when the kind builds its typed input; asking for a field that was never
/// extracted, or asking with the wrong shape, is an `InvalidParameters` error.
#[derive(Debug)]
pub struct Fields {
    kind: &'static str,
    values: HashMap<&'static str, FieldValue>,
}

impl Fields {
    pub fn take_array(&mut self, name: &'static str) -> HarnessResult<Vec<i64>> {
        match self.values.remove(name) {
            Some(FieldValue::IntArray(values)) => Ok(values),
            Some(FieldValue::Int(_)) => Err(HarnessError::invalid_parameters(
                self.kind,
                format!("`{name}` is a scalar, expected an array"),
            )),
            None => Err(self.missing(name)),
        }
    }

    pub fn take_int(&mut self, name: &'static str) -> HarnessResult<i64> {
        match self.values.remove(name) {
            Some(FieldValue::Int(value)) => Ok(value),
            Some(FieldValue::IntArray(_)) => Err(HarnessError::invalid_parameters(
                self.kind,
                format!("`{name}` is an array, expected a scalar"),
            )),
            None => Err(self.missing(name)),
        }
    }

    fn missing(&self, name: &str) -> HarnessError {
        HarnessError::invalid_parameters(self.kind, format!("missing parameter `{name}`"))
    }
}

/// Extract every parameter `problem` declares from an `Input:` line.
///
/// ## Errors
/// - `MissingField` for the first declared parameter whose pattern does not match.
/// - `MalformedElement` for out-of-range scalars, or non-integer array elements in strict mode.
pub fn extract_fields(line: &str, problem: &ProblemInfo, mode: ArrayParseMode) -> HarnessResult<Fields> {
    let mut values = HashMap::with_capacity(problem.params.len());
    for param in problem.params {
        let value = match param.shape {
            ParamShape::IntArray => FieldValue::IntArray(extract_array_field(line, param.name, mode)?),
            ParamShape::Int => FieldValue::Int(extract_int_field(line, param.name)?),
        };
        values.insert(param.name, value);
    }
    Ok(Fields {
        kind: problem.canonical,
        values,
    })
}

/// Extract `name=[...]` and parse its body.
pub fn extract_array_field(line: &str, name: &'static str, mode: ArrayParseMode) -> HarnessResult<Vec<i64>> {
    let pattern = field_regex(name, ParamShape::IntArray);
    let body = capture(&pattern, line).ok_or_else(|| HarnessError::missing_field(name, line))?;
    parse_int_array_with(body, mode)
}

/// Extract `name=<integer>`.
pub fn extract_int_field(line: &str, name: &'static str) -> HarnessResult<i64> {
    let pattern = field_regex(name, ParamShape::Int);
    let digits = capture(&pattern, line).ok_or_else(|| HarnessError::missing_field(name, line))?;
    parse_int(digits)
}

/// Parse an `Output:` line according to the output shape `problem` declares.
///
/// ## Errors
/// - `MissingField { field: "output" }` if an array output has no bracketed list.
/// - `MissingField { field: "length" }` if a length output does not start with digits.
/// - `MalformedElement` for non-integer elements in strict mode.
pub fn extract_expected(line: &str, problem: &ProblemInfo, mode: ArrayParseMode) -> HarnessResult<Expected> {
    match problem.output {
        OutputShape::IntArray => {
            let body = extract_bracketed(line).ok_or_else(|| HarnessError::missing_field("output", line))?;
            Ok(Expected::Array(parse_int_array_with(body, mode)?))
        }
        OutputShape::LengthWithPrefix => {
            let length = extract_leading_int(line)?;
            let array = match extract_bracketed(line) {
                Some(body) => Some(parse_int_array_with(body, mode)?),
                None => None,
            };
            Ok(Expected::Compacted { length, array })
        }
    }
}

/// Return the body of the first bracketed list on `line`, without the brackets.
pub fn extract_bracketed(line: &str) -> Option<&str> {
    capture(&BRACKETED, line)
}

/// Return the non-negative integer that starts `line` (after optional whitespace).
///
/// ## Errors
/// - `MissingField { field: "length" }` if the line does not start with digits.
/// - `MalformedElement` if the digits overflow `usize`.
pub fn extract_leading_int(line: &str) -> HarnessResult<usize> {
    let digits = capture(&LEADING_INT, line).ok_or_else(|| HarnessError::missing_field("length", line))?;
    digits.parse::<usize>().map_err(|_| HarnessError::MalformedElement {
        token: digits.to_string(),
    })
}

/// Parse a comma-separated integer list, skipping anything that is not an integer.
///
/// A single pair of surrounding brackets is accepted, so this reads back what [`format_int_array`] writes.
///
/// ## Examples
/// ```rust
/// use leetrun::fixture::extract::parse_int_array;
///
/// assert_eq!(parse_int_array("1, 2,,x, 3"), vec![1, 2, 3]);
/// assert_eq!(parse_int_array("[4,5]"), vec![4, 5]);
/// ```
pub fn parse_int_array(s: &str) -> Vec<i64> {
    split_elements(s)
        .filter_map(|token| match token.parse::<i64>() {
            Ok(n) => Some(n),
            Err(_) => {
                tracing::warn!("could not parse '{}' as integer, skipping", token);
                None
            }
        })
        .collect()
}

/// Parse a comma-separated integer list, failing on the first element that is not an integer.
pub fn parse_int_array_strict(s: &str) -> HarnessResult<Vec<i64>> {
    split_elements(s).map(parse_int).collect()
}

pub fn parse_int_array_with(s: &str, mode: ArrayParseMode) -> HarnessResult<Vec<i64>> {
    match mode {
        ArrayParseMode::Lenient => Ok(parse_int_array(s)),
        ArrayParseMode::Strict => parse_int_array_strict(s),
    }
}

/// Render values as `[v1,v2,...]`, the spelling fixtures use.
pub fn format_int_array(values: &[i64]) -> String {
    let body: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", body.join(","))
}

fn split_elements(s: &str) -> impl Iterator<Item = &str> {
    let trimmed = s.trim();
    let body = trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .unwrap_or(trimmed);
    body.split(',').map(str::trim).filter(|token| !token.is_empty())
}

fn parse_int(token: &str) -> HarnessResult<i64> {
    token.parse::<i64>().map_err(|_| HarnessError::MalformedElement {
        token: token.to_string(),
    })
}

fn field_regex(name: &'static str, shape: ParamShape) -> Cow<'static, Regex> {
    match FIELD_PATTERNS.get(&(name, shape)) {
        Some(pattern) => Cow::Borrowed(pattern),
        None => Cow::Owned(compile_field_regex(name, shape)),
    }
}

fn compile_field_regex(name: &str, shape: ParamShape) -> Regex {
    let name = regex::escape(name);
    let pattern = match shape {
        ParamShape::IntArray => format!(r"\b{name}\s*=\s*\[(.*?)\]"),
        ParamShape::Int => format!(r"\b{name}\s*=\s*(-?\d+)"),
    };
    Regex::new(&pattern).expect("INVARIANT: field names are escaped before compiling")
}

fn capture<'a>(pattern: &Regex, line: &'a str) -> Option<&'a str> {
    pattern.captures(line).and_then(|c| c.get(1)).map(|m| m.as_str())
}
