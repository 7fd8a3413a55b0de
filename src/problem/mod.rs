//! Typed problem inputs, outputs and comparison verdicts.
//!
//! Every problem kind gets a strongly-typed parameter struct and a variant in [`ProblemInput`]; results come
//! back as a [`SolveOutput`] and are checked against an [`Expected`] by the kind's own comparator.
//!
//! ## Modules
//!
//! - `merge_array` - Merge of two sorted runs
//! - `two_sum` - Indices of the first pair summing to a target
//! - `remove_element` - In-place removal with a retained prefix

pub mod merge_array;
pub mod remove_element;
pub mod two_sum;

use std::fmt;

use crate::errors::HarnessError;
use crate::fixture::format_int_array;

/// Opaque identifier naming a class of problem.
///
/// The same string is the registry key and the fixture directory name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProblemKind(String);

impl ProblemKind {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProblemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProblemKind {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ProblemKind {
    fn from(name: String) -> Self {
        Self(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeArrayInput {
    pub nums1: Vec<i64>,
    pub m: i64,
    pub nums2: Vec<i64>,
    pub n: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwoSumInput {
    pub nums: Vec<i64>,
    pub target: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveElementInput {
    pub nums: Vec<i64>,
    pub val: i64,
}

/// Parsed parameters of one fixture, tagged by problem kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProblemInput {
    MergeArray(MergeArrayInput),
    TwoSum(TwoSumInput),
    RemoveElement(RemoveElementInput),
}

impl ProblemInput {
    /// Canonical name of the kind this input belongs to.
    pub fn kind_name(&self) -> &'static str {
        use leetrun_core::problems::{ProblemId, as_str};
        match self {
            ProblemInput::MergeArray(_) => as_str(ProblemId::MergeArray),
            ProblemInput::TwoSum(_) => as_str(ProblemId::TwoSum),
            ProblemInput::RemoveElement(_) => as_str(ProblemId::RemoveElement),
        }
    }
}

/// Expected result read from a fixture's `Output:` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expected {
    Array(Vec<i64>),
    /// `array` is `None` when the fixture only states the length.
    Compacted { length: usize, array: Option<Vec<i64>> },
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Array(values) => f.write_str(&format_int_array(values)),
            Expected::Compacted { length, array: None } => write!(f, "{length}"),
            Expected::Compacted {
                length,
                array: Some(values),
            } => write!(f, "{length}, {}", format_int_array(values)),
        }
    }
}

/// Result produced by a solver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutput {
    Array(Vec<i64>),
    /// `array` holds exactly the first `length` elements.
    Compacted { length: usize, array: Vec<i64> },
}

impl fmt::Display for SolveOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveOutput::Array(values) => f.write_str(&format_int_array(values)),
            SolveOutput::Compacted { length, array } => write!(f, "{length}, {}", format_int_array(array)),
        }
    }
}

/// One expected-vs-actual pair shown in the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detail {
    /// Facet being compared (`None` for the whole result).
    pub label: Option<&'static str>,
    /// `None` when the fixture does not state this facet.
    pub expected: Option<String>,
    pub actual: String,
    pub matched: bool,
}

impl Detail {
    pub fn new(label: Option<&'static str>, expected: Option<String>, actual: String, matched: bool) -> Self {
        Self {
            label,
            expected,
            actual,
            matched,
        }
    }
}

/// Verdict of a comparator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub passed: bool,
    pub details: Vec<Detail>,
}

impl Comparison {
    pub fn new(passed: bool, details: Vec<Detail>) -> Self {
        Self { passed, details }
    }
}

/// Default comparator: deep structural equality of the whole result.
pub fn compare_exact(expected: &Expected, actual: &SolveOutput) -> Comparison {
    let matched = match (expected, actual) {
        (Expected::Array(e), SolveOutput::Array(a)) => e == a,
        (
            Expected::Compacted {
                length: el,
                array: Some(ea),
            },
            SolveOutput::Compacted { length: al, array: aa },
        ) => el == al && ea == aa,
        _ => false,
    };
    Comparison::new(
        matched,
        vec![Detail::new(None, Some(expected.to_string()), actual.to_string(), matched)],
    )
}

/// Error for a solver handed another kind's input.
pub(crate) fn wrong_variant(kind: &'static str, input: &ProblemInput) -> HarnessError {
    HarnessError::invalid_parameters(kind, format!("received {} parameters", input.kind_name()))
}
