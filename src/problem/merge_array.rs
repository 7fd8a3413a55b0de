//! Merge-arrays: merge `nums2[..n]` into the sorted run `nums1[..m]`.

use leetrun_core::algorithms;
use leetrun_core::problems::{self, ProblemId};

use super::{Comparison, Expected, MergeArrayInput, ProblemInput, SolveOutput, compare_exact, wrong_variant};
use crate::config::ArrayParseMode;
use crate::errors::{HarnessError, HarnessResult};
use crate::fixture::extract::{extract_expected, extract_fields};
use crate::registry::Solver;

const KIND: &str = "merge_array";

pub const SOLVER: Solver = Solver {
    name: KIND,
    parse_input,
    parse_expected,
    solve,
    compare,
};

/// Read `nums1=[...]`, `m=<int>`, `nums2=[...]`, `n=<int>`.
pub fn parse_input(line: &str, mode: ArrayParseMode) -> HarnessResult<ProblemInput> {
    let mut fields = extract_fields(line, problems::info_for(ProblemId::MergeArray), mode)?;
    Ok(ProblemInput::MergeArray(MergeArrayInput {
        nums1: fields.take_array("nums1")?,
        m: fields.take_int("m")?,
        nums2: fields.take_array("nums2")?,
        n: fields.take_int("n")?,
    }))
}

/// The first bracketed list on the `Output:` line.
pub fn parse_expected(line: &str, mode: ArrayParseMode) -> HarnessResult<Expected> {
    extract_expected(line, problems::info_for(ProblemId::MergeArray), mode)
}

/// Merge on a copy of `nums1` and return the `m + n` merged values.
///
/// ## Errors
/// - `InvalidParameters` if `m` or `n` is negative, exceeds its array, or `nums1` has no room for `m + n`
///   values.
pub fn solve(input: &ProblemInput) -> HarnessResult<SolveOutput> {
    let ProblemInput::MergeArray(params) = input else {
        return Err(wrong_variant(KIND, input));
    };

    let m = count(params.m, "m")?;
    let n = count(params.n, "n")?;

    if m > params.nums1.len() {
        return Err(HarnessError::invalid_parameters(
            KIND,
            format!("m = {m} exceeds nums1 length {}", params.nums1.len()),
        ));
    }
    if n > params.nums2.len() {
        return Err(HarnessError::invalid_parameters(
            KIND,
            format!("n = {n} exceeds nums2 length {}", params.nums2.len()),
        ));
    }
    if params.nums1.len() < m + n {
        return Err(HarnessError::invalid_parameters(
            KIND,
            format!("nums1 length {} has no room for m + n = {}", params.nums1.len(), m + n),
        ));
    }

    let mut merged = params.nums1.clone();
    algorithms::merge(&mut merged, m, &params.nums2, n);
    merged.truncate(m + n);
    Ok(SolveOutput::Array(merged))
}

pub fn compare(expected: &Expected, actual: &SolveOutput) -> Comparison {
    compare_exact(expected, actual)
}

fn count(value: i64, name: &str) -> HarnessResult<usize> {
    usize::try_from(value)
        .map_err(|_| HarnessError::invalid_parameters(KIND, format!("{name} must be non-negative, got {value}")))
}
