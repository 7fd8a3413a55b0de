//! Two-sum: indices of the first pair of values summing to `target`.

use leetrun_core::algorithms;
use leetrun_core::problems::{self, ProblemId};

use super::{Comparison, Expected, ProblemInput, SolveOutput, TwoSumInput, compare_exact, wrong_variant};
use crate::config::ArrayParseMode;
use crate::errors::HarnessResult;
use crate::fixture::extract::{extract_expected, extract_fields};
use crate::registry::Solver;

const KIND: &str = "two_sum";

/// Returned when no pair sums to the target.
pub const NO_PAIR: [i64; 2] = [-1, -1];

pub const SOLVER: Solver = Solver {
    name: KIND,
    parse_input,
    parse_expected,
    solve,
    compare,
};

pub fn parse_input(line: &str, mode: ArrayParseMode) -> HarnessResult<ProblemInput> {
    let mut fields = extract_fields(line, problems::info_for(ProblemId::TwoSum), mode)?;
    Ok(ProblemInput::TwoSum(TwoSumInput {
        nums: fields.take_array("nums")?,
        target: fields.take_int("target")?,
    }))
}

pub fn parse_expected(line: &str, mode: ArrayParseMode) -> HarnessResult<Expected> {
    extract_expected(line, problems::info_for(ProblemId::TwoSum), mode)
}

/// Return `[i, j]`, or [`NO_PAIR`] when nothing sums to `target`.
pub fn solve(input: &ProblemInput) -> HarnessResult<SolveOutput> {
    let ProblemInput::TwoSum(params) = input else {
        return Err(wrong_variant(KIND, input));
    };

    let indices = match algorithms::two_sum(&params.nums, params.target) {
        Some((i, j)) => vec![i as i64, j as i64],
        None => NO_PAIR.to_vec(),
    };
    Ok(SolveOutput::Array(indices))
}

pub fn compare(expected: &Expected, actual: &SolveOutput) -> Comparison {
    compare_exact(expected, actual)
}
