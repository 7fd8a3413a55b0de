//! Remove-element: compact out every `val`, report length and retained prefix.
//!
//! The `Output:` line holds the expected length, optionally followed by the expected prefix:
//!
//! ```text
//! Output: 2, nums = [2,2,_,_]
//! ```
//!
//! Lenient parsing drops the `_` placeholders, so the prefix above reads as `[2,2]`.

use leetrun_core::algorithms;
use leetrun_core::problems::{self, ProblemId};

use super::{Comparison, Detail, Expected, ProblemInput, RemoveElementInput, SolveOutput, wrong_variant};
use crate::config::ArrayParseMode;
use crate::errors::HarnessResult;
use crate::fixture::extract::{extract_expected, extract_fields, format_int_array};
use crate::registry::Solver;

const KIND: &str = "remove_element";

pub const SOLVER: Solver = Solver {
    name: KIND,
    parse_input,
    parse_expected,
    solve,
    compare,
};

pub fn parse_input(line: &str, mode: ArrayParseMode) -> HarnessResult<ProblemInput> {
    let mut fields = extract_fields(line, problems::info_for(ProblemId::RemoveElement), mode)?;
    Ok(ProblemInput::RemoveElement(RemoveElementInput {
        nums: fields.take_array("nums")?,
        val: fields.take_int("val")?,
    }))
}

/// A leading length is required; the bracketed prefix is optional.
pub fn parse_expected(line: &str, mode: ArrayParseMode) -> HarnessResult<Expected> {
    extract_expected(line, problems::info_for(ProblemId::RemoveElement), mode)
}

pub fn solve(input: &ProblemInput) -> HarnessResult<SolveOutput> {
    let ProblemInput::RemoveElement(params) = input else {
        return Err(wrong_variant(KIND, input));
    };

    let mut nums = params.nums.clone();
    let length = algorithms::remove_element(&mut nums, params.val);
    nums.truncate(length);
    Ok(SolveOutput::Compacted { length, array: nums })
}

/// Lengths must match; prefixes are compared only when the fixture states one.
pub fn compare(expected: &Expected, actual: &SolveOutput) -> Comparison {
    let (
        Expected::Compacted {
            length: expected_length,
            array: expected_array,
        },
        SolveOutput::Compacted {
            length: actual_length,
            array: actual_array,
        },
    ) = (expected, actual)
    else {
        return super::compare_exact(expected, actual);
    };

    let length_matched = expected_length == actual_length;
    let mut details = vec![Detail::new(
        Some("length"),
        Some(expected_length.to_string()),
        actual_length.to_string(),
        length_matched,
    )];
    if !length_matched {
        return Comparison::new(false, details);
    }

    let array_matched = match expected_array {
        Some(expected_array) => {
            let matched = expected_array == actual_array;
            details.push(Detail::new(
                Some("array"),
                Some(format_int_array(expected_array)),
                format_int_array(actual_array),
                matched,
            ));
            matched
        }
        None => {
            details.push(Detail::new(Some("array"), None, format_int_array(actual_array), true));
            true
        }
    };

    Comparison::new(array_matched, details)
}
